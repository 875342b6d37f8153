// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Upper bound of the sentiment threshold slider (scores are percentages).
pub const MAX_SENTIMENT_THRESHOLD: u32 = 100;

/// Upper bound of the keyword frequency slider (highest mock count).
pub const MAX_KEYWORD_FREQUENCY: u32 = 350;

/// Startup settings. Nothing here is persisted; every run starts from these.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    /// Seed for keyword bubble placement (None = random each run).
    pub coordinate_seed: Option<u64>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "Sentiment Dashboard".to_string(),
            window_size: [1280.0, 820.0],
            min_window_size: [720.0, 480.0],
            coordinate_seed: None,
        }
    }
}

impl DashboardConfig {
    /// Fix bubble placement so repeated runs draw the same layout.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.coordinate_seed = Some(seed);
        self
    }
}
