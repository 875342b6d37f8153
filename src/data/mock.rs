use rand::prelude::*;

use super::model::{Category, Dataset, KeywordPoint, MonthlyPoint};
use crate::config::DashboardConfig;

// ---------------------------------------------------------------------------
// Built-in sample data
// ---------------------------------------------------------------------------

/// Monthly sentiment, oldest first.
const MONTHLY: [(&str, f64); 6] = [
    ("Jan", 45.0),
    ("Feb", 59.0),
    ("Mar", 80.0),
    ("Apr", 81.0),
    ("May", 56.0),
    ("Jun", 23.0),
];

/// (keyword, mentions, category, bubble radius)
const KEYWORDS: [(&str, u32, Category, f64); 12] = [
    ("service", 150, Category::Service, 20.0),
    ("quality", 200, Category::Quality, 25.0),
    ("delivery", 250, Category::Service, 30.0),
    ("food", 300, Category::Food, 35.0),
    ("price", 350, Category::Price, 40.0),
    ("menu", 100, Category::Food, 15.0),
    ("staff", 120, Category::Service, 18.0),
    ("taste", 180, Category::Food, 22.0),
    ("value", 220, Category::Price, 28.0),
    ("freshness", 260, Category::Quality, 32.0),
    ("ambiance", 190, Category::Quality, 24.0),
    ("portion", 210, Category::Food, 26.0),
];

/// Bubble coordinates are drawn from `[0, COORD_SPAN)` on both axes.
pub const COORD_SPAN: f64 = 100.0;

impl Dataset {
    /// Build the sample dataset, placing keyword bubbles with `rng`.
    pub fn mock<R: Rng>(rng: &mut R) -> Self {
        let monthly = MONTHLY
            .iter()
            .map(|&(label, value)| MonthlyPoint::new(label, value))
            .collect();

        let keywords = KEYWORDS
            .iter()
            .map(|&(keyword, count, category, radius)| KeywordPoint {
                keyword: keyword.to_string(),
                count,
                category,
                x: rng.gen_range(0.0..COORD_SPAN),
                y: rng.gen_range(0.0..COORD_SPAN),
                radius,
            })
            .collect();

        Dataset { monthly, keywords }
    }

    /// Build the sample dataset using the configured seed, if any.
    pub fn from_config(config: &DashboardConfig) -> Self {
        let mut rng = match config.coordinate_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let dataset = Self::mock(&mut rng);
        log::info!(
            "Built sample dataset: {} months, {} keywords (seed {:?})",
            dataset.monthly.len(),
            dataset.keywords.len(),
            config.coordinate_seed
        );
        dataset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_has_fixed_shape() {
        let ds = Dataset::mock(&mut StdRng::seed_from_u64(1));
        assert_eq!(ds.monthly.len(), 6);
        assert_eq!(ds.keywords.len(), 12);

        let labels: Vec<&str> = ds.monthly.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
        assert_eq!(ds.current_sentiment(), Some(23.0));

        let price = &ds.keywords[4];
        assert_eq!(price.keyword, "price");
        assert_eq!(price.count, 350);
        assert_eq!(price.category, Category::Price);
        assert_eq!(price.radius, 40.0);
    }

    #[test]
    fn coordinates_stay_in_span() {
        let ds = Dataset::mock(&mut StdRng::seed_from_u64(99));
        for kw in &ds.keywords {
            assert!((0.0..COORD_SPAN).contains(&kw.x), "{} x={}", kw.keyword, kw.x);
            assert!((0.0..COORD_SPAN).contains(&kw.y), "{} y={}", kw.keyword, kw.y);
        }
    }

    #[test]
    fn same_seed_same_layout() {
        let config = DashboardConfig::default().with_seed(7);
        let a = Dataset::from_config(&config);
        let b = Dataset::from_config(&config);
        assert_eq!(a.keywords, b.keywords);
        assert_eq!(a.monthly, b.monthly);
    }

    #[test]
    fn max_count_matches_frequency_slider() {
        let ds = Dataset::mock(&mut StdRng::seed_from_u64(0));
        let max = ds.keywords.iter().map(|k| k.count).max();
        assert_eq!(max, Some(crate::config::MAX_KEYWORD_FREQUENCY));
    }
}
