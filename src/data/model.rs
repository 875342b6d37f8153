use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Category – keyword grouping
// ---------------------------------------------------------------------------

/// The business area a keyword belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Service,
    Food,
    Price,
    Quality,
}

impl Category {
    /// All categories in the order the filter buttons show them.
    pub const ALL: [Category; 4] = [
        Category::Service,
        Category::Food,
        Category::Price,
        Category::Quality,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Service => "service",
            Category::Food => "food",
            Category::Price => "price",
            Category::Quality => "quality",
        }
    }

    /// Capitalised name for buttons and table cells.
    pub fn title(self) -> &'static str {
        match self {
            Category::Service => "Service",
            Category::Food => "Food",
            Category::Price => "Price",
            Category::Quality => "Quality",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MonthlyPoint – one sample of the sentiment trend
// ---------------------------------------------------------------------------

/// Average sentiment score (0–100) for one month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyPoint {
    pub label: String,
    pub value: f64,
}

impl MonthlyPoint {
    pub fn new(label: &str, value: f64) -> Self {
        Self {
            label: label.to_string(),
            value,
        }
    }
}

// ---------------------------------------------------------------------------
// KeywordPoint – one bubble of the keyword chart
// ---------------------------------------------------------------------------

/// A keyword with its mention count and where its bubble is drawn.
///
/// `x` / `y` carry no meaning beyond placement on the bubble chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordPoint {
    pub keyword: String,
    pub count: u32,
    pub category: Category,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

// ---------------------------------------------------------------------------
// SentimentBand – coarse classification of a score
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentBand {
    Negative,
    Neutral,
    Positive,
}

impl SentimentBand {
    /// Scores below 33 are negative, below 66 neutral, the rest positive.
    pub fn from_score(score: f64) -> Self {
        if score < 33.0 {
            SentimentBand::Negative
        } else if score < 66.0 {
            SentimentBand::Neutral
        } else {
            SentimentBand::Positive
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SentimentBand::Negative => "Negative",
            SentimentBand::Neutral => "Neutral",
            SentimentBand::Positive => "Positive",
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the two source collections
// ---------------------------------------------------------------------------

/// Source data for the dashboard. Never mutated after construction.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Chronological monthly sentiment, oldest first.
    pub monthly: Vec<MonthlyPoint>,
    pub keywords: Vec<KeywordPoint>,
}

impl Dataset {
    /// Score of the most recent month, if the series is non-empty.
    pub fn current_sentiment(&self) -> Option<f64> {
        self.monthly.last().map(|p| p.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_boundaries() {
        assert_eq!(SentimentBand::from_score(0.0), SentimentBand::Negative);
        assert_eq!(SentimentBand::from_score(32.9), SentimentBand::Negative);
        assert_eq!(SentimentBand::from_score(33.0), SentimentBand::Neutral);
        assert_eq!(SentimentBand::from_score(65.9), SentimentBand::Neutral);
        assert_eq!(SentimentBand::from_score(66.0), SentimentBand::Positive);
        assert_eq!(SentimentBand::from_score(100.0), SentimentBand::Positive);
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Quality).unwrap();
        assert_eq!(json, "\"quality\"");
        assert_eq!(Category::Food.to_string(), "food");
    }

    #[test]
    fn current_sentiment_is_last_month() {
        let ds = Dataset {
            monthly: vec![MonthlyPoint::new("Jan", 10.0), MonthlyPoint::new("Feb", 42.0)],
            keywords: Vec::new(),
        };
        assert_eq!(ds.current_sentiment(), Some(42.0));

        let empty = Dataset {
            monthly: Vec::new(),
            keywords: Vec::new(),
        };
        assert_eq!(empty.current_sentiment(), None);
    }
}
