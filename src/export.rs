use anyhow::{Context, Result};

use crate::data::filter::DerivedViews;
use crate::data::model::KeywordPoint;

// ---------------------------------------------------------------------------
// Clipboard export of the current views
// ---------------------------------------------------------------------------

/// Pretty-printed JSON of both views. Gaps are written as `null`.
pub fn views_to_json(views: &DerivedViews) -> Result<String> {
    serde_json::to_string_pretty(views).context("serializing views to JSON")
}

/// CSV of the surviving keywords, one row each, with a header.
pub fn keywords_to_csv(keywords: &[KeywordPoint]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for (i, kw) in keywords.iter().enumerate() {
        writer
            .serialize(kw)
            .with_context(|| format!("writing keyword row {i}"))?;
    }
    if keywords.is_empty() {
        writer
            .write_record(["keyword", "count", "category", "x", "y", "radius"])
            .context("writing CSV header")?;
    }
    let bytes = writer.into_inner().context("flushing CSV writer")?;
    String::from_utf8(bytes).context("CSV output is not UTF-8")
}
