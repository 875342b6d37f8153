use std::str::FromStr;

use eframe::egui::Color32;
use palette::Srgb;

use crate::data::model::SentimentBand;

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// Bubble colours, cycled by position in the filtered keyword list.
const BUBBLE_HEX: [&str; 7] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#FF99CC",
];

/// Accent used for the trend line and active buttons.
pub const ACCENT_HEX: &str = "#FF6384";

/// Parse a `#rrggbb` code; unparseable codes render grey.
pub fn from_hex(code: &str) -> Color32 {
    match Srgb::<u8>::from_str(code) {
        Ok(rgb) => Color32::from_rgb(rgb.red, rgb.green, rgb.blue),
        Err(e) => {
            log::warn!("Invalid colour '{code}': {e}");
            Color32::GRAY
        }
    }
}

/// Colour for the bubble at `index` of the current keyword view.
pub fn bubble_color(index: usize) -> Color32 {
    from_hex(BUBBLE_HEX[index % BUBBLE_HEX.len()])
}

/// Translucent variant used for area fills.
pub fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

/// Red / blue / teal by sentiment band.
pub fn band_color(band: SentimentBand) -> Color32 {
    match band {
        SentimentBand::Negative => from_hex("#FF6384"),
        SentimentBand::Neutral => from_hex("#36A2EB"),
        SentimentBand::Positive => from_hex("#4BC0C0"),
    }
}
