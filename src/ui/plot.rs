use std::collections::BTreeMap;

use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{Line, MarkerShape, Plot, PlotPoint, PlotPoints, Points, Text};

use crate::color::{bubble_color, from_hex, with_alpha, ACCENT_HEX};
use crate::data::filter::TrendSample;
use crate::data::model::KeywordPoint;

const TREND_SERIES: &str = "Sentiment Score";

/// Bubble radii are given in chart pixels; egui points come out larger.
const BUBBLE_SCALE: f32 = 0.8;

// ---------------------------------------------------------------------------
// Sentiment trend (line chart)
// ---------------------------------------------------------------------------

/// Split the trend into runs of consecutive non-gap samples.
///
/// Each run becomes its own line so gaps stay visible. x is the position
/// within the derived view.
pub fn gap_segments(trend: &[TrendSample]) -> Vec<Vec<[f64; 2]>> {
    let mut segments = Vec::new();
    let mut current: Vec<[f64; 2]> = Vec::new();
    for (i, sample) in trend.iter().enumerate() {
        match sample.value {
            Some(v) => current.push([i as f64, v]),
            None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
            None => {}
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Render the filtered monthly sentiment as a filled line with gaps.
pub fn trend_plot(ui: &mut Ui, trend: &[TrendSample]) {
    let accent = from_hex(ACCENT_HEX);
    let labels: Vec<String> = trend.iter().map(|s| s.label.clone()).collect();

    Plot::new("sentiment_trend")
        .height(260.0)
        .include_x(-0.25)
        .include_x(trend.len().saturating_sub(1) as f64 + 0.25)
        .include_y(0.0)
        .include_y(100.0)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .y_axis_formatter(|mark, _range| format!("{}%", mark.value))
        .label_formatter(|name, value| {
            if name.is_empty() {
                String::new()
            } else {
                format!("Sentiment: {:.0}%", value.y)
            }
        })
        .show(ui, |plot_ui| {
            for segment in gap_segments(trend) {
                plot_ui.line(
                    Line::new(PlotPoints::from(segment.clone()))
                        .name(TREND_SERIES)
                        .color(accent)
                        .fill(0.0)
                        .width(2.0),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from(segment))
                        .name(TREND_SERIES)
                        .color(accent)
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(3.5),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Keyword bubbles
// ---------------------------------------------------------------------------

/// Render the filtered keywords as bubbles sized by their radius.
pub fn keyword_plot(ui: &mut Ui, keywords: &[KeywordPoint]) {
    let counts: BTreeMap<String, u32> = keywords
        .iter()
        .map(|kw| (kw.keyword.clone(), kw.count))
        .collect();

    Plot::new("keyword_bubbles")
        .height(260.0)
        .include_x(-10.0)
        .include_x(110.0)
        .include_y(-10.0)
        .include_y(110.0)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .label_formatter(move |name, _value| match counts.get(name) {
            Some(count) => format!("{name}: {count} mentions"),
            None => String::new(),
        })
        .show(ui, |plot_ui| {
            for (i, kw) in keywords.iter().enumerate() {
                let color = bubble_color(i);
                plot_ui.points(
                    Points::new(PlotPoints::from(vec![[kw.x, kw.y]]))
                        .name(&kw.keyword)
                        .color(with_alpha(color, 200))
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(kw.radius as f32 * BUBBLE_SCALE),
                );
                plot_ui.text(Text::new(
                    PlotPoint::new(kw.x, kw.y),
                    RichText::new(&kw.keyword).color(Color32::WHITE).small(),
                ));
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(values: &[Option<f64>]) -> Vec<TrendSample> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| TrendSample {
                label: format!("m{i}"),
                value,
            })
            .collect()
    }

    #[test]
    fn segments_split_on_gaps() {
        let trend = samples(&[None, Some(59.0), Some(80.0), None, Some(56.0), None]);
        assert_eq!(
            gap_segments(&trend),
            vec![vec![[1.0, 59.0], [2.0, 80.0]], vec![[4.0, 56.0]]]
        );
    }

    #[test]
    fn no_gaps_single_segment() {
        let trend = samples(&[Some(1.0), Some(2.0), Some(3.0)]);
        assert_eq!(gap_segments(&trend).len(), 1);
        assert_eq!(gap_segments(&trend)[0].len(), 3);
    }

    #[test]
    fn all_gaps_no_segments() {
        assert!(gap_segments(&samples(&[None, None])).is_empty());
        assert!(gap_segments(&[]).is_empty());
    }
}
