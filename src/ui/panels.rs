use chrono::NaiveDate;
use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::{band_color, from_hex, ACCENT_HEX};
use crate::config::{MAX_KEYWORD_FREQUENCY, MAX_SENTIMENT_THRESHOLD};
use crate::data::filter::CategoryChoice;
use crate::data::model::{Category, SentimentBand};
use crate::data::period::{date_window, Period};
use crate::export::{keywords_to_csv, views_to_json};
use crate::state::{Action, AppState};
use crate::ui::plot;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the toolbar: counts, reset, and clipboard export.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("View", |ui: &mut Ui| {
            if ui.button("Copy views as JSON").clicked() {
                let result = views_to_json(state.views());
                copy_export(ui, state, "JSON", result);
                ui.close_menu();
            }
            if ui.button("Copy keywords as CSV").clicked() {
                let result = keywords_to_csv(&state.views().keywords);
                copy_export(ui, state, "CSV", result);
                ui.close_menu();
            }
            ui.separator();
            if ui.button("Reset filters").clicked() {
                state.dispatch(Action::Reset);
                state.status_message = None;
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} of {} keywords shown",
            state.views().keywords.len(),
            state.dataset.keywords.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(msg);
        }
    });
}

fn copy_export(ui: &Ui, state: &mut AppState, format: &str, result: anyhow::Result<String>) {
    match result {
        Ok(text) => {
            ui.ctx().copy_text(text);
            log::info!("Copied current views to clipboard as {format}");
            state.status_message = Some(format!("Copied {format} to clipboard"));
        }
        Err(e) => {
            log::error!("Failed to export {format}: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

// ---------------------------------------------------------------------------
// Sentiment trend card
// ---------------------------------------------------------------------------

/// Trend chart, current-month readout, period buttons and threshold slider.
pub fn trend_card(ui: &mut Ui, state: &mut AppState, today: NaiveDate) {
    ui.heading("Monthly Sentiment Trend");
    plot::trend_plot(ui, &state.views().trend);

    if let Some(current) = state.dataset.current_sentiment() {
        let band = SentimentBand::from_score(current);
        ui.vertical_centered(|ui: &mut Ui| {
            ui.label(
                RichText::new(format!("{current:.0}%"))
                    .size(28.0)
                    .strong()
                    .color(band_color(band)),
            );
            ui.label(format!("Current Month Sentiment ({})", band.label()));
        });
    }
    ui.add_space(8.0);

    let selection = state.selection().clone();

    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Time Period");
        for period in Period::ALL {
            if toggle_button(ui, selection.period == period, period.button_label()).clicked() {
                state.dispatch(Action::SetPeriod(period));
            }
        }
    });
    let (start, end) = date_window(selection.period, today);
    ui.label(
        RichText::new(format!("{} – {}", start.format("%b %d, %Y"), end.format("%b %d, %Y")))
            .weak(),
    );

    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Sentiment Threshold");
        let mut threshold = selection.sentiment_threshold;
        let slider = egui::Slider::new(&mut threshold, 0..=MAX_SENTIMENT_THRESHOLD).suffix("%");
        if ui.add(slider).changed() {
            state.dispatch(Action::SetSentimentThreshold(threshold));
        }
    });
}

// ---------------------------------------------------------------------------
// Keyword card
// ---------------------------------------------------------------------------

/// Bubble chart, frequency slider, category buttons and keyword table.
pub fn keyword_card(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Keyword Analysis");
    plot::keyword_plot(ui, &state.views().keywords);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new("Size indicates mention frequency").weak());
    });
    ui.add_space(8.0);

    let selection = state.selection().clone();

    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Minimum Frequency");
        let mut frequency = selection.keyword_frequency;
        if ui
            .add(egui::Slider::new(&mut frequency, 0..=MAX_KEYWORD_FREQUENCY))
            .changed()
        {
            state.dispatch(Action::SetKeywordFrequency(frequency));
        }
    });

    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Categories");
        let choices = std::iter::once((CategoryChoice::All, "All")).chain(
            Category::ALL
                .iter()
                .map(|&c| (CategoryChoice::Only(c), c.title())),
        );
        for (choice, label) in choices {
            let active = selection.categories.is_active(choice);
            if toggle_button(ui, active, label).clicked() {
                state.dispatch(Action::SelectCategory(choice));
            }
        }
    });

    ui.add_space(8.0);
    keyword_table(ui, state);
}

fn keyword_table(ui: &mut Ui, state: &AppState) {
    let keywords = &state.views().keywords;
    if keywords.is_empty() {
        ui.label(RichText::new("No keywords match the current filters.").weak());
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(100.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Keyword");
            });
            header.col(|ui| {
                ui.strong("Mentions");
            });
            header.col(|ui| {
                ui.strong("Category");
            });
        })
        .body(|mut body| {
            for kw in keywords {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(&kw.keyword);
                    });
                    row.col(|ui| {
                        ui.label(kw.count.to_string());
                    });
                    row.col(|ui| {
                        ui.label(kw.category.title());
                    });
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// A button drawn in the accent colour while active.
fn toggle_button(ui: &mut Ui, active: bool, label: &str) -> egui::Response {
    let button = if active {
        egui::Button::new(RichText::new(label).color(Color32::WHITE)).fill(from_hex(ACCENT_HEX))
    } else {
        egui::Button::new(label)
    };
    ui.add(button)
}
