use chrono::NaiveDate;
use eframe::egui::{self, ScrollArea, Ui};

use crate::config::DashboardConfig;
use crate::data::model::Dataset;
use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashboardApp {
    pub state: AppState,
    /// Reference date for the period calendar windows.
    today: NaiveDate,
}

impl DashboardApp {
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            state: AppState::new(Dataset::from_config(config)),
            today: chrono::Local::now().date_naive(),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: the two cards side by side ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(2, |columns: &mut [Ui]| {
                if let [left, right] = columns {
                    card(left, "trend_card", |ui| {
                        panels::trend_card(ui, &mut self.state, self.today)
                    });
                    card(right, "keyword_card", |ui| {
                        panels::keyword_card(ui, &mut self.state)
                    });
                }
            });
        });
    }
}

fn card(ui: &mut Ui, id: &str, add_contents: impl FnOnce(&mut Ui)) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ScrollArea::vertical()
            .id_salt(id)
            .auto_shrink([false, false])
            .show(ui, add_contents);
    });
}
