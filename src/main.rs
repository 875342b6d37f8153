use eframe::egui;
use sentiment_dashboard::app::DashboardApp;
use sentiment_dashboard::config::DashboardConfig;

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::default();
    log::info!("Starting {}", config.title);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(DashboardApp::new(&config)))),
    )
}
