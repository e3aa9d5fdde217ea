mod app;
mod color;
mod config;
mod data;
mod error;
mod pipeline;
mod state;
mod ui;

use app::ScoutApp;
use config::DashboardConfig;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = DashboardConfig::from_env();
    log::info!(
        "Starting dashboard (dataset: {}, top {})",
        config.dataset_path.display(),
        config.top_n
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Football Player Scouting Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(ScoutApp::new(config)))),
    )
}
