mod app;
mod axis;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::Context;
use app::CarScopeApp;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // The dataset is read once here and stays immutable for the process
    // lifetime; a missing or malformed file aborts startup.
    let table = data::loader::load_file(Path::new(data::loader::DEFAULT_DATA_PATH))
        .with_context(|| format!("loading dataset from {}", data::loader::DEFAULT_DATA_PATH))?;
    log::info!(
        "Loaded {} listings across {} brands",
        table.len(),
        table.brands.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Car Scope – Listing Explorer",
        options,
        Box::new(move |_cc| Ok(Box::new(CarScopeApp::new(table)))),
    )
    .map_err(|e| anyhow::anyhow!("running UI: {e}"))
}
