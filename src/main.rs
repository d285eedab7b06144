#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Context;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use chronoslider::app::ChronosliderApp;
use chronoslider::io::{default_options_path, load_options};
use chronoslider::model::TimelineOptions;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let options_path = match default_options_path() {
        Ok(path) => Some(path),
        Err(e) => {
            warn!("{e}; options will not be persisted");
            None
        }
    };
    let options = match options_path.as_deref().map(load_options) {
        Some(Ok(options)) => options,
        Some(Err(e)) => {
            warn!("ignoring options file: {e}");
            TimelineOptions::default()
        }
        None => TimelineOptions::default(),
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 240.0])
            .with_min_inner_size([480.0, 200.0])
            .with_title("Chronoslider"),
        ..Default::default()
    };

    eframe::run_native(
        "Chronoslider",
        native_options,
        Box::new(move |cc| Ok(Box::new(ChronosliderApp::new(cc, options, options_path)?))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
    .context("failed to run the timeline window")
}
