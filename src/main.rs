#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use shape_paint::{PaintApp, PaintConfig};

/// Environment variable naming an optional JSON config file
const CONFIG_ENV: &str = "SHAPE_PAINT_CONFIG";

fn load_config() -> PaintConfig {
    let Some(path) = std::env::var_os(CONFIG_ENV) else {
        return PaintConfig::default();
    };
    match PaintConfig::load(&path) {
        Ok(config) => {
            log::info!("Loaded config from {}", path.to_string_lossy());
            config
        }
        Err(err) => {
            log::error!("{}; falling back to defaults", err);
            PaintConfig::default()
        }
    }
}

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = load_config();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Shape Paint",
        native_options,
        Box::new(|cc| Ok(Box::new(PaintApp::new(cc, config)))),
    )
}
