// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use boas_shop::{
    config::{options::AppOptions, state::GuiState},
    gui,
    log::{self as logger, LevelFilter},
};
use eframe::egui::ViewportBuilder;

fn main() {
    if let Err(e) = logger::init(LevelFilter::Info, false) {
        eprintln!("Logger init failed: {}", e);
    }

    let state = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Boas Shop")
            .with_inner_size([state.window_w as f32, state.window_h as f32])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, AppOptions::default()) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
