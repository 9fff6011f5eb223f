// src/gui/components/status.rs
//
// Whole-panel states: loading, failed (with Retry) and empty result.

use eframe::egui::{self, RichText};

use crate::gui::{actions, app::{App, LoadState}};

pub fn loading(ui: &mut egui::Ui, app: &App) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.add(egui::Spinner::new().size(32.0));
        ui.add_space(8.0);
        ui.label(app.strings().loading);
        ui.label(RichText::new(app.status_text()).small().weak());
    });
}

pub fn failed(ui: &mut egui::Ui, app: &mut App) {
    let detail = match &app.load {
        LoadState::Failed(msg) => msg.clone(),
        _ => s!(),
    };
    let strings = app.strings();

    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.label(RichText::new(strings.error).color(ui.visuals().error_fg_color));
        if !detail.is_empty() {
            ui.label(RichText::new(detail).small().weak());
        }
        ui.add_space(8.0);
        if ui.button(strings.retry).clicked() {
            logf!("UI: Retry clicked");
            actions::reload(app, ui.ctx());
        }
    });
}

pub fn no_results(ui: &mut egui::Ui, app: &App) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.label(RichText::new(app.strings().no_results).size(16.0).weak());
    });
}
