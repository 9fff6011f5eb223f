// src/gui/components/footer.rs
use eframe::egui::{self, RichText};

use crate::gui::app::App;

pub fn draw(ctx: &egui::Context, app: &App) {
    let strings = app.strings();
    egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.label(RichText::new(strings.price_note).italics());
        ui.horizontal(|ui| {
            ui.label(RichText::new(strings.footer).small().weak());
            ui.separator();
            ui.label(RichText::new(app.status_text()).small().weak());
        });
        ui.add_space(2.0);
    });
}
