// src/gui/components/header.rs
use eframe::egui::{self, Align, Layout, RichText};

use crate::{gui::app::App, i18n::Lang};

pub fn draw(ctx: &egui::Context, app: &mut App) {
    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading(RichText::new(app.strings().title).strong());

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                // right-to-left: last drawn ends up leftmost
                for lang in Lang::ALL.iter().rev() {
                    let label = lang.code().to_uppercase();
                    if ui.selectable_label(app.lang == *lang, label).clicked() {
                        app.set_lang(*lang);
                    }
                }
            });
        });
    });
}
