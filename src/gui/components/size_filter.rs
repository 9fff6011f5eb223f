// src/gui/components/size_filter.rs
//
// Size toggles (collapsible panel) and the chips for active selections.
// Clicks are collected first and applied after drawing, since the lists
// being drawn are borrowed from the catalog.

use eframe::egui::{self, RichText};

use crate::gui::app::App;

pub fn draw_panel(ui: &mut egui::Ui, app: &mut App) {
    if !app.gui.size_panel_open {
        return;
    }

    let mut toggled: Option<String> = None;
    ui.group(|ui| {
        ui.label(RichText::new(app.strings().available_sizes).strong());
        ui.horizontal_wrapped(|ui| {
            for size in app.catalog.size_options() {
                let on = app.catalog.view().is_size_selected(size);
                if ui.selectable_label(on, size.as_str()).clicked() {
                    toggled = Some(size.clone());
                }
            }
        });
    });

    if let Some(size) = toggled {
        app.catalog.toggle_size(&size);
    }
}

pub fn draw_chips(ui: &mut egui::Ui, app: &mut App) {
    if app.catalog.selected_sizes().is_empty() {
        return;
    }

    let mut removed: Option<String> = None;
    ui.horizontal_wrapped(|ui| {
        for size in app.catalog.selected_sizes() {
            if ui.small_button(format!("{size}  ✕")).clicked() {
                removed = Some(size.clone());
            }
        }
    });

    if let Some(size) = removed {
        logd!("UI: Chip removed {}", size);
        app.catalog.remove_size(&size);
    }
}
