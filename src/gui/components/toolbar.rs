// src/gui/components/toolbar.rs
use eframe::egui::{self, Align, Layout};

use crate::{
    config::state::LayoutMode,
    gui::{actions, app::App},
    view::SortMode,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let strings = app.strings();

    ui.horizontal(|ui| {
        // --- Search ---
        let resp = ui.add(
            egui::TextEdit::singleline(&mut app.search_text)
                .hint_text(strings.search_placeholder)
                .desired_width(240.0),
        );
        if resp.changed() {
            app.catalog.set_search(app.search_text.clone());
        }

        // --- Sort ---
        let current = app.catalog.view().sort_mode;
        let mut picked = current;
        egui::ComboBox::from_id_salt("sort_mode")
            .selected_text(strings.sort_label(current))
            .show_ui(ui, |ui| {
                for mode in SortMode::ALL {
                    ui.selectable_value(&mut picked, mode, strings.sort_label(mode));
                }
            });
        if picked != current {
            logf!("UI: Sort → {}", picked.key());
            app.catalog.set_sort(picked);
        }

        // --- Size panel ---
        let n = app.catalog.selected_sizes().len();
        let label = if n == 0 {
            s!(strings.filter_size)
        } else {
            format!("{} ({})", strings.filter_size, n)
        };
        if ui.selectable_label(app.gui.size_panel_open, label).clicked() {
            app.gui.size_panel_open = !app.gui.size_panel_open;
        }

        let can_reset = !app.catalog.view().is_default();
        if ui.add_enabled(can_reset, egui::Button::new(strings.reset)).clicked() {
            app.reset_filters();
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.selectable_value(&mut app.gui.layout, LayoutMode::List, strings.list);
            ui.selectable_value(&mut app.gui.layout, LayoutMode::Grid, strings.grid);
            ui.separator();
            if ui.button(strings.copy).clicked() {
                actions::copy(app, ui.ctx());
            }
        });
    });
}
