// src/gui/actions/copy.rs
use eframe::egui;
use crate::{export::{self, Delim}, gui::app::App};

/// Visible products → clipboard as TSV with localized headers.
pub fn copy(app: &App, ui_ctx: &egui::Context) {
    let visible = app.catalog.visible();

    if visible.is_empty() {
        app.set_status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let headers = export::headers(app.strings());
    let txt = match export::products_to_string(visible, Some(headers.as_slice()), Delim::Tsv) {
        Ok(txt) => txt,
        Err(e) => {
            loge!("Copy: Error: {}", e);
            app.set_status(format!("Copy error: {e}"));
            return;
        }
    };
    logf!("Copy: rows={}, lang={}", visible.len(), app.lang);

    ui_ctx.copy_text(txt);
    app.set_status(format!("Copied {} product(s) to clipboard", visible.len()));
}
