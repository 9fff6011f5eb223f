// src/gui/components/product_list.rs
//
// Compact table view. Same data as the grid, one row per product.

use eframe::egui::{self, RichText, Sense};
use egui_extras::{Column, TableBuilder};

use crate::{
    core::image_url::is_placeholder,
    export::sizes_label,
    gui::{app::App, components::lightbox::Lightbox},
};

const ROW_H: f32 = 20.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let strings = app.strings();
    let visible = app.catalog.visible();
    let mut opened: Option<Lightbox> = None;

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
    }

    TableBuilder::new(ui)
        .id_salt("product_list")
        .striped(true)
        .min_scrolled_height(0.0)
        .column(Column::initial(280.0).resizable(true).clip(true).at_least(80.0))
        .column(Column::initial(120.0).resizable(true).clip(true))
        .column(Column::initial(70.0).resizable(true))
        .column(Column::remainder().clip(true))
        .header(24.0, |mut header| {
            for title in [strings.col_name, strings.col_sku, strings.col_price, strings.col_sizes] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_H, visible.len(), |mut row| {
                let p = &visible[row.index()];
                row.col(|ui| {
                    // name doubles as the image link
                    if is_placeholder(&p.image) {
                        ui.label(&p.name);
                    } else if ui
                        .add(egui::Label::new(RichText::new(&p.name).underline()).sense(Sense::click()))
                        .clicked()
                    {
                        opened = Some(Lightbox::new(&p.name, &p.image));
                    }
                });
                row.col(|ui| {
                    ui.label(&p.sku);
                });
                row.col(|ui| {
                    ui.label(&p.price);
                });
                row.col(|ui| {
                    ui.label(sizes_label(p));
                });
            });
        });

    if opened.is_some() {
        app.lightbox = opened;
    }
}
