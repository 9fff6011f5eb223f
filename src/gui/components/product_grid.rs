// src/gui/components/product_grid.rs
//
// Card grid: thumbnail, name, SKU, price and one badge per stocked size.
// Clicking a loaded thumbnail opens the lightbox.

use eframe::egui::{self, load::SizedTexture, RichText, Sense, Vec2};

use crate::{
    core::{image_url::is_placeholder, sizes_match},
    feed::Product,
    gui::{
        app::App,
        components::lightbox::Lightbox,
        images::{ImageLoader, Thumb},
    },
    i18n::Strings,
};

const CARD_W: f32 = 220.0;
const THUMB_H: f32 = 160.0;
const GAP: f32 = 12.0;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let App { catalog, images, lang, lightbox, .. } = app;
    let strings = lang.strings();
    let selected = catalog.selected_sizes();

    let cols = ((ui.available_width() + GAP) / (CARD_W + GAP)).floor().max(1.0) as usize;
    let mut opened: Option<Lightbox> = None;

    egui::ScrollArea::vertical()
        .id_salt("product_grid")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            egui::Grid::new("products")
                .num_columns(cols)
                .spacing([GAP, GAP])
                .show(ui, |ui| {
                    for (i, p) in catalog.visible().iter().enumerate() {
                        if let Some(lb) = card(ui, p, images, strings, selected) {
                            opened = Some(lb);
                        }
                        if (i + 1) % cols == 0 {
                            ui.end_row();
                        }
                    }
                });
        });

    if let Some(lb) = opened {
        logd!("UI: Lightbox open {}", lb.url);
        *lightbox = Some(lb);
    }
}

fn card(
    ui: &mut egui::Ui,
    p: &Product,
    images: &mut ImageLoader,
    strings: &Strings,
    selected: &[String],
) -> Option<Lightbox> {
    let mut opened = None;

    ui.group(|ui| {
        ui.set_width(CARD_W);
        ui.vertical(|ui| {
            opened = thumbnail(ui, p, images, strings);

            ui.add_space(4.0);
            ui.label(RichText::new(&p.name).strong());
            ui.label(RichText::new(&p.sku).small().weak());
            ui.label(RichText::new(&p.price).size(16.0));

            ui.horizontal_wrapped(|ui| {
                for e in &p.sizes {
                    let hit = selected.iter().any(|s| sizes_match(s, &e.size));
                    let bg = if hit {
                        ui.visuals().selection.bg_fill
                    } else {
                        ui.visuals().faint_bg_color
                    };
                    ui.label(
                        RichText::new(format!("{} ({})", e.size, e.quantity))
                            .small()
                            .background_color(bg),
                    );
                }
            });
        });
    });

    opened
}

fn thumbnail(
    ui: &mut egui::Ui,
    p: &Product,
    images: &mut ImageLoader,
    strings: &Strings,
) -> Option<Lightbox> {
    let size = Vec2::new(CARD_W, THUMB_H);

    if is_placeholder(&p.image) {
        placeholder(ui, size, strings.no_image);
        return None;
    }

    match images.get(&p.image) {
        Thumb::Ready(tex) => {
            let resp = ui.add(
                egui::Image::from_texture(SizedTexture::from_handle(tex))
                    .fit_to_exact_size(size)
                    .sense(Sense::click()),
            );
            resp.clicked().then(|| Lightbox::new(&p.name, &p.image))
        }
        Thumb::Pending => {
            ui.allocate_ui(size, |ui| {
                ui.centered_and_justified(|ui| ui.spinner());
            });
            None
        }
        Thumb::Failed => {
            placeholder(ui, size, strings.image_unavailable);
            None
        }
    }
}

fn placeholder(ui: &mut egui::Ui, size: Vec2, text: &str) {
    ui.allocate_ui(size, |ui| {
        ui.centered_and_justified(|ui| ui.label(RichText::new(text).weak()));
    });
}
