// src/gui/components/lightbox.rs
//
// Enlarged product image. Click toggles zoom, drag pans while zoomed,
// Escape or the close button dismisses.

use eframe::egui::{self, pos2, Color32, Rect, Sense, Vec2};

use crate::gui::{app::App, images::Thumb};

const ZOOM: f32 = 2.0;

pub struct Lightbox {
    pub title: String,
    pub url: String,
    zoomed: bool,
    offset: Vec2,
}

impl Lightbox {
    pub fn new(title: &str, url: &str) -> Self {
        Self {
            title: s!(title),
            url: s!(url),
            zoomed: false,
            offset: Vec2::ZERO,
        }
    }

    pub fn is_zoomed(&self) -> bool {
        self.zoomed
    }

    pub fn toggle_zoom(&mut self) {
        self.zoomed = !self.zoomed;
        self.offset = Vec2::ZERO;
    }

    pub fn pan(&mut self, delta: Vec2) {
        if self.zoomed {
            self.offset += delta;
        }
    }
}

pub fn draw(ctx: &egui::Context, app: &mut App) {
    let App { lightbox, images, lang, .. } = app;
    let Some(lb) = lightbox.as_mut() else { return };
    let strings = lang.strings();

    let mut open = !ctx.input(|i| i.key_pressed(egui::Key::Escape));

    egui::Window::new(lb.title.clone())
        .id(egui::Id::new("lightbox"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_size([760.0, 560.0])
        .show(ctx, |ui| match images.get(&lb.url) {
            Thumb::Ready(tex) => {
                let avail = ui.available_size().max(Vec2::splat(64.0));
                let (rect, resp) = ui.allocate_exact_size(avail, Sense::click_and_drag());

                if resp.clicked() {
                    lb.toggle_zoom();
                }
                if resp.dragged() {
                    lb.pan(resp.drag_delta());
                }

                let tex_size = tex.size_vec2();
                let fit = (rect.width() / tex_size.x).min(rect.height() / tex_size.y);
                let scale = if lb.is_zoomed() { fit * ZOOM } else { fit };
                let img_rect = Rect::from_center_size(rect.center() + lb.offset, tex_size * scale);
                let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));

                ui.painter()
                    .with_clip_rect(rect)
                    .image(tex.id(), img_rect, uv, Color32::WHITE);

                let cursor = if lb.is_zoomed() {
                    egui::CursorIcon::Grab
                } else {
                    egui::CursorIcon::ZoomIn
                };
                resp.on_hover_cursor(cursor);
            }
            Thumb::Pending => {
                ui.centered_and_justified(|ui| ui.spinner());
            }
            Thumb::Failed => {
                ui.centered_and_justified(|ui| ui.label(strings.image_unavailable));
            }
        });

    if !open {
        logd!("UI: Lightbox closed");
        *lightbox = None;
    }
}
