// src/gui/progress.rs
use std::sync::{ Arc, Mutex };

use eframe::egui;

use crate::progress::Progress;

/// Writes load progress into the shared status line and wakes the UI.
pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    ctx: egui::Context,
    total: u32,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>, ctx: egui::Context) -> Self {
        Self { status, ctx, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
        self.ctx.request_repaint();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, max_attempts: u32) {
        self.total = max_attempts;
    }
    fn attempt(&mut self, n: u32) {
        self.set_status(format!("Fetching inventory (attempt {}/{})", n, self.total));
    }
    fn attempt_failed(&mut self, n: u32, error: &str) {
        self.set_status(format!("Attempt {}/{} failed: {}", n, self.total, error));
    }
    fn finish(&mut self, ok: bool) {
        self.set_status(if ok { "Ready" } else { "Load failed" });
    }
}
