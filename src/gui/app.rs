// src/gui/app.rs
use std::{
    error::Error,
    sync::{mpsc::Receiver, Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{
        options::AppOptions,
        state::{GuiState, LayoutMode},
    },
    error::Result as FeedResult,
    feed::Product,
    i18n::{Lang, Strings},
    view::Catalog,
};

use super::{
    actions,
    components::{self, lightbox::Lightbox},
    images::ImageLoader,
};

pub fn run(native: eframe::NativeOptions, options: AppOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Boas Shop",
        native,
        Box::new(move |cc| Ok(Box::new(App::new(&cc.egui_ctx, options)))),
    )?;
    Ok(())
}

/// Where the inventory stands. Only `Ready` shows the catalog.
pub enum LoadState {
    Loading,
    Failed(String),
    Ready,
}

pub struct App {
    pub options: AppOptions,
    pub gui: GuiState,
    pub lang: Lang,

    // products + view state (UI thread only)
    pub catalog: Catalog,
    pub load: LoadState,

    // search box text; pushed into the catalog on change
    pub search_text: String,

    // status/progress (loader writes here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub(super) rx: Option<Receiver<FeedResult<Vec<Product>>>>,

    pub images: ImageLoader,
    pub lightbox: Option<Lightbox>,
}

impl App {
    pub fn new(ctx: &egui::Context, options: AppOptions) -> Self {
        let lang = options.resolved_lang();
        logf!("Init: lang={}, feed={}", lang, options.feed.url);

        let mut app = Self {
            options,
            gui: GuiState::default(),
            lang,
            catalog: Catalog::default(),
            load: LoadState::Loading,
            search_text: s!(),
            status: Arc::new(Mutex::new(s!("Idle"))),
            running: false,
            rx: None,
            images: ImageLoader::new(ctx),
            lightbox: None,
        };
        actions::reload(&mut app, ctx);
        app
    }

    #[inline]
    pub fn strings(&self) -> &'static Strings {
        self.lang.strings()
    }

    #[inline]
    pub fn set_status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }

    pub fn set_lang(&mut self, lang: Lang) {
        if self.lang != lang {
            logf!("UI: Language → {}", lang);
            self.lang = lang;
        }
    }

    /// Clear search box and view state together.
    pub fn reset_filters(&mut self) {
        self.search_text.clear();
        self.catalog.reset();
        logf!("UI: Filters reset");
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll_load(self);
        self.images.poll(ctx);

        components::header::draw(ctx, self);
        components::footer::draw(ctx, self);

        egui::CentralPanel::default().show(ctx, |ui| match self.load {
            LoadState::Loading => components::status::loading(ui, self),
            LoadState::Failed(_) => components::status::failed(ui, self),
            LoadState::Ready => {
                components::toolbar::draw(ui, self);
                components::size_filter::draw_panel(ui, self);
                components::size_filter::draw_chips(ui, self);

                ui.separator();

                if self.catalog.visible().is_empty() {
                    components::status::no_results(ui, self);
                } else {
                    match self.gui.layout {
                        LayoutMode::Grid => components::product_grid::draw(ui, self),
                        LayoutMode::List => components::product_list::draw(ui, self),
                    }
                }
            }
        });

        components::lightbox::draw(ctx, self);
    }
}
