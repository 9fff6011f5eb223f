// src/gui/images.rs
//
// Thumbnail cache. A fixed pool of workers pulls URLs off a shared queue,
// downloads and decodes them, and sends pixels back. Textures are created
// on the UI thread in `poll`.

use std::collections::HashMap;
use std::error::Error;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;

use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};
use reqwest::blocking::Client;

use crate::config::consts::{IMAGE_WORKERS, MAX_IMAGE_SIDE};
use crate::feed::net;

pub enum Thumb {
    Pending,
    Ready(TextureHandle),
    Failed,
}

type Decoded = (String, Option<ColorImage>);

pub struct ImageLoader {
    jobs: Sender<String>,
    results: Receiver<Decoded>,
    cache: HashMap<String, Thumb>,
}

impl ImageLoader {
    pub fn new(ctx: &egui::Context) -> Self {
        let (job_tx, job_rx) = mpsc::channel::<String>();
        let (res_tx, res_rx) = mpsc::channel::<Decoded>();
        let job_rx = Arc::new(Mutex::new(job_rx));

        let client = match net::client() {
            Ok(c) => Some(c),
            Err(e) => {
                loge!("Images: HTTP client unavailable: {}", e);
                None
            }
        };

        for i in 0..IMAGE_WORKERS {
            let jobs = Arc::clone(&job_rx);
            let out = res_tx.clone();
            let client = client.clone();
            let ctx = ctx.clone();
            let spawned = thread::Builder::new()
                .name(format!("thumb-{i}"))
                .spawn(move || worker(jobs, out, client, ctx));
            if let Err(e) = spawned {
                loge!("Images: failed to start worker {}: {}", i, e);
            }
        }
        logd!("Images: {} worker(s) started", IMAGE_WORKERS);

        Self {
            jobs: job_tx,
            results: res_rx,
            cache: HashMap::new(),
        }
    }

    /// Cached thumbnail for `url`; queues a download on first sight.
    pub fn get(&mut self, url: &str) -> &Thumb {
        let jobs = &self.jobs;
        self.cache.entry(s!(url)).or_insert_with(|| match jobs.send(s!(url)) {
            Ok(()) => Thumb::Pending,
            Err(_) => Thumb::Failed,
        })
    }

    /// Turn finished downloads into textures. Call once per frame.
    pub fn poll(&mut self, ctx: &egui::Context) {
        while let Ok((url, img)) = self.results.try_recv() {
            let thumb = match img {
                Some(img) => Thumb::Ready(ctx.load_texture(url.clone(), img, TextureOptions::LINEAR)),
                None => Thumb::Failed,
            };
            self.cache.insert(url, thumb);
        }
    }
}

fn worker(
    jobs: Arc<Mutex<Receiver<String>>>,
    out: Sender<Decoded>,
    client: Option<Client>,
    ctx: egui::Context,
) {
    loop {
        let url = {
            let Ok(rx) = jobs.lock() else { return };
            match rx.recv() {
                Ok(url) => url,
                Err(_) => return, // loader dropped
            }
        };

        let img = match client.as_ref().map(|c| fetch(c, &url)) {
            Some(Ok(img)) => Some(img),
            Some(Err(e)) => {
                logw!("Images: {} → {}", url, e);
                None
            }
            None => None,
        };

        if out.send((url, img)).is_err() {
            return;
        }
        ctx.request_repaint();
    }
}

fn fetch(client: &Client, url: &str) -> Result<ColorImage, Box<dyn Error>> {
    let bytes = net::get_bytes(client, url)?;
    Ok(decode(&bytes)?)
}

/// Decode PNG/JPEG and shrink anything larger than MAX_IMAGE_SIDE.
pub fn decode(bytes: &[u8]) -> Result<ColorImage, image::ImageError> {
    let mut img = image::load_from_memory(bytes)?;
    if img.width() > MAX_IMAGE_SIDE || img.height() > MAX_IMAGE_SIDE {
        img = img.thumbnail(MAX_IMAGE_SIDE, MAX_IMAGE_SIDE);
    }
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}
