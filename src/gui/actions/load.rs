// src/gui/actions/load.rs
use std::sync::mpsc::{self, TryRecvError};
use std::thread;

use eframe::egui;

use crate::{
    error::Result as FeedResult,
    feed::{load_with_retry, HttpFeed, Product},
    gui::{app::{App, LoadState}, progress::GuiProgress},
    progress::Progress,
};

/// Kick off a background load (startup and Retry). No-op while one is running.
pub fn reload(app: &mut App, ctx: &egui::Context) {
    if app.running {
        logd!("Load: Clicked, but a load is already running");
        return;
    }

    let feed = app.options.feed.clone();
    logf!("Load: Begin url={} attempts={}", feed.url, feed.attempts());

    app.running = true;
    app.load = LoadState::Loading;
    app.set_status("Loading...");

    let (tx, rx) = mpsc::channel();
    app.rx = Some(rx);

    let status = app.status.clone();
    let ctx = ctx.clone();

    // → This is where the fetch happens ←
    thread::spawn(move || {
        let mut prog = GuiProgress::new(status, ctx.clone());
        let src = HttpFeed::new(feed.url);
        let res = load_with_retry(&src, feed.max_attempts, Some(&mut prog as &mut dyn Progress));
        let _ = tx.send(res);
        ctx.request_repaint();
    });
}

/// What a loader message means for the UI.
#[derive(Debug, PartialEq)]
enum Settled {
    Loaded(Vec<Product>),
    Failed(String),
}

/// `None` while the loader is still working.
fn settle(msg: Result<FeedResult<Vec<Product>>, TryRecvError>) -> Option<Settled> {
    match msg {
        Err(TryRecvError::Empty) => None,
        Ok(Ok(products)) => Some(Settled::Loaded(products)),
        Ok(Err(e)) => Some(Settled::Failed(e.to_string())),
        Err(TryRecvError::Disconnected) => Some(Settled::Failed(s!("Loader stopped unexpectedly"))),
    }
}

/// Pick up the loader's single outcome, if it has arrived.
pub fn poll_load(app: &mut App) {
    let Some(msg) = app.rx.as_ref().map(|rx| rx.try_recv()) else {
        return;
    };

    match settle(msg) {
        None => return,
        Some(Settled::Loaded(products)) => {
            logf!("Load: OK products={}", products.len());
            app.catalog.replace_products(products);
            app.load = LoadState::Ready;
            app.set_status("Ready");
        }
        Some(Settled::Failed(msg)) => {
            loge!("Load: Error: {}", msg);
            app.set_status(format!("Error: {msg}"));
            app.load = LoadState::Failed(msg);
        }
    }

    app.running = false;
    app.rx = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FeedError;

    #[test]
    fn pending_loader_settles_nothing() {
        assert_eq!(settle(Err(TryRecvError::Empty)), None);
    }

    #[test]
    fn dead_loader_is_a_failure() {
        assert_eq!(
            settle(Err(TryRecvError::Disconnected)),
            Some(Settled::Failed(s!("Loader stopped unexpectedly")))
        );
    }

    #[test]
    fn feed_errors_carry_their_message() {
        let err = FeedError::Exhausted {
            attempts: 3,
            last: Box::new(FeedError::Status { status: 503, url: s!("x") }),
        };
        match settle(Ok(Err(err))) {
            Some(Settled::Failed(msg)) => assert!(msg.contains("3 attempt(s)") && msg.contains("503"), "{msg}"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn products_arrive_as_loaded() {
        assert_eq!(settle(Ok(Ok(Vec::new()))), Some(Settled::Loaded(Vec::new())));
    }
}
