// tests/retry.rs
mod common;

use std::cell::Cell;

use boas_shop::error::{FeedError, Result};
use boas_shop::feed::{load_once, load_with_retry, FeedSource, HttpFeed};
use boas_shop::progress::Progress;
use common::SAMPLE_FEED;

/// Fails the first `failures` fetches, then serves the sample feed.
struct FlakyFeed {
    failures: u32,
    calls: Cell<u32>,
}

impl FlakyFeed {
    fn new(failures: u32) -> Self {
        Self { failures, calls: Cell::new(0) }
    }
    fn calls(&self) -> u32 {
        self.calls.get()
    }
}

impl FeedSource for FlakyFeed {
    fn fetch(&self) -> Result<String> {
        let n = self.calls.get() + 1;
        self.calls.set(n);
        if n <= self.failures {
            Err(FeedError::Status { status: 503, url: "test://feed".into() })
        } else {
            Ok(SAMPLE_FEED.to_string())
        }
    }
}

#[derive(Default)]
struct Recorder {
    events: Vec<String>,
}

impl Progress for Recorder {
    fn begin(&mut self, max: u32) {
        self.events.push(format!("begin {max}"));
    }
    fn attempt(&mut self, n: u32) {
        self.events.push(format!("attempt {n}"));
    }
    fn attempt_failed(&mut self, n: u32, _error: &str) {
        self.events.push(format!("failed {n}"));
    }
    fn finish(&mut self, ok: bool) {
        self.events.push(format!("finish {ok}"));
    }
}

#[test]
fn late_success_equals_immediate_success() {
    let flaky = FlakyFeed::new(2);
    let steady = FlakyFeed::new(0);

    let late = load_with_retry(&flaky, 3, None).unwrap();
    let now = load_with_retry(&steady, 3, None).unwrap();

    assert_eq!(late, now);
    assert_eq!(flaky.calls(), 3);
    assert_eq!(steady.calls(), 1);
}

#[test]
fn no_attempts_after_success() {
    let feed = FlakyFeed::new(1);
    load_with_retry(&feed, 5, None).unwrap();
    assert_eq!(feed.calls(), 2);
}

#[test]
fn exhaustion_reports_attempts_and_last_error() {
    let feed = FlakyFeed::new(10);
    let err = load_with_retry(&feed, 3, None).unwrap_err();
    assert_eq!(feed.calls(), 3);
    match err {
        FeedError::Exhausted { attempts, last } => {
            assert_eq!(attempts, 3);
            assert!(matches!(*last, FeedError::Status { status: 503, .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn zero_attempts_still_tries_once() {
    let feed = FlakyFeed::new(0);
    assert!(load_with_retry(&feed, 0, None).is_ok());
    assert_eq!(feed.calls(), 1);
}

#[test]
fn progress_sees_each_attempt() {
    let feed = FlakyFeed::new(1);
    let mut rec = Recorder::default();
    load_with_retry(&feed, 3, Some(&mut rec as &mut dyn Progress)).unwrap();
    assert_eq!(
        rec.events,
        vec!["begin 3", "attempt 1", "failed 1", "attempt 2", "finish true"]
    );
}

#[test]
fn progress_sees_final_failure() {
    let feed = FlakyFeed::new(5);
    let mut rec = Recorder::default();
    let _ = load_with_retry(&feed, 2, Some(&mut rec as &mut dyn Progress));
    assert_eq!(
        rec.events,
        vec!["begin 2", "attempt 1", "failed 1", "attempt 2", "failed 2", "finish false"]
    );
}

#[test]
fn load_once_is_a_single_attempt() {
    let feed = FlakyFeed::new(1);
    assert!(load_once(&feed).is_err());
    assert_eq!(load_once(&feed).unwrap().len(), 3);
    assert_eq!(feed.calls(), 2);
}

#[test]
fn bad_feed_url_goes_through_the_retry_loop() {
    let feed = HttpFeed::new("not a url");
    match load_with_retry(&feed, 2, None) {
        Err(FeedError::Exhausted { attempts, last }) => {
            assert_eq!(attempts, 2);
            assert!(matches!(*last, FeedError::Http(_)), "{last}");
        }
        other => panic!("unexpected: {other:?}"),
    }
}
