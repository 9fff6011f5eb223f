// src/feed/load.rs
use super::{aggregate, keep_available, parse, FeedSource, Product};
use crate::error::{FeedError, Result};
use crate::progress::Progress;

/// parse → filter → aggregate. Pure; an empty or header-only feed gives no products.
pub fn process(text: &str) -> Vec<Product> {
    let rows = parse(text);
    let parsed = rows.len();
    let kept = keep_available(rows);
    logf!("Feed: parsed {} row(s), {} available", parsed, kept.len());
    aggregate(&kept)
}

/// One attempt: fetch and fully process.
pub fn load_once(source: &dyn FeedSource) -> Result<Vec<Product>> {
    let text = source.fetch()?;
    Ok(process(&text))
}

/// Up to `max_attempts` sequential attempts, retried immediately.
/// The first success wins; nothing is returned from a failed attempt.
pub fn load_with_retry(
    source: &dyn FeedSource,
    max_attempts: u32,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<Product>> {
    let attempts = max_attempts.max(1);

    if let Some(p) = progress.as_deref_mut() {
        p.begin(attempts);
    }
    logf!("Feed: loading {} (max {} attempt(s))", source.describe(), attempts);

    let mut attempt = 0u32;
    loop {
        attempt += 1;
        if let Some(p) = progress.as_deref_mut() {
            p.attempt(attempt);
        }

        match load_once(source) {
            Ok(products) => {
                logf!("Feed: OK on attempt {}: {} product(s)", attempt, products.len());
                if let Some(p) = progress.as_deref_mut() {
                    p.finish(true);
                }
                return Ok(products);
            }
            Err(e) => {
                loge!("Feed: attempt {} failed: {}", attempt, e);
                if let Some(p) = progress.as_deref_mut() {
                    p.attempt_failed(attempt, &e.to_string());
                }
                if attempt >= attempts {
                    if let Some(p) = progress.as_deref_mut() {
                        p.finish(false);
                    }
                    return Err(FeedError::Exhausted {
                        attempts,
                        last: Box::new(e),
                    });
                }
            }
        }
    }
}
