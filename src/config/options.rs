// src/config/options.rs
use super::consts::*;
use crate::i18n::Lang;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub feed: FeedOptions,
    /// Forced UI language; `None` means detect from the environment.
    pub lang: Option<Lang>,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            feed: FeedOptions::default(),
            lang: None,
        }
    }
}

impl AppOptions {
    pub fn resolved_lang(&self) -> Lang {
        self.lang.unwrap_or_else(Lang::detect)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedOptions {
    pub url: String,
    pub max_attempts: u32,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            url: s!(FEED_URL),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl FeedOptions {
    /// Attempts actually performed; zero still means one try.
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }
}
