// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FeedError {
    /// Transport failure (DNS, TLS, connection reset, body read…)
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error! status: {status} ({url})")]
    Status { status: u16, url: String },

    /// Primary CSV reader failure. Recovered by the manual fallback.
    #[error("CSV error: {0}")]
    Parse(#[from] csv::Error),

    #[error("Giving up after {attempts} attempt(s): {last}")]
    Exhausted { attempts: u32, last: Box<FeedError> },
}

pub type Result<T> = std::result::Result<T, FeedError>;
