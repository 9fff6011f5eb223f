// src/feed/net.rs
// Blocking HTTPS GET. One request per call; retries live in feed::load.

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::error::{FeedError, Result};

/// Where the raw feed text comes from. The GUI/CLI use `HttpFeed`;
/// tests and benches plug in canned text.
pub trait FeedSource {
    fn fetch(&self) -> Result<String>;

    /// Short label for logs.
    fn describe(&self) -> String {
        s!("feed")
    }
}

pub struct HttpFeed {
    url: String,
    /// Built up front when possible; otherwise each attempt tries again.
    client: Option<Client>,
}

impl HttpFeed {
    pub fn new(url: impl Into<String>) -> Self {
        let client = match client() {
            Ok(c) => Some(c),
            Err(e) => {
                logw!("Net: client setup failed, retrying per attempt: {}", e);
                None
            }
        };
        Self { url: url.into(), client }
    }
}

impl FeedSource for HttpFeed {
    fn fetch(&self) -> Result<String> {
        let client = match &self.client {
            Some(c) => c.clone(),
            None => client()?,
        };
        logd!("Net: GET {}", self.url);
        let resp = client.get(&self.url).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = resp.text()?;
        logd!("Net: {} → {} byte(s)", status, body.len());
        Ok(body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// Shared client settings for feed and thumbnail requests.
pub fn client() -> Result<Client> {
    Ok(Client::builder().user_agent(USER_AGENT).build()?)
}

/// GET raw bytes (thumbnails). Same status policy as the feed.
pub fn get_bytes(client: &Client, url: &str) -> Result<Vec<u8>> {
    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FeedError::Status {
            status: status.as_u16(),
            url: s!(url),
        });
    }
    Ok(resp.bytes()?.to_vec())
}
