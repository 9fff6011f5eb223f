// src/core/image_url.rs
use crate::config::consts::{DIRECT_VIEW_SUFFIX, PLACEHOLDER_IMAGE, SHARE_HOST, SHARE_VIEW_SUFFIX};

/// Empty → placeholder; Drive share link → direct-view link; anything else as-is.
pub fn resolve_image_url(url: &str) -> String {
    if url.is_empty() {
        return s!(PLACEHOLDER_IMAGE);
    }
    if url.contains(SHARE_HOST) {
        return url.replacen(SHARE_VIEW_SUFFIX, DIRECT_VIEW_SUFFIX, 1);
    }
    s!(url)
}

pub fn is_placeholder(url: &str) -> bool {
    url == PLACEHOLDER_IMAGE
}
