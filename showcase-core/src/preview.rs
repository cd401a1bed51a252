// Screenshot-service request URLs

use crate::link::normalize_href;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};

pub const DEFAULT_THUMBNAIL_BASE: &str = "https://s.wordpress.com/mshots/v1/";
pub const DEFAULT_THUMBNAIL_WIDTH: u32 = 1400;

/// Characters left alone when encoding a URI component.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// External service that renders a screenshot of a page as an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbnailService {
    pub base: String,
    pub width: u32,
}

impl Default for ThumbnailService {
    fn default() -> Self {
        Self {
            base: DEFAULT_THUMBNAIL_BASE.to_string(),
            width: DEFAULT_THUMBNAIL_WIDTH,
        }
    }
}

impl ThumbnailService {
    pub fn new(base: impl Into<String>, width: u32) -> Self {
        Self {
            base: base.into(),
            width,
        }
    }

    /// Build the image request URL for a target page. No I/O happens here.
    pub fn preview_url(&self, target: &str) -> String {
        let normalized = normalize_href(target);
        format!(
            "{}{}?w={}",
            self.base,
            encode_uri_component(normalized.as_str()),
            self.width
        )
    }
}

/// Preview URL against the default thumbnail service.
pub fn resolve_preview_url(target: &str) -> String {
    ThumbnailService::default().preview_url(target)
}

pub fn encode_uri_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}
