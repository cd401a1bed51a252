use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Outcome of requesting one preview image.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeResult {
    pub url: String,
    pub status_code: u16,
    pub content_type: Option<String>,
    pub content_length: Option<u64>,
    pub response_time: Duration,
    pub error: Option<String>,
}

impl ProbeResult {
    pub fn new(url: String) -> Self {
        Self {
            url,
            status_code: 0,
            content_type: None,
            content_length: None,
            response_time: Duration::from_secs(0),
            error: None,
        }
    }

    pub fn with_error(url: String, error: String) -> Self {
        Self {
            error: Some(error),
            ..Self::new(url)
        }
    }

    /// A browser would display this response as an image: a 2xx status
    /// with an `image/*` content type and no transport error.
    pub fn is_image(&self) -> bool {
        self.error.is_none()
            && (200..300).contains(&self.status_code)
            && self
                .content_type
                .as_deref()
                .is_some_and(|ct| ct.trim().to_ascii_lowercase().starts_with("image/"))
    }
}
