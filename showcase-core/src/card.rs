// Per-project preview card and its load state

use crate::link::{NormalizedLink, extract_domain, normalize_href};
use crate::preview::ThumbnailService;
use serde::{Deserialize, Serialize};
use showcase_probe::ProbeResult;
use tracing::debug;

/// Whether a card still shows its screenshot.
///
/// `Failed` is terminal: nothing moves a card back to `Loaded`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewState {
    #[default]
    Loaded,
    Failed,
}

/// Result of one image request, as reported by whatever performed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Failed,
}

impl From<&ProbeResult> for LoadOutcome {
    fn from(result: &ProbeResult) -> Self {
        if result.is_image() {
            LoadOutcome::Loaded
        } else {
            LoadOutcome::Failed
        }
    }
}

#[derive(Debug, Clone)]
pub struct PreviewCard {
    title: String,
    href: NormalizedLink,
    src: String,
    domain: String,
    state: PreviewState,
}

impl PreviewCard {
    pub fn new(url: &str, title: &str, thumbnails: &ThumbnailService) -> Self {
        Self {
            title: title.to_string(),
            href: normalize_href(url),
            src: thumbnails.preview_url(url),
            domain: extract_domain(url),
            state: PreviewState::Loaded,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn href(&self) -> &NormalizedLink {
        &self.href
    }

    /// Image request URL for the screenshot.
    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn state(&self) -> PreviewState {
        self.state
    }

    pub fn is_failed(&self) -> bool {
        self.state == PreviewState::Failed
    }

    /// Identicon-style letter shown on the placeholder.
    pub fn glyph(&self) -> String {
        self.domain
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    /// Move to `Failed`. Returns `true` only for the call that made the
    /// transition.
    pub fn mark_failed(&mut self) -> bool {
        match self.state {
            PreviewState::Failed => false,
            PreviewState::Loaded => {
                debug!("Preview for {} failed, showing placeholder", self.domain);
                self.state = PreviewState::Failed;
                true
            }
        }
    }

    pub fn on_load(&mut self, outcome: LoadOutcome) -> bool {
        match outcome {
            LoadOutcome::Loaded => false,
            LoadOutcome::Failed => self.mark_failed(),
        }
    }
}
