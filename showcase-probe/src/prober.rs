use crate::error::{ProbeError, Result};
use crate::result::ProbeResult;
use futures::stream::{self, StreamExt};
use reqwest::Client;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub type ProgressCallback = Arc<dyn Fn(&ProbeResult) + Send + Sync>;

/// Requests preview images the way a browser would load them, one request
/// per URL, with a bounded number in flight.
pub struct Prober {
    client: Client,
    progress_callback: Option<ProgressCallback>,
}

impl Prober {
    pub fn new() -> Result<Self> {
        Self::with_timeout(15)
    }

    pub fn with_timeout(timeout_secs: u64) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("Showcase/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.div_ceil(2)))
            .redirect(reqwest::redirect::Policy::limited(5))
            // previews are requested without a referrer, as on the page
            .referer(false)
            .build()?;

        Ok(Self {
            client,
            progress_callback: None,
        })
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Probe every URL. Results come back in completion order, not input
    /// order; match them up by `ProbeResult::url`.
    pub async fn probe_all(&self, urls: &[String], workers: usize) -> Result<Vec<ProbeResult>> {
        if workers == 0 {
            return Err(ProbeError::NoWorkers);
        }
        info!("Probing {} preview(s) with {} workers", urls.len(), workers);

        let results: Vec<ProbeResult> = stream::iter(urls.iter().cloned())
            .map(|url| async move {
                let result = self.probe(&url).await;
                if let Some(ref callback) = self.progress_callback {
                    callback(&result);
                }
                result
            })
            .buffer_unordered(workers)
            .collect()
            .await;

        let failed = results.iter().filter(|r| !r.is_image()).count();
        info!("Probe complete. {} of {} preview(s) failed", failed, results.len());
        Ok(results)
    }

    /// Probe a single URL. Transport failures are recorded on the result.
    pub async fn probe(&self, url: &str) -> ProbeResult {
        debug!("Requesting {}", url);
        let start = Instant::now();

        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("Preview request failed for {}: {}", url, e);
                let mut result = ProbeResult::with_error(url.to_string(), e.to_string());
                result.response_time = start.elapsed();
                return result;
            }
        };

        let mut result = ProbeResult::new(url.to_string());
        result.status_code = response.status().as_u16();
        result.content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        result.content_length = response.content_length();
        result.response_time = start.elapsed();

        if !result.is_image() {
            warn!(
                "Preview for {} is not displayable (status {}, content type {:?})",
                url, result.status_code, result.content_type
            );
        }

        result
    }
}
