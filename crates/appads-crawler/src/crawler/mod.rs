//! Resolves the authoritative `app-ads.txt` for a URL by racing candidates.

mod fetch;

use appads_core::{CrawlResult, CrawlerConfig};
use futures::stream::{self, StreamExt};
use reqwest::Url;

use crate::candidates::unique_candidates;
use crate::error::CrawlError;
use crate::transport::{HttpTransport, Transport, TransportOptions};

pub(crate) const APP_ADS_PATH: &str = "app-ads.txt";

/// Locates and fetches `app-ads.txt` files.
///
/// Holds no per-call state; one instance can serve any number of
/// concurrent [`Crawler::crawl`] calls.
#[derive(Debug, Clone)]
pub struct Crawler<T = HttpTransport> {
    transport: T,
}

impl Crawler<HttpTransport> {
    /// Creates a crawler over a fresh [`HttpTransport`].
    ///
    /// # Errors
    ///
    /// Returns [`CrawlError::InvalidProxy`] or [`CrawlError::Client`] if the
    /// HTTP client cannot be built.
    pub fn new(options: &TransportOptions) -> Result<Self, CrawlError> {
        Ok(Self::with_transport(HttpTransport::new(options)?))
    }

    /// Creates a crawler from loaded configuration.
    ///
    /// # Errors
    ///
    /// Same as [`Crawler::new`].
    pub fn from_config(config: &CrawlerConfig) -> Result<Self, CrawlError> {
        Self::new(&TransportOptions::from(config))
    }
}

impl<T: Transport> Crawler<T> {
    #[must_use]
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Finds the `app-ads.txt` that applies to `url`.
    ///
    /// The input is validated before any request is made. Each candidate host
    /// (see [`crate::candidates`]) is tried over `https` then `http`, all
    /// candidates concurrently; the first one to serve a file with at least
    /// one seller record wins and the remaining attempts are dropped. When no
    /// candidate wins, the result is [`CrawlResult::not_found`].
    ///
    /// # Errors
    ///
    /// Returns [`CrawlError::InvalidUrl`] if `url` is not an absolute URL, or
    /// [`CrawlError::MissingHost`] if it has no hostname. Network failures are
    /// never returned as errors.
    pub async fn crawl(&self, url: &str) -> Result<CrawlResult, CrawlError> {
        let host = input_host(url)?;
        let candidates = unique_candidates(&host);
        tracing::debug!(url, host, ?candidates, "racing app-ads.txt candidates");

        let mut attempts = stream::iter(
            candidates
                .iter()
                .map(|candidate| fetch::fetch_candidate(&self.transport, candidate)),
        )
        .buffer_unordered(candidates.len().max(1));

        while let Some(outcome) = attempts.next().await {
            if let Some(result) = outcome {
                tracing::info!(url, app_ads_url = result.app_ads_url(), "found app-ads.txt");
                return Ok(result);
            }
        }

        tracing::debug!(url, "no candidate served a usable app-ads.txt");
        Ok(CrawlResult::not_found())
    }
}

/// Extracts the hostname of an absolute input URL.
fn input_host(url: &str) -> Result<String, CrawlError> {
    let parsed = Url::parse(url).map_err(|e| CrawlError::InvalidUrl {
        url: url.to_owned(),
        reason: e.to_string(),
    })?;

    parsed
        .host_str()
        .filter(|host| !host.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| CrawlError::MissingHost {
            url: url.to_owned(),
        })
}
