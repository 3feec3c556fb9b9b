use thiserror::Error;

/// Errors surfaced to callers of [`crate::Crawler`].
///
/// Network failures never appear here: every per-candidate failure is
/// absorbed by the race and, if all candidates lose, reported as
/// [`appads_core::CrawlResult::not_found`].
#[derive(Debug, Error)]
pub enum CrawlError {
    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("URL \"{url}\" has no host to derive app-ads.txt locations from")]
    MissingHost { url: String },

    #[error("invalid proxy URL: {0}")]
    InvalidProxy(#[source] reqwest::Error),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

impl CrawlError {
    /// `true` for every variant caused by the input URL itself.
    #[must_use]
    pub fn is_invalid_url(&self) -> bool {
        matches!(self, Self::InvalidUrl { .. } | Self::MissingHost { .. })
    }
}

/// Failure of a single GET attempt. Recovered locally by the crawler.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("no response from {url} within {timeout_ms}ms")]
    ResponseTimeout { url: String, timeout_ms: u128 },

    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },
}
