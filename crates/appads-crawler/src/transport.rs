//! HTTP transport used by the crawler.
//!
//! [`Transport`] is the seam between the race logic and the network: the
//! crawler only needs "GET this URL and give me the body, or fail". The
//! production implementation is [`HttpTransport`]; tests substitute an
//! in-memory one.

use std::future::Future;
use std::time::Duration;

use appads_core::CrawlerConfig;
use reqwest::Client;

use crate::error::{CrawlError, FetchError};

/// A GET-only HTTP capability.
///
/// Implementations must treat every non-2xx status as a failure. The
/// crawler shares one transport across all concurrent attempts, so `get`
/// takes `&self`.
pub trait Transport {
    fn get(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Settings for building an [`HttpTransport`].
#[derive(Debug, Clone)]
pub struct TransportOptions {
    /// Upstream proxy for every request, both `http` and `https`.
    pub proxy_url: Option<String>,
    /// Maximum wait for the server to start responding (status + headers).
    pub response_timeout: Duration,
    /// Maximum time for the whole request, body included.
    pub deadline: Duration,
    pub user_agent: String,
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self::from(&CrawlerConfig::default())
    }
}

impl From<&CrawlerConfig> for TransportOptions {
    fn from(config: &CrawlerConfig) -> Self {
        Self {
            proxy_url: config.proxy_url.clone(),
            response_timeout: config.response_timeout(),
            deadline: config.deadline(),
            user_agent: config.user_agent.clone(),
        }
    }
}

/// [`Transport`] backed by a single shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    response_timeout: Duration,
    deadline: Duration,
}

impl HttpTransport {
    /// Builds the underlying client, wiring the proxy when one is configured.
    ///
    /// # Errors
    ///
    /// - [`CrawlError::InvalidProxy`] if `proxy_url` cannot be parsed.
    /// - [`CrawlError::Client`] if the `reqwest::Client` cannot be constructed
    ///   (e.g., invalid TLS config).
    pub fn new(options: &TransportOptions) -> Result<Self, CrawlError> {
        let mut builder = Client::builder()
            .user_agent(options.user_agent.as_str())
            .connect_timeout(options.response_timeout)
            .timeout(options.deadline);

        if let Some(proxy_url) = options.proxy_url.as_deref() {
            let proxy = reqwest::Proxy::all(proxy_url).map_err(CrawlError::InvalidProxy)?;
            builder = builder.proxy(proxy);
        }

        Ok(Self {
            client: builder.build()?,
            response_timeout: options.response_timeout,
            deadline: options.deadline,
        })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        let request = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "text/plain,*/*;q=0.8")
            .timeout(self.deadline);

        let response = tokio::time::timeout(self.response_timeout, request.send())
            .await
            .map_err(|_| FetchError::ResponseTimeout {
                url: url.to_owned(),
                timeout_ms: self.response_timeout.as_millis(),
            })??;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        Ok(response.text().await?)
    }
}
