use std::time::Duration;

/// Runtime settings for the crawler and the `appads-cli` binary.
#[derive(Clone, PartialEq, Eq)]
pub struct CrawlerConfig {
    pub proxy_url: Option<String>,
    pub response_timeout_ms: u64,
    pub deadline_ms: u64,
    pub user_agent: String,
    pub log_level: String,
    pub max_concurrent_crawls: usize,
}

impl CrawlerConfig {
    #[must_use]
    pub fn response_timeout(&self) -> Duration {
        Duration::from_millis(self.response_timeout_ms)
    }

    #[must_use]
    pub fn deadline(&self) -> Duration {
        Duration::from_millis(self.deadline_ms)
    }

    /// The proxy URL with any embedded password replaced, safe for logs.
    #[must_use]
    pub fn redacted_proxy_url(&self) -> Option<String> {
        self.proxy_url.as_deref().map(redact_credentials)
    }
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            proxy_url: None,
            response_timeout_ms: 6_000,
            deadline_ms: 60_000,
            user_agent: "appads/0.1 (app-ads.txt crawler)".to_string(),
            log_level: "info".to_string(),
            max_concurrent_crawls: 4,
        }
    }
}

impl std::fmt::Debug for CrawlerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CrawlerConfig")
            .field("proxy_url", &self.redacted_proxy_url())
            .field("response_timeout_ms", &self.response_timeout_ms)
            .field("deadline_ms", &self.deadline_ms)
            .field("user_agent", &self.user_agent)
            .field("log_level", &self.log_level)
            .field("max_concurrent_crawls", &self.max_concurrent_crawls)
            .finish()
    }
}

fn redact_credentials(raw: &str) -> String {
    match url::Url::parse(raw) {
        Ok(mut parsed) if parsed.password().is_some() => {
            // set_password only fails for cannot-be-a-base URLs, which carry no password
            let _ = parsed.set_password(Some("redacted"));
            parsed.to_string()
        }
        Ok(_) => raw.to_string(),
        Err(_) => "[unparseable]".to_string(),
    }
}
