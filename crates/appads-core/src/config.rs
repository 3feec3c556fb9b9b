use crate::app_config::CrawlerConfig;
use crate::ConfigError;

/// Load crawler configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but holds an invalid value.
pub fn load_config() -> Result<CrawlerConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_config_from_env()
}

/// Load crawler configuration from environment variables already in the process.
///
/// Unlike [`load_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is present but holds an invalid value.
pub fn load_config_from_env() -> Result<CrawlerConfig, ConfigError> {
    build_config(|key| std::env::var(key))
}

/// Build crawler configuration using the provided env-var lookup function.
///
/// Every variable is optional; absent variables fall back to
/// [`CrawlerConfig::default`].
fn build_config<F>(lookup: F) -> Result<CrawlerConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let defaults = CrawlerConfig::default();

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_positive_u64 = |var: &str, default: u64| -> Result<u64, ConfigError> {
        let Ok(raw) = lookup(var) else {
            return Ok(default);
        };
        let value = raw
            .trim()
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if value == 0 {
            return Err(invalid(var, "must be greater than zero".to_string()));
        }
        Ok(value)
    };

    let proxy_url = lookup("APPADS_PROXY_URL")
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty());

    if let Some(proxy) = &proxy_url {
        url::Url::parse(proxy).map_err(|e| invalid("APPADS_PROXY_URL", e.to_string()))?;
    }

    let response_timeout_ms =
        parse_positive_u64("APPADS_RESPONSE_TIMEOUT_MS", defaults.response_timeout_ms)?;
    let deadline_ms = parse_positive_u64("APPADS_DEADLINE_MS", defaults.deadline_ms)?;
    let user_agent = lookup("APPADS_USER_AGENT").unwrap_or(defaults.user_agent);
    let log_level = lookup("APPADS_LOG_LEVEL").unwrap_or(defaults.log_level);

    let max_concurrent_crawls = parse_positive_u64(
        "APPADS_MAX_CONCURRENT_CRAWLS",
        defaults.max_concurrent_crawls as u64,
    )?;
    let max_concurrent_crawls = usize::try_from(max_concurrent_crawls)
        .map_err(|e| invalid("APPADS_MAX_CONCURRENT_CRAWLS", e.to_string()))?;

    Ok(CrawlerConfig {
        proxy_url,
        response_timeout_ms,
        deadline_ms,
        user_agent,
        log_level,
        max_concurrent_crawls,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
