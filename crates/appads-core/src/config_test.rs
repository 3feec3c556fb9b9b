use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn build_config_with_empty_env_uses_defaults() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg, CrawlerConfig::default());
    assert!(cfg.proxy_url.is_none());
    assert_eq!(cfg.response_timeout_ms, 6_000);
    assert_eq!(cfg.deadline_ms, 60_000);
    assert_eq!(cfg.user_agent, "appads/0.1 (app-ads.txt crawler)");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.max_concurrent_crawls, 4);
}

#[test]
fn proxy_url_override() {
    let mut map = HashMap::new();
    map.insert("APPADS_PROXY_URL", "http://proxy.internal:3128");
    let cfg = build_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.proxy_url.as_deref(), Some("http://proxy.internal:3128"));
}

#[test]
fn empty_proxy_url_is_treated_as_unset() {
    let mut map = HashMap::new();
    map.insert("APPADS_PROXY_URL", "  ");
    let cfg = build_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.proxy_url.is_none());
}

#[test]
fn unparseable_proxy_url_fails() {
    let mut map = HashMap::new();
    map.insert("APPADS_PROXY_URL", "not a proxy");
    let result = build_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "APPADS_PROXY_URL"),
        "expected InvalidEnvVar(APPADS_PROXY_URL), got: {result:?}"
    );
}

#[test]
fn response_timeout_override() {
    let mut map = HashMap::new();
    map.insert("APPADS_RESPONSE_TIMEOUT_MS", "1500");
    let cfg = build_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.response_timeout_ms, 1500);
}

#[test]
fn response_timeout_invalid() {
    let mut map = HashMap::new();
    map.insert("APPADS_RESPONSE_TIMEOUT_MS", "soon");
    let result = build_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "APPADS_RESPONSE_TIMEOUT_MS"),
        "expected InvalidEnvVar(APPADS_RESPONSE_TIMEOUT_MS), got: {result:?}"
    );
}

#[test]
fn zero_deadline_is_rejected() {
    let mut map = HashMap::new();
    map.insert("APPADS_DEADLINE_MS", "0");
    let result = build_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "APPADS_DEADLINE_MS"),
        "expected InvalidEnvVar(APPADS_DEADLINE_MS), got: {result:?}"
    );
}

#[test]
fn user_agent_and_log_level_override() {
    let mut map = HashMap::new();
    map.insert("APPADS_USER_AGENT", "custom-agent/2.0");
    map.insert("APPADS_LOG_LEVEL", "debug");
    let cfg = build_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.user_agent, "custom-agent/2.0");
    assert_eq!(cfg.log_level, "debug");
}

#[test]
fn max_concurrent_crawls_override() {
    let mut map = HashMap::new();
    map.insert("APPADS_MAX_CONCURRENT_CRAWLS", "16");
    let cfg = build_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.max_concurrent_crawls, 16);
}

#[test]
fn zero_max_concurrent_crawls_is_rejected() {
    let mut map = HashMap::new();
    map.insert("APPADS_MAX_CONCURRENT_CRAWLS", "0");
    let result = build_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "APPADS_MAX_CONCURRENT_CRAWLS"),
        "expected InvalidEnvVar(APPADS_MAX_CONCURRENT_CRAWLS), got: {result:?}"
    );
}
