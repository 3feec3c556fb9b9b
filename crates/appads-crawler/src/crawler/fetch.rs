//! One candidate's fetch sequence: `https` first, a single `http` fallback.

use appads_core::CrawlResult;

use super::APP_ADS_PATH;
use crate::accept::accept_body;
use crate::transport::Transport;

/// Tries `https://{host}/app-ads.txt`, then `http://{host}/app-ads.txt` if
/// the secure attempt fails. Returns the accepted result, or `None` when
/// both attempts fail or the fetched file has no records.
///
/// The fallback only runs on fetch failure; a secure response that parses to
/// zero records ends the sequence.
pub(super) async fn fetch_candidate<T: Transport>(
    transport: &T,
    host: &str,
) -> Option<CrawlResult> {
    let secure_url = format!("https://{host}/{APP_ADS_PATH}");
    match transport.get(&secure_url).await {
        Ok(body) => return accept_body(&secure_url, &body),
        Err(err) => {
            tracing::debug!(url = %secure_url, error = %err, "https attempt failed; trying http");
        }
    }

    let insecure_url = format!("http://{host}/{APP_ADS_PATH}");
    match transport.get(&insecure_url).await {
        Ok(body) => accept_body(&insecure_url, &body),
        Err(err) => {
            tracing::debug!(url = %insecure_url, error = %err, "http attempt failed");
            None
        }
    }
}
