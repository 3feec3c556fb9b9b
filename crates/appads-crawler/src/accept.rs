//! Decides whether a fetched body counts as a discovered `app-ads.txt`.

use appads_core::CrawlResult;

use crate::parse::parse_ads_txt;

/// Parses `body` and accepts it only if it yields at least one seller record.
///
/// A reachable file with no records is reported exactly like an unreachable
/// one: `None`.
#[must_use]
pub fn accept_body(url: &str, body: &str) -> Option<CrawlResult> {
    let ads = parse_ads_txt(body);
    if ads.has_records() {
        Some(CrawlResult::found(url, ads))
    } else {
        tracing::debug!(url, "fetched app-ads.txt has no seller records");
        None
    }
}
