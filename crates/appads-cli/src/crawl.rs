//! `crawl` command: resolve each input URL and emit one JSON document per URL.
//!
//! Inputs are crawled concurrently but printed in input order. An invalid
//! URL is reported inline and does not stop the remaining inputs.

use std::io::Write;

use appads_core::CrawlResult;
use appads_crawler::{CrawlError, Crawler, Transport};
use futures::stream::{self, StreamExt};
use serde::Serialize;

/// One output line.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum CrawlLine<'a> {
    Resolved {
        url: &'a str,
        #[serde(flatten)]
        result: CrawlResult,
    },
    Failed {
        url: &'a str,
        error: String,
    },
}

impl<'a> CrawlLine<'a> {
    fn from_outcome(url: &'a str, outcome: Result<CrawlResult, CrawlError>) -> Self {
        match outcome {
            Ok(result) => Self::Resolved { url, result },
            Err(e) => Self::Failed {
                url,
                error: e.to_string(),
            },
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CrawlSummary {
    pub total: usize,
    pub found: usize,
    pub invalid: usize,
}

/// Crawls every URL (at most `max_concurrent` at a time) and writes one JSON
/// document per input to `out`, in input order.
///
/// # Errors
///
/// Returns an error only if writing to `out` or serializing a line fails.
/// Per-URL failures are written as `{"url", "error"}` lines and counted in
/// the returned summary.
pub(crate) async fn run_crawl<T, W>(
    crawler: &Crawler<T>,
    urls: &[String],
    max_concurrent: usize,
    pretty: bool,
    out: &mut W,
) -> anyhow::Result<CrawlSummary>
where
    T: Transport,
    W: Write,
{
    let outcomes: Vec<(&String, Result<CrawlResult, CrawlError>)> = stream::iter(urls)
        .map(|url| async move { (url, crawler.crawl(url).await) })
        .buffered(max_concurrent.max(1))
        .collect()
        .await;

    let mut summary = CrawlSummary {
        total: outcomes.len(),
        ..CrawlSummary::default()
    };

    for (url, outcome) in outcomes {
        match &outcome {
            Ok(result) if result.is_found() => summary.found += 1,
            Ok(_) => {}
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "skipping invalid input");
                summary.invalid += 1;
            }
        }

        let line = CrawlLine::from_outcome(url, outcome);
        if pretty {
            serde_json::to_writer_pretty(&mut *out, &line)?;
        } else {
            serde_json::to_writer(&mut *out, &line)?;
        }
        writeln!(out)?;
    }

    out.flush()?;
    Ok(summary)
}
