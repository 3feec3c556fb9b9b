//! Line parser for the IAB `ads.txt` / `app-ads.txt` text format.
//!
//! The parser is lenient: malformed lines are skipped, never fatal, because
//! real-world files routinely mix valid records with junk.

use std::collections::BTreeMap;

use appads_core::{AccountType, AdsTxt, SellerRecord};

const BOM: char = '\u{feff}';

/// Parses raw `app-ads.txt` text into seller records and file-level variables.
///
/// - `#` starts a comment that runs to the end of the line.
/// - `KEY=VALUE` lines without a comma are variables (`contact=...`,
///   `subdomain=...`); the last occurrence of a key wins.
/// - Every other non-blank line is a record:
///   `domain, publisher account ID, DIRECT|RESELLER[, certification authority ID][;extension]`.
#[must_use]
pub fn parse_ads_txt(text: &str) -> AdsTxt {
    let mut fields = Vec::new();
    let mut variables = BTreeMap::new();

    for (index, raw_line) in text.trim_start_matches(BOM).lines().enumerate() {
        let line = strip_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }

        if !line.contains(',') {
            if let Some((key, value)) = parse_variable(line) {
                variables.insert(key.to_owned(), value.to_owned());
            } else {
                tracing::trace!(line_number = index + 1, line, "skipping unrecognized line");
            }
            continue;
        }

        match parse_record(line) {
            Some(record) => fields.push(record),
            None => tracing::trace!(line_number = index + 1, line, "skipping malformed record"),
        }
    }

    AdsTxt { fields, variables }
}

fn strip_comment(line: &str) -> &str {
    line.split_once('#').map_or(line, |(content, _)| content)
}

fn parse_variable(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim()))
}

fn parse_record(line: &str) -> Option<SellerRecord> {
    let record = line.split_once(';').map_or(line, |(record, _)| record);
    let mut parts = record.split(',').map(str::trim);

    let domain = parts.next().filter(|s| !s.is_empty())?;
    let publisher_account_id = parts.next().filter(|s| !s.is_empty())?;
    let account_type = parts.next().and_then(AccountType::parse)?;
    let certificate_authority_id = parts
        .next()
        .filter(|s| !s.is_empty())
        .map(str::to_owned);

    Some(SellerRecord {
        domain: domain.to_ascii_lowercase(),
        publisher_account_id: publisher_account_id.to_owned(),
        account_type,
        certificate_authority_id,
    })
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
