//! Candidate hostnames where a site's `app-ads.txt` may be published.
//!
//! The rules are plain label arithmetic on the hostname. No public-suffix
//! list is consulted, so some candidates (`co.uk`, a bare TLD) are
//! nonsensical; they simply fail at fetch time.

/// Derives the four raw candidates for `host`, in rule order:
///
/// 1. the host itself (`another.subdomain.example.co.uk`)
/// 2. the host without its first label (`subdomain.example.co.uk`)
/// 3. the last two labels (`co.uk`)
/// 4. the last three labels (`example.co.uk`)
#[must_use]
pub fn candidate_hosts(host: &str) -> [String; 4] {
    [
        host.to_owned(),
        strip_first_label(host),
        last_labels(host, 2),
        last_labels(host, 3),
    ]
}

/// [`candidate_hosts`] with duplicates removed, first occurrence kept.
#[must_use]
pub fn unique_candidates(host: &str) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(4);
    for candidate in candidate_hosts(host) {
        if !candidate.is_empty() && !unique.contains(&candidate) {
            unique.push(candidate);
        }
    }
    unique
}

fn strip_first_label(host: &str) -> String {
    match host.split_once('.') {
        Some((first, rest)) if !first.is_empty() => rest.to_owned(),
        _ => host.to_owned(),
    }
}

fn last_labels(host: &str, count: usize) -> String {
    let labels: Vec<&str> = host.split('.').collect();
    labels[labels.len().saturating_sub(count)..].join(".")
}
