//! Host extraction: raw URL strings to canonical lowercase hostnames.
//!
//! Input is untrusted CSV content, so every failure mode collapses into
//! "no host". [`extract_canonical_host`] is the total, silent entry point;
//! [`classify_host`] runs the same steps and reports which one rejected the
//! input, so the pipeline can tally drop reasons without changing the
//! extractor's contract.

mod canonical;
mod idn;
mod rejection;
mod split;

use std::borrow::Cow;

pub use canonical::CanonicalHost;
pub use rejection::HostRejection;
pub use split::SplitError;

/// Prepended to inputs that carry no `://` separator (bare hosts and paths).
const DEFAULT_SCHEME_PREFIX: &str = "http://";

/// Schemes that never identify a network host worth aggregating.
const BLOCKED_SCHEMES: [&str; 5] = ["javascript", "data", "file", "about", "mailto"];

/// Extracts the canonical host of `raw`, or `None` if it has none.
///
/// # Examples
///
/// - `"user:pass@EXAMPLE.com:8080/path"` → `"example.com"`
/// - `"example.com"` → `"example.com"` (implicit `http://`)
/// - `"javascript:alert(1)"` → `None`
pub fn extract_canonical_host(raw: &str) -> Option<CanonicalHost> {
    classify_host(raw).ok()
}

/// Same steps as [`extract_canonical_host`], keeping the rejection reason.
pub fn classify_host(raw: &str) -> Result<CanonicalHost, HostRejection> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(HostRejection::Empty);
    }

    let candidate: Cow<'_, str> = if trimmed.contains("://") {
        Cow::Borrowed(trimmed)
    } else {
        // `javascript:alert(1)` names its scheme without `//`; the default
        // prefix would otherwise read the scheme as a host.
        if let Some(scheme) = split::scheme_prefix(trimmed).filter(|s| is_blocked_scheme(s)) {
            return Err(HostRejection::BlockedScheme(scheme.to_ascii_lowercase()));
        }
        Cow::Owned(format!("{DEFAULT_SCHEME_PREFIX}{trimmed}"))
    };

    let parts = split::split_url(&candidate).map_err(HostRejection::Unparsable)?;

    if parts.authority.is_empty() {
        return Err(HostRejection::MissingAuthority);
    }
    if is_blocked_scheme(&parts.scheme) {
        return Err(HostRejection::BlockedScheme(parts.scheme));
    }

    let host = clean_authority(&parts.authority);
    if host.is_empty() {
        return Err(HostRejection::EmptyHost);
    }

    if is_host_syntax(&host) {
        return Ok(CanonicalHost::new_unchecked(host));
    }

    idn::round_trip(&host)
        .map(CanonicalHost::new_unchecked)
        .ok_or(HostRejection::InvalidIdn)
}

fn is_blocked_scheme(scheme: &str) -> bool {
    BLOCKED_SCHEMES
        .iter()
        .any(|blocked| scheme.eq_ignore_ascii_case(blocked))
}

/// Reduces an authority (`user:pass@host:port`) to a bare lowercase host.
///
/// Credentials end at the last `@`; the port starts at the first `:` after
/// that. Trailing root dots are dropped.
fn clean_authority(authority: &str) -> String {
    let without_credentials = authority
        .rsplit_once('@')
        .map_or(authority, |(_, rest)| rest);
    let without_port = without_credentials
        .split_once(':')
        .map_or(without_credentials, |(host, _)| host);
    without_port
        .trim()
        .trim_end_matches('.')
        .to_lowercase()
}

/// `^[a-z0-9\-\.]+$`
fn is_host_syntax(host: &str) -> bool {
    !host.is_empty()
        && host
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'.')
}
