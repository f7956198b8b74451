//! IDN fallback for hosts outside the plain ASCII host grammar.

use super::is_host_syntax;

/// Decodes `host` to its unicode form and re-encodes it to ASCII (Punycode).
///
/// The encode step applies STD3 rules, so anything that is not a valid
/// DNS name after mapping (underscores, `%`, stray brackets) is rejected.
pub(super) fn round_trip(host: &str) -> Option<String> {
    let (unicode, outcome) = idna::domain_to_unicode(host);
    outcome.ok()?;
    let ascii = idna::domain_to_ascii_strict(&unicode).ok()?;
    is_host_syntax(&ascii).then_some(ascii)
}
