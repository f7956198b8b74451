//! Generic URL syntax split: scheme and raw authority, nothing else.
//!
//! The authority is returned exactly as written. Hosts are not decoded,
//! normalized or checked here, so numeric labels such as `1.2.3` or
//! `3232235777` and ports such as `:login` pass through untouched.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SplitError {
    /// `[` without `]` (or the reverse) in the authority.
    #[error("unbalanced IPv6 brackets in authority '{0}'")]
    UnbalancedBrackets(String),
}

/// Scheme and authority of one URL string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct UrlParts {
    /// Lowercased; empty when the input has no valid scheme.
    pub scheme: String,
    /// Text between `//` and the first `/`, `?` or `#`; empty when absent.
    pub authority: String,
}

/// Scheme named before the first `:`, if it is a syntactically valid one
/// (`ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`).
pub(super) fn scheme_prefix(input: &str) -> Option<&str> {
    let (scheme, _) = input.split_once(':')?;
    let mut chars = scheme.chars();
    let first = chars.next()?;
    let valid = first.is_ascii_alphabetic()
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some(scheme)
}

pub(super) fn split_url(input: &str) -> Result<UrlParts, SplitError> {
    let cleaned: String = input
        .chars()
        .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
        .collect();

    let (scheme, rest) = match scheme_prefix(&cleaned) {
        Some(scheme) => (scheme.to_ascii_lowercase(), &cleaned[scheme.len() + 1..]),
        None => (String::new(), cleaned.as_str()),
    };

    let authority = match rest.strip_prefix("//") {
        Some(after) => after
            .find(['/', '?', '#'])
            .map_or(after, |end| &after[..end]),
        None => "",
    };

    if authority.contains('[') != authority.contains(']') {
        return Err(SplitError::UnbalancedBrackets(authority.to_string()));
    }

    Ok(UrlParts {
        scheme,
        authority: authority.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(input: &str) -> (String, String) {
        let p = split_url(input).unwrap();
        (p.scheme, p.authority)
    }

    #[test]
    fn authority_is_raw_text() {
        assert_eq!(
            parts("HTTP://u:p@Host.example:login/a?b#c"),
            ("http".to_string(), "u:p@Host.example:login".to_string())
        );
        assert_eq!(parts("http://1.2.3").1, "1.2.3");
        assert_eq!(parts("hxxp://bücher.de/").1, "bücher.de");
        assert_eq!(parts("http://ex%41mple.com?q").1, "ex%41mple.com");
    }

    #[test]
    fn no_double_slash_means_no_authority() {
        assert_eq!(parts("mailto:someone@example.com").1, "");
        assert_eq!(parts("file:///etc/passwd").1, "");
    }

    #[test]
    fn invalid_scheme_leaves_everything_in_the_path() {
        assert_eq!(parts("ht tp://example.com"), (String::new(), String::new()));
        assert_eq!(parts("://example.com"), (String::new(), String::new()));
    }

    #[test]
    fn tabs_and_newlines_are_ignored() {
        assert_eq!(parts("http://exa\tmple.com\n/x").1, "example.com");
    }

    #[test]
    fn unbalanced_brackets_are_an_error() {
        assert_eq!(
            split_url("http://[::1/"),
            Err(SplitError::UnbalancedBrackets("[::1".to_string()))
        );
        assert_eq!(parts("http://[::1]:8080/").1, "[::1]:8080");
    }

    #[test]
    fn scheme_prefix_requires_leading_letter() {
        assert_eq!(scheme_prefix("javascript:alert(1)"), Some("javascript"));
        assert_eq!(scheme_prefix("svn+ssh://h"), Some("svn+ssh"));
        assert_eq!(scheme_prefix("1http://h"), None);
        assert_eq!(scheme_prefix("example.com"), None);
    }
}
