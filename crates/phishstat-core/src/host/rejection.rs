//! Why a raw URL produced no canonical host.

use thiserror::Error;

use super::split::SplitError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostRejection {
    /// Empty or whitespace-only input.
    #[error("empty input")]
    Empty,
    /// The scheme-defaulted input could not be split into URL components.
    #[error("unparsable URL: {0}")]
    Unparsable(SplitError),
    /// Split, but the authority component is empty (e.g. `file:///etc/passwd`).
    #[error("URL has no authority")]
    MissingAuthority,
    #[error("blocked scheme '{0}'")]
    BlockedScheme(String),
    /// Nothing left after removing credentials, port and trailing dots.
    #[error("empty host after cleanup")]
    EmptyHost,
    /// Host is outside the ASCII grammar and does not survive IDN round-trip.
    #[error("invalid internationalized domain name")]
    InvalidIdn,
}

impl HostRejection {
    /// Stable short label, used as a tally key in logs and the report.
    pub fn kind(&self) -> &'static str {
        match self {
            HostRejection::Empty => "empty",
            HostRejection::Unparsable(_) => "unparsable",
            HostRejection::MissingAuthority => "missing_authority",
            HostRejection::BlockedScheme(_) => "blocked_scheme",
            HostRejection::EmptyHost => "empty_host",
            HostRejection::InvalidIdn => "invalid_idn",
        }
    }
}
