//! Fixed set of two-label public suffixes.

use thiserror::Error;

/// Two-label suffixes under which registrations happen one level below.
///
/// A small approximation of the public suffix list: anything
/// not listed here (e.g. `co.in`) is treated as an ordinary domain.
pub const KNOWN_TWO_LEVEL_SUFFIXES: [(&str, &str); 5] = [
    ("co", "uk"),
    ("com", "au"),
    ("co", "jp"),
    ("com", "sg"),
    ("com", "br"),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("two-level suffix must be exactly two non-empty labels, got '{0}'")]
pub struct InvalidSuffix(pub String);

/// Set of `(second-level, top-level)` label pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixSet {
    pairs: Vec<(String, String)>,
}

impl SuffixSet {
    /// Empty set: every multi-label host keeps its last two labels.
    pub fn empty() -> Self {
        Self { pairs: Vec::new() }
    }

    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut set = Self::empty();
        for (second, top) in pairs {
            set.insert_pair(second.to_ascii_lowercase(), top.to_ascii_lowercase());
        }
        set
    }

    /// Adds a dotted suffix such as `"co.in"`.
    pub fn insert(&mut self, suffix: &str) -> Result<(), InvalidSuffix> {
        let normalized = suffix.trim().trim_matches('.').to_ascii_lowercase();
        match normalized.split_once('.') {
            Some((second, top)) if !second.is_empty() && !top.is_empty() && !top.contains('.') => {
                self.insert_pair(second.to_string(), top.to_string());
                Ok(())
            }
            _ => Err(InvalidSuffix(suffix.to_string())),
        }
    }

    pub fn contains(&self, second: &str, top: &str) -> bool {
        self.pairs.iter().any(|(s, t)| s == second && t == top)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    fn insert_pair(&mut self, second: String, top: String) {
        if !self.contains(&second, &top) {
            self.pairs.push((second, top));
        }
    }
}

impl Default for SuffixSet {
    fn default() -> Self {
        Self::from_pairs(KNOWN_TWO_LEVEL_SUFFIXES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_has_the_known_suffixes() {
        let set = SuffixSet::default();
        assert_eq!(set.len(), 5);
        assert!(set.contains("co", "uk"));
        assert!(set.contains("com", "br"));
        assert!(!set.contains("co", "in"));
    }

    #[test]
    fn insert_accepts_dotted_suffix() {
        let mut set = SuffixSet::default();
        set.insert("CO.IN.").unwrap();
        assert!(set.contains("co", "in"));
        set.insert("co.in").unwrap();
        assert_eq!(set.len(), 6);
    }

    #[test]
    fn insert_rejects_malformed_suffix() {
        let mut set = SuffixSet::empty();
        assert!(set.insert("uk").is_err());
        assert!(set.insert("a.b.c").is_err());
        assert!(set.insert(".uk").is_err());
        assert!(set.insert("").is_err());
        assert!(set.is_empty());
    }
}
