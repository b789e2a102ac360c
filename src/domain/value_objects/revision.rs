//! Source revision identifiers.

use std::fmt;

/// Revision of a checked-out source tree (output of `git rev-parse HEAD`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RevisionHash(String);

impl RevisionHash {
    /// Wrap raw command output; surrounding whitespace is dropped.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First ten characters, for display.
    pub fn short(&self) -> &str {
        let end = self
            .0
            .char_indices()
            .nth(10)
            .map(|(i, _)| i)
            .unwrap_or(self.0.len());
        &self.0[..end]
    }
}

impl fmt::Display for RevisionHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
