//! Shared resources carried forward between releases.

use std::fmt;
use std::path::{Component, Path};

/// A path, relative to a release root, whose contents persist across
/// releases (logs, uploaded media, download caches).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SharedResource(String);

/// Why a configured shared resource path was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSharedResource {
    #[error("shared resource path is empty")]
    Empty,
    #[error("shared resource '{0}' must be relative to the release root")]
    Absolute(String),
    #[error("shared resource '{0}' must not contain '..'")]
    EscapesRelease(String),
}

impl SharedResource {
    pub fn new(raw: impl AsRef<str>) -> Result<Self, InvalidSharedResource> {
        let trimmed = raw.as_ref().trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(InvalidSharedResource::Empty);
        }

        let path = Path::new(trimmed);
        if path.is_absolute() {
            return Err(InvalidSharedResource::Absolute(trimmed.to_string()));
        }
        if path.components().any(|c| matches!(c, Component::ParentDir)) {
            return Err(InvalidSharedResource::EscapesRelease(trimmed.to_string()));
        }

        Ok(Self(trimmed.trim_start_matches("./").to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }

    /// Parent directory inside the release, if the resource is nested
    /// (`var/log` -> `var`, `log` -> `None`).
    pub fn parent(&self) -> Option<&str> {
        self.0.rsplit_once('/').map(|(parent, _)| parent)
    }
}

impl fmt::Display for SharedResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
