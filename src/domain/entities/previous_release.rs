//! What was live before this deploy started.

use std::path::{Path, PathBuf};

/// Result of inspecting the current pointer at deploy start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviousRelease {
    /// The pointer resolved to this release path.
    Found(PathBuf),
    /// No pointer exists; a valid first-deploy state.
    Absent,
    /// The pointer could not be inspected.
    Uninspectable { message: String },
}

impl PreviousRelease {
    pub fn from_inspection(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => PreviousRelease::Found(path),
            None => PreviousRelease::Absent,
        }
    }

    /// Source for shared resources, if one is usable.
    pub fn path(&self) -> Option<&Path> {
        match self {
            PreviousRelease::Found(path) => Some(path),
            _ => None,
        }
    }
}
