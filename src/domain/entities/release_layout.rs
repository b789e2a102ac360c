//! Filesystem layout of an environment on the target host.
//!
//! ```text
//! <root>/<environment>/releases/<release_id>/...
//! <root>/<environment>/current -> <root>/<environment>/releases/<release_id>
//! ```

use std::path::{Path, PathBuf};

use crate::domain::value_objects::{Environment, ReleaseId};

/// Name of the symlink marking the live release.
pub const CURRENT_LINK: &str = "current";
/// Directory holding every release of an environment.
pub const RELEASES_DIR: &str = "releases";

/// `<root>/<environment>`
pub fn environment_root(root_path: &Path, environment: Environment) -> PathBuf {
    root_path.join(environment.segment())
}

/// Paths for one release of one environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseLayout {
    environment: Environment,
    environment_root: PathBuf,
    release_id: ReleaseId,
}

impl ReleaseLayout {
    pub fn new(root_path: &Path, environment: Environment, release_id: ReleaseId) -> Self {
        Self {
            environment,
            environment_root: environment_root(root_path, environment),
            release_id,
        }
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn release_id(&self) -> ReleaseId {
        self.release_id
    }

    pub fn environment_root(&self) -> &Path {
        &self.environment_root
    }

    pub fn releases_dir(&self) -> PathBuf {
        self.environment_root.join(RELEASES_DIR)
    }

    pub fn release_path(&self) -> PathBuf {
        self.releases_dir().join(self.release_id.to_string())
    }

    pub fn current_link(&self) -> PathBuf {
        self.environment_root.join(CURRENT_LINK)
    }

    /// Temporary link used by the rename-based pointer swap.
    pub fn staging_link(&self) -> PathBuf {
        self.environment_root
            .join(format!("{}.{}", CURRENT_LINK, self.release_id))
    }
}
