//! Current release inspection.

use std::path::{Path, PathBuf};

use crate::domain::entities::CURRENT_LINK;
use crate::domain::ports::quote_path;
use crate::domain::value_objects::RevisionHash;
use crate::error::{CutoverError, CutoverResult};

use super::remote_host::RemoteHost;

/// `test` exits with 1 when the expression is false; anything above is an error.
const TEST_FALSE_EXIT: i32 = 1;

/// Reads the `current` pointer of an environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct CurrentReleaseInspector;

impl CurrentReleaseInspector {
    pub fn new() -> Self {
        Self
    }

    /// Release path the `current` link points at, or `None` when there is
    /// no link. A link that exists but cannot be read is an
    /// `Inspection` error.
    pub fn inspect(
        &self,
        remote: &RemoteHost,
        environment_root: &Path,
    ) -> CutoverResult<Option<PathBuf>> {
        let link = environment_root.join(CURRENT_LINK);
        let quoted = quote_path(&link);

        let read = remote.run(
            &remote
                .as_deploy_user(format!("readlink {}", quoted))
                .tolerating_failure(),
        )?;
        if read.succeeded && !read.stdout_trimmed().is_empty() {
            return Ok(Some(PathBuf::from(read.stdout_trimmed())));
        }

        let exists = remote.run(
            &remote
                .as_deploy_user(format!("test -e {0} -o -L {0}", quoted))
                .tolerating_failure(),
        )?;
        if !exists.succeeded && exists.exit_code == Some(TEST_FALSE_EXIT) {
            return Ok(None);
        }

        let output = if read.trimmed().is_empty() {
            exists.output
        } else {
            read.output
        };
        Err(CutoverError::Inspection {
            environment_root: environment_root.to_path_buf(),
            output,
        })
    }

    /// Revision checked out in `release_path`, if it can be read.
    pub fn read_revision(
        &self,
        remote: &RemoteHost,
        release_path: &Path,
    ) -> CutoverResult<Option<RevisionHash>> {
        let outcome = remote.run(
            &remote
                .as_deploy_user("git rev-parse HEAD")
                .in_dir(release_path)
                .tolerating_failure(),
        )?;

        if !outcome.succeeded {
            tracing::warn!(
                host = remote.host(),
                release = %release_path.display(),
                "could not read revision: {}",
                outcome.trimmed()
            );
            return Ok(None);
        }

        let revision = RevisionHash::new(outcome.stdout_trimmed());
        Ok((!revision.is_empty()).then_some(revision))
    }
}
