//! Source fetching into a new release directory.

use std::path::Path;

use crate::config::SourceRepository;
use crate::domain::ports::{quote, quote_path, CommandOutcome};
use crate::domain::value_objects::{FetchStep, ReleaseId, RevisionHash};
use crate::error::{CutoverError, CutoverResult};

use super::remote_host::RemoteHost;

/// Clones the repository at the configured branch.
#[derive(Debug, Clone)]
pub struct SourceFetcher {
    source: SourceRepository,
}

impl SourceFetcher {
    pub fn new(source: SourceRepository) -> Self {
        Self { source }
    }

    /// Clone into `releases_dir/release_id`, check out a local branch
    /// tracking `origin/<branch>` and return the head revision.
    ///
    /// A failure leaves the partial release directory in place.
    pub fn fetch(
        &self,
        remote: &RemoteHost,
        releases_dir: &Path,
        release_id: &ReleaseId,
    ) -> CutoverResult<RevisionHash> {
        let release_path = releases_dir.join(release_id.to_string());
        let branch = quote(&self.source.branch);

        let fail = |step: FetchStep, outcome: CommandOutcome| CutoverError::Fetch {
            step,
            release_path: release_path.clone(),
            output: outcome.output,
        };

        let mkdir = remote.run(
            &remote.as_deploy_user(format!("mkdir -p {}", quote_path(releases_dir))),
        )?;
        if !mkdir.succeeded {
            return Err(fail(FetchStep::CreateReleasesDir, mkdir));
        }

        let clone = remote.run(
            &remote
                .as_deploy_user(format!(
                    "git clone {} {}",
                    quote(&self.source.url),
                    quote(&release_id.to_string())
                ))
                .in_dir(releases_dir),
        )?;
        if !clone.succeeded {
            return Err(fail(FetchStep::Clone, clone));
        }

        // -B so a branch that is already the clone's default still works
        let checkout = remote.run(
            &remote
                .as_deploy_user(format!(
                    "git checkout -B {} origin/{}",
                    branch,
                    quote(&self.source.branch)
                ))
                .in_dir(&release_path),
        )?;
        if !checkout.succeeded {
            return Err(fail(FetchStep::Checkout, checkout));
        }

        let head = remote.run(
            &remote
                .as_deploy_user("git rev-parse HEAD")
                .in_dir(&release_path),
        )?;
        let revision = RevisionHash::new(head.stdout_trimmed());
        if !head.succeeded || revision.is_empty() {
            return Err(fail(FetchStep::ResolveRevision, head));
        }

        tracing::info!(
            release = %release_path.display(),
            revision = %revision,
            "source fetched"
        );
        Ok(revision)
    }
}
