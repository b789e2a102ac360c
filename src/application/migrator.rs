//! Shared resource migration.
//!
//! Copies each configured resource from the previous release into the new
//! one. Migration is best-effort: a resource that cannot be copied is
//! reported and skipped, never fatal.

use std::path::Path;

use crate::domain::ports::{quote, quote_path};
use crate::domain::value_objects::SharedResource;
use crate::error::CutoverResult;

use super::remote_host::RemoteHost;

/// A resource that was not carried forward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedResource {
    pub resource: SharedResource,
    pub output: String,
}

/// What happened to each configured resource, in configured order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub copied: Vec<SharedResource>,
    pub skipped: Vec<SkippedResource>,
}

impl MigrationReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct SharedResourceMigrator {
    resources: Vec<SharedResource>,
}

impl SharedResourceMigrator {
    pub fn new(resources: Vec<SharedResource>) -> Self {
        Self { resources }
    }

    pub fn resources(&self) -> &[SharedResource] {
        &self.resources
    }

    /// Copy resources from `previous` into `new_release`. With no previous
    /// release there is nothing to copy.
    pub fn migrate(
        &self,
        remote: &RemoteHost,
        previous: Option<&Path>,
        new_release: &Path,
    ) -> CutoverResult<MigrationReport> {
        let mut report = MigrationReport::default();
        let Some(previous) = previous else {
            tracing::info!("no previous release; skipping shared resources");
            return Ok(report);
        };

        for resource in &self.resources {
            match self.copy_one(remote, previous, new_release, resource)? {
                Ok(()) => {
                    tracing::debug!(resource = %resource, "shared resource copied");
                    report.copied.push(resource.clone());
                }
                Err(output) => {
                    tracing::warn!(
                        resource = %resource,
                        from = %previous.display(),
                        "shared resource not copied: {}",
                        output.trim()
                    );
                    report.skipped.push(SkippedResource {
                        resource: resource.clone(),
                        output,
                    });
                }
            }
        }

        Ok(report)
    }

    /// Inner `Err` carries the remote output of the failed copy.
    fn copy_one(
        &self,
        remote: &RemoteHost,
        previous: &Path,
        new_release: &Path,
        resource: &SharedResource,
    ) -> CutoverResult<Result<(), String>> {
        let destination = match resource.parent() {
            Some(parent) => {
                let mkdir = remote.run(
                    &remote
                        .as_deploy_user(format!("mkdir -p {}", quote(parent)))
                        .in_dir(new_release)
                        .tolerating_failure(),
                )?;
                if !mkdir.succeeded {
                    return Ok(Err(mkdir.output));
                }
                quote(parent)
            }
            None => ".".to_string(),
        };

        let copy = remote.run(
            &remote
                .as_deploy_user(format!(
                    "cp -r {} {}",
                    quote_path(&previous.join(resource.as_path())),
                    destination
                ))
                .in_dir(new_release)
                .tolerating_failure(),
        )?;

        Ok(if copy.succeeded {
            Ok(())
        } else {
            Err(copy.output)
        })
    }
}
