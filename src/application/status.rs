//! Read-only environment status.

use std::path::PathBuf;
use std::sync::Arc;

use crate::config::DeployConfig;
use crate::domain::entities::RELEASES_DIR;
use crate::domain::ports::{quote_path, RemoteExecutor};
use crate::domain::value_objects::{Environment, ReleaseId, RevisionHash};
use crate::error::CutoverResult;

use super::inspector::CurrentReleaseInspector;
use super::remote_host::RemoteHost;

/// What an environment is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentStatus {
    pub environment: Environment,
    pub host: String,
    pub current_release: Option<PathBuf>,
    pub revision: Option<RevisionHash>,
    /// Release directories present, oldest first
    pub releases: Vec<ReleaseId>,
}

impl EnvironmentStatus {
    /// Releases newer than the current one (typically failed deploys).
    pub fn orphaned(&self) -> Vec<ReleaseId> {
        let current = self
            .current_release
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|name| ReleaseId::parse(&name.to_string_lossy()));
        match current {
            Some(current) => self
                .releases
                .iter()
                .copied()
                .filter(|id| *id > current)
                .collect(),
            None => self.releases.clone(),
        }
    }
}

pub struct StatusUseCase {
    config: DeployConfig,
    executor: Arc<dyn RemoteExecutor>,
    inspector: CurrentReleaseInspector,
}

impl StatusUseCase {
    pub fn new(config: &DeployConfig, executor: Arc<dyn RemoteExecutor>) -> Self {
        Self {
            config: config.clone(),
            executor,
            inspector: CurrentReleaseInspector::new(),
        }
    }

    pub fn execute(&self, environment: Environment) -> CutoverResult<EnvironmentStatus> {
        let settings = self.config.settings_for(environment)?;
        let remote = RemoteHost::new(
            self.executor.clone(),
            settings.host.clone(),
            self.config.as_user.clone(),
        );

        let current_release = self.inspector.inspect(&remote, &settings.environment_root)?;
        let revision = match &current_release {
            Some(path) => self.inspector.read_revision(&remote, path)?,
            None => None,
        };

        let listing = remote.run(
            &remote
                .as_deploy_user(format!(
                    "ls -1 {}",
                    quote_path(&settings.environment_root.join(RELEASES_DIR))
                ))
                .tolerating_failure(),
        )?;
        let mut releases: Vec<ReleaseId> = if listing.succeeded {
            listing.stdout.lines().filter_map(|l| ReleaseId::parse(l.trim())).collect()
        } else {
            Vec::new()
        };
        releases.sort();

        Ok(EnvironmentStatus {
            environment,
            host: settings.host,
            current_release,
            revision,
            releases,
        })
    }
}
