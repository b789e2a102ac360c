//! Build step runner.

use std::path::Path;

use crate::config::BuildConfig;
use crate::domain::ports::{DeployEvent, DeployEventSink};
use crate::domain::value_objects::{BuildStep, Environment};
use crate::error::{CutoverError, CutoverResult};

use super::remote_host::RemoteHost;

/// Runs the bootstrap and build commands inside a release.
#[derive(Debug, Clone)]
pub struct BuildRunner {
    config: BuildConfig,
}

impl BuildRunner {
    pub fn new(config: BuildConfig) -> Self {
        Self { config }
    }

    /// Command line for `step` in `environment`.
    pub fn command_for(&self, step: BuildStep, environment: Environment) -> String {
        let template = match step {
            BuildStep::Bootstrap => &self.config.bootstrap,
            BuildStep::Run => &self.config.run,
        };
        BuildConfig::render(template, environment)
    }

    /// Bootstrap then build. Stops at the first failing step.
    pub fn build(
        &self,
        remote: &RemoteHost,
        release_path: &Path,
        environment: Environment,
        events: &dyn DeployEventSink,
    ) -> CutoverResult<()> {
        for step in [BuildStep::Bootstrap, BuildStep::Run] {
            let outcome = remote.run(
                &remote
                    .as_deploy_user(self.command_for(step, environment))
                    .in_dir(release_path),
            )?;

            if !outcome.succeeded {
                return Err(CutoverError::Build {
                    step,
                    release_path: release_path.to_path_buf(),
                    output: outcome.output,
                });
            }

            tracing::info!(step = %step, release = %release_path.display(), "build step finished");
            events.on_event(DeployEvent::BuildStepCompleted { step });
        }
        Ok(())
    }
}
