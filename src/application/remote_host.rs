//! A target host bound to the deploy user.

use std::sync::Arc;

use crate::domain::ports::{CommandOutcome, RemoteCommand, RemoteExecutor, RunAs};
use crate::error::CutoverResult;

/// Builds and runs commands against one host.
#[derive(Clone)]
pub struct RemoteHost {
    executor: Arc<dyn RemoteExecutor>,
    host: String,
    deploy_user: String,
}

impl RemoteHost {
    pub fn new(
        executor: Arc<dyn RemoteExecutor>,
        host: impl Into<String>,
        deploy_user: impl Into<String>,
    ) -> Self {
        Self {
            executor,
            host: host.into(),
            deploy_user: deploy_user.into(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn deploy_user(&self) -> &str {
        &self.deploy_user
    }

    /// Command run as the configured deploy user.
    pub fn as_deploy_user(&self, command: impl Into<String>) -> RemoteCommand {
        RemoteCommand::new(
            self.host.clone(),
            RunAs::User(self.deploy_user.clone()),
            command,
        )
    }

    /// Command run as root (service control, current pointer).
    pub fn as_superuser(&self, command: impl Into<String>) -> RemoteCommand {
        RemoteCommand::new(self.host.clone(), RunAs::Superuser, command)
    }

    /// Run a command. A failing command is returned as an outcome; only
    /// transport failures are errors.
    pub fn run(&self, command: &RemoteCommand) -> CutoverResult<CommandOutcome> {
        tracing::debug!(
            host = %command.host,
            run_as = ?command.run_as,
            workdir = ?command.workdir,
            command = %command.command,
            "remote command"
        );

        let outcome = self.executor.run(command)?;

        if !outcome.succeeded {
            tracing::debug!(
                host = %command.host,
                command = %command.command,
                exit_code = ?outcome.exit_code,
                tolerated = command.tolerate_failure,
                output = %outcome.trimmed(),
                "remote command failed"
            );
        }

        Ok(outcome)
    }
}

impl std::fmt::Debug for RemoteHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RemoteHost")
            .field("host", &self.host)
            .field("deploy_user", &self.deploy_user)
            .finish()
    }
}
