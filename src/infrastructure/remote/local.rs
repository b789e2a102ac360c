//! Local transport
//!
//! Runs commands on this machine, ignoring the host name. Used when the
//! deploy tool runs on the target itself, and for end-to-end tests.

use std::process::{Command, Stdio};

use crate::domain::ports::{CommandOutcome, RemoteCommand, RemoteExecutor, TransportError};

use super::{command_argv, outcome_from_output};

pub struct LocalExecutor {
    sudo: bool,
}

impl LocalExecutor {
    pub fn new(sudo: bool) -> Self {
        Self { sudo }
    }
}

impl RemoteExecutor for LocalExecutor {
    fn run(&self, command: &RemoteCommand) -> Result<CommandOutcome, TransportError> {
        let argv = command_argv(command, self.sudo);
        let (program, args) = argv.split_first().ok_or_else(|| TransportError::Disconnected {
            host: command.host.clone(),
            message: "empty command".into(),
        })?;

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| TransportError::Spawn {
                program: program.clone(),
                source,
            })?;

        Ok(outcome_from_output(output))
    }
}
