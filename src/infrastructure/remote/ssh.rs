//! SSH transport
//!
//! Runs each command through the system `ssh` client, one connection per
//! command. Host aliases, keys and multiplexing come from the user's ssh
//! configuration.

use std::process::{Command, Stdio};

use crate::config::TransportConfig;
use crate::domain::ports::{quote, CommandOutcome, RemoteCommand, RemoteExecutor, TransportError};

use super::{command_argv, outcome_from_output};

/// `ssh` exits with 255 when the connection itself fails.
const SSH_CONNECTION_FAILED: i32 = 255;

/// Stderr prefixes ssh itself writes when it cannot reach or log in to the
/// host.
const SSH_FAILURE_MARKERS: &[&str] = &[
    "ssh:",
    "Permission denied (",
    "Host key verification failed",
    "Connection closed by",
    "Connection reset by",
    "kex_exchange_identification",
];

/// A remote command may exit with 255 too; only ssh's own message marks a
/// lost connection.
fn is_connection_failure(exit_code: Option<i32>, stderr: &str) -> bool {
    exit_code == Some(SSH_CONNECTION_FAILED)
        && stderr
            .lines()
            .any(|line| SSH_FAILURE_MARKERS.iter().any(|m| line.trim_start().starts_with(m)))
}

pub struct SshExecutor {
    program: String,
    options: Vec<String>,
    sudo: bool,
}

impl SshExecutor {
    pub fn new(program: impl Into<String>, options: Vec<String>, sudo: bool) -> Self {
        Self {
            program: program.into(),
            options,
            sudo,
        }
    }

    pub fn from_config(config: &TransportConfig) -> Self {
        Self::new(
            config.ssh_command.clone(),
            config.ssh_options.clone(),
            config.sudo,
        )
    }

    /// The remote command line. ssh joins its arguments with spaces and
    /// hands them to the login shell, so every word is quoted.
    pub fn remote_line(&self, command: &RemoteCommand) -> String {
        command_argv(command, self.sudo)
            .iter()
            .map(|word| quote(word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl RemoteExecutor for SshExecutor {
    fn run(&self, command: &RemoteCommand) -> Result<CommandOutcome, TransportError> {
        let output = Command::new(&self.program)
            .args(&self.options)
            .arg("-o")
            .arg("BatchMode=yes")
            .arg(&command.host)
            .arg(self.remote_line(command))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| TransportError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if is_connection_failure(output.status.code(), &stderr) {
            return Err(TransportError::Disconnected {
                host: command.host.clone(),
                message: stderr.trim().to_string(),
            });
        }
        Ok(outcome_from_output(output))
    }
}
