//! Remote Executor Implementations
//!
//! Both transports run the same argv: an optional `sudo` prefix for the
//! command's identity, then `sh -c '<cd dir && command>'`.

mod local;
mod ssh;

pub use local::LocalExecutor;
pub use ssh::SshExecutor;

use std::process::Output;

use crate::domain::ports::{CommandOutcome, RemoteCommand, RunAs};

/// Argument vector that runs `command` as its identity.
///
/// With `sudo` disabled the identity is ignored and the command runs as
/// whoever the transport logs in as.
pub(crate) fn command_argv(command: &RemoteCommand, sudo: bool) -> Vec<String> {
    let mut argv = Vec::new();
    if sudo {
        argv.push("sudo".to_string());
        argv.push("-n".to_string());
        if let RunAs::User(user) = &command.run_as {
            argv.push("-u".to_string());
            argv.push(user.clone());
        }
    }
    argv.push("sh".to_string());
    argv.push("-c".to_string());
    argv.push(command.shell_line());
    argv
}

/// Keeps stdout on its own and appends stderr to it for display.
pub(crate) fn outcome_from_output(output: Output) -> CommandOutcome {
    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr);

    let mut text = stdout.clone();
    if !stderr.trim().is_empty() {
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(&stderr);
    }

    CommandOutcome {
        succeeded: output.status.success(),
        output: text,
        stdout,
        exit_code: output.status.code(),
    }
}
