//! RemoteExecutor port - run a shell command as a user on a host
//!
//! Every remote effect of a deploy goes through this trait, which keeps
//! the use cases testable with a recording fake.

use std::path::{Path, PathBuf};

/// Identity a command runs as on the target host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunAs {
    /// `sudo -u <user>`
    User(String),
    /// plain `sudo`, for service control and the current pointer
    Superuser,
}

/// A single command to run on a host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteCommand {
    pub host: String,
    pub run_as: RunAs,
    /// Working directory for this command only.
    pub workdir: Option<PathBuf>,
    pub command: String,
    /// A failed outcome is expected and will be logged rather than raised.
    pub tolerate_failure: bool,
}

impl RemoteCommand {
    pub fn new(host: impl Into<String>, run_as: RunAs, command: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            run_as,
            workdir: None,
            command: command.into(),
            tolerate_failure: false,
        }
    }

    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.workdir = Some(dir.into());
        self
    }

    pub fn tolerating_failure(mut self) -> Self {
        self.tolerate_failure = true;
        self
    }

    /// The command line with the scoped directory change applied.
    pub fn shell_line(&self) -> String {
        match &self.workdir {
            Some(dir) => format!("cd {} && {}", quote_path(dir), self.command),
            None => self.command.clone(),
        }
    }
}

/// Structured result of a remote command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub succeeded: bool,
    /// Captured stdout, followed by stderr when present. Shown to operators.
    pub output: String,
    /// Captured stdout alone. ssh and sudo chatter lands on stderr, so
    /// anything parsed from a command reads this.
    pub stdout: String,
    pub exit_code: Option<i32>,
}

impl CommandOutcome {
    pub fn success(stdout: impl Into<String>) -> Self {
        let stdout = stdout.into();
        Self {
            succeeded: true,
            output: stdout.clone(),
            stdout,
            exit_code: Some(0),
        }
    }

    /// Failed command whose diagnostics went to stderr.
    pub fn failure(exit_code: i32, stderr: impl Into<String>) -> Self {
        Self {
            succeeded: false,
            output: stderr.into(),
            stdout: String::new(),
            exit_code: Some(exit_code),
        }
    }

    /// Output with surrounding whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.output.trim()
    }

    /// Stdout with surrounding whitespace removed.
    pub fn stdout_trimmed(&self) -> &str {
        self.stdout.trim()
    }
}

/// The transport itself failed; the command may not have run at all.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("lost connection to {host}: {message}")]
    Disconnected { host: String, message: String },
}

/// Runs commands on target hosts.
///
/// Implementations:
/// - `SshExecutor` - `ssh <host> sudo ... sh -c '...'`
/// - `LocalExecutor` - `sh -c '...'` on this machine
///
/// A command that runs and fails is an `Ok(outcome)` with
/// `succeeded == false`; `Err` means the transport failed.
pub trait RemoteExecutor: Send + Sync {
    fn run(&self, command: &RemoteCommand) -> Result<CommandOutcome, TransportError>;
}

impl<T: RemoteExecutor + ?Sized> RemoteExecutor for std::sync::Arc<T> {
    fn run(&self, command: &RemoteCommand) -> Result<CommandOutcome, TransportError> {
        (**self).run(command)
    }
}

/// Quote a string for safe use as a single shell word.
pub fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

/// Quote a path for safe use in shell commands.
pub fn quote_path(path: &Path) -> String {
    quote(&path.to_string_lossy())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_line_scopes_directory_change() {
        let cmd = RemoteCommand::new("web1", RunAs::Superuser, "ls").in_dir("/srv/app");
        assert_eq!(cmd.shell_line(), "cd '/srv/app' && ls");
    }

    #[test]
    fn shell_line_without_workdir_is_unchanged() {
        let cmd = RemoteCommand::new("web1", RunAs::User("www-data".into()), "git rev-parse HEAD");
        assert_eq!(cmd.shell_line(), "git rev-parse HEAD");
        assert!(!cmd.tolerate_failure);
    }

    #[test]
    fn quote_escapes_single_quotes() {
        assert_eq!(quote("it's"), "'it'\\''s'");
    }

    #[test]
    fn outcome_trimmed_drops_newlines() {
        assert_eq!(CommandOutcome::success("abc\n").trimmed(), "abc");
        assert_eq!(CommandOutcome::success("abc\n").stdout_trimmed(), "abc");
        assert_eq!(CommandOutcome::failure(1, "denied").stdout_trimmed(), "");
    }
}
