//! Tests that run the `cutover` binary.

#![cfg(unix)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::{tempdir, TempDir};

struct CliEnv {
    dir: TempDir,
}

impl CliEnv {
    fn new() -> Self {
        let env = Self {
            dir: tempdir().unwrap(),
        };
        fs::create_dir_all(env.home()).unwrap();
        fs::create_dir_all(env.root()).unwrap();
        env
    }

    fn home(&self) -> PathBuf {
        self.dir.path().join("home")
    }

    fn root(&self) -> PathBuf {
        self.dir.path().join("srv")
    }

    fn write_config(&self, extra: &str) -> PathBuf {
        let path = self.dir.path().join("cutover.toml");
        fs::write(
            &path,
            format!(
                r#"as_user = "deploy"
root_path = "{root}"
repository = "git@example.com:shop.git"
branch = "master"
shared_resources = ["log"]
{extra}
[transport]
kind = "local"
sudo = false

[environments.qa]
host = "localhost"
app_services = ["app_qa"]
"#,
                root = self.root().display(),
            ),
        )
        .unwrap();
        path
    }

    fn run(&self, args: &[&str]) -> Output {
        self.run_in(self.dir.path(), args)
    }

    fn run_in(&self, cwd: &Path, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_cutover"))
            .current_dir(cwd)
            .env("HOME", self.home())
            .env("XDG_CONFIG_HOME", self.home().join(".config"))
            .env("NO_COLOR", "1")
            .env_remove("CUTOVER_CONFIG")
            .env_remove("CUTOVER_BRANCH")
            .env_remove("CUTOVER_ROOT_PATH")
            .env_remove("RUST_LOG")
            .args(args)
            .output()
            .unwrap()
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn json_lines(output: &Output) -> Vec<Value> {
    stdout(output)
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).expect("each stdout line is JSON"))
        .collect()
}

#[test]
fn help_lists_commands() {
    let env = CliEnv::new();
    let output = env.run(&["--help"]);

    assert!(output.status.success());
    let text = stdout(&output);
    for command in ["deploy-qa", "deploy-production", "check-config", "status"] {
        assert!(text.contains(command), "missing {command} in:\n{text}");
    }
}

#[test]
fn check_config_finds_file_in_working_directory() {
    let env = CliEnv::new();
    env.write_config("");

    let output = env.run(&["check-config"]);

    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("Configuration OK"));
    assert!(text.contains("localhost"));
    assert!(text.contains("(not configured)"));
}

#[test]
fn check_config_reports_unknown_keys() {
    let env = CliEnv::new();
    let path = env.write_config("brnach = \"develop\"\n");

    let output = env.run(&["--config", path.to_str().unwrap(), "check-config"]);

    assert!(output.status.success());
    assert!(stderr(&output).contains("did you mean 'branch'?"));
}

#[test]
fn check_config_json_is_one_event() {
    let env = CliEnv::new();
    env.write_config("");

    let output = env.run(&["--json", "check-config"]);

    assert!(output.status.success());
    let events = json_lines(&output);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["event"], "config_ok");
    assert_eq!(events[0]["environments"], serde_json::json!(["qa"]));
}

#[test]
fn missing_configuration_is_a_fatal_error() {
    let env = CliEnv::new();

    let output = env.run(&["check-config"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("CONFIGURATION ERROR"));
}

#[test]
fn invalid_configuration_names_the_key() {
    let env = CliEnv::new();
    let path = env.dir.path().join("cutover.toml");
    fs::write(&path, "root_path = \"relative/path\"\nrepository = \"x\"\n").unwrap();

    let output = env.run(&["check-config"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("'as_user' is required"));
}

#[test]
fn deploy_without_a_terminal_declines_and_creates_nothing() {
    let env = CliEnv::new();
    env.write_config("");

    let output = env.run(&["deploy-qa"]);

    assert_eq!(output.status.code(), Some(2), "stderr:\n{}", stderr(&output));
    assert!(stderr(&output).contains("Aborting at user request."));
    assert!(!env.root().join("qa/releases").exists());
}

#[test]
fn deploy_json_stream_ends_with_aborted_completion() {
    let env = CliEnv::new();
    env.write_config("");

    let output = env.run(&["--json", "deploy-qa"]);

    assert_eq!(output.status.code(), Some(2));
    let events = json_lines(&output);
    assert_eq!(events.first().unwrap()["event"], "start");
    let last = events.last().unwrap();
    assert_eq!(last["event"], "complete");
    assert_eq!(last["status"], "aborted");
}

#[test]
fn deploy_to_unconfigured_environment_fails_before_remote_work() {
    let env = CliEnv::new();
    env.write_config("");

    let output = env.run(&["deploy-production"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("missing [environments.production] section"));
}

#[test]
fn status_of_fresh_environment() {
    let env = CliEnv::new();
    env.write_config("");

    let output = env.run(&["status", "qa"]);

    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    assert!(stdout(&output).contains("(no current release)"));
}

#[test]
fn status_json_lists_release_directories() {
    let env = CliEnv::new();
    env.write_config("");
    let releases = env.root().join("qa/releases");
    fs::create_dir_all(releases.join("20261015_120000")).unwrap();
    fs::create_dir_all(releases.join("20261016_093000")).unwrap();
    std::os::unix::fs::symlink(
        releases.join("20261015_120000"),
        env.root().join("qa/current"),
    )
    .unwrap();

    let output = env.run(&["--json", "status", "qa"]);

    assert!(output.status.success(), "stderr:\n{}", stderr(&output));
    let events = json_lines(&output);
    assert_eq!(events.len(), 1);
    assert_eq!(
        events[0]["releases"],
        serde_json::json!(["20261015_120000", "20261016_093000"])
    );
    assert_eq!(events[0]["orphaned"], serde_json::json!(["20261016_093000"]));
}

#[test]
fn unknown_environment_is_rejected_by_the_parser() {
    let env = CliEnv::new();
    let output = env.run(&["status", "staging"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("unknown environment 'staging'"));
}
