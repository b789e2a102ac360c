//! Local deploy target for end-to-end tests.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::Arc;

use cutover::config::{EnvironmentConfig, TransportKind};
use cutover::domain::ports::{Clock, Confirmer};
use cutover::presentation::create_executor;
use cutover::{DeployConfig, DeployUseCase, Environment};
use tempfile::TempDir;

/// Whether `git` can be run; end-to-end tests skip themselves otherwise.
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    /// Origin repository with one commit on `master`, an empty deploy root,
    /// and control scripts that append their name and action to a log.
    pub fn new() -> Self {
        let sandbox = Self {
            dir: tempfile::tempdir().unwrap(),
        };
        sandbox.init_origin();
        sandbox.install_control_scripts(&["nginx", "app_qa", "app_production"]);
        fs::create_dir_all(sandbox.root()).unwrap();
        sandbox
    }

    pub fn origin(&self) -> PathBuf {
        self.dir.path().join("origin")
    }

    pub fn root(&self) -> PathBuf {
        self.dir.path().join("srv")
    }

    pub fn control_dir(&self) -> PathBuf {
        self.dir.path().join("init.d")
    }

    pub fn services_log(&self) -> PathBuf {
        self.dir.path().join("services.log")
    }

    pub fn environment_root(&self, environment: Environment) -> PathBuf {
        self.root().join(environment.segment())
    }

    pub fn current_link(&self, environment: Environment) -> PathBuf {
        self.environment_root(environment).join("current")
    }

    pub fn releases(&self, environment: Environment) -> Vec<String> {
        let dir = self.environment_root(environment).join("releases");
        let mut names: Vec<String> = match fs::read_dir(dir) {
            Ok(entries) => entries
                .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
                .collect(),
            Err(_) => Vec::new(),
        };
        names.sort();
        names
    }

    pub fn service_calls(&self) -> Vec<String> {
        fs::read_to_string(self.services_log())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// The build records whether `log` was already in place when it ran.
    pub fn config(&self) -> DeployConfig {
        let mut config = DeployConfig {
            as_user: "deploy".into(),
            root_path: self.root(),
            repository: self.origin().display().to_string(),
            branch: "master".into(),
            shared_resources: vec!["log".into()],
            ..DeployConfig::default()
        };
        config.build.bootstrap = "touch bootstrapped-{config}".into();
        config.build.run = "if [ -e log ]; then touch log-present-at-build; fi; touch built".into();
        config.services.control_dir = self.control_dir();
        config.services.web_frontend = "nginx".into();
        config.transport.kind = TransportKind::Local;
        config.transport.sudo = false;
        config.environments.qa = Some(EnvironmentConfig {
            host: "localhost".into(),
            app_services: vec!["app_qa".into()],
            web_frontend: None,
        });
        config.environments.production = Some(EnvironmentConfig {
            host: "localhost".into(),
            app_services: vec!["app_production".into()],
            web_frontend: None,
        });
        config
    }

    pub fn use_case<C: Clock>(
        &self,
        config: &DeployConfig,
        clock: C,
        confirmer: Arc<dyn Confirmer>,
    ) -> DeployUseCase<C> {
        DeployUseCase::new(config, create_executor(&config.transport), clock, confirmer).unwrap()
    }

    fn init_origin(&self) {
        let origin = self.origin();
        fs::create_dir_all(&origin).unwrap();
        git(&origin, &["init", "-q"]);
        git(&origin, &["symbolic-ref", "HEAD", "refs/heads/master"]);
        fs::write(origin.join("README"), "shop\n").unwrap();
        git(&origin, &["add", "README"]);
        git(
            &origin,
            &[
                "-c",
                "user.name=Release Bot",
                "-c",
                "user.email=release@example.com",
                "commit",
                "-q",
                "-m",
                "initial",
            ],
        );
    }

    fn install_control_scripts(&self, names: &[&str]) {
        let dir = self.control_dir();
        fs::create_dir_all(&dir).unwrap();
        for name in names {
            let script = dir.join(name);
            fs::write(
                &script,
                format!(
                    "#!/bin/sh\necho \"{} $1\" >> '{}'\n",
                    name,
                    self.services_log().display()
                ),
            )
            .unwrap();
            fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }
}

pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}
