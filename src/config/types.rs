//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::environment_root;
use crate::domain::value_objects::{ConfigWarning, Environment, SharedResource};
use crate::error::{CutoverError, CutoverResult};

use super::loader;

/// Build tool invocation, run inside the new release directory.
///
/// `{config}` expands to `<environment>.cfg`, `{environment}` to `qa` or
/// `production`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    #[serde(default = "default_bootstrap")]
    pub bootstrap: String,

    #[serde(default = "default_build_run")]
    pub run: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            bootstrap: default_bootstrap(),
            run: default_build_run(),
        }
    }
}

impl BuildConfig {
    pub fn render(template: &str, environment: Environment) -> String {
        template
            .replace("{config}", &environment.build_config_name())
            .replace("{environment}", environment.segment())
    }
}

fn default_bootstrap() -> String {
    "python2.6 bootstrap.py -c {config}".to_string()
}

fn default_build_run() -> String {
    "./bin/buildout -v -c {config}".to_string()
}

/// Service control scripts shared by every environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesConfig {
    /// Directory holding the init scripts (`<dir>/<name> stop|start`)
    #[serde(default = "default_control_dir")]
    pub control_dir: PathBuf,

    /// Web frontend init script name
    #[serde(default = "default_web_frontend")]
    pub web_frontend: String,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            control_dir: default_control_dir(),
            web_frontend: default_web_frontend(),
        }
    }
}

fn default_control_dir() -> PathBuf {
    PathBuf::from("/etc/init.d")
}

fn default_web_frontend() -> String {
    "nginx".to_string()
}

/// How the current pointer is swapped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromotionConfig {
    /// Replace remove-then-link with link-then-rename. Changes behaviour:
    /// the host is never without a current pointer during promotion.
    #[serde(default)]
    pub atomic_pointer_swap: bool,
}

/// Remote transport selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransportKind {
    #[default]
    Ssh,
    Local,
}

/// Transport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportConfig {
    #[serde(default)]
    pub kind: TransportKind,

    #[serde(default = "default_ssh_command")]
    pub ssh_command: String,

    #[serde(default)]
    pub ssh_options: Vec<String>,

    /// Wrap commands in `sudo`; disable only when already running as the
    /// right users.
    #[serde(default = "default_true")]
    pub sudo: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            kind: TransportKind::default(),
            ssh_command: default_ssh_command(),
            ssh_options: Vec::new(),
            sudo: true,
        }
    }
}

fn default_ssh_command() -> String {
    "ssh".to_string()
}

fn default_true() -> bool {
    true
}

/// Per-environment host and service scripts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    #[serde(default)]
    pub host: String,

    /// Application service init scripts (e.g. `project_name_qa.fcgi`)
    #[serde(default)]
    pub app_services: Vec<String>,

    /// Overrides `services.web_frontend` for this environment
    #[serde(default)]
    pub web_frontend: Option<String>,
}

/// One settings record per environment variant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnvironmentsConfig {
    #[serde(default)]
    pub qa: Option<EnvironmentConfig>,

    #[serde(default)]
    pub production: Option<EnvironmentConfig>,
}

impl EnvironmentsConfig {
    pub fn get(&self, environment: Environment) -> Option<&EnvironmentConfig> {
        match environment {
            Environment::Qa => self.qa.as_ref(),
            Environment::Production => self.production.as_ref(),
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeployConfig {
    /// User the release tree and build belong to
    #[serde(default)]
    pub as_user: String,

    /// Root in which `<environment>/releases` and `<environment>/current` live
    #[serde(default)]
    pub root_path: PathBuf,

    #[serde(default)]
    pub repository: String,

    #[serde(default = "default_branch")]
    pub branch: String,

    /// Paths copied from the previous release into each new one
    #[serde(default)]
    pub shared_resources: Vec<String>,

    #[serde(default)]
    pub build: BuildConfig,

    #[serde(default)]
    pub services: ServicesConfig,

    #[serde(default)]
    pub promotion: PromotionConfig,

    #[serde(default)]
    pub transport: TransportConfig,

    #[serde(default)]
    pub environments: EnvironmentsConfig,
}

fn default_branch() -> String {
    "master".to_string()
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            as_user: String::new(),
            root_path: PathBuf::new(),
            repository: String::new(),
            branch: default_branch(),
            shared_resources: Vec::new(),
            build: BuildConfig::default(),
            services: ServicesConfig::default(),
            promotion: PromotionConfig::default(),
            transport: TransportConfig::default(),
            environments: EnvironmentsConfig::default(),
        }
    }
}

/// Repository and branch a release is cloned from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRepository {
    pub url: String,
    pub branch: String,
}

/// Everything needed to deploy one environment, resolved from config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentSettings {
    pub environment: Environment,
    pub host: String,
    pub environment_root: PathBuf,
    pub web_frontend: String,
    pub app_services: Vec<String>,
}

impl DeployConfig {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> CutoverResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Check required settings shared by every environment.
    pub fn validate(&self) -> CutoverResult<()> {
        let required = [
            ("as_user", self.as_user.as_str()),
            ("repository", self.repository.as_str()),
            ("branch", self.branch.as_str()),
            ("build.bootstrap", self.build.bootstrap.as_str()),
            ("build.run", self.build.run.as_str()),
            ("services.web_frontend", self.services.web_frontend.as_str()),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(CutoverError::configuration(format!(
                    "'{}' is required",
                    key
                )));
            }
        }

        if self.root_path.as_os_str().is_empty() {
            return Err(CutoverError::configuration("'root_path' is required"));
        }
        if !self.root_path.is_absolute() {
            return Err(CutoverError::configuration(format!(
                "'root_path' must be absolute, got '{}'",
                self.root_path.display()
            )));
        }

        self.shared_resource_list()?;
        Ok(())
    }

    /// Parsed shared resource list, in configured order.
    pub fn shared_resource_list(&self) -> CutoverResult<Vec<SharedResource>> {
        self.shared_resources
            .iter()
            .map(|raw| {
                SharedResource::new(raw)
                    .map_err(|e| CutoverError::configuration(e.to_string()))
            })
            .collect()
    }

    pub fn source(&self) -> SourceRepository {
        SourceRepository {
            url: self.repository.clone(),
            branch: self.branch.clone(),
        }
    }

    /// Structured settings for `environment`; fails if the environment is
    /// not configured.
    pub fn settings_for(&self, environment: Environment) -> CutoverResult<EnvironmentSettings> {
        let env = self.environments.get(environment).ok_or_else(|| {
            CutoverError::configuration(format!(
                "missing [environments.{}] section",
                environment.segment()
            ))
        })?;

        if env.host.trim().is_empty() {
            return Err(CutoverError::configuration(format!(
                "'environments.{}.host' is required",
                environment.segment()
            )));
        }

        Ok(EnvironmentSettings {
            environment,
            host: env.host.trim().to_string(),
            environment_root: environment_root(&self.root_path, environment),
            web_frontend: env
                .web_frontend
                .clone()
                .unwrap_or_else(|| self.services.web_frontend.clone()),
            app_services: env.app_services.clone(),
        })
    }
}
