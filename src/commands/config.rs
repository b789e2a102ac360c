use std::path::{Path, PathBuf};

use anyhow::Result;
use cutover::config::{discover_config_path, with_env_overrides, ConfigWarning};
use cutover::{CutoverError, DeployConfig};

/// Configuration as the commands see it: located, parsed, overridden and validated.
pub struct LoadedConfig {
    pub path: PathBuf,
    pub config: DeployConfig,
    pub warnings: Vec<ConfigWarning>,
}

pub fn load_config(explicit: Option<&Path>) -> Result<LoadedConfig> {
    let cwd = std::env::current_dir()?;
    let user_config_dir = dirs::config_dir();
    let path = discover_config_path(
        explicit,
        |k| std::env::var(k).ok(),
        &cwd,
        user_config_dir.as_deref(),
    )?;
    tracing::debug!(path = %path.display(), "loading configuration");

    let (config, warnings) = DeployConfig::load_with_warnings(&path)?;
    let config = with_env_overrides(config, |k| std::env::var(k).ok());
    config.validate().map_err(|err| attach_file(err, &path))?;

    Ok(LoadedConfig {
        path,
        config,
        warnings,
    })
}

fn attach_file(err: CutoverError, path: &Path) -> CutoverError {
    match err {
        CutoverError::Configuration {
            message,
            file: None,
        } => CutoverError::Configuration {
            message,
            file: Some(path.to_path_buf()),
        },
        other => other,
    }
}
