//! Configuration module for Cutover
//!
//! Settings come from one TOML file, located in this order:
//! 1. `--config <path>` flag
//! 2. `CUTOVER_CONFIG` environment variable
//! 3. `./cutover.toml`
//! 4. User config (`~/.config/cutover/config.toml`)
//!
//! `CUTOVER_*` environment variables then override individual keys.
//! The loaded value is validated once and passed down explicitly.

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{discover_config_path, with_env_overrides, CONFIG_FILE_NAME};
pub use types::{
    BuildConfig, DeployConfig, EnvironmentConfig, EnvironmentSettings, EnvironmentsConfig,
    PromotionConfig, ServicesConfig, SourceRepository, TransportConfig, TransportKind,
};
