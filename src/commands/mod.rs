pub mod check_config;
pub mod config;
pub mod deploy;
pub mod status;
