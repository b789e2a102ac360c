//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--config, --json, --color, --verbose) are inherited by all subcommands
//! - There is deliberately no flag that answers confirmations

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::value_objects::Environment;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Cutover - release a branch to QA or production behind a `current` symlink
#[derive(Parser, Debug)]
#[command(name = "cutover")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (default: $CUTOVER_CONFIG, ./cutover.toml, then the user config dir)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Emit NDJSON events on stdout
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Release the configured branch to the QA environment
    DeployQa,

    /// Release the configured branch to production (cross-checked against QA)
    DeployProduction,

    /// Validate the configuration and show the resolved layout
    CheckConfig,

    /// Show the release an environment is running
    Status {
        /// qa or production
        environment: Environment,
    },
}

impl Commands {
    /// Environment a deploy command targets.
    pub fn deploy_environment(&self) -> Option<Environment> {
        match self {
            Commands::DeployQa => Some(Environment::Qa),
            Commands::DeployProduction => Some(Environment::Production),
            _ => None,
        }
    }
}
