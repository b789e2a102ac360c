//! Cutover CLI - release a branch behind a `current` symlink
//!
//! Usage: cutover [--config PATH] <COMMAND>
//!
//! Commands:
//!   deploy-qa          Release the configured branch to QA
//!   deploy-production  Release to production after checking QA runs the same revision
//!   check-config       Validate the configuration
//!   status             Show the release an environment is running

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cutover::presentation::{Cli, Commands};
use cutover::CutoverError;

mod commands;
mod ui;

use ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ui = UiContext::new(cli.json, cli.verbose, cli.color);
    if let Err(err) = run(&cli, &ui) {
        std::process::exit(report(&err, &ui));
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "cutover=warn",
        1 => "cutover=info",
        2 => "cutover=debug",
        _ => "cutover=trace",
    };

    // Logs share stderr with prompts; stdout carries output and NDJSON.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: &Cli, ui: &UiContext) -> Result<()> {
    let config_path = cli.config.as_deref();

    match &cli.command {
        Commands::DeployQa | Commands::DeployProduction => {
            let environment = cli
                .command
                .deploy_environment()
                .ok_or_else(|| anyhow::anyhow!("not a deploy command"))?;
            commands::deploy::cmd_deploy(environment, config_path, ui)
        }
        Commands::CheckConfig => commands::check_config::cmd_check_config(config_path, ui),
        Commands::Status { environment } => {
            commands::status::cmd_status(*environment, config_path, ui)
        }
    }
}

/// Print the failure and pick the exit status.
fn report(err: &anyhow::Error, ui: &UiContext) -> i32 {
    match err.downcast_ref::<CutoverError>() {
        Some(cutover) if cutover.is_abort() => {
            // The event stream already closed with an aborted `complete` event.
            if !ui.json {
                eprint!(
                    "{}",
                    ui::views::deploy::render_abort(&cutover.to_string(), ui.color, ui.unicode)
                );
            }
            cutover.exit_code()
        }
        Some(cutover) => {
            ui::error::print_error(err, ui);
            cutover.exit_code()
        }
        None => {
            ui::error::print_error(err, ui);
            1
        }
    }
}
