use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use cutover::domain::ports::DeployEventSink;
use cutover::infrastructure::{DialoguerConfirmer, JsonEventSink};
use cutover::presentation::create_deploy_use_case;
use cutover::Environment;

use super::config::load_config;
use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;
use crate::ui::progress::ConsoleEventSink;
use crate::ui::theme::CutoverTheme;
use crate::ui::views::deploy::{render_deploy_header, render_deploy_summary};

pub fn cmd_deploy(
    environment: Environment,
    config_path: Option<&Path>,
    ui: &UiContext,
) -> Result<()> {
    let loaded = load_config(config_path)?;
    print_config_warnings(&loaded.path, &loaded.warnings, ui);

    let settings = loaded.config.settings_for(environment)?;
    if !ui.json {
        print!(
            "{}",
            render_deploy_header(
                &settings,
                &loaded.config.repository,
                &loaded.config.branch,
                ui.color,
                ui.unicode,
            )
        );
        println!();
    }
    if ui.gates_unanswerable() {
        tracing::warn!("stdin is not a terminal; every confirmation will be declined");
    }

    let theme = Box::new(CutoverTheme::new(ui.unicode));
    let confirmer = Arc::new(DialoguerConfirmer::with_theme(theme));
    let use_case = create_deploy_use_case(&loaded.config, confirmer)?;

    let sink: Arc<dyn DeployEventSink> = if ui.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::stdout(ui.color, ui.unicode, ui.verbose))
    };

    let outcome = use_case.execute_with_events(environment, sink)?;

    if !ui.json {
        println!();
        print!("{}", render_deploy_summary(&outcome, ui.color, ui.unicode));
    }
    Ok(())
}
