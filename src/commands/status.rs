use std::path::Path;

use anyhow::Result;
use cutover::presentation::create_status_use_case;
use cutover::Environment;

use super::config::load_config;
use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;
use crate::ui::views::status::{render_status, status_to_json};

pub fn cmd_status(
    environment: Environment,
    config_path: Option<&Path>,
    ui: &UiContext,
) -> Result<()> {
    let loaded = load_config(config_path)?;
    print_config_warnings(&loaded.path, &loaded.warnings, ui);

    let status = create_status_use_case(&loaded.config).execute(environment)?;

    if ui.json {
        crate::ui::json::emit(status_to_json(&status))?;
    } else {
        print!("{}", render_status(&status, ui.color, ui.unicode));
    }
    Ok(())
}
