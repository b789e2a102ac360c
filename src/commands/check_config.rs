use std::path::Path;

use anyhow::Result;
use cutover::Environment;

use super::config::load_config;
use crate::ui::context::UiContext;
use crate::ui::views::check_config::render_check_config;

/// Load and validate the configuration without contacting any host.
pub fn cmd_check_config(config_path: Option<&Path>, ui: &UiContext) -> Result<()> {
    let loaded = load_config(config_path)?;

    // Every configured environment must resolve, not just the one deployed next.
    for environment in Environment::ALL {
        if loaded.config.environments.get(environment).is_some() {
            loaded.config.settings_for(environment)?;
        }
    }

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "config_ok",
            "file": loaded.path.display().to_string(),
            "environments": Environment::ALL
                .iter()
                .filter(|env| loaded.config.environments.get(**env).is_some())
                .map(|env| env.segment())
                .collect::<Vec<_>>(),
            "warnings": loaded
                .warnings
                .iter()
                .map(|w| serde_json::json!({
                    "key": w.key,
                    "line": w.line,
                    "suggestion": w.suggestion,
                }))
                .collect::<Vec<_>>(),
        }))?;
        return Ok(());
    }

    print!(
        "{}",
        render_check_config(
            &loaded.path,
            &loaded.config,
            &loaded.warnings,
            ui.color,
            ui.unicode,
        )
    );
    Ok(())
}
