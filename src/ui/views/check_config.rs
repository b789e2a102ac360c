use std::path::Path;

use cutover::config::ConfigWarning;
use cutover::{DeployConfig, Environment};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;

pub fn render_check_config(
    path: &Path,
    config: &DeployConfig,
    warnings: &[ConfigWarning],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Check, "Cutover Check Config");
    header.add("File", path.display().to_string());
    let mut out = header.render(supports_color, supports_unicode);
    out.push('\n');

    let mut summary = if warnings.is_empty() {
        ResultSummary::success("Configuration OK")
    } else {
        ResultSummary::partial("Configuration OK (with warnings)")
    };

    summary.add_detail("Repository", format!("{} ({})", config.repository, config.branch));
    summary.add_detail("Root", config.root_path.display().to_string());
    summary.add_detail("User", config.as_user.as_str());
    for environment in Environment::ALL {
        let target = match config.settings_for(environment) {
            Ok(settings) => format!("{}:{}", settings.host, settings.environment_root.display()),
            Err(_) => "(not configured)".to_string(),
        };
        summary.add_detail(environment.label(), target);
    }
    summary.add_detail(
        "Shared",
        if config.shared_resources.is_empty() {
            "(none)".to_string()
        } else {
            config.shared_resources.join(", ")
        },
    );

    for w in warnings {
        summary.add_warning(format!("unknown key '{}'", w.key));
    }

    out.push_str(&summary.render(supports_color, supports_unicode));
    out
}
