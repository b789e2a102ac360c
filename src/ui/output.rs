use std::path::Path;

use cutover::config::ConfigWarning;

use crate::ui::blocks::warning::WarningBlock;
use crate::ui::context::UiContext;

pub fn format_config_warnings(path: &Path, warnings: &[ConfigWarning]) -> Option<WarningBlock> {
    if warnings.is_empty() {
        return None;
    }

    let mut block = WarningBlock::new(format!("Unknown config keys in {}", path.display()));
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("'{}' at line {}", w.key, line),
            None => format!("'{}'", w.key),
        };
        match &w.suggestion {
            Some(suggestion) => {
                block.add_line(format!("{location} (did you mean '{suggestion}'?)"))
            }
            None => block.add_line(location),
        }
    }
    Some(block)
}

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning], ui: &UiContext) {
    if ui.json {
        for w in warnings {
            let _ = crate::ui::json::emit(serde_json::json!({
                "event": "config_warning",
                "file": path.display().to_string(),
                "key": w.key,
                "line": w.line,
                "suggestion": w.suggestion,
            }));
        }
        return;
    }

    if let Some(block) = format_config_warnings(path, warnings) {
        eprint!("{}", block.render(ui.color, ui.unicode));
    }
}
