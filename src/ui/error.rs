use cutover::{CutoverError, PromotionError};

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::ci::{github_actions_annotation, is_github_actions, AnnotationLevel};
use crate::ui::context::UiContext;

pub fn format_error(err: &anyhow::Error, ui: &UiContext) -> String {
    match err.downcast_ref::<CutoverError>() {
        Some(cutover) => format_cutover_error(cutover, ui),
        None => ErrorBlock::new("ERROR", format!("{:#}", err))
            .with_width(ui.caps.width)
            .render(ui.color, ui.unicode),
    }
}

fn format_cutover_error(err: &CutoverError, ui: &UiContext) -> String {
    let mut block = ErrorBlock::new(error_title(err), err.to_string()).with_width(ui.caps.width);

    if let Some(location) = error_location(err) {
        block = block.with_location(location);
    }
    if let Some(output) = err.captured_output() {
        block = block.with_output(output);
    }
    if let Some(fix) = err.remediation() {
        block = block.with_fix(fix);
    }

    block.render(ui.color, ui.unicode)
}

fn error_title(err: &CutoverError) -> &'static str {
    match err {
        CutoverError::Configuration { .. } => "CONFIGURATION ERROR",
        CutoverError::Inspection { .. } => "INSPECTION FAILED",
        CutoverError::Fetch { .. } => "FETCH FAILED",
        CutoverError::Build { .. } => "BUILD FAILED",
        CutoverError::Promotion(PromotionError::PointerLost { .. }) => {
            "HOST HAS NO CURRENT RELEASE"
        }
        CutoverError::Promotion(_) => "PROMOTION FAILED",
        CutoverError::Aborted { .. } => "ABORTED",
        CutoverError::Transport(_) => "REMOTE COMMAND FAILED",
        CutoverError::Io(_) => "IO ERROR",
    }
}

fn error_location(err: &CutoverError) -> Option<String> {
    match err {
        CutoverError::Configuration { file, .. } => {
            file.as_ref().map(|f| f.display().to_string())
        }
        CutoverError::Inspection {
            environment_root, ..
        } => Some(environment_root.display().to_string()),
        CutoverError::Fetch { release_path, .. } | CutoverError::Build { release_path, .. } => {
            Some(release_path.display().to_string())
        }
        CutoverError::Promotion(
            PromotionError::PointerLost { link, .. }
            | PromotionError::PointerNotSwapped { link, .. },
        ) => Some(link.display().to_string()),
        _ => None,
    }
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let cutover = err.downcast_ref::<CutoverError>();
        let output = serde_json::json!({
            "event": "error",
            "message": format!("{:#}", err),
            "output": cutover.and_then(|e| e.captured_output()),
            "fix": cutover.and_then(|e| e.remediation()),
            "exit_code": cutover.map(|e| e.exit_code()).unwrap_or(1),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    if ui.caps.is_ci && is_github_actions(|k| std::env::var(k).ok()) {
        let file = match err.downcast_ref::<CutoverError>() {
            Some(CutoverError::Configuration { file, .. }) => {
                file.as_ref().map(|f| f.display().to_string())
            }
            _ => None,
        };
        let level = match err.downcast_ref::<CutoverError>() {
            Some(e) if e.is_abort() => AnnotationLevel::Warning,
            _ => AnnotationLevel::Error,
        };
        eprintln!(
            "{}",
            github_actions_annotation(
                level,
                &format!("{:#}", err),
                file.as_deref(),
                Some("Cutover"),
            )
        );
    }

    eprint!("{}", format_error(err, ui));
}
