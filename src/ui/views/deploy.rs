use cutover::config::EnvironmentSettings;
use cutover::domain::services::QaCheck;
use cutover::DeployOutcome;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_deploy_header(
    settings: &EnvironmentSettings,
    repository: &str,
    branch: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(
        Icon::Deploy,
        format!("Cutover Deploy: {}", settings.environment.label()),
    );
    header.add("Host", settings.host.as_str());
    header.add("Root", settings.environment_root.display().to_string());
    header.add("Repository", repository);
    header.add("Branch", branch);

    header.render(supports_color, supports_unicode)
}

pub fn render_deploy_summary(
    outcome: &DeployOutcome,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = if outcome.has_warnings() {
        ResultSummary::partial("Deploy Complete (with warnings)")
    } else {
        ResultSummary::success("Deploy Complete")
    };

    summary.add_detail("Environment", outcome.environment.label());
    summary.add_detail("Host", outcome.host.as_str());
    summary.add_detail("Release", outcome.release_path.display().to_string());
    summary.add_detail("Revision", outcome.revision.short());
    summary.add_detail(
        "Previous",
        outcome
            .previous_release
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none)".to_string()),
    );

    match &outcome.qa_check {
        QaCheck::NotRequired => {}
        QaCheck::Matched => summary.add_info("revision matches QA"),
        QaCheck::Mismatched { qa_revision } => summary.add_warning(format!(
            "released over QA mismatch (QA runs {})",
            qa_revision.short()
        )),
        QaCheck::QaMissing => summary.add_warning("released without a QA release to compare"),
    }

    if !outcome.migration.copied.is_empty() {
        summary.add_info(format!(
            "{} shared resources carried forward",
            outcome.migration.copied.len()
        ));
    }
    for skipped in &outcome.migration.skipped {
        summary.add_warning(format!("shared resource '{}' not copied", skipped.resource));
    }
    for tolerated in &outcome.promotion.tolerated {
        summary.add_warning(format!(
            "{} '{}' failed",
            tolerated.step, tolerated.target
        ));
    }

    if outcome.has_warnings() {
        summary.with_next_step("Check the warnings above on the host");
    }

    summary.render(supports_color, supports_unicode)
}

pub fn render_abort(reason: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} {}\n",
        Icon::Warning.colored(supports_color, supports_unicode),
        ColoredText::warning(reason).bold().render(supports_color)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutover::application::{MigrationReport, PromotionReport, SkippedResource};
    use cutover::domain::services::DeployPhase;
    use cutover::{Environment, ReleaseId, RevisionHash, SharedResource};
    use std::path::PathBuf;

    fn outcome() -> DeployOutcome {
        let release_id = ReleaseId::parse("20261016_093000").unwrap();
        DeployOutcome {
            environment: Environment::Qa,
            host: "qa.example.com".into(),
            release_id,
            release_path: PathBuf::from("/srv/app/qa/releases/20261016_093000"),
            previous_release: Some(PathBuf::from("/srv/app/qa/releases/20261015_120000")),
            revision: RevisionHash::new("3f9a1c2e4b5d6f708192a3b4c5d6e7f809112233"),
            qa_check: QaCheck::NotRequired,
            migration: MigrationReport {
                copied: vec![SharedResource::new("log").unwrap()],
                skipped: Vec::new(),
            },
            promotion: PromotionReport::default(),
            trail: vec![DeployPhase::Init, DeployPhase::Done],
        }
    }

    #[test]
    fn clean_deploy_is_a_success() {
        let rendered = render_deploy_summary(&outcome(), false, false);
        assert!(rendered.contains("[OK] Deploy Complete"));
        assert!(rendered.contains("/srv/app/qa/releases/20261016_093000"));
        assert!(rendered.contains("1 shared resources carried forward"));
        assert!(!rendered.contains("Next:"));
    }

    #[test]
    fn skipped_resource_makes_a_partial_summary() {
        let mut outcome = outcome();
        outcome.migration.skipped.push(SkippedResource {
            resource: SharedResource::new("downloads").unwrap(),
            output: "cp: cannot stat".into(),
        });

        let rendered = render_deploy_summary(&outcome, false, false);
        assert!(rendered.contains("[WARN] Deploy Complete (with warnings)"));
        assert!(rendered.contains("shared resource 'downloads' not copied"));
        assert!(rendered.contains("Next:"));
    }

    #[test]
    fn qa_override_is_reported() {
        let mut outcome = outcome();
        outcome.environment = Environment::Production;
        outcome.qa_check = QaCheck::Mismatched {
            qa_revision: RevisionHash::new("aaaaaaaaaaaa"),
        };

        let rendered = render_deploy_summary(&outcome, false, false);
        assert!(rendered.contains("released over QA mismatch"));
    }

    #[test]
    fn abort_line_uses_warning_icon() {
        let rendered = render_abort(
            "Release not confirmed. Aborting at user request.",
            false,
            false,
        );
        assert_eq!(
            rendered,
            "[WARN] Release not confirmed. Aborting at user request.\n"
        );
    }
}
