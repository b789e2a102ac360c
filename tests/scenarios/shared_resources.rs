//! SCENARIO: Second release carries shared resources forward.

use std::fs;
use std::sync::Arc;

use cutover::domain::services::GateKind;
use cutover::{Environment, SharedResource};

use crate::common::*;

#[test]
fn log_is_copied_into_the_new_release_before_the_build() {
    if !git_available() {
        eprintln!("git not available; skipping");
        return;
    }
    let sandbox = Sandbox::new();
    let config = sandbox.config();

    let first = sandbox
        .use_case(&config, FixedClock::at(9, 30), Arc::new(ScriptedConfirmer::accept_all()))
        .execute(Environment::Qa)
        .unwrap();
    fs::create_dir_all(first.release_path.join("log")).unwrap();
    fs::write(first.release_path.join("log/app.log"), "request served\n").unwrap();

    let confirmer = Arc::new(ScriptedConfirmer::accept_all());
    let second = sandbox
        .use_case(&config, FixedClock::at(10, 15), confirmer.clone())
        .execute(Environment::Qa)
        .unwrap();

    // A current release exists, so only the initial confirmation is asked.
    assert_eq!(confirmer.asked(), vec![GateKind::ConfirmRelease]);
    assert_eq!(second.previous_release.as_ref(), Some(&first.release_path));
    assert_eq!(
        second.migration.copied,
        vec![SharedResource::new("log").unwrap()]
    );
    assert_eq!(
        fs::read_to_string(second.release_path.join("log/app.log")).unwrap(),
        "request served\n"
    );
    assert!(second.release_path.join("log-present-at-build").is_file());
    assert_eq!(
        fs::read_link(sandbox.current_link(Environment::Qa)).unwrap(),
        second.release_path
    );
    assert_eq!(
        sandbox.releases(Environment::Qa),
        vec!["20261016_093000", "20261016_101500"]
    );
}

/// A resource missing from the previous release is skipped, the rest still copied.
#[test]
fn missing_resource_does_not_stop_the_others() {
    if !git_available() {
        eprintln!("git not available; skipping");
        return;
    }
    let sandbox = Sandbox::new();
    let mut config = sandbox.config();
    config.shared_resources = vec!["log".into(), "downloads".into(), "var/media".into()];

    let first = sandbox
        .use_case(&config, FixedClock::at(9, 30), Arc::new(ScriptedConfirmer::accept_all()))
        .execute(Environment::Qa)
        .unwrap();
    fs::create_dir_all(first.release_path.join("log")).unwrap();
    fs::create_dir_all(first.release_path.join("var/media/uploads")).unwrap();
    fs::write(first.release_path.join("var/media/uploads/a.png"), "png").unwrap();

    let second = sandbox
        .use_case(&config, FixedClock::at(10, 15), Arc::new(ScriptedConfirmer::accept_all()))
        .execute(Environment::Qa)
        .unwrap();

    assert_eq!(
        second.migration.copied,
        vec![
            SharedResource::new("log").unwrap(),
            SharedResource::new("var/media").unwrap()
        ]
    );
    assert_eq!(second.migration.skipped.len(), 1);
    assert_eq!(second.migration.skipped[0].resource.as_str(), "downloads");
    assert!(second
        .release_path
        .join("var/media/uploads/a.png")
        .is_file());
    assert!(second.has_warnings());
}
