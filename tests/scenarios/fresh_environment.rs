//! SCENARIO: First release to an environment that has never been deployed.

use std::fs;
use std::sync::Arc;

use cutover::domain::services::GateKind;
use cutover::Environment;

use crate::common::*;

/// Declining the "no current release" question stops before anything is cloned.
#[test]
fn declining_without_current_release_creates_nothing() {
    if !git_available() {
        eprintln!("git not available; skipping");
        return;
    }
    let sandbox = Sandbox::new();
    let confirmer = Arc::new(ScriptedConfirmer::declining(&[
        GateKind::ProceedWithoutSharedResources,
    ]));
    let use_case = sandbox.use_case(&sandbox.config(), FixedClock::at(9, 30), confirmer.clone());

    let err = use_case.execute(Environment::Qa).unwrap_err();

    assert!(err.is_abort());
    assert_eq!(err.exit_code(), 2);
    assert_eq!(
        confirmer.asked(),
        vec![
            GateKind::ConfirmRelease,
            GateKind::ProceedWithoutSharedResources
        ]
    );
    assert!(!sandbox.environment_root(Environment::Qa).join("releases").exists());
    assert!(sandbox.service_calls().is_empty());
}

/// Accepting both questions clones, builds and points `current` at the release.
#[test]
fn accepted_first_release_is_built_and_promoted() {
    if !git_available() {
        eprintln!("git not available; skipping");
        return;
    }
    let sandbox = Sandbox::new();
    let confirmer = Arc::new(ScriptedConfirmer::accept_all());
    let use_case = sandbox.use_case(&sandbox.config(), FixedClock::at(9, 30), confirmer);

    let outcome = use_case.execute(Environment::Qa).unwrap();

    let release = sandbox
        .environment_root(Environment::Qa)
        .join("releases")
        .join("20261016_093000");
    assert_eq!(outcome.release_path, release);
    assert_eq!(outcome.previous_release, None);
    assert!(outcome.migration.copied.is_empty());
    assert!(outcome.migration.skipped.is_empty());

    assert!(release.join("README").is_file());
    assert!(release.join("bootstrapped-qa.cfg").is_file());
    assert!(release.join("built").is_file());
    assert_eq!(
        fs::read_link(sandbox.current_link(Environment::Qa)).unwrap(),
        release
    );
    assert_eq!(outcome.revision.as_str(), git(&sandbox.origin(), &["rev-parse", "HEAD"]));
}

/// Services go down before the pointer moves and come back web frontend last.
#[test]
fn services_are_cycled_around_the_pointer_swap() {
    if !git_available() {
        eprintln!("git not available; skipping");
        return;
    }
    let sandbox = Sandbox::new();
    let use_case = sandbox.use_case(
        &sandbox.config(),
        FixedClock::at(9, 30),
        Arc::new(ScriptedConfirmer::accept_all()),
    );

    use_case.execute(Environment::Qa).unwrap();

    assert_eq!(
        sandbox.service_calls(),
        vec!["nginx stop", "app_qa stop", "app_qa start", "nginx start"]
    );
}
