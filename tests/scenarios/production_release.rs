//! SCENARIO: Production release of a revision QA is already running.

use std::fs;
use std::sync::Arc;

use cutover::domain::services::{GateKind, QaCheck};
use cutover::Environment;

use crate::common::*;

#[test]
fn matching_qa_revision_promotes_without_override() {
    if !git_available() {
        eprintln!("git not available; skipping");
        return;
    }
    let sandbox = Sandbox::new();
    let config = sandbox.config();

    let qa = sandbox
        .use_case(&config, FixedClock::at(9, 30), Arc::new(ScriptedConfirmer::accept_all()))
        .execute(Environment::Qa)
        .unwrap();

    let confirmer = Arc::new(ScriptedConfirmer::accept_all());
    let production = sandbox
        .use_case(&config, FixedClock::at(11, 0), confirmer.clone())
        .execute(Environment::Production)
        .unwrap();

    assert_eq!(production.qa_check, QaCheck::Matched);
    assert_eq!(production.revision, qa.revision);
    assert!(!confirmer
        .asked()
        .contains(&GateKind::OverrideUntestedRevision));
    assert!(production.release_path.join("bootstrapped-production.cfg").is_file());
    assert_eq!(
        fs::read_link(sandbox.current_link(Environment::Production)).unwrap(),
        production.release_path
    );
}

/// A commit that never reached QA needs the override; declining leaves
/// production untouched.
#[test]
fn untested_revision_is_not_promoted_without_override() {
    if !git_available() {
        eprintln!("git not available; skipping");
        return;
    }
    let sandbox = Sandbox::new();
    let config = sandbox.config();

    sandbox
        .use_case(&config, FixedClock::at(9, 30), Arc::new(ScriptedConfirmer::accept_all()))
        .execute(Environment::Qa)
        .unwrap();

    let origin = sandbox.origin();
    fs::write(origin.join("CHANGELOG"), "unreleased\n").unwrap();
    git(&origin, &["add", "CHANGELOG"]);
    git(
        &origin,
        &[
            "-c",
            "user.name=Release Bot",
            "-c",
            "user.email=release@example.com",
            "commit",
            "-q",
            "-m",
            "untested",
        ],
    );

    let confirmer = Arc::new(ScriptedConfirmer::declining(&[
        GateKind::OverrideUntestedRevision,
    ]));
    let err = sandbox
        .use_case(&config, FixedClock::at(11, 0), confirmer.clone())
        .execute(Environment::Production)
        .unwrap_err();

    assert!(err.is_abort());
    assert_eq!(
        confirmer.asked().last(),
        Some(&GateKind::OverrideUntestedRevision)
    );
    assert!(!sandbox.current_link(Environment::Production).exists());
    // The clone is left behind for inspection, nothing else happened.
    assert_eq!(sandbox.releases(Environment::Production), vec!["20261016_110000"]);
    assert_eq!(
        sandbox.service_calls(),
        vec!["nginx stop", "app_qa stop", "app_qa start", "nginx start"]
    );
}
