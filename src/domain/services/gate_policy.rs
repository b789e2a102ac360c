//! Gate Policy
//!
//! Decides which confirmations a deploy needs. Asking the operator is the
//! `Confirmer` port's job; nothing here touches a terminal.

use std::path::PathBuf;

use crate::domain::entities::PreviousRelease;
use crate::domain::value_objects::{Environment, RevisionHash};

/// A confirmation the operator must give before the deploy continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    /// Initial confirmation summarising the release.
    ConfirmRelease {
        environment: Environment,
        repository: String,
        branch: String,
        host: String,
        release_path: PathBuf,
    },

    /// No usable previous release, so shared resources cannot be migrated.
    ProceedWithoutSharedResources { inspection_error: Option<String> },

    /// Production revision differs from what QA is running.
    OverrideUntestedRevision {
        revision: RevisionHash,
        qa_revision: Option<RevisionHash>,
    },
}

/// Gate identity without its payload, for events and abort reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateKind {
    ConfirmRelease,
    ProceedWithoutSharedResources,
    OverrideUntestedRevision,
}

impl GateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GateKind::ConfirmRelease => "confirm_release",
            GateKind::ProceedWithoutSharedResources => "proceed_without_shared_resources",
            GateKind::OverrideUntestedRevision => "override_untested_revision",
        }
    }
}

impl Gate {
    pub fn kind(&self) -> GateKind {
        match self {
            Gate::ConfirmRelease { .. } => GateKind::ConfirmRelease,
            Gate::ProceedWithoutSharedResources { .. } => GateKind::ProceedWithoutSharedResources,
            Gate::OverrideUntestedRevision { .. } => GateKind::OverrideUntestedRevision,
        }
    }

    /// Question put to the operator.
    pub fn prompt(&self) -> String {
        match self {
            Gate::ConfirmRelease {
                environment,
                repository,
                branch,
                host,
                release_path,
            } => format!(
                "This will release {}'s {} branch to {}'s {} path and restart appropriate {} processes. Continue?",
                repository,
                branch,
                host,
                release_path.display(),
                environment.label()
            ),
            Gate::ProceedWithoutSharedResources {
                inspection_error: None,
            } => "It looks like there is no current release. This means no shared resources can be copied to this new release. Continue anyway?".to_string(),
            Gate::ProceedWithoutSharedResources {
                inspection_error: Some(message),
            } => format!(
                "The current release could not be determined ({}). No shared resources will be copied to this new release. Continue anyway?",
                message
            ),
            Gate::OverrideUntestedRevision {
                revision,
                qa_revision: Some(qa),
            } => format!(
                "Revision {} has not been released to QA (QA is running {}). Continue anyway?",
                revision.short(),
                qa.short()
            ),
            Gate::OverrideUntestedRevision {
                revision,
                qa_revision: None,
            } => format!(
                "Revision {} has not been released to QA (QA has no current release). Continue anyway?",
                revision.short()
            ),
        }
    }

    /// Message reported when the operator declines.
    pub fn abort_reason(&self) -> &'static str {
        match self {
            Gate::ConfirmRelease { .. } => "Release not confirmed. Aborting at user request.",
            Gate::ProceedWithoutSharedResources { .. } => {
                "No current release found. Aborting at user request."
            }
            Gate::OverrideUntestedRevision { .. } => {
                "Revision has not been released to QA. Aborting at user request."
            }
        }
    }
}

/// Gate required before deploying without a usable previous release.
pub fn shared_resources_gate(previous: &PreviousRelease) -> Option<Gate> {
    match previous {
        PreviousRelease::Found(_) => None,
        PreviousRelease::Absent => Some(Gate::ProceedWithoutSharedResources {
            inspection_error: None,
        }),
        PreviousRelease::Uninspectable { message } => Some(Gate::ProceedWithoutSharedResources {
            inspection_error: Some(message.clone()),
        }),
    }
}

/// Outcome of comparing a fetched revision with QA's current revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QaCheck {
    /// Environment does not cross-check (QA itself).
    NotRequired,
    Matched,
    Mismatched { qa_revision: RevisionHash },
    /// QA has no current release (or it could not be read).
    QaMissing,
}

impl QaCheck {
    /// Override gate, when the check did not pass.
    pub fn gate(&self, revision: &RevisionHash) -> Option<Gate> {
        match self {
            QaCheck::NotRequired | QaCheck::Matched => None,
            QaCheck::Mismatched { qa_revision } => Some(Gate::OverrideUntestedRevision {
                revision: revision.clone(),
                qa_revision: Some(qa_revision.clone()),
            }),
            QaCheck::QaMissing => Some(Gate::OverrideUntestedRevision {
                revision: revision.clone(),
                qa_revision: None,
            }),
        }
    }
}

/// Compare the fetched revision against QA's current revision.
pub fn qa_cross_check(
    environment: Environment,
    revision: &RevisionHash,
    qa_revision: Option<&RevisionHash>,
) -> QaCheck {
    if !environment.requires_qa_cross_check() {
        return QaCheck::NotRequired;
    }

    match qa_revision {
        None => QaCheck::QaMissing,
        Some(qa) if qa.is_empty() => QaCheck::QaMissing,
        Some(qa) if qa == revision => QaCheck::Matched,
        Some(qa) => QaCheck::Mismatched {
            qa_revision: qa.clone(),
        },
    }
}
