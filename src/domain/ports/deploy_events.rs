//! Deploy Event Port
//!
//! Provides an observable interface for deploy operations.
//! Enables progress reporting, JSON event streams, and debugging.

use std::path::PathBuf;

use crate::domain::services::{DeployPhase, GateKind};
use crate::domain::value_objects::{
    BuildStep, Environment, ReleaseId, RevisionHash, SharedResource,
};

/// Event emitted during deploy operations
#[derive(Debug, Clone)]
pub enum DeployEvent {
    /// Paths resolved, nothing touched yet
    Started {
        environment: Environment,
        host: String,
        release_id: ReleaseId,
        release_path: PathBuf,
    },

    /// Current pointer inspected
    PreviousRelease { path: Option<PathBuf> },

    /// Current pointer could not be inspected
    InspectionFailed { message: String },

    /// A confirmation gate was answered
    GateAnswered { gate: GateKind, accepted: bool },

    /// Source cloned and checked out
    Cloned { revision: RevisionHash },

    /// QA cross-check finished (production only)
    QaChecked {
        matched: bool,
        qa_revision: Option<RevisionHash>,
    },

    /// Shared resource copied from the previous release
    ResourceCopied { resource: SharedResource },

    /// Shared resource could not be copied; migration continued
    ResourceSkipped {
        resource: SharedResource,
        output: String,
    },

    /// Build step finished
    BuildStepCompleted { step: BuildStep },

    /// Promotion step failed but the step tolerates failure
    PromotionStepTolerated { step: String, output: String },

    /// Current pointer now references the new release
    Promoted { release_path: PathBuf },

    /// Deploy reached its terminal state
    Completed {
        release_path: PathBuf,
        revision: RevisionHash,
    },

    /// Operator declined a gate
    Aborted { phase: DeployPhase, reason: String },

    /// Deploy stopped on an error while working towards `phase`
    Failed { phase: DeployPhase, message: String },
}

/// Trait for receiving deploy events
///
/// Implementations can be:
/// - ConsoleEventSink: Progress display in terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: Silent operation
pub trait DeployEventSink: Send + Sync {
    /// Handle a deploy event
    fn on_event(&self, event: DeployEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl DeployEventSink for NoopEventSink {
    fn on_event(&self, _event: DeployEvent) {}
}
