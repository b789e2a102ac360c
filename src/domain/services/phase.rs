//! Deploy phases and their allowed transitions.

use std::fmt;

/// Phase of a single deploy run.
///
/// `Init -> PathsResolved -> Confirmed -> Cloned -> (QaChecked) ->
/// ResourcesMigrated -> Built -> Promoted -> Done`, with `Aborted`
/// reachable from any non-terminal phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeployPhase {
    Init,
    PathsResolved,
    Confirmed,
    Cloned,
    QaChecked,
    ResourcesMigrated,
    Built,
    Promoted,
    Done,
    Aborted,
}

impl DeployPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, DeployPhase::Done | DeployPhase::Aborted)
    }

    /// Whether the remote host may hold a new release directory.
    pub fn has_remote_side_effects(&self) -> bool {
        !matches!(
            self,
            DeployPhase::Init | DeployPhase::PathsResolved | DeployPhase::Confirmed
        )
    }

    pub fn can_advance_to(&self, next: DeployPhase) -> bool {
        use DeployPhase::*;

        if next == Aborted {
            return !self.is_terminal();
        }

        matches!(
            (self, next),
            (Init, PathsResolved)
                | (PathsResolved, Confirmed)
                | (Confirmed, Cloned)
                | (Cloned, QaChecked)
                | (Cloned, ResourcesMigrated)
                | (QaChecked, ResourcesMigrated)
                | (ResourcesMigrated, Built)
                | (Built, Promoted)
                | (Promoted, Done)
        )
    }

    /// Phase that follows this one on the success path. `QaChecked` is
    /// only on the path when the deploy cross-checks QA.
    pub fn successor(&self, cross_check_qa: bool) -> Option<DeployPhase> {
        use DeployPhase::*;

        match self {
            Init => Some(PathsResolved),
            PathsResolved => Some(Confirmed),
            Confirmed => Some(Cloned),
            Cloned if cross_check_qa => Some(QaChecked),
            Cloned | QaChecked => Some(ResourcesMigrated),
            ResourcesMigrated => Some(Built),
            Built => Some(Promoted),
            Promoted => Some(Done),
            Done | Aborted => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeployPhase::Init => "init",
            DeployPhase::PathsResolved => "paths_resolved",
            DeployPhase::Confirmed => "confirmed",
            DeployPhase::Cloned => "cloned",
            DeployPhase::QaChecked => "qa_checked",
            DeployPhase::ResourcesMigrated => "resources_migrated",
            DeployPhase::Built => "built",
            DeployPhase::Promoted => "promoted",
            DeployPhase::Done => "done",
            DeployPhase::Aborted => "aborted",
        }
    }
}

impl fmt::Display for DeployPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Records the phases a deploy has passed through.
#[derive(Debug, Clone)]
pub struct PhaseTracker {
    trail: Vec<DeployPhase>,
}

impl PhaseTracker {
    pub fn new() -> Self {
        Self {
            trail: vec![DeployPhase::Init],
        }
    }

    pub fn current(&self) -> DeployPhase {
        self.trail.last().copied().unwrap_or(DeployPhase::Init)
    }

    /// Move to `next`. Transitions outside the state machine are a bug in
    /// the caller.
    pub fn advance(&mut self, next: DeployPhase) {
        debug_assert!(
            self.current().can_advance_to(next),
            "invalid deploy transition {} -> {}",
            self.current(),
            next
        );
        tracing::debug!(from = %self.current(), to = %next, "deploy phase");
        self.trail.push(next);
    }

    pub fn trail(&self) -> &[DeployPhase] {
        &self.trail
    }

}

impl Default for PhaseTracker {
    fn default() -> Self {
        Self::new()
    }
}
