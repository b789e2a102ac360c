//! Deploy Result
//!
//! Result types for deploy operations.

use std::path::PathBuf;

use crate::application::migrator::MigrationReport;
use crate::application::promoter::PromotionReport;
use crate::domain::services::{DeployPhase, QaCheck};
use crate::domain::value_objects::{Environment, ReleaseId, RevisionHash};

/// Result of a deploy that reached `Done`
#[derive(Debug, Clone)]
pub struct DeployOutcome {
    pub environment: Environment,
    pub host: String,
    pub release_id: ReleaseId,
    /// Release now behind `current`
    pub release_path: PathBuf,
    /// Release that was live before, if any
    pub previous_release: Option<PathBuf>,
    pub revision: RevisionHash,
    pub qa_check: QaCheck,
    pub migration: MigrationReport,
    pub promotion: PromotionReport,
    /// Phases visited, starting at `Init`
    pub trail: Vec<DeployPhase>,
}

impl DeployOutcome {
    /// Whether any best-effort step failed along the way.
    pub fn has_warnings(&self) -> bool {
        !self.migration.is_complete() || !self.promotion.tolerated.is_empty()
    }

    /// Production revision was not confirmed on QA and the operator overrode it.
    pub fn qa_overridden(&self) -> bool {
        matches!(
            self.qa_check,
            QaCheck::Mismatched { .. } | QaCheck::QaMissing
        )
    }
}
