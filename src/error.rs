//! Error types for Cutover
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::TransportError;
use crate::domain::services::DeployPhase;
use crate::domain::value_objects::{BuildStep, FetchStep};

/// Result type alias for Cutover operations
pub type CutoverResult<T> = Result<T, CutoverError>;

/// Main error type for Cutover operations
#[derive(Error, Debug)]
pub enum CutoverError {
    /// Missing or invalid settings; raised before any remote action
    #[error("configuration error: {message}")]
    Configuration {
        message: String,
        file: Option<PathBuf>,
    },

    /// The current pointer exists but could not be read
    #[error("could not determine the current release under {}", environment_root.display())]
    Inspection {
        environment_root: PathBuf,
        output: String,
    },

    /// Clone or checkout failed; the release directory is left in place
    #[error("fetch failed during {step} for {}", release_path.display())]
    Fetch {
        step: FetchStep,
        release_path: PathBuf,
        output: String,
    },

    /// Build tool failed; the release directory is left in place
    #[error("{step} step failed in {}", release_path.display())]
    Build {
        step: BuildStep,
        release_path: PathBuf,
        output: String,
    },

    /// A fatal promotion step failed
    #[error(transparent)]
    Promotion(#[from] PromotionError),

    /// Operator declined a confirmation gate
    #[error("{reason}")]
    Aborted { phase: DeployPhase, reason: String },

    /// Remote transport could not run a command
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Fatal failures while swapping the live release.
#[derive(Error, Debug)]
pub enum PromotionError {
    #[error("failed to stop web frontend '{service}'")]
    WebFrontendStop { service: String, output: String },

    /// The old pointer is gone and the new one could not be created.
    #[error("current pointer {} could not be created (target {})", link.display(), target.display())]
    PointerLost {
        link: PathBuf,
        target: PathBuf,
        output: String,
    },

    /// Atomic swap failed; the previous pointer is still in place.
    #[error("current pointer {} was not switched to {}", link.display(), target.display())]
    PointerNotSwapped {
        link: PathBuf,
        target: PathBuf,
        output: String,
    },

    #[error("failed to start web frontend '{service}'")]
    WebFrontendStart { service: String, output: String },
}

impl PromotionError {
    pub fn output(&self) -> &str {
        match self {
            PromotionError::WebFrontendStop { output, .. }
            | PromotionError::PointerLost { output, .. }
            | PromotionError::PointerNotSwapped { output, .. }
            | PromotionError::WebFrontendStart { output, .. } => output,
        }
    }

    /// Manual steps the operator must take.
    pub fn remediation(&self) -> String {
        match self {
            PromotionError::WebFrontendStop { service, .. } => format!(
                "Nothing was switched. Check '{service}' on the host, then deploy again."
            ),
            PromotionError::PointerLost { link, target, .. } => format!(
                "The host has NO current release and services are stopped. Recreate the link by hand:\n  ln -s {} {}\nthen start the application services and the web frontend.",
                target.display(),
                link.display()
            ),
            PromotionError::PointerNotSwapped { link, .. } => format!(
                "{} still points at the previous release, but services are stopped. Start the application services and the web frontend by hand.",
                link.display()
            ),
            PromotionError::WebFrontendStart { service, .. } => format!(
                "The new release is live but '{service}' did not start. Start it by hand and check its logs."
            ),
        }
    }
}

impl CutoverError {
    pub fn configuration(message: impl Into<String>) -> Self {
        CutoverError::Configuration {
            message: message.into(),
            file: None,
        }
    }

    /// Declined confirmation, as opposed to a failure.
    pub fn is_abort(&self) -> bool {
        matches!(self, CutoverError::Aborted { .. })
    }

    /// The host was left without a current pointer.
    pub fn is_pointer_lost(&self) -> bool {
        matches!(
            self,
            CutoverError::Promotion(PromotionError::PointerLost { .. })
        )
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        if self.is_abort() {
            2
        } else if self.is_pointer_lost() {
            3
        } else {
            1
        }
    }

    /// Output captured from the remote command that failed, if any.
    pub fn captured_output(&self) -> Option<&str> {
        match self {
            CutoverError::Inspection { output, .. }
            | CutoverError::Fetch { output, .. }
            | CutoverError::Build { output, .. } => Some(output),
            CutoverError::Promotion(err) => Some(err.output()),
            _ => None,
        }
    }

    /// Suggested fix shown under the error.
    pub fn remediation(&self) -> Option<String> {
        match self {
            CutoverError::Configuration { .. } => {
                Some("Fix the configuration and run `cutover check-config`.".to_string())
            }
            CutoverError::Fetch { release_path, .. } | CutoverError::Build { release_path, .. } => {
                Some(format!(
                    "Nothing was promoted. The unfinished release is left at {} for inspection; remove it once done.",
                    release_path.display()
                ))
            }
            CutoverError::Promotion(err) => Some(err.remediation()),
            _ => None,
        }
    }
}
