//! Cutover - release orchestration for timestamped releases
//!
//! Cutover clones a branch into a fresh `releases/<timestamp>` directory on
//! the target host, carries shared resources forward from the release that
//! is live, builds it, and swaps the environment's `current` symlink while
//! the web frontend and application services are stopped.
//!
//! ## Layers
//!
//! - `domain` - Value objects, entities, gate policy and ports
//! - `application` - Deploy and status use cases
//! - `infrastructure` - SSH/local executors, terminal confirmer, event sinks
//! - `presentation` - CLI definitions and use case wiring

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{DeployOutcome, DeployUseCase, EnvironmentStatus, StatusUseCase};
pub use config::DeployConfig;
pub use domain::value_objects::{Environment, ReleaseId, RevisionHash, SharedResource};
pub use error::{CutoverError, CutoverResult, PromotionError};
