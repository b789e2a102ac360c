//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `DeployUseCase` - Orchestrates a release (inspect, confirm, fetch, migrate, build, promote)
//! - `StatusUseCase` - Reports what an environment is running
//!
//! ## Components
//!
//! - `CurrentReleaseInspector` - Reads the `current` pointer
//! - `SourceFetcher` - Clones a release
//! - `SharedResourceMigrator` - Carries shared resources forward
//! - `BuildRunner` - Runs the build tool
//! - `ReleasePromoter` - Swaps the live release

pub mod builder;
pub mod deploy;
pub mod fetcher;
pub mod inspector;
pub mod migrator;
pub mod promoter;
mod remote_host;
pub mod status;

pub use builder::BuildRunner;
pub use deploy::{DeployOutcome, DeployUseCase};
pub use fetcher::SourceFetcher;
pub use inspector::CurrentReleaseInspector;
pub use migrator::{MigrationReport, SharedResourceMigrator, SkippedResource};
pub use promoter::{
    PointerSwap, PromotionReport, ReleasePromoter, ServiceControls, ToleratedFailure,
};
pub use remote_host::RemoteHost;
pub use status::{EnvironmentStatus, StatusUseCase};
