//! Value objects for the release model.

mod config_warning;
mod environment;
mod release_id;
mod revision;
mod shared_resource;
mod step;

pub use config_warning::ConfigWarning;
pub use environment::{Environment, ParseEnvironmentError};
pub use release_id::{ReleaseId, RELEASE_ID_FORMAT};
pub use revision::RevisionHash;
pub use shared_resource::{InvalidSharedResource, SharedResource};
pub use step::{BuildStep, FetchStep, PromotionStep};
