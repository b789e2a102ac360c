//! Domain entities.

mod previous_release;
mod release_layout;

pub use previous_release::PreviousRelease;
pub use release_layout::{environment_root, ReleaseLayout, CURRENT_LINK, RELEASES_DIR};
