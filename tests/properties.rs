//! Property tests for Cutover.
//!
//! Properties use randomized input generation to protect invariants like
//! "release ids sort like their timestamps" and "never panics".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/release_ids.rs"]
mod release_ids;

#[path = "properties/shared_resources.rs"]
mod shared_resources;
