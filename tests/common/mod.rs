//! Common test utilities for Cutover integration tests.
//!
//! This module provides:
//! - `Sandbox`: an origin git repository, a deploy root and service control
//!   scripts inside one temp directory, driven through `LocalExecutor`
//! - `ScriptedConfirmer`, `FixedClock`: port fakes for the library API

#![allow(dead_code)]

pub mod fakes;
pub mod sandbox;

pub use fakes::*;
pub use sandbox::*;
