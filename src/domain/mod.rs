//! Domain Layer
//!
//! The release model and the deploy rules, without any I/O.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (Environment, ReleaseId, RevisionHash)
//! - `entities/` - Release layout on the target host and the previous release
//! - `services/` - Path resolution, gate policy, deploy phase tracking
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - Remote commands and prompts only happen behind ports
//! 2. **Pure decisions** - Whether a gate is required is computed, not asked
//! 3. **Ports & Adapters** - SSH, clock and terminal are swappable

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
