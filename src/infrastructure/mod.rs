//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `remote/` - Remote executors (SSH, local)
//! - `prompt/` - Terminal confirmer
//! - `events/` - Event sinks
//! - `clock` - Wall clock

pub mod clock;
pub mod events;
pub mod prompt;
pub mod remote;

// Re-export for convenience
pub use clock::SystemClock;
pub use events::JsonEventSink;
pub use prompt::DialoguerConfirmer;
pub use remote::{LocalExecutor, SshExecutor};
