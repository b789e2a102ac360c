//! Confirmer Port
//!
//! Asks a human to pass a deploy gate. Whether a gate is required is decided
//! by `GatePolicy`; implementations only handle the asking.

use crate::domain::services::Gate;

/// Trait for answering confirmation gates.
///
/// Implementations can be:
/// - `DialoguerConfirmer`: Prompts on the terminal
/// - scripted fakes in tests
pub trait Confirmer: Send + Sync {
    /// Returns `true` to continue the deploy, `false` to abort it.
    fn confirm(&self, gate: &Gate) -> bool;
}
