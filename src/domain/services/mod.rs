//! Domain Services
//!
//! Stateless (or clock-only) logic used by the deploy use case.

mod gate_policy;
mod path_resolver;
mod phase;

pub use gate_policy::{qa_cross_check, shared_resources_gate, Gate, GateKind, QaCheck};
pub use path_resolver::ReleasePathResolver;
pub use phase::{DeployPhase, PhaseTracker};
