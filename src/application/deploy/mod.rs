//! Deploy Module
//!
//! Orchestrates one release of one environment.
//!
//! ## Structure
//!
//! - `result` - Result types (`DeployOutcome`)
//! - `use_case` - Core use case logic (`DeployUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use cutover::application::deploy::DeployUseCase;
//!
//! let use_case = DeployUseCase::new(&config, executor, clock, confirmer)?;
//! let outcome = use_case.execute(Environment::Qa)?;
//! ```

mod result;
mod use_case;

pub use result::DeployOutcome;
pub use use_case::DeployUseCase;
