//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::Arc;

use crate::application::{DeployUseCase, StatusUseCase};
use crate::config::{DeployConfig, TransportConfig, TransportKind};
use crate::domain::ports::{Confirmer, RemoteExecutor};
use crate::error::CutoverResult;
use crate::infrastructure::{LocalExecutor, SshExecutor, SystemClock};

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase = DeployUseCase<SystemClock>;

/// Executor for the configured transport
pub fn create_executor(transport: &TransportConfig) -> Arc<dyn RemoteExecutor> {
    match transport.kind {
        TransportKind::Ssh => Arc::new(SshExecutor::from_config(transport)),
        TransportKind::Local => Arc::new(LocalExecutor::new(transport.sudo)),
    }
}

/// Create a deploy use case with all dependencies wired up
///
/// Fails on invalid configuration, before anything touches a host.
pub fn create_deploy_use_case(
    config: &DeployConfig,
    confirmer: Arc<dyn Confirmer>,
) -> CutoverResult<ConcreteDeployUseCase> {
    DeployUseCase::new(
        config,
        create_executor(&config.transport),
        SystemClock,
        confirmer,
    )
}

/// Create a status use case with all dependencies wired up
pub fn create_status_use_case(config: &DeployConfig) -> StatusUseCase {
    StatusUseCase::new(config, create_executor(&config.transport))
}
