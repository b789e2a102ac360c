//! Deploy Use Case
//!
//! Orchestrates the deployment flow:
//! 1. Resolve the new release's paths
//! 2. Inspect the current release and confirm with the operator
//! 3. Fetch the source (and, for production, cross-check QA)
//! 4. Carry shared resources forward
//! 5. Build
//! 6. Promote
//!
//! Confirmation gates are decided by domain services; this use case only
//! asks the `Confirmer` and sequences the components. Nothing remote runs
//! before the release is confirmed.

use std::path::Path;
use std::sync::Arc;

use crate::application::builder::BuildRunner;
use crate::application::fetcher::SourceFetcher;
use crate::application::inspector::CurrentReleaseInspector;
use crate::application::migrator::SharedResourceMigrator;
use crate::application::promoter::{PointerSwap, ReleasePromoter, ServiceControls};
use crate::application::remote_host::RemoteHost;
use crate::config::{DeployConfig, EnvironmentSettings};
use crate::domain::entities::PreviousRelease;
use crate::domain::ports::{
    Clock, Confirmer, DeployEvent, DeployEventSink, NoopEventSink, RemoteExecutor,
};
use crate::domain::services::{
    qa_cross_check, shared_resources_gate, DeployPhase, Gate, PhaseTracker, QaCheck,
    ReleasePathResolver,
};
use crate::domain::value_objects::{Environment, RevisionHash};
use crate::error::{CutoverError, CutoverResult};

use super::result::DeployOutcome;

/// Deploy use case - orchestrates the deployment flow
///
/// Parameterized by its ports so tests can script the remote host, the
/// clock and the operator's answers.
pub struct DeployUseCase<C: Clock> {
    config: DeployConfig,
    executor: Arc<dyn RemoteExecutor>,
    confirmer: Arc<dyn Confirmer>,
    resolver: ReleasePathResolver<C>,
    inspector: CurrentReleaseInspector,
    fetcher: SourceFetcher,
    migrator: SharedResourceMigrator,
    builder: BuildRunner,
}

impl<C: Clock> DeployUseCase<C> {
    /// Validates `config`; a configuration error surfaces here, before any
    /// remote action.
    pub fn new(
        config: &DeployConfig,
        executor: Arc<dyn RemoteExecutor>,
        clock: C,
        confirmer: Arc<dyn Confirmer>,
    ) -> CutoverResult<Self> {
        config.validate()?;
        let resources = config.shared_resource_list()?;

        Ok(Self {
            config: config.clone(),
            executor,
            confirmer,
            resolver: ReleasePathResolver::new(clock),
            inspector: CurrentReleaseInspector::new(),
            fetcher: SourceFetcher::new(config.source()),
            migrator: SharedResourceMigrator::new(resources),
            builder: BuildRunner::new(config.build.clone()),
        })
    }

    /// Execute the deploy use case
    pub fn execute(&self, environment: Environment) -> CutoverResult<DeployOutcome> {
        self.execute_with_events(environment, Arc::new(NoopEventSink))
    }

    /// Execute the deploy use case with event reporting
    pub fn execute_with_events(
        &self,
        environment: Environment,
        events: Arc<dyn DeployEventSink>,
    ) -> CutoverResult<DeployOutcome> {
        let settings = self.config.settings_for(environment)?;
        let qa_settings = if environment.requires_qa_cross_check() {
            Some(self.config.settings_for(Environment::Qa)?)
        } else {
            None
        };

        let mut tracker = PhaseTracker::new();
        let result = self.run(&settings, qa_settings.as_ref(), &mut tracker, events.as_ref());

        if let Err(err) = &result {
            if !err.is_abort() {
                let completed = tracker.current();
                let phase = completed
                    .successor(qa_settings.is_some())
                    .unwrap_or(completed);
                tracing::error!(phase = %phase, "deploy failed: {}", err);
                events.on_event(DeployEvent::Failed {
                    phase,
                    message: err.to_string(),
                });
            }
        }
        result
    }

    fn run(
        &self,
        settings: &EnvironmentSettings,
        qa_settings: Option<&EnvironmentSettings>,
        tracker: &mut PhaseTracker,
        events: &dyn DeployEventSink,
    ) -> CutoverResult<DeployOutcome> {
        let environment = settings.environment;
        let layout = self.resolver.resolve(environment, &self.config.root_path);
        let release_path = layout.release_path();
        tracker.advance(DeployPhase::PathsResolved);

        tracing::info!(
            environment = %environment,
            host = %settings.host,
            release = %release_path.display(),
            "deploy started"
        );
        events.on_event(DeployEvent::Started {
            environment,
            host: settings.host.clone(),
            release_id: layout.release_id(),
            release_path: release_path.clone(),
        });

        let remote = RemoteHost::new(
            self.executor.clone(),
            settings.host.clone(),
            self.config.as_user.clone(),
        );
        let previous = self.inspect_previous(&remote, layout.environment_root(), events)?;
        events.on_event(DeployEvent::PreviousRelease {
            path: previous.path().map(Path::to_path_buf),
        });

        self.pass_gate(
            Gate::ConfirmRelease {
                environment,
                repository: self.config.repository.clone(),
                branch: self.config.branch.clone(),
                host: settings.host.clone(),
                release_path: release_path.clone(),
            },
            tracker,
            events,
        )?;
        if let Some(gate) = shared_resources_gate(&previous) {
            self.pass_gate(gate, tracker, events)?;
        }
        tracker.advance(DeployPhase::Confirmed);

        let revision = self
            .fetcher
            .fetch(&remote, &layout.releases_dir(), &layout.release_id())?;
        tracker.advance(DeployPhase::Cloned);
        events.on_event(DeployEvent::Cloned {
            revision: revision.clone(),
        });

        let qa_check = match qa_settings {
            Some(qa) => {
                let qa_revision = self.qa_revision(qa)?;
                let check = qa_cross_check(environment, &revision, qa_revision.as_ref());
                events.on_event(DeployEvent::QaChecked {
                    matched: check == QaCheck::Matched,
                    qa_revision,
                });
                if let Some(gate) = check.gate(&revision) {
                    self.pass_gate(gate, tracker, events)?;
                }
                tracker.advance(DeployPhase::QaChecked);
                check
            }
            None => QaCheck::NotRequired,
        };

        let migration = self
            .migrator
            .migrate(&remote, previous.path(), &release_path)?;
        for resource in &migration.copied {
            events.on_event(DeployEvent::ResourceCopied {
                resource: resource.clone(),
            });
        }
        for skipped in &migration.skipped {
            events.on_event(DeployEvent::ResourceSkipped {
                resource: skipped.resource.clone(),
                output: skipped.output.clone(),
            });
        }
        tracker.advance(DeployPhase::ResourcesMigrated);

        self.builder
            .build(&remote, &release_path, environment, events)?;
        tracker.advance(DeployPhase::Built);

        let promoter = ReleasePromoter::new(
            ServiceControls::new(self.config.services.control_dir.clone(), settings),
            self.pointer_swap(),
        );
        let promotion = promoter.promote(&remote, &layout, events)?;
        tracker.advance(DeployPhase::Promoted);
        events.on_event(DeployEvent::Promoted {
            release_path: release_path.clone(),
        });

        tracker.advance(DeployPhase::Done);
        tracing::info!(
            environment = %environment,
            release = %release_path.display(),
            revision = %revision,
            "deploy complete"
        );
        events.on_event(DeployEvent::Completed {
            release_path: release_path.clone(),
            revision: revision.clone(),
        });

        Ok(DeployOutcome {
            environment,
            host: settings.host.clone(),
            release_id: layout.release_id(),
            release_path,
            previous_release: previous.path().map(Path::to_path_buf),
            revision,
            qa_check,
            migration,
            promotion,
            trail: tracker.trail().to_vec(),
        })
    }

    fn pointer_swap(&self) -> PointerSwap {
        if self.config.promotion.atomic_pointer_swap {
            PointerSwap::AtomicRename
        } else {
            PointerSwap::RemoveThenLink
        }
    }

    /// An unreadable pointer is shown to the operator through the
    /// shared-resources gate instead of failing the deploy.
    fn inspect_previous(
        &self,
        remote: &RemoteHost,
        environment_root: &Path,
        events: &dyn DeployEventSink,
    ) -> CutoverResult<PreviousRelease> {
        match self.inspector.inspect(remote, environment_root) {
            Ok(path) => Ok(PreviousRelease::from_inspection(path)),
            Err(err @ CutoverError::Inspection { .. }) => {
                let message = err
                    .captured_output()
                    .map(str::trim)
                    .filter(|output| !output.is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| err.to_string());
                tracing::warn!(root = %environment_root.display(), "{}", message);
                events.on_event(DeployEvent::InspectionFailed {
                    message: message.clone(),
                });
                Ok(PreviousRelease::Uninspectable { message })
            }
            Err(err) => Err(err),
        }
    }

    /// Revision QA is running; `None` when QA has no readable release.
    fn qa_revision(&self, qa: &EnvironmentSettings) -> CutoverResult<Option<RevisionHash>> {
        let remote = RemoteHost::new(
            self.executor.clone(),
            qa.host.clone(),
            self.config.as_user.clone(),
        );
        match self.inspector.inspect(&remote, &qa.environment_root) {
            Ok(Some(path)) => self.inspector.read_revision(&remote, &path),
            Ok(None) => Ok(None),
            Err(err @ CutoverError::Inspection { .. }) => {
                tracing::warn!(host = %qa.host, "QA release unreadable: {}", err);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    fn pass_gate(
        &self,
        gate: Gate,
        tracker: &mut PhaseTracker,
        events: &dyn DeployEventSink,
    ) -> CutoverResult<()> {
        let accepted = self.confirmer.confirm(&gate);
        tracing::debug!(gate = gate.kind().as_str(), accepted, "gate answered");
        events.on_event(DeployEvent::GateAnswered {
            gate: gate.kind(),
            accepted,
        });
        if accepted {
            return Ok(());
        }

        let phase = tracker.current();
        let reason = gate.abort_reason().to_string();
        tracker.advance(DeployPhase::Aborted);
        tracing::info!(phase = %phase, "{}", reason);
        events.on_event(DeployEvent::Aborted {
            phase,
            reason: reason.clone(),
        });
        Err(CutoverError::Aborted { phase, reason })
    }
}
