//! Release promotion.
//!
//! Stops the web frontend and application services, points `current` at
//! the new release, then starts everything again. Stopping or starting an
//! application service and removing the old pointer are tolerated
//! failures; the rest are fatal.

use std::path::{Path, PathBuf};

use crate::config::EnvironmentSettings;
use crate::domain::entities::ReleaseLayout;
use crate::domain::ports::{quote_path, CommandOutcome, DeployEvent, DeployEventSink};
use crate::domain::value_objects::PromotionStep;
use crate::error::{CutoverResult, PromotionError};

use super::remote_host::RemoteHost;

/// Init scripts for one environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceControls {
    pub control_dir: PathBuf,
    pub web_frontend: String,
    pub app_services: Vec<String>,
}

impl ServiceControls {
    pub fn new(control_dir: impl Into<PathBuf>, settings: &EnvironmentSettings) -> Self {
        Self {
            control_dir: control_dir.into(),
            web_frontend: settings.web_frontend.clone(),
            app_services: settings.app_services.clone(),
        }
    }

    fn script(&self, name: &str, action: &str) -> String {
        format!("{} {}", quote_path(&self.control_dir.join(name)), action)
    }
}

/// How `current` is replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerSwap {
    /// `rm current` then `ln -s`; the host briefly has no pointer.
    #[default]
    RemoveThenLink,
    /// `ln -sfn` to a staging link then `mv -Tf` over `current`.
    AtomicRename,
}

/// A tolerated step that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToleratedFailure {
    pub step: PromotionStep,
    /// Service name or link path the step acted on.
    pub target: String,
    pub output: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromotionReport {
    pub tolerated: Vec<ToleratedFailure>,
}

#[derive(Debug, Clone)]
pub struct ReleasePromoter {
    controls: ServiceControls,
    swap: PointerSwap,
}

impl ReleasePromoter {
    pub fn new(controls: ServiceControls, swap: PointerSwap) -> Self {
        Self { controls, swap }
    }

    pub fn swap(&self) -> PointerSwap {
        self.swap
    }

    pub fn promote(
        &self,
        remote: &RemoteHost,
        layout: &ReleaseLayout,
        events: &dyn DeployEventSink,
    ) -> CutoverResult<PromotionReport> {
        let mut report = PromotionReport::default();
        let web = &self.controls.web_frontend;

        let stop = remote.run(&remote.as_superuser(self.controls.script(web, "stop")))?;
        if !stop.succeeded {
            return Err(PromotionError::WebFrontendStop {
                service: web.clone(),
                output: stop.output,
            }
            .into());
        }

        for service in &self.controls.app_services {
            let outcome = remote.run(
                &remote
                    .as_superuser(self.controls.script(service, "stop"))
                    .tolerating_failure(),
            )?;
            self.tolerate(&mut report, events, PromotionStep::StopAppService, service, outcome);
        }

        let target = layout.release_path();
        let link = layout.current_link();
        match self.swap {
            PointerSwap::RemoveThenLink => self.remove_then_link(
                remote,
                layout.environment_root(),
                &link,
                &target,
                &mut report,
                events,
            )?,
            PointerSwap::AtomicRename => {
                self.atomic_rename(remote, &layout.staging_link(), &link, &target)?
            }
        }
        tracing::info!(
            link = %link.display(),
            target = %target.display(),
            "current pointer switched"
        );

        for service in &self.controls.app_services {
            let outcome = remote.run(
                &remote
                    .as_superuser(self.controls.script(service, "start"))
                    .tolerating_failure(),
            )?;
            self.tolerate(&mut report, events, PromotionStep::StartAppService, service, outcome);
        }

        let start = remote.run(&remote.as_superuser(self.controls.script(web, "start")))?;
        if !start.succeeded {
            return Err(PromotionError::WebFrontendStart {
                service: web.clone(),
                output: start.output,
            }
            .into());
        }

        Ok(report)
    }

    fn remove_then_link(
        &self,
        remote: &RemoteHost,
        environment_root: &Path,
        link: &Path,
        target: &Path,
        report: &mut PromotionReport,
        events: &dyn DeployEventSink,
    ) -> CutoverResult<()> {
        let remove = remote.run(
            &remote
                .as_superuser(format!("rm {}", quote_path(link)))
                .in_dir(environment_root)
                .tolerating_failure(),
        )?;
        self.tolerate(
            report,
            events,
            PromotionStep::RemovePointer,
            &link.display().to_string(),
            remove,
        );

        let create = remote.run(
            &remote
                .as_superuser(format!("ln -s {} {}", quote_path(target), quote_path(link)))
                .in_dir(environment_root),
        )?;
        if !create.succeeded {
            return Err(PromotionError::PointerLost {
                link: link.to_path_buf(),
                target: target.to_path_buf(),
                output: create.output,
            }
            .into());
        }
        Ok(())
    }

    fn atomic_rename(
        &self,
        remote: &RemoteHost,
        staging: &Path,
        link: &Path,
        target: &Path,
    ) -> CutoverResult<()> {
        for command in [
            format!("ln -sfn {} {}", quote_path(target), quote_path(staging)),
            format!("mv -Tf {} {}", quote_path(staging), quote_path(link)),
        ] {
            let outcome = remote.run(&remote.as_superuser(command))?;
            if !outcome.succeeded {
                return Err(PromotionError::PointerNotSwapped {
                    link: link.to_path_buf(),
                    target: target.to_path_buf(),
                    output: outcome.output,
                }
                .into());
            }
        }
        Ok(())
    }

    fn tolerate(
        &self,
        report: &mut PromotionReport,
        events: &dyn DeployEventSink,
        step: PromotionStep,
        target: &str,
        outcome: CommandOutcome,
    ) {
        if outcome.succeeded {
            return;
        }
        debug_assert!(step.is_tolerated());
        tracing::warn!(step = %step, target, "{}", outcome.trimmed());
        events.on_event(DeployEvent::PromotionStepTolerated {
            step: format!("{} '{}'", step, target),
            output: outcome.output.clone(),
        });
        report.tolerated.push(ToleratedFailure {
            step,
            target: target.to_string(),
            output: outcome.output,
        });
    }
}
