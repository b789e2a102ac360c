//! Named steps of the remote pipeline, used in errors and events.

use std::fmt;

/// Steps of fetching the source into a new release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStep {
    CreateReleasesDir,
    Clone,
    Checkout,
    ResolveRevision,
}

impl fmt::Display for FetchStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FetchStep::CreateReleasesDir => "create releases directory",
            FetchStep::Clone => "clone",
            FetchStep::Checkout => "checkout",
            FetchStep::ResolveRevision => "resolve revision",
        })
    }
}

/// Steps of building a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildStep {
    Bootstrap,
    Run,
}

impl fmt::Display for BuildStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BuildStep::Bootstrap => "bootstrap",
            BuildStep::Run => "build",
        })
    }
}

/// Steps of promoting a release, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromotionStep {
    StopWebFrontend,
    StopAppService,
    RemovePointer,
    CreatePointer,
    StartAppService,
    StartWebFrontend,
}

impl PromotionStep {
    /// Whether a failure of this step is logged and skipped.
    pub fn is_tolerated(&self) -> bool {
        matches!(
            self,
            PromotionStep::StopAppService
                | PromotionStep::RemovePointer
                | PromotionStep::StartAppService
        )
    }
}

impl fmt::Display for PromotionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PromotionStep::StopWebFrontend => "stop web frontend",
            PromotionStep::StopAppService => "stop application service",
            PromotionStep::RemovePointer => "remove current pointer",
            PromotionStep::CreatePointer => "create current pointer",
            PromotionStep::StartAppService => "start application service",
            PromotionStep::StartWebFrontend => "start web frontend",
        })
    }
}
