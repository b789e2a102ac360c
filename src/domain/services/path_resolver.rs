//! Release path resolution.

use std::path::Path;
use std::sync::Mutex;

use crate::domain::entities::ReleaseLayout;
use crate::domain::ports::Clock;
use crate::domain::value_objects::{Environment, ReleaseId};

/// Computes the release layout for a new deploy.
///
/// Ids issued by one resolver are strictly increasing: when the clock has
/// not moved past the last issued second, the id is bumped past it.
pub struct ReleasePathResolver<C: Clock> {
    clock: C,
    last_issued: Mutex<Option<ReleaseId>>,
}

impl<C: Clock> ReleasePathResolver<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            last_issued: Mutex::new(None),
        }
    }

    /// Allocate a release id and compute its paths under `root_path`.
    pub fn resolve(&self, environment: Environment, root_path: &Path) -> ReleaseLayout {
        let id = self.next_id();
        ReleaseLayout::new(root_path, environment, id)
    }

    fn next_id(&self) -> ReleaseId {
        let candidate = ReleaseId::from_timestamp(self.clock.now());
        let mut last = self
            .last_issued
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let id = match *last {
            Some(previous) if candidate <= previous => previous.next(),
            _ => candidate,
        };
        *last = Some(id);
        id
    }
}
