//! Release identifiers.

use std::fmt;

use chrono::{NaiveDateTime, Timelike};

/// strftime pattern for release directory names (`20261016_142501`).
pub const RELEASE_ID_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Timestamp-derived name of a release directory.
///
/// Second resolution. Ordering follows the timestamp, which is also the
/// lexicographic order of the rendered names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReleaseId {
    timestamp: NaiveDateTime,
}

impl ReleaseId {
    /// Build an id from a wall-clock reading, dropping sub-second precision.
    pub fn from_timestamp(timestamp: NaiveDateTime) -> Self {
        Self {
            timestamp: timestamp.with_nanosecond(0).unwrap_or(timestamp),
        }
    }

    /// Parse a rendered release directory name.
    pub fn parse(s: &str) -> Option<Self> {
        NaiveDateTime::parse_from_str(s, RELEASE_ID_FORMAT)
            .ok()
            .map(Self::from_timestamp)
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// The id one second later.
    pub fn next(&self) -> Self {
        Self {
            timestamp: self.timestamp + chrono::Duration::seconds(1),
        }
    }
}

impl fmt::Display for ReleaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.timestamp.format(RELEASE_ID_FORMAT))
    }
}
