//! Wall clock

use chrono::{Local, NaiveDateTime};

use crate::domain::ports::Clock;

/// Local time of the machine running the deploy.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
