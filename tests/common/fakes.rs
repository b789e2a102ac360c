use std::sync::Mutex;

use chrono::{NaiveDate, NaiveDateTime};
use cutover::domain::ports::{Clock, Confirmer};
use cutover::domain::services::{Gate, GateKind};

/// Answers every gate with yes, except the kinds listed in `decline`.
pub struct ScriptedConfirmer {
    decline: Vec<GateKind>,
    asked: Mutex<Vec<GateKind>>,
}

impl ScriptedConfirmer {
    pub fn accept_all() -> Self {
        Self::declining(&[])
    }

    pub fn declining(kinds: &[GateKind]) -> Self {
        Self {
            decline: kinds.to_vec(),
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn asked(&self) -> Vec<GateKind> {
        self.asked.lock().unwrap().clone()
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&self, gate: &Gate) -> bool {
        self.asked.lock().unwrap().push(gate.kind());
        !self.decline.contains(&gate.kind())
    }
}

pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// 2026-10-16 at `hour:minute:00`.
    pub fn at(hour: u32, minute: u32) -> Self {
        Self(
            NaiveDate::from_ymd_opt(2026, 10, 16)
                .unwrap()
                .and_hms_opt(hour, minute, 0)
                .unwrap(),
        )
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
