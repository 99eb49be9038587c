//! Shared helpers for task unit tests.

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicI32, Ordering};

/// Clock that advances by a fixed step on every reading.
#[derive(Debug)]
pub struct SteppingClock {
    start: DateTime<Utc>,
    step: TimeDelta,
    ticks: AtomicI32,
}

impl SteppingClock {
    /// Starts at 2024-01-01T00:00:00Z and moves one second per reading.
    pub fn new() -> Self {
        Self::starting_at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap_or_default())
    }

    /// Starts at `start` and moves one second per reading.
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            start,
            step: TimeDelta::seconds(1),
            ticks: AtomicI32::new(0),
        }
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        self.start + self.step * tick
    }
}
