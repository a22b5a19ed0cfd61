//! Live clock backed by the system clock.

use chrono::{DateTime, Utc};

use crate::ports::clock::Clock;

/// System clock; snapshots timestamped with it carry real wall-clock time.
pub struct LiveClock;

impl Clock for LiveClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
