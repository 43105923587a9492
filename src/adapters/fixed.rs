//! Deterministic adapters for tests and reproducible naming.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use chrono::{DateTime, TimeDelta, Utc};
use uuid::Uuid;

use crate::ports::{Clock, UuidSource};

/// Clock that starts at a fixed instant and advances by a fixed step on
/// every call. A zero step keeps it frozen.
#[derive(Debug)]
pub struct FixedClock {
    next: Mutex<DateTime<Utc>>,
    step: TimeDelta,
}

impl FixedClock {
    /// A clock frozen at `instant`.
    #[must_use]
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self::stepping(instant, TimeDelta::zero())
    }

    /// A clock returning `start`, then `start + step`, `start + 2 * step`, ...
    #[must_use]
    pub fn stepping(start: DateTime<Utc>, step: TimeDelta) -> Self {
        Self { next: Mutex::new(start), step }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        let mut next = self.next.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let current = *next;
        *next = current + self.step;
        current
    }
}

/// UUID source replaying a scripted list, wrapping around at the end.
#[derive(Debug)]
pub struct SequenceUuidSource {
    uuids: Vec<Uuid>,
    cursor: AtomicUsize,
}

impl SequenceUuidSource {
    /// Creates a source over `uuids`. An empty list yields the nil UUID.
    #[must_use]
    pub fn new(uuids: Vec<Uuid>) -> Self {
        Self { uuids, cursor: AtomicUsize::new(0) }
    }
}

impl UuidSource for SequenceUuidSource {
    fn next_uuid(&self) -> Uuid {
        if self.uuids.is_empty() {
            return Uuid::nil();
        }
        let i = self.cursor.fetch_add(1, Ordering::Relaxed);
        self.uuids[i % self.uuids.len()]
    }
}
