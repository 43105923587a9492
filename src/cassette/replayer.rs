//! Replays recorded interactions from a cassette.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::format::{Cassette, Interaction};
use super::{CLOCK_PORT, UUID_PORT};

#[derive(Debug, Clone)]
struct PortQueue<T> {
    port: &'static str,
    entries: VecDeque<(u64, T)>,
    last_seq: Option<u64>,
}

impl<T> PortQueue<T> {
    fn new(port: &'static str) -> Self {
        Self { port, entries: VecDeque::new(), last_seq: None }
    }

    fn take(&mut self) -> T {
        let port = self.port;
        if let Some((seq, value)) = self.entries.pop_front() {
            self.last_seq = Some(seq);
            return value;
        }
        match self.last_seq {
            Some(seq) => panic!(
                "Cassette exhausted: all interactions for port={port:?} have been consumed. \
                 Last interaction was seq={seq}."
            ),
            None => panic!("Cassette exhausted: no interactions recorded for port={port:?}"),
        }
    }
}

/// Replays results from a loaded cassette. Each port has its own queue,
/// so ports consume their recordings independently of how calls to other
/// ports were interleaved.
#[derive(Debug, Clone)]
pub struct CassetteReplayer {
    clock: PortQueue<DateTime<Utc>>,
    uuid: PortQueue<Uuid>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut clock = PortQueue::new(CLOCK_PORT);
        let mut uuid = PortQueue::new(UUID_PORT);
        for interaction in &cassette.interactions {
            match *interaction {
                Interaction::Clock { seq, now } => clock.entries.push_back((seq, now)),
                Interaction::Uuid { seq, value } => uuid.entries.push_back((seq, value)),
            }
        }
        Self { clock, uuid }
    }

    /// Next recorded clock reading.
    ///
    /// # Panics
    ///
    /// Panics if the cassette has no (more) clock readings.
    pub fn next_now(&mut self) -> DateTime<Utc> {
        self.clock.take()
    }

    /// Next recorded UUID.
    ///
    /// # Panics
    ///
    /// Panics if the cassette has no (more) UUIDs.
    pub fn next_uuid(&mut self) -> Uuid {
        self.uuid.take()
    }
}
