//! Replaying adapter for the `UuidSource` port.

use std::sync::Mutex;

use uuid::Uuid;

use super::lock;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::UuidSource;

/// Replays recorded UUIDs from a cassette.
pub struct ReplayingUuidSource {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingUuidSource {
    /// Creates a new replaying source from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl UuidSource for ReplayingUuidSource {
    fn next_uuid(&self) -> Uuid {
        lock(&self.replayer).next_uuid()
    }
}
