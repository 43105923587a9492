//! Replaying adapters that serve recorded results.

pub mod clock;
pub mod uuid_source;

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::cassette::replayer::CassetteReplayer;

pub use clock::ReplayingClock;
pub use uuid_source::ReplayingUuidSource;

fn lock(replayer: &Mutex<CassetteReplayer>) -> MutexGuard<'_, CassetteReplayer> {
    replayer.lock().unwrap_or_else(PoisonError::into_inner)
}
