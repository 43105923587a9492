//! Recording adapters that capture port results to cassettes.

pub mod clock;
pub mod uuid_source;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::cassette::recorder::CassetteRecorder;

pub use clock::RecordingClock;
pub use uuid_source::RecordingUuidSource;

/// Locks a shared recorder. A panic in another recording thread leaves
/// the interaction list intact, so poisoning is ignored.
fn lock(recorder: &Arc<Mutex<CassetteRecorder>>) -> MutexGuard<'_, CassetteRecorder> {
    recorder.lock().unwrap_or_else(PoisonError::into_inner)
}
