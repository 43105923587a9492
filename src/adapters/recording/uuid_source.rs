//! Recording adapter for the `UuidSource` port.

use std::sync::{Arc, Mutex};

use uuid::Uuid;

use super::lock;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::UuidSource;

/// Records issued UUIDs while delegating to an inner source.
pub struct RecordingUuidSource {
    inner: Box<dyn UuidSource>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingUuidSource {
    /// Creates a new recording source wrapping the given implementation.
    pub fn new(inner: Box<dyn UuidSource>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl UuidSource for RecordingUuidSource {
    fn next_uuid(&self) -> Uuid {
        let result = self.inner.next_uuid();
        lock(&self.recorder).record_uuid(result);
        result
    }
}
