//! Service context bundling the port trait objects.

use std::path::Path;
use std::sync::Arc;

use crate::adapters::live::{RandomUuidSource, SystemClock, TimeUuidSource};
use crate::adapters::recording::{RecordingClock, RecordingUuidSource};
use crate::adapters::replaying::{ReplayingClock, ReplayingUuidSource};
use crate::cassette::config::CassetteConfig;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::config::{GeneratorOptions, UuidKind};
use crate::guid::GuidGenerator;
use crate::ports::clock::Clock;
use crate::ports::uuid_source::UuidSource;

/// Bundles the clock and UUID source a generator reads from.
///
/// Constructors wire up different adapter implementations (live,
/// recording, replaying).
pub struct ServiceContext {
    /// Clock for the timestamp part.
    pub clock: Box<dyn Clock>,
    /// UUID source for the suffix.
    pub uuids: Box<dyn UuidSource>,
}

impl ServiceContext {
    /// Creates a live context: system clock and a fresh UUID source of `kind`.
    #[must_use]
    pub fn live(kind: UuidKind) -> Self {
        Self { clock: Box::new(SystemClock), uuids: live_uuids(kind) }
    }

    /// Creates a live context whose every call is recorded into `session`.
    ///
    /// The context must be dropped before [`RecordingSession::finish`].
    #[must_use]
    pub fn recording(session: &RecordingSession, kind: UuidKind) -> Self {
        Self {
            clock: Box::new(RecordingClock::new(Box::new(SystemClock), Arc::clone(&session.clock))),
            uuids: Box::new(RecordingUuidSource::new(live_uuids(kind), Arc::clone(&session.uuid))),
        }
    }

    /// Creates a replaying context from a monolithic cassette file.
    ///
    /// Both ports are served from the same cassette, each with its own
    /// cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = CassetteConfig::load_cassette(path)?;
        tracing::debug!(path = %path.display(), "replaying monolithic cassette");
        Ok(Self {
            clock: Box::new(ReplayingClock::new(CassetteReplayer::new(&cassette))),
            uuids: Box::new(ReplayingUuidSource::new(CassetteReplayer::new(&cassette))),
        })
    }

    /// Creates a replaying context from per-port cassette files.
    ///
    /// A port without a cassette gets an adapter that panics with a clear
    /// message when called.
    ///
    /// # Errors
    ///
    /// Returns an error if any configured cassette file cannot be read or parsed.
    pub fn replaying_from(config: &CassetteConfig) -> Result<Self, String> {
        let replayers = config.load_all()?;

        Ok(Self {
            clock: match replayers.clock {
                Some(r) => Box::new(ReplayingClock::new(r)),
                None => Box::new(PanickingClock),
            },
            uuids: match replayers.uuid {
                Some(r) => Box::new(ReplayingUuidSource::new(r)),
                None => Box::new(PanickingUuidSource),
            },
        })
    }

    /// A generator reading from this context.
    #[must_use]
    pub fn generator(&self, options: GeneratorOptions) -> GuidGenerator<'_> {
        GuidGenerator::new(&*self.clock, &*self.uuids, options)
    }
}

fn live_uuids(kind: UuidKind) -> Box<dyn UuidSource> {
    match kind {
        UuidKind::V1 => Box::new(TimeUuidSource::new()),
        UuidKind::V4 => Box::new(RandomUuidSource),
    }
}

struct PanickingClock;
impl Clock for PanickingClock {
    fn now(&self) -> chrono::DateTime<chrono::Utc> {
        panic!("Clock port not configured in CassetteConfig: no cassette loaded for clock");
    }
}

struct PanickingUuidSource;
impl UuidSource for PanickingUuidSource {
    fn next_uuid(&self) -> uuid::Uuid {
        panic!("UuidSource port not configured in CassetteConfig: no cassette loaded for uuid");
    }
}
