//! Live adapters for the `UuidSource` port.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use rand::rngs::OsRng;
use rand::{Rng, RngCore};
use uuid::{Timestamp, Uuid};

use crate::adapters::live::clock::SystemClock;
use crate::ports::{Clock, UuidSource};

/// 100 ns intervals between 1582-10-15 (Gregorian reform) and the Unix epoch.
const GREGORIAN_OFFSET: u64 = 0x01B2_1DD2_1381_4000;

/// Version-1 (time-based) UUIDs with a random node id.
///
/// The 60-bit tick is strictly increasing for the lifetime of the source,
/// so the leading `time_low` field differs between any two UUIDs issued
/// less than 2^32 ticks (about seven minutes) apart.
pub struct TimeUuidSource {
    clock: Box<dyn Clock>,
    node_id: [u8; 6],
    clock_seq: u16,
    last_tick: AtomicU64,
}

impl TimeUuidSource {
    /// Creates a source reading time from the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// Creates a source reading time from `clock`, with a random node id
    /// and clock sequence.
    #[must_use]
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        let mut node_id = [0u8; 6];
        OsRng.fill_bytes(&mut node_id);
        // Random node ids carry the multicast bit so they never collide with a MAC.
        node_id[0] |= 0x01;
        let clock_seq = OsRng.gen::<u16>() & 0x3FFF;
        Self::with_parts(clock, node_id, clock_seq)
    }

    /// Creates a source with an explicit node id and clock sequence.
    #[must_use]
    pub fn with_parts(clock: Box<dyn Clock>, node_id: [u8; 6], clock_seq: u16) -> Self {
        Self { clock, node_id, clock_seq: clock_seq & 0x3FFF, last_tick: AtomicU64::new(0) }
    }

    fn next_tick(&self) -> u64 {
        let observed = gregorian_ticks(self.clock.now());
        let previous = self
            .last_tick
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(observed.max(last.saturating_add(1)))
            })
            .unwrap_or_else(|last| last);
        observed.max(previous.saturating_add(1))
    }
}

impl Default for TimeUuidSource {
    fn default() -> Self {
        Self::new()
    }
}

impl UuidSource for TimeUuidSource {
    fn next_uuid(&self) -> Uuid {
        let ts = Timestamp::from_gregorian(self.next_tick(), self.clock_seq);
        Uuid::new_v1(ts, &self.node_id)
    }
}

/// Gregorian 100 ns ticks for `time`. Instants before the Unix epoch clamp
/// to it; instants past the `u64` range saturate.
fn gregorian_ticks(time: DateTime<Utc>) -> u64 {
    let secs = u64::try_from(time.timestamp()).unwrap_or(0);
    // Leap seconds report nanos >= 1e9.
    let nanos = u64::from(time.timestamp_subsec_nanos().min(999_999_999));
    secs.saturating_mul(10_000_000).saturating_add(GREGORIAN_OFFSET + nanos / 100)
}

/// Version-4 (random) UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomUuidSource;

impl UuidSource for RandomUuidSource {
    fn next_uuid(&self) -> Uuid {
        Uuid::new_v4()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::TimeZone;

    use super::*;
    use crate::adapters::fixed::FixedClock;

    #[test]
    fn time_source_produces_version_one() {
        let source = TimeUuidSource::new();
        let uuid = source.next_uuid();
        assert_eq!(uuid.get_version_num(), 1);
        // Multicast bit of the random node id.
        assert_eq!(uuid.as_bytes()[10] & 0x01, 0x01);
    }

    #[test]
    fn stalled_clock_still_yields_distinct_time_low() {
        let instant = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap();
        let source =
            TimeUuidSource::with_parts(Box::new(FixedClock::at(instant)), [1, 2, 3, 4, 5, 6], 7);

        let lows: HashSet<u32> = (0..1_000).map(|_| source.next_uuid().as_fields().0).collect();
        assert_eq!(lows.len(), 1_000);
    }

    #[test]
    fn time_low_reflects_clock_ticks() {
        let instant = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap();
        let source = TimeUuidSource::with_parts(Box::new(FixedClock::at(instant)), [0; 6], 0);

        let expected = gregorian_ticks(instant);
        let (time_low, time_mid, _, _) = source.next_uuid().as_fields();
        assert_eq!(u64::from(time_low), expected & 0xFFFF_FFFF);
        assert_eq!(u64::from(time_mid), (expected >> 32) & 0xFFFF);
        // Second call on a stalled clock advances by exactly one tick.
        assert_eq!(u64::from(source.next_uuid().as_fields().0), (expected + 1) & 0xFFFF_FFFF);
    }

    #[test]
    fn unix_epoch_maps_to_gregorian_offset() {
        let epoch = Utc.timestamp_opt(0, 0).unwrap();
        assert_eq!(gregorian_ticks(epoch), GREGORIAN_OFFSET);
        let later = Utc.timestamp_opt(1, 500).unwrap();
        assert_eq!(gregorian_ticks(later), GREGORIAN_OFFSET + 10_000_000 + 5);
    }

    #[test]
    fn far_future_clock_saturates_instead_of_overflowing() {
        let instant = Utc.with_ymd_and_hms(99_999, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(gregorian_ticks(instant), u64::MAX);

        let source = TimeUuidSource::with_parts(Box::new(FixedClock::at(instant)), [0; 6], 0);
        assert_eq!(source.next_uuid().get_version_num(), 1);
        assert_eq!(source.next_uuid().get_version_num(), 1);
    }

    #[test]
    fn random_source_produces_version_four() {
        let source = RandomUuidSource;
        let a = source.next_uuid();
        let b = source.next_uuid();
        assert_eq!(a.get_version_num(), 4);
        assert_ne!(a, b);
    }
}
