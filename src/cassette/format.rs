//! Cassette data structures for recording and replaying port interactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{CLOCK_PORT, UUID_PORT};

/// One value handed out by a port, tagged with the port it came from.
///
/// Neither port takes arguments, so a recorded call is just its result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "port", rename_all = "lowercase")]
pub enum Interaction {
    /// A `Clock::now` reading.
    Clock {
        /// Sequence number across the whole cassette.
        seq: u64,
        /// Instant the clock reported.
        now: DateTime<Utc>,
    },
    /// A `UuidSource::next_uuid` result.
    Uuid {
        /// Sequence number across the whole cassette.
        seq: u64,
        /// UUID the source issued.
        value: Uuid,
    },
}

impl Interaction {
    /// Sequence number assigned by the recorder.
    #[must_use]
    pub fn seq(&self) -> u64 {
        match self {
            Self::Clock { seq, .. } | Self::Uuid { seq, .. } => *seq,
        }
    }

    /// Name of the port this interaction belongs to.
    #[must_use]
    pub fn port(&self) -> &'static str {
        match self {
            Self::Clock { .. } => CLOCK_PORT,
            Self::Uuid { .. } => UUID_PORT,
        }
    }
}

/// A cassette containing a sequence of recorded interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Crate version that produced the recording.
    pub version: String,
    /// Ordered list of interactions.
    pub interactions: Vec<Interaction>,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn sample_cassette() -> Cassette {
        let at = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap();
        Cassette {
            name: "naming-session".into(),
            recorded_at: at,
            version: "0.1.0".into(),
            interactions: vec![
                Interaction::Clock { seq: 0, now: at },
                Interaction::Uuid {
                    seq: 1,
                    value: Uuid::parse_str("8f14e45f-ceea-11ee-8000-0242ac120002").unwrap(),
                },
                Interaction::Clock { seq: 2, now: at + chrono::TimeDelta::microseconds(1) },
            ],
        }
    }

    #[test]
    fn yaml_round_trip() {
        let cassette = sample_cassette();
        let yaml = serde_yaml::to_string(&cassette).expect("serialize");
        let deserialized: Cassette = serde_yaml::from_str(&yaml).expect("deserialize");
        assert_eq!(cassette, deserialized);
    }

    #[test]
    fn interactions_are_tagged_by_port() {
        let yaml = serde_yaml::to_string(&sample_cassette()).expect("serialize");
        assert!(yaml.contains("port: clock"));
        assert!(yaml.contains("port: uuid"));
        assert!(yaml.contains("8f14e45f-ceea-11ee-8000-0242ac120002"));
        assert!(!yaml.contains("input"));
    }

    #[test]
    fn parses_hand_written_entries() {
        let yaml = "\
name: manual
recorded_at: 2024-06-15T10:30:00Z
version: '0.1.0'
interactions:
  - port: clock
    seq: 0
    now: 2024-06-15T12:30:00.000001+02:00
  - port: uuid
    seq: 1
    value: 1e3b7a5c-2b0f-11ef-8a3e-0242ac120002
";
        let cassette: Cassette = serde_yaml::from_str(yaml).expect("deserialize");
        let first = cassette.interactions[0];
        assert_eq!(first.port(), "clock");
        assert_eq!(
            first,
            Interaction::Clock {
                seq: 0,
                now: Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap()
                    + chrono::TimeDelta::microseconds(1),
            }
        );
        assert_eq!(cassette.interactions[1].seq(), 1);
        assert_eq!(cassette.interactions[1].port(), "uuid");
    }

    #[test]
    fn rejects_value_of_wrong_type() {
        let yaml = "\
name: bad
recorded_at: 2024-06-15T10:30:00Z
version: '0.1.0'
interactions:
  - port: clock
    seq: 0
    now: yesterday
";
        assert!(serde_yaml::from_str::<Cassette>(yaml).is_err());
    }
}
