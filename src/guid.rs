//! Prefixed, time-sortable identifiers for naming provisioned resources.
//!
//! A token has the shape `<prefix><timestamp>-<suffix>`:
//!
//! - `timestamp` is the wall-clock instant as 20 zero-padded digits
//!   (`YYYYMMDDhhmmss` plus six microsecond digits), so tokens with the same
//!   prefix sort lexicographically in creation order.
//! - `suffix` comes from a UUID and separates tokens generated within the
//!   same microsecond. By default it is the UUID's first dash-delimited
//!   field.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use guidgen::adapters::fixed::{FixedClock, SequenceUuidSource};
//! use guidgen::config::{GeneratorOptions, TimeZoneMode};
//! use guidgen::guid::GuidGenerator;
//! use uuid::Uuid;
//!
//! let clock = FixedClock::at(Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap());
//! let uuids = SequenceUuidSource::new(vec![
//!     Uuid::parse_str("1e3b7a5c-2b0f-11ef-8a3e-0242ac120002").unwrap(),
//! ]);
//! let options = GeneratorOptions { timezone: TimeZoneMode::Utc, ..GeneratorOptions::default() };
//! let generator = GuidGenerator::new(&clock, &uuids, options);
//!
//! assert_eq!(generator.generate_string("RDS-"), "RDS-20240615103000000000-1e3b7a5c");
//! ```

use std::fmt;
use std::sync::OnceLock;

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};
use uuid::Uuid;

use crate::adapters::live::{SystemClock, TimeUuidSource};
use crate::config::{GeneratorOptions, SuffixMode, TimeZoneMode};
use crate::error::GuidParseError;
use crate::ports::{Clock, UuidSource};

/// `strftime` pattern of the timestamp part.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S%6f";
/// Digits in the timestamp part (for years 1000 through 9999).
pub const TIMESTAMP_WIDTH: usize = 20;
/// Hex chars in a [`SuffixMode::Segment`] suffix.
pub const SEGMENT_WIDTH: usize = 8;
/// Hex chars in a [`SuffixMode::Full`] suffix.
pub const FULL_WIDTH: usize = 32;

/// A generated identifier. Immutable; `Display` renders the token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guid {
    prefix: String,
    timestamp: String,
    suffix: String,
}

impl Guid {
    /// Caller-supplied prefix, possibly empty.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The 20-digit timestamp part.
    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// The hex suffix after the `-`.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Wall-clock instant encoded in the timestamp, in whatever zone it
    /// was generated in. `None` if the digits do not form a valid date.
    #[must_use]
    pub fn created_at(&self) -> Option<NaiveDateTime> {
        let field = |range: std::ops::Range<usize>| self.timestamp.get(range)?.parse::<u32>().ok();
        let year = i32::try_from(field(0..4)?).ok()?;
        NaiveDate::from_ymd_opt(year, field(4..6)?, field(6..8)?)?.and_hms_micro_opt(
            field(8..10)?,
            field(10..12)?,
            field(12..14)?,
            field(14..20)?,
        )
    }

    /// Splits `token` back into its parts, given the prefix it was
    /// generated with.
    ///
    /// # Errors
    ///
    /// Returns a [`GuidParseError`] describing the first part of the token
    /// that does not match the layout.
    pub fn parse(token: &str, prefix: &str) -> Result<Self, GuidParseError> {
        let rest = token
            .strip_prefix(prefix)
            .ok_or_else(|| GuidParseError::MissingPrefix(prefix.to_string()))?;

        let timestamp = rest
            .get(..TIMESTAMP_WIDTH)
            .filter(|digits| digits.bytes().all(|b| b.is_ascii_digit()))
            .ok_or(GuidParseError::BadTimestamp { expected: TIMESTAMP_WIDTH })?;

        let suffix =
            rest[TIMESTAMP_WIDTH..].strip_prefix('-').ok_or(GuidParseError::MissingSeparator)?;
        if suffix.is_empty() || !suffix.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return Err(GuidParseError::BadSuffix(suffix.to_string()));
        }

        Ok(Self {
            prefix: prefix.to_string(),
            timestamp: timestamp.to_string(),
            suffix: suffix.to_string(),
        })
    }
}

impl fmt::Display for Guid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}-{}", self.prefix, self.timestamp, self.suffix)
    }
}

impl Serialize for Guid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Builds identifiers from an injected clock and UUID source.
///
/// Holds no state of its own; consecutive calls are independent apart
/// from whatever state the sources keep.
pub struct GuidGenerator<'a> {
    clock: &'a dyn Clock,
    uuids: &'a dyn UuidSource,
    options: GeneratorOptions,
}

impl<'a> GuidGenerator<'a> {
    /// Creates a generator over the given sources.
    #[must_use]
    pub fn new(clock: &'a dyn Clock, uuids: &'a dyn UuidSource, options: GeneratorOptions) -> Self {
        Self { clock, uuids, options }
    }

    /// Generates a new identifier. `prefix` is used verbatim.
    #[must_use]
    pub fn generate(&self, prefix: &str) -> Guid {
        let now = self.clock.now();
        let timestamp = match self.options.timezone {
            TimeZoneMode::Local => now.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string(),
            TimeZoneMode::Utc => now.format(TIMESTAMP_FORMAT).to_string(),
        };
        let suffix = render_suffix(self.uuids.next_uuid(), self.options.suffix);

        let guid = Guid { prefix: prefix.to_string(), timestamp, suffix };
        tracing::debug!(%guid, "generated identifier");
        guid
    }

    /// Generates a new identifier and renders it as a token.
    #[must_use]
    pub fn generate_string(&self, prefix: &str) -> String {
        self.generate(prefix).to_string()
    }
}

fn render_suffix(uuid: Uuid, mode: SuffixMode) -> String {
    match mode {
        SuffixMode::Segment => format!("{:08x}", uuid.as_fields().0),
        SuffixMode::Full => uuid.simple().to_string(),
    }
}

/// Generates a token from the system clock and a process-wide v1 UUID
/// source, with default options.
#[must_use]
pub fn guid(prefix: &str) -> String {
    static SOURCE: OnceLock<TimeUuidSource> = OnceLock::new();
    let uuids = SOURCE.get_or_init(TimeUuidSource::new);
    GuidGenerator::new(&SystemClock, uuids, GeneratorOptions::default()).generate_string(prefix)
}
