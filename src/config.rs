//! Generator settings from the environment.
//!
//! `.env` is loaded first (if present), then these variables are read:
//!
//! - `GUIDGEN_TIMEZONE`: `local` (default) or `utc`
//! - `GUIDGEN_SUFFIX`: `segment` (default) or `full`
//! - `GUIDGEN_UUID`: `v1` (default) or `v4`
//!
//! Command-line flags override whatever is read here.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable selecting [`TimeZoneMode`].
pub const TIMEZONE_VAR: &str = "GUIDGEN_TIMEZONE";
/// Environment variable selecting [`SuffixMode`].
pub const SUFFIX_VAR: &str = "GUIDGEN_SUFFIX";
/// Environment variable selecting [`UuidKind`].
pub const UUID_VAR: &str = "GUIDGEN_UUID";

/// Which wall clock the timestamp part is rendered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TimeZoneMode {
    /// Host local time.
    #[default]
    Local,
    /// UTC; sorts correctly across DST changes and hosts.
    Utc,
}

/// How much of the UUID ends up after the `-`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SuffixMode {
    /// First dash-delimited field (8 hex chars).
    #[default]
    Segment,
    /// All 32 hex chars, no dashes.
    Full,
}

/// Which UUID version the live source produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UuidKind {
    /// Time-based.
    #[default]
    V1,
    /// Random.
    V4,
}

impl fmt::Display for TimeZoneMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value_name(self, f)
    }
}

impl fmt::Display for SuffixMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value_name(self, f)
    }
}

impl fmt::Display for UuidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_value_name(self, f)
    }
}

/// Writes the name clap accepts for `value` on the command line.
fn write_value_name<T: ValueEnum>(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value.to_possible_value() {
        Some(possible) => f.write_str(possible.get_name()),
        None => Ok(()),
    }
}

/// Comma-separated names of every value `T` accepts.
fn accepted_values<T: ValueEnum>() -> String {
    T::value_variants()
        .iter()
        .filter_map(ValueEnum::to_possible_value)
        .map(|possible| possible.get_name().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Options that shape a generated identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorOptions {
    /// Time zone of the timestamp part.
    pub timezone: TimeZoneMode,
    /// Length of the random part.
    pub suffix: SuffixMode,
}

/// Resolved settings: generator options plus the live UUID source choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Options passed to the generator.
    pub options: GeneratorOptions,
    /// UUID version for the live source.
    pub uuid: UuidKind,
}

impl Settings {
    /// Loads `.env` if present and reads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set to an
    /// unrecognized value.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`; unset keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a value is unrecognized.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            options: GeneratorOptions {
                timezone: parse_var(&lookup, TIMEZONE_VAR)?.unwrap_or_default(),
                suffix: parse_var(&lookup, SUFFIX_VAR)?.unwrap_or_default(),
            },
            uuid: parse_var(&lookup, UUID_VAR)?.unwrap_or_default(),
        })
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: ValueEnum,
    F: Fn(&str) -> Option<String>,
{
    let Some(value) = lookup(key).filter(|v| !v.trim().is_empty()) else {
        return Ok(None);
    };
    match <T as ValueEnum>::from_str(value.trim(), true) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(_) => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value,
            expected: accepted_values::<T>(),
        }),
    }
}
