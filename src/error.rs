//! Error types for configuration loading and identifier parsing.

use std::path::PathBuf;

/// Errors raised while reading settings or stack manifests.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable held a value outside its accepted set.
    #[error("invalid value {value:?} for {key}: expected one of {expected}")]
    InvalidValue {
        /// Variable or flag name.
        key: String,
        /// The rejected value.
        value: String,
        /// Human-readable list of accepted values.
        expected: String,
    },

    /// A manifest file could not be read.
    #[error("failed to read manifest {}: {source}", .path.display())]
    ManifestRead {
        /// Manifest path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A manifest file was not valid YAML for a stack manifest.
    #[error("failed to parse manifest {}: {source}", .path.display())]
    ManifestParse {
        /// Manifest path.
        path: PathBuf,
        /// Underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },

    /// Two resources in one manifest share a logical id.
    #[error("duplicate logical id {0:?} in manifest")]
    DuplicateLogicalId(String),
}

/// Errors raised when a token does not have the identifier layout.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuidParseError {
    /// The token does not start with the expected prefix.
    #[error("token does not start with prefix {0:?}")]
    MissingPrefix(String),

    /// Fewer than the required timestamp digits follow the prefix.
    #[error("timestamp must be {expected} ASCII digits")]
    BadTimestamp {
        /// Required digit count.
        expected: usize,
    },

    /// No `-` follows the timestamp.
    #[error("expected '-' after the timestamp")]
    MissingSeparator,

    /// The part after the separator is empty or not lowercase hex.
    #[error("suffix {0:?} is not a lowercase hex string")]
    BadSuffix(String),
}
