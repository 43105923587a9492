//! Cassette format for recording and replaying port interactions.

pub mod config;
pub mod format;
pub mod recorder;
pub mod replayer;
pub mod session;

/// Port name used for clock interactions.
pub const CLOCK_PORT: &str = "clock";
/// Port name used for UUID source interactions.
pub const UUID_PORT: &str = "uuid";

/// File name a per-port cassette is stored under.
#[must_use]
pub fn port_file_name(port: &str) -> String {
    format!("{port}.cassette.yaml")
}
