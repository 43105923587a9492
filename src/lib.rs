//! Sortable, prefixed identifiers for naming infrastructure resources.
//!
//! The core is [`guid::GuidGenerator`], which combines a [`ports::Clock`]
//! reading with a [`ports::UuidSource`] value. [`guid::guid`] is the
//! ambient shortcut using the system clock.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod guid;
pub mod logging;
pub mod ports;
pub mod stack;

pub use guid::{guid, Guid, GuidGenerator};

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli)
}
