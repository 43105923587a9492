//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::{SuffixMode, UuidKind};

/// Top-level CLI parser for `guidgen`.
#[derive(Debug, Parser)]
#[command(name = "guidgen", version, about = "Generate sortable, prefixed resource identifiers")]
pub struct Cli {
    /// Options shared by all subcommands.
    #[command(flatten)]
    pub global: GlobalArgs,
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Flags that override environment settings or swap the sources.
#[derive(Debug, Default, Args)]
pub struct GlobalArgs {
    /// Render timestamps in UTC instead of local time.
    #[arg(long, global = true)]
    pub utc: bool,
    /// How much of the UUID to keep after the '-'.
    #[arg(long, global = true, value_enum)]
    pub suffix: Option<SuffixMode>,
    /// UUID version for the random part.
    #[arg(long, global = true, value_enum)]
    pub uuid: Option<UuidKind>,
    /// Replay clock and UUIDs from a single cassette file.
    #[arg(long, global = true, value_name = "FILE", conflicts_with = "replay_dir")]
    pub replay: Option<PathBuf>,
    /// Replay from the per-port cassettes a recording session wrote.
    #[arg(long, global = true, value_name = "DIR")]
    pub replay_dir: Option<PathBuf>,
}

/// Output layout for `stack`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns.
    #[default]
    Table,
    /// YAML list.
    Yaml,
    /// JSON array.
    Json,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print one or more identifiers.
    Generate {
        /// Text placed before the timestamp.
        prefix: Option<String>,
        /// How many identifiers to print.
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
    },
    /// Split an identifier into its parts.
    Inspect {
        /// The identifier to inspect.
        token: String,
        /// Prefix the identifier was generated with.
        #[arg(long)]
        prefix: Option<String>,
    },
    /// Name every resource of a stack.
    Stack {
        /// YAML manifest; defaults to the built-in microservice stack.
        #[arg(long, value_name = "FILE")]
        manifest: Option<PathBuf>,
        /// Output layout.
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}
