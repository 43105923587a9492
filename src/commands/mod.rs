//! Command dispatch and handlers.

pub mod generate;
pub mod inspect;
pub mod stack;

use std::env;
use std::path::PathBuf;

use crate::cassette::config::CassetteConfig;
use crate::cassette::session::RecordingSession;
use crate::cli::{Cli, Command, GlobalArgs};
use crate::config::{GeneratorOptions, Settings, TimeZoneMode};
use crate::context::ServiceContext;

/// Environment variable naming the directory recordings are written under.
pub const RECORD_VAR: &str = "GUIDGEN_RECORD";

/// Dispatch a parsed command to its handler and print its output.
///
/// When `GUIDGEN_RECORD` is set to a directory path, every clock reading
/// and UUID is recorded to per-port cassette files below it.
///
/// # Errors
///
/// Returns an error string if settings are invalid, a cassette cannot be
/// loaded or written, or the command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let settings = resolve_settings(&cli.global)?;

    let (ctx, session) = build_context(&cli.global, &settings)?;
    let result = run_command(&cli.command, &ctx, settings.options);

    // Finish recording after the command completes, even on error.
    if let Some(session) = session {
        // Drop context first to release Arc references
        drop(ctx);
        let dir = session.finish()?;
        eprintln!("Recording saved to: {}", dir.display());
    }

    let output = result?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Run a command against `ctx`, returning what it would print.
///
/// # Errors
///
/// Returns an error string if the command handler fails.
pub fn run_command(
    command: &Command,
    ctx: &ServiceContext,
    options: GeneratorOptions,
) -> Result<String, String> {
    match command {
        Command::Generate { prefix, count } => {
            Ok(generate::run(ctx, options, prefix.as_deref().unwrap_or_default(), *count))
        }
        Command::Inspect { token, prefix } => {
            inspect::run(token, prefix.as_deref().unwrap_or_default())
        }
        Command::Stack { manifest, format } => {
            stack::run(ctx, options, manifest.as_deref(), *format)
        }
    }
}

/// Environment settings with command-line overrides applied.
fn resolve_settings(global: &GlobalArgs) -> Result<Settings, String> {
    let mut settings = Settings::from_env().map_err(|e| e.to_string())?;
    if global.utc {
        settings.options.timezone = TimeZoneMode::Utc;
    }
    if let Some(suffix) = global.suffix {
        settings.options.suffix = suffix;
    }
    if let Some(uuid) = global.uuid {
        settings.uuid = uuid;
    }
    tracing::debug!(
        timezone = %settings.options.timezone,
        suffix = %settings.options.suffix,
        uuid = %settings.uuid,
        "resolved settings"
    );
    Ok(settings)
}

fn build_context(
    global: &GlobalArgs,
    settings: &Settings,
) -> Result<(ServiceContext, Option<RecordingSession>), String> {
    if let Some(path) = &global.replay {
        return Ok((ServiceContext::replaying(path)?, None));
    }
    if let Some(dir) = &global.replay_dir {
        let config = CassetteConfig::from_dir(dir);
        if config.is_empty() {
            return Err(format!("No cassette files found in {}", dir.display()));
        }
        return Ok((ServiceContext::replaying_from(&config)?, None));
    }
    if let Ok(base) = env::var(RECORD_VAR) {
        let session = RecordingSession::new(&PathBuf::from(base))?;
        let ctx = ServiceContext::recording(&session, settings.uuid);
        return Ok((ctx, Some(session)));
    }
    Ok((ServiceContext::live(settings.uuid), None))
}
