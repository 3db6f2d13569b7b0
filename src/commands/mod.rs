//! Command dispatch and handlers.

pub mod demo;
pub mod report;
pub mod run;

use std::env;
use std::path::Path;

use crate::cassette::session::RecordingSession;
use crate::cli::{Cli, Command};
use crate::config::Settings;
use crate::context::ServiceContext;

/// Environment variable naming a directory to record port traffic into.
pub const RECORD_ENV: &str = "RWWEB_RECORD";

/// Dispatch a parsed command line to its handler.
///
/// When `RWWEB_RECORD` is set to a directory path, all port interactions are
/// recorded to per-port cassette files in a timestamped directory under it.
///
/// # Errors
///
/// Returns an error string if settings cannot be loaded, recording cannot
/// start or finish, or the selected command handler fails.
pub fn dispatch(cli: &Cli) -> Result<(), String> {
    let settings = Settings::resolve(cli.config.as_deref())?;
    let inner = if cli.sequential_ids {
        ServiceContext::deterministic(&settings)
    } else {
        ServiceContext::in_memory(&settings)
    };

    let (ctx, session) = if let Ok(path) = env::var(RECORD_ENV) {
        let (ctx, session) = ServiceContext::recording_at(inner, Path::new(&path))?;
        (ctx, Some(session))
    } else {
        (inner, None)
    };

    let result = dispatch_with_context(&cli.command, &ctx, &settings);

    // Finish recording after command completes (even on error)
    if let Some(session) = session {
        // Drop context first to release Arc references
        drop(ctx);
        return merge_outcomes(result, finish_recording(session));
    }

    result
}

/// Combines the command outcome with the recording outcome, keeping the
/// command's error first when both fail.
fn merge_outcomes(
    command: Result<(), String>,
    recording: Result<(), String>,
) -> Result<(), String> {
    match (command, recording) {
        (Err(command), Err(recording)) => {
            Err(format!("{command}\nrecording could not be saved: {recording}"))
        }
        (Err(err), Ok(())) | (Ok(()), Err(err)) => Err(err),
        (Ok(()), Ok(())) => Ok(()),
    }
}

/// Dispatch a command with the given service context.
///
/// # Errors
///
/// Returns an error string if the command handler fails.
pub fn dispatch_with_context(
    command: &Command,
    ctx: &ServiceContext,
    settings: &Settings,
) -> Result<(), String> {
    match command {
        Command::Demo => demo::run_with_context(ctx, settings),
        Command::Run { script } => run::run_with_context(ctx, settings, script),
    }
}

/// Finish a recording session and print the output directory.
fn finish_recording(session: RecordingSession) -> Result<(), String> {
    let output_dir = session.finish()?;
    eprintln!("Recording saved to: {}", output_dir.display());
    Ok(())
}
