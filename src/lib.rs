//! Core library for `rwweb`, a spatial read/write web browser.
//!
//! Documents (web pages and notes) live in a graph; a canvas shows a star of
//! items around the focused document. The [`navigator`] turns user gestures
//! into calls on those two collaborators, which sit behind the traits in
//! [`ports`] so they can be in-memory, recorded or replayed.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod content;
pub mod context;
pub mod error;
pub mod logging;
pub mod navigator;
pub mod ports;
pub mod script;

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
    logging::init_logging(cli.log.as_deref());
    commands::dispatch(&cli)
}

#[cfg(test)]
mod tests {
    use super::run;

    #[test]
    fn run_executes_demo() {
        let result = run(["rwweb", "demo", "--sequential-ids"]);
        assert!(result.is_ok());
    }

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["rwweb", "unknown"]);
        assert!(result.is_err());
    }
}
