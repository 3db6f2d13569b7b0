//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `rwweb`.
#[derive(Debug, Parser)]
#[command(name = "rwweb", version, about = "Navigate a spatial web of notes and links")]
pub struct Cli {
    /// Settings file (YAML). Defaults to `RWWEB_CONFIG`, then built-in defaults.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log filter such as `debug` or `rwweb=info`. Defaults to `RWWEB_LOG`.
    #[arg(long, global = true)]
    pub log: Option<String>,

    /// Mint document ids `doc-1`, `doc-2`, ... instead of random UUIDs.
    #[arg(long, global = true)]
    pub sequential_ids: bool,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the welcome canvas, reveal the welcome note's star and print the state.
    Demo,
    /// Run a YAML gesture script and print the resulting state.
    Run {
        /// Path to the script.
        script: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_demo_subcommand() {
        let cli = Cli::parse_from(["rwweb", "demo"]);
        assert!(matches!(cli.command, Command::Demo));
        assert!(!cli.sequential_ids);
    }

    #[test]
    fn parses_run_with_global_flags() {
        let cli = Cli::parse_from([
            "rwweb",
            "run",
            "tour.yaml",
            "--config",
            "rwweb.yaml",
            "--sequential-ids",
            "--log",
            "debug",
        ]);
        let Command::Run { script } = &cli.command else { panic!("expected run") };
        assert!(script.ends_with("tour.yaml"));
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("rwweb.yaml")));
        assert_eq!(cli.log.as_deref(), Some("debug"));
        assert!(cli.sequential_ids);
    }

    #[test]
    fn run_requires_a_script() {
        assert!(Cli::try_parse_from(["rwweb", "run"]).is_err());
    }
}
