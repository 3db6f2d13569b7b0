//! Binary entrypoint for the `rwweb` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // A missing .env file is fine; settings fall back to defaults.
    let _ = dotenvy::dotenv();

    // Recording is handled in commands::dispatch via RWWEB_RECORD=<dir>.
    match rwweb::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
