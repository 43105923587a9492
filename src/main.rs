//! Binary entrypoint for the `guidgen` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    guidgen::logging::init();
    // Recording is handled in commands::dispatch via GUIDGEN_RECORD=<dir>.
    match guidgen::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
