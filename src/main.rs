//! twe - taskwarrior companion CLI

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = taskwarrior_enhanced::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
