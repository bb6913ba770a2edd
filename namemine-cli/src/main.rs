//! Command-line interface entry point for namemine.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Avoid std::process::exit() so buffered output is flushed normally.
    match namemine::commands::run_with_args(std::env::args().skip(1).collect()) {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
