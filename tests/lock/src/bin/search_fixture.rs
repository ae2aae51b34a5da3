//! Runs the lock fixtures and prints one `key=value` line per run, for
//! cross-process determinism checks.
//!
//! Usage: `search_fixture`

use std::process::ExitCode;

fn main() -> ExitCode {
    match lock_tests::fixture_lines() {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("search_fixture: {err}");
            ExitCode::FAILURE
        }
    }
}
