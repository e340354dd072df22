//! Answer batched distinct-count range queries read from stdin.

use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let stdin = io::stdin();
    let stdout = io::stdout();
    match aurelia_io::batch::run(stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("aurelia-distinct: {e}");
            ExitCode::FAILURE
        }
    }
}
