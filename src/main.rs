//! spinline CLI - fiber line techno-economics
//!
//! Command-line interface for evaluating production line scenarios.

use std::process::ExitCode;

use spinline::cli::{run_cli, Args};

fn main() -> ExitCode {
    run_cli(Args::parse())
}
