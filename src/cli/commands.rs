//! CLI command handlers.
//!
//! Execution logic for each CLI command, separated from parsing and
//! output formatting so each layer is testable on its own.

use std::path::Path;
use std::process::ExitCode;

use super::output::{print_derived, print_help, print_params, print_summary, print_version};
use super::{Args, Command};
use crate::config::ScenarioConfig;
use crate::error::{LineError, LineResult};
use crate::session::LineSession;

/// Main CLI entry point.
///
/// Dispatches to the appropriate command handler based on parsed
/// arguments.
#[must_use]
pub fn run_cli(args: Args) -> ExitCode {
    match args.command {
        Command::Summary {
            scenario_path,
            overrides,
            json,
        } => run_summary(scenario_path.as_deref(), &overrides, json),
        Command::Eval {
            name,
            scenario_path,
            overrides,
        } => run_eval(&name, scenario_path.as_deref(), &overrides),
        Command::Params => run_params(),
        Command::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Command::Version => {
            print_version();
            ExitCode::SUCCESS
        }
    }
}

/// Print the financial summary for the configured scenario.
#[must_use]
pub fn run_summary(scenario: Option<&Path>, overrides: &[String], json: bool) -> ExitCode {
    let session = match build_session(scenario, overrides) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(1);
        }
    };

    let summary = session.summary();
    if json {
        match serde_json::to_string_pretty(&summary) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::from(1);
            }
        }
    } else {
        print_summary(&summary);
    }
    ExitCode::SUCCESS
}

/// Evaluate and print one derived quantity.
#[must_use]
pub fn run_eval(name: &str, scenario: Option<&Path>, overrides: &[String]) -> ExitCode {
    let session = match build_session(scenario, overrides) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(1);
        }
    };

    // The payback period is the one quantity that can be undefined, so
    // it is addressed outside the always-numeric evaluation surface.
    if name == "payback_years" {
        match session.payback_years() {
            Some(years) => println!("payback_years = {years}"),
            None => println!("payback_years = N/A"),
        }
        return ExitCode::SUCCESS;
    }

    match session.evaluate_by_name(name) {
        Ok(value) => {
            print_derived(name, value);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

/// List every input parameter with its current value.
#[must_use]
pub fn run_params() -> ExitCode {
    let session = LineSession::new();
    print_params(&session);
    ExitCode::SUCCESS
}

/// Build a session from an optional scenario file plus CLI overrides.
fn build_session(scenario: Option<&Path>, overrides: &[String]) -> LineResult<LineSession> {
    let mut session = LineSession::new();

    if let Some(path) = scenario {
        let config = ScenarioConfig::load(path)?;
        config.apply(&mut session)?;
    }

    for raw in overrides {
        let (name, value) = parse_override(raw)?;
        session.set_by_name(name, value)?;
    }

    Ok(session)
}

/// Parse one `name=value` override.
fn parse_override(raw: &str) -> LineResult<(&str, f64)> {
    let (name, value_text) = raw
        .split_once('=')
        .ok_or_else(|| LineError::config(format!("expected name=value, got '{raw}'")))?;
    let value: f64 = value_text
        .parse()
        .map_err(|_| LineError::config(format!("invalid number '{value_text}' for '{name}'")))?;
    Ok((name, value))
}
