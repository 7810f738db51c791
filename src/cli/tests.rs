//! CLI module tests.

use std::path::PathBuf;
use std::process::ExitCode;

use super::args::{Args, Command};
use super::commands::run_cli;
use super::output::{print_help, print_version};

// ============================================================================
// Args parsing tests
// ============================================================================

#[test]
fn test_parse_no_args_shows_help() {
    let args = Args::parse_from(["spinline"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_help_variants() {
    for flag in ["-h", "--help", "help"] {
        let args = Args::parse_from(["spinline", flag]);
        assert_eq!(args.command, Command::Help);
    }
}

#[test]
fn test_parse_version_variants() {
    for flag in ["-V", "--version", "version"] {
        let args = Args::parse_from(["spinline", flag]);
        assert_eq!(args.command, Command::Version);
    }
}

#[test]
fn test_parse_unknown_command_shows_help() {
    let args = Args::parse_from(["spinline", "optimize"]);
    assert_eq!(args.command, Command::Help);
}

#[test]
fn test_parse_params() {
    let args = Args::parse_from(["spinline", "params"]);
    assert_eq!(args.command, Command::Params);
}

#[test]
fn test_parse_summary_bare() {
    let args = Args::parse_from(["spinline", "summary"]);
    assert_eq!(
        args.command,
        Command::Summary {
            scenario_path: None,
            overrides: vec![],
            json: false,
        }
    );
}

#[test]
fn test_parse_summary_full() {
    let args = Args::parse_from([
        "spinline",
        "summary",
        "pilot.yaml",
        "--set",
        "fiber_price=18.5",
        "--set",
        "take_up_speed=150",
        "--json",
    ]);
    assert_eq!(
        args.command,
        Command::Summary {
            scenario_path: Some(PathBuf::from("pilot.yaml")),
            overrides: vec!["fiber_price=18.5".to_string(), "take_up_speed=150".to_string()],
            json: true,
        }
    );
}

#[test]
fn test_parse_summary_trailing_set_without_value() {
    let args = Args::parse_from(["spinline", "summary", "--set"]);
    assert_eq!(
        args.command,
        Command::Summary {
            scenario_path: None,
            overrides: vec![],
            json: false,
        }
    );
}

#[test]
fn test_parse_eval() {
    let args = Args::parse_from(["spinline", "eval", "draw_ratio", "--set", "take_up_speed=150"]);
    assert_eq!(
        args.command,
        Command::Eval {
            name: "draw_ratio".to_string(),
            scenario_path: None,
            overrides: vec!["take_up_speed=150".to_string()],
        }
    );
}

#[test]
fn test_parse_eval_with_scenario() {
    let args = Args::parse_from(["spinline", "eval", "roi_pct", "pilot.yaml"]);
    assert_eq!(
        args.command,
        Command::Eval {
            name: "roi_pct".to_string(),
            scenario_path: Some(PathBuf::from("pilot.yaml")),
            overrides: vec![],
        }
    );
}

#[test]
fn test_parse_eval_without_name_shows_help() {
    let args = Args::parse_from(["spinline", "eval"]);
    assert_eq!(args.command, Command::Help);
}

// ============================================================================
// Command dispatch tests
// ============================================================================

#[test]
fn test_run_cli_help() {
    let exit = run_cli(Args::parse_from(["spinline", "help"]));
    assert_eq!(exit, ExitCode::SUCCESS);
}

#[test]
fn test_run_cli_version() {
    let exit = run_cli(Args::parse_from(["spinline", "version"]));
    assert_eq!(exit, ExitCode::SUCCESS);
}

#[test]
fn test_run_cli_params() {
    let exit = run_cli(Args::parse_from(["spinline", "params"]));
    assert_eq!(exit, ExitCode::SUCCESS);
}

#[test]
fn test_run_cli_summary_defaults() {
    let exit = run_cli(Args::parse_from(["spinline", "summary"]));
    assert_eq!(exit, ExitCode::SUCCESS);
}

#[test]
fn test_run_cli_summary_json() {
    let exit = run_cli(Args::parse_from(["spinline", "summary", "--json"]));
    assert_eq!(exit, ExitCode::SUCCESS);
}

#[test]
fn test_run_cli_summary_missing_scenario_file() {
    let exit = run_cli(Args::parse_from(["spinline", "summary", "no_such_file.yaml"]));
    assert_ne!(exit, ExitCode::SUCCESS);
}

#[test]
fn test_run_cli_summary_bad_override() {
    let exit = run_cli(Args::parse_from([
        "spinline",
        "summary",
        "--set",
        "operational_days=999",
    ]));
    assert_ne!(exit, ExitCode::SUCCESS);
}

#[test]
fn test_run_cli_eval_known_quantity() {
    let exit = run_cli(Args::parse_from(["spinline", "eval", "operational_minutes"]));
    assert_eq!(exit, ExitCode::SUCCESS);
}

#[test]
fn test_run_cli_eval_payback() {
    let exit = run_cli(Args::parse_from(["spinline", "eval", "payback_years"]));
    assert_eq!(exit, ExitCode::SUCCESS);
}

#[test]
fn test_run_cli_eval_payback_unprofitable() {
    let exit = run_cli(Args::parse_from([
        "spinline",
        "eval",
        "payback_years",
        "--set",
        "fiber_price=0",
    ]));
    assert_eq!(exit, ExitCode::SUCCESS);
}

#[test]
fn test_run_cli_eval_unknown_quantity() {
    let exit = run_cli(Args::parse_from(["spinline", "eval", "melt_index"]));
    assert_ne!(exit, ExitCode::SUCCESS);
}

// ============================================================================
// Output smoke tests
// ============================================================================

#[test]
fn test_print_help_and_version_do_not_panic() {
    print_help();
    print_version();
}
