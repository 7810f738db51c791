//! CLI argument parsing.
//!
//! Hand-rolled parser over an argument iterator so the full surface is
//! testable without touching the process environment.

use std::path::PathBuf;

/// CLI arguments container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    /// The command to execute.
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the financial summary for a scenario.
    Summary {
        /// Optional scenario YAML file.
        scenario_path: Option<PathBuf>,
        /// Raw `name=value` overrides, applied after the scenario.
        overrides: Vec<String>,
        /// Emit JSON instead of the text report.
        json: bool,
    },
    /// Evaluate a single derived quantity.
    Eval {
        /// Derived quantity name (snake_case).
        name: String,
        /// Optional scenario YAML file.
        scenario_path: Option<PathBuf>,
        /// Raw `name=value` overrides, applied after the scenario.
        overrides: Vec<String>,
    },
    /// List all input parameters with values, bounds, and units.
    Params,
    /// Show help.
    Help,
    /// Show version.
    Version,
}

impl Args {
    /// Parse command-line arguments from an iterator.
    #[must_use]
    pub fn parse_from<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        Self::parse_from_vec(&args)
    }

    /// Parse command-line arguments from the environment.
    #[must_use]
    pub fn parse() -> Self {
        Self::parse_from(std::env::args())
    }

    fn parse_from_vec(args: &[String]) -> Self {
        if args.len() < 2 {
            return Self {
                command: Command::Help,
            };
        }

        let command = match args[1].as_str() {
            "summary" => Self::parse_summary_command(args),
            "eval" => Self::parse_eval_command(args),
            "params" => Command::Params,
            "-h" | "--help" | "help" => Command::Help,
            "-V" | "--version" | "version" => Command::Version,
            unknown => {
                eprintln!("Unknown command: {unknown}");
                Command::Help
            }
        };

        Self { command }
    }

    /// Parse the 'summary' command arguments.
    fn parse_summary_command(args: &[String]) -> Command {
        let mut scenario_path = None;
        let mut overrides = Vec::new();
        let mut json = false;

        let mut i = 2;
        while i < args.len() {
            match args[i].as_str() {
                "--set" => {
                    if i + 1 < args.len() {
                        overrides.push(args[i + 1].clone());
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                "--json" => {
                    json = true;
                    i += 1;
                }
                other if scenario_path.is_none() && !other.starts_with('-') => {
                    scenario_path = Some(PathBuf::from(other));
                    i += 1;
                }
                _ => i += 1,
            }
        }

        Command::Summary {
            scenario_path,
            overrides,
            json,
        }
    }

    /// Parse the 'eval' command arguments.
    fn parse_eval_command(args: &[String]) -> Command {
        if args.len() < 3 {
            eprintln!("Error: 'eval' command requires a derived quantity name");
            return Command::Help;
        }

        let mut scenario_path = None;
        let mut overrides = Vec::new();

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--set" => {
                    if i + 1 < args.len() {
                        overrides.push(args[i + 1].clone());
                        i += 2;
                    } else {
                        i += 1;
                    }
                }
                other if scenario_path.is_none() && !other.starts_with('-') => {
                    scenario_path = Some(PathBuf::from(other));
                    i += 1;
                }
                _ => i += 1,
            }
        }

        Command::Eval {
            name: args[2].clone(),
            scenario_path,
            overrides,
        }
    }
}
