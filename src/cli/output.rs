//! CLI output formatting.
//!
//! All user-facing formatting for the CLI lives here, separated from
//! command logic.

use crate::session::LineSession;
use crate::summary::FinancialSummary;

/// Print version information.
pub fn print_version() {
    println!("spinline {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message.
pub fn print_help() {
    println!(
        r"spinline - techno-economic model of a fiber-spinning production line

USAGE:
    spinline <COMMAND> [OPTIONS]

COMMANDS:
    summary [scenario.yaml]     Print the financial summary
        --set <name=value>      Override a parameter (repeatable)
        --json                  Emit JSON instead of the text report

    eval <quantity> [scenario.yaml]
                                Evaluate one derived quantity
        --set <name=value>      Override a parameter (repeatable)

    params                      List input parameters with defaults,
                                bounds, and units

    help                        Show this help message
    version                     Show version information

EXAMPLES:
    spinline summary
    spinline summary scenarios/pilot_line.yaml --set fiber_price=18.5
    spinline eval draw_ratio --set take_up_speed=150
    spinline eval payback_years
    spinline params
"
    );
}

/// Print the financial summary as a text report.
pub fn print_summary(summary: &FinancialSummary) {
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Financial Summary");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("{:<34}{:>14.2}", "Annual revenue ($/yr)", summary.annual_revenue);
    println!(
        "{:<34}{:>14.2}",
        "Total annual costs ($/yr)", summary.total_annual_costs
    );
    println!("{:<34}{:>14.2}", "Annual profit ($/yr)", summary.annual_profit);
    println!("{:<34}{:>14.2}", "ROI (%/yr)", summary.roi_pct);
    match summary.payback_years {
        Some(years) => println!("{:<34}{:>14.2}", "Payback period (yr)", years),
        None => println!("{:<34}{:>14}", "Payback period (yr)", "N/A"),
    }
    println!(
        "{:<34}{:>14.3}",
        "Break-even price ($/kg)", summary.break_even_price
    );
    println!();
    println!("Cost breakdown ($/yr):");
    for item in &summary.cost_breakdown {
        println!("  {:<32}{:>14.2}", item.category.label(), item.annual_usd);
    }
    println!("  {:<32}{:>14.2}", "Total", summary.breakdown_total());
}

/// Print one derived quantity.
pub fn print_derived(name: &str, value: f64) {
    println!("{name} = {value}");
}

/// Print the input parameter table for a session.
pub fn print_params(session: &LineSession) {
    println!(
        "{:<26}{:>14}  {:<8}{}",
        "parameter", "value", "unit", "label"
    );
    for (param, value) in session.store().iter() {
        let spec = param.spec();
        println!(
            "{:<26}{:>14.6}  {:<8}{}",
            param.name(),
            value,
            spec.unit,
            spec.label
        );
    }
}
