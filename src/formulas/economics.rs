//! Economic formulas: annual costs, revenue, and profitability.
//!
//! The cost breakdown order is load-bearing: `total_annual_costs` folds
//! the same component array, in the same order, that the financial
//! summary renders, so the rollup and its line items can never drift
//! apart.

use super::div_or_zero;
use crate::store::{Param, ParameterStore};

/// Number of cost line items in the breakdown.
pub const COST_COMPONENTS: usize = 8;

/// Annual polymer spend ($/yr).
#[must_use]
pub fn polymer_material_cost(p: &ParameterStore) -> f64 {
    p.get(Param::UhmwpeTon) * 1000.0 * p.get(Param::UhmwpeCost)
}

/// Annual make-up solvent spend ($/yr).
#[must_use]
pub fn solvent_material_cost(p: &ParameterStore) -> f64 {
    p.get(Param::SolventTon) * 1000.0 * p.get(Param::SolventCost)
}

/// Annual additive spend ($/yr).
#[must_use]
pub fn additive_material_cost(p: &ParameterStore) -> f64 {
    p.get(Param::AdditivesKg) * p.get(Param::AdditiveCost)
}

/// Total annual raw material cost ($/yr).
#[must_use]
pub fn material_cost(p: &ParameterStore) -> f64 {
    polymer_material_cost(p) + solvent_material_cost(p) + additive_material_cost(p)
}

/// Annual straight-line depreciation ($/yr); 0 for a zero horizon.
#[must_use]
pub fn depreciation_cost(p: &ParameterStore) -> f64 {
    div_or_zero(p.get(Param::CapexTotal), p.get(Param::DepreciationYears))
}

/// Cost breakdown amounts in the canonical order: polymer, solvent,
/// additives, labor, utilities, maintenance, other, depreciation.
#[must_use]
pub fn cost_breakdown_amounts(p: &ParameterStore) -> [f64; COST_COMPONENTS] {
    [
        polymer_material_cost(p),
        solvent_material_cost(p),
        additive_material_cost(p),
        p.get(Param::LaborCost),
        p.get(Param::UtilityCost),
        p.get(Param::MaintenanceCost),
        p.get(Param::OtherCosts),
        depreciation_cost(p),
    ]
}

/// Total annual operating costs ($/yr): the fold of the breakdown.
#[must_use]
pub fn total_annual_costs(p: &ParameterStore) -> f64 {
    cost_breakdown_amounts(p).iter().sum()
}

/// Annual revenue at the configured selling price ($/yr).
#[must_use]
pub fn annual_revenue(p: &ParameterStore) -> f64 {
    p.get(Param::AnnualProductionTons) * 1000.0 * p.get(Param::FiberPrice)
}

/// Annual profit ($/yr).
#[must_use]
pub fn annual_profit(p: &ParameterStore) -> f64 {
    annual_revenue(p) - total_annual_costs(p)
}

/// Return on investment (%/yr); 0 when there is no capital base.
#[must_use]
pub fn roi_pct(p: &ParameterStore) -> f64 {
    div_or_zero(annual_profit(p), p.get(Param::CapexTotal)) * 100.0
}

/// Payback period (yr), undefined unless the line is profitable.
#[must_use]
pub fn payback_years(p: &ParameterStore) -> Option<f64> {
    let profit = annual_profit(p);
    if profit > 0.0 {
        Some(p.get(Param::CapexTotal) / profit)
    } else {
        None
    }
}

/// Selling price ($/kg) at which revenue equals annual cost.
#[must_use]
pub fn break_even_price(p: &ParameterStore) -> f64 {
    div_or_zero(
        total_annual_costs(p),
        p.get(Param::AnnualProductionTons) * 1000.0,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Inputs from a 250 t/yr line with a 915 k$ capital base.
    fn economic_store() -> ParameterStore {
        let mut p = ParameterStore::new();
        p.set(Param::AnnualProductionTons, 250.0).unwrap();
        p.set(Param::UhmwpeTon, 250.0).unwrap();
        p.set(Param::UhmwpeCost, 2.5).unwrap();
        p.set(Param::SolventTon, 0.0).unwrap();
        p.set(Param::AdditivesKg, 0.0).unwrap();
        p.set(Param::LaborCost, 200_000.0).unwrap();
        p.set(Param::UtilityCost, 50_000.0).unwrap();
        p.set(Param::MaintenanceCost, 75_000.0).unwrap();
        p.set(Param::OtherCosts, 50_000.0).unwrap();
        p.set(Param::CapexTotal, 915_000.0).unwrap();
        p.set(Param::DepreciationYears, 10.0).unwrap();
        p.set(Param::FiberPrice, 15.0).unwrap();
        p
    }

    #[test]
    fn test_material_cost() {
        let p = economic_store();
        assert!((polymer_material_cost(&p) - 625_000.0).abs() < f64::EPSILON);
        assert!((material_cost(&p) - 625_000.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_depreciation() {
        let p = economic_store();
        assert!((depreciation_cost(&p) - 91_500.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_total_costs_and_profitability() {
        let p = economic_store();
        assert!((total_annual_costs(&p) - 1_091_500.0).abs() < f64::EPSILON);
        assert!((annual_revenue(&p) - 3_750_000.0).abs() < f64::EPSILON);
        assert!((annual_profit(&p) - 2_658_500.0).abs() < f64::EPSILON);
        assert!((roi_pct(&p) - 290.546_448_087_431_7).abs() < 1e-9);
    }

    #[test]
    fn test_payback_defined_when_profitable() {
        let p = economic_store();
        let payback = payback_years(&p).unwrap();
        assert!((payback - 915_000.0 / 2_658_500.0).abs() < 1e-12);
    }

    #[test]
    fn test_payback_undefined_at_zero_profit() {
        let mut p = economic_store();
        // Lift other costs so total is exactly 1 125 000, then price the
        // fiber at the break-even 4.5 $/kg.
        p.set(Param::OtherCosts, 83_500.0).unwrap();
        p.set(Param::FiberPrice, 4.5).unwrap();

        assert!((annual_revenue(&p) - 1_125_000.0).abs() < f64::EPSILON);
        assert!((annual_profit(&p)).abs() < f64::EPSILON);
        assert!(payback_years(&p).is_none());
    }

    #[test]
    fn test_payback_undefined_at_loss() {
        let mut p = economic_store();
        p.set(Param::FiberPrice, 1.0).unwrap();
        assert!(annual_profit(&p) < 0.0);
        assert!(payback_years(&p).is_none());
    }

    #[test]
    fn test_roi_zero_without_capital() {
        let mut p = economic_store();
        p.set(Param::CapexTotal, 0.0).unwrap();
        assert!((roi_pct(&p)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_break_even_price() {
        let p = economic_store();
        assert!((break_even_price(&p) - 4.366).abs() < 1e-12);
    }

    #[test]
    fn test_breakdown_folds_to_total() {
        let p = economic_store();
        let folded: f64 = cost_breakdown_amounts(&p).iter().sum();
        assert_eq!(folded.to_bits(), total_annual_costs(&p).to_bits());
    }
}
