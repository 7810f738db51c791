//! Financial summary rollup.
//!
//! Folds the store and the economic formulas into the summary shown
//! alongside every process view: revenue, ordered cost breakdown,
//! profit, ROI, payback, and break-even price. Everything here is
//! recomputed from scratch on each call; nothing is cached.

use serde::{Deserialize, Serialize};

use crate::formulas::economics;
use crate::store::ParameterStore;

/// Cost line item categories, in breakdown order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostCategory {
    /// UHMWPE polymer purchases.
    Polymer,
    /// Make-up solvent purchases.
    Solvent,
    /// Additive purchases.
    Additives,
    /// Labor.
    Labor,
    /// Utilities.
    Utilities,
    /// Maintenance.
    Maintenance,
    /// Other operating costs.
    Other,
    /// Straight-line depreciation.
    Depreciation,
}

impl CostCategory {
    /// All categories in breakdown order; matches
    /// [`economics::cost_breakdown_amounts`] element for element.
    pub const ALL: [Self; economics::COST_COMPONENTS] = [
        Self::Polymer,
        Self::Solvent,
        Self::Additives,
        Self::Labor,
        Self::Utilities,
        Self::Maintenance,
        Self::Other,
        Self::Depreciation,
    ];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Polymer => "Raw materials: polymer (UHMWPE)",
            Self::Solvent => "Raw materials: solvent",
            Self::Additives => "Raw materials: additives",
            Self::Labor => "Labor",
            Self::Utilities => "Utilities",
            Self::Maintenance => "Maintenance",
            Self::Other => "Other operating costs",
            Self::Depreciation => "Depreciation",
        }
    }
}

/// One computed annual cost line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostLineItem {
    /// Cost category.
    pub category: CostCategory,
    /// Annual amount ($/yr).
    pub annual_usd: f64,
}

/// Financial rollup of the production line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Annual revenue ($/yr).
    pub annual_revenue: f64,
    /// Total annual operating costs ($/yr).
    pub total_annual_costs: f64,
    /// Annual profit ($/yr).
    pub annual_profit: f64,
    /// Return on investment (%/yr).
    pub roi_pct: f64,
    /// Payback period (yr); `None` when the line is not profitable.
    pub payback_years: Option<f64>,
    /// Break-even selling price ($/kg).
    pub break_even_price: f64,
    /// Ordered cost breakdown; sums exactly to `total_annual_costs`.
    pub cost_breakdown: Vec<CostLineItem>,
}

impl FinancialSummary {
    /// Sum of the breakdown line items.
    ///
    /// Equals `total_annual_costs` bitwise: both are the same fold over
    /// the same amounts in the same order.
    #[must_use]
    pub fn breakdown_total(&self) -> f64 {
        self.cost_breakdown.iter().map(|item| item.annual_usd).sum()
    }
}

/// Compute the financial summary from the current store contents.
///
/// Pure function of the store; repeated calls on an unchanged store
/// return identical summaries.
#[must_use]
pub fn summarize(p: &ParameterStore) -> FinancialSummary {
    let amounts = economics::cost_breakdown_amounts(p);
    let cost_breakdown = CostCategory::ALL
        .into_iter()
        .zip(amounts)
        .map(|(category, annual_usd)| CostLineItem {
            category,
            annual_usd,
        })
        .collect();

    FinancialSummary {
        annual_revenue: economics::annual_revenue(p),
        total_annual_costs: economics::total_annual_costs(p),
        annual_profit: economics::annual_profit(p),
        roi_pct: economics::roi_pct(p),
        payback_years: economics::payback_years(p),
        break_even_price: economics::break_even_price(p),
        cost_breakdown,
    }
}
