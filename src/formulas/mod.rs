//! Derived-value formulas.
//!
//! The single authoritative home of every computed quantity in the
//! model: mass balance, extrusion and spinning geometry in
//! [`process`], costs and profitability in [`economics`]. Each formula
//! is a pure function of the current [`ParameterStore`] (and other
//! formulas); the set is acyclic, so evaluation is a single pass with
//! no caching and no stale state.
//!
//! Division-by-zero policy: every quotient with a zero or near-zero
//! denominator yields 0.0 instead of raising; the payback period alone
//! is reported as `None` (see [`economics::payback_years`]). The
//! sentinel is indistinguishable from a genuine zero except by this
//! documentation.

pub mod economics;
pub mod process;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LineError;
use crate::store::ParameterStore;

/// Denominators below this magnitude trigger the division sentinel.
pub const MIN_DENOMINATOR: f64 = 1e-12;

/// Quotient with the documented zero sentinel.
#[must_use]
pub(crate) fn div_or_zero(numerator: f64, denominator: f64) -> f64 {
    if denominator.abs() < MIN_DENOMINATOR {
        0.0
    } else {
        numerator / denominator
    }
}

/// Derived quantities of the production line model.
///
/// By-name access mirrors [`crate::store::Param`]: snake_case names via
/// [`Derived::name`], `FromStr`, and `Display`. The payback period is
/// not listed here because it is the one quantity that can be
/// undefined; it lives on [`economics::payback_years`] and the
/// financial summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Derived {
    /// Operating minutes per year.
    OperationalMinutes,
    /// Dry fiber output (g/min).
    DryFiberGPerMin,
    /// Filament linear density (g/m), from dpf.
    FilamentGPerM,
    /// Total filament output (m/min).
    FilamentMPerMin,
    /// Filaments needed to meet the production target.
    FilamentsNeeded,
    /// Total spinneret holes on the line.
    TotalHoles,
    /// Hole utilization (% of design filaments needed).
    UtilizationPct,
    /// Spinning batteries needed.
    NumBatteries,
    /// Spinning solution throughput (g/min).
    SolutionGPerMin,
    /// Spinning solution throughput (cc/min).
    SolutionCcPerMin,
    /// Solution flow per spinneret hole (cc/min).
    FlowPerHoleCcMin,
    /// Spinneret hole cross-section (cm²).
    HoleCrossSectionCm2,
    /// Solution velocity leaving the spinneret (m/min).
    VelLeavingSpinneretMMin,
    /// Draw ratio (take-up velocity over extrusion velocity).
    DrawRatio,
    /// As-spun fiber cross-section (cm²).
    FiberCrossSectionCm2,
    /// As-spun fiber diameter (µm).
    FiberDiameterUm,
    /// Filament cross-section from measured diameter (cm²).
    FilamentCrossSectionCm2,
    /// Filament linear density from geometry (g/m).
    FilamentGPerMFromGeom,
    /// Denier per filament back-calculated from geometry.
    CalculatedDpf,
    /// Annual raw material cost ($/yr).
    MaterialCost,
    /// Annual straight-line depreciation ($/yr).
    DepreciationCost,
    /// Total annual operating costs ($/yr).
    TotalAnnualCosts,
    /// Annual revenue ($/yr).
    AnnualRevenue,
    /// Annual profit ($/yr).
    AnnualProfit,
    /// Return on investment (%/yr).
    RoiPct,
    /// Break-even fiber price ($/kg).
    BreakEvenPrice,
}

impl Derived {
    /// All derived quantities in display order.
    pub const ALL: [Self; 26] = [
        Self::OperationalMinutes,
        Self::DryFiberGPerMin,
        Self::FilamentGPerM,
        Self::FilamentMPerMin,
        Self::FilamentsNeeded,
        Self::TotalHoles,
        Self::UtilizationPct,
        Self::NumBatteries,
        Self::SolutionGPerMin,
        Self::SolutionCcPerMin,
        Self::FlowPerHoleCcMin,
        Self::HoleCrossSectionCm2,
        Self::VelLeavingSpinneretMMin,
        Self::DrawRatio,
        Self::FiberCrossSectionCm2,
        Self::FiberDiameterUm,
        Self::FilamentCrossSectionCm2,
        Self::FilamentGPerMFromGeom,
        Self::CalculatedDpf,
        Self::MaterialCost,
        Self::DepreciationCost,
        Self::TotalAnnualCosts,
        Self::AnnualRevenue,
        Self::AnnualProfit,
        Self::RoiPct,
        Self::BreakEvenPrice,
    ];

    /// Snake_case identity name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::OperationalMinutes => "operational_minutes",
            Self::DryFiberGPerMin => "dry_fiber_g_per_min",
            Self::FilamentGPerM => "filament_g_per_m",
            Self::FilamentMPerMin => "filament_m_per_min",
            Self::FilamentsNeeded => "filaments_needed",
            Self::TotalHoles => "total_holes",
            Self::UtilizationPct => "utilization_pct",
            Self::NumBatteries => "num_batteries",
            Self::SolutionGPerMin => "solution_g_per_min",
            Self::SolutionCcPerMin => "solution_cc_per_min",
            Self::FlowPerHoleCcMin => "flow_per_hole_cc_min",
            Self::HoleCrossSectionCm2 => "hole_cross_section_cm2",
            Self::VelLeavingSpinneretMMin => "vel_leaving_spinneret_m_min",
            Self::DrawRatio => "draw_ratio",
            Self::FiberCrossSectionCm2 => "fiber_cross_section_cm2",
            Self::FiberDiameterUm => "fiber_diameter_um",
            Self::FilamentCrossSectionCm2 => "filament_cross_section_cm2",
            Self::FilamentGPerMFromGeom => "filament_g_per_m_from_geom",
            Self::CalculatedDpf => "calculated_dpf",
            Self::MaterialCost => "material_cost",
            Self::DepreciationCost => "depreciation_cost",
            Self::TotalAnnualCosts => "total_annual_costs",
            Self::AnnualRevenue => "annual_revenue",
            Self::AnnualProfit => "annual_profit",
            Self::RoiPct => "roi_pct",
            Self::BreakEvenPrice => "break_even_price",
        }
    }

    /// Evaluate this quantity against the current store contents.
    ///
    /// Pure and side-effect-free; repeated calls on an unchanged store
    /// return bit-identical results.
    #[must_use]
    pub fn evaluate(self, p: &ParameterStore) -> f64 {
        match self {
            Self::OperationalMinutes => process::operational_minutes(p),
            Self::DryFiberGPerMin => process::dry_fiber_g_per_min(p),
            Self::FilamentGPerM => process::filament_g_per_m(p),
            Self::FilamentMPerMin => process::filament_m_per_min(p),
            Self::FilamentsNeeded => process::filaments_needed(p),
            Self::TotalHoles => process::total_holes(p),
            Self::UtilizationPct => process::utilization_pct(p),
            Self::NumBatteries => process::num_batteries(p),
            Self::SolutionGPerMin => process::solution_g_per_min(p),
            Self::SolutionCcPerMin => process::solution_cc_per_min(p),
            Self::FlowPerHoleCcMin => process::flow_per_hole_cc_min(p),
            Self::HoleCrossSectionCm2 => process::hole_cross_section_cm2(p),
            Self::VelLeavingSpinneretMMin => process::vel_leaving_spinneret_m_min(p),
            Self::DrawRatio => process::draw_ratio(p),
            Self::FiberCrossSectionCm2 => process::fiber_cross_section_cm2(p),
            Self::FiberDiameterUm => process::fiber_diameter_um(p),
            Self::FilamentCrossSectionCm2 => process::filament_cross_section_cm2(p),
            Self::FilamentGPerMFromGeom => process::filament_g_per_m_from_geom(p),
            Self::CalculatedDpf => process::calculated_dpf(p),
            Self::MaterialCost => economics::material_cost(p),
            Self::DepreciationCost => economics::depreciation_cost(p),
            Self::TotalAnnualCosts => economics::total_annual_costs(p),
            Self::AnnualRevenue => economics::annual_revenue(p),
            Self::AnnualProfit => economics::annual_profit(p),
            Self::RoiPct => economics::roi_pct(p),
            Self::BreakEvenPrice => economics::break_even_price(p),
        }
    }
}

impl fmt::Display for Derived {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Derived {
    type Err = LineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| LineError::UnknownDerived(s.to_string()))
    }
}
