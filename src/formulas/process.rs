//! Process formulas: mass balance, solution preparation, extrusion,
//! and spinning geometry.
//!
//! Unit conversions are baked into the constants: 9000 m per denier
//! span, 1e-6 cc→m³, 1e-4 cm²→m², 10000 µm per cm.

use std::f64::consts::PI;

use super::div_or_zero;
use crate::store::{Param, ParameterStore, DENIER_SPAN_M};

/// Operating minutes per year.
#[must_use]
pub fn operational_minutes(p: &ParameterStore) -> f64 {
    p.get(Param::OperationalDays) * 24.0 * 60.0
}

/// Dry fiber output (g/min) required to meet the annual target.
#[must_use]
pub fn dry_fiber_g_per_min(p: &ParameterStore) -> f64 {
    div_or_zero(
        p.get(Param::AnnualProductionTons) * 1_000_000.0,
        operational_minutes(p),
    )
}

/// Filament linear density (g/m) from dpf.
#[must_use]
pub fn filament_g_per_m(p: &ParameterStore) -> f64 {
    p.get(Param::Dpf) / DENIER_SPAN_M
}

/// Total filament output (m/min) across the line.
#[must_use]
pub fn filament_m_per_min(p: &ParameterStore) -> f64 {
    div_or_zero(dry_fiber_g_per_min(p), filament_g_per_m(p))
}

/// Filaments needed at the configured take-up speed.
#[must_use]
pub fn filaments_needed(p: &ParameterStore) -> f64 {
    div_or_zero(filament_m_per_min(p), p.get(Param::TakeUpSpeed))
}

/// Design filament count (total spinneret holes).
#[must_use]
pub fn total_holes(p: &ParameterStore) -> f64 {
    p.get(Param::Spinnerets) * p.get(Param::HolesPerSpinneret)
}

/// Hole utilization: needed filaments as a percentage of design.
#[must_use]
pub fn utilization_pct(p: &ParameterStore) -> f64 {
    div_or_zero(filaments_needed(p), total_holes(p)) * 100.0
}

/// Spinning batteries needed to serve all spinnerets.
#[must_use]
pub fn num_batteries(p: &ParameterStore) -> f64 {
    div_or_zero(p.get(Param::Spinnerets), p.get(Param::SpinneretsPerBattery)).ceil()
}

/// Spinning solution throughput (g/min) at the polymer fraction.
#[must_use]
pub fn solution_g_per_min(p: &ParameterStore) -> f64 {
    div_or_zero(dry_fiber_g_per_min(p), p.get(Param::PolymerWtFrac))
}

/// Spinning solution throughput (cc/min).
#[must_use]
pub fn solution_cc_per_min(p: &ParameterStore) -> f64 {
    div_or_zero(solution_g_per_min(p), p.get(Param::SolutionDensity))
}

/// Solution flow per spinneret hole (cc/min).
#[must_use]
pub fn flow_per_hole_cc_min(p: &ParameterStore) -> f64 {
    div_or_zero(solution_cc_per_min(p), total_holes(p))
}

/// Spinneret hole cross-section (cm²).
#[must_use]
pub fn hole_cross_section_cm2(p: &ParameterStore) -> f64 {
    let radius_cm = p.get(Param::HoleDiameterCm) / 2.0;
    PI * radius_cm * radius_cm
}

/// Solution velocity leaving the spinneret face (m/min).
#[must_use]
pub fn vel_leaving_spinneret_m_min(p: &ParameterStore) -> f64 {
    div_or_zero(
        flow_per_hole_cc_min(p) * 1e-6,
        hole_cross_section_cm2(p) * 1e-4,
    )
}

/// Draw ratio: take-up velocity over extrusion velocity.
#[must_use]
pub fn draw_ratio(p: &ParameterStore) -> f64 {
    div_or_zero(p.get(Param::TakeUpSpeed), vel_leaving_spinneret_m_min(p))
}

/// As-spun fiber cross-section (cm²) after drawdown.
#[must_use]
pub fn fiber_cross_section_cm2(p: &ParameterStore) -> f64 {
    div_or_zero(hole_cross_section_cm2(p), draw_ratio(p))
}

/// As-spun fiber diameter (µm).
#[must_use]
pub fn fiber_diameter_um(p: &ParameterStore) -> f64 {
    (fiber_cross_section_cm2(p) * 4.0 / PI).sqrt() * 10_000.0
}

/// Filament cross-section (cm²) from the measured diameter.
#[must_use]
pub fn filament_cross_section_cm2(p: &ParameterStore) -> f64 {
    let radius_cm = p.get(Param::FilamentDiameterUm) / 10_000.0 / 2.0;
    PI * radius_cm * radius_cm
}

/// Filament linear density (g/m) from geometry and density.
#[must_use]
pub fn filament_g_per_m_from_geom(p: &ParameterStore) -> f64 {
    filament_cross_section_cm2(p) * 100.0 * p.get(Param::FilamentDensity)
}

/// Denier per filament back-calculated from geometry.
#[must_use]
pub fn calculated_dpf(p: &ParameterStore) -> f64 {
    filament_g_per_m_from_geom(p) * DENIER_SPAN_M
}
