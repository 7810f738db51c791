//! Input parameter catalog.
//!
//! Every editable input of the production line model is a variant of
//! [`Param`], with its default value, bounds, and unit declared in one
//! static table. The store is populated from this catalog exactly once
//! per session; nothing downstream re-declares a default.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LineError;

/// Declared specification of one input parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    /// Default value applied at session start.
    pub default: f64,
    /// Inclusive lower bound, if any.
    pub min: Option<f64>,
    /// Inclusive upper bound, if any.
    pub max: Option<f64>,
    /// Display unit.
    pub unit: &'static str,
    /// Human-readable label.
    pub label: &'static str,
}

/// Input parameters of the production line model.
///
/// Identity is the snake_case name (see [`Param::name`]); the same name
/// is used in scenario YAML files and on the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Param {
    /// Annual production target (t/yr).
    AnnualProductionTons,
    /// Operating days per year (d/yr).
    OperationalDays,
    /// Filament linear density (denier per filament).
    Dpf,
    /// Filament linear density (g/m); dual-synchronized with `dpf`.
    FilamentLinearDensity,
    /// Take-up speed at the winder (m/min).
    TakeUpSpeed,
    /// Number of spinnerets on the line.
    Spinnerets,
    /// Holes per spinneret plate.
    HolesPerSpinneret,
    /// Spinnerets served by one spinning battery.
    SpinneretsPerBattery,
    /// Polymer weight fraction of the spinning solution.
    PolymerWtFrac,
    /// Spinning solution density (g/cc).
    SolutionDensity,
    /// Spinneret hole diameter (cm).
    HoleDiameterCm,
    /// Finished filament diameter (µm).
    FilamentDiameterUm,
    /// Finished filament density (g/cc).
    FilamentDensity,
    /// UHMWPE polymer purchased per year (t/yr).
    UhmwpeTon,
    /// UHMWPE polymer price ($/kg).
    UhmwpeCost,
    /// Make-up solvent purchased per year (t/yr).
    SolventTon,
    /// Solvent price ($/kg).
    SolventCost,
    /// Additives purchased per year (kg/yr).
    AdditivesKg,
    /// Additive price ($/kg).
    AdditiveCost,
    /// Total capital expenditure ($).
    CapexTotal,
    /// Straight-line depreciation horizon (yr).
    DepreciationYears,
    /// Annual labor cost ($/yr).
    LaborCost,
    /// Annual utility cost ($/yr).
    UtilityCost,
    /// Annual maintenance cost ($/yr).
    MaintenanceCost,
    /// Other annual operating costs ($/yr).
    OtherCosts,
    /// Fiber selling price ($/kg).
    FiberPrice,
}

impl Param {
    /// All parameters in catalog (display) order.
    pub const ALL: [Self; 26] = [
        Self::AnnualProductionTons,
        Self::OperationalDays,
        Self::Dpf,
        Self::FilamentLinearDensity,
        Self::TakeUpSpeed,
        Self::Spinnerets,
        Self::HolesPerSpinneret,
        Self::SpinneretsPerBattery,
        Self::PolymerWtFrac,
        Self::SolutionDensity,
        Self::HoleDiameterCm,
        Self::FilamentDiameterUm,
        Self::FilamentDensity,
        Self::UhmwpeTon,
        Self::UhmwpeCost,
        Self::SolventTon,
        Self::SolventCost,
        Self::AdditivesKg,
        Self::AdditiveCost,
        Self::CapexTotal,
        Self::DepreciationYears,
        Self::LaborCost,
        Self::UtilityCost,
        Self::MaintenanceCost,
        Self::OtherCosts,
        Self::FiberPrice,
    ];

    /// Snake_case identity name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AnnualProductionTons => "annual_production_tons",
            Self::OperationalDays => "operational_days",
            Self::Dpf => "dpf",
            Self::FilamentLinearDensity => "filament_linear_density",
            Self::TakeUpSpeed => "take_up_speed",
            Self::Spinnerets => "spinnerets",
            Self::HolesPerSpinneret => "holes_per_spinneret",
            Self::SpinneretsPerBattery => "spinnerets_per_battery",
            Self::PolymerWtFrac => "polymer_wt_frac",
            Self::SolutionDensity => "solution_density",
            Self::HoleDiameterCm => "hole_diameter_cm",
            Self::FilamentDiameterUm => "filament_diameter_um",
            Self::FilamentDensity => "filament_density",
            Self::UhmwpeTon => "uhmwpe_ton",
            Self::UhmwpeCost => "uhmwpe_cost",
            Self::SolventTon => "solvent_ton",
            Self::SolventCost => "solvent_cost",
            Self::AdditivesKg => "additives_kg",
            Self::AdditiveCost => "additive_cost",
            Self::CapexTotal => "capex_total",
            Self::DepreciationYears => "depreciation_years",
            Self::LaborCost => "labor_cost",
            Self::UtilityCost => "utility_cost",
            Self::MaintenanceCost => "maintenance_cost",
            Self::OtherCosts => "other_costs",
            Self::FiberPrice => "fiber_price",
        }
    }

    /// Declared default, bounds, unit, and label.
    #[must_use]
    pub const fn spec(self) -> ParamSpec {
        match self {
            Self::AnnualProductionTons => ParamSpec {
                default: 250.0,
                min: Some(1.0),
                max: None,
                unit: "t/yr",
                label: "Annual production",
            },
            Self::OperationalDays => ParamSpec {
                default: 300.0,
                min: Some(1.0),
                max: Some(366.0),
                unit: "d/yr",
                label: "Operational days per year",
            },
            Self::Dpf => ParamSpec {
                default: 3.1,
                min: Some(0.01),
                max: None,
                unit: "denier",
                label: "Filament linear density (dpf)",
            },
            Self::FilamentLinearDensity => ParamSpec {
                default: 3.1 / 9000.0,
                min: Some(1e-6),
                max: None,
                unit: "g/m",
                label: "Filament linear density",
            },
            Self::TakeUpSpeed => ParamSpec {
                default: 100.0,
                min: Some(1.0),
                max: None,
                unit: "m/min",
                label: "Take-up speed",
            },
            Self::Spinnerets => ParamSpec {
                default: 50.0,
                min: Some(1.0),
                max: None,
                unit: "",
                label: "Number of spinnerets",
            },
            Self::HolesPerSpinneret => ParamSpec {
                default: 360.0,
                min: Some(1.0),
                max: None,
                unit: "",
                label: "Holes per spinneret",
            },
            Self::SpinneretsPerBattery => ParamSpec {
                default: 10.0,
                min: Some(1.0),
                max: None,
                unit: "",
                label: "Spinnerets per battery",
            },
            Self::PolymerWtFrac => ParamSpec {
                default: 0.08,
                min: Some(0.001),
                max: Some(1.0),
                unit: "",
                label: "Polymer weight fraction",
            },
            Self::SolutionDensity => ParamSpec {
                default: 0.93,
                min: Some(0.1),
                max: None,
                unit: "g/cc",
                label: "Solution density",
            },
            Self::HoleDiameterCm => ParamSpec {
                default: 0.05,
                min: Some(1e-4),
                max: None,
                unit: "cm",
                label: "Spinneret hole diameter",
            },
            Self::FilamentDiameterUm => ParamSpec {
                default: 20.0,
                min: Some(0.1),
                max: None,
                unit: "um",
                label: "Filament diameter",
            },
            Self::FilamentDensity => ParamSpec {
                default: 0.97,
                min: Some(0.1),
                max: None,
                unit: "g/cc",
                label: "Filament density",
            },
            Self::UhmwpeTon => ParamSpec {
                default: 250.0,
                min: Some(0.0),
                max: None,
                unit: "t/yr",
                label: "UHMWPE purchased",
            },
            Self::UhmwpeCost => ParamSpec {
                default: 2.5,
                min: Some(0.0),
                max: None,
                unit: "$/kg",
                label: "UHMWPE price",
            },
            Self::SolventTon => ParamSpec {
                default: 300.0,
                min: Some(0.0),
                max: None,
                unit: "t/yr",
                label: "Make-up solvent purchased",
            },
            Self::SolventCost => ParamSpec {
                default: 1.2,
                min: Some(0.0),
                max: None,
                unit: "$/kg",
                label: "Solvent price",
            },
            Self::AdditivesKg => ParamSpec {
                default: 500.0,
                min: Some(0.0),
                max: None,
                unit: "kg/yr",
                label: "Additives purchased",
            },
            Self::AdditiveCost => ParamSpec {
                default: 10.0,
                min: Some(0.0),
                max: None,
                unit: "$/kg",
                label: "Additive price",
            },
            Self::CapexTotal => ParamSpec {
                default: 915_000.0,
                min: Some(0.0),
                max: None,
                unit: "$",
                label: "Total capital expenditure",
            },
            Self::DepreciationYears => ParamSpec {
                default: 10.0,
                min: Some(1.0),
                max: None,
                unit: "yr",
                label: "Depreciation horizon",
            },
            Self::LaborCost => ParamSpec {
                default: 200_000.0,
                min: Some(0.0),
                max: None,
                unit: "$/yr",
                label: "Labor cost",
            },
            Self::UtilityCost => ParamSpec {
                default: 50_000.0,
                min: Some(0.0),
                max: None,
                unit: "$/yr",
                label: "Utility cost",
            },
            Self::MaintenanceCost => ParamSpec {
                default: 75_000.0,
                min: Some(0.0),
                max: None,
                unit: "$/yr",
                label: "Maintenance cost",
            },
            Self::OtherCosts => ParamSpec {
                default: 50_000.0,
                min: Some(0.0),
                max: None,
                unit: "$/yr",
                label: "Other operating costs",
            },
            Self::FiberPrice => ParamSpec {
                default: 15.0,
                min: Some(0.0),
                max: None,
                unit: "$/kg",
                label: "Fiber selling price",
            },
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Param {
    type Err = LineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| LineError::UnknownParameter(s.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_names_unique() {
        for (i, a) in Param::ALL.iter().enumerate() {
            for b in &Param::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn test_defaults_within_bounds() {
        for param in Param::ALL {
            let spec = param.spec();
            if let Some(min) = spec.min {
                assert!(spec.default >= min, "{param} default below min");
            }
            if let Some(max) = spec.max {
                assert!(spec.default <= max, "{param} default above max");
            }
        }
    }

    #[test]
    fn test_name_round_trip() {
        for param in Param::ALL {
            let parsed: Param = param.name().parse().unwrap();
            assert_eq!(parsed, param);
        }
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "melt_temperature".parse::<Param>();
        assert!(err.is_err());
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(Param::TakeUpSpeed.to_string(), "take_up_speed");
        assert_eq!(Param::Dpf.to_string(), "dpf");
    }

    #[test]
    fn test_linked_defaults_consistent() {
        // dpf and its g/m counterpart start mutually consistent.
        let dpf = Param::Dpf.spec().default;
        let g_per_m = Param::FilamentLinearDensity.spec().default;
        assert!((g_per_m - dpf / 9000.0).abs() < 1e-12);
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Param::TakeUpSpeed).unwrap();
        assert_eq!(json, "\"take_up_speed\"");
        let back: Param = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Param::TakeUpSpeed);
    }
}
