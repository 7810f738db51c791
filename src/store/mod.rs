//! Session parameter store.
//!
//! Single source of truth for all editable inputs. One store exists per
//! user session; it is populated from the declared catalog exactly once
//! at construction and mutated only through validated writes. Derived
//! quantities are never stored here (see [`crate::formulas`]).

mod catalog;
mod link;

pub use catalog::{Param, ParamSpec};
pub use link::{LinkedPair, DENIER_SPAN_M};

use indexmap::IndexMap;

use crate::error::{LineError, LineResult};

/// Mutable key/value store of scalar input parameters.
///
/// Iteration follows the fixed catalog order.
#[derive(Debug, Clone)]
pub struct ParameterStore {
    values: IndexMap<Param, f64>,
}

impl ParameterStore {
    /// Create a store populated with every catalog default.
    #[must_use]
    pub fn new() -> Self {
        let values = Param::ALL
            .into_iter()
            .map(|p| (p, p.spec().default))
            .collect();
        Self { values }
    }

    /// Current value of a parameter.
    #[must_use]
    pub fn get(&self, param: Param) -> f64 {
        // The constructor populates every variant; the fallback is
        // unreachable but keeps this accessor panic-free.
        self.values
            .get(&param)
            .copied()
            .unwrap_or(param.spec().default)
    }

    /// Commit a validated write.
    ///
    /// # Errors
    ///
    /// Returns [`LineError::NonFinite`] for NaN/infinite values and
    /// [`LineError::OutOfRange`] for values outside the declared bounds.
    /// On error the prior value is retained.
    pub fn set(&mut self, param: Param, value: f64) -> LineResult<()> {
        if !value.is_finite() {
            return Err(LineError::NonFinite { param });
        }
        let spec = param.spec();
        let below = spec.min.is_some_and(|min| value < min);
        let above = spec.max.is_some_and(|max| value > max);
        if below || above {
            return Err(LineError::OutOfRange {
                param,
                value,
                min: spec.min,
                max: spec.max,
            });
        }
        self.values.insert(param, value);
        Ok(())
    }

    /// Unchecked write used for linked-pair propagation.
    ///
    /// The value comes from an invertible function of an already
    /// validated edit, so bounds are not re-checked here.
    pub(crate) fn put(&mut self, param: Param, value: f64) {
        self.values.insert(param, value);
    }

    /// Restore a parameter to its declared default.
    pub fn reset(&mut self, param: Param) {
        self.values.insert(param, param.spec().default);
    }

    /// Restore every parameter to its declared default.
    pub fn reset_all(&mut self) {
        for param in Param::ALL {
            self.reset(param);
        }
    }

    /// Iterate over `(parameter, value)` in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Param, f64)> + '_ {
        self.values.iter().map(|(p, v)| (*p, *v))
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}
