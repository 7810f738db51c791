//! Bidirectional parameter links.
//!
//! Some inputs are two views of the same physical quantity: editing
//! either side must silently rewrite the other so both stay consistent
//! under the pair's invertible formula. The only such pair in this
//! domain is `dpf` ↔ `filament_linear_density` (denier is grams per
//! 9000 m), but the mechanism is general.

use super::Param;

/// Grams-per-meter span of the denier unit.
pub const DENIER_SPAN_M: f64 = 9000.0;

fn denier_to_g_per_m(dpf: f64) -> f64 {
    dpf / DENIER_SPAN_M
}

fn g_per_m_to_denier(g_per_m: f64) -> f64 {
    g_per_m * DENIER_SPAN_M
}

/// Two parameters related by an invertible formula.
///
/// After any committed edit to one side, the other side is rewritten via
/// the matching direction function; propagation never re-triggers the
/// edited side, so a single edit settles in one pass.
#[derive(Debug, Clone, Copy)]
pub struct LinkedPair {
    a: Param,
    b: Param,
    forward: fn(f64) -> f64,
    backward: fn(f64) -> f64,
}

impl LinkedPair {
    /// Link `a` and `b` with `b = forward(a)` and `a = backward(b)`.
    #[must_use]
    pub const fn new(a: Param, b: Param, forward: fn(f64) -> f64, backward: fn(f64) -> f64) -> Self {
        Self {
            a,
            b,
            forward,
            backward,
        }
    }

    /// The `dpf` ↔ `filament_linear_density` pair.
    #[must_use]
    pub const fn dpf_linear_density() -> Self {
        Self::new(
            Param::Dpf,
            Param::FilamentLinearDensity,
            denier_to_g_per_m,
            g_per_m_to_denier,
        )
    }

    /// Partner write implied by a committed edit, if the edited
    /// parameter belongs to this pair.
    #[must_use]
    pub fn partner_update(&self, edited: Param, value: f64) -> Option<(Param, f64)> {
        if edited == self.a {
            Some((self.b, (self.forward)(value)))
        } else if edited == self.b {
            Some((self.a, (self.backward)(value)))
        } else {
            None
        }
    }

    /// Check both sides of a pair for mutual consistency.
    ///
    /// Uses relative tolerance against the forward direction.
    #[must_use]
    pub fn is_consistent(&self, a_value: f64, b_value: f64, rel_tolerance: f64) -> bool {
        let expected = (self.forward)(a_value);
        let scale = expected.abs().max(b_value.abs()).max(f64::MIN_POSITIVE);
        (expected - b_value).abs() / scale <= rel_tolerance
    }
}
