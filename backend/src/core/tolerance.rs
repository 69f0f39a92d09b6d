//! Reconciliation tolerance
//!
//! All money values are `f64` in the bill's currency. Divisions in the
//! allocation engine carry rounding error around 1e-9 per operation, so every
//! comparison of a balance against zero goes through a tolerance of one minor
//! currency unit instead of an exact check.

use serde::{Deserialize, Serialize};

use crate::models::InputError;

/// One minor currency unit (e.g. one cent or one paisa).
pub const RECONCILIATION_TOLERANCE: f64 = 0.01;

/// Returns true if `amount` is within `tolerance` of zero.
///
/// # Example
/// ```
/// use bill_split_core_rs::core::is_settled;
///
/// assert!(is_settled(0.004, 0.01));
/// assert!(is_settled(-0.01, 0.01));
/// assert!(!is_settled(0.02, 0.01));
/// ```
pub fn is_settled(amount: f64, tolerance: f64) -> bool {
    amount.abs() <= tolerance
}

/// Returns true if `a` and `b` differ by at most `tolerance`.
pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    is_settled(a - b, tolerance)
}

/// Tolerance settings used when balances are reconciled
///
/// Carried inside a [`BillSnapshot`](crate::models::BillSnapshot) so the
/// collaborator can pick a different minor unit. Defaults to
/// [`RECONCILIATION_TOLERANCE`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReconciliationConfig {
    /// Largest magnitude still treated as zero
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
}

fn default_tolerance() -> f64 {
    RECONCILIATION_TOLERANCE
}

impl Default for ReconciliationConfig {
    fn default() -> Self {
        Self {
            tolerance: RECONCILIATION_TOLERANCE,
        }
    }
}

impl ReconciliationConfig {
    /// Create a config with a custom tolerance
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self { tolerance }
    }

    /// Reject negative or non-finite tolerances
    pub fn validate(&self) -> Result<(), InputError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(InputError::InvalidTolerance {
                tolerance: self.tolerance,
            });
        }
        Ok(())
    }

    /// See [`is_settled`]
    pub fn is_settled(&self, amount: f64) -> bool {
        is_settled(amount, self.tolerance)
    }
}
