//! Warnings reported alongside engine results
//!
//! Numeric imbalances are valid intermediate states while a bill is being
//! edited, so they are returned as data instead of failing the call. The
//! caller decides whether a warning blocks further action.

use serde::{Deserialize, Serialize};

/// A reportable imbalance in a split or settlement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SplitWarning {
    /// Every weight on the item is zero; nobody was charged for it
    UnallocatedItem {
        item: String,
        /// The residual left unallocated (the item's full final price)
        final_price: f64,
    },

    /// Aggregate paid differs from aggregate owed by more than tolerance
    ///
    /// The settlement plan necessarily leaves one side unresolved.
    ConservationMismatch { total_owed: f64, total_paid: f64 },
}

impl SplitWarning {
    /// Signed imbalance: unallocated amount, or `paid - owed`
    pub fn difference(&self) -> f64 {
        match self {
            SplitWarning::UnallocatedItem { final_price, .. } => *final_price,
            SplitWarning::ConservationMismatch {
                total_owed,
                total_paid,
            } => total_paid - total_owed,
        }
    }
}

impl std::fmt::Display for SplitWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SplitWarning::UnallocatedItem { item, final_price } => {
                write!(f, "Item '{}' ({}) is not yet split", item, final_price)
            }
            SplitWarning::ConservationMismatch {
                total_owed,
                total_paid,
            } => write!(
                f,
                "Total paid {} does not match total owed {}",
                total_paid, total_owed
            ),
        }
    }
}
