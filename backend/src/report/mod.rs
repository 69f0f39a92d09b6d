//! Bill report
//!
//! Composes the two engines for a caller-owned [`BillSnapshot`] and assembles
//! the result tables a display layer needs: per-person summary rows, bill
//! totals with verification flags, per-person share breakdowns, and every
//! warning raised along the way.
//!
//! [`BillSnapshot`]: crate::models::BillSnapshot

pub mod fingerprint;
pub mod summary;

use thiserror::Error;

use crate::allocation::AllocationError;
use crate::models::InputError;
use crate::settlement::SettlementError;

// Re-export public API
pub use fingerprint::compute_bill_hash;
pub use summary::{process_bill, BillReport, BillTotals, ItemShare, PaymentStatus, PersonSummary};

/// Errors that can occur while processing a bill snapshot
#[derive(Debug, Error, PartialEq)]
pub enum BillError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("Allocation failed: {0}")]
    Allocation(#[from] AllocationError),

    #[error("Settlement failed: {0}")]
    Settlement(#[from] SettlementError),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}
