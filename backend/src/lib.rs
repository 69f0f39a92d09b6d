//! Bill Split Core - Rust Engine
//!
//! Splits a shared bill among participants using per-item weighted shares,
//! then computes the transfers needed to settle outstanding balances.
//!
//! # Architecture
//!
//! - **core**: Reconciliation tolerance and its configuration
//! - **models**: Domain types (Item, WeightMatrix, BillSnapshot, Transaction)
//! - **allocation**: Allocation Engine (items x weights → owed amounts)
//! - **settlement**: Settlement Reducer (net balances → transactions)
//! - **report**: Result tables for a whole snapshot
//!
//! # Critical Invariants
//!
//! 1. Both engines are pure: no state survives between calls
//! 2. Every comparison against zero uses the reconciliation tolerance
//! 3. Structural errors fail the call; numeric imbalances are returned as data

// Module declarations
pub mod allocation;
pub mod core;
pub mod models;
pub mod report;
pub mod settlement;

// Re-exports for convenience
pub use allocation::{allocate, AllocationError, SplitResult};
pub use self::core::{ReconciliationConfig, RECONCILIATION_TOLERANCE};
pub use models::{BillSnapshot, InputError, Item, SplitWarning, Transaction, WeightMatrix};
pub use report::{process_bill, BillError, BillReport, BillTotals, PaymentStatus, PersonSummary};
pub use settlement::{settle, settle_with, NetBalance, SettlementError, SettlementPlan};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn bill_split_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::engine::allocate, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::engine::settle, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::engine::process_bill_json, m)?)?;
    Ok(())
}
