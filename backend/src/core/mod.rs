//! Core numeric settings shared by the allocation and settlement engines.

pub mod tolerance;

pub use tolerance::{approx_eq, is_settled, ReconciliationConfig, RECONCILIATION_TOLERANCE};
