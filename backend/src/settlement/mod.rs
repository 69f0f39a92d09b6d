//! Settlement Reducer
//!
//! Turns per-person owed totals and paid amounts into a list of
//! point-to-point transactions that bring every net balance to zero.
//!
//! # Critical Invariants
//!
//! 1. **No dust**: no transaction is at or below the reconciliation tolerance
//! 2. **Bounded size**: at most `#debtors + #creditors - 1` transactions
//! 3. **Conservation**: nothing the plan leaves open is hidden. Leftovers
//!    land in [`SettlementPlan::unresolved`]; when aggregate paid and owed
//!    disagree a [`SplitWarning::ConservationMismatch`] is added as well.
//!    Sub-tolerance balances are skipped, so their sum can still surface as
//!    an unresolved leftover on one person without any warning
//!
//! # Example
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use bill_split_core_rs::settlement::settle;
//!
//! let owed = BTreeMap::from([("Alice".to_string(), 400.0), ("Bob".to_string(), 600.0)]);
//! let paid = BTreeMap::from([("Alice".to_string(), 1000.0)]);
//!
//! let plan = settle(&owed, &paid).unwrap();
//! assert_eq!(plan.len(), 1);
//! assert_eq!(plan.transactions()[0].as_tuple(), ("Bob", "Alice", 600.0));
//! ```

pub mod balance;
pub mod greedy;

use std::collections::BTreeMap;

use thiserror::Error;

use crate::core::{approx_eq, ReconciliationConfig};
use crate::models::{InputError, SplitWarning};

// Re-export public API
pub use balance::{net_balances, BalanceRole, NetBalance};
pub use greedy::{reduce, SettlementPlan};

/// Errors that can occur during settlement
#[derive(Debug, Error, PartialEq)]
pub enum SettlementError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),
}

/// Settle with the default reconciliation tolerance
///
/// See [`settle_with`].
pub fn settle(
    per_person_total: &BTreeMap<String, f64>,
    paid: &BTreeMap<String, f64>,
) -> Result<SettlementPlan, SettlementError> {
    settle_with(per_person_total, paid, &ReconciliationConfig::default())
}

/// Compute a settlement plan for owed totals and paid amounts
///
/// # Arguments
///
/// * `per_person_total` - What each person should pay (allocation output)
/// * `paid` - What each person actually paid
/// * `config` - Tolerance used for every comparison against zero
///
/// # Errors
///
/// Negative or non-finite amounts, or an invalid tolerance.
pub fn settle_with(
    per_person_total: &BTreeMap<String, f64>,
    paid: &BTreeMap<String, f64>,
    config: &ReconciliationConfig,
) -> Result<SettlementPlan, SettlementError> {
    config.validate()?;
    let balances = net_balances(per_person_total, paid)?;
    let mut plan = reduce(&balances, config.tolerance);

    let total_owed: f64 = per_person_total.values().sum();
    let total_paid: f64 = paid.values().sum();
    if !approx_eq(total_owed, total_paid, config.tolerance) {
        tracing::warn!(
            total_owed,
            total_paid,
            unresolved = plan.unresolved().len(),
            "aggregate paid does not match aggregate owed"
        );
        plan.push_warning(SplitWarning::ConservationMismatch {
            total_owed,
            total_paid,
        });
    }

    tracing::debug!(
        people = balances.len(),
        transactions = plan.len(),
        total_transferred = plan.total_transferred(),
        "settled balances"
    );
    Ok(plan)
}

/// Balances after every transaction in `plan` has been carried out
///
/// The payer's debt shrinks by the amount and the payee's credit shrinks by
/// the same amount. People not mentioned in the plan keep their balance.
pub fn apply_plan(balances: &[NetBalance], plan: &SettlementPlan) -> Vec<NetBalance> {
    let mut after: BTreeMap<&str, f64> = balances
        .iter()
        .map(|b| (b.person.as_str(), b.amount))
        .collect();

    for tx in plan.transactions() {
        *after.entry(tx.from()).or_insert(0.0) -= tx.amount();
        *after.entry(tx.to()).or_insert(0.0) += tx.amount();
    }

    after
        .into_iter()
        .map(|(person, amount)| NetBalance::new(person, amount))
        .collect()
}
