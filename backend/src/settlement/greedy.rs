//! Greedy debtor/creditor matching
//!
//! Largest debtor pays largest creditor, repeatedly, until one side runs out.
//!
//! # Algorithm
//!
//! ```text
//! debtors   (desc): D1 ─┐   D2 ─┐   ...
//!                       ▼       ▼
//! creditors (desc): C1 ◄┘   C1/C2 ...
//!
//! amount = min(debtor_remaining, creditor_remaining)
//! emit (debtor → creditor, amount) if amount > tolerance
//! advance whichever cursor dropped to <= tolerance (possibly both)
//! ```
//!
//! This is a deterministic heuristic, not a minimum-transaction solver. True
//! minimum settlement is an assignment/flow problem; the greedy pass keeps
//! the plan within `#debtors + #creditors - 1` transfers, which is enough for
//! splitting a bill at a table.

use serde::{Deserialize, Serialize};

use crate::models::{SplitWarning, Transaction};

use super::balance::{BalanceRole, NetBalance};

/// Result of settling a set of balances
///
/// `unresolved` holds whatever the matching loop could not pair off, with the
/// sign convention of [`NetBalance`]. Aggregate paid and owed disagreeing is
/// the usual cause, but not the only one: balances within tolerance are
/// dropped before matching, so their dust can pile up on a single
/// counterparty and leave it above tolerance even when the totals agree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettlementPlan {
    transactions: Vec<Transaction>,
    unresolved: Vec<NetBalance>,
    warnings: Vec<SplitWarning>,
}

impl SettlementPlan {
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn unresolved(&self) -> &[NetBalance] {
        &self.unresolved
    }

    pub fn warnings(&self) -> &[SplitWarning] {
        &self.warnings
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// True when no balance was left over
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }

    /// Sum of all transaction amounts
    pub fn total_transferred(&self) -> f64 {
        self.transactions.iter().map(Transaction::amount).sum()
    }

    pub(crate) fn push_warning(&mut self, warning: SplitWarning) {
        self.warnings.push(warning);
    }
}

/// A debtor or creditor with the magnitude still to be matched
#[derive(Debug)]
struct Party<'a> {
    person: &'a str,
    remaining: f64,
}

/// Largest first; the sort is stable so equal amounts keep input order
fn sort_descending(parties: &mut [Party<'_>]) {
    parties.sort_by(|a, b| b.remaining.total_cmp(&a.remaining));
}

/// Reduce net balances to a settlement plan
///
/// Balances within `tolerance` of zero are dropped before sorting. Ties are
/// broken by the order of `balances`.
pub fn reduce(balances: &[NetBalance], tolerance: f64) -> SettlementPlan {
    let mut debtors = Vec::new();
    let mut creditors = Vec::new();
    for balance in balances {
        match balance.role(tolerance) {
            BalanceRole::Debtor => debtors.push(Party {
                person: &balance.person,
                remaining: balance.amount,
            }),
            BalanceRole::Creditor => creditors.push(Party {
                person: &balance.person,
                remaining: -balance.amount,
            }),
            BalanceRole::Settled => {}
        }
    }
    sort_descending(&mut debtors);
    sort_descending(&mut creditors);

    let mut transactions = Vec::new();
    let mut d = 0;
    let mut c = 0;

    while d < debtors.len() && c < creditors.len() {
        let amount = debtors[d].remaining.min(creditors[c].remaining);

        if amount > tolerance {
            transactions.push(Transaction::new(
                debtors[d].person,
                creditors[c].person,
                amount,
            ));
        }

        debtors[d].remaining -= amount;
        creditors[c].remaining -= amount;

        if debtors[d].remaining <= tolerance {
            d += 1;
        }
        if creditors[c].remaining <= tolerance {
            c += 1;
        }
    }

    let unresolved = debtors[d..]
        .iter()
        .filter(|p| p.remaining > tolerance)
        .map(|p| NetBalance::new(p.person, p.remaining))
        .chain(
            creditors[c..]
                .iter()
                .filter(|p| p.remaining > tolerance)
                .map(|p| NetBalance::new(p.person, -p.remaining)),
        )
        .collect();

    SettlementPlan {
        transactions,
        unresolved,
        warnings: Vec::new(),
    }
}
