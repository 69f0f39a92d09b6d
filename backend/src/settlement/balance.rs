//! Net balances
//!
//! `net = owed - paid` per person. Positive means the person still owes the
//! group (debtor), negative means the group owes them (creditor).

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::models::validation::ensure_finite;
use crate::models::InputError;

/// Which side of the settlement a person is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BalanceRole {
    /// Owes the group
    Debtor,
    /// Is owed by the group
    Creditor,
    /// Within tolerance of zero
    Settled,
}

/// A person's outstanding balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetBalance {
    pub person: String,
    /// `owed - paid`
    pub amount: f64,
}

impl NetBalance {
    pub fn new(person: impl Into<String>, amount: f64) -> Self {
        Self {
            person: person.into(),
            amount,
        }
    }

    /// Classify the balance against `tolerance`
    pub fn role(&self, tolerance: f64) -> BalanceRole {
        if self.amount > tolerance {
            BalanceRole::Debtor
        } else if self.amount < -tolerance {
            BalanceRole::Creditor
        } else {
            BalanceRole::Settled
        }
    }
}

/// Compute net balances over everyone named in either map
///
/// A person missing from `owed` owes 0; a person missing from `paid` paid 0.
/// The result is ordered by person name.
///
/// # Errors
///
/// `NegativeOwed`, `NegativePayment` or `NonFinite` for invalid amounts.
pub fn net_balances(
    owed: &BTreeMap<String, f64>,
    paid: &BTreeMap<String, f64>,
) -> Result<Vec<NetBalance>, InputError> {
    for (person, &amount) in owed {
        ensure_finite(amount, || format!("owed amount of '{}'", person))?;
        if amount < 0.0 {
            return Err(InputError::NegativeOwed {
                person: person.clone(),
                amount,
            });
        }
    }
    for (person, &amount) in paid {
        ensure_finite(amount, || format!("paid amount of '{}'", person))?;
        if amount < 0.0 {
            return Err(InputError::NegativePayment {
                person: person.clone(),
                amount,
            });
        }
    }

    let people: BTreeSet<&String> = owed.keys().chain(paid.keys()).collect();
    Ok(people
        .into_iter()
        .map(|person| {
            let o = owed.get(person).copied().unwrap_or(0.0);
            let p = paid.get(person).copied().unwrap_or(0.0);
            NetBalance::new(person.clone(), o - p)
        })
        .collect())
}
