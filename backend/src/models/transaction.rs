//! Transaction model
//!
//! A single point-to-point transfer in a settlement plan: `from` pays `to`
//! the listed amount. The engine only computes transfers; it never moves
//! money.

use serde::{Deserialize, Serialize};

/// A transfer from a debtor to a creditor
///
/// # Example
/// ```
/// use bill_split_core_rs::Transaction;
///
/// let tx = Transaction::new("Bob", "Alice", 600.0);
/// assert_eq!(tx.from(), "Bob");
/// assert_eq!(tx.to(), "Alice");
/// assert_eq!(tx.amount(), 600.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Paying person (debtor)
    from: String,

    /// Receiving person (creditor)
    to: String,

    /// Amount, always above the reconciliation tolerance
    amount: f64,
}

impl Transaction {
    pub fn new(from: impl Into<String>, to: impl Into<String>, amount: f64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            amount,
        }
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// `(from, to, amount)` tuple, the shape handed to display layers
    pub fn as_tuple(&self) -> (&str, &str, f64) {
        (&self.from, &self.to, self.amount)
    }
}
