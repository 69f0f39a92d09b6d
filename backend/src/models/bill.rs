//! Bill snapshot
//!
//! The complete, caller-owned input for one run of the engine: who is at the
//! table, what was ordered, how each item is weighted, and who paid what.
//! The engine never holds a snapshot between calls; the collaborator passes a
//! fresh one every time the user edits the bill.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::ReconciliationConfig;
use crate::report::{compute_bill_hash, BillError};

use super::item::Item;
use super::validation::{ensure_unique_items, ensure_unique_people, InputError};
use super::weights::WeightMatrix;

/// Serializable snapshot of a bill
///
/// # Example
/// ```
/// use bill_split_core_rs::BillSnapshot;
///
/// let json = r#"{
///     "people": ["Alice", "Bob"],
///     "items": [{"id": "Pizza", "price": 800.0}],
///     "weights": {"items": ["Pizza"], "people": ["Alice", "Bob"], "rows": [[1.0, 1.0]]},
///     "paid": {"Alice": 800.0}
/// }"#;
///
/// let snapshot = BillSnapshot::from_json(json).unwrap();
/// assert_eq!(snapshot.total_bill(), 800.0);
/// assert_eq!(snapshot.paid_by("Bob"), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillSnapshot {
    /// Participants in display order
    pub people: Vec<String>,

    /// Line items in display order
    pub items: Vec<Item>,

    /// Item x person weights
    pub weights: WeightMatrix,

    /// Amount each person actually paid; absent people paid nothing
    #[serde(default)]
    pub paid: BTreeMap<String, f64>,

    /// Tolerance used when balances are compared to zero
    #[serde(default)]
    pub reconciliation: ReconciliationConfig,
}

impl BillSnapshot {
    /// Create a snapshot with nothing paid yet and the default tolerance
    pub fn new(people: Vec<String>, items: Vec<Item>, weights: WeightMatrix) -> Self {
        Self {
            people,
            items,
            weights,
            paid: BTreeMap::new(),
            reconciliation: ReconciliationConfig::default(),
        }
    }

    /// Record what `person` paid, replacing any earlier amount
    pub fn with_payment(mut self, person: impl Into<String>, amount: f64) -> Self {
        self.paid.insert(person.into(), amount);
        self
    }

    /// Replace the tolerance used when comparing balances to zero
    pub fn with_reconciliation(mut self, reconciliation: ReconciliationConfig) -> Self {
        self.reconciliation = reconciliation;
        self
    }

    /// Parse a snapshot from JSON
    pub fn from_json(json: &str) -> Result<Self, BillError> {
        serde_json::from_str(json).map_err(|e| {
            BillError::SerializationError(format!("Snapshot deserialization failed: {}", e))
        })
    }

    /// Serialize the snapshot to JSON
    pub fn to_json(&self) -> Result<String, BillError> {
        serde_json::to_string(self).map_err(|e| {
            BillError::SerializationError(format!("Snapshot serialization failed: {}", e))
        })
    }

    /// Deterministic SHA-256 of the snapshot's canonical JSON
    ///
    /// Two snapshots with the same content hash identically regardless of
    /// map ordering, so a caller can tell whether a cached report is stale.
    pub fn fingerprint(&self) -> Result<String, BillError> {
        compute_bill_hash(self)
    }

    /// Sum of all final prices
    pub fn total_bill(&self) -> f64 {
        self.items.iter().map(Item::final_price).sum()
    }

    /// Amount paid by `person` (0 if not recorded)
    pub fn paid_by(&self, person: &str) -> f64 {
        self.paid.get(person).copied().unwrap_or(0.0)
    }

    /// Structural validation of every part of the snapshot
    ///
    /// Payments recorded for people who are not declared are rejected; the
    /// amounts themselves are checked by the settlement engine.
    pub fn validate(&self) -> Result<(), InputError> {
        self.reconciliation.validate()?;
        ensure_unique_people(&self.people)?;
        ensure_unique_items(self.items.iter().map(Item::id))?;
        for item in &self.items {
            item.validate()?;
        }

        let item_ids: Vec<&str> = self.items.iter().map(Item::id).collect();
        self.weights.validate_against(&item_ids, &self.people)?;

        if let Some(unknown) = self.paid.keys().find(|p| !self.people.contains(p)) {
            return Err(InputError::UnknownPerson(unknown.clone()));
        }
        Ok(())
    }
}
