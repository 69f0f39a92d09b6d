//! Split result table
//!
//! Item-major table of owed amounts with named rows and columns, plus the
//! derived per-person and per-item totals.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{Item, SplitWarning};

/// Output of [`allocate`](super::allocate)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitResult {
    /// Item ids in input order
    items: Vec<String>,

    /// Final price of each item, aligned with `items`
    final_prices: Vec<f64>,

    /// People in input order
    people: Vec<String>,

    /// `owed[item_idx][person_idx]`
    owed: Vec<Vec<f64>>,

    /// Per-person totals, aligned with `people`
    person_totals: Vec<f64>,

    /// Items whose weights were all zero
    unallocated: Vec<String>,
}

impl SplitResult {
    pub(crate) fn new(
        items: &[Item],
        people: Vec<String>,
        owed: Vec<Vec<f64>>,
        unallocated: Vec<String>,
    ) -> Self {
        let person_totals: Vec<f64> = (0..people.len())
            .map(|p| owed.iter().map(|row| row[p]).sum::<f64>())
            .collect();

        Self {
            items: items.iter().map(|i| i.id().to_string()).collect(),
            final_prices: items.iter().map(Item::final_price).collect(),
            people,
            owed,
            person_totals,
            unallocated,
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn people(&self) -> &[String] {
        &self.people
    }

    fn item_index(&self, item: &str) -> Option<usize> {
        self.items.iter().position(|i| i == item)
    }

    fn person_index(&self, person: &str) -> Option<usize> {
        self.people.iter().position(|p| p == person)
    }

    /// Amount `person` owes for `item`
    pub fn owed(&self, item: &str, person: &str) -> Option<f64> {
        let i = self.item_index(item)?;
        let p = self.person_index(person)?;
        Some(self.owed[i][p])
    }

    /// Row of owed amounts for `item`, aligned with [`people`](Self::people)
    pub fn item_row(&self, item: &str) -> Option<&[f64]> {
        self.item_index(item).map(|i| self.owed[i].as_slice())
    }

    /// Sum of `person`'s owed amounts across all items
    pub fn person_total(&self, person: &str) -> Option<f64> {
        self.person_index(person).map(|p| self.person_totals[p])
    }

    /// Per-person totals keyed by name, ready to feed into settlement
    pub fn person_totals(&self) -> BTreeMap<String, f64> {
        self.people
            .iter()
            .cloned()
            .zip(self.person_totals.iter().copied())
            .collect()
    }

    /// Final price of `item`
    pub fn final_price(&self, item: &str) -> Option<f64> {
        self.item_index(item).map(|i| self.final_prices[i])
    }

    /// Sum over people of the amounts owed for `item`
    pub fn item_total(&self, item: &str) -> Option<f64> {
        self.item_index(item).map(|i| self.owed[i].iter().sum())
    }

    /// `final_price - item_total`; ~0 for allocated items
    pub fn item_residual(&self, item: &str) -> Option<f64> {
        let i = self.item_index(item)?;
        Some(self.final_prices[i] - self.owed[i].iter().sum::<f64>())
    }

    pub fn unallocated_items(&self) -> &[String] {
        &self.unallocated
    }

    pub fn is_fully_allocated(&self) -> bool {
        self.unallocated.is_empty()
    }

    /// One `UnallocatedItem` warning per item with zero total weight
    pub fn warnings(&self) -> Vec<SplitWarning> {
        self.unallocated
            .iter()
            .map(|item| SplitWarning::UnallocatedItem {
                item: item.clone(),
                final_price: self.final_price(item).unwrap_or(0.0),
            })
            .collect()
    }

    /// Sum of all final prices
    pub fn total_bill(&self) -> f64 {
        self.final_prices.iter().sum()
    }

    /// Sum of all owed amounts
    pub fn total_split(&self) -> f64 {
        self.person_totals.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> SplitResult {
        SplitResult::new(
            &[Item::priced("Pizza", 800.0), Item::priced("Tip", 50.0)],
            vec!["Alice".to_string(), "Bob".to_string()],
            vec![vec![400.0, 400.0], vec![0.0, 0.0]],
            vec!["Tip".to_string()],
        )
    }

    #[test]
    fn test_totals_derived_from_table() {
        let r = result();
        assert_eq!(r.person_total("Alice"), Some(400.0));
        assert_eq!(r.item_total("Pizza"), Some(800.0));
        assert_eq!(r.total_bill(), 850.0);
        assert_eq!(r.total_split(), 800.0);
    }

    #[test]
    fn test_unknown_labels_return_none() {
        let r = result();
        assert_eq!(r.owed("Pizza", "Carol"), None);
        assert_eq!(r.item_total("Salad"), None);
    }

    #[test]
    fn test_unallocated_item_warning_carries_residual() {
        let r = result();
        assert!(!r.is_fully_allocated());
        assert_eq!(
            r.warnings(),
            vec![SplitWarning::UnallocatedItem {
                item: "Tip".to_string(),
                final_price: 50.0
            }]
        );
        assert_eq!(r.item_residual("Tip"), Some(50.0));
    }
}
