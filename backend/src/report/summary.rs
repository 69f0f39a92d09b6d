//! Result-table assembly

use serde::{Deserialize, Serialize};

use crate::allocation::{allocate, SplitResult};
use crate::core::{approx_eq, ReconciliationConfig};
use crate::models::{BillSnapshot, SplitWarning};
use crate::settlement::{settle_with, SettlementPlan};

use super::BillError;

/// Where a person stands after comparing what they owe with what they paid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "amount", rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Within tolerance of zero
    Settled,
    /// Still owes the group this much
    Owes(f64),
    /// Is owed this much by the group
    GetsBack(f64),
}

impl PaymentStatus {
    /// Classify `net = owed - paid`
    pub fn from_net(net: f64, config: &ReconciliationConfig) -> Self {
        if config.is_settled(net) {
            PaymentStatus::Settled
        } else if net > 0.0 {
            PaymentStatus::Owes(net)
        } else {
            PaymentStatus::GetsBack(-net)
        }
    }
}

/// One item's contribution to a person's total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemShare {
    pub item: String,
    pub weight: f64,
    /// `weight / total_weight * 100`
    pub percentage: f64,
    pub amount: f64,
}

/// Summary row for one person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonSummary {
    pub person: String,
    pub should_pay: f64,
    pub paid: f64,
    /// `should_pay - paid`
    pub net: f64,
    pub status: PaymentStatus,
    /// Items this person has a positive weight on, in item order
    pub shares: Vec<ItemShare>,
}

/// Whole-bill totals and verification flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillTotals {
    pub total_bill: f64,
    pub total_split: f64,
    pub total_paid: f64,
    /// Everything on the bill was allocated to someone
    pub split_verified: bool,
    /// Everything on the bill was paid by someone
    pub payment_verified: bool,
}

/// Everything computed for one snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillReport {
    /// [`BillSnapshot::fingerprint`] of the input
    pub fingerprint: String,
    pub split: SplitResult,
    pub plan: SettlementPlan,
    pub people: Vec<PersonSummary>,
    pub totals: BillTotals,
    /// Unallocated items first, then settlement warnings
    pub warnings: Vec<SplitWarning>,
}

impl BillReport {
    pub fn person(&self, person: &str) -> Option<&PersonSummary> {
        self.people.iter().find(|p| p.person == person)
    }

    /// Per-item breakdown of what `person` owes
    pub fn share_breakdown(&self, person: &str) -> Option<&[ItemShare]> {
        self.person(person).map(|p| p.shares.as_slice())
    }

    /// True when there are no warnings and no one is left unresolved
    ///
    /// This can be false with an empty `warnings` list: skipped
    /// sub-tolerance balances may add up to an unresolved leftover on one
    /// person while the totals still agree.
    pub fn is_balanced(&self) -> bool {
        self.warnings.is_empty() && self.plan.is_complete()
    }
}

fn person_shares(snapshot: &BillSnapshot, split: &SplitResult, person: &str) -> Vec<ItemShare> {
    snapshot
        .items
        .iter()
        .filter_map(|item| {
            let weight = snapshot.weights.weight(item.id(), person);
            let total_weight = snapshot.weights.item_total_weight(item.id());
            if weight <= 0.0 || total_weight <= 0.0 {
                return None;
            }
            Some(ItemShare {
                item: item.id().to_string(),
                weight,
                percentage: weight / total_weight * 100.0,
                amount: split.owed(item.id(), person).unwrap_or(0.0),
            })
        })
        .collect()
}

/// Run allocation and settlement for a snapshot and assemble the report
///
/// # Errors
///
/// Any structural problem in the snapshot. Numeric imbalances are reported
/// in [`BillReport::warnings`] instead.
///
/// # Example
///
/// ```rust
/// use bill_split_core_rs::{process_bill, BillSnapshot, Item, WeightMatrix};
///
/// let people = vec!["Alice".to_string(), "Bob".to_string()];
/// let weights = WeightMatrix::equal_split(vec!["Dinner".to_string()], people.clone()).unwrap();
/// let snapshot = BillSnapshot::new(people, vec![Item::priced("Dinner", 90.0)], weights)
///     .with_payment("Alice", 90.0);
///
/// let report = process_bill(&snapshot).unwrap();
/// assert!(report.is_balanced());
/// assert_eq!(report.plan.transactions()[0].as_tuple(), ("Bob", "Alice", 45.0));
/// ```
pub fn process_bill(snapshot: &BillSnapshot) -> Result<BillReport, BillError> {
    snapshot.validate()?;
    let config = snapshot.reconciliation;

    let split = allocate(&snapshot.items, &snapshot.weights, &snapshot.people)?;
    let plan = settle_with(&split.person_totals(), &snapshot.paid, &config)?;

    let people = snapshot
        .people
        .iter()
        .map(|person| {
            let should_pay = split.person_total(person).unwrap_or(0.0);
            let paid = snapshot.paid_by(person);
            let net = should_pay - paid;
            PersonSummary {
                person: person.clone(),
                should_pay,
                paid,
                net,
                status: PaymentStatus::from_net(net, &config),
                shares: person_shares(snapshot, &split, person),
            }
        })
        .collect();

    let total_bill = split.total_bill();
    let total_split = split.total_split();
    let total_paid: f64 = snapshot.paid.values().sum();
    let totals = BillTotals {
        total_bill,
        total_split,
        total_paid,
        split_verified: approx_eq(total_bill, total_split, config.tolerance),
        payment_verified: approx_eq(total_paid, total_bill, config.tolerance),
    };

    let mut warnings = split.warnings();
    warnings.extend(plan.warnings().iter().cloned());

    Ok(BillReport {
        fingerprint: snapshot.fingerprint()?,
        split,
        plan,
        people,
        totals,
        warnings,
    })
}
