//! Settlement Reducer Tests
//!
//! Greedy largest-first matching of debtors and creditors, tolerance
//! handling, and reporting of aggregate mismatches.

use std::collections::BTreeMap;

use bill_split_core_rs::settlement::{apply_plan, net_balances, reduce, settle_with};
use bill_split_core_rs::{
    settle, InputError, NetBalance, ReconciliationConfig, SettlementError, SplitWarning,
    Transaction,
};

// ============================================================================
// Test Helpers
// ============================================================================

fn amounts(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries.iter().map(|(p, a)| (p.to_string(), *a)).collect()
}

fn assert_all_settled(balances: &[NetBalance], tolerance: f64) {
    for b in balances {
        assert!(
            b.amount.abs() <= tolerance,
            "{} still has balance {}",
            b.person,
            b.amount
        );
    }
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_bob_pays_alice() {
    let owed = amounts(&[("Alice", 400.0), ("Bob", 600.0)]);
    let paid = amounts(&[("Alice", 1000.0), ("Bob", 0.0)]);

    let plan = settle(&owed, &paid).unwrap();

    assert_eq!(plan.transactions(), &[Transaction::new("Bob", "Alice", 600.0)]);
    assert!(plan.is_complete());
    assert!(plan.warnings().is_empty());
}

#[test]
fn test_one_payer_many_debtors() {
    // Dinner for four, 1000 total, Dana paid everything
    let owed = amounts(&[("Ana", 250.0), ("Ben", 300.0), ("Cy", 150.0), ("Dana", 300.0)]);
    let paid = amounts(&[("Dana", 1000.0)]);

    let plan = settle(&owed, &paid).unwrap();

    assert_eq!(
        plan.transactions(),
        &[
            Transaction::new("Ben", "Dana", 300.0),
            Transaction::new("Ana", "Dana", 250.0),
            Transaction::new("Cy", "Dana", 150.0),
        ]
    );
    assert_eq!(plan.total_transferred(), 700.0);
}

#[test]
fn test_everyone_paid_their_share() {
    let owed = amounts(&[("A", 10.0), ("B", 20.0)]);
    let paid = amounts(&[("A", 10.0), ("B", 20.0)]);

    let plan = settle(&owed, &paid).unwrap();

    assert!(plan.is_empty());
    assert!(plan.is_complete());
}

#[test]
fn test_rounding_dust_produces_no_transactions() {
    // Three-way split of 100 leaves 33.333... each
    let third = 100.0 / 3.0;
    let owed = amounts(&[("A", third), ("B", third), ("C", third)]);
    let paid = amounts(&[("A", 33.33), ("B", 33.34), ("C", 33.33)]);

    let plan = settle(&owed, &paid).unwrap();

    assert!(plan.is_empty(), "unexpected plan: {:?}", plan.transactions());
}

#[test]
fn test_chain_of_partial_matches() {
    let balances = vec![
        NetBalance::new("A", 50.0),
        NetBalance::new("B", 40.0),
        NetBalance::new("C", 10.0),
        NetBalance::new("X", -45.0),
        NetBalance::new("Y", -35.0),
        NetBalance::new("Z", -20.0),
    ];

    let plan = reduce(&balances, 0.01);

    assert_eq!(
        plan.transactions(),
        &[
            Transaction::new("A", "X", 45.0),
            Transaction::new("A", "Y", 5.0),
            Transaction::new("B", "Y", 30.0),
            Transaction::new("B", "Z", 10.0),
            Transaction::new("C", "Z", 10.0),
        ]
    );
    assert!(plan.len() <= 3 + 3 - 1);
    assert_all_settled(&apply_plan(&balances, &plan), 0.01);
}

#[test]
fn test_greedy_is_not_globally_minimal() {
    // Optimum is 3 transfers: A→X 5, A→Z 2, B→Y 3.
    // Greedy emits A→X 5, A→Y 2, B→Y 1, B→Z 2.
    let balances = vec![
        NetBalance::new("A", 7.0),
        NetBalance::new("B", 3.0),
        NetBalance::new("X", -5.0),
        NetBalance::new("Y", -3.0),
        NetBalance::new("Z", -2.0),
    ];

    let plan = reduce(&balances, 0.01);

    assert_eq!(plan.len(), 4, "greedy largest-first is a heuristic");
    assert!(plan.len() <= 2 + 3 - 1);
    assert_all_settled(&apply_plan(&balances, &plan), 0.01);
}

// ============================================================================
// Aggregate Mismatch
// ============================================================================

#[test]
fn test_under_collection_leaves_debtor_unresolved() {
    let owed = amounts(&[("A", 60.0), ("B", 40.0)]);
    let paid = amounts(&[("A", 90.0)]); // 10 short overall

    let plan = settle(&owed, &paid).unwrap();

    assert_eq!(plan.transactions(), &[Transaction::new("B", "A", 30.0)]);
    assert_eq!(plan.unresolved(), &[NetBalance::new("B", 10.0)]);
    assert_eq!(
        plan.warnings(),
        &[SplitWarning::ConservationMismatch {
            total_owed: 100.0,
            total_paid: 90.0
        }]
    );
}

#[test]
fn test_over_collection_leaves_creditor_unresolved() {
    let owed = amounts(&[("A", 50.0), ("B", 50.0)]);
    let paid = amounts(&[("A", 70.0), ("B", 70.0)]);

    let plan = settle(&owed, &paid).unwrap();

    assert!(plan.is_empty(), "no debtors means no transactions");
    assert_eq!(
        plan.unresolved(),
        &[NetBalance::new("A", -20.0), NetBalance::new("B", -20.0)]
    );
    assert_eq!(plan.warnings().len(), 1);
    assert_eq!(plan.warnings()[0].difference(), 40.0);
}

// ============================================================================
// Input Handling
// ============================================================================

#[test]
fn test_skipped_dust_can_leave_creditor_unresolved_without_warning() {
    let owed = amounts(&[
        ("A", 0.009),
        ("B", 0.009),
        ("C", 0.009),
        ("D", 10.0),
        ("E", 0.0),
    ]);
    let paid = amounts(&[("E", 10.027)]);

    let plan = settle(&owed, &paid).unwrap();

    assert!(plan.warnings().is_empty(), "totals agree within tolerance");
    assert_eq!(plan.transactions(), &[Transaction::new("D", "E", 10.0)]);
    assert!(!plan.is_complete());
    assert_eq!(plan.unresolved().len(), 1);
    assert_eq!(plan.unresolved()[0].person, "E");
    assert!((plan.unresolved()[0].amount + 0.027).abs() < 1e-9);
}

#[test]
fn test_negative_payment_rejected() {
    let owed = amounts(&[("A", 10.0)]);
    let paid = amounts(&[("A", -10.0)]);

    assert_eq!(
        settle(&owed, &paid),
        Err(SettlementError::InvalidInput(InputError::NegativePayment {
            person: "A".to_string(),
            amount: -10.0
        }))
    );
}

#[test]
fn test_payer_missing_from_totals_counts_as_owing_nothing() {
    let owed = amounts(&[("A", 25.0)]);
    let paid = amounts(&[("Host", 25.0)]);

    let balances = net_balances(&owed, &paid).unwrap();
    assert_eq!(
        balances,
        vec![NetBalance::new("A", 25.0), NetBalance::new("Host", -25.0)]
    );

    let plan = settle(&owed, &paid).unwrap();
    assert_eq!(plan.transactions(), &[Transaction::new("A", "Host", 25.0)]);
}

#[test]
fn test_custom_tolerance() {
    let owed = amounts(&[("A", 10.0), ("B", 10.0)]);
    let paid = amounts(&[("A", 19.5), ("B", 0.5)]);

    // Whole-unit tolerance
    let config = ReconciliationConfig::with_tolerance(1.0);
    let plan = settle_with(&owed, &paid, &config).unwrap();
    assert_eq!(plan.transactions(), &[Transaction::new("B", "A", 9.5)]);

    let paid = amounts(&[("A", 10.6), ("B", 9.4)]);
    let plan = settle_with(&owed, &paid, &config).unwrap();
    assert!(plan.is_empty());
}

#[test]
fn test_empty_input_gives_empty_plan() {
    let plan = settle(&BTreeMap::new(), &BTreeMap::new()).unwrap();
    assert!(plan.is_empty());
    assert!(plan.is_complete());
    assert!(plan.warnings().is_empty());
}
