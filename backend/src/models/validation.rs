//! Input validation shared by the allocation and settlement engines
//!
//! Structural problems (negative numbers, non-finite values, duplicate or
//! unknown labels) fail the call immediately. Each variant names the item or
//! person at fault so the collaborator can point at the offending cell.

use std::collections::HashSet;

use thiserror::Error;

/// Errors raised for malformed engine input
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("Item '{item}' has negative price {price}")]
    NegativePrice { item: String, price: f64 },

    #[error("Item '{item}' has negative quantity {quantity}")]
    NegativeQuantity { item: String, quantity: f64 },

    #[error("Weight for item '{item}' and person '{person}' is negative: {weight}")]
    NegativeWeight {
        item: String,
        person: String,
        weight: f64,
    },

    #[error("Person '{person}' has negative paid amount {amount}")]
    NegativePayment { person: String, amount: f64 },

    #[error("Person '{person}' has negative owed amount {amount}")]
    NegativeOwed { person: String, amount: f64 },

    #[error("Non-finite value in {field}")]
    NonFinite { field: String },

    #[error("Person '{0}' is declared more than once")]
    DuplicatePerson(String),

    #[error("Item '{0}' is declared more than once")]
    DuplicateItem(String),

    #[error("Weight matrix references undeclared item '{0}'")]
    UnknownItem(String),

    #[error("Weight matrix references undeclared person '{0}'")]
    UnknownPerson(String),

    #[error("Weight row for item '{item}' has {got} cells but only {expected} people are declared")]
    MisalignedRow {
        item: String,
        expected: usize,
        got: usize,
    },

    #[error("Weight matrix has {got} rows but only {expected} items are declared")]
    ExtraRows { expected: usize, got: usize },

    #[error("Reconciliation tolerance must be finite and non-negative, got {tolerance}")]
    InvalidTolerance { tolerance: f64 },
}

/// Fail with `NonFinite` if `value` is NaN or infinite
pub(crate) fn ensure_finite(value: f64, field: impl FnOnce() -> String) -> Result<(), InputError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InputError::NonFinite { field: field() })
    }
}

/// Reject duplicate people in a declared list
pub(crate) fn ensure_unique_people(people: &[String]) -> Result<(), InputError> {
    let mut seen = HashSet::with_capacity(people.len());
    for person in people {
        if !seen.insert(person.as_str()) {
            return Err(InputError::DuplicatePerson(person.clone()));
        }
    }
    Ok(())
}

/// Reject duplicate item ids in a declared list
pub(crate) fn ensure_unique_items<'a>(
    ids: impl IntoIterator<Item = &'a str>,
) -> Result<(), InputError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(InputError::DuplicateItem(id.to_string()));
        }
    }
    Ok(())
}
