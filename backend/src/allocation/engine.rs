//! Weighted per-item allocation

use thiserror::Error;

use crate::models::validation::{ensure_finite, ensure_unique_items, ensure_unique_people};
use crate::models::{InputError, Item, WeightMatrix};

use super::split::SplitResult;

/// Errors that can occur during allocation
#[derive(Debug, Error, PartialEq)]
pub enum AllocationError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),
}

/// Split every item across `people` in proportion to their weights
///
/// For item `i` with final price `P_i` and total weight `W_i`:
/// - `W_i > 0`: person `p` owes `(w_ip / W_i) * P_i`
/// - `W_i == 0`: everyone owes 0 and the item is reported as unallocated
///
/// # Arguments
///
/// * `items` - Line items; order is kept for display
/// * `weights` - Item x person weight matrix; missing cells are weight 0
/// * `people` - Participants; order is kept for display
///
/// # Errors
///
/// Fails with `AllocationError::InvalidInput` on negative or non-finite
/// prices, quantities or weights, duplicate labels, matrix labels that are
/// not declared items or people, or matrix rows wider or longer than those
/// labels. Finite inputs whose final price, total weight or per-person total
/// overflows are rejected as `NonFinite`, naming the item or person.
pub fn allocate(
    items: &[Item],
    weights: &WeightMatrix,
    people: &[String],
) -> Result<SplitResult, AllocationError> {
    ensure_unique_people(people)?;
    ensure_unique_items(items.iter().map(Item::id))?;
    for item in items {
        item.validate()?;
    }
    let item_ids: Vec<&str> = items.iter().map(Item::id).collect();
    weights.validate_against(&item_ids, people)?;

    let mut owed = Vec::with_capacity(items.len());
    let mut unallocated = Vec::new();

    for item in items {
        let final_price = item.final_price();
        let row: Vec<f64> = people
            .iter()
            .map(|person| weights.weight(item.id(), person))
            .collect();
        let total_weight: f64 = row.iter().sum();
        ensure_finite(total_weight, || {
            format!("total weight of item '{}'", item.id())
        })?;

        if total_weight > 0.0 {
            owed.push(
                row.iter()
                    .map(|w| (w / total_weight) * final_price)
                    .collect(),
            );
        } else {
            tracing::warn!(
                item = item.id(),
                final_price,
                "item has no weights assigned; leaving it unallocated"
            );
            owed.push(vec![0.0; people.len()]);
            unallocated.push(item.id().to_string());
        }
    }

    let split = SplitResult::new(items, people.to_vec(), owed, unallocated);
    for person in people {
        let total = split.person_total(person).unwrap_or(0.0);
        ensure_finite(total, || format!("owed total of person '{}'", person))?;
    }
    tracing::debug!(
        items = items.len(),
        people = people.len(),
        total_bill = split.total_bill(),
        total_split = split.total_split(),
        "allocated bill"
    );
    Ok(split)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_equal_weights_split_evenly() {
        let people = names(&["A", "B", "C", "D"]);
        let items = vec![Item::priced("Cake", 100.0)];
        let weights = WeightMatrix::equal_split(names(&["Cake"]), people.clone()).unwrap();

        let split = allocate(&items, &weights, &people).unwrap();

        for p in &people {
            assert_eq!(split.owed("Cake", p), Some(25.0));
        }
    }

    #[test]
    fn test_zero_weight_item_is_unallocated() {
        let people = names(&["A", "B"]);
        let items = vec![Item::priced("Tip", 50.0)];
        let weights = WeightMatrix::new(names(&["Tip"]), people.clone()).unwrap();

        let split = allocate(&items, &weights, &people).unwrap();

        assert_eq!(split.owed("Tip", "A"), Some(0.0));
        assert_eq!(split.owed("Tip", "B"), Some(0.0));
        assert_eq!(split.unallocated_items(), &["Tip".to_string()]);
        assert_eq!(split.item_residual("Tip"), Some(50.0));
    }

    #[test]
    fn test_negative_price_fails_call() {
        let people = names(&["A"]);
        let items = vec![Item::new("Refund", -5.0, 1.0)];
        let weights = WeightMatrix::equal_split(names(&["Refund"]), people.clone()).unwrap();

        let err = allocate(&items, &weights, &people).unwrap_err();
        assert_eq!(
            err,
            AllocationError::InvalidInput(InputError::NegativePrice {
                item: "Refund".to_string(),
                price: -5.0
            })
        );
    }

    #[test]
    fn test_matrix_missing_declared_person_reads_zero() {
        let people = names(&["A", "B"]);
        let items = vec![Item::priced("Soup", 30.0)];
        // Matrix was built before B joined
        let weights = WeightMatrix::equal_split(names(&["Soup"]), names(&["A"])).unwrap();

        let split = allocate(&items, &weights, &people).unwrap();
        assert_eq!(split.owed("Soup", "A"), Some(30.0));
        assert_eq!(split.owed("Soup", "B"), Some(0.0));
    }

    #[test]
    fn test_matrix_with_undeclared_item_fails() {
        let people = names(&["A"]);
        let items = vec![Item::priced("Soup", 30.0)];
        let weights = WeightMatrix::equal_split(names(&["Soup", "Salad"]), people.clone()).unwrap();

        assert_eq!(
            allocate(&items, &weights, &people),
            Err(AllocationError::InvalidInput(InputError::UnknownItem(
                "Salad".to_string()
            )))
        );
    }

    #[test]
    fn test_overflowing_total_weight_fails_call() {
        let people = names(&["A", "B"]);
        let items = vec![Item::priced("Cake", 100.0)];
        let weights =
            WeightMatrix::from_rows(names(&["Cake"]), people.clone(), vec![vec![1e308, 1e308]])
                .unwrap();

        assert_eq!(
            allocate(&items, &weights, &people),
            Err(AllocationError::InvalidInput(InputError::NonFinite {
                field: "total weight of item 'Cake'".to_string()
            }))
        );
    }

    #[test]
    fn test_overflowing_final_price_fails_call() {
        let people = names(&["A", "B"]);
        let items = vec![Item::new("Caviar", 1e200, 1e200)];
        let weights = WeightMatrix::equal_split(names(&["Caviar"]), people.clone()).unwrap();

        assert_eq!(
            allocate(&items, &weights, &people),
            Err(AllocationError::InvalidInput(InputError::NonFinite {
                field: "final price of item 'Caviar'".to_string()
            }))
        );
    }

    #[test]
    fn test_overflowing_person_total_fails_call() {
        let people = names(&["A"]);
        let items = vec![Item::priced("Gold", 1e308), Item::priced("Platinum", 1e308)];
        let weights =
            WeightMatrix::equal_split(names(&["Gold", "Platinum"]), people.clone()).unwrap();

        assert_eq!(
            allocate(&items, &weights, &people),
            Err(AllocationError::InvalidInput(InputError::NonFinite {
                field: "owed total of person 'A'".to_string()
            }))
        );
    }
}
