//! Allocation Engine
//!
//! Turns items, final prices and a weight matrix into per-person, per-item
//! owed amounts and per-person totals.
//!
//! # Critical Invariants
//!
//! 1. **Conservation**: for every item with positive total weight, the owed
//!    amounts sum back to the item's final price (up to float rounding)
//! 2. **No silent redistribution**: an item whose weights are all zero is
//!    charged to nobody and surfaces as [`SplitWarning::UnallocatedItem`]
//! 3. **Purity**: no state survives between calls; identical input gives
//!    bit-identical output
//!
//! # Example
//!
//! ```rust
//! use bill_split_core_rs::{allocate, Item, WeightMatrix};
//!
//! let people = vec!["Alice".to_string(), "Bob".to_string()];
//! let items = vec![Item::priced("Pizza", 800.0), Item::priced("Drinks", 200.0)];
//! let weights = WeightMatrix::from_rows(
//!     vec!["Pizza".to_string(), "Drinks".to_string()],
//!     people.clone(),
//!     vec![vec![1.0, 1.0], vec![0.0, 1.0]],
//! )
//! .unwrap();
//!
//! let split = allocate(&items, &weights, &people).unwrap();
//! assert_eq!(split.person_total("Alice"), Some(400.0));
//! assert_eq!(split.person_total("Bob"), Some(600.0));
//! ```
//!
//! [`SplitWarning::UnallocatedItem`]: crate::models::SplitWarning::UnallocatedItem

pub mod engine;
pub mod split;

// Re-export public API
pub use engine::{allocate, AllocationError};
pub use split::SplitResult;
