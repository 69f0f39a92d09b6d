//! Domain models for the bill split engine

pub mod bill;
pub mod item;
pub mod transaction;
pub mod validation;
pub mod warning;
pub mod weights;

// Re-exports
pub use bill::BillSnapshot;
pub use item::Item;
pub use transaction::Transaction;
pub use validation::InputError;
pub use warning::SplitWarning;
pub use weights::WeightMatrix;
