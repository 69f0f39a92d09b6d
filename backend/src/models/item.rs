//! Item model
//!
//! A line on the bill. The amount actually split is the item's final price,
//! `price * quantity`.

use serde::{Deserialize, Serialize};

use super::validation::{ensure_finite, InputError};

/// A bill line item
///
/// # Example
/// ```
/// use bill_split_core_rs::Item;
///
/// let pizza = Item::new("Pizza", 400.0, 2.0);
/// assert_eq!(pizza.final_price(), 800.0);
///
/// let tip = Item::priced("Tip", 50.0);
/// assert_eq!(tip.quantity(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Item identifier, unique within a bill
    id: String,

    /// Unit price
    price: f64,

    /// Number of units (may be fractional)
    #[serde(default = "default_quantity")]
    quantity: f64,
}

fn default_quantity() -> f64 {
    1.0
}

impl Item {
    /// Create an item from unit price and quantity
    pub fn new(id: impl Into<String>, price: f64, quantity: f64) -> Self {
        Self {
            id: id.into(),
            price,
            quantity,
        }
    }

    /// Create an item whose final price is already known (quantity 1)
    pub fn priced(id: impl Into<String>, final_price: f64) -> Self {
        Self::new(id, final_price, 1.0)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> f64 {
        self.quantity
    }

    /// `price * quantity`, the amount split across people
    pub fn final_price(&self) -> f64 {
        self.price * self.quantity
    }

    /// Reject negative or non-finite price and quantity, and a final price
    /// that overflows
    pub fn validate(&self) -> Result<(), InputError> {
        ensure_finite(self.price, || format!("price of item '{}'", self.id))?;
        ensure_finite(self.quantity, || format!("quantity of item '{}'", self.id))?;

        if self.price < 0.0 {
            return Err(InputError::NegativePrice {
                item: self.id.clone(),
                price: self.price,
            });
        }
        if self.quantity < 0.0 {
            return Err(InputError::NegativeQuantity {
                item: self.id.clone(),
                quantity: self.quantity,
            });
        }
        ensure_finite(self.final_price(), || {
            format!("final price of item '{}'", self.id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_price_is_price_times_quantity() {
        assert_eq!(Item::new("Naan", 45.0, 4.0).final_price(), 180.0);
        assert_eq!(Item::new("Free refill", 30.0, 0.0).final_price(), 0.0);
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = Item::new("Refund", -10.0, 1.0).validate().unwrap_err();
        assert_eq!(
            err,
            InputError::NegativePrice {
                item: "Refund".to_string(),
                price: -10.0
            }
        );
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let err = Item::new("Soda", 2.0, -1.0).validate().unwrap_err();
        assert!(matches!(err, InputError::NegativeQuantity { .. }));
    }

    #[test]
    fn test_quantity_defaults_to_one_when_deserialized() {
        let item: Item = serde_json::from_str(r#"{"id": "Tax", "price": 12.5}"#).unwrap();
        assert_eq!(item.quantity(), 1.0);
        assert_eq!(item.final_price(), 12.5);
    }

    #[test]
    fn test_overflowing_final_price_rejected() {
        let item = Item::new("Caviar", 1e200, 1e200);
        assert_eq!(
            item.validate(),
            Err(InputError::NonFinite {
                field: "final price of item 'Caviar'".to_string()
            })
        );
    }
}
