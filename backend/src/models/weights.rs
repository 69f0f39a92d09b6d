//! Weight matrix
//!
//! A rectangular table of non-negative weights with a named row index
//! (items) and a named column index (people). `rows[i][p]` is person `p`'s
//! relative share of item `i`.
//!
//! # Critical Invariants
//!
//! 1. **Named access**: cells are read by (item, person) label, never by
//!    position alone
//! 2. **Missing is zero**: a short row or an absent label reads as weight 0,
//!    but a row or cell with no label to name it is a shape error
//! 3. **Validated on read**: a matrix may arrive through serde without going
//!    through [`WeightMatrix::set`], so the engine calls
//!    [`WeightMatrix::validate_against`] before every use

use serde::{Deserialize, Serialize};

use super::validation::{ensure_finite, ensure_unique_items, ensure_unique_people, InputError};

/// Per-item, per-person weights
///
/// # Example
/// ```
/// use bill_split_core_rs::WeightMatrix;
///
/// let mut weights = WeightMatrix::new(
///     vec!["Pizza".to_string(), "Drinks".to_string()],
///     vec!["Alice".to_string(), "Bob".to_string()],
/// )
/// .unwrap();
///
/// weights.set("Pizza", "Alice", 1.0).unwrap();
/// weights.set("Pizza", "Bob", 1.0).unwrap();
/// weights.set("Drinks", "Bob", 1.0).unwrap();
///
/// assert_eq!(weights.weight("Drinks", "Alice"), 0.0);
/// assert_eq!(weights.item_total_weight("Pizza"), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightMatrix {
    /// Row labels
    items: Vec<String>,

    /// Column labels
    people: Vec<String>,

    /// Row-major weights, `rows[item_idx][person_idx]`
    #[serde(default)]
    rows: Vec<Vec<f64>>,
}

impl WeightMatrix {
    /// Create an all-zero matrix over the given labels
    pub fn new(items: Vec<String>, people: Vec<String>) -> Result<Self, InputError> {
        ensure_unique_items(items.iter().map(String::as_str))?;
        ensure_unique_people(&people)?;

        let rows = vec![vec![0.0; people.len()]; items.len()];
        Ok(Self {
            items,
            people,
            rows,
        })
    }

    /// Build a matrix from positional rows
    ///
    /// Short rows and missing rows are padded with zero weights. Rows or
    /// cells beyond the declared labels are rejected. Every weight is
    /// validated.
    pub fn from_rows(
        items: Vec<String>,
        people: Vec<String>,
        rows: Vec<Vec<f64>>,
    ) -> Result<Self, InputError> {
        let mut matrix = Self::new(items, people)?;
        matrix.check_shape(&rows)?;
        for (item_idx, row) in rows.into_iter().enumerate() {
            for (person_idx, weight) in row.into_iter().enumerate() {
                matrix.check_weight(item_idx, person_idx, weight)?;
                matrix.rows[item_idx][person_idx] = weight;
            }
        }
        Ok(matrix)
    }

    /// Matrix where every person has weight 1 on every item
    pub fn equal_split(items: Vec<String>, people: Vec<String>) -> Result<Self, InputError> {
        let mut matrix = Self::new(items, people)?;
        for row in &mut matrix.rows {
            row.iter_mut().for_each(|w| *w = 1.0);
        }
        Ok(matrix)
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

    fn cell(&self, item_idx: usize, person_idx: usize) -> f64 {
        self.rows
            .get(item_idx)
            .and_then(|row| row.get(person_idx))
            .copied()
            .unwrap_or(0.0)
    }

    fn check_shape(&self, rows: &[Vec<f64>]) -> Result<(), InputError> {
        if rows.len() > self.items.len() {
            return Err(InputError::ExtraRows {
                expected: self.items.len(),
                got: rows.len(),
            });
        }
        for (item, row) in self.items.iter().zip(rows) {
            if row.len() > self.people.len() {
                return Err(InputError::MisalignedRow {
                    item: item.clone(),
                    expected: self.people.len(),
                    got: row.len(),
                });
            }
        }
        Ok(())
    }

    fn check_weight(&self, item_idx: usize, person_idx: usize, weight: f64) -> Result<(), InputError> {
        let item = &self.items[item_idx];
        let person = &self.people[person_idx];
        ensure_finite(weight, || {
            format!("weight for item '{}' and person '{}'", item, person)
        })?;
        if weight < 0.0 {
            return Err(InputError::NegativeWeight {
                item: item.clone(),
                person: person.clone(),
                weight,
            });
        }
        Ok(())
    }

    /// Weight of `person` on `item`; 0 for unknown labels or missing cells
    pub fn weight(&self, item: &str, person: &str) -> f64 {
        match (self.item_index(item), self.person_index(person)) {
            (Some(i), Some(p)) => self.cell(i, p),
            _ => 0.0,
        }
    }

    /// Set one cell
    ///
    /// # Errors
    /// - `UnknownItem` / `UnknownPerson` if a label is not declared
    /// - `NegativeWeight` / `NonFinite` for invalid weights
    pub fn set(&mut self, item: &str, person: &str, weight: f64) -> Result<(), InputError> {
        let item_idx = self
            .item_index(item)
            .ok_or_else(|| InputError::UnknownItem(item.to_string()))?;
        let person_idx = self
            .person_index(person)
            .ok_or_else(|| InputError::UnknownPerson(person.to_string()))?;
        self.check_weight(item_idx, person_idx, weight)?;

        // Deserialized matrices may be ragged
        let people = self.people.len();
        if self.rows.len() <= item_idx {
            self.rows.resize_with(item_idx + 1, || vec![0.0; people]);
        }
        let row = &mut self.rows[item_idx];
        if row.len() < people {
            row.resize(people, 0.0);
        }
        row[person_idx] = weight;
        Ok(())
    }

    /// Sum of all weights on `item` (`W_i`)
    pub fn item_total_weight(&self, item: &str) -> f64 {
        match self.item_index(item) {
            Some(i) => (0..self.people.len()).map(|p| self.cell(i, p)).sum(),
            None => 0.0,
        }
    }

    /// Check that the matrix is usable for the declared items and people
    ///
    /// Every label in the matrix must be declared, labels must be unique, and
    /// every stored weight must be finite and non-negative. Rows may be
    /// short but never longer than the labels they are indexed by. Declared
    /// labels absent from the matrix are fine: they read as weight 0.
    pub fn validate_against(&self, items: &[&str], people: &[String]) -> Result<(), InputError> {
        ensure_unique_items(self.items.iter().map(String::as_str))?;
        ensure_unique_people(&self.people)?;

        if let Some(unknown) = self.items.iter().find(|i| !items.contains(&i.as_str())) {
            return Err(InputError::UnknownItem(unknown.clone()));
        }
        if let Some(unknown) = self.people.iter().find(|p| !people.contains(p)) {
            return Err(InputError::UnknownPerson(unknown.clone()));
        }

        self.check_shape(&self.rows)?;
        for (item_idx, row) in self.rows.iter().enumerate() {
            for (person_idx, &weight) in row.iter().enumerate() {
                self.check_weight(item_idx, person_idx, weight)?;
            }
        }
        Ok(())
    }
}
