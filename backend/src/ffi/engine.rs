//! Python-callable engine entry points

use std::collections::{BTreeMap, HashMap};

use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::allocation;
use crate::models::{BillSnapshot, Item, WeightMatrix};
use crate::report;
use crate::settlement;

use super::types::{settlement_plan_to_py, split_result_to_py, to_py_err};

/// Split items across people by weight
///
/// # Example (from Python)
///
/// ```python
/// from bill_split_core_rs import allocate
///
/// result = allocate(
///     [("Pizza", 800.0), ("Drinks", 200.0)],
///     {("Pizza", "Alice"): 1, ("Pizza", "Bob"): 1, ("Drinks", "Bob"): 1},
///     ["Alice", "Bob"],
/// )
/// assert result["per_person_total"] == {"Alice": 400.0, "Bob": 600.0}
/// ```
#[pyfunction]
pub fn allocate(
    py: Python,
    items: Vec<(String, f64)>,
    weights: HashMap<(String, String), f64>,
    people: Vec<String>,
) -> PyResult<Py<PyDict>> {
    let items: Vec<Item> = items
        .into_iter()
        .map(|(id, final_price)| Item::priced(id, final_price))
        .collect();

    let mut matrix = WeightMatrix::new(
        items.iter().map(|i| i.id().to_string()).collect(),
        people.clone(),
    )
    .map_err(to_py_err)?;
    for ((item, person), weight) in weights {
        matrix.set(&item, &person, weight).map_err(to_py_err)?;
    }

    let split = allocation::allocate(&items, &matrix, &people).map_err(to_py_err)?;
    split_result_to_py(py, &split)
}

/// Compute who pays whom from owed totals and paid amounts
#[pyfunction]
pub fn settle(
    py: Python,
    per_person_total: HashMap<String, f64>,
    paid: HashMap<String, f64>,
) -> PyResult<Py<PyDict>> {
    let owed: BTreeMap<String, f64> = per_person_total.into_iter().collect();
    let paid: BTreeMap<String, f64> = paid.into_iter().collect();

    let plan = settlement::settle(&owed, &paid).map_err(to_py_err)?;
    settlement_plan_to_py(py, &plan)
}

/// Process a JSON bill snapshot and return the full report as JSON
#[pyfunction]
pub fn process_bill_json(snapshot_json: &str) -> PyResult<String> {
    let snapshot = BillSnapshot::from_json(snapshot_json).map_err(to_py_err)?;
    let report = report::process_bill(&snapshot).map_err(to_py_err)?;
    serde_json::to_string(&report).map_err(to_py_err)
}
