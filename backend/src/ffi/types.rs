//! Conversions from engine results to Python dicts

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::allocation::SplitResult;
use crate::settlement::SettlementPlan;

/// Map any engine error to `ValueError` with its display message
pub fn to_py_err(err: impl std::fmt::Display) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

/// Convert a SplitResult to a Python dict
///
/// ```python
/// {
///     "per_person_total": {"Alice": 400.0, "Bob": 600.0},
///     "per_item_person": {("Pizza", "Alice"): 400.0, ...},
///     "unallocated_items": ["Tip"],
/// }
/// ```
pub fn split_result_to_py(py: Python, split: &SplitResult) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);

    let totals = PyDict::new(py);
    for (person, total) in split.person_totals() {
        totals.set_item(person, total)?;
    }
    dict.set_item("per_person_total", totals)?;

    let cells = PyDict::new(py);
    for item in split.items() {
        for person in split.people() {
            if let Some(owed) = split.owed(item, person) {
                cells.set_item((item.as_str(), person.as_str()), owed)?;
            }
        }
    }
    dict.set_item("per_item_person", cells)?;
    dict.set_item("unallocated_items", split.unallocated_items().to_vec())?;

    Ok(dict.into())
}

/// Convert a SettlementPlan to a Python dict
///
/// ```python
/// {
///     "transactions": [("Bob", "Alice", 600.0)],
///     "unresolved": {},
///     "warnings": [],
/// }
/// ```
pub fn settlement_plan_to_py(py: Python, plan: &SettlementPlan) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new(py);

    let transactions = PyList::new(py, plan.transactions().iter().map(|tx| tx.as_tuple()))?;
    dict.set_item("transactions", transactions)?;

    let unresolved = PyDict::new(py);
    for balance in plan.unresolved() {
        unresolved.set_item(balance.person.as_str(), balance.amount)?;
    }
    dict.set_item("unresolved", unresolved)?;

    let warnings: Vec<String> = plan.warnings().iter().map(|w| w.to_string()).collect();
    dict.set_item("warnings", warnings)?;

    Ok(dict.into())
}
