//! Python bindings
//!
//! The display layer is a Python application; it collects and parses the raw
//! form input, calls these functions with plain lists and dicts, and renders
//! whatever comes back. Engine errors surface as `ValueError`.

pub mod engine;
pub mod types;
