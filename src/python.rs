//! Python bindings via PyO3

use crate::compare::{compare as compare_inputs, sort_raw};
use crate::condition::{Condition, Selected, Selection};
use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;

// ============================================================================
// Condition Class
// ============================================================================

/// Python-facing media query condition
#[pyclass(name = "MediaQueryCondition", frozen)]
pub struct PyCondition {
    inner: Condition,
}

fn selected_into_py(py: Python<'_>, selected: Selected<'_>) -> PyResult<Py<PyAny>> {
    match selected {
        Selected::All(items) => Ok(items.into_pyobject(py)?.into_any().unbind()),
        Selected::First(item) => Ok(item.into_pyobject(py)?.into_any().unbind()),
    }
}

#[pymethods]
impl PyCondition {
    #[new]
    fn new(condition_string: String) -> Self {
        Self {
            inner: Condition::new(condition_string),
        }
    }

    fn is_max(&self) -> bool {
        self.inner.is_max()
    }

    fn is_min(&self) -> bool {
        self.inner.is_min()
    }

    fn is_range(&self) -> bool {
        self.inner.is_range()
    }

    fn is_min_max(&self) -> bool {
        self.inner.is_min_max()
    }

    fn get_raw(&self) -> &str {
        self.inner.raw()
    }

    /// Returns a list of keys, or the first key (or None) for "first"
    #[pyo3(signature = (return_type="array"))]
    fn get_keys(&self, py: Python<'_>, return_type: &str) -> PyResult<Py<PyAny>> {
        selected_into_py(py, self.inner.keys(Selection::from(return_type)))
    }

    /// Returns a list of values, or the first value (or None) for "first"
    #[pyo3(signature = (return_type="array"))]
    fn get_values(&self, py: Python<'_>, return_type: &str) -> PyResult<Py<PyAny>> {
        selected_into_py(py, self.inner.values(Selection::from(return_type)))
    }

    fn has_priority(&self, other: PyRef<'_, PyCondition>) -> bool {
        self.inner.has_priority(&other.inner)
    }

    fn __str__(&self) -> &str {
        self.inner.raw()
    }

    fn __repr__(&self) -> String {
        format!("MediaQueryCondition({:?})", self.inner.raw())
    }
}

/// Argument accepted wherever a condition is expected: a string or a condition
#[derive(FromPyObject)]
enum PyConditionInput<'py> {
    Raw(String),
    Parsed(PyRef<'py, PyCondition>),
}

// ============================================================================
// Python Functions
// ============================================================================

/// Compare two conditions, returning -1 when `a` has priority and 1 otherwise
#[pyfunction]
fn compare(a: PyConditionInput<'_>, b: PyConditionInput<'_>) -> i8 {
    let ordering = match (&a, &b) {
        (PyConditionInput::Raw(a), PyConditionInput::Raw(b)) => compare_inputs(a, b),
        (PyConditionInput::Raw(a), PyConditionInput::Parsed(b)) => compare_inputs(a, &b.inner),
        (PyConditionInput::Parsed(a), PyConditionInput::Raw(b)) => compare_inputs(&a.inner, b),
        (PyConditionInput::Parsed(a), PyConditionInput::Parsed(b)) => {
            compare_inputs(&a.inner, &b.inner)
        }
    };
    ordering as i8
}

/// Sort condition strings so that higher priority ones come first
#[pyfunction]
fn sort_conditions(mut conditions: Vec<String>) -> Vec<String> {
    sort_raw(&mut conditions);
    conditions
}

/// Sort condition strings asynchronously
///
/// The sort runs on Tokio's blocking pool, so Python's asyncio event loop
/// stays responsive while a large stylesheet is ordered.
///
/// # Example (Python)
/// ```python
/// ordered = await sort_conditions_async(["(min-width: 900px)", "(max-width: 400px)"])
/// ```
#[pyfunction]
fn sort_conditions_async<'py>(
    py: Python<'py>,
    conditions: Vec<String>,
) -> PyResult<Bound<'py, PyAny>> {
    pyo3_async_runtimes::tokio::future_into_py(py, async move {
        let sorted = tokio::task::spawn_blocking(move || {
            let mut conditions = conditions;
            sort_raw(&mut conditions);
            conditions
        })
        .await
        .map_err(|e| PyRuntimeError::new_err(format!("Sort task panicked: {}", e)))?;

        Ok(sorted)
    })
}

// ============================================================================
// Python Module Definition
// ============================================================================

/// Python module definition
#[pymodule]
fn media_query_condition(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(compare, m)?)?;
    m.add_function(wrap_pyfunction!(sort_conditions, m)?)?;
    m.add_function(wrap_pyfunction!(sort_conditions_async, m)?)?;
    m.add_class::<PyCondition>()?;
    Ok(())
}
