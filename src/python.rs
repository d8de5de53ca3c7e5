use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::config::SortOptions;
use crate::core::{PlaceResult, RequestContext};
use crate::ranking::{classify, TiePolicy};
use crate::sorter::ResultSorter as RustResultSorter;

fn to_py_err(e: impl std::fmt::Display) -> PyErr {
    PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
}

fn request_context(focus_lat: Option<f64>, focus_lon: Option<f64>) -> RequestContext {
    match (focus_lat, focus_lon) {
        (Some(lat), Some(lon)) => RequestContext::with_focus(lat, lon),
        _ => RequestContext::new(),
    }
}

/// Python wrapper for ResultSorter
#[pyclass]
struct ResultSorter {
    sorter: RustResultSorter,
}

#[pymethods]
impl ResultSorter {
    /// Create new ResultSorter
    #[new]
    fn new(tie_policy: Option<String>, limit: Option<usize>) -> PyResult<Self> {
        let mut options = SortOptions::default();
        if let Some(policy) = tie_policy {
            options.tie_policy = policy.parse::<TiePolicy>().map_err(to_py_err)?;
        }
        options.limit = limit;

        Ok(Self {
            sorter: RustResultSorter::new(options),
        })
    }

    /// Sort a JSON array of results, returning the sorted JSON array
    fn sort(&self, results_json: &str, focus_lat: Option<f64>, focus_lon: Option<f64>) -> PyResult<String> {
        let ctx = request_context(focus_lat, focus_lon);
        self.sorter.sort_json(results_json, &ctx).map_err(to_py_err)
    }
}

/// Sort a JSON array of results with default options
#[pyfunction]
fn sort_results(results_json: &str, focus_lat: Option<f64>, focus_lon: Option<f64>) -> PyResult<String> {
    let ctx = request_context(focus_lat, focus_lon);
    RustResultSorter::default()
        .sort_json(results_json, &ctx)
        .map_err(to_py_err)
}

/// Band of a single JSON result as a dict
#[pyfunction]
fn band_of(py: Python, result_json: &str) -> PyResult<PyObject> {
    let result = PlaceResult::from_json(result_json).map_err(to_py_err)?;
    let band = classify(&result);

    let dict = PyDict::new(py);
    dict.set_item("name", band.name)?;
    dict.set_item("strategy", format!("{:?}", band.strategy))?;
    dict.set_item("layer", result.layer.as_str())?;
    Ok(dict.into())
}

/// Python module
#[pymodule]
fn geocode_ranking(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<ResultSorter>()?;
    m.add_function(wrap_pyfunction!(sort_results, m)?)?;
    m.add_function(wrap_pyfunction!(band_of, m)?)?;
    m.add("__version__", crate::VERSION)?;
    Ok(())
}
