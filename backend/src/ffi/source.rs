//! PyO3 wrapper for BitSource
//!
//! Lets a Python-driven test harness pull words from the generator.

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::config::GeneratorConfig;
use crate::error::GeneratorError;
use crate::output::source::BitSource as RustBitSource;
use crate::output::{reverse32, Projection};
use crate::rng::{diffuse, undiffuse, Generator, Seed};

fn to_py_err(err: GeneratorError) -> PyErr {
    match err {
        GeneratorError::UnknownProjection(_) | GeneratorError::InvalidConfig(_) => {
            PyValueError::new_err(err.to_string())
        }
        other => PyRuntimeError::new_err(other.to_string()),
    }
}

/// Python wrapper for the Rust BitSource
///
/// # Example (from Python)
///
/// ```python
/// from weylmix_core_rs import BitSource
///
/// source = BitSource("high-reversed")
/// words = [source() for _ in range(4)]
/// ```
#[pyclass(name = "BitSource")]
pub struct PyBitSource {
    inner: RustBitSource,
}

#[pymethods]
impl PyBitSource {
    /// Create a source
    ///
    /// # Errors
    ///
    /// Raises ValueError if `projection` is not one of `high`,
    /// `high-reversed`, `low`, `low-reversed`.
    #[new]
    #[pyo3(signature = (projection = "low", state = 0, weyl = 0))]
    fn new(projection: &str, state: u64, weyl: u64) -> PyResult<Self> {
        let projection: Projection = projection.parse().map_err(to_py_err)?;
        let generator = Generator::with_seed(Seed::new(state, weyl));

        Ok(PyBitSource {
            inner: RustBitSource::from_parts(generator, projection),
        })
    }

    /// Create a source from a JSON configuration string
    #[staticmethod]
    fn from_json(config: &str) -> PyResult<Self> {
        let config = GeneratorConfig::from_json(config).map_err(to_py_err)?;
        Ok(PyBitSource {
            inner: RustBitSource::from_config(&config),
        })
    }

    /// Next projected 32-bit word
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    /// Next raw 64-bit word (not projected)
    fn gen64(&mut self) -> u64 {
        self.inner.generator_mut().gen64()
    }

    fn __call__(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn __iter__(slf: PyRef<'_, Self>) -> PyRef<'_, Self> {
        slf
    }

    fn __next__(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[getter]
    fn state(&self) -> u64 {
        self.inner.generator().state()
    }

    #[getter]
    fn weyl(&self) -> u64 {
        self.inner.generator().weyl()
    }

    #[getter]
    fn projection(&self) -> String {
        self.inner.projection().to_string()
    }

    fn __repr__(&self) -> String {
        format!(
            "BitSource(projection='{}', state={}, weyl={})",
            self.inner.projection(),
            self.inner.generator().state(),
            self.inner.generator().weyl()
        )
    }
}

#[pyfunction]
#[pyo3(name = "diffuse")]
pub fn py_diffuse(x: u64) -> u64 {
    diffuse(x)
}

#[pyfunction]
#[pyo3(name = "undiffuse")]
pub fn py_undiffuse(x: u64) -> u64 {
    undiffuse(x)
}

#[pyfunction]
#[pyo3(name = "reverse32")]
pub fn py_reverse32(v: u32) -> u32 {
    reverse32(v)
}
