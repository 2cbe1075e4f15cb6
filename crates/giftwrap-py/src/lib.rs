//! PyO3 bindings for `giftwrap`.
//!
//! Notes
//! - Points cross the boundary as `(x, y)` tuples of Python ints.
//! - Errors surface as `ValueError` with the Rust error message.

use pyo3::prelude::*;

mod common;
mod hull;

#[pymodule]
fn giftwrap_native(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add("__version__", giftwrap::VERSION)?;
    hull::register(m)?;
    Ok(())
}
