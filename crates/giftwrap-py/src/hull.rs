//! Hull bindings (kept separate so `lib.rs` stays tiny).

use crate::common::{map_hull_err, points_from_py, points_to_py, turn_from_str};
use giftwrap::{calculate, GiftWrap, Point};
use pyo3::prelude::*;

/// Convex hull of `points`; `None` raises `ValueError` (missing input).
#[pyfunction]
#[pyo3(signature = (points, turn = "exact"))]
pub fn convex_hull(points: Option<Vec<(i32, i32)>>, turn: &str) -> PyResult<Vec<(i32, i32)>> {
    let wrap = GiftWrap::with_turn(turn_from_str(turn)?);
    let points = points.map(points_from_py);
    let hull = calculate(&wrap, points.as_deref()).map_err(map_hull_err)?;
    Ok(points_to_py(hull))
}

/// Exact signed area of the parallelogram spanned by a and b.
#[pyfunction]
pub fn parallelogram_area(a: (i32, i32), b: (i32, i32)) -> i128 {
    giftwrap::parallelogram_area(Point::from(a), Point::from(b))
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(convex_hull, m)?)?;
    m.add_function(wrap_pyfunction!(parallelogram_area, m)?)?;
    Ok(())
}
