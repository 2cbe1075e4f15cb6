use giftwrap::{HullError, Point, TurnRule};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub fn points_from_py(raw: Vec<(i32, i32)>) -> Vec<Point> {
    raw.into_iter().map(Point::from).collect()
}

pub fn points_to_py(points: Vec<Point>) -> Vec<(i32, i32)> {
    points.into_iter().map(<(i32, i32)>::from).collect()
}

pub fn turn_from_str(turn: &str) -> PyResult<TurnRule> {
    match turn {
        "exact" => Ok(TurnRule::Exact),
        "rotate" => Ok(TurnRule::Rotate),
        other => Err(PyValueError::new_err(format!(
            "unknown turn rule {other:?} (want \"exact\" or \"rotate\")"
        ))),
    }
}

pub fn map_hull_err(err: HullError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
