//! Capability seam and entry points.

use super::{GiftWrap, HullError};
use crate::point::Point;

/// A convex hull algorithm.
///
/// Pre: `points.len() >= 2` (the facade handles smaller inputs).
/// Post: boundary in a consistent rotational direction, built only from input
/// points, closed by repeating its first vertex when it has 3+ vertices.
pub trait HullAlgorithm {
    fn compute(&self, points: &[Point]) -> Result<Vec<Point>, HullError>;
}

/// Hull of `points` through `algorithm`, short-circuiting the trivial cases.
///
/// - `None` → `HullError::MissingInput`
/// - `[]` → `[]`
/// - `[p]` → `[p]`
pub fn calculate<A: HullAlgorithm + ?Sized>(
    algorithm: &A,
    points: Option<&[Point]>,
) -> Result<Vec<Point>, HullError> {
    let points = points.ok_or(HullError::MissingInput)?;
    match points {
        [] => Ok(Vec::new()),
        [p] => Ok(vec![*p]),
        _ => algorithm.compute(points),
    }
}

/// Hull of `points` with the default `GiftWrap`.
pub fn convex_hull(points: &[Point]) -> Result<Vec<Point>, HullError> {
    calculate(&GiftWrap::default(), Some(points))
}
