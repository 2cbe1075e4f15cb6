//! Integer 2D points and the primitives the hull walk is built from.
//!
//! - `Point`: immutable `(x, y)` over `i32`, structural equality.
//! - Ordering: component-wise product order via `PartialOrd` (no `Ord`).
//!   Use `Point::lex_cmp` where a total order is needed.
//! - Angles are in degrees; `a.angle_from(b)` is the direction of the ray `a → b`.
//!
//! Code cross-refs: `hull::wrap` (turn rules), `crate::orient`

use nalgebra::{Matrix2, Rotation2, Vector2};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Immutable 2D integer point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance `sqrt(Δx² + Δy²)`.
    ///
    /// Each Δ is taken as `max - min` so it is non-negative; widened to `i64`
    /// before subtracting, so any pair of `i32` points is fine.
    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = (self.x.max(other.x) as i64 - self.x.min(other.x) as i64) as f64;
        let dy = (self.y.max(other.y) as i64 - self.y.min(other.y) as i64) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// Exact squared distance.
    #[inline]
    pub fn distance_sq_to(&self, other: Point) -> i128 {
        let dx = self.x as i128 - other.x as i128;
        let dy = self.y as i128 - other.y as i128;
        dx * dx + dy * dy
    }

    /// Direction in degrees of the ray from `self` towards `origin`, in (-180, 180].
    ///
    /// Returns 0 when the points coincide. Note the operand order:
    /// `atan2(origin.y - self.y, origin.x - self.x)`.
    pub fn angle_from(&self, origin: Point) -> f64 {
        if *self == origin {
            return 0.0;
        }
        let dy = origin.y as f64 - self.y as f64;
        let dx = origin.x as f64 - self.x as f64;
        dy.atan2(dx).to_degrees()
    }

    /// Translate so that `origin` becomes `(0, 0)`.
    ///
    /// Plain `i32` subtraction: overflows (panics in debug builds) when the
    /// difference leaves the `i32` range.
    #[inline]
    pub fn offset_from(&self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }

    /// Rotate about `origin` by `degrees` (counterclockwise for positive angles).
    ///
    /// The result is truncated toward zero, not rounded; rotated points are
    /// only meant for sign tests. Quarter turns use exact `sin`/`cos`, and a
    /// coordinate within rounding noise of an integer is snapped to it before
    /// truncating. Coordinates outside the `i32` range saturate.
    pub fn rotate(&self, origin: Point, degrees: f64) -> Point {
        let (sin, cos) = sin_cos_deg(degrees);
        let rot = Rotation2::from_matrix_unchecked(Matrix2::new(cos, -sin, sin, cos));
        let o = Vector2::from(origin);
        let v = rot * (Vector2::from(*self) - o) + o;
        Point::new(truncate(v.x), truncate(v.y))
    }

    /// Total lexicographic order: by `x`, then by `y`.
    #[inline]
    pub fn lex_cmp(&self, other: &Point) -> Ordering {
        self.x.cmp(&other.x).then(self.y.cmp(&other.y))
    }
}

/// `(sin, cos)` of an angle in degrees; exact `0`/`±1` at multiples of 90°.
fn sin_cos_deg(degrees: f64) -> (f64, f64) {
    const QUARTER_EPS: f64 = 4.0 * f64::EPSILON;
    let (sin, cos) = degrees.to_radians().sin_cos();
    if sin.abs() < QUARTER_EPS {
        (0.0, cos.signum())
    } else if cos.abs() < QUARTER_EPS {
        (sin.signum(), 0.0)
    } else {
        (sin, cos)
    }
}

/// Truncate toward zero, snapping values a few ulps off an integer first.
fn truncate(v: f64) -> i32 {
    let nearest = v.round();
    let tol = (8.0 * f64::EPSILON * v.abs()).max(1e-9);
    if (v - nearest).abs() <= tol {
        nearest as i32
    } else {
        v.trunc() as i32
    }
}

/// Product order: `p < q` iff `p != q` and `p.x <= q.x` and `p.y <= q.y`.
///
/// Points where one axis grows and the other shrinks are incomparable
/// (`partial_cmp` is `None`), so neither `<`, `>`, `<=` nor `>=` holds.
impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        use Ordering::{Equal, Greater, Less};
        match (self.x.cmp(&other.x), self.y.cmp(&other.y)) {
            (Equal, Equal) => Some(Equal),
            (Less | Equal, Less | Equal) => Some(Less),
            (Greater | Equal, Greater | Equal) => Some(Greater),
            _ => None,
        }
    }
}

impl From<(i32, i32)> for Point {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for (i32, i32) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        Vector2::new(p.x as f64, p.y as f64)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
