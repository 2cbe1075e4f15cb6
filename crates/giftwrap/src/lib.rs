//! Integer convex hulls by gift-wrapping (Jarvis march).
//!
//! Layout
//! - `point`: the `Point` value type and its geometric primitives.
//! - `hull`: the `HullAlgorithm` seam, the `calculate` facade and the
//!   `GiftWrap` implementation.
//! - `ring`: helpers over hull results (closing repeat, area, containment).
//! - `sample`: reproducible integer point clouds for tests, benches and the CLI.
//!
//! Conventions
//! - Coordinates are `i32`; exact predicates widen to `i128` and never overflow.
//! - Hulls are counter-clockwise (y up) and closed by repeating the start
//!   vertex, except for two-vertex segments and single points.

pub mod hull;
pub mod point;
pub mod ring;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use hull::{calculate, convex_hull, GiftWrap, HullAlgorithm, HullError, TurnRule, WrapCfg};
pub use point::Point;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::{
        calculate, convex_hull, GiftWrap, HullAlgorithm, HullError, TurnRule, WrapCfg,
    };
    pub use crate::point::Point;
    pub use crate::sample::{draw_points, CloudCfg, CloudShape, ReplayToken};
    pub use crate::ring;
    pub use crate::{orient, parallelogram_area};
}

/// Signed area of the parallelogram spanned by the position vectors `a` and `b`.
/// Positive for a→b counterclockwise, negative otherwise. Exact.
#[inline]
pub fn parallelogram_area(a: Point, b: Point) -> i128 {
    orient(Point::ORIGIN, a, b)
}

/// Cross product `(a - o) × (b - o)` in exact integer arithmetic.
///
/// Positive when `o → a → b` turns counterclockwise (b left of the ray o→a),
/// negative when it turns clockwise, zero when the three points are collinear.
#[inline]
pub fn orient(o: Point, a: Point, b: Point) -> i128 {
    let (ax, ay) = (a.x as i128 - o.x as i128, a.y as i128 - o.y as i128);
    let (bx, by) = (b.x as i128 - o.x as i128, b.y as i128 - o.y as i128);
    ax * by - ay * bx
}
