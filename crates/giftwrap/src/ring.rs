//! Helpers over hull results (closed rings, open segments, single points).
//!
//! All predicates are exact (`i128` via `crate::orient`). Containment is
//! boundary-inclusive and accepts either orientation.

use crate::orient;
use crate::point::Point;

/// True when the sequence repeats its first point at the end (3+ vertices).
#[inline]
pub fn is_closed(ring: &[Point]) -> bool {
    ring.len() > 3 && ring.first() == ring.last()
}

/// Distinct vertices: the ring without its closing repeat.
#[inline]
pub fn vertices(ring: &[Point]) -> &[Point] {
    if is_closed(ring) {
        &ring[..ring.len() - 1]
    } else {
        ring
    }
}

/// Twice the signed (shoelace) area; positive for counterclockwise rings.
///
/// Zero for points, segments and collinear rings.
pub fn twice_signed_area(ring: &[Point]) -> i128 {
    let vs = vertices(ring);
    if vs.len() < 3 {
        return 0;
    }
    let anchor = vs[0];
    vs.windows(2)
        .skip(1)
        .map(|w| orient(anchor, w[0], w[1]))
        .sum()
}

/// Whether `p` lies inside or on the boundary of `ring`.
pub fn contains(ring: &[Point], p: Point) -> bool {
    let vs = vertices(ring);
    match vs.len() {
        0 => false,
        1 => vs[0] == p,
        2 => on_segment(vs[0], vs[1], p),
        m => {
            let sign = twice_signed_area(vs).signum();
            if sign == 0 {
                return (0..m).any(|k| on_segment(vs[k], vs[(k + 1) % m], p));
            }
            (0..m).all(|k| orient(vs[k], vs[(k + 1) % m], p) * sign >= 0)
        }
    }
}

fn on_segment(a: Point, b: Point, p: Point) -> bool {
    orient(a, b, p) == 0
        && a.x.min(b.x) <= p.x
        && p.x <= a.x.max(b.x)
        && a.y.min(b.y) <= p.y
        && p.y <= a.y.max(b.y)
}
