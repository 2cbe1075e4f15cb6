//! Gift-wrapping (Jarvis march) over integer points.
//!
//! Walk
//! - Start at the minimum-x point (ties: minimum y); it is always extremal.
//! - From the last vertex `origin`, scan every input point keeping the most
//!   clockwise candidate `current`. Collinear candidates only win when strictly
//!   farther from `origin`, so points lying on an edge are skipped.
//! - Stop when the candidate is the start again, or after `n` steps, whichever
//!   comes first. A candidate that is already a hull vertex also ends the walk,
//!   so the output never repeats a vertex even if the turn predicate misbehaves
//!   on near-collinear input (see `TurnRule::Rotate`).
//!
//! Every point ends up left of (or on) each edge, so the ring is counterclockwise.
//! Cost: O(n) per vertex, O(n·h) total.

use super::{HullAlgorithm, HullError, TurnRule, WrapCfg};
use crate::orient;
use crate::point::Point;

/// Side of a candidate relative to the ray `origin → current`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Turn {
    /// Clockwise of the ray: the candidate wins.
    Right,
    /// On the ray's line.
    Collinear,
    /// Counterclockwise of the ray: the candidate loses.
    Left,
    /// `origin == current`, there is no ray yet.
    Undetermined,
}

/// Gift-wrapping hull algorithm.
#[derive(Clone, Copy, Debug, Default)]
pub struct GiftWrap {
    pub cfg: WrapCfg,
}

impl GiftWrap {
    #[inline]
    pub fn new(cfg: WrapCfg) -> Self {
        Self { cfg }
    }

    #[inline]
    pub fn with_turn(turn: TurnRule) -> Self {
        Self::new(WrapCfg { turn })
    }

    /// Most clockwise point seen from `origin`; the farthest one among ties.
    fn next_vertex(&self, points: &[Point], origin: Point) -> Point {
        let mut current = origin;
        for &next in points {
            let take = match self.turn(origin, current, next) {
                Turn::Right => true,
                Turn::Left => false,
                Turn::Collinear | Turn::Undetermined => self.farther(origin, current, next),
            };
            if take {
                current = next;
            }
        }
        current
    }

    fn turn(&self, origin: Point, current: Point, next: Point) -> Turn {
        if origin == current {
            return Turn::Undetermined;
        }
        match self.cfg.turn {
            TurnRule::Exact => turn_exact(origin, current, next),
            TurnRule::Rotate => turn_rotate(origin, current, next),
        }
    }

    fn farther(&self, origin: Point, current: Point, next: Point) -> bool {
        match self.cfg.turn {
            TurnRule::Exact => origin.distance_sq_to(next) > origin.distance_sq_to(current),
            TurnRule::Rotate => origin.distance_to(next) > origin.distance_to(current),
        }
    }
}

impl HullAlgorithm for GiftWrap {
    fn compute(&self, points: &[Point]) -> Result<Vec<Point>, HullError> {
        debug_assert!(points.len() > 1, "gift wrapping needs at least 2 points");
        let (start, n) = start_vertex(points);
        let start = match start {
            Some(p) if n > 1 => p,
            _ => return Err(HullError::InsufficientPoints { actual: n }),
        };

        let mut hull = Vec::with_capacity(n + 1);
        hull.push(start);
        let mut origin = start;
        let mut steps = 0usize;
        while steps < n {
            steps += 1;
            let next = self.next_vertex(points, origin);
            if next == start || hull.contains(&next) {
                break;
            }
            hull.push(next);
            origin = next;
        }

        if hull.len() > 2 {
            hull.push(start);
        }
        hull.shrink_to_fit();
        Ok(hull)
    }
}

/// Minimum x, ties by minimum y, together with the point count (one pass).
fn start_vertex(points: &[Point]) -> (Option<Point>, usize) {
    let mut best: Option<Point> = None;
    let mut n = 0usize;
    for &p in points {
        n += 1;
        best = match best {
            Some(b) if b.x < p.x || (b.x == p.x && b.y <= p.y) => Some(b),
            _ => Some(p),
        };
    }
    (best, n)
}

#[inline]
fn turn_exact(origin: Point, current: Point, next: Point) -> Turn {
    let cross = orient(origin, current, next);
    if cross < 0 {
        Turn::Right
    } else if cross == 0 {
        Turn::Collinear
    } else {
        Turn::Left
    }
}

/// Rotate the frame so `origin → current` points along +x, then read the
/// angle of `next` in that frame.
fn turn_rotate(origin: Point, current: Point, next: Point) -> Turn {
    let angle = origin.angle_from(current);
    let cur = current.offset_from(origin).rotate(Point::ORIGIN, -angle);
    let nxt = next.offset_from(origin).rotate(Point::ORIGIN, -angle);
    debug_assert!(
        cur.y == 0 && cur.x >= 0,
        "edge did not rotate onto the +x axis: {cur}"
    );
    let dir = Point::ORIGIN.angle_from(nxt);
    if dir < 0.0 {
        Turn::Right
    } else if dir == 0.0 {
        Turn::Collinear
    } else {
        Turn::Left
    }
}
