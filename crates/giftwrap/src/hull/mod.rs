//! Convex hulls of integer point sets.
//!
//! Purpose
//! - Expose one capability, `HullAlgorithm::compute`, behind a thin facade
//!   (`calculate`) that owns the trivial cases: absent, empty, single point.
//! - Ship the gift-wrapping walk (`GiftWrap`) as the conforming implementation.
//!
//! Result shape
//! - Counterclockwise boundary starting at the lowest-x (then lowest-y) point.
//! - Closed by repeating the start when there are 3+ vertices; a 2-vertex
//!   segment stays open; coincident inputs collapse to one point.
//!
//! Code cross-refs: `point::Point`, `crate::orient`, `ring`

mod facade;
mod types;
mod wrap;

pub use facade::{calculate, convex_hull, HullAlgorithm};
pub use types::{HullError, TurnRule, WrapCfg};
pub use wrap::GiftWrap;
