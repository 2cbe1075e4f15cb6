//! Errors and configuration for the hull walk.
//!
//! - `HullError`: missing input and the algorithm's precondition.
//! - `TurnRule`/`WrapCfg`: which turn predicate the walk uses.

use std::fmt;

/// Errors surfaced by the hull facade and algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HullError {
    /// No point collection was supplied at all.
    MissingInput,
    /// An algorithm was called directly with fewer than two points.
    InsufficientPoints { actual: usize },
}

impl fmt::Display for HullError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HullError::MissingInput => write!(f, "point collection is missing"),
            HullError::InsufficientPoints { actual } => write!(
                f,
                "hull algorithm needs at least 2 points, got {actual}"
            ),
        }
    }
}

impl std::error::Error for HullError {}

/// Turn predicate used to pick the next hull vertex.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TurnRule {
    /// Sign of the `i128` cross product; exact for every `i32` input.
    #[default]
    Exact,
    /// Rotate the candidate into the frame of the current edge and read the
    /// sign of its angle. Coordinates are truncated after rotation, so points
    /// within one unit of the edge line count as collinear, and the hull may
    /// miss such points. Offsets use plain `i32` arithmetic.
    Rotate,
}

/// Gift-wrapping configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WrapCfg {
    pub turn: TurnRule,
}
