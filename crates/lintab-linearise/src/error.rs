//! Errors reported by the lineariser.
use thiserror::Error;

/// An error occurred while linearising a function.
///
/// Panel coordinates are reported as `f64` regardless of the scalar type being linearised.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LinearisationError {
    /// The initial grid has fewer than two points.
    #[error("Could not linearise: the initial grid needs at least 2 points, got {0}")]
    TooFewPoints(usize),
    /// The initial grid is not strictly increasing at the given index.
    #[error("Could not linearise: the initial grid is not strictly increasing at index {index}")]
    InvalidGrid {
        /// Index of the first offending grid point.
        index: usize,
    },
    /// The convergence tolerance is not a strictly positive finite number.
    #[error("Invalid convergence tolerance {0}: expected a strictly positive value")]
    InvalidTolerance(f64),
    /// The split strategy returned a point that does not lie strictly inside the panel.
    #[error("Could not split panel [{x_left}, {x_right}]: split point {x_mid} is not strictly inside it")]
    InvalidSplit {
        /// Left end of the panel.
        x_left: f64,
        /// Right end of the panel.
        x_right: f64,
        /// Point returned by the split strategy.
        x_mid: f64,
    },
    /// A panel still had not converged after the maximum number of bisections.
    #[error("Linearisation did not converge on panel [{x_left}, {x_right}] after {max_depth} subdivisions")]
    MaxDepthExceeded {
        /// The configured depth limit.
        max_depth: usize,
        /// Left end of the offending panel.
        x_left: f64,
        /// Right end of the offending panel.
        x_right: f64,
    },
    /// The linearised grid would exceed the configured number of points.
    #[error("Linearisation exceeded its budget of {0} points")]
    PointBudgetExceeded(usize),
    /// The function has no bounded domain from which an initial grid can be taken.
    #[error("Could not linearise: the function is defined over an unbounded domain")]
    UnboundedDomain,
}
