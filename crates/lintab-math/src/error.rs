//! Errors reported by the functions of this crate.
use lintab_linearise::LinearisationError;
use thiserror::Error;

/// An error occurred while creating a domain.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    /// The lower bound is above the upper bound, or one of them is NaN.
    #[error("Invalid domain bounds: lower bound {lower} is not below upper bound {upper}")]
    InvalidBounds {
        /// Requested lower bound.
        lower: f64,
        /// Requested upper bound.
        upper: f64,
    },
}

/// An error occurred while creating a tabulated function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TableError {
    /// The table has fewer than two points.
    #[error("Could not create table: at least 2 points are needed, got {0}")]
    TooFewPoints(usize),
    /// The x and y values have different lengths.
    #[error("Could not create table: {x} x values for {y} y values")]
    LengthMismatch {
        /// Number of x values.
        x: usize,
        /// Number of y values.
        y: usize,
    },
    /// The x values decrease at the given index.
    #[error("Could not create table: x values are not sorted at index {index}")]
    UnsortedGrid {
        /// Index of the first offending point.
        index: usize,
    },
    /// The x value at the given index repeats the previous one.
    #[error("Could not create table: duplicate x value at index {index}")]
    DuplicatePoint {
        /// Index of the repeated point.
        index: usize,
    },
    /// No interpolation region was given.
    #[error("Could not create table: no interpolation regions were given")]
    EmptyRegions,
    /// Boundaries and interpolation types do not have the same length.
    #[error("Could not create table: {boundaries} region boundaries for {interpolants} interpolation types")]
    RegionCountMismatch {
        /// Number of region boundaries.
        boundaries: usize,
        /// Number of interpolation types.
        interpolants: usize,
    },
    /// The region boundaries decrease at the given index.
    #[error("Could not create table: region boundaries are not sorted at index {index}")]
    UnsortedBoundaries {
        /// Index of the first offending boundary.
        index: usize,
    },
    /// The last region does not end on the last point of the table.
    #[error("Could not create table: the last region ends at point {last}, expected {expected}")]
    IncompleteBoundaries {
        /// Index of the last boundary.
        last: usize,
        /// Index of the last point of the table.
        expected: usize,
    },
    /// A logarithmic-x law is applied to a point with `x <= 0`.
    #[error("Could not create table: logarithmic interpolation over x requires x > 0 (point {index})")]
    NonPositiveX {
        /// Index of the offending point.
        index: usize,
    },
    /// A logarithmic-y law is applied to a point with `y <= 0`.
    #[error("Could not create table: logarithmic interpolation over y requires y > 0 (point {index})")]
    NonPositiveY {
        /// Index of the offending point.
        index: usize,
    },
}

/// An error occurred while creating a series.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SeriesError {
    /// A series needs at least one coefficient.
    #[error("Could not create series: the coefficient vector is empty")]
    EmptyCoefficients,
    /// The domain of an approximation must have a non-zero width.
    #[error("Could not create series: invalid domain [{lower}, {upper}]")]
    InvalidDomain {
        /// Requested lower bound.
        lower: f64,
        /// Requested upper bound.
        upper: f64,
    },
}

/// The Newton-Raphson iteration failed.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum NewtonError {
    /// The step did not fall below the tolerance within the iteration budget.
    #[error("Newton-Raphson did not converge after {iterations} iterations (last value {value})")]
    MaxIterationsReached {
        /// Number of iterations performed.
        iterations: usize,
        /// Last iterate.
        value: f64,
    },
    /// The step became infinite or NaN, usually because the derivative vanished.
    #[error("Newton-Raphson produced a non-finite step at iteration {iteration} (value {value})")]
    NonFiniteStep {
        /// Iteration at which the step was computed.
        iteration: usize,
        /// Iterate the step was computed from.
        value: f64,
    },
}

/// Any error reported by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// See [`DomainError`].
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// See [`TableError`].
    #[error(transparent)]
    Table(#[from] TableError),
    /// See [`SeriesError`].
    #[error(transparent)]
    Series(#[from] SeriesError),
    /// See [`NewtonError`].
    #[error(transparent)]
    Newton(#[from] NewtonError),
    /// See [`LinearisationError`].
    #[error(transparent)]
    Linearisation(#[from] LinearisationError),
}

pub(crate) fn to_f64<T: num_traits::ToPrimitive>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}
