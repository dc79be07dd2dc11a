//! This module provides the interpolation laws used between two tabulated points.
//!
//! Each law exists as a free function, as a zero-sized strategy type implementing
//! [`Interpolate`], and as a variant of [`InterpolationType`] which dispatches to the strategy
//! types.
//!
//! # Usage
//!
//! The logarithmic laws take the logarithm of `x` and/or `y` and therefore expect strictly
//! positive values; tables reject non-positive data for those laws at construction, while the
//! free functions return whatever IEEE arithmetic produces.
use az::CastFrom;
use num_traits::Float;
use numeric_literals::replace_float_literals;

/// A trait that defines how a value is interpolated between two points.
///
/// # Type Parameters
///
/// * `T` - The scalar type of the points.
pub trait Interpolate<T> {
    /// Interpolates a value at `x` between `(x_left, y_left)` and `(x_right, y_right)`.
    ///
    /// # Arguments
    ///
    /// * `x` - The point at which to interpolate, normally within `[x_left, x_right]`.
    /// * `x_left`, `x_right` - The abscissae of the panel ends.
    /// * `y_left`, `y_right` - The values at the panel ends.
    ///
    /// # Returns
    ///
    /// The interpolated value at `x`.
    fn interpolate(&self, x: T, x_left: T, x_right: T, y_left: T, y_right: T) -> T;
}

/// Histogram interpolation: the value is constant and equal to the left value over the panel.
///
/// # Examples
/// ```
/// use lintab_math::interpolation::{Histogram, Interpolate};
///
/// assert_eq!(1.0, Histogram.interpolate(1.5, 1.0, 2.0, 1.0, 4.0));
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct Histogram;

impl<T: Float> Interpolate<T> for Histogram {
    fn interpolate(&self, x: T, x_left: T, x_right: T, y_left: T, y_right: T) -> T {
        histogram(x, x_left, x_right, y_left, y_right)
    }
}

/// Linear interpolation in `x` and `y`.
///
/// # Examples
/// ```
/// use lintab_math::interpolation::{Interpolate, LinearLinear};
///
/// assert_eq!(2.5, LinearLinear.interpolate(1.5, 1.0, 2.0, 1.0, 4.0));
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct LinearLinear;

impl<T: Float> Interpolate<T> for LinearLinear {
    fn interpolate(&self, x: T, x_left: T, x_right: T, y_left: T, y_right: T) -> T {
        linlin(x, x_left, x_right, y_left, y_right)
    }
}

/// `y` is linear in `ln(x)`.
#[derive(Debug, Default, Copy, Clone)]
pub struct LinearLogarithmic;

impl<T: Float> Interpolate<T> for LinearLogarithmic {
    fn interpolate(&self, x: T, x_left: T, x_right: T, y_left: T, y_right: T) -> T {
        linlog(x, x_left, x_right, y_left, y_right)
    }
}

/// `ln(y)` is linear in `x`.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogarithmicLinear;

impl<T: Float> Interpolate<T> for LogarithmicLinear {
    fn interpolate(&self, x: T, x_left: T, x_right: T, y_left: T, y_right: T) -> T {
        loglin(x, x_left, x_right, y_left, y_right)
    }
}

/// `ln(y)` is linear in `ln(x)`, i.e. a power law over the panel.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogarithmicLogarithmic;

impl<T: Float> Interpolate<T> for LogarithmicLogarithmic {
    fn interpolate(&self, x: T, x_left: T, x_right: T, y_left: T, y_right: T) -> T {
        loglog(x, x_left, x_right, y_left, y_right)
    }
}

/// The interpolation law of a region of a tabulated function.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationType {
    /// See [`Histogram`].
    Histogram,
    /// See [`LinearLinear`].
    #[default]
    LinearLinear,
    /// See [`LinearLogarithmic`].
    LinearLogarithmic,
    /// See [`LogarithmicLinear`].
    LogarithmicLinear,
    /// See [`LogarithmicLogarithmic`].
    LogarithmicLogarithmic,
}

impl InterpolationType {
    /// Returns `true` when the law takes the logarithm of `x`.
    pub const fn is_logarithmic_x(self) -> bool {
        matches!(self, Self::LinearLogarithmic | Self::LogarithmicLogarithmic)
    }

    /// Returns `true` when the law takes the logarithm of `y`.
    pub const fn is_logarithmic_y(self) -> bool {
        matches!(self, Self::LogarithmicLinear | Self::LogarithmicLogarithmic)
    }
}

impl<T: Float> Interpolate<T> for InterpolationType {
    fn interpolate(&self, x: T, x_left: T, x_right: T, y_left: T, y_right: T) -> T {
        match self {
            Self::Histogram => Histogram.interpolate(x, x_left, x_right, y_left, y_right),
            Self::LinearLinear => LinearLinear.interpolate(x, x_left, x_right, y_left, y_right),
            Self::LinearLogarithmic => LinearLogarithmic.interpolate(x, x_left, x_right, y_left, y_right),
            Self::LogarithmicLinear => LogarithmicLinear.interpolate(x, x_left, x_right, y_left, y_right),
            Self::LogarithmicLogarithmic => LogarithmicLogarithmic.interpolate(x, x_left, x_right, y_left, y_right),
        }
    }
}

/// Histogram law: returns `y_left`.
pub fn histogram<T>(_x: T, _x_left: T, _x_right: T, y_left: T, _y_right: T) -> T {
    y_left
}

/// Linear-linear law.
pub fn linlin<T: Float>(x: T, x_left: T, x_right: T, y_left: T, y_right: T) -> T {
    y_left + (x - x_left) / (x_right - x_left) * (y_right - y_left)
}

/// Linear-logarithmic law, `y` linear in `ln(x)`. Requires positive `x` values.
///
/// ```
/// use lintab_math::interpolation::linlog;
///
/// approx::assert_relative_eq!(2.75488750216347, linlog(1.5, 1.0, 2.0, 1.0, 4.0), max_relative = 1e-12);
/// ```
pub fn linlog<T: Float>(x: T, x_left: T, x_right: T, y_left: T, y_right: T) -> T {
    y_left + (y_right - y_left) * (x / x_left).ln() / (x_right / x_left).ln()
}

/// Logarithmic-linear law, `ln(y)` linear in `x`. Requires positive `y` values.
pub fn loglin<T: Float>(x: T, x_left: T, x_right: T, y_left: T, y_right: T) -> T {
    y_left * ((x - x_left) / (x_right - x_left) * (y_right / y_left).ln()).exp()
}

/// Logarithmic-logarithmic law, a power law through both points. Requires positive values.
pub fn loglog<T: Float>(x: T, x_left: T, x_right: T, y_left: T, y_right: T) -> T {
    y_left * (x / x_left).powf((y_right / y_left).ln() / (x_right / x_left).ln())
}

/// Value just below `x`, one relative machine epsilon away, used to represent a jump of a
/// histogram in a piecewise-linear tabulation.
#[replace_float_literals(T::cast_from(literal))]
pub(crate) fn shade_down<T: Float + CastFrom<f64>>(x: T) -> T {
    if x == 0.0 {
        -T::min_positive_value()
    } else {
        x - x.abs() * T::epsilon()
    }
}
