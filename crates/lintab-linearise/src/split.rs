//! Strategies choosing where a panel gets split.
use az::CastFrom;
use num_traits::Float;
use numeric_literals::replace_float_literals;

/// Chooses the point at which the panel `[x_left, x_right]` is probed and, if needed, split.
///
/// Implementations must return a point strictly inside the panel; the lineariser rejects
/// anything else. Any closure taking `(x_left, x_right)` is a split strategy.
pub trait SplitStrategy<T> {
    /// Returns the split point of the panel `[x_left, x_right]`.
    fn split(&self, x_left: T, x_right: T) -> T;
}

impl<T, F: Fn(T, T) -> T> SplitStrategy<T> for F {
    fn split(&self, x_left: T, x_right: T) -> T {
        self(x_left, x_right)
    }
}

/// Splits panels at their arithmetic midpoint.
///
/// # Example
///
/// ```
/// use lintab_linearise::{MidpointSplit, SplitStrategy};
///
/// assert_eq!(5.0, MidpointSplit.split(0.0, 10.0));
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct MidpointSplit;

impl<T: Float + CastFrom<f64>> SplitStrategy<T> for MidpointSplit {
    #[replace_float_literals(T::cast_from(literal))]
    fn split(&self, x_left: T, x_right: T) -> T {
        0.5 * (x_left + x_right)
    }
}

/// Splits panels at their geometric midpoint, which suits functions that are smooth in
/// `ln(x)`. Panels that do not lie entirely on the positive axis fall back to the arithmetic
/// midpoint.
///
/// # Example
///
/// ```
/// use lintab_linearise::{LogarithmicSplit, SplitStrategy};
///
/// assert_eq!(10.0, LogarithmicSplit.split(1.0, 100.0));
/// assert_eq!(0.0, LogarithmicSplit.split(-1.0, 1.0));
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct LogarithmicSplit;

impl<T: Float + CastFrom<f64>> SplitStrategy<T> for LogarithmicSplit {
    #[replace_float_literals(T::cast_from(literal))]
    fn split(&self, x_left: T, x_right: T) -> T {
        if x_left > 0.0 && x_right > 0.0 {
            // sqrt(a * b) can overflow where the product of the square roots does not
            x_left.sqrt() * x_right.sqrt()
        } else {
            MidpointSplit.split(x_left, x_right)
        }
    }
}
