//! Convergence criteria deciding whether a panel is linear enough.
use crate::LinearisationError;
use az::CastFrom;
use num_traits::Float;
use numeric_literals::replace_float_literals;

/// Decides whether the linear estimate at the split point of a panel is close enough to the
/// actual function value.
///
/// Any closure taking `(x_left, x_right, x_mid, estimate, actual)` and returning a `bool` is a
/// convergence criterion.
pub trait ConvergenceCriterion<T> {
    /// Returns `true` when the panel `[x_left, x_right]` does not need to be refined further.
    ///
    /// # Arguments
    ///
    /// * `x_left`, `x_right` - The ends of the panel.
    /// * `x_mid` - The split point the function was probed at.
    /// * `estimate` - The linear interpolation between the panel ends at `x_mid`.
    /// * `actual` - The function value at `x_mid`.
    fn is_converged(&self, x_left: T, x_right: T, x_mid: T, estimate: T, actual: T) -> bool;
}

impl<T, F: Fn(T, T, T, T, T) -> bool> ConvergenceCriterion<T> for F {
    fn is_converged(&self, x_left: T, x_right: T, x_mid: T, estimate: T, actual: T) -> bool {
        self(x_left, x_right, x_mid, estimate, actual)
    }
}

/// Relative tolerance criterion.
///
/// A panel converges when `|estimate - actual| <= tolerance * max(|actual|, threshold)`. The
/// threshold keeps the test meaningful where the function crosses zero.
///
/// # Example
///
/// ```
/// use lintab_linearise::{ConvergenceCriterion, ToleranceConvergence};
///
/// let convergence = ToleranceConvergence::new(0.25).unwrap();
/// assert!(convergence.is_converged(0.0, 1.0, 0.5, 1.2, 1.0));
/// assert!(!convergence.is_converged(0.0, 1.0, 0.5, 1.3, 1.0));
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serialize",
    serde(
        try_from = "ToleranceFields<T>",
        bound(deserialize = "T: Float + CastFrom<f64> + serde::Deserialize<'de>")
    )
)]
pub struct ToleranceConvergence<T> {
    tolerance: T,
    threshold: T,
}

impl<T: Float + CastFrom<f64>> ToleranceConvergence<T> {
    /// Relative tolerance used when none is given (0.1 %).
    pub const DEFAULT_TOLERANCE: f64 = 1e-3;
    /// Absolute floor below which function values are considered zero.
    pub const DEFAULT_THRESHOLD: f64 = 1e-10;

    /// Creates a criterion with the given relative tolerance and the default threshold.
    ///
    /// Returns [`LinearisationError::InvalidTolerance`] unless `tolerance` is strictly positive
    /// and finite.
    pub fn new(tolerance: T) -> Result<Self, LinearisationError> {
        if !(tolerance > T::zero() && tolerance.is_finite()) {
            return Err(LinearisationError::InvalidTolerance(
                tolerance.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(Self {
            tolerance,
            threshold: T::cast_from(Self::DEFAULT_THRESHOLD),
        })
    }

    /// Returns this criterion with a different near-zero threshold.
    pub fn with_threshold(mut self, threshold: T) -> Self {
        self.threshold = threshold.abs();
        self
    }

    /// The relative tolerance.
    pub fn tolerance(&self) -> T {
        self.tolerance
    }

    /// The near-zero threshold.
    pub fn threshold(&self) -> T {
        self.threshold
    }
}

/// Deserialized form of [`ToleranceConvergence`], validated through [`ToleranceConvergence::new`].
#[cfg(feature = "serialize")]
#[derive(serde::Deserialize)]
struct ToleranceFields<T> {
    tolerance: T,
    threshold: T,
}

#[cfg(feature = "serialize")]
impl<T: Float + CastFrom<f64>> TryFrom<ToleranceFields<T>> for ToleranceConvergence<T> {
    type Error = LinearisationError;

    fn try_from(fields: ToleranceFields<T>) -> Result<Self, Self::Error> {
        Ok(Self::new(fields.tolerance)?.with_threshold(fields.threshold))
    }
}

impl<T: Float + CastFrom<f64>> Default for ToleranceConvergence<T> {
    fn default() -> Self {
        Self {
            tolerance: T::cast_from(Self::DEFAULT_TOLERANCE),
            threshold: T::cast_from(Self::DEFAULT_THRESHOLD),
        }
    }
}

impl<T: Float> ConvergenceCriterion<T> for ToleranceConvergence<T> {
    fn is_converged(&self, _x_left: T, _x_right: T, _x_mid: T, estimate: T, actual: T) -> bool {
        (estimate - actual).abs() <= self.tolerance * actual.abs().max(self.threshold)
    }
}

/// Absolute tolerance criterion: converges when `|estimate - actual| <= tolerance`.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct AbsoluteConvergence<T>(pub T);

impl<T: Float + CastFrom<f64>> ConvergenceCriterion<T> for AbsoluteConvergence<T> {
    #[replace_float_literals(T::cast_from(literal))]
    fn is_converged(&self, _x_left: T, _x_right: T, _x_mid: T, estimate: T, actual: T) -> bool {
        (estimate - actual).abs() <= self.0.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0)]
    #[case(-0.25)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn test_invalid_tolerance(#[case] tolerance: f64) {
        let result = ToleranceConvergence::new(tolerance);
        assert!(matches!(result, Err(LinearisationError::InvalidTolerance(_))));
    }

    #[test]
    fn test_default_tolerance() {
        let convergence = ToleranceConvergence::<f64>::default();
        assert_eq!(1e-3, convergence.tolerance());
        assert_eq!(1e-10, convergence.threshold());
    }

    #[test]
    fn test_relative_tolerance() {
        let convergence = ToleranceConvergence::new(0.01).unwrap();
        assert!(convergence.is_converged(0.0, 1.0, 0.5, 100.5, 100.0));
        assert!(!convergence.is_converged(0.0, 1.0, 0.5, 101.5, 100.0));
    }

    #[test]
    fn test_threshold_near_zero() {
        let convergence = ToleranceConvergence::new(0.1).unwrap();
        // |actual| is below the threshold, so the floor of 1e-10 applies
        assert!(convergence.is_converged(0.0, 1.0, 0.5, 5e-12, 0.0));
        assert!(!convergence.is_converged(0.0, 1.0, 0.5, 5e-11, 0.0));

        let convergence = convergence.with_threshold(1e-6);
        assert!(convergence.is_converged(0.0, 1.0, 0.5, 5e-8, 0.0));
    }

    #[test]
    fn test_nan_never_converges() {
        let convergence = ToleranceConvergence::<f64>::default();
        assert!(!convergence.is_converged(0.0, 1.0, 0.5, 1.0, f64::NAN));
    }

    #[test]
    fn test_closure_criterion() {
        let criterion = |_: f64, _: f64, _: f64, estimate: f64, actual: f64| estimate == actual;
        assert!(criterion.is_converged(0.0, 1.0, 0.5, 2.0, 2.0));
        assert!(!criterion.is_converged(0.0, 1.0, 0.5, 2.0, 2.5));
    }

    #[cfg(feature = "serialize")]
    #[test]
    fn test_deserialize_validates_tolerance() {
        let convergence: ToleranceConvergence<f64> =
            serde_json::from_str(r#"{"tolerance":0.01,"threshold":-1e-6}"#).unwrap();
        assert_eq!(0.01, convergence.tolerance());
        assert_eq!(1e-6, convergence.threshold());

        for tolerance in ["0.0", "-0.25"] {
            let json = format!(r#"{{"tolerance":{tolerance},"threshold":1e-10}}"#);
            assert!(serde_json::from_str::<ToleranceConvergence<f64>>(&json).is_err());
        }
    }

    #[test]
    fn test_absolute_criterion() {
        let criterion = AbsoluteConvergence(0.5);
        assert!(criterion.is_converged(0.0, 1.0, 0.5, 1e6 + 0.25, 1e6));
        assert!(!criterion.is_converged(0.0, 1.0, 0.5, 1.0, 2.0));
    }
}
