//! Horner's scheme for series in the monomial basis.
use num_traits::Float;

/// Evaluates `Σ c_k x^k`, lowest order first. An empty slice evaluates to zero.
///
/// ```
/// use lintab_math::horner::horner;
///
/// assert_eq!(17.0, horner(&[1.0, 2.0, 3.0], 2.0));
/// ```
pub fn horner<T: Float>(coefficients: &[T], x: T) -> T {
    coefficients
        .iter()
        .rev()
        .fold(T::zero(), |acc, &c| acc * x + c)
}

/// Evaluates `Σ c_k x^k` and its derivative in a single pass.
pub fn horner_with_derivative<T: Float>(coefficients: &[T], x: T) -> (T, T) {
    coefficients
        .iter()
        .rev()
        .fold((T::zero(), T::zero()), |(value, derivative), &c| {
            (value * x + c, derivative * x + value)
        })
}
