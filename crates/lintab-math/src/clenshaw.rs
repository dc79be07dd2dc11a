//! Clenshaw's recurrence for series of functions satisfying a three-term recurrence.
//!
//! A basis `φ_k` with `φ_{k+1}(x) = a(k, x) φ_k(x) + b(k, x) φ_{k-1}(x)` is evaluated through
//! the backward recurrence `y_k = c_k + a(k, x) y_{k+1} + b(k + 1, x) y_{k+2}`, which never
//! computes the basis functions themselves.
use az::CastFrom;
use num_traits::Float;
use numeric_literals::replace_float_literals;

/// Evaluates `Σ c_k φ_k(x)` with Clenshaw's recurrence.
///
/// # Arguments
///
/// * `coefficients` - The series coefficients, lowest order first.
/// * `a`, `b` - The recurrence coefficients of the basis, as functions of `(k, x)`.
/// * `f0`, `f1` - The values of `φ_0(x)` and `φ_1(x)`.
/// * `x` - The evaluation point.
///
/// # Returns
///
/// The value of the series at `x`, or zero for an empty coefficient slice.
#[profiling::function]
pub fn clenshaw<T, A, B>(coefficients: &[T], a: A, b: B, f0: T, f1: T, x: T) -> T
where
    T: Float,
    A: Fn(usize, T) -> T,
    B: Fn(usize, T) -> T,
{
    let Some(&c0) = coefficients.first() else {
        return T::zero();
    };

    let mut y1 = T::zero();
    let mut y2 = T::zero();
    for k in (1..coefficients.len()).rev() {
        let y = coefficients[k] + a(k, x) * y1 + b(k + 1, x) * y2;
        y2 = y1;
        y1 = y;
    }
    c0 * f0 + f1 * y1 + b(1, x) * f0 * y2
}

/// Evaluates a Legendre series at `x`.
///
/// ```
/// use lintab_math::clenshaw::clenshaw_legendre;
///
/// // P_2(x) = (3x² - 1) / 2
/// assert_eq!(-0.125, clenshaw_legendre(&[0.0, 0.0, 1.0], 0.5));
/// ```
#[replace_float_literals(T::cast_from(literal))]
pub fn clenshaw_legendre<T: Float + CastFrom<f64>>(coefficients: &[T], x: T) -> T {
    clenshaw(
        coefficients,
        |k, x| T::cast_from((2 * k + 1) as f64) / T::cast_from((k + 1) as f64) * x,
        |k, _| -T::cast_from(k as f64) / T::cast_from((k + 1) as f64),
        1.0,
        x,
        x,
    )
}

/// Evaluates a Chebyshev series (first kind) at `x`.
///
/// ```
/// use lintab_math::clenshaw::clenshaw_chebyshev;
///
/// // T_3(x) = 4x³ - 3x
/// assert_eq!(-1.0, clenshaw_chebyshev(&[0.0, 0.0, 0.0, 1.0], 0.5));
/// ```
#[replace_float_literals(T::cast_from(literal))]
pub fn clenshaw_chebyshev<T: Float + CastFrom<f64>>(coefficients: &[T], x: T) -> T {
    clenshaw(coefficients, |_, x| 2.0 * x, |_, _| -1.0, 1.0, x, x)
}
