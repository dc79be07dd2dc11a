//! Exact integrals of the interpolation laws over a single panel.
//!
//! Every function returns `∫ y(x) dx` over `[x_left, x_right]` where `y` follows the law through
//! `(x_left, y_left)` and `(x_right, y_right)`. Equal bounds integrate to zero.
use crate::interpolation::{
    Histogram, InterpolationType, LinearLinear, LinearLogarithmic, LogarithmicLinear, LogarithmicLogarithmic,
};
use num_traits::Float;

/// A trait that defines how an interpolation law integrates over a panel.
pub trait Integrate<T> {
    /// Integrates the law through `(x_left, y_left)` and `(x_right, y_right)` over
    /// `[x_left, x_right]`.
    fn integrate(&self, x_left: T, x_right: T, y_left: T, y_right: T) -> T;
}

impl<T: Float> Integrate<T> for Histogram {
    fn integrate(&self, x_left: T, x_right: T, y_left: T, y_right: T) -> T {
        histogram(x_left, x_right, y_left, y_right)
    }
}

impl<T: Float> Integrate<T> for LinearLinear {
    fn integrate(&self, x_left: T, x_right: T, y_left: T, y_right: T) -> T {
        linlin(x_left, x_right, y_left, y_right)
    }
}

impl<T: Float> Integrate<T> for LinearLogarithmic {
    fn integrate(&self, x_left: T, x_right: T, y_left: T, y_right: T) -> T {
        linlog(x_left, x_right, y_left, y_right)
    }
}

impl<T: Float> Integrate<T> for LogarithmicLinear {
    fn integrate(&self, x_left: T, x_right: T, y_left: T, y_right: T) -> T {
        loglin(x_left, x_right, y_left, y_right)
    }
}

impl<T: Float> Integrate<T> for LogarithmicLogarithmic {
    fn integrate(&self, x_left: T, x_right: T, y_left: T, y_right: T) -> T {
        loglog(x_left, x_right, y_left, y_right)
    }
}

impl<T: Float> Integrate<T> for InterpolationType {
    fn integrate(&self, x_left: T, x_right: T, y_left: T, y_right: T) -> T {
        match self {
            Self::Histogram => Histogram.integrate(x_left, x_right, y_left, y_right),
            Self::LinearLinear => LinearLinear.integrate(x_left, x_right, y_left, y_right),
            Self::LinearLogarithmic => LinearLogarithmic.integrate(x_left, x_right, y_left, y_right),
            Self::LogarithmicLinear => LogarithmicLinear.integrate(x_left, x_right, y_left, y_right),
            Self::LogarithmicLogarithmic => LogarithmicLogarithmic.integrate(x_left, x_right, y_left, y_right),
        }
    }
}

/// Integral of the histogram law.
pub fn histogram<T: Float>(x_left: T, x_right: T, y_left: T, _y_right: T) -> T {
    if x_left == x_right {
        return T::zero();
    }
    y_left * (x_right - x_left)
}

/// Integral of the linear-linear law (trapezoid rule).
///
/// ```
/// use lintab_math::integration::linlin;
///
/// assert_eq!(2.5, linlin(1.0, 2.0, 1.0, 4.0));
/// assert_eq!(0.0, linlin(1.0, 1.0, 1.0, 4.0));
/// ```
pub fn linlin<T: Float>(x_left: T, x_right: T, y_left: T, y_right: T) -> T {
    if x_left == x_right {
        return T::zero();
    }
    let two = T::one() + T::one();
    (y_left + y_right) * (x_right - x_left) / two
}

/// Integral of the linear-logarithmic law.
pub fn linlog<T: Float>(x_left: T, x_right: T, y_left: T, y_right: T) -> T {
    if x_left == x_right {
        return T::zero();
    }
    let ln_ratio = (x_right / x_left).ln();
    y_left * (x_right - x_left) + (y_right - y_left) / ln_ratio * (x_right * ln_ratio - x_right + x_left)
}

/// Integral of the logarithmic-linear law.
pub fn loglin<T: Float>(x_left: T, x_right: T, y_left: T, y_right: T) -> T {
    if x_left == x_right {
        return T::zero();
    }
    let width = x_right - x_left;
    let ln_ratio = (y_right / y_left).ln();
    if ln_ratio.is_zero() {
        return y_left * width;
    }
    // (y_right - y_left) / slope, without the cancellation when y_right is close to y_left
    y_left * width * ln_ratio.exp_m1() / ln_ratio
}

/// Integral of the logarithmic-logarithmic law.
pub fn loglog<T: Float>(x_left: T, x_right: T, y_left: T, y_right: T) -> T {
    if x_left == x_right {
        return T::zero();
    }
    let ln_ratio = (x_right / x_left).ln();
    let power = (y_right / y_left).ln() / ln_ratio + T::one();
    if power.is_zero() {
        return y_left * x_left * ln_ratio;
    }
    y_left * x_left * (power * ln_ratio).exp_m1() / power
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(InterpolationType::Histogram, 1.0)]
    #[case(InterpolationType::LinearLinear, 2.5)]
    #[case(InterpolationType::LinearLogarithmic, 2.67191487733311)]
    #[case(InterpolationType::LogarithmicLinear, 1.5 / std::f64::consts::LN_2)]
    #[case(InterpolationType::LogarithmicLogarithmic, 7.0 / 3.0)]
    fn test_panel_integrals(#[case] law: InterpolationType, #[case] expected: f64) {
        assert_relative_eq!(expected, law.integrate(1.0, 2.0, 1.0, 4.0), max_relative = 1e-12);
    }

    #[rstest]
    #[case(InterpolationType::Histogram)]
    #[case(InterpolationType::LinearLinear)]
    #[case(InterpolationType::LinearLogarithmic)]
    #[case(InterpolationType::LogarithmicLinear)]
    #[case(InterpolationType::LogarithmicLogarithmic)]
    fn test_equal_bounds(#[case] law: InterpolationType) {
        assert_eq!(0.0, law.integrate(3.0, 3.0, 1.0, 4.0));
    }

    #[rstest]
    #[case(InterpolationType::LinearLinear)]
    #[case(InterpolationType::LinearLogarithmic)]
    #[case(InterpolationType::LogarithmicLinear)]
    #[case(InterpolationType::LogarithmicLogarithmic)]
    fn test_constant_panel(#[case] law: InterpolationType) {
        assert_relative_eq!(6.0, law.integrate(1.0, 4.0, 2.0, 2.0), max_relative = 1e-12);
    }

    #[test]
    fn test_inverse_power_law() {
        // y = 1 / x through (1, 1) and (2, 0.5)
        assert_relative_eq!(std::f64::consts::LN_2, loglog(1.0, 2.0, 1.0, 0.5), max_relative = 1e-12);
    }
}
