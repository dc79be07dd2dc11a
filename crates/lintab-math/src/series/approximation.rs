use crate::domain::{Domain, IntervalDomain};
use crate::error::{to_f64, SeriesError};
use crate::root_eq::companion::{estimate_roots, Basis};
use crate::series::{refine_roots, shifted, ChebyshevSeries, Series};
use az::CastFrom;
use num_traits::Float;
use numeric_literals::replace_float_literals;
use std::f64::consts::PI;

/// A Chebyshev series mapped onto an arbitrary interval `[a, b]`.
///
/// The series is evaluated at `u = (2x - (a + b)) / (b - a)`, which maps the interval onto
/// `[-1, 1]`.
///
/// # Example
///
/// ```
/// use lintab_math::series::{ChebyshevApproximation, Series};
///
/// let approximation = ChebyshevApproximation::new(|x: f64| x.exp(), 0.0, 2.0, 16).unwrap();
/// assert!((approximation.evaluate(1.5) - 1.5f64.exp()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ChebyshevApproximation<T> {
    pub(crate) series: ChebyshevSeries<T>,
    domain: IntervalDomain<T>,
}

impl<T: Float + CastFrom<f64>> ChebyshevApproximation<T> {
    /// Fits a Chebyshev approximation of the given order to `function` over `[lower, upper]`.
    ///
    /// The function is sampled once at each of the `order + 1` Chebyshev nodes of the first kind,
    /// where the approximation interpolates it.
    #[replace_float_literals(T::cast_from(literal))]
    pub fn new<F: Fn(T) -> T>(function: F, lower: T, upper: T, order: usize) -> Result<Self, SeriesError> {
        let domain = checked_interval(lower, upper)?;
        let n = order + 1;
        let count = T::cast_from(n as f64);
        let angle = |j: usize, k: usize| {
            T::cast_from(PI) * T::cast_from(j as f64) * (T::cast_from(k as f64) + 0.5) / count
        };

        let mid = 0.5 * (lower + upper);
        let half_width = 0.5 * (upper - lower);
        let values: Vec<T> = (0..n).map(|k| function(mid + half_width * angle(1, k).cos())).collect();

        let mut coefficients: Vec<T> = (0..n)
            .map(|j| {
                let sum = values
                    .iter()
                    .enumerate()
                    .fold(T::zero(), |acc, (k, &value)| acc + value * angle(j, k).cos());
                2.0 * sum / count
            })
            .collect();
        coefficients[0] = coefficients[0] * 0.5;

        Ok(Self {
            series: ChebyshevSeries { coefficients },
            domain,
        })
    }

    /// Creates an approximation over `[lower, upper]` from Chebyshev coefficients, lowest order
    /// first.
    pub fn from_coefficients(coefficients: Vec<T>, lower: T, upper: T) -> Result<Self, SeriesError> {
        let series = ChebyshevSeries::new(coefficients)?;
        Ok(Self {
            series,
            domain: checked_interval(lower, upper)?,
        })
    }

    /// The interval the approximation is defined over.
    pub fn interval(&self) -> IntervalDomain<T> {
        self.domain
    }

    /// The underlying series over `[-1, 1]`.
    pub fn series(&self) -> &ChebyshevSeries<T> {
        &self.series
    }

    fn to_unit(&self, x: T) -> T {
        let (a, b) = (self.domain.lower(), self.domain.upper());
        (x + x - (a + b)) / (b - a)
    }

    fn from_unit(&self, u: T) -> T {
        let (a, b) = (self.domain.lower(), self.domain.upper());
        let two = T::one() + T::one();
        (a + b) / two + (b - a) / two * u
    }

    /// `du/dx`
    fn unit_scale(&self) -> T {
        let two = T::one() + T::one();
        two / (self.domain.upper() - self.domain.lower())
    }
}

fn checked_interval<T: Float>(lower: T, upper: T) -> Result<IntervalDomain<T>, SeriesError> {
    let invalid = SeriesError::InvalidDomain {
        lower: to_f64(lower),
        upper: to_f64(upper),
    };
    if !(lower < upper) {
        return Err(invalid);
    }
    IntervalDomain::new(lower, upper).map_err(|_| invalid)
}

impl<T: Float + CastFrom<f64>> Series<T> for ChebyshevApproximation<T> {
    fn coefficients(&self) -> &[T] {
        &self.series.coefficients
    }

    fn domain(&self) -> Domain<T> {
        Domain::Interval(self.domain)
    }

    fn evaluate(&self, x: T) -> T {
        self.series.evaluate(self.to_unit(x))
    }

    fn derivative(&self) -> Self {
        Self {
            series: self.series.derivative() * self.unit_scale(),
            domain: self.domain,
        }
    }

    fn primitive(&self) -> Self {
        Self {
            series: self.series.primitive() / self.unit_scale(),
            domain: self.domain,
        }
    }

    fn roots_of(&self, value: T) -> Vec<T> {
        let estimates = estimate_roots(&shifted(&self.series.coefficients, value), Basis::Chebyshev)
            .into_iter()
            .map(|u| self.from_unit(u))
            .collect();
        refine_roots(self, value, estimates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{E, FRAC_PI_2};

    fn cubic(x: f64) -> f64 {
        (x - 1.0) * (x - 2.0) * (x - 4.0)
    }

    #[test]
    fn test_invalid_construction() {
        assert_eq!(
            Err(SeriesError::InvalidDomain { lower: 1.0, upper: 1.0 }),
            ChebyshevApproximation::new(cubic, 1.0, 1.0, 3)
        );
        assert!(ChebyshevApproximation::new(cubic, 2.0, 1.0, 3).is_err());
        assert_eq!(
            Err(SeriesError::EmptyCoefficients),
            ChebyshevApproximation::<f64>::from_coefficients(vec![], 0.0, 1.0)
        );
    }

    #[test]
    fn test_polynomials_are_reproduced() {
        let approximation = ChebyshevApproximation::new(cubic, 0.0, 5.0, 3).unwrap();
        assert_eq!(3, approximation.order());
        for x in [0.0, 0.3, 1.7, 2.5, 4.2, 5.0] {
            assert_relative_eq!(cubic(x), approximation.evaluate(x), epsilon = 1e-10);
        }

        let roots = approximation.roots();
        assert_eq!(3, roots.len());
        for (expected, actual) in [1.0, 2.0, 4.0].into_iter().zip(roots) {
            assert_relative_eq!(expected, actual, max_relative = 1e-10);
        }
    }

    #[test]
    fn test_from_coefficients() {
        // T_1 over [2, 4] is the line through (2, -1) and (4, 1)
        let approximation = ChebyshevApproximation::from_coefficients(vec![0.0, 1.0], 2.0, 4.0).unwrap();
        assert_eq!(-1.0, approximation.evaluate(2.0));
        assert_eq!(0.0, approximation.evaluate(3.0));
        assert_eq!(vec![3.0], approximation.roots());
        assert_eq!(vec![1.0], approximation.derivative().coefficients());
        assert!(approximation.is_same_domain(&Domain::interval(2.0, 4.0).unwrap()));
    }

    #[test]
    fn test_exponential() {
        let approximation = ChebyshevApproximation::new(f64::exp, 0.0, 1.0, 14).unwrap();
        for x in [0.0, 0.1, 0.45, 0.8, 1.0] {
            assert_relative_eq!(x.exp(), approximation.evaluate(x), max_relative = 1e-13);
            assert_relative_eq!(x.exp(), approximation.derivative().evaluate(x), max_relative = 1e-10);
        }

        let primitive = approximation.primitive();
        assert_relative_eq!(0.0, primitive.evaluate(0.0), epsilon = 1e-14);
        assert_relative_eq!(E - 1.0, primitive.evaluate(1.0), max_relative = 1e-12);
    }

    #[test]
    fn test_linearise_finds_extrema() {
        let upper = 2.0 * std::f64::consts::PI;
        let approximation = ChebyshevApproximation::new(f64::sin, 0.0, upper, 15).unwrap();
        let grid = approximation.initial_grid().unwrap();
        assert_eq!(4, grid.len());
        assert_relative_eq!(FRAC_PI_2, grid[1], max_relative = 1e-8);
        assert_relative_eq!(3.0 * FRAC_PI_2, grid[2], max_relative = 1e-8);

        let (x, y) = approximation.linearise().unwrap();
        assert_eq!(0.0, x[0]);
        assert_eq!(upper, *x.last().unwrap());
        assert!(x.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(x.len(), y.len());
    }
}
