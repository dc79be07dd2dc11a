use crate::clenshaw::clenshaw_chebyshev;
use crate::domain::{Domain, IntervalDomain};
use crate::error::SeriesError;
use crate::root_eq::companion::{estimate_roots, Basis};
use crate::series::{refine_roots, shifted, Series};
use az::CastFrom;
use num_traits::Float;
use numeric_literals::replace_float_literals;

/// A Chebyshev series `Σ c_k T_k(x)` of the first kind, defined over `[-1, 1]`.
///
/// # Example
///
/// ```
/// use lintab_math::series::{ChebyshevSeries, Series};
///
/// // T_2(x) = 2x² - 1
/// let series = ChebyshevSeries::new(vec![0.0, 0.0, 1.0]).unwrap();
/// assert_eq!(-0.5, series.evaluate(0.5));
/// assert_eq!(vec![0.0, 4.0], series.derivative().coefficients());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ChebyshevSeries<T> {
    pub(crate) coefficients: Vec<T>,
}

impl<T: Float + CastFrom<f64>> ChebyshevSeries<T> {
    /// Creates a series from its coefficients, lowest order first.
    pub fn new(coefficients: Vec<T>) -> Result<Self, SeriesError> {
        if coefficients.is_empty() {
            return Err(SeriesError::EmptyCoefficients);
        }
        Ok(Self { coefficients })
    }

    /// Consumes the series and returns its coefficients.
    pub fn into_coefficients(self) -> Vec<T> {
        self.coefficients
    }
}

impl<T: Float + CastFrom<f64>> Series<T> for ChebyshevSeries<T> {
    fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    fn domain(&self) -> Domain<T> {
        Domain::Interval(IntervalDomain::symmetric_unit())
    }

    fn evaluate(&self, x: T) -> T {
        clenshaw_chebyshev(&self.coefficients, x)
    }

    #[replace_float_literals(T::cast_from(literal))]
    fn derivative(&self) -> Self {
        let c = &self.coefficients;
        let n = c.len() - 1;
        if n == 0 {
            return Self {
                coefficients: vec![T::zero()],
            };
        }

        // d_{k-1} = d_{k+1} + 2k c_k, walking down from d_{n-1} = 2n c_n
        let mut coefficients = vec![T::zero(); n + 2];
        for k in (1..=n).rev() {
            coefficients[k - 1] = coefficients[k + 1] + 2.0 * T::cast_from(k as f64) * c[k];
        }
        coefficients.truncate(n);
        coefficients[0] = coefficients[0] * 0.5;
        Self { coefficients }
    }

    /// Uses `∫ T_k = T_{k+1} / (2(k + 1)) - T_{k-1} / (2(k - 1))`, then sets the constant so that
    /// the primitive vanishes at -1.
    #[replace_float_literals(T::cast_from(literal))]
    fn primitive(&self) -> Self {
        let c = &self.coefficients;
        let n = c.len();
        let at = |k: usize| c.get(k).copied().unwrap_or(0.0);

        let mut coefficients = vec![T::zero(); n + 1];
        coefficients[1] = at(0) - at(2) / 2.0;
        for k in 2..=n {
            coefficients[k] = (at(k - 1) - at(k + 1)) / (2.0 * T::cast_from(k as f64));
        }
        // T_k(-1) = (-1)^k
        coefficients[0] = coefficients
            .iter()
            .enumerate()
            .skip(1)
            .fold(0.0, |acc, (k, &b)| if k % 2 == 0 { acc - b } else { acc + b });
        Self { coefficients }
    }

    fn roots_of(&self, value: T) -> Vec<T> {
        let estimates = estimate_roots(&shifted(&self.coefficients, value), Basis::Chebyshev);
        refine_roots(self, value, estimates)
    }
}
