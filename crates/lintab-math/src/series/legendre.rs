use crate::clenshaw::clenshaw_legendre;
use crate::domain::{Domain, IntervalDomain};
use crate::error::SeriesError;
use crate::root_eq::companion::{estimate_roots, Basis};
use crate::series::{refine_roots, shifted, Series};
use az::CastFrom;
use num_traits::Float;

/// A Legendre series `Σ c_k P_k(x)` defined over `[-1, 1]`.
///
/// # Example
///
/// ```
/// use lintab_math::series::{LegendreSeries, Series};
///
/// // P_0 + P_1 = 1 + x
/// let series = LegendreSeries::new(vec![1.0, 1.0]).unwrap();
/// assert_eq!(1.5, series.evaluate(0.5));
/// assert_eq!(vec![-1.0], series.roots());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LegendreSeries<T> {
    pub(crate) coefficients: Vec<T>,
}

impl<T: Float + CastFrom<f64>> LegendreSeries<T> {
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

impl<T: Float + CastFrom<f64>> Series<T> for LegendreSeries<T> {
    fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    fn domain(&self) -> Domain<T> {
        Domain::Interval(IntervalDomain::symmetric_unit())
    }

    fn evaluate(&self, x: T) -> T {
        clenshaw_legendre(&self.coefficients, x)
    }

    /// Uses `P'_n = Σ (2k + 1) P_k` over the `k < n` with `n - k` odd.
    fn derivative(&self) -> Self {
        let n = self.coefficients.len();
        if n == 1 {
            return Self {
                coefficients: vec![T::zero()],
            };
        }

        // Running sums of the coefficients of matching parity above k
        let mut coefficients = vec![T::zero(); n - 1];
        let mut odd = T::zero();
        let mut even = T::zero();
        for k in (0..n - 1).rev() {
            let above = self.coefficients[k + 1];
            if (k + 1) % 2 == 0 {
                even = even + above;
            } else {
                odd = odd + above;
            }
            let sum = if k % 2 == 0 { odd } else { even };
            coefficients[k] = T::cast_from((2 * k + 1) as f64) * sum;
        }
        Self { coefficients }
    }

    /// Uses `∫ P_k = (P_{k+1} - P_{k-1}) / (2k + 1)`, then sets the constant so that the
    /// primitive vanishes at -1.
    fn primitive(&self) -> Self {
        let c = &self.coefficients;
        let n = c.len();
        let at = |k: usize| c.get(k).copied().unwrap_or_else(T::zero);

        let mut coefficients = vec![T::zero(); n + 1];
        for k in 1..=n {
            let below = at(k - 1) / T::cast_from((2 * k - 1) as f64);
            let above = at(k + 1) / T::cast_from((2 * k + 3) as f64);
            coefficients[k] = below - above;
        }
        // P_k(-1) = (-1)^k
        coefficients[0] = coefficients
            .iter()
            .enumerate()
            .skip(1)
            .fold(T::zero(), |acc, (k, &b)| if k % 2 == 0 { acc - b } else { acc + b });
        Self { coefficients }
    }

    fn roots_of(&self, value: T) -> Vec<T> {
        let estimates = estimate_roots(&shifted(&self.coefficients, value), Basis::Legendre);
        refine_roots(self, value, estimates)
    }
}
