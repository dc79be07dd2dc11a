use crate::domain::Domain;
use crate::error::SeriesError;
use crate::horner::horner;
use crate::root_eq::companion::{estimate_roots, Basis};
use crate::series::{refine_roots, shifted, Series};
use az::CastFrom;
use num_traits::Float;

/// A polynomial `Σ c_k x^k` in the monomial basis.
///
/// Polynomials are defined over the whole real line unless given a domain with
/// [`PolynomialSeries::with_domain`].
///
/// # Example
///
/// ```
/// use lintab_math::domain::Domain;
/// use lintab_math::series::{PolynomialSeries, Series};
///
/// let series = PolynomialSeries::new(vec![-1.0, 0.0, 1.0]).unwrap();
/// assert_eq!(3.0, series.evaluate(2.0));
/// let roots = series.roots();
/// assert_eq!(2, roots.len());
/// approx::assert_relative_eq!(-1.0, roots[0], max_relative = 1e-12);
/// approx::assert_relative_eq!(1.0, roots[1], max_relative = 1e-12);
/// assert!(series.linearise().is_err());
///
/// let bounded = series.with_domain(Domain::interval(-2.0, 2.0).unwrap());
/// assert!(bounded.linearise().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PolynomialSeries<T> {
    pub(crate) coefficients: Vec<T>,
    domain: Domain<T>,
}

impl<T: Float + CastFrom<f64>> PolynomialSeries<T> {
    /// Creates a polynomial over the whole real line from its coefficients, lowest order first.
    pub fn new(coefficients: Vec<T>) -> Result<Self, SeriesError> {
        if coefficients.is_empty() {
            return Err(SeriesError::EmptyCoefficients);
        }
        Ok(Self {
            coefficients,
            domain: Domain::Open,
        })
    }

    /// Returns this polynomial restricted to `domain`.
    pub fn with_domain(mut self, domain: Domain<T>) -> Self {
        self.domain = domain;
        self
    }

    /// Consumes the polynomial and returns its coefficients.
    pub fn into_coefficients(self) -> Vec<T> {
        self.coefficients
    }
}

impl<T: Float + CastFrom<f64>> Series<T> for PolynomialSeries<T> {
    fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    fn domain(&self) -> Domain<T> {
        self.domain
    }

    fn evaluate(&self, x: T) -> T {
        horner(&self.coefficients, x)
    }

    fn derivative(&self) -> Self {
        let coefficients = if self.coefficients.len() == 1 {
            vec![T::zero()]
        } else {
            self.coefficients
                .iter()
                .enumerate()
                .skip(1)
                .map(|(k, &c)| T::cast_from(k as f64) * c)
                .collect()
        };
        Self {
            coefficients,
            domain: self.domain,
        }
    }

    fn primitive(&self) -> Self {
        let mut primitive = Self {
            coefficients: std::iter::once(T::zero())
                .chain(
                    self.coefficients
                        .iter()
                        .enumerate()
                        .map(|(k, &c)| c / T::cast_from((k + 1) as f64)),
                )
                .collect(),
            domain: self.domain,
        };
        if let Some(interval) = self.domain.as_interval() {
            primitive.coefficients[0] = -primitive.evaluate(interval.lower());
        }
        primitive
    }

    fn roots_of(&self, value: T) -> Vec<T> {
        let estimates = estimate_roots(&shifted(&self.coefficients, value), Basis::Monomial);
        refine_roots(self, value, estimates)
    }
}
