//! A closed set of function kinds behind a single type.
use crate::domain::Domain;
use crate::series::{ChebyshevApproximation, ChebyshevSeries, LegendreSeries, PolynomialSeries, Series};
use crate::table::InterpolationTable;
use az::CastFrom;
use duplicate::duplicate_item;
use lintab_linearise::LinearisationError;
use num_traits::Float;

/// Any function of one variable provided by this crate.
///
/// # Example
///
/// ```
/// use lintab_math::function::Function;
/// use lintab_math::series::LegendreSeries;
/// use lintab_math::table::InterpolationTable;
///
/// let functions: Vec<Function<f64>> = vec![
///     InterpolationTable::new(vec![0.0, 1.0], vec![0.0, 2.0]).unwrap().into(),
///     LegendreSeries::new(vec![1.0, 1.0]).unwrap().into(),
/// ];
/// assert_eq!(1.0, functions[0].evaluate(0.5));
/// assert_eq!(1.5, functions[1].evaluate(0.5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Function<T> {
    /// A tabulated function.
    Table(InterpolationTable<T>),
    /// A polynomial in the monomial basis.
    Polynomial(PolynomialSeries<T>),
    /// A Legendre series.
    Legendre(LegendreSeries<T>),
    /// A Chebyshev series.
    Chebyshev(ChebyshevSeries<T>),
    /// A Chebyshev approximation over an arbitrary interval.
    Approximation(ChebyshevApproximation<T>),
}

#[duplicate_item(
    ty                          variant;
    [InterpolationTable]        [Table];
    [PolynomialSeries]          [Polynomial];
    [LegendreSeries]            [Legendre];
    [ChebyshevSeries]           [Chebyshev];
    [ChebyshevApproximation]    [Approximation];
)]
impl<T> From<ty<T>> for Function<T> {
    fn from(value: ty<T>) -> Self {
        Self::variant(value)
    }
}

impl<T: Float + CastFrom<f64>> Function<T> {
    /// Evaluates the function at `x`.
    pub fn evaluate(&self, x: T) -> T {
        match self {
            Self::Table(table) => table.evaluate(x),
            Self::Polynomial(series) => series.evaluate(x),
            Self::Legendre(series) => series.evaluate(x),
            Self::Chebyshev(series) => series.evaluate(x),
            Self::Approximation(series) => series.evaluate(x),
        }
    }

    /// The domain of the function.
    pub fn domain(&self) -> Domain<T> {
        match self {
            Self::Table(table) => table.domain(),
            Self::Polynomial(series) => series.domain(),
            Self::Legendre(series) => series.domain(),
            Self::Chebyshev(series) => series.domain(),
            Self::Approximation(series) => series.domain(),
        }
    }

    /// Returns `true` when `x` lies in the domain, bounds included.
    pub fn is_inside(&self, x: T) -> bool {
        self.domain().is_inside(x)
    }

    /// Returns `true` when `x` lies strictly inside the domain.
    pub fn is_contained(&self, x: T) -> bool {
        self.domain().is_contained(x)
    }

    /// Returns `true` when `domain` is the domain of this function.
    pub fn is_same_domain(&self, domain: &Domain<T>) -> bool {
        self.domain().is_same_domain(domain)
    }

    /// Linearises the function over its domain with the default tolerance and midpoint splits.
    ///
    /// Fails with [`LinearisationError::UnboundedDomain`] for a polynomial without a bounded
    /// domain.
    pub fn linearise(&self) -> Result<(Vec<T>, Vec<T>), LinearisationError> {
        match self {
            Self::Table(table) => table.linearise(),
            Self::Polynomial(series) => series.linearise(),
            Self::Legendre(series) => series.linearise(),
            Self::Chebyshev(series) => series.linearise(),
            Self::Approximation(series) => series.linearise(),
        }
    }
}
