//! Domains over which functions are defined.
use crate::error::{to_f64, DomainError};
use num_traits::Float;

/// A closed interval `[lower, upper]`.
///
/// # Example
///
/// ```
/// use lintab_math::domain::IntervalDomain;
///
/// let domain = IntervalDomain::new(-1.0, 1.0).unwrap();
/// assert!(domain.is_inside(1.0));
/// assert!(!domain.is_contained(1.0));
/// assert!(IntervalDomain::new(1.0, -1.0).is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct IntervalDomain<T> {
    lower: T,
    upper: T,
}

impl<T: Float> IntervalDomain<T> {
    /// Creates the interval `[lower, upper]`.
    ///
    /// Fails with [`DomainError::InvalidBounds`] when `lower > upper` or either bound is NaN.
    pub fn new(lower: T, upper: T) -> Result<Self, DomainError> {
        if !(lower <= upper) {
            return Err(DomainError::InvalidBounds {
                lower: to_f64(lower),
                upper: to_f64(upper),
            });
        }
        Ok(Self { lower, upper })
    }

    /// Bounds already known to be ordered.
    pub(crate) const fn from_ordered(lower: T, upper: T) -> Self {
        Self { lower, upper }
    }

    /// The interval `[-1, 1]` over which orthogonal polynomials are defined.
    pub fn symmetric_unit() -> Self {
        Self {
            lower: -T::one(),
            upper: T::one(),
        }
    }

    /// The lower bound.
    pub fn lower(&self) -> T {
        self.lower
    }

    /// The upper bound.
    pub fn upper(&self) -> T {
        self.upper
    }

    /// Returns `true` when `lower <= x <= upper`.
    pub fn is_inside(&self, x: T) -> bool {
        self.lower <= x && x <= self.upper
    }

    /// Returns `true` when `lower < x < upper`.
    pub fn is_contained(&self, x: T) -> bool {
        self.lower < x && x < self.upper
    }
}

/// The domain of a function: a closed interval, or the whole real line.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Domain<T> {
    /// A closed interval.
    Interval(IntervalDomain<T>),
    /// The whole real line.
    Open,
}

impl<T: Float> Domain<T> {
    /// Creates the interval domain `[lower, upper]`.
    pub fn interval(lower: T, upper: T) -> Result<Self, DomainError> {
        IntervalDomain::new(lower, upper).map(Self::Interval)
    }

    /// Returns `true` when `x` lies in the domain, bounds included.
    pub fn is_inside(&self, x: T) -> bool {
        match self {
            Self::Interval(interval) => interval.is_inside(x),
            Self::Open => true,
        }
    }

    /// Returns `true` when `x` lies strictly inside the domain.
    pub fn is_contained(&self, x: T) -> bool {
        match self {
            Self::Interval(interval) => interval.is_contained(x),
            Self::Open => true,
        }
    }

    /// Returns `true` when both domains are of the same kind and, for intervals, have the exact
    /// same bounds.
    pub fn is_same_domain(&self, other: &Self) -> bool {
        self == other
    }

    /// The interval of a bounded domain.
    pub fn as_interval(&self) -> Option<&IntervalDomain<T>> {
        match self {
            Self::Interval(interval) => Some(interval),
            Self::Open => None,
        }
    }
}

impl<T> From<IntervalDomain<T>> for Domain<T> {
    fn from(value: IntervalDomain<T>) -> Self {
        Self::Interval(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-1.0, false, false)]
    #[case(0.0, true, false)]
    #[case(0.5, true, true)]
    #[case(1.0, true, false)]
    #[case(1.5, false, false)]
    #[case(f64::NAN, false, false)]
    fn test_interval_queries(#[case] x: f64, #[case] inside: bool, #[case] contained: bool) {
        let domain = Domain::interval(0.0, 1.0).unwrap();
        assert_eq!(inside, domain.is_inside(x));
        assert_eq!(contained, domain.is_contained(x));
    }

    #[test]
    fn test_open_domain() {
        let domain = Domain::<f64>::Open;
        assert!(domain.is_inside(-1e300));
        assert!(domain.is_contained(f64::MAX));
        assert!(domain.as_interval().is_none());
    }

    #[test]
    fn test_degenerate_interval() {
        let domain = IntervalDomain::new(2.0, 2.0).unwrap();
        assert!(domain.is_inside(2.0));
        assert!(!domain.is_contained(2.0));
    }

    #[test]
    fn test_invalid_bounds() {
        assert_eq!(
            Err(DomainError::InvalidBounds { lower: 1.0, upper: 0.0 }),
            IntervalDomain::new(1.0, 0.0)
        );
        assert!(IntervalDomain::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_same_domain() {
        let unit = Domain::interval(-1.0, 1.0).unwrap();
        assert!(unit.is_same_domain(&Domain::from(IntervalDomain::symmetric_unit())));
        assert!(!unit.is_same_domain(&Domain::interval(-1.0, 2.0).unwrap()));
        assert!(!unit.is_same_domain(&Domain::Open));
        assert!(Domain::<f64>::Open.is_same_domain(&Domain::Open));
    }
}
