//! Functions expressed as truncated series over a polynomial basis.
//!
//! All series store their coefficients lowest order first and share the [`Series`] trait, which
//! provides the domain queries, root finding on top of [`Series::roots_of`], and linearisation.
use crate::domain::Domain;
use crate::root_eq::{NewtonRaphson, WithDerivative};
use az::CastFrom;
use lintab_linearise::{
    ConvergenceCriterion, LinearisationError, Lineariser, MidpointSplit, SplitStrategy, ToleranceConvergence,
};
use num_traits::Float;
use std::cmp::Ordering;

pub mod approximation;
pub mod chebyshev;
pub mod legendre;
mod ops;
pub mod polynomial;

pub use approximation::ChebyshevApproximation;
pub use chebyshev::ChebyshevSeries;
pub use legendre::LegendreSeries;
pub use polynomial::PolynomialSeries;

/// Iteration budget of the Newton-Raphson refinement of series roots.
const ROOT_REFINEMENT_ITERATIONS: usize = 50;

/// A function of one variable given by a truncated series.
pub trait Series<T: Float + CastFrom<f64>> {
    /// The coefficients of the series, lowest order first. Never empty.
    fn coefficients(&self) -> &[T];

    /// The domain over which the series is defined.
    fn domain(&self) -> Domain<T>;

    /// Evaluates the series at `x`.
    ///
    /// Series can be evaluated outside of their domain, where they are generally meaningless.
    fn evaluate(&self, x: T) -> T;

    /// The derivative of the series, one order lower (order 0 stays order 0).
    fn derivative(&self) -> Self
    where
        Self: Sized;

    /// The primitive of the series, one order higher, which is zero at the lower bound of the
    /// domain (at zero for an unbounded domain).
    fn primitive(&self) -> Self
    where
        Self: Sized;

    /// The real values of `x` for which the series equals `value`, in ascending order.
    ///
    /// Roots are not restricted to the domain.
    fn roots_of(&self, value: T) -> Vec<T>;

    /// The order of the series.
    fn order(&self) -> usize {
        self.coefficients().len() - 1
    }

    /// The real roots of the series, in ascending order.
    fn roots(&self) -> Vec<T> {
        self.roots_of(T::zero())
    }

    /// Returns `true` when `x` lies in the domain, bounds included.
    fn is_inside(&self, x: T) -> bool {
        self.domain().is_inside(x)
    }

    /// Returns `true` when `x` lies strictly inside the domain.
    fn is_contained(&self, x: T) -> bool {
        self.domain().is_contained(x)
    }

    /// Returns `true` when `domain` is the domain of this series.
    fn is_same_domain(&self, domain: &Domain<T>) -> bool {
        self.domain().is_same_domain(domain)
    }

    /// Linearises the series over its domain with the default tolerance and midpoint splits.
    ///
    /// The initial grid is made of the domain bounds and of the extrema of the series strictly
    /// inside the domain. Fails with [`LinearisationError::UnboundedDomain`] on an unbounded
    /// domain.
    fn linearise(&self) -> Result<(Vec<T>, Vec<T>), LinearisationError>
    where
        Self: Sized,
    {
        let grid = self.initial_grid()?;
        self.linearise_on(&grid, &ToleranceConvergence::default(), &MidpointSplit)
    }

    /// Linearises the series starting from an explicit grid and with explicit policies.
    fn linearise_on(
        &self,
        grid: &[T],
        convergence: &dyn ConvergenceCriterion<T>,
        split: &dyn SplitStrategy<T>,
    ) -> Result<(Vec<T>, Vec<T>), LinearisationError> {
        let mut x = Vec::new();
        let mut y = Vec::new();
        Lineariser::new(&mut x, &mut y).linearise(grid, |x| self.evaluate(x), convergence, split)?;
        Ok((x, y))
    }

    /// The domain bounds and the extrema strictly inside the domain, in ascending order.
    fn initial_grid(&self) -> Result<Vec<T>, LinearisationError>
    where
        Self: Sized,
    {
        let domain = self.domain();
        let Some(interval) = domain.as_interval() else {
            return Err(LinearisationError::UnboundedDomain);
        };

        let mut grid = vec![interval.lower()];
        if self.order() > 1 {
            for extremum in self.derivative().roots() {
                if interval.is_contained(extremum) && grid.last().is_some_and(|&last| last < extremum) {
                    grid.push(extremum);
                }
            }
        }
        grid.push(interval.upper());
        Ok(grid)
    }
}

/// Refines root estimates of `series - value` with Newton-Raphson iterations.
///
/// An estimate is kept as is when the iteration fails or wanders off to another root.
pub(crate) fn refine_roots<T, S>(series: &S, value: T, estimates: Vec<T>) -> Vec<T>
where
    T: Float + CastFrom<f64>,
    S: Series<T>,
{
    if estimates.is_empty() {
        return estimates;
    }

    let derivative = series.derivative();
    let equation = WithDerivative::new(|x| series.evaluate(x) - value, |x| derivative.evaluate(x));
    let solver = NewtonRaphson::new(ROOT_REFINEMENT_ITERATIONS, T::epsilon().sqrt());
    let max_shift = T::cast_from(1e-6);

    let mut roots: Vec<T> = estimates
        .into_iter()
        .map(|estimate| match solver.solve(&equation, estimate) {
            Ok(result) if (result.value - estimate).abs() <= max_shift * estimate.abs().max(T::one()) => result.value,
            Ok(result) => {
                log::debug!(
                    "Root refinement moved from {:?} to {:?}, keeping the eigenvalue estimate",
                    estimate.to_f64(),
                    result.value.to_f64()
                );
                estimate
            }
            Err(error) => {
                log::debug!("Root refinement from {:?} failed: {error}", estimate.to_f64());
                estimate
            }
        })
        .collect();
    roots.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    roots
}

/// The coefficients with `value` subtracted from the constant term.
pub(crate) fn shifted<T: Float>(coefficients: &[T], value: T) -> Vec<T> {
    let mut shifted = coefficients.to_vec();
    if let Some(c0) = shifted.first_mut() {
        *c0 = *c0 - value;
    }
    shifted
}
