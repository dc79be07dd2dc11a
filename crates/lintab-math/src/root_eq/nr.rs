use crate::error::{to_f64, NewtonError};
use crate::root_eq::{Differentiable, WithDerivative};
use num_traits::Float;

/// Newton-Raphson iteration with a step tolerance and an iteration budget.
#[derive(Debug, Copy, Clone)]
pub struct NewtonRaphson<T> {
    pub max_iterations: usize,
    pub tolerance: T,
}

impl<T> NewtonRaphson<T> {
    pub const fn new(max_iterations: usize, tolerance: T) -> Self {
        Self {
            max_iterations,
            tolerance,
        }
    }
}

/// A converged iteration.
#[derive(Debug, Clone, Copy)]
pub struct SolveResult<T> {
    /// The root.
    pub value: T,
    /// The last step taken.
    pub delta: T,
    /// Iterations performed before the last step.
    pub iterations: usize,
}

impl<T: Float> NewtonRaphson<T> {
    /// Solves the equation using the Newton-Raphson method
    ///
    /// Iterates until the step falls below the tolerance or the function evaluates to exactly
    /// zero. Fails when the iteration budget runs out or when a step is not finite, which happens
    /// on a vanishing derivative.
    pub fn solve<F: Differentiable<Scalar = T>>(
        &self,
        function: &F,
        initial_guess: T,
    ) -> Result<SolveResult<T>, NewtonError> {
        let mut x = initial_guess;

        for i in 0..self.max_iterations {
            let (fx, dfx) = function.eval_with_derivative(x);
            if fx.is_zero() {
                return Ok(SolveResult {
                    value: x,
                    delta: T::zero(),
                    iterations: i,
                });
            }

            let delta = fx / dfx;
            if !delta.is_finite() {
                return Err(NewtonError::NonFiniteStep {
                    iteration: i,
                    value: to_f64(x),
                });
            }

            x = x - delta;

            if delta.abs() < self.tolerance {
                return Ok(SolveResult {
                    value: x,
                    delta,
                    iterations: i,
                });
            }
        }

        Err(NewtonError::MaxIterationsReached {
            iterations: self.max_iterations,
            value: to_f64(x),
        })
    }
}

/// Finds a root of `function` from `initial_guess`, given its `derivative`.
///
/// ```
/// use lintab_math::root_eq::newton;
///
/// let root = newton(|x: f64| x * x - 2.0, |x| 2.0 * x, 1.0, 1e-12, 50).unwrap();
/// approx::assert_relative_eq!(std::f64::consts::SQRT_2, root, max_relative = 1e-12);
/// ```
pub fn newton<T: Float>(
    function: impl Fn(T) -> T,
    derivative: impl Fn(T) -> T,
    initial_guess: T,
    tolerance: T,
    max_iterations: usize,
) -> Result<T, NewtonError> {
    NewtonRaphson::new(max_iterations, tolerance)
        .solve(&WithDerivative::new(function, derivative), initial_guess)
        .map(|result| result.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::horner::horner_with_derivative;
    use rstest::rstest;
    use std::f64::consts::PI;

    /// x² - 4
    struct Quadratic;

    impl Differentiable for Quadratic {
        type Scalar = f64;

        fn eval_with_derivative(&self, x: f64) -> (f64, f64) {
            (x * x - 4.0, 2.0 * x)
        }
    }

    /// (x - 1)(x - 2)(x - 4)
    struct Cubic;

    impl Differentiable for Cubic {
        type Scalar = f64;

        fn eval_with_derivative(&self, x: f64) -> (f64, f64) {
            horner_with_derivative(&[-8.0, 14.0, -7.0, 1.0], x)
        }
    }

    const SOLVER: NewtonRaphson<f64> = NewtonRaphson::new(100, 1e-10);

    #[rstest]
    #[case(3.0, 2.0)]
    #[case(-3.0, -2.0)]
    #[case(0.5, 2.0)]
    fn test_quadratic(#[case] guess: f64, #[case] root: f64) {
        let result = SOLVER.solve(&Quadratic, guess).unwrap();
        assert!(result.iterations < SOLVER.max_iterations);
        assert!((result.value - root).abs() < SOLVER.tolerance);
    }

    #[rstest]
    #[case(0.0, 1.0)]
    #[case(1.9, 2.0)]
    #[case(5.0, 4.0)]
    fn test_cubic(#[case] guess: f64, #[case] root: f64) {
        let result = SOLVER.solve(&Cubic, guess).unwrap();
        assert!((result.value - root).abs() < SOLVER.tolerance);
    }

    #[rstest]
    #[case(0.1, 0.0)]
    #[case(3.0, PI)]
    #[case(-3.0, -PI)]
    fn test_sine(#[case] guess: f64, #[case] root: f64) {
        let sine = WithDerivative::new(f64::sin, f64::cos);
        let result = SOLVER.solve(&sine, guess).unwrap();
        assert!((result.value - root).abs() < SOLVER.tolerance);
    }

    #[test]
    fn test_exact_root_stops_immediately() {
        let result = SOLVER.solve(&Quadratic, 2.0).unwrap();
        assert_eq!(0, result.iterations);
        assert_eq!(2.0, result.value);
    }

    #[test]
    fn test_iteration_budget() {
        let result = NewtonRaphson::new(2, 1e-10).solve(&Cubic, 5.0);
        assert!(matches!(
            result,
            Err(NewtonError::MaxIterationsReached { iterations: 2, .. })
        ));
    }

    #[test]
    fn test_vanishing_derivative() {
        assert_eq!(
            Err(NewtonError::NonFiniteStep {
                iteration: 0,
                value: 0.0
            }),
            SOLVER.solve(&Quadratic, 0.0).map(|result| result.value)
        );
    }

    #[test]
    fn test_closures() {
        let root = newton(|x: f64| x.cos() - x, |x| -x.sin() - 1.0, 1.0, 1e-12, 50).unwrap();
        assert!((root.cos() - root).abs() < 1e-12);
    }
}
