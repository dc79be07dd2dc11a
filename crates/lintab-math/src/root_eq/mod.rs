//! Root finding: eigenvalues of companion matrices for series, refined with Newton-Raphson.
use std::marker::PhantomData;

pub mod companion;
pub mod nr;

pub use companion::Basis;
pub use nr::{newton, NewtonRaphson, SolveResult};

/// Trait defining an equation and its derivative
pub trait Differentiable {
    /// Scalar type of the equation
    type Scalar: Copy;

    /// Evaluates both the function and its derivative at a point
    fn eval_with_derivative(&self, x: Self::Scalar) -> (Self::Scalar, Self::Scalar);

    /// Evaluates the function at a point
    fn eval(&self, x: Self::Scalar) -> Self::Scalar {
        self.eval_with_derivative(x).0
    }

    /// Evaluates the derivative of the function at a point
    fn derivative(&self, x: Self::Scalar) -> Self::Scalar {
        self.eval_with_derivative(x).1
    }
}

/// A function and its derivative given as two closures.
#[derive(Debug, Copy, Clone)]
pub struct WithDerivative<T, F, D> {
    function: F,
    derivative: D,
    __scalar: PhantomData<fn(T) -> T>,
}

impl<T, F: Fn(T) -> T, D: Fn(T) -> T> WithDerivative<T, F, D> {
    /// Pairs `function` with its `derivative`.
    pub fn new(function: F, derivative: D) -> Self {
        Self {
            function,
            derivative,
            __scalar: PhantomData,
        }
    }
}

impl<T: Copy, F: Fn(T) -> T, D: Fn(T) -> T> Differentiable for WithDerivative<T, F, D> {
    type Scalar = T;

    fn eval_with_derivative(&self, x: T) -> (T, T) {
        ((self.function)(x), (self.derivative)(x))
    }
}
