//! Arithmetic on series.
//!
//! Adding or subtracting a scalar shifts the constant term, multiplying or dividing scales every
//! coefficient. Series of the same type add and subtract coefficient-wise, the shorter one being
//! padded with zeros; the result keeps the domain of the left operand.
use crate::series::{ChebyshevApproximation, ChebyshevSeries, LegendreSeries, PolynomialSeries};
use duplicate::duplicate_item;
use num_traits::Float;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

trait CoefficientStorage<T> {
    fn storage(&self) -> &[T];

    fn storage_mut(&mut self) -> &mut Vec<T>;
}

#[duplicate_item(
    ty                          field;
    [LegendreSeries]            [coefficients];
    [ChebyshevSeries]           [coefficients];
    [PolynomialSeries]          [coefficients];
    [ChebyshevApproximation]    [series.coefficients];
)]
impl<T> CoefficientStorage<T> for ty<T> {
    fn storage(&self) -> &[T] {
        &self.field
    }

    fn storage_mut(&mut self) -> &mut Vec<T> {
        &mut self.field
    }
}

#[duplicate_item(
    ty;
    [LegendreSeries];
    [ChebyshevSeries];
    [PolynomialSeries];
    [ChebyshevApproximation];
)]
#[duplicate_item(
    op_assign       method_assign   op;
    [AddAssign]     [add_assign]    [add];
    [SubAssign]     [sub_assign]    [sub];
)]
impl<T: Float> op_assign<T> for ty<T> {
    fn method_assign(&mut self, rhs: T) {
        // Every basis has a constant first element
        if let Some(c0) = self.storage_mut().first_mut() {
            *c0 = (*c0).op(rhs);
        }
    }
}

#[duplicate_item(
    ty;
    [LegendreSeries];
    [ChebyshevSeries];
    [PolynomialSeries];
    [ChebyshevApproximation];
)]
#[duplicate_item(
    op_assign       method_assign   op;
    [MulAssign]     [mul_assign]    [mul];
    [DivAssign]     [div_assign]    [div];
)]
impl<T: Float> op_assign<T> for ty<T> {
    fn method_assign(&mut self, rhs: T) {
        for c in self.storage_mut() {
            *c = (*c).op(rhs);
        }
    }
}

#[duplicate_item(
    ty;
    [LegendreSeries];
    [ChebyshevSeries];
    [PolynomialSeries];
    [ChebyshevApproximation];
)]
#[duplicate_item(
    op_trait    op      method_assign;
    [Add]       [add]   [add_assign];
    [Sub]       [sub]   [sub_assign];
    [Mul]       [mul]   [mul_assign];
    [Div]       [div]   [div_assign];
)]
impl<T: Float> op_trait<T> for ty<T> {
    type Output = Self;

    fn op(mut self, rhs: T) -> Self {
        self.method_assign(rhs);
        self
    }
}

#[duplicate_item(
    ty;
    [LegendreSeries];
    [ChebyshevSeries];
    [PolynomialSeries];
    [ChebyshevApproximation];
)]
#[duplicate_item(
    op_assign       method_assign   op;
    [AddAssign]     [add_assign]    [add];
    [SubAssign]     [sub_assign]    [sub];
)]
impl<'a, T: Float> op_assign<&'a ty<T>> for ty<T> {
    fn method_assign(&mut self, rhs: &'a ty<T>) {
        let rhs = rhs.storage();
        let coefficients = self.storage_mut();
        if coefficients.len() < rhs.len() {
            coefficients.resize(rhs.len(), T::zero());
        }
        for (c, &r) in coefficients.iter_mut().zip(rhs) {
            *c = (*c).op(r);
        }
    }
}

#[duplicate_item(
    ty;
    [LegendreSeries];
    [ChebyshevSeries];
    [PolynomialSeries];
    [ChebyshevApproximation];
)]
#[duplicate_item(
    op_trait    op      method_assign;
    [Add]       [add]   [add_assign];
    [Sub]       [sub]   [sub_assign];
)]
impl<T: Float> op_trait for ty<T> {
    type Output = Self;

    fn op(mut self, rhs: Self) -> Self {
        self.method_assign(&rhs);
        self
    }
}

#[duplicate_item(
    ty;
    [LegendreSeries];
    [ChebyshevSeries];
    [PolynomialSeries];
    [ChebyshevApproximation];
)]
impl<T: Float> Neg for ty<T> {
    type Output = Self;

    fn neg(mut self) -> Self {
        for c in self.storage_mut() {
            *c = -*c;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::Domain;
    use crate::series::{ChebyshevApproximation, ChebyshevSeries, LegendreSeries, PolynomialSeries, Series};
    use approx::assert_relative_eq;

    #[test]
    fn test_scalar_operations() {
        let series = LegendreSeries::new(vec![1.0, 2.0, 3.0]).unwrap();
        let shift: f64 = 2.0;
        let scale: f64 = 4.0;
        assert_eq!(vec![3.0, 2.0, 3.0], (series.clone() + shift).coefficients());
        assert_eq!(vec![-1.0, 2.0, 3.0], (series.clone() - shift).coefficients());
        assert_eq!(vec![4.0, 8.0, 12.0], (series.clone() * scale).coefficients());
        assert_eq!(vec![0.25, 0.5, 0.75], (series.clone() / scale).coefficients());
        assert_eq!(vec![-1.0, -2.0, -3.0], (-series).coefficients());
    }

    #[test]
    fn test_series_operations_pad_with_zeros() {
        let short = ChebyshevSeries::new(vec![1.0, 1.0]).unwrap();
        let long = ChebyshevSeries::new(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(vec![2.0, 3.0, 3.0, 4.0], (short.clone() + long.clone()).coefficients());
        assert_eq!(vec![0.0, -1.0, -3.0, -4.0], (short - long.clone()).coefficients());

        let mut accumulated = long.clone();
        accumulated -= &long;
        assert_eq!(vec![0.0; 4], accumulated.coefficients());
    }

    #[test]
    fn test_sum_keeps_left_domain() {
        let domain = Domain::interval(0.0, 2.0).unwrap();
        let left = PolynomialSeries::new(vec![1.0, 1.0]).unwrap().with_domain(domain);
        let right = PolynomialSeries::new(vec![0.0, 0.0, 1.0]).unwrap();
        let sum = left + right;
        assert!(sum.is_same_domain(&domain));
        assert_eq!(7.0, sum.evaluate(2.0));
    }

    #[test]
    fn test_scaled_approximation() {
        let approximation = ChebyshevApproximation::new(|x: f64| x.sin(), 0.0, 3.0, 12).unwrap();
        let scale: f64 = 3.0;
        let scaled = approximation.clone() * scale + scale;
        for x in [0.5, 1.0, 2.5] {
            assert_relative_eq!(3.0 * approximation.evaluate(x) + 3.0, scaled.evaluate(x), max_relative = 1e-12);
        }
    }
}
