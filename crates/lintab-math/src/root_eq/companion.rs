//! Companion matrices of series in the monomial, Chebyshev and Legendre bases.
//!
//! The eigenvalues of the companion matrix of a series are the roots of the series. The
//! Chebyshev and Legendre matrices are the symmetrically scaled "colleague" forms, which keep the
//! eigenvalue problem well conditioned for roots inside `[-1, 1]`.
use az::CastFrom;
use nalgebra::DMatrix;
use num_complex::Complex;
use num_traits::Float;
use std::cmp::Ordering;
use std::f64::consts::FRAC_1_SQRT_2;

/// Relative size of the imaginary part below which an eigenvalue is considered real.
const REAL_TOLERANCE: f64 = 1e-8;

/// The basis a series is expressed in.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Basis {
    /// `x^k`
    Monomial,
    /// Chebyshev polynomials of the first kind.
    Chebyshev,
    /// Legendre polynomials.
    Legendre,
}

impl Basis {
    /// Builds the companion matrix of a series whose last coefficient is non-zero.
    ///
    /// The series must have at least two coefficients.
    pub fn companion_matrix(self, coefficients: &[f64]) -> DMatrix<f64> {
        match self {
            Self::Monomial => monomial_companion(coefficients),
            Self::Chebyshev => chebyshev_companion(coefficients),
            Self::Legendre => legendre_companion(coefficients),
        }
    }
}

fn monomial_companion(c: &[f64]) -> DMatrix<f64> {
    let n = c.len() - 1;
    let leading = c[n];
    let mut matrix = DMatrix::zeros(n, n);
    for k in 1..n {
        matrix[(k, k - 1)] = 1.0;
    }
    for k in 0..n {
        matrix[(k, n - 1)] -= c[k] / leading;
    }
    matrix
}

fn chebyshev_companion(c: &[f64]) -> DMatrix<f64> {
    let n = c.len() - 1;
    let leading = c[n];
    let scale = |k: usize| if k == 0 { 1.0 } else { FRAC_1_SQRT_2 };

    let mut matrix = DMatrix::zeros(n, n);
    for k in 0..n.saturating_sub(1) {
        let off_diagonal = if k == 0 { FRAC_1_SQRT_2 } else { 0.5 };
        matrix[(k, k + 1)] = off_diagonal;
        matrix[(k + 1, k)] = off_diagonal;
    }
    for k in 0..n {
        matrix[(k, n - 1)] -= c[k] / leading * (scale(k) / scale(n - 1)) * 0.5;
    }
    matrix
}

fn legendre_companion(c: &[f64]) -> DMatrix<f64> {
    let n = c.len() - 1;
    let leading = c[n];
    let scale = |k: usize| 1.0 / ((2 * k + 1) as f64).sqrt();

    let mut matrix = DMatrix::zeros(n, n);
    for k in 0..n.saturating_sub(1) {
        let off_diagonal = (k + 1) as f64 * scale(k) * scale(k + 1);
        matrix[(k, k + 1)] = off_diagonal;
        matrix[(k + 1, k)] = off_diagonal;
    }
    let last = n as f64 / (2 * n - 1) as f64;
    for k in 0..n {
        matrix[(k, n - 1)] -= c[k] / leading * (scale(k) / scale(n - 1)) * last;
    }
    matrix
}

/// Estimates the real roots of a series from the eigenvalues of its companion matrix.
///
/// Trailing zero coefficients are ignored; a constant series has no roots. Roots are returned in
/// ascending order and are only as accurate as the eigenvalue solver, so callers usually refine
/// them against the series itself.
pub fn estimate_roots<T: Float + CastFrom<f64>>(coefficients: &[T], basis: Basis) -> Vec<T> {
    let coefficients: Vec<f64> = coefficients.iter().map(|c| c.to_f64().unwrap_or(f64::NAN)).collect();
    let order = match coefficients.iter().rposition(|c| *c != 0.0) {
        Some(order) if order > 0 => order,
        _ => return Vec::new(),
    };
    let coefficients = &coefficients[..=order];

    // x and T_1, P_1 coincide, so all bases share the linear case
    let mut roots = if order == 1 {
        vec![-coefficients[0] / coefficients[1]]
    } else {
        let eigenvalues = basis.companion_matrix(coefficients).complex_eigenvalues();
        eigenvalues.iter().copied().filter_map(real_part).collect()
    };
    roots.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    roots.into_iter().map(T::cast_from).collect()
}

fn real_part(eigenvalue: Complex<f64>) -> Option<f64> {
    (eigenvalue.im.abs() <= REAL_TOLERANCE * eigenvalue.re.abs().max(1.0)).then_some(eigenvalue.re)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case(Basis::Monomial, vec![-8.0, 14.0, -7.0, 1.0])]
    #[case(Basis::Chebyshev, vec![-11.5, 14.75, -3.5, 0.25])]
    #[case(Basis::Legendre, vec![-31.0 / 3.0, 73.0 / 5.0, -14.0 / 3.0, 2.0 / 5.0])]
    fn test_cubic_roots(#[case] basis: Basis, #[case] coefficients: Vec<f64>) {
        let roots = estimate_roots(&coefficients, basis);
        assert_eq!(3, roots.len());
        for (expected, actual) in [1.0, 2.0, 4.0].into_iter().zip(roots) {
            assert_relative_eq!(expected, actual, max_relative = 1e-8);
        }
    }

    #[rstest]
    #[case(Basis::Monomial)]
    #[case(Basis::Chebyshev)]
    #[case(Basis::Legendre)]
    fn test_trailing_zeros_and_constants(#[case] basis: Basis) {
        assert_eq!(vec![0.5], estimate_roots(&[-1.0, 2.0, 0.0, 0.0], basis));
        assert!(estimate_roots(&[3.0], basis).is_empty());
        assert!(estimate_roots(&[3.0, 0.0], basis).is_empty());
    }

    #[test]
    fn test_complex_roots_are_dropped() {
        // x² + 1
        assert!(estimate_roots(&[1.0, 0.0, 1.0], Basis::Monomial).is_empty());
        // (x² + 1)(x - 3)
        let roots = estimate_roots(&[-3.0, 1.0, -3.0, 1.0], Basis::Monomial);
        assert_eq!(1, roots.len());
        assert_relative_eq!(3.0, roots[0], max_relative = 1e-10);
    }

    #[test]
    fn test_chebyshev_nodes() {
        // T_4 vanishes at cos((2k + 1)π / 8)
        let roots = estimate_roots(&[0.0, 0.0, 0.0, 0.0, 1.0], Basis::Chebyshev);
        let mut expected: Vec<f64> = (0..4)
            .map(|k| ((2 * k + 1) as f64 * std::f64::consts::PI / 8.0).cos())
            .collect();
        expected.reverse();
        assert_eq!(4, roots.len());
        for (expected, actual) in expected.into_iter().zip(roots) {
            assert_relative_eq!(expected, actual, epsilon = 1e-12);
        }
    }
}
