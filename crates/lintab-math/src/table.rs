//! Tabulated functions.
//!
//! An [`InterpolationTable`] holds a strictly increasing grid of points split into interpolation
//! regions. Each region covers a run of consecutive points and interpolates between them with its
//! own [`InterpolationType`]; consecutive regions share their boundary point.
//!
//! # Example
//!
//! ```
//! use lintab_math::table::InterpolationTable;
//!
//! let table = InterpolationTable::log_linear(vec![1.0, 2.0, 3.0, 4.0], vec![4.0, 3.0, 2.0, 1.0]).unwrap();
//! approx::assert_relative_eq!(3.46410161513775, table.evaluate(1.5), max_relative = 1e-12);
//! assert_eq!(0.0, table.evaluate(5.0));
//!
//! let (x, _) = table.linearise().unwrap();
//! assert_eq!(21, x.len());
//! ```
use crate::domain::{Domain, IntervalDomain};
use crate::error::{Error, TableError};
use crate::integration::Integrate;
use crate::interpolation::{shade_down, Interpolate, InterpolationType};
use az::CastFrom;
use lintab_linearise::{
    ConvergenceCriterion, LinearisationError, Lineariser, MidpointSplit, SplitStrategy, ToleranceConvergence,
};
use num_traits::Float;

/// A function of one variable given by tabulated points and per-region interpolation laws.
///
/// The table evaluates to zero outside of `[x.first(), x.last()]`.
#[derive(Debug, Clone, PartialEq)]
pub struct InterpolationTable<T> {
    x: Vec<T>,
    y: Vec<T>,
    boundaries: Vec<usize>,
    interpolants: Vec<InterpolationType>,
    domain: IntervalDomain<T>,
}

impl<T: Float + CastFrom<f64>> InterpolationTable<T> {
    /// Creates a table interpolated linearly over a single region.
    pub fn new(x: Vec<T>, y: Vec<T>) -> Result<Self, TableError> {
        Self::with_interpolation(x, y, InterpolationType::LinearLinear)
    }

    /// Creates a table with a single interpolation region.
    pub fn with_interpolation(x: Vec<T>, y: Vec<T>, interpolation: InterpolationType) -> Result<Self, TableError> {
        let last = x.len().saturating_sub(1);
        Self::with_regions(x, y, vec![last], vec![interpolation])
    }

    /// Creates a table with several interpolation regions.
    ///
    /// `boundaries` holds the index of the last point of each region, in non-decreasing order, and
    /// must end on the last point of the table. `interpolants` holds the law of each region.
    ///
    /// # Errors
    ///
    /// Fails with a [`TableError`] when the grid has fewer than two points, is not strictly
    /// increasing, does not match the y values, when the regions do not cover the grid, or when a
    /// logarithmic law would be applied to a non-positive value.
    pub fn with_regions(
        x: Vec<T>,
        y: Vec<T>,
        boundaries: Vec<usize>,
        interpolants: Vec<InterpolationType>,
    ) -> Result<Self, TableError> {
        validate_grid(&x, &y)?;
        validate_regions(x.len(), &boundaries, &interpolants)?;

        let mut start = 0;
        for (&end, &law) in boundaries.iter().zip(&interpolants) {
            if law.is_logarithmic_x() {
                if let Some(index) = (start..=end).find(|&i| x[i] <= T::zero()) {
                    return Err(TableError::NonPositiveX { index });
                }
            }
            if law.is_logarithmic_y() {
                if let Some(index) = (start..=end).find(|&i| y[i] <= T::zero()) {
                    return Err(TableError::NonPositiveY { index });
                }
            }
            start = end;
        }

        let domain = IntervalDomain::from_ordered(x[0], x[x.len() - 1]);
        Ok(Self {
            x,
            y,
            boundaries,
            interpolants,
            domain,
        })
    }

    /// Creates a single-region histogram table.
    pub fn histogram(x: Vec<T>, y: Vec<T>) -> Result<Self, TableError> {
        Self::with_interpolation(x, y, InterpolationType::Histogram)
    }

    /// Creates a single-region linear-linear table.
    pub fn linear_linear(x: Vec<T>, y: Vec<T>) -> Result<Self, TableError> {
        Self::with_interpolation(x, y, InterpolationType::LinearLinear)
    }

    /// Creates a single-region linear-logarithmic table.
    pub fn linear_log(x: Vec<T>, y: Vec<T>) -> Result<Self, TableError> {
        Self::with_interpolation(x, y, InterpolationType::LinearLogarithmic)
    }

    /// Creates a single-region logarithmic-linear table.
    pub fn log_linear(x: Vec<T>, y: Vec<T>) -> Result<Self, TableError> {
        Self::with_interpolation(x, y, InterpolationType::LogarithmicLinear)
    }

    /// Creates a single-region logarithmic-logarithmic table.
    pub fn log_log(x: Vec<T>, y: Vec<T>) -> Result<Self, TableError> {
        Self::with_interpolation(x, y, InterpolationType::LogarithmicLogarithmic)
    }

    /// The x values.
    pub fn x(&self) -> &[T] {
        &self.x
    }

    /// The y values.
    pub fn y(&self) -> &[T] {
        &self.y
    }

    /// The index of the last point of each region.
    pub fn boundaries(&self) -> &[usize] {
        &self.boundaries
    }

    /// The interpolation law of each region.
    pub fn interpolants(&self) -> &[InterpolationType] {
        &self.interpolants
    }

    /// The interpolation law of a single-region table, `None` when there are several regions.
    pub fn interpolation(&self) -> Option<InterpolationType> {
        match self.interpolants.as_slice() {
            [law] => Some(*law),
            _ => None,
        }
    }

    /// The number of tabulated points.
    pub fn number_points(&self) -> usize {
        self.x.len()
    }

    /// The number of interpolation regions.
    pub fn number_regions(&self) -> usize {
        self.boundaries.len()
    }

    /// The domain of the table, `[x.first(), x.last()]`.
    pub fn domain(&self) -> Domain<T> {
        Domain::Interval(self.domain)
    }

    /// Returns `true` when `x` lies in the domain, bounds included.
    pub fn is_inside(&self, x: T) -> bool {
        self.domain.is_inside(x)
    }

    /// Returns `true` when `x` lies strictly inside the domain.
    pub fn is_contained(&self, x: T) -> bool {
        self.domain.is_contained(x)
    }

    /// Returns `true` when `domain` is the domain of this table.
    pub fn is_same_domain(&self, domain: &Domain<T>) -> bool {
        self.domain().is_same_domain(domain)
    }

    /// Evaluates the table at `x`.
    ///
    /// Returns the stored value on a grid point, zero outside of the domain, and otherwise
    /// interpolates with the law of the region holding the surrounding panel.
    #[profiling::function]
    pub fn evaluate(&self, x: T) -> T {
        if !self.domain.is_inside(x) {
            return T::zero();
        }

        let right = self.x.partition_point(|&value| value < x);
        if self.x[right] == x {
            return self.y[right];
        }
        let left = right - 1;
        self.law(right).interpolate(x, self.x[left], self.x[right], self.y[left], self.y[right])
    }

    /// The law of the region holding the panel that ends on point `right`.
    fn law(&self, right: usize) -> InterpolationType {
        let region = self.boundaries.partition_point(|&boundary| boundary < right);
        self.interpolants[region.min(self.interpolants.len() - 1)]
    }

    /// The integral of the table over its domain.
    pub fn integral(&self) -> T {
        (1..self.x.len()).fold(T::zero(), |acc, right| {
            let left = right - 1;
            acc + self
                .law(right)
                .integrate(self.x[left], self.x[right], self.y[left], self.y[right])
        })
    }

    /// Linearises the table with the default tolerance and midpoint splits.
    pub fn linearise(&self) -> Result<(Vec<T>, Vec<T>), LinearisationError> {
        self.linearise_with(&ToleranceConvergence::default(), &MidpointSplit)
    }

    /// Linearises the table region by region.
    ///
    /// Linear-linear regions are copied as is, and each step of a histogram region becomes a
    /// point just below the next grid point followed by that grid point. The other regions are
    /// refined from their own grid points. Points shared by two regions appear once.
    pub fn linearise_with<C, S>(&self, convergence: &C, split: &S) -> Result<(Vec<T>, Vec<T>), LinearisationError>
    where
        C: ConvergenceCriterion<T> + ?Sized,
        S: SplitStrategy<T> + ?Sized,
    {
        let mut x = Vec::with_capacity(self.x.len());
        let mut y = Vec::with_capacity(self.y.len());

        let mut start = 0;
        for (&end, &law) in self.boundaries.iter().zip(&self.interpolants) {
            if end == start {
                continue;
            }
            // The first point of this region closes the previous one
            x.pop();
            y.pop();

            let (xs, ys) = (&self.x[start..=end], &self.y[start..=end]);
            match law {
                InterpolationType::LinearLinear => {
                    x.extend_from_slice(xs);
                    y.extend_from_slice(ys);
                }
                InterpolationType::Histogram => {
                    x.push(xs[0]);
                    y.push(ys[0]);
                    for i in 1..xs.len() {
                        // Subnormal grid points may leave no room below them
                        let shaded = shade_down(xs[i]);
                        if shaded > xs[i - 1] && shaded < xs[i] {
                            x.push(shaded);
                            y.push(ys[i - 1]);
                        }
                        x.push(xs[i]);
                        y.push(ys[i]);
                    }
                }
                _ => {
                    Lineariser::new(&mut x, &mut y).linearise(xs, |value| self.evaluate(value), convergence, split)?;
                }
            }
            start = end;
        }

        log::debug!("Linearised a table of {} points into {} points", self.x.len(), x.len());
        Ok((x, y))
    }

    /// Linearises the table into a new single-region linear-linear table.
    pub fn linearised(&self) -> Result<Self, Error> {
        let (x, y) = self.linearise()?;
        Ok(Self::new(x, y)?)
    }
}

fn validate_grid<T: Float>(x: &[T], y: &[T]) -> Result<(), TableError> {
    if x.len() != y.len() {
        return Err(TableError::LengthMismatch { x: x.len(), y: y.len() });
    }
    if x.len() < 2 {
        return Err(TableError::TooFewPoints(x.len()));
    }
    for (i, pair) in x.windows(2).enumerate() {
        if pair[0] == pair[1] {
            return Err(TableError::DuplicatePoint { index: i + 1 });
        }
        if !(pair[0] < pair[1]) {
            return Err(TableError::UnsortedGrid { index: i + 1 });
        }
    }
    Ok(())
}

fn validate_regions(points: usize, boundaries: &[usize], interpolants: &[InterpolationType]) -> Result<(), TableError> {
    if boundaries.is_empty() || interpolants.is_empty() {
        return Err(TableError::EmptyRegions);
    }
    if boundaries.len() != interpolants.len() {
        return Err(TableError::RegionCountMismatch {
            boundaries: boundaries.len(),
            interpolants: interpolants.len(),
        });
    }
    if let Some(i) = boundaries.windows(2).position(|pair| pair[1] < pair[0]) {
        return Err(TableError::UnsortedBoundaries { index: i + 1 });
    }
    let last = boundaries[boundaries.len() - 1];
    if last != points - 1 {
        return Err(TableError::IncompleteBoundaries {
            last,
            expected: points - 1,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn log_linear() -> InterpolationTable<f64> {
        InterpolationTable::log_linear(vec![1.0, 2.0, 3.0, 4.0], vec![4.0, 3.0, 2.0, 1.0]).unwrap()
    }

    #[rstest]
    #[case(vec![1.0], vec![1.0], TableError::TooFewPoints(1))]
    #[case(vec![1.0, 2.0], vec![1.0], TableError::LengthMismatch { x: 2, y: 1 })]
    #[case(vec![1.0, 3.0, 2.0], vec![1.0, 2.0, 3.0], TableError::UnsortedGrid { index: 2 })]
    #[case(vec![1.0, 2.0, 2.0, 3.0], vec![1.0, 2.0, 3.0, 4.0], TableError::DuplicatePoint { index: 2 })]
    #[case(vec![1.0, f64::NAN], vec![1.0, 2.0], TableError::UnsortedGrid { index: 1 })]
    fn test_invalid_grid(#[case] x: Vec<f64>, #[case] y: Vec<f64>, #[case] expected: TableError) {
        assert_eq!(Err(expected), InterpolationTable::new(x, y));
    }

    #[rstest]
    #[case(vec![], vec![], TableError::EmptyRegions)]
    #[case(vec![3], vec![], TableError::EmptyRegions)]
    #[case(
        vec![1, 3],
        vec![InterpolationType::LinearLinear],
        TableError::RegionCountMismatch { boundaries: 2, interpolants: 1 }
    )]
    #[case(
        vec![2, 1, 3],
        vec![InterpolationType::LinearLinear; 3],
        TableError::UnsortedBoundaries { index: 1 }
    )]
    #[case(vec![2], vec![InterpolationType::LinearLinear], TableError::IncompleteBoundaries { last: 2, expected: 3 })]
    fn test_invalid_regions(
        #[case] boundaries: Vec<usize>,
        #[case] interpolants: Vec<InterpolationType>,
        #[case] expected: TableError,
    ) {
        let table = InterpolationTable::with_regions(
            vec![1.0, 2.0, 3.0, 4.0],
            vec![1.0, 2.0, 3.0, 4.0],
            boundaries,
            interpolants,
        );
        assert_eq!(Err(expected), table);
    }

    #[test]
    fn test_non_positive_values() {
        assert_eq!(
            Err(TableError::NonPositiveX { index: 0 }),
            InterpolationTable::linear_log(vec![0.0, 1.0], vec![1.0, 2.0])
        );
        assert_eq!(
            Err(TableError::NonPositiveY { index: 1 }),
            InterpolationTable::log_log(vec![1.0, 2.0], vec![1.0, -2.0])
        );
        // Only the points of the logarithmic region need to be positive
        let table = InterpolationTable::with_regions(
            vec![-1.0, 0.0, 1.0, 2.0],
            vec![0.0, 1.0, 2.0, 3.0],
            vec![1, 3],
            vec![InterpolationType::LinearLinear, InterpolationType::LogarithmicLinear],
        );
        assert!(table.is_ok());
    }

    #[test]
    fn test_accessors() {
        let table = log_linear();
        assert_eq!(4, table.number_points());
        assert_eq!(1, table.number_regions());
        assert_eq!(&[3], table.boundaries());
        assert_eq!(Some(InterpolationType::LogarithmicLinear), table.interpolation());
        assert_eq!(&[1.0, 2.0, 3.0, 4.0], table.x());
        assert_eq!(&[4.0, 3.0, 2.0, 1.0], table.y());
        assert!(table.is_inside(1.0));
        assert!(!table.is_contained(4.0));
        assert!(table.is_contained(2.5));
        assert!(table.is_same_domain(&Domain::interval(1.0, 4.0).unwrap()));
        assert!(!table.is_same_domain(&Domain::interval(0.0, 4.0).unwrap()));
    }

    #[rstest]
    #[case(1.0, 4.0)]
    #[case(2.0, 3.0)]
    #[case(4.0, 1.0)]
    #[case(1.5, 3.46410161513775)]
    #[case(2.5, 2.44948974278318)]
    #[case(3.5, 1.41421356237309)]
    #[case(0.0, 0.0)]
    #[case(5.0, 0.0)]
    #[case(f64::NAN, 0.0)]
    fn test_evaluate(#[case] x: f64, #[case] expected: f64) {
        assert_relative_eq!(expected, log_linear().evaluate(x), max_relative = 1e-12);
    }

    #[test]
    fn test_evaluate_regions() {
        let table = InterpolationTable::with_regions(
            vec![1.0, 2.0, 3.0, 4.0],
            vec![4.0, 3.0, 2.0, 1.0],
            vec![1, 3],
            vec![InterpolationType::Histogram, InterpolationType::LinearLinear],
        )
        .unwrap();
        assert_eq!(None, table.interpolation());
        assert_eq!(4.0, table.evaluate(1.5));
        assert_eq!(3.0, table.evaluate(2.0));
        assert_eq!(2.5, table.evaluate(2.5));
    }

    #[test]
    fn test_linearise() {
        let (x, y) = log_linear().linearise().unwrap();
        assert_eq!(21, x.len());
        assert_eq!(21, y.len());
        for i in 0..=4 {
            assert_relative_eq!(1.0 + 0.25 * i as f64, x[i]);
        }
        for i in 4..=20 {
            assert_relative_eq!(2.0 + 0.125 * (i - 4) as f64, x[i]);
        }
        assert_relative_eq!(3.72241943640840, y[1], max_relative = 1e-12);
        assert_relative_eq!(2.85173947486242, y[5], max_relative = 1e-12);
        assert_relative_eq!(1.83400808640934, y[13], max_relative = 1e-12);
        assert_eq!(1.0, y[20]);
    }

    #[test]
    fn test_linearise_histogram() {
        let table = InterpolationTable::histogram(vec![1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0]).unwrap();
        let (x, y) = table.linearise().unwrap();
        assert_eq!(vec![1.0, 2.0 - 2.0 * f64::EPSILON, 2.0, 3.0 - 3.0 * f64::EPSILON, 3.0], x);
        assert_eq!(vec![1.0, 1.0, 2.0, 2.0, 3.0], y);
    }

    #[test]
    fn test_linearise_histogram_subnormal_point() {
        let table = InterpolationTable::histogram(vec![0.0, 1e-320, 1.0], vec![1.0, 2.0, 3.0]).unwrap();
        let (x, y) = table.linearise().unwrap();
        assert_eq!(vec![0.0, 1e-320, 1.0 - f64::EPSILON, 1.0], x);
        assert_eq!(vec![1.0, 2.0, 2.0, 3.0], y);

        let linearised = table.linearised().unwrap();
        assert_eq!(4, linearised.number_points());
    }

    #[test]
    fn test_linearise_regions_share_boundaries() {
        let table = InterpolationTable::with_regions(
            vec![1.0, 2.0, 3.0, 4.0],
            vec![4.0, 3.0, 2.0, 1.0],
            vec![1, 3],
            vec![InterpolationType::LinearLinear, InterpolationType::LogarithmicLinear],
        )
        .unwrap();
        let (x, y) = table.linearise().unwrap();
        assert_eq!(&[1.0, 2.0, 2.125], &x[..3]);
        assert_eq!(&[4.0, 3.0], &y[..2]);
        assert_eq!(18, x.len());
        assert!(x.windows(2).all(|pair| pair[0] < pair[1]));

        let linearised = table.linearised().unwrap();
        assert_eq!(Some(InterpolationType::LinearLinear), linearised.interpolation());
        assert_eq!(x, linearised.x());
    }

    #[test]
    fn test_integral() {
        let table = InterpolationTable::new(vec![0.0, 1.0, 3.0], vec![0.0, 2.0, 2.0]).unwrap();
        assert_eq!(5.0, table.integral());
        let histogram = InterpolationTable::histogram(vec![0.0, 1.0, 3.0], vec![1.0, 2.0, 5.0]).unwrap();
        assert_eq!(5.0, histogram.integral());
    }
}
