//! The adaptive linearisation algorithm.
use crate::{ConvergenceCriterion, LinearisationError, LineariserConfig, SplitStrategy};
use num_traits::Float;

/// A panel of the grid under refinement, with the function values at its ends.
#[derive(Debug, Copy, Clone)]
struct Panel<T> {
    x_left: T,
    x_right: T,
    y_left: T,
    y_right: T,
    depth: usize,
}

impl<T: Float> Panel<T> {
    /// Linear interpolation between the panel ends.
    fn estimate(&self, x: T) -> T {
        self.y_left + (x - self.x_left) / (self.x_right - self.x_left) * (self.y_right - self.y_left)
    }

    fn split(&self, x_mid: T, y_mid: T) -> (Self, Self) {
        let depth = self.depth + 1;
        let left = Self {
            x_right: x_mid,
            y_right: y_mid,
            depth,
            ..*self
        };
        let right = Self {
            x_left: x_mid,
            y_left: y_mid,
            depth,
            ..*self
        };
        (left, right)
    }
}

fn to_f64<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Linearises functions into a pair of output vectors.
///
/// The lineariser is bound to the `x` and `y` vectors it appends to. Each call to
/// [`Lineariser::linearise`] appends one strictly increasing run of points, so the same
/// lineariser must not be reused for overlapping grids.
///
/// Refinement uses an explicit work list instead of recursion: panels are processed left to
/// right, and a panel that fails the convergence test is replaced by its two halves. Each
/// panel is judged only on its own split point, so different parts of the grid end up at
/// different refinement depths.
#[derive(Debug)]
pub struct Lineariser<'a, T> {
    x: &'a mut Vec<T>,
    y: &'a mut Vec<T>,
    config: LineariserConfig,
}

impl<'a, T> Lineariser<'a, T> {
    /// Creates a lineariser appending to `x` and `y`, with the default [`LineariserConfig`].
    pub fn new(x: &'a mut Vec<T>, y: &'a mut Vec<T>) -> Self {
        Self {
            x,
            y,
            config: LineariserConfig::default(),
        }
    }

    /// Returns this lineariser with different resource limits.
    pub fn with_config(mut self, config: LineariserConfig) -> Self {
        self.config = config;
        self
    }

    /// The resource limits of this lineariser.
    pub fn config(&self) -> &LineariserConfig {
        &self.config
    }
}

impl<T: Float> Lineariser<'_, T> {
    /// Linearises `function` starting from the initial `grid`.
    ///
    /// The function is evaluated once at every grid point, then each panel is probed at the
    /// point chosen by `split` and subdivided until `convergence` accepts the linear estimate.
    /// Every initial grid point appears in the output.
    ///
    /// # Returns
    ///
    /// The number of points appended to the output vectors. On error, nothing is appended.
    ///
    /// # Errors
    ///
    /// - [`LinearisationError::TooFewPoints`] or [`LinearisationError::InvalidGrid`] when the
    ///   grid has fewer than two points or is not strictly increasing.
    /// - [`LinearisationError::InvalidSplit`] when `split` returns a point outside a panel,
    ///   which also happens once panels shrink to the floating point resolution.
    /// - [`LinearisationError::MaxDepthExceeded`] and
    ///   [`LinearisationError::PointBudgetExceeded`] when the limits of the
    ///   [`LineariserConfig`] are hit.
    #[profiling::function]
    pub fn linearise<F, C, S>(
        &mut self,
        grid: &[T],
        function: F,
        convergence: &C,
        split: &S,
    ) -> Result<usize, LinearisationError>
    where
        F: Fn(T) -> T,
        C: ConvergenceCriterion<T> + ?Sized,
        S: SplitStrategy<T> + ?Sized,
    {
        validate_grid(grid)?;

        let values: Vec<T> = grid.iter().map(|&x| function(x)).collect();
        // Last panel first: popping from the end yields the panels left to right.
        let mut panels: Vec<Panel<T>> = (1..grid.len())
            .rev()
            .map(|i| Panel {
                x_left: grid[i - 1],
                x_right: grid[i],
                y_left: values[i - 1],
                y_right: values[i],
                depth: 0,
            })
            .collect();
        log::debug!("Linearising over {} initial panels", panels.len());

        let mut x = Vec::with_capacity(grid.len());
        let mut y = Vec::with_capacity(grid.len());
        while let Some(panel) = panels.pop() {
            let x_mid = split.split(panel.x_left, panel.x_right);
            if !(panel.x_left < x_mid && x_mid < panel.x_right) {
                return Err(LinearisationError::InvalidSplit {
                    x_left: to_f64(panel.x_left),
                    x_right: to_f64(panel.x_right),
                    x_mid: to_f64(x_mid),
                });
            }

            let y_mid = function(x_mid);
            let estimate = panel.estimate(x_mid);
            if convergence.is_converged(panel.x_left, panel.x_right, x_mid, estimate, y_mid) {
                // The final grid point is still to come
                if x.len() + 2 > self.config.max_points {
                    return Err(LinearisationError::PointBudgetExceeded(self.config.max_points));
                }
                x.push(panel.x_left);
                y.push(panel.y_left);
                continue;
            }

            if panel.depth >= self.config.max_depth {
                return Err(LinearisationError::MaxDepthExceeded {
                    max_depth: self.config.max_depth,
                    x_left: to_f64(panel.x_left),
                    x_right: to_f64(panel.x_right),
                });
            }
            log::trace!(
                "Splitting panel [{:?}, {:?}] at depth {}",
                panel.x_left.to_f64(),
                panel.x_right.to_f64(),
                panel.depth
            );
            let (left, right) = panel.split(x_mid, y_mid);
            panels.push(right);
            panels.push(left);
        }

        let last = grid.len() - 1;
        x.push(grid[last]);
        y.push(values[last]);

        log::debug!("Linearisation produced {} points from {} grid points", x.len(), grid.len());
        let count = x.len();
        self.x.append(&mut x);
        self.y.append(&mut y);
        Ok(count)
    }
}

fn validate_grid<T: Float>(grid: &[T]) -> Result<(), LinearisationError> {
    if grid.len() < 2 {
        return Err(LinearisationError::TooFewPoints(grid.len()));
    }
    match grid.windows(2).position(|pair| !(pair[0] < pair[1])) {
        Some(i) => Err(LinearisationError::InvalidGrid { index: i + 1 }),
        None => Ok(()),
    }
}
