//! Resource limits of a linearisation run.

/// Limits applied to a single linearisation run.
///
/// Functions that never satisfy the convergence criterion (discontinuities, NaN-producing
/// functions) would otherwise be refined forever; hitting one of these limits fails the run with
/// a [`LinearisationError`](crate::LinearisationError) instead.
///
/// # Example
///
/// ```
/// use lintab_linearise::LineariserConfig;
///
/// let config = LineariserConfig::default().with_max_points(500).with_max_depth(20);
/// assert_eq!(500, config.max_points);
/// assert_eq!(20, config.max_depth);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct LineariserConfig {
    /// Maximum number of points a single run may produce, both grid ends included.
    pub max_points: usize,
    /// Maximum number of times a panel of the initial grid may be subdivided.
    pub max_depth: usize,
}

impl LineariserConfig {
    /// Default value of [`Self::max_points`].
    pub const DEFAULT_MAX_POINTS: usize = 1_000_000;
    /// Default value of [`Self::max_depth`].
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    /// Creates a new configuration with the given limits.
    pub const fn new(max_points: usize, max_depth: usize) -> Self {
        Self { max_points, max_depth }
    }

    /// Returns this configuration with a different point budget.
    pub const fn with_max_points(mut self, max_points: usize) -> Self {
        self.max_points = max_points;
        self
    }

    /// Returns this configuration with a different depth limit.
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for LineariserConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_POINTS, Self::DEFAULT_MAX_DEPTH)
    }
}
