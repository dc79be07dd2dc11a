#![warn(missing_docs)]
//! Adaptive linearisation of functions of one variable.
//!
//! A [`Lineariser`] takes a callable, an initial grid and two policies, and refines the grid
//! until linear interpolation between consecutive points reproduces the callable within the
//! tolerance of the [`ConvergenceCriterion`]. Where each panel gets split is decided by the
//! [`SplitStrategy`].
//!
//! # Example
//!
//! ```
//! use lintab_linearise::{Lineariser, MidpointSplit, ToleranceConvergence};
//!
//! let mut x = Vec::new();
//! let mut y = Vec::new();
//! let convergence = ToleranceConvergence::new(0.25).unwrap();
//!
//! Lineariser::new(&mut x, &mut y)
//!     .linearise(&[0.0, 10.0], f64::exp, &convergence, &MidpointSplit)
//!     .unwrap();
//!
//! assert_eq!(9, x.len());
//! assert_eq!(1.25, x[1]);
//! ```

pub mod config;
pub mod convergence;
pub mod error;
pub mod lineariser;
pub mod split;

pub use config::LineariserConfig;
pub use convergence::{AbsoluteConvergence, ConvergenceCriterion, ToleranceConvergence};
pub use error::LinearisationError;
pub use lineariser::Lineariser;
pub use split::{LogarithmicSplit, MidpointSplit, SplitStrategy};
