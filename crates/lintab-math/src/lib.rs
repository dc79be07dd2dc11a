//! Functions of one variable: tabulated data, series and Chebyshev approximations.
//!
//! Every function can be evaluated, queried for its domain and linearised into a
//! piecewise-linear tabulation with the lineariser of [`lintab_linearise`].
//!
//! # Example
//!
//! ```
//! use lintab_math::series::{LegendreSeries, Series};
//!
//! // (x - 1)(x - 2)(x - 4) in the Legendre basis
//! let series = LegendreSeries::new(vec![-31.0 / 3.0, 73.0 / 5.0, -14.0 / 3.0, 2.0 / 5.0]).unwrap();
//! approx::assert_relative_eq!(-8.0, series.evaluate(0.0), epsilon = 1e-12);
//!
//! let (x, y) = series.linearise().unwrap();
//! assert_eq!(-1.0, x[0]);
//! assert_eq!(x.len(), y.len());
//! ```
pub mod clenshaw;
pub mod domain;
pub mod error;
pub mod function;
pub mod horner;
pub mod integration;
pub mod interpolation;
pub mod root_eq;
pub mod series;
pub mod table;

pub use domain::{Domain, IntervalDomain};
pub use error::{DomainError, Error, NewtonError, SeriesError, TableError};
pub use function::Function;
pub use interpolation::InterpolationType;
pub use lintab_linearise as linearise;
pub use table::InterpolationTable;
