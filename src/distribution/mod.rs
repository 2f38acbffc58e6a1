//! Unit distribution algorithms
//!
//! This module provides the spacing laws used to place grid nodes. A unit
//! distribution knows nothing about the real interval being discretized: it
//! produces positions in a canonical domain and the grid generator fits them
//! onto `[coordinate_first, coordinate_last]` afterwards.
//!
//! # Distributions
//!
//! - **Geometric**: consecutive interval lengths grow (or shrink) by a constant
//!   ratio, either from the first node or outward from the center.
//!   A growth factor of 1 is the uniform grid.
//! - **Function**: positions follow a monotone function sampled at equidistant
//!   arguments.
//!
//! # Canonical Domains
//!
//! - Non-centered geometric and function distributions: `[0, 1]`
//! - Centered geometric distributions: `[-1, 1]`
//!
//! # Example
//!
//! ```
//! use gridgen::distribution::{UnitDistribution, geometric::GeometricDistribution};
//!
//! let dist = GeometricDistribution::new(false, 2.0, 1.0);
//! let positions = dist.unit_positions(3).unwrap();
//! assert_eq!(dist.canonical_domain(), (0.0, 1.0));
//! assert!((positions[1] - 1.0 / 3.0).abs() < 1e-12);
//! ```

use crate::error::GridResult;

/// Unit distribution trait
///
/// Implemented by every spacing law a [`GridGenerator`](crate::grid::GridGenerator)
/// can be parameterized with.
///
/// # Thread Safety
///
/// Distributions must be `Send` so a generator can be shared between threads
/// behind its lock.
pub trait UnitDistribution: Send {
    /// Canonical domain `(min, max)` the positions are expressed in
    ///
    /// The grid generator maps `min` onto `coordinate_first` and `max` onto
    /// `coordinate_last`.
    fn canonical_domain(&self) -> (f64, f64);

    /// Compute `num_elements` canonical positions
    ///
    /// # Errors
    ///
    /// Fails with an invalid-argument error if `num_elements < 2` or the
    /// distribution's own configuration is unusable.
    fn unit_positions(&self, num_elements: usize) -> GridResult<Vec<f64>>;
}

pub mod function;
pub mod geometric;

use function::FunctionDistribution;
use geometric::GeometricDistribution;

/// Closed set of distributions a generator can be configured with at runtime
#[derive(Debug, Clone)]
pub enum DistributionKind {
    Geometric(GeometricDistribution),
    Function(FunctionDistribution),
}

impl Default for DistributionKind {
    fn default() -> Self {
        DistributionKind::Geometric(GeometricDistribution::default())
    }
}

impl From<GeometricDistribution> for DistributionKind {
    fn from(dist: GeometricDistribution) -> Self {
        DistributionKind::Geometric(dist)
    }
}

impl From<FunctionDistribution> for DistributionKind {
    fn from(dist: FunctionDistribution) -> Self {
        DistributionKind::Function(dist)
    }
}

impl UnitDistribution for DistributionKind {
    fn canonical_domain(&self) -> (f64, f64) {
        match self {
            DistributionKind::Geometric(dist) => dist.canonical_domain(),
            DistributionKind::Function(dist) => dist.canonical_domain(),
        }
    }

    fn unit_positions(&self, num_elements: usize) -> GridResult<Vec<f64>> {
        match self {
            DistributionKind::Geometric(dist) => dist.unit_positions(num_elements),
            DistributionKind::Function(dist) => dist.unit_positions(num_elements),
        }
    }
}
