//! gridgen - 1D grid-point generation
//!
//! gridgen discretizes an interval `[first, last]` into a fixed number of
//! nodes and reports the nodes together with the lengths of the intervals
//! between them.
//!
//! # Architecture
//!
//! - **Unit distributions**: spacing laws producing positions in a canonical
//!   domain (geometric growth from an end or from the center, sampled functions)
//! - **Grid generators**: fit canonical positions onto the real interval and
//!   cache the result behind a lock, safe to share between threads
//! - **Configuration**: TOML files merged with command-line overrides
//! - **Output**: text tables, CSV and JSON, to a file or stdout

pub mod config;
pub mod distribution;
pub mod error;
pub mod grid;
pub mod output;
pub mod util;

// Re-export commonly used types
pub use config::Config;
pub use distribution::UnitDistribution;
pub use error::{ErrorKind, GridError, GridResult};
pub use grid::{FunctionGridGenerator, GeometricGridGenerator, GridGenerator, NodesGuard};

/// Result type used throughout gridgen
pub type Result<T> = anyhow::Result<T>;
