//! Cached, thread-safe grid generators
//!
//! A [`GridGenerator`] owns the configuration of a 1D grid (bounds, node
//! count and a [`UnitDistribution`]), computes the nodes on first use and
//! serves node and interval-length queries from its cache.
//!
//! # States
//!
//! - **Uninitialized**: configuration set, no nodes cached
//! - **Calculated**: nodes cached; every query reads the cache
//!
//! [`calculate`](GridGenerator::calculate) moves to Calculated (a no-op when
//! already there) and [`clear`](GridGenerator::clear) moves back. Every query
//! calculates first if needed.
//!
//! Configuration setters do NOT invalidate the cache. After changing the
//! bounds, node count or distribution of a calculated generator, call
//! [`clear`](GridGenerator::clear) before querying again.
//!
//! # Thread Safety
//!
//! All state sits behind one `Mutex` and every public method holds it for
//! its whole duration, so calls on one generator are serialized. Queries that
//! return by value hand out independent copies. [`nodes_ref`](GridGenerator::nodes_ref)
//! instead returns a [`NodesGuard`] that borrows the cache directly and keeps
//! the lock held until it is dropped: a clear or recompute from another thread
//! waits for the guard.
//!
//! # Example
//!
//! ```
//! use gridgen::grid::GeometricGridGenerator;
//!
//! let grid = GeometricGridGenerator::geometric(0.0, 1.0, 3, 2.0);
//! let nodes = grid.nodes().unwrap();
//! assert!((nodes[1] - 1.0 / 3.0).abs() < 1e-12);
//!
//! let lengths = grid.interval_lengths().unwrap();
//! assert_eq!(lengths.len(), 2);
//! ```

pub mod presets;

use crate::distribution::function::FunctionDistribution;
use crate::distribution::geometric::GeometricDistribution;
use crate::distribution::{DistributionKind, UnitDistribution};
use crate::error::{GridError, GridResult};
use crate::util::fit;
use std::ops::Deref;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Generator driven by a geometric distribution
pub type GeometricGridGenerator = GridGenerator<GeometricDistribution>;

/// Generator driven by a sampled function
pub type FunctionGridGenerator = GridGenerator<FunctionDistribution>;

/// 1D grid generator
///
/// Generic over its distribution; [`DistributionKind`] is used when the
/// distribution is only known at runtime (e.g. read from a config file).
#[derive(Debug)]
pub struct GridGenerator<D = DistributionKind> {
    state: Mutex<GridState<D>>,
}

/// Configuration and cache, guarded together
#[derive(Debug)]
struct GridState<D> {
    coordinate_first: f64,
    coordinate_last: f64,
    num_nodes: usize,
    distribution: D,

    /// Cached nodes; `Some` means calculated
    nodes: Option<Vec<f64>>,
}

impl<D: UnitDistribution> GridState<D> {
    /// Run the distribution and fit it onto the configured bounds
    fn generate(&self) -> GridResult<Vec<f64>> {
        if self.num_nodes < 2 {
            return Err(GridError::TooFewNodes(self.num_nodes));
        }

        let mut nodes = self.distribution.unit_positions(self.num_nodes)?;
        fit::fit_in_place(
            &mut nodes,
            self.distribution.canonical_domain(),
            (self.coordinate_first, self.coordinate_last),
        );
        Ok(nodes)
    }

    /// Compute-or-fetch; the cache is only written on success
    fn ensure_calculated(&mut self) -> GridResult<&[f64]> {
        let nodes = match self.nodes.take() {
            Some(nodes) => nodes,
            None => self.generate()?,
        };
        Ok(self.nodes.insert(nodes).as_slice())
    }
}

impl<D> GridGenerator<D> {
    /// Create a generator for `num_nodes` nodes spanning `[coordinate_first, coordinate_last]`
    ///
    /// Nothing is validated or computed here; a node count below 2 is
    /// reported by the first calculation.
    pub fn new(coordinate_first: f64, coordinate_last: f64, num_nodes: usize, distribution: D) -> Self {
        Self {
            state: Mutex::new(GridState {
                coordinate_first,
                coordinate_last,
                num_nodes,
                distribution,
                nodes: None,
            }),
        }
    }

    /// Lock the state
    ///
    /// Poisoning is ignored: the cache is only replaced after a successful
    /// computation, so the state is consistent even if a holder panicked.
    fn lock(&self) -> MutexGuard<'_, GridState<D>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn coordinate_first(&self) -> f64 {
        self.lock().coordinate_first
    }

    pub fn set_coordinate_first(&self, coordinate_first: f64) {
        self.lock().coordinate_first = coordinate_first;
    }

    pub fn coordinate_last(&self) -> f64 {
        self.lock().coordinate_last
    }

    pub fn set_coordinate_last(&self, coordinate_last: f64) {
        self.lock().coordinate_last = coordinate_last;
    }

    /// Set both bounds under a single lock acquisition
    pub fn set_bounds(&self, coordinate_first: f64, coordinate_last: f64) {
        let mut state = self.lock();
        state.coordinate_first = coordinate_first;
        state.coordinate_last = coordinate_last;
    }

    pub fn num_nodes(&self) -> usize {
        self.lock().num_nodes
    }

    pub fn set_num_nodes(&self, num_nodes: usize) {
        self.lock().num_nodes = num_nodes;
    }

    /// `num_nodes - 1` (0 for a misconfigured generator)
    pub fn num_intervals(&self) -> usize {
        self.lock().num_nodes.saturating_sub(1)
    }

    pub fn set_distribution(&self, distribution: D) {
        self.lock().distribution = distribution;
    }

    /// Modify the distribution in place under the lock
    pub fn update_distribution<F>(&self, update: F)
    where
        F: FnOnce(&mut D),
    {
        update(&mut self.lock().distribution);
    }

    /// Whether nodes are currently cached
    pub fn is_calculated(&self) -> bool {
        self.lock().nodes.is_some()
    }

    /// Discard the cached nodes
    pub fn clear(&self) {
        self.lock().nodes = None;
    }
}

impl<D: Clone> GridGenerator<D> {
    /// Copy of the configured distribution
    pub fn distribution(&self) -> D {
        self.lock().distribution.clone()
    }
}

impl<D: UnitDistribution> GridGenerator<D> {
    /// Compute the nodes unless already cached
    ///
    /// # Errors
    ///
    /// Invalid-argument errors from the configuration; the generator stays
    /// uncalculated and usable.
    pub fn calculate(&self) -> GridResult<()> {
        self.lock().ensure_calculated().map(|_| ())
    }

    /// Compute a fresh grid without reading or writing the cache
    pub fn generate(&self) -> GridResult<Vec<f64>> {
        self.lock().generate()
    }

    /// Compute a fresh grid into a caller-owned buffer
    ///
    /// The buffer is replaced entirely on success and left untouched on
    /// failure. The cache is neither read nor updated.
    pub fn calculate_into(&self, nodes: &mut Vec<f64>) -> GridResult<()> {
        let fresh = self.lock().generate()?;
        nodes.clear();
        nodes.extend_from_slice(&fresh);
        Ok(())
    }

    /// Node at `index`
    ///
    /// # Errors
    ///
    /// [`GridError::IndexOutOfRange`] unless `index < num_nodes`.
    pub fn node(&self, index: usize) -> GridResult<f64> {
        let mut state = self.lock();
        let nodes = state.ensure_calculated()?;
        nodes.get(index).copied().ok_or(GridError::IndexOutOfRange {
            what: "node",
            index,
            len: nodes.len(),
        })
    }

    /// Copy of all nodes
    pub fn nodes(&self) -> GridResult<Vec<f64>> {
        let mut state = self.lock();
        Ok(state.ensure_calculated()?.to_vec())
    }

    /// Borrow the cached nodes without copying
    ///
    /// The returned guard holds the generator's lock: other calls on this
    /// generator (from any thread) block until it is dropped, and calling
    /// another method of the same generator on this thread while holding it
    /// deadlocks.
    pub fn nodes_ref(&self) -> GridResult<NodesGuard<'_, D>> {
        let mut state = self.lock();
        state.ensure_calculated()?;
        Ok(NodesGuard { state })
    }

    /// Length of interval `index` (between node `index` and `index + 1`)
    ///
    /// # Errors
    ///
    /// [`GridError::IndexOutOfRange`] unless `index < num_intervals`.
    pub fn interval_length(&self, index: usize) -> GridResult<f64> {
        let mut state = self.lock();
        let nodes = state.ensure_calculated()?;
        fit::interval_length(nodes, index)
    }

    /// All `num_nodes - 1` interval lengths
    pub fn interval_lengths(&self) -> GridResult<Vec<f64>> {
        let mut state = self.lock();
        Ok(fit::interval_lengths(state.ensure_calculated()?))
    }
}

impl<D: Default> Default for GridGenerator<D> {
    /// Two nodes on `[0, 1]` with the distribution's default
    fn default() -> Self {
        Self::new(0.0, 1.0, 2, D::default())
    }
}

/// Scoped, lock-holding view of a generator's cached nodes
///
/// Dereferences to the node slice. The generator cannot be cleared or
/// recomputed while the guard is alive.
pub struct NodesGuard<'a, D> {
    state: MutexGuard<'a, GridState<D>>,
}

impl<D> NodesGuard<'_, D> {
    /// Interval lengths of the borrowed nodes
    pub fn interval_lengths(&self) -> Vec<f64> {
        fit::interval_lengths(self)
    }

    pub fn coordinate_first(&self) -> f64 {
        self.state.coordinate_first
    }

    pub fn coordinate_last(&self) -> f64 {
        self.state.coordinate_last
    }
}

impl<D> Deref for NodesGuard<'_, D> {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        // Only constructed after a successful calculation
        self.state.nodes.as_deref().unwrap_or(&[])
    }
}
