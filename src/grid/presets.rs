//! Convenience constructors and variant-specific accessors
//!
//! Pure configuration sugar: each constructor only fills in a distribution,
//! nothing is computed until the first query.

use super::GridGenerator;
use crate::distribution::function::FunctionDistribution;
use crate::distribution::geometric::GeometricDistribution;

impl GridGenerator<GeometricDistribution> {
    /// Equally spaced nodes
    pub fn uniform(coordinate_first: f64, coordinate_last: f64, num_nodes: usize) -> Self {
        Self::new(coordinate_first, coordinate_last, num_nodes, GeometricDistribution::uniform())
    }

    /// Interval lengths growing by `growth_factor` from the first node
    pub fn geometric(coordinate_first: f64, coordinate_last: f64, num_nodes: usize, growth_factor: f64) -> Self {
        Self::new(
            coordinate_first,
            coordinate_last,
            num_nodes,
            GeometricDistribution::new(false, growth_factor, 1.0),
        )
    }

    /// Interval lengths growing by `growth_factor` outward from the center
    pub fn centered(coordinate_first: f64, coordinate_last: f64, num_nodes: usize, growth_factor: f64) -> Self {
        Self::new(
            coordinate_first,
            coordinate_last,
            num_nodes,
            GeometricDistribution::new(true, growth_factor, 1.0),
        )
    }

    /// Geometric from the first node, positions multiplied by `scaling_factor`
    pub fn scaled(
        coordinate_first: f64,
        coordinate_last: f64,
        num_nodes: usize,
        growth_factor: f64,
        scaling_factor: f64,
    ) -> Self {
        Self::new(
            coordinate_first,
            coordinate_last,
            num_nodes,
            GeometricDistribution::new(false, growth_factor, scaling_factor),
        )
    }

    /// Centered geometric, positions multiplied by `scaling_factor`
    pub fn centered_scaled(
        coordinate_first: f64,
        coordinate_last: f64,
        num_nodes: usize,
        growth_factor: f64,
        scaling_factor: f64,
    ) -> Self {
        Self::new(
            coordinate_first,
            coordinate_last,
            num_nodes,
            GeometricDistribution::new(true, growth_factor, scaling_factor),
        )
    }

    pub fn is_centered(&self) -> bool {
        self.lock().distribution.centered()
    }

    pub fn set_centered(&self, centered: bool) {
        self.lock().distribution.set_centered(centered);
    }

    pub fn growth_factor(&self) -> f64 {
        self.lock().distribution.growth_factor()
    }

    pub fn set_growth_factor(&self, growth_factor: f64) {
        self.lock().distribution.set_growth_factor(growth_factor);
    }

    pub fn scaling_factor(&self) -> f64 {
        self.lock().distribution.scaling_factor()
    }

    pub fn set_scaling_factor(&self, scaling_factor: f64) {
        self.lock().distribution.set_scaling_factor(scaling_factor);
    }
}

impl GridGenerator<FunctionDistribution> {
    /// Nodes placed by `function` sampled over `[argument_first, argument_last]`
    pub fn function_driven<F>(
        coordinate_first: f64,
        coordinate_last: f64,
        num_nodes: usize,
        function: F,
        argument_first: f64,
        argument_last: f64,
    ) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self::new(
            coordinate_first,
            coordinate_last,
            num_nodes,
            FunctionDistribution::new(function, argument_first, argument_last),
        )
    }

    pub fn set_function<F>(&self, function: F)
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.lock().distribution.set_function(function);
    }

    pub fn argument_first(&self) -> f64 {
        self.lock().distribution.argument_first()
    }

    pub fn argument_last(&self) -> f64 {
        self.lock().distribution.argument_last()
    }

    /// Set the sampling domain under a single lock acquisition
    pub fn set_argument_range(&self, argument_first: f64, argument_last: f64) {
        let mut state = self.lock();
        state.distribution.set_argument_first(argument_first);
        state.distribution.set_argument_last(argument_last);
    }
}
