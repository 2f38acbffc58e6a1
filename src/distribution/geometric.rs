//! Geometric distribution
//!
//! Interval lengths form a geometric series: each interval is `growth_factor`
//! times the previous one. The first interval length is chosen so that the
//! series sums to the width of the canonical domain.
//!
//! # Parameters
//!
//! - **growth_factor**: Ratio of consecutive interval lengths (1.0 = uniform)
//! - **centered**: Measure growth outward from the middle of the range instead
//!   of from the first node
//! - **scaling_factor**: Multiplies every canonical position before fitting,
//!   letting the grid over- or under-shoot its nominal bounds
//!
//! # Centered Grids
//!
//! With an odd node count one node sits exactly at the center and the
//! progression starts over on each side, so the two intervals touching the
//! center are equal. With an even node count the central interval straddles
//! the center and the progression continues through it: moving outward the
//! lengths are `c, c*g, c*g^2, ...` on both sides.
//!
//! # Example
//!
//! ```
//! use gridgen::distribution::geometric::geometric_factors;
//!
//! let factors = geometric_factors(5, true, 2.0, 1.0).unwrap();
//! assert_eq!(factors[2], 0.0);
//! assert!((factors[3] - 1.0 / 3.0).abs() < 1e-12);
//! ```

use super::UnitDistribution;
use crate::error::{GridError, GridResult};

/// Geometric spacing law
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometricDistribution {
    /// Grow outward from the center of the range
    centered: bool,

    /// Ratio of consecutive interval lengths
    growth_factor: f64,

    /// Multiplier applied to canonical positions
    scaling_factor: f64,
}

impl GeometricDistribution {
    /// Create a new geometric distribution
    ///
    /// Zero factors are read as 1 and a negative growth factor flips the grid
    /// (see [`geometric_factors`]); no combination is rejected here.
    pub fn new(centered: bool, growth_factor: f64, scaling_factor: f64) -> Self {
        Self {
            centered,
            growth_factor,
            scaling_factor,
        }
    }

    /// Equal spacing
    pub fn uniform() -> Self {
        Self::new(false, 1.0, 1.0)
    }

    pub fn centered(&self) -> bool {
        self.centered
    }

    pub fn set_centered(&mut self, centered: bool) {
        self.centered = centered;
    }

    pub fn growth_factor(&self) -> f64 {
        self.growth_factor
    }

    pub fn set_growth_factor(&mut self, growth_factor: f64) {
        self.growth_factor = growth_factor;
    }

    pub fn scaling_factor(&self) -> f64 {
        self.scaling_factor
    }

    pub fn set_scaling_factor(&mut self, scaling_factor: f64) {
        self.scaling_factor = scaling_factor;
    }
}

impl Default for GeometricDistribution {
    fn default() -> Self {
        Self::uniform()
    }
}

impl UnitDistribution for GeometricDistribution {
    fn canonical_domain(&self) -> (f64, f64) {
        if self.centered {
            (-1.0, 1.0)
        } else {
            (0.0, 1.0)
        }
    }

    fn unit_positions(&self, num_elements: usize) -> GridResult<Vec<f64>> {
        geometric_factors(
            num_elements,
            self.centered,
            self.growth_factor,
            self.scaling_factor,
        )
    }
}

/// Compute canonical positions of a geometric grid
///
/// Returns `num_elements` positions covering `[0, 1]`, or `[-1, 1]` when
/// `centered`, each multiplied by the scaling factor.
///
/// A growth factor or scaling factor of exactly 0 is read as 1. A negative
/// growth factor is replaced by its absolute value and its sign moves onto
/// the scaling factor.
///
/// # Errors
///
/// [`GridError::TooFewNodes`] if `num_elements < 2`.
pub fn geometric_factors(
    num_elements: usize,
    centered: bool,
    growth_factor: f64,
    scaling_factor: f64,
) -> GridResult<Vec<f64>> {
    if num_elements < 2 {
        return Err(GridError::TooFewNodes(num_elements));
    }

    let (growth, scaling) = normalize_factors(growth_factor, scaling_factor);

    let mut factors = if centered {
        centered_factors(num_elements, growth)
    } else {
        edge_factors(num_elements, growth)
    };

    if scaling != 1.0 {
        for factor in &mut factors {
            *factor *= scaling;
        }
    }

    Ok(factors)
}

/// Sum of the first `terms` powers of `growth`: `1 + g + ... + g^(terms-1)`
///
/// Uses the closed form `(g^n - 1) / (g - 1)`, falling back to `n` when the
/// ratio is 1. Overflows to infinity for large `g^n`, so the grid
/// normalization only calls it with ratios of at most 1.
pub fn geometric_sum(growth: f64, terms: usize) -> f64 {
    if (growth - 1.0).abs() < f64::EPSILON {
        terms as f64
    } else {
        (growth.powf(terms as f64) - 1.0) / (growth - 1.0)
    }
}

fn normalize_factors(growth_factor: f64, scaling_factor: f64) -> (f64, f64) {
    let mut growth = if growth_factor == 0.0 { 1.0 } else { growth_factor };
    let mut scaling = if scaling_factor == 0.0 { 1.0 } else { scaling_factor };

    if growth < 0.0 {
        growth = -growth;
        scaling = -scaling;
    }

    (growth, scaling)
}

/// `terms` interval lengths `l[i+1] = growth * l[i]` with
/// `first_weight * l[0] + l[1] + ... + l[terms-1] = 1`
///
/// A growing series is normalized by its largest (last) term and filled
/// backward with ratio `1 / growth`, so `growth^terms` is never formed and
/// cannot overflow; the smallest terms underflow towards 0 instead.
fn series_lengths(growth: f64, terms: usize, first_weight: f64) -> Vec<f64> {
    if terms == 0 {
        return Vec::new();
    }

    let mut lengths = vec![0.0; terms];
    if growth <= 1.0 {
        let first = 1.0 / (first_weight + growth * geometric_sum(growth, terms - 1));
        let mut length = first;
        for slot in lengths.iter_mut() {
            *slot = length;
            length *= growth;
        }
    } else {
        let ratio = 1.0 / growth;
        let first_share = ratio.powf((terms - 1) as f64);
        let last = 1.0 / (geometric_sum(ratio, terms) - (1.0 - first_weight) * first_share);
        let mut length = last;
        for slot in lengths.iter_mut().rev() {
            *slot = length;
            length *= ratio;
        }
    }

    lengths
}

/// Positions `0 = p[0] < p[1] < ... < p[n-1] = 1` growing from the first node
fn edge_factors(num_elements: usize, growth: f64) -> Vec<f64> {
    let lengths = series_lengths(growth, num_elements - 1, 1.0);
    let mut factors = accumulate(0.0, &lengths);
    pin_to_unit(&mut factors);
    factors
}

/// Positions covering `[-1, 1]`, symmetric around 0
fn centered_factors(num_elements: usize, growth: f64) -> Vec<f64> {
    let mut factors = Vec::with_capacity(num_elements);

    if num_elements % 2 == 1 {
        // Center node at 0; each half is its own series summing to 1
        let lengths = series_lengths(growth, (num_elements - 1) / 2, 1.0);
        let mut half = accumulate(0.0, &lengths);
        pin_to_unit(&mut half);

        factors.extend(half[1..].iter().rev().map(|p| -p));
        factors.extend_from_slice(&half);
    } else {
        // Central interval c straddles 0: c/2 + c*(g + ... + g^k) = 1
        let lengths = series_lengths(growth, num_elements / 2, 0.5);
        let mut half = accumulate(0.5 * lengths[0], &lengths[1..]);
        pin_to_unit(&mut half);

        factors.extend(half.iter().rev().map(|p| -p));
        factors.extend_from_slice(&half);
    }

    factors
}

/// `start`, then one more position per entry of `lengths`
fn accumulate(start: f64, lengths: &[f64]) -> Vec<f64> {
    let mut positions = Vec::with_capacity(lengths.len() + 1);
    let mut position = start;

    positions.push(position);
    for length in lengths {
        position += length;
        positions.push(position);
    }

    positions
}

/// Clamp accumulated rounding error so positions end exactly at 1 and never pass it
fn pin_to_unit(positions: &mut [f64]) {
    for position in positions.iter_mut() {
        *position = position.min(1.0);
    }
    if let Some(last) = positions.last_mut() {
        *last = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len(), "length mismatch: {:?} vs {:?}", actual, expected);
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            assert!((a - e).abs() < EPS, "position {}: {} != {} ({:?})", i, a, e, actual);
        }
    }

    fn lengths(factors: &[f64]) -> Vec<f64> {
        factors.windows(2).map(|w| w[1] - w[0]).collect()
    }

    #[test]
    fn test_geometric_sum() {
        assert_eq!(geometric_sum(1.0, 4), 4.0);
        assert!((geometric_sum(2.0, 3) - 7.0).abs() < EPS);
        assert!((geometric_sum(0.5, 2) - 1.5).abs() < EPS);
        assert_eq!(geometric_sum(3.0, 0), 0.0);
    }

    #[test]
    fn test_uniform() {
        let factors = geometric_factors(5, false, 1.0, 1.0).unwrap();
        assert_close(&factors, &[0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn test_two_nodes() {
        assert_close(&geometric_factors(2, false, 3.0, 1.0).unwrap(), &[0.0, 1.0]);
        assert_close(&geometric_factors(2, true, 3.0, 1.0).unwrap(), &[-1.0, 1.0]);
    }

    #[test]
    fn test_growing_from_edge() {
        let factors = geometric_factors(3, false, 2.0, 1.0).unwrap();
        assert_close(&factors, &[0.0, 1.0 / 3.0, 1.0]);

        let factors = geometric_factors(4, false, 2.0, 1.0).unwrap();
        assert_close(&factors, &[0.0, 1.0 / 7.0, 3.0 / 7.0, 1.0]);
    }

    #[test]
    fn test_shrinking_from_edge() {
        let factors = geometric_factors(3, false, 0.5, 1.0).unwrap();
        assert_close(&factors, &[0.0, 2.0 / 3.0, 1.0]);
    }

    #[test]
    fn test_consecutive_ratio_is_growth_factor() {
        let factors = geometric_factors(8, false, 1.3, 1.0).unwrap();
        let lengths = lengths(&factors);
        for pair in lengths.windows(2) {
            assert!((pair[1] / pair[0] - 1.3).abs() < 1e-9);
        }
    }

    #[test]
    fn test_centered_odd() {
        let factors = geometric_factors(5, true, 2.0, 1.0).unwrap();
        assert_close(&factors, &[-1.0, -1.0 / 3.0, 0.0, 1.0 / 3.0, 1.0]);

        let factors = geometric_factors(3, true, 5.0, 1.0).unwrap();
        assert_close(&factors, &[-1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_centered_odd_restarts_at_center() {
        let factors = geometric_factors(7, true, 1.5, 1.0).unwrap();
        let lengths = lengths(&factors);
        assert_eq!(factors[3], 0.0);
        // Both intervals touching the center have the same length
        assert!((lengths[2] - lengths[3]).abs() < EPS);
        assert!((lengths[4] / lengths[3] - 1.5).abs() < 1e-9);
        assert!((lengths[1] / lengths[2] - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_centered_even() {
        let factors = geometric_factors(4, true, 2.0, 1.0).unwrap();
        assert_close(&factors, &[-1.0, -0.2, 0.2, 1.0]);

        let c = 1.0 / 6.5;
        let factors = geometric_factors(6, true, 2.0, 1.0).unwrap();
        assert_close(
            &factors,
            &[-1.0, -2.5 * c, -0.5 * c, 0.5 * c, 2.5 * c, 1.0],
        );
    }

    #[test]
    fn test_centered_even_continues_through_center() {
        let factors = geometric_factors(8, true, 1.5, 1.0).unwrap();
        let lengths = lengths(&factors);
        let central = lengths[3];

        // Central interval straddles zero symmetrically
        assert!((factors[3] + factors[4]).abs() < EPS);
        // Neighbours continue the progression instead of restarting it
        assert!((lengths[4] / central - 1.5).abs() < 1e-9);
        assert!((lengths[2] / central - 1.5).abs() < 1e-9);
        assert!((lengths[5] / lengths[4] - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_centered_uniform() {
        let factors = geometric_factors(5, true, 1.0, 1.0).unwrap();
        assert_close(&factors, &[-1.0, -0.5, 0.0, 0.5, 1.0]);

        let factors = geometric_factors(4, true, 1.0, 1.0).unwrap();
        assert_close(&factors, &[-1.0, -1.0 / 3.0, 1.0 / 3.0, 1.0]);
    }

    #[test]
    fn test_scaling() {
        let factors = geometric_factors(3, false, 1.0, 2.0).unwrap();
        assert_close(&factors, &[0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_zero_factors_read_as_one() {
        let zero = geometric_factors(5, false, 0.0, 0.0).unwrap();
        let one = geometric_factors(5, false, 1.0, 1.0).unwrap();
        assert_eq!(zero, one);
    }

    #[test]
    fn test_negative_growth_folds_into_scaling() {
        let negative = geometric_factors(6, false, -2.0, 1.0).unwrap();
        let flipped = geometric_factors(6, false, 2.0, -1.0).unwrap();
        assert_eq!(negative, flipped);
        assert_close(&negative[..2], &[0.0, -1.0 / 31.0]);

        let negative = geometric_factors(5, true, -3.0, 2.0).unwrap();
        let flipped = geometric_factors(5, true, 3.0, -2.0).unwrap();
        assert_eq!(negative, flipped);
    }

    #[test]
    fn test_too_few_elements() {
        assert_eq!(geometric_factors(1, false, 1.0, 1.0), Err(GridError::TooFewNodes(1)));
        assert_eq!(geometric_factors(0, true, 2.0, 1.0), Err(GridError::TooFewNodes(0)));
    }

    #[test]
    fn test_endpoints_exact_for_many_nodes() {
        for centered in [false, true] {
            for n in [2usize, 3, 10, 101, 1000] {
                let factors = geometric_factors(n, centered, 1.01, 1.0).unwrap();
                assert_eq!(factors.len(), n);
                assert_eq!(factors[n - 1], 1.0);
                assert_eq!(factors[0], if centered { -1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn test_large_growth_series_does_not_collapse() {
        let n = 1100;
        let factors = geometric_factors(n, false, 2.0, 1.0).unwrap();
        assert_eq!(factors[n - 1], 1.0);
        assert!((factors[n - 2] - 0.5).abs() < EPS);
        assert!((factors[n - 3] - 0.25).abs() < EPS);
        assert!((factors[n - 4] - 0.125).abs() < EPS);
        assert!(factors.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_large_growth_centered_does_not_collapse() {
        // Odd: 1100 intervals per half
        let n = 2201;
        let factors = geometric_factors(n, true, 2.0, 1.0).unwrap();
        assert_eq!(factors[1100], 0.0);
        assert!((factors[n - 2] - 0.5).abs() < EPS);
        assert!((factors[n - 3] - 0.25).abs() < EPS);
        assert!((factors[1] + 0.5).abs() < EPS);

        // Even: central interval plus 1100 outward intervals per half
        let n = 2202;
        let factors = geometric_factors(n, true, 2.0, 1.0).unwrap();
        assert_eq!(factors[n - 1], 1.0);
        assert!((factors[n - 2] - 0.5).abs() < EPS);
        assert!((factors[n - 3] - 0.25).abs() < EPS);
        assert!((factors[0] + 1.0).abs() < EPS);
        assert!(factors.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_large_growth_keeps_ratio() {
        let factors = geometric_factors(8000, false, 1.1, 1.0).unwrap();
        let lengths = lengths(&factors);
        let last = lengths.len() - 1;
        for i in (last - 50)..last {
            assert!((lengths[i + 1] / lengths[i] - 1.1).abs() < 1e-6);
        }
    }

    #[test]
    fn test_shrinking_series_many_nodes() {
        let n = 1100;
        let factors = geometric_factors(n, false, 0.5, 1.0).unwrap();
        assert!((factors[1] - 0.5).abs() < EPS);
        assert!((factors[2] - 0.75).abs() < EPS);
        assert_eq!(factors[n - 1], 1.0);
    }

    #[test]
    fn test_distribution_accessors() {
        let mut dist = GeometricDistribution::default();
        assert!(!dist.centered());
        assert_eq!(dist.growth_factor(), 1.0);
        assert_eq!(dist.scaling_factor(), 1.0);

        dist.set_centered(true);
        dist.set_growth_factor(1.2);
        dist.set_scaling_factor(0.5);
        assert_eq!(dist, GeometricDistribution::new(true, 1.2, 0.5));
        assert_eq!(dist.canonical_domain(), (-1.0, 1.0));
    }
}
