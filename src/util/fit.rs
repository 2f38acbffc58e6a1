//! Interval fitting and interval-length helpers
//!
//! Distributions work in a canonical domain; these helpers map canonical
//! positions onto the real interval and derive the spacing of a node
//! sequence.

use crate::error::{GridError, GridResult};

/// Affinely map `value` from `[min_current, max_current]` onto `[min_target, max_target]`
///
/// `min_current` maps to `min_target` and `max_current` to `max_target`.
/// Values outside the current range extrapolate linearly.
///
/// # Example
///
/// ```
/// use gridgen::util::fit::fit;
///
/// assert_eq!(fit(0.0, 1.0, 10.0, 20.0, 0.5), 15.0);
/// assert_eq!(fit(-1.0, 1.0, 0.0, 4.0, 0.0), 2.0);
/// ```
#[inline]
pub fn fit(min_current: f64, max_current: f64, min_target: f64, max_target: f64, value: f64) -> f64 {
    min_target + (value - min_current) * (max_target - min_target) / (max_current - min_current)
}

/// Fit every element of `values` in place
pub fn fit_in_place(
    values: &mut [f64],
    (min_current, max_current): (f64, f64),
    (min_target, max_target): (f64, f64),
) {
    for value in values.iter_mut() {
        *value = fit(min_current, max_current, min_target, max_target, *value);
    }
}

/// Distances between consecutive nodes: `nodes[i + 1] - nodes[i]`
///
/// Returns an empty vector for fewer than two nodes.
pub fn interval_lengths(nodes: &[f64]) -> Vec<f64> {
    nodes.windows(2).map(|pair| pair[1] - pair[0]).collect()
}

/// Distance between node `index` and node `index + 1`
///
/// # Errors
///
/// [`GridError::IndexOutOfRange`] unless `index < nodes.len() - 1`.
pub fn interval_length(nodes: &[f64], index: usize) -> GridResult<f64> {
    let num_intervals = nodes.len().saturating_sub(1);
    if index >= num_intervals {
        return Err(GridError::IndexOutOfRange {
            what: "interval",
            index,
            len: num_intervals,
        });
    }
    Ok(nodes[index + 1] - nodes[index])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_endpoints() {
        assert_eq!(fit(0.0, 1.0, 3.0, 7.0, 0.0), 3.0);
        assert_eq!(fit(0.0, 1.0, 3.0, 7.0, 1.0), 7.0);
        assert_eq!(fit(-1.0, 1.0, 3.0, 7.0, -1.0), 3.0);
        assert_eq!(fit(-1.0, 1.0, 3.0, 7.0, 1.0), 7.0);
    }

    #[test]
    fn test_fit_reversed_target() {
        assert_eq!(fit(0.0, 1.0, 10.0, 0.0, 0.25), 7.5);
    }

    #[test]
    fn test_fit_extrapolates() {
        assert_eq!(fit(0.0, 1.0, 0.0, 10.0, 2.0), 20.0);
        assert_eq!(fit(0.0, 1.0, 0.0, 10.0, -0.5), -5.0);
    }

    #[test]
    fn test_fit_in_place() {
        let mut values = vec![-1.0, 0.0, 1.0];
        fit_in_place(&mut values, (-1.0, 1.0), (100.0, 200.0));
        assert_eq!(values, vec![100.0, 150.0, 200.0]);
    }

    #[test]
    fn test_interval_lengths() {
        assert_eq!(interval_lengths(&[0.0, 1.0, 3.0, 6.0]), vec![1.0, 2.0, 3.0]);
        assert!(interval_lengths(&[5.0]).is_empty());
        assert!(interval_lengths(&[]).is_empty());
    }

    #[test]
    fn test_interval_length_index() {
        let nodes = [0.0, 1.0, 3.0];
        assert_eq!(interval_length(&nodes, 0), Ok(1.0));
        assert_eq!(interval_length(&nodes, 1), Ok(2.0));
        assert_eq!(
            interval_length(&nodes, 2),
            Err(GridError::IndexOutOfRange { what: "interval", index: 2, len: 2 })
        );
        assert!(interval_length(&[], 0).is_err());
    }
}
