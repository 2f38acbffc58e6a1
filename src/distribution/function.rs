//! Function-driven distribution
//!
//! Node positions follow an arbitrary monotone function: the function is
//! sampled at equidistant arguments across `[argument_first, argument_last]`
//! and the sampled values are rescaled so that `f(argument_first)` maps to 0
//! and `f(argument_last)` maps to 1.
//!
//! Monotonicity is the caller's responsibility. A function that is not
//! monotone on the sampling domain silently yields a non-monotone sequence
//! that may leave `[0, 1]`.
//!
//! # Example
//!
//! ```
//! use gridgen::distribution::function::function_factors;
//!
//! let square = |x: f64| x * x;
//! let factors = function_factors(3, Some(&square), 0.0, 2.0).unwrap();
//! assert_eq!(factors, vec![0.0, 0.25, 1.0]);
//! ```

use super::UnitDistribution;
use crate::error::{GridError, GridResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Shared, thread-safe distribution function
pub type DistributionFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Function-driven spacing law
#[derive(Clone)]
pub struct FunctionDistribution {
    /// Function sampled to place nodes (None until configured)
    function: Option<DistributionFn>,

    /// First sampling argument
    argument_first: f64,

    /// Last sampling argument
    argument_last: f64,
}

impl FunctionDistribution {
    /// Create a new function-driven distribution sampling `[argument_first, argument_last]`
    pub fn new<F>(function: F, argument_first: f64, argument_last: f64) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self {
            function: Some(Arc::new(function)),
            argument_first,
            argument_last,
        }
    }

    /// Create a distribution from one of the built-in functions
    pub fn from_named(function: NamedFunction, argument_first: f64, argument_last: f64) -> Self {
        Self::new(move |x| function.evaluate(x), argument_first, argument_last)
    }

    pub fn function(&self) -> Option<&DistributionFn> {
        self.function.as_ref()
    }

    pub fn set_function<F>(&mut self, function: F)
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.function = Some(Arc::new(function));
    }

    /// Remove the configured function; computing afterwards fails
    pub fn clear_function(&mut self) {
        self.function = None;
    }

    pub fn argument_first(&self) -> f64 {
        self.argument_first
    }

    pub fn set_argument_first(&mut self, argument_first: f64) {
        self.argument_first = argument_first;
    }

    pub fn argument_last(&self) -> f64 {
        self.argument_last
    }

    pub fn set_argument_last(&mut self, argument_last: f64) {
        self.argument_last = argument_last;
    }
}

impl Default for FunctionDistribution {
    fn default() -> Self {
        Self {
            function: None,
            argument_first: 0.0,
            argument_last: 1.0,
        }
    }
}

impl fmt::Debug for FunctionDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionDistribution")
            .field("function", &self.function.as_ref().map(|_| "<fn>"))
            .field("argument_first", &self.argument_first)
            .field("argument_last", &self.argument_last)
            .finish()
    }
}

impl UnitDistribution for FunctionDistribution {
    fn canonical_domain(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    fn unit_positions(&self, num_elements: usize) -> GridResult<Vec<f64>> {
        function_factors(
            num_elements,
            self.function.as_deref(),
            self.argument_first,
            self.argument_last,
        )
    }
}

/// Compute canonical positions by sampling `function`
///
/// The function is evaluated at `num_elements` equidistant arguments from
/// `argument_first` to `argument_last` (both ends exact) and each value `v`
/// becomes `(v - f(first)) / (f(last) - f(first))`.
///
/// # Errors
///
/// - [`GridError::TooFewNodes`] if `num_elements < 2`
/// - [`GridError::MissingFunction`] if `function` is `None`
/// - [`GridError::EmptyArgumentRange`] if `argument_first == argument_last`
/// - [`GridError::UndefinedFunctionValue`] if any sample is NaN or infinite
/// - [`GridError::DegenerateFunctionRange`] if `f(first) == f(last)`
pub fn function_factors(
    num_elements: usize,
    function: Option<&(dyn Fn(f64) -> f64 + Send + Sync)>,
    argument_first: f64,
    argument_last: f64,
) -> GridResult<Vec<f64>> {
    if num_elements < 2 {
        return Err(GridError::TooFewNodes(num_elements));
    }
    let function = function.ok_or(GridError::MissingFunction)?;
    if argument_first == argument_last {
        return Err(GridError::EmptyArgumentRange(argument_first));
    }

    let intervals = num_elements - 1;
    let step = (argument_last - argument_first) / intervals as f64;

    let mut values = Vec::with_capacity(num_elements);
    for i in 0..num_elements {
        let argument = if i == intervals {
            argument_last
        } else {
            argument_first + step * i as f64
        };
        let value = function(argument);
        if !value.is_finite() {
            return Err(GridError::UndefinedFunctionValue { argument, value });
        }
        values.push(value);
    }

    let low = values[0];
    let high = values[intervals];
    if high == low {
        return Err(GridError::DegenerateFunctionRange(low));
    }

    let range = high - low;
    for value in &mut values {
        *value = (*value - low) / range;
    }

    Ok(values)
}

/// Built-in monotone functions selectable from configuration files
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NamedFunction {
    Linear,
    Square,
    Cube,
    Sqrt,
    Exp,
    Ln,
    Tanh,
    Sinh,
    Atan,
}

impl NamedFunction {
    pub fn evaluate(self, x: f64) -> f64 {
        match self {
            NamedFunction::Linear => x,
            NamedFunction::Square => x * x,
            NamedFunction::Cube => x * x * x,
            NamedFunction::Sqrt => x.sqrt(),
            NamedFunction::Exp => x.exp(),
            NamedFunction::Ln => x.ln(),
            NamedFunction::Tanh => x.tanh(),
            NamedFunction::Sinh => x.sinh(),
            NamedFunction::Atan => x.atan(),
        }
    }
}

impl fmt::Display for NamedFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NamedFunction::Linear => "linear",
            NamedFunction::Square => "square",
            NamedFunction::Cube => "cube",
            NamedFunction::Sqrt => "sqrt",
            NamedFunction::Exp => "exp",
            NamedFunction::Ln => "ln",
            NamedFunction::Tanh => "tanh",
            NamedFunction::Sinh => "sinh",
            NamedFunction::Atan => "atan",
        };
        write!(f, "{}", name)
    }
}
