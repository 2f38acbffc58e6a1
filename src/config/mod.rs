//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.

pub mod cli;
pub mod cli_convert;
pub mod toml;
pub mod validator;

use crate::distribution::function::{FunctionDistribution, NamedFunction};
use crate::distribution::geometric::GeometricDistribution;
use crate::distribution::DistributionKind;
use crate::grid::GridGenerator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Complete grid generation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub distribution: DistributionConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Interval and node count
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GridConfig {
    /// First coordinate of the interval
    #[serde(default)]
    pub first: f64,
    /// Last coordinate of the interval
    #[serde(default = "default_one")]
    pub last: f64,
    /// Number of nodes (>= 2)
    #[serde(default = "default_num_nodes")]
    pub num_nodes: usize,
}

fn default_one() -> f64 {
    1.0
}

fn default_num_nodes() -> usize {
    2
}

fn default_true() -> bool {
    true
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            first: 0.0,
            last: default_one(),
            num_nodes: default_num_nodes(),
        }
    }
}

/// Node spacing law
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DistributionConfig {
    /// Equal spacing
    Uniform,
    /// Geometric growth from the first node or from the center
    Geometric {
        #[serde(default = "default_one")]
        growth_factor: f64,
        #[serde(default)]
        centered: bool,
        #[serde(default = "default_one")]
        scaling_factor: f64,
    },
    /// Built-in monotone function sampled over an argument range
    Function {
        function: NamedFunction,
        #[serde(default)]
        argument_first: f64,
        #[serde(default = "default_one")]
        argument_last: f64,
    },
}

impl Default for DistributionConfig {
    fn default() -> Self {
        Self::Uniform
    }
}

impl DistributionConfig {
    /// Runtime distribution for this configuration
    pub fn to_distribution(&self) -> DistributionKind {
        match *self {
            DistributionConfig::Uniform => GeometricDistribution::uniform().into(),
            DistributionConfig::Geometric {
                growth_factor,
                centered,
                scaling_factor,
            } => GeometricDistribution::new(centered, growth_factor, scaling_factor).into(),
            DistributionConfig::Function {
                function,
                argument_first,
                argument_last,
            } => FunctionDistribution::from_named(function, argument_first, argument_last).into(),
        }
    }
}

/// Output format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
}

impl Default for OutputFormat {
    fn default() -> Self {
        Self::Text
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
    /// Output file path (stdout when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Include interval lengths alongside the nodes
    #[serde(default = "default_true")]
    pub include_intervals: bool,
    /// Digits after the decimal point in text output
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_precision() -> usize {
    6
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            path: None,
            include_intervals: default_true(),
            precision: default_precision(),
        }
    }
}

impl Config {
    /// Build a (not yet calculated) generator from this configuration
    pub fn build_generator(&self) -> GridGenerator {
        GridGenerator::new(
            self.grid.first,
            self.grid.last,
            self.grid.num_nodes,
            self.distribution.to_distribution(),
        )
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Configuration:")?;
        writeln!(f, "  Grid: {}", self.grid)?;
        writeln!(f, "  Distribution: {}", self.distribution)?;
        writeln!(f, "  Output: {}", self.output)?;
        Ok(())
    }
}

impl fmt::Display for GridConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}], {} nodes", self.first, self.last, self.num_nodes)
    }
}

impl fmt::Display for DistributionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistributionConfig::Uniform => write!(f, "uniform"),
            DistributionConfig::Geometric {
                growth_factor,
                centered,
                scaling_factor,
            } => {
                write!(f, "geometric (growth={}", growth_factor)?;
                if *centered {
                    write!(f, ", centered")?;
                }
                if *scaling_factor != 1.0 {
                    write!(f, ", scaling={}", scaling_factor)?;
                }
                write!(f, ")")
            }
            DistributionConfig::Function {
                function,
                argument_first,
                argument_last,
            } => write!(f, "function {} over [{}, {}]", function, argument_first, argument_last),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl fmt::Display for OutputConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format)?;
        match &self.path {
            Some(path) => write!(f, " -> {}", path.display())?,
            None => write!(f, " -> stdout")?,
        }
        if !self.include_intervals {
            write!(f, ", nodes only")?;
        }
        Ok(())
    }
}
