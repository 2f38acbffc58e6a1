//! CLI argument parsing using clap

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// gridgen - 1D grid-point generator
///
/// Values given on the command line override those of the configuration file.
#[derive(Parser, Debug)]
#[command(name = "gridgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    // === Configuration File ===
    /// TOML configuration file
    #[arg(short = 'c', long, env = "GRIDGEN_CONFIG")]
    pub config: Option<PathBuf>,

    // === Grid Options ===
    /// First coordinate of the interval
    #[arg(long, allow_negative_numbers = true)]
    pub first: Option<f64>,

    /// Last coordinate of the interval
    #[arg(long, allow_negative_numbers = true)]
    pub last: Option<f64>,

    /// Number of nodes (at least 2)
    #[arg(short = 'n', long)]
    pub nodes: Option<usize>,

    // === Distribution Options ===
    /// Node distribution (inferred from the other options when omitted)
    #[arg(short = 'd', long, value_enum)]
    pub distribution: Option<DistributionType>,

    /// Ratio of consecutive interval lengths (geometric only)
    #[arg(short = 'g', long, allow_negative_numbers = true)]
    pub growth_factor: Option<f64>,

    /// Grow outward from the center of the interval (geometric only)
    #[arg(long)]
    pub centered: bool,

    /// Grow from the first node, overriding `centered = true` in the config file
    #[arg(long, conflicts_with = "centered")]
    pub no_centered: bool,

    /// Multiplier applied to canonical positions (geometric only)
    #[arg(long, allow_negative_numbers = true)]
    pub scaling_factor: Option<f64>,

    /// Built-in function placing the nodes (function only)
    #[arg(short = 'f', long, value_enum)]
    pub function: Option<FunctionName>,

    /// First function argument (function only)
    #[arg(long, allow_negative_numbers = true)]
    pub arg_first: Option<f64>,

    /// Last function argument (function only)
    #[arg(long, allow_negative_numbers = true)]
    pub arg_last: Option<f64>,

    // === Output Options ===
    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<FormatType>,

    /// Output file path (stdout by default)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Print nodes only, without interval lengths
    #[arg(long)]
    pub no_intervals: bool,

    /// Digits after the decimal point in text output
    #[arg(long)]
    pub precision: Option<usize>,

    /// Dry run - validate configuration without generating
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug output (timing, resolved configuration)
    #[arg(long)]
    pub debug: bool,
}

/// Node distribution type
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DistributionType {
    /// Equally spaced nodes
    Uniform,
    /// Geometrically growing or shrinking intervals
    Geometric,
    /// Nodes placed by a monotone function
    Function,
}

/// Built-in distribution function
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FunctionName {
    /// f(x) = x
    Linear,
    /// f(x) = x^2
    Square,
    /// f(x) = x^3
    Cube,
    /// f(x) = sqrt(x)
    Sqrt,
    /// f(x) = e^x
    Exp,
    /// f(x) = ln(x)
    Ln,
    /// f(x) = tanh(x)
    Tanh,
    /// f(x) = sinh(x)
    Sinh,
    /// f(x) = atan(x)
    Atan,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatType {
    /// Human-readable table
    Text,
    /// Comma-separated values
    Csv,
    /// JSON document
    Json,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    ///
    /// Only checks what can be decided from the command line alone; the
    /// merged configuration is validated by [`crate::config::validator`].
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Some(nodes) = self.nodes {
            if nodes < 2 {
                anyhow::bail!("nodes must be at least 2, got {}", nodes);
            }
        }

        for (name, value) in [
            ("first", self.first),
            ("last", self.last),
            ("growth-factor", self.growth_factor),
            ("scaling-factor", self.scaling_factor),
            ("arg-first", self.arg_first),
            ("arg-last", self.arg_last),
        ] {
            if let Some(value) = value {
                if !value.is_finite() {
                    anyhow::bail!("{} must be a finite number, got {}", name, value);
                }
            }
        }

        if let (Some(first), Some(last)) = (self.arg_first, self.arg_last) {
            if first == last {
                anyhow::bail!("arg-first and arg-last must differ");
            }
        }

        let geometric_options = self.growth_factor.is_some()
            || self.centered
            || self.no_centered
            || self.scaling_factor.is_some();
        let function_options = self.function.is_some() || self.arg_first.is_some() || self.arg_last.is_some();

        match self.distribution {
            Some(DistributionType::Uniform) if geometric_options || function_options => {
                anyhow::bail!("uniform distribution takes no geometric or function options");
            }
            Some(DistributionType::Geometric) if function_options => {
                anyhow::bail!("function options cannot be used with the geometric distribution");
            }
            Some(DistributionType::Function) if geometric_options => {
                anyhow::bail!("geometric options cannot be used with the function distribution");
            }
            None if geometric_options && function_options => {
                anyhow::bail!("cannot mix geometric and function options");
            }
            _ => {}
        }

        if let Some(precision) = self.precision {
            if precision > 17 {
                anyhow::bail!("precision must be at most 17, got {}", precision);
            }
        }

        Ok(())
    }
}
