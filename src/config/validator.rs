//! Configuration validation

use super::*;
use anyhow::Result;

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_grid(&config.grid)?;
    validate_distribution(&config.distribution)?;
    validate_output(&config.output)?;

    Ok(())
}

/// Validate grid bounds and node count
pub fn validate_grid(grid: &GridConfig) -> Result<()> {
    if grid.num_nodes < 2 {
        anyhow::bail!("num_nodes must be at least 2, got {}", grid.num_nodes);
    }

    if !grid.first.is_finite() || !grid.last.is_finite() {
        anyhow::bail!(
            "grid bounds must be finite, got [{}, {}]",
            grid.first,
            grid.last
        );
    }

    if grid.first == grid.last {
        eprintln!(
            "Warning: grid bounds are equal ({}); every node will coincide",
            grid.first
        );
    }

    Ok(())
}

/// Validate distribution parameters
pub fn validate_distribution(dist: &DistributionConfig) -> Result<()> {
    match *dist {
        DistributionConfig::Uniform => {}
        DistributionConfig::Geometric {
            growth_factor,
            scaling_factor,
            ..
        } => {
            if !growth_factor.is_finite() {
                anyhow::bail!("growth_factor must be finite, got {}", growth_factor);
            }
            if !scaling_factor.is_finite() {
                anyhow::bail!("scaling_factor must be finite, got {}", scaling_factor);
            }
            if growth_factor == 0.0 {
                eprintln!("Warning: growth_factor 0 is treated as 1 (uniform)");
            }
            if growth_factor < 0.0 {
                eprintln!(
                    "Warning: negative growth_factor {} mirrors the grid (sign moves to scaling_factor)",
                    growth_factor
                );
            }
            if scaling_factor == 0.0 {
                eprintln!("Warning: scaling_factor 0 is treated as 1");
            }
        }
        DistributionConfig::Function {
            argument_first,
            argument_last,
            ..
        } => {
            if !argument_first.is_finite() || !argument_last.is_finite() {
                anyhow::bail!(
                    "function arguments must be finite, got [{}, {}]",
                    argument_first,
                    argument_last
                );
            }
            if argument_first == argument_last {
                anyhow::bail!(
                    "argument_first and argument_last must differ, both are {}",
                    argument_first
                );
            }
        }
    }

    Ok(())
}

/// Validate output configuration
pub fn validate_output(output: &OutputConfig) -> Result<()> {
    if output.precision > 17 {
        anyhow::bail!("precision must be at most 17, got {}", output.precision);
    }

    if let Some(ref path) = output.path {
        if path.as_os_str().is_empty() {
            anyhow::bail!("output path must not be empty");
        }
        if path.is_dir() {
            anyhow::bail!("output path is a directory: {}", path.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distribution::function::NamedFunction;

    #[test]
    fn test_validate_default_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_validate_num_nodes() {
        let mut grid = GridConfig::default();
        grid.num_nodes = 1;
        let err = validate_grid(&grid).unwrap_err();
        assert!(err.to_string().contains("at least 2"));

        grid.num_nodes = 2;
        assert!(validate_grid(&grid).is_ok());
    }

    #[test]
    fn test_validate_bounds() {
        let grid = GridConfig { first: f64::NAN, last: 1.0, num_nodes: 3 };
        assert!(validate_grid(&grid).is_err());

        // Equal bounds only warn
        let grid = GridConfig { first: 1.0, last: 1.0, num_nodes: 3 };
        assert!(validate_grid(&grid).is_ok());

        // Reversed bounds are allowed
        let grid = GridConfig { first: 1.0, last: -1.0, num_nodes: 3 };
        assert!(validate_grid(&grid).is_ok());
    }

    #[test]
    fn test_validate_geometric() {
        let dist = DistributionConfig::Geometric {
            growth_factor: f64::INFINITY,
            centered: false,
            scaling_factor: 1.0,
        };
        assert!(validate_distribution(&dist).is_err());

        // Zero and negative factors are normalized, not rejected
        let dist = DistributionConfig::Geometric {
            growth_factor: -2.0,
            centered: true,
            scaling_factor: 0.0,
        };
        assert!(validate_distribution(&dist).is_ok());
    }

    #[test]
    fn test_validate_function() {
        let dist = DistributionConfig::Function {
            function: NamedFunction::Exp,
            argument_first: 2.0,
            argument_last: 2.0,
        };
        let err = validate_distribution(&dist).unwrap_err();
        assert!(err.to_string().contains("must differ"));

        let dist = DistributionConfig::Function {
            function: NamedFunction::Exp,
            argument_first: 0.0,
            argument_last: 2.0,
        };
        assert!(validate_distribution(&dist).is_ok());
    }

    #[test]
    fn test_validate_output() {
        let mut output = OutputConfig::default();
        output.precision = 20;
        assert!(validate_output(&output).is_err());

        let mut output = OutputConfig::default();
        output.path = Some(std::env::temp_dir());
        assert!(validate_output(&output).is_err());
    }
}
