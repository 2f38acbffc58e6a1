//! TOML configuration file parsing

use super::*;
use crate::config::cli::Cli;
use crate::config::cli_convert;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    parse_toml_string(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<Config> {
    let config: Config = ::toml::from_str(contents)
        .context("Failed to parse TOML configuration")?;

    Ok(config)
}

/// Serialize a configuration back to TOML
pub fn to_toml_string(config: &Config) -> Result<String> {
    ::toml::to_string(config).context("Failed to serialize configuration to TOML")
}

/// Merge CLI arguments with TOML configuration (CLI takes precedence)
pub fn merge_cli_with_config(cli: &Cli, mut config: Config) -> Result<Config> {
    // Override grid settings
    if let Some(first) = cli.first {
        config.grid.first = first;
    }
    if let Some(last) = cli.last {
        config.grid.last = last;
    }
    if let Some(nodes) = cli.nodes {
        config.grid.num_nodes = nodes;
    }

    // Override distribution
    config.distribution = cli_convert::merge_distribution(cli, &config.distribution)?;

    // Override output settings
    if let Some(format) = cli.format {
        config.output.format = cli_convert::convert_format_type(format);
    }
    if let Some(ref path) = cli.output {
        config.output.path = Some(path.clone());
    }
    if cli.no_intervals {
        config.output.include_intervals = false;
    }
    if let Some(precision) = cli.precision {
        config.output.precision = precision;
    }

    Ok(config)
}

/// Load the configuration file named by the CLI (if any) and apply CLI overrides
pub fn load_config(cli: &Cli) -> Result<Config> {
    let base = match cli.config {
        Some(ref path) => parse_toml_file(path)?,
        None => Config::default(),
    };
    merge_cli_with_config(cli, base)
}
