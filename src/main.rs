//! gridgen CLI entry point

use anyhow::{Context, Result};
use gridgen::config::{cli::Cli, toml, validator, Config};
use gridgen::output::{self, GridReport};
use std::time::Instant;

fn main() -> Result<()> {
    let main_start = Instant::now();

    // Status goes to stderr; stdout carries the grid itself
    eprintln!("gridgen v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("1D grid-point generator");
    eprintln!();

    // Parse CLI arguments
    let cli = Cli::parse_args();
    cli.validate()?;

    // Load configuration file and apply CLI overrides
    let config_start = Instant::now();
    let config = toml::load_config(&cli)?;
    if cli.debug {
        eprintln!(
            "DEBUG TIMING: Config load: {:.3}s",
            config_start.elapsed().as_secs_f64()
        );
    }

    validator::validate_config(&config).context("Configuration validation failed")?;

    print_configuration(&config);

    if cli.dry_run {
        eprintln!();
        eprintln!("Dry run mode - configuration validated successfully");
        return Ok(());
    }

    run(&config, cli.debug)?;

    if cli.debug {
        eprintln!(
            "DEBUG TIMING: Total: {:.3}s",
            main_start.elapsed().as_secs_f64()
        );
    }

    Ok(())
}

/// Generate the grid described by `config` and write the report
fn run(config: &Config, debug: bool) -> Result<()> {
    let generator = config.build_generator();

    let calc_start = Instant::now();
    generator.calculate().context("Grid generation failed")?;
    if debug {
        eprintln!(
            "DEBUG TIMING: Calculate {} nodes: {:.6}s",
            generator.num_nodes(),
            calc_start.elapsed().as_secs_f64()
        );
        eprintln!("DEBUG: Distribution: {:?}", generator.distribution());
    }

    let report = GridReport::from_generator(&generator, config)?;
    output::write_report(&report, &config.output)?;

    if let Some(ref path) = config.output.path {
        eprintln!("Wrote {} nodes to {}", report.nodes.len(), path.display());
    }

    Ok(())
}

fn print_configuration(config: &Config) {
    eprint!("{}", config);
}
