//! Grid output
//!
//! A [`GridReport`] is a snapshot of a calculated grid together with the
//! configuration that produced it. It is rendered as a text table, CSV, or
//! JSON, to a file or to stdout.

pub mod csv;
pub mod json;
pub mod text;

use crate::config::{Config, DistributionConfig, GridConfig, OutputConfig, OutputFormat};
use crate::distribution::UnitDistribution;
use crate::error::GridResult;
use crate::grid::GridGenerator;
use crate::Result;
use anyhow::Context;
use chrono::Utc;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Calculated grid plus the settings that produced it
#[derive(Debug, Clone, Serialize)]
pub struct GridReport {
    /// RFC 3339 timestamp of report creation
    pub generated_at: String,
    pub grid: GridConfig,
    pub distribution: DistributionConfig,
    pub nodes: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_lengths: Option<Vec<f64>>,
}

impl GridReport {
    /// Snapshot a generator's nodes, calculating them if necessary
    ///
    /// Nodes, bounds and interval lengths are read under a single lock so the
    /// report is consistent even if another thread reconfigures the generator.
    pub fn from_generator<D: UnitDistribution>(
        generator: &GridGenerator<D>,
        config: &Config,
    ) -> GridResult<Self> {
        let nodes = generator.nodes_ref()?;
        let interval_lengths = if config.output.include_intervals {
            Some(nodes.interval_lengths())
        } else {
            None
        };

        Ok(Self {
            generated_at: Utc::now().to_rfc3339(),
            grid: GridConfig {
                first: nodes.coordinate_first(),
                last: nodes.coordinate_last(),
                num_nodes: nodes.len(),
            },
            distribution: config.distribution.clone(),
            nodes: nodes.to_vec(),
            interval_lengths,
        })
    }

    /// Interval length following node `index`, if intervals are included
    pub fn interval_after(&self, index: usize) -> Option<f64> {
        self.interval_lengths
            .as_ref()
            .and_then(|lengths| lengths.get(index).copied())
    }
}

/// Render `report` in the configured format into `writer`
pub fn render<W: Write>(report: &GridReport, output: &OutputConfig, writer: &mut W) -> Result<()> {
    match output.format {
        OutputFormat::Text => text::write_text(report, output.precision, writer)?,
        OutputFormat::Csv => csv::write_csv(report, writer)?,
        OutputFormat::Json => json::write_json(report, writer)?,
    }
    writer.flush()?;
    Ok(())
}

/// Write `report` to the configured output file, or stdout when none is set
pub fn write_report(report: &GridReport, output: &OutputConfig) -> Result<()> {
    match output.path {
        Some(ref path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            render(report, output, &mut writer)
                .with_context(|| format!("Failed to write output file: {}", path.display()))
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            render(report, output, &mut writer)
        }
    }
}
