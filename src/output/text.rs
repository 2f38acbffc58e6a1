//! Human-readable text output

use super::GridReport;
use crate::Result;
use std::io::Write;

const RULE: &str = "═══════════════════════════════════════════════════════════";

/// Write `report` as a table with `precision` digits after the decimal point
pub fn write_text<W: Write>(report: &GridReport, precision: usize, writer: &mut W) -> Result<()> {
    writeln!(writer, "{}", RULE)?;
    writeln!(writer, "                       GRID NODES")?;
    writeln!(writer, "{}", RULE)?;
    writeln!(writer, "Grid:         {}", report.grid)?;
    writeln!(writer, "Distribution: {}", report.distribution)?;
    writeln!(writer, "Generated:    {}", report.generated_at)?;
    writeln!(writer)?;

    let width = column_width(report, precision);
    let with_intervals = report.interval_lengths.is_some();

    if with_intervals {
        writeln!(writer, "{:>6}  {:>w$}  {:>w$}", "index", "node", "interval", w = width)?;
    } else {
        writeln!(writer, "{:>6}  {:>w$}", "index", "node", w = width)?;
    }

    for (index, node) in report.nodes.iter().enumerate() {
        write!(writer, "{:>6}  {:>w$.p$}", index, node, w = width, p = precision)?;
        if with_intervals {
            match report.interval_after(index) {
                Some(length) => write!(writer, "  {:>w$.p$}", length, w = width, p = precision)?,
                None => write!(writer, "  {:>w$}", "-", w = width)?,
            }
        }
        writeln!(writer)?;
    }

    if let Some(ref lengths) = report.interval_lengths {
        if let Some((min, max)) = length_range(lengths) {
            writeln!(writer)?;
            writeln!(writer, "Interval lengths:")?;
            writeln!(writer, "  Min:   {:.p$}", min, p = precision)?;
            writeln!(writer, "  Max:   {:.p$}", max, p = precision)?;
            if min != 0.0 {
                writeln!(writer, "  Ratio: {:.3}", max / min)?;
            }
        }
    }

    Ok(())
}

/// Widest formatted value (or header) across nodes and intervals
fn column_width(report: &GridReport, precision: usize) -> usize {
    let widest = |values: &[f64]| {
        values
            .iter()
            .map(|v| format!("{:.p$}", v, p = precision).len())
            .max()
            .unwrap_or(0)
    };
    let intervals = report.interval_lengths.as_deref().map(widest).unwrap_or(0);
    widest(&report.nodes).max(intervals).max("interval".len())
}

/// Smallest and largest interval length by magnitude
fn length_range(lengths: &[f64]) -> Option<(f64, f64)> {
    let mut iter = lengths.iter().map(|l| l.abs());
    let first = iter.next()?;
    Some(iter.fold((first, first), |(min, max), l| (min.min(l), max.max(l))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DistributionConfig, GridConfig};

    fn report(nodes: Vec<f64>, intervals: bool) -> GridReport {
        let interval_lengths = if intervals {
            Some(crate::util::fit::interval_lengths(&nodes))
        } else {
            None
        };
        GridReport {
            generated_at: "2024-01-01T00:00:00+00:00".to_string(),
            grid: GridConfig { first: nodes[0], last: nodes[nodes.len() - 1], num_nodes: nodes.len() },
            distribution: DistributionConfig::Uniform,
            nodes,
            interval_lengths,
        }
    }

    fn render(report: &GridReport, precision: usize) -> String {
        let mut buf = Vec::new();
        write_text(report, precision, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_table() {
        let text = render(&report(vec![0.0, 0.25, 1.0], true), 3);
        assert!(text.contains("Grid:         [0, 1], 3 nodes"));
        assert!(text.contains("Distribution: uniform"));

        let rows: Vec<&str> = text.lines().filter(|l| l.trim_start().starts_with(char::is_numeric)).collect();
        assert_eq!(rows.len(), 3);
        assert!(rows[0].ends_with("0.000     0.250"));
        assert!(rows[1].ends_with("0.250     0.750"));
        assert!(rows[2].trim_end().ends_with('-'));
    }

    #[test]
    fn test_text_summary() {
        let text = render(&report(vec![0.0, 1.0, 4.0], true), 2);
        assert!(text.contains("Min:   1.00"));
        assert!(text.contains("Max:   3.00"));
        assert!(text.contains("Ratio: 3.000"));
    }

    #[test]
    fn test_text_nodes_only() {
        let text = render(&report(vec![0.0, 1.0], false), 1);
        assert!(!text.contains("interval"));
        assert!(!text.contains("Interval lengths"));
    }

    #[test]
    fn test_length_range_uses_magnitude() {
        assert_eq!(length_range(&[-2.0, -0.5, -1.0]), Some((0.5, 2.0)));
        assert_eq!(length_range(&[]), None);
    }
}
