//! CSV output formatting
//!
//! One row per node. Values are written with full round-trip precision so
//! the file can be read back by pandas, R, or a spreadsheet without loss.
//! The interval column of the last node is empty.

use super::GridReport;
use crate::Result;
use std::io::Write;

/// Write `report` as CSV
pub fn write_csv<W: Write>(report: &GridReport, writer: &mut W) -> Result<()> {
    let with_intervals = report.interval_lengths.is_some();

    if with_intervals {
        writeln!(writer, "index,node,interval_length")?;
    } else {
        writeln!(writer, "index,node")?;
    }

    for (index, node) in report.nodes.iter().enumerate() {
        if with_intervals {
            match report.interval_after(index) {
                Some(length) => writeln!(writer, "{},{},{}", index, node, length)?,
                None => writeln!(writer, "{},{},", index, node)?,
            }
        } else {
            writeln!(writer, "{},{}", index, node)?;
        }
    }

    Ok(())
}
