//! JSON output formatting

use super::GridReport;
use crate::Result;
use std::io::Write;

/// Write `report` as pretty-printed JSON followed by a newline
pub fn write_json<W: Write>(report: &GridReport, writer: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)?;
    Ok(())
}
