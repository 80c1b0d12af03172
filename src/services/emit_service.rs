use crate::errors::{AppErrors, AppResult};
use crate::models::scale_table::ScaleTable;
use std::io::Write;

/// Writes every table entry as a map line, in ascending exponent order.
///
/// # Arguments
/// * `table` - The computed scale table.
/// * `out` - Destination for the generated lines.
///
/// # Returns
/// * `AppResult<()>` - Returns `Ok(())` once all lines are written and flushed,
///   or `AppErrors::Io` if the writer fails.
pub fn write_table<W: Write>(table: &ScaleTable, mut out: W) -> AppResult<()> {
    for entry in table.iter() {
        writeln!(out, "{entry}").map_err(|e| AppErrors::Io(format!("write line: {e}")))?;
    }
    out.flush()
        .map_err(|e| AppErrors::Io(format!("flush output: {e}")))?;
    Ok(())
}
