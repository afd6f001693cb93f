//! CSV writing for SiteCycle exports.
//!
//! Output is UTF-8 with a `date,location,duration_hours,note` header, `\n`
//! line endings and quoting only where a field needs it.

use crate::{ExportRow, Result};
use std::io::Write;
use std::path::Path;

/// Column header of the SiteCycle import format
pub const HEADER: [&str; 4] = ["date", "location", "duration_hours", "note"];

/// Write the header and all rows to `writer`
///
/// The header is written even when there are no rows.
pub fn write_rows<W: Write>(rows: &[ExportRow], writer: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(writer);

    writer.write_record(HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write rows to `path` in one piece
///
/// Rows go to a temporary file next to the destination which is then renamed
/// over it, so a failed export never leaves a partial file behind.
pub fn write_rows_to_path(rows: &[ExportRow], path: &Path) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut temp = tempfile::NamedTempFile::new_in(dir)?;
    write_rows(rows, temp.as_file_mut())?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;

    tracing::info!("Wrote {} rows to {:?}", rows.len(), path);
    Ok(())
}
