use std::io::Write;

use colmatch_model::MatchGroup;

use crate::error::Result;
use crate::export::MatchExport;

/// Writes the groups as a pretty-printed JSON array.
pub fn write_json<W: Write>(writer: W, groups: &[MatchGroup]) -> Result<()> {
    serde_json::to_writer_pretty(writer, groups)?;
    Ok(())
}

/// Writes the full export document (meta, summary, groups) as JSON.
pub fn write_export_json<W: Write>(writer: W, export: &MatchExport) -> Result<()> {
    serde_json::to_writer_pretty(writer, export)?;
    Ok(())
}
