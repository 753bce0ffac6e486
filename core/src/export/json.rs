use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::error::ExportError;

/// Write `records` as a pretty-printed JSON array.
pub fn write_json<T: Serialize>(records: &[T], path: &Path) -> Result<usize, ExportError> {
    if records.is_empty() {
        tracing::warn!(path = %path.display(), "No records to export");
        return Ok(0);
    }

    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records).map_err(|source| ExportError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.write_all(b"\n").map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    tracing::info!(path = %path.display(), count = records.len(), "Exported JSON");
    Ok(records.len())
}
