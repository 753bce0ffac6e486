//! Segment import text.
//!
//! The addon's roster window accepts a pasted block to rebuild a segment
//! lost in a crash:
//!
//! ```text
//! START_SEGMENT_DATA
//! SEGMENT_META|name|createdAt|raidName|raidIndex|encounterName|encounterIndex|combatTime
//! playerName|class|role|damage|effectiveHealing|totalHealing
//! END_SEGMENT_DATA
//! ```

use std::fs;
use std::path::Path;

use crate::error::ExportError;
use crate::records::Segment;

pub const BLOCK_START: &str = "START_SEGMENT_DATA";
pub const BLOCK_END: &str = "END_SEGMENT_DATA";

/// Render the import block for one segment, newline terminated.
pub fn render_segment_import(segment: &Segment) -> String {
    let mut out = format!(
        "{BLOCK_START}\nSEGMENT_META|{}|{}|{}|{}|{}|{}|{:.2}\n",
        segment.name,
        segment.created_at,
        segment.raid_name,
        segment.raid_index,
        segment.encounter_name,
        segment.encounter_index,
        segment.combat_time
    );
    for p in segment.players() {
        out.push_str(&format!(
            "{}|{}|{}|{}|{}|{}\n",
            p.name, p.class_name, p.role, p.damage, p.effective_healing, p.total_healing
        ));
    }
    out.push_str(BLOCK_END);
    out.push('\n');
    out
}

/// Write the import blocks of every segment to one file, separated by a
/// blank line.
pub fn write_segment_import(segments: &[Segment], path: &Path) -> Result<usize, ExportError> {
    if segments.is_empty() {
        tracing::warn!(path = %path.display(), "No segments to export");
        return Ok(0);
    }

    let text = segments
        .iter()
        .map(render_segment_import)
        .collect::<Vec<_>>()
        .join("\n");
    fs::write(path, text).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(path = %path.display(), count = segments.len(), "Exported segment import blocks");
    Ok(segments.len())
}
