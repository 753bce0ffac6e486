//! Writing recovered records and statistics to disk.
//!
//! Each writer returns the number of rows/records written. Writing an empty
//! collection is skipped (no file is created) and reported as `0`.

mod import;
mod json;
mod tables;

pub use import::{render_segment_import, write_segment_import};
pub use json::write_json;
pub use tables::{write_encounter_stats, write_player_stats, write_pull_rows};

use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};

/// Output files produced by one run share this stamp.
pub fn export_stamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%Y%m%d_%H%M%S").to_string()
}

/// `<dir>/<stem>_<stamp>.<ext>`
pub fn export_path(dir: &Path, stem: &str, stamp: &str, ext: &str) -> PathBuf {
    dir.join(format!("{stem}_{stamp}.{ext}"))
}

/// Join a set-valued column for flat output.
fn join_list(items: &[String]) -> String {
    items.join(", ")
}
