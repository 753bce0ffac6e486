use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use ogrh_core::aggregate::{aggregate_by_encounter, aggregate_by_player, summarize_pulls};
use ogrh_core::export::{
    export_path, export_stamp, write_encounter_stats, write_json, write_player_stats,
    write_pull_rows, write_segment_import,
};
use ogrh_core::{ScanOutput, scan_log};
use ogrh_types::AppConfig;

use crate::report;

pub struct SegmentOptions {
    pub output_dir: PathBuf,
    pub export: bool,
}

pub struct ConsumeOptions {
    pub output_dir: PathBuf,
    pub json: bool,
    pub csv: bool,
    pub aggregate: bool,
    pub top: usize,
    pub quiet: bool,
}

impl ConsumeOptions {
    /// Aggregate tables are written when asked for, or when no format was
    /// chosen at all.
    pub fn writes_aggregates(&self) -> bool {
        self.aggregate || !(self.json || self.csv)
    }
}

fn prepare_output_dir(dir: &Path) -> Result<(), String> {
    fs::create_dir_all(dir)
        .map_err(|e| format!("failed to create output directory {}: {e}", dir.display()))
}

/// Scan `log_path`, warning when the log could only be read in part.
fn scan(log_path: &Path) -> Result<ScanOutput, String> {
    println!("Scanning {}...", log_path.display());
    let output = scan_log(log_path).map_err(|e| e.to_string())?;
    if output.stats.read_error {
        tracing::warn!(
            path = %log_path.display(),
            lines = output.stats.lines,
            "Combat log could not be read to the end; results are partial"
        );
    }
    Ok(output)
}

pub fn run_segments(log_path: &Path, options: &SegmentOptions, config: &AppConfig) -> Result<(), String> {
    let output = scan(log_path)?;

    if output.segments.is_empty() {
        tracing::warn!(
            path = %log_path.display(),
            "No segments found; segments are only logged while ranking is enabled"
        );
        return Ok(());
    }

    report::print_segments(&mut io::stdout().lock(), &output.segments, config.european_format)
        .map_err(|e| e.to_string())?;

    if options.export {
        prepare_output_dir(&options.output_dir)?;
        let stamp = export_stamp(&Local::now());
        let path = export_path(&options.output_dir, "segments", &stamp, "txt");
        let count = write_segment_import(&output.segments, &path).map_err(|e| e.to_string())?;
        println!("Exported {count} segment(s) to {}", path.display());
    }
    Ok(())
}

pub fn run_consumes(log_path: &Path, options: &ConsumeOptions, config: &AppConfig) -> Result<(), String> {
    let output = scan(log_path)?;
    let pulls = output.pulls;

    if pulls.is_empty() {
        tracing::warn!(path = %log_path.display(), "No consume tracking data found");
        return Ok(());
    }
    println!("Found {} pull(s)", pulls.len());

    let players = aggregate_by_player(&pulls);
    let encounters = aggregate_by_encounter(&pulls);

    if !options.quiet {
        let summary = summarize_pulls(&pulls, config.recent_pulls);
        let mut out = io::stdout().lock();
        report::print_pull_summary(&mut out, &summary, config.european_format)
            .and_then(|_| report::print_leaderboard(&mut out, &players, options.top, config.european_format))
            .map_err(|e| e.to_string())?;
    }

    prepare_output_dir(&options.output_dir)?;
    let stamp = export_stamp(&Local::now());
    let dir = options.output_dir.as_path();
    let mut written: Vec<PathBuf> = Vec::new();

    if options.json {
        let path = export_path(dir, "consume_tracking", &stamp, "json");
        if write_json(&pulls, &path).map_err(|e| e.to_string())? > 0 {
            written.push(path);
        }
    }
    if options.csv {
        let path = export_path(dir, "consume_tracking", &stamp, "csv");
        if write_pull_rows(&pulls, &path).map_err(|e| e.to_string())? > 0 {
            written.push(path);
        }
    }
    if options.writes_aggregates() {
        let path = export_path(dir, "consume_player_stats", &stamp, "csv");
        if write_player_stats(&players, &path).map_err(|e| e.to_string())? > 0 {
            written.push(path);
        }
        let path = export_path(dir, "consume_encounter_stats", &stamp, "csv");
        if write_encounter_stats(&encounters, &path).map_err(|e| e.to_string())? > 0 {
            written.push(path);
        }
    }

    for path in &written {
        println!("Exported {}", path.display());
    }
    Ok(())
}
