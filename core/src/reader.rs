//! Sequential combat log scanning.
//!
//! The log is read once, line by line, and every line is offered to both
//! record assemblers. Only finished records are kept in memory, never the
//! raw log text.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use encoding_rs::UTF_8;
use serde::Serialize;

use crate::assembler::{FamilyStats, RecordAssembler};
use crate::combat_log::{Family, classify_line};
use crate::error::LogError;
use crate::records::{ConsumeFamily, Pull, Segment, SegmentFamily};

const READ_BUFFER_BYTES: usize = 1024 * 1024;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScanStats {
    pub lines: u64,
    pub segments: FamilyStats,
    pub pulls: FamilyStats,
    /// Reading stopped early on an I/O error; records up to that point are kept.
    pub read_error: bool,
}

/// Everything recovered from one log.
#[derive(Debug, Clone, Default)]
pub struct ScanOutput {
    pub segments: Vec<Segment>,
    pub pulls: Vec<Pull>,
    pub stats: ScanStats,
}

/// Single-pass scanner feeding both record families.
#[derive(Default)]
pub struct LogScanner {
    segments: RecordAssembler<SegmentFamily>,
    pulls: RecordAssembler<ConsumeFamily>,
    output: ScanOutput,
}

impl LogScanner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed_line(&mut self, line: &str) {
        self.output.stats.lines += 1;
        let Some(tagged) = classify_line(line) else {
            return;
        };
        match tagged.family {
            Family::Segment => self.output.segments.extend(self.segments.process(&tagged)),
            Family::Consume => self.output.pulls.extend(self.pulls.process(&tagged)),
        }
    }

    /// End of stream: flush open records and return everything found.
    pub fn finish(mut self) -> ScanOutput {
        self.output.segments.extend(self.segments.finish());
        self.output.pulls.extend(self.pulls.finish());
        self.output.stats.segments = *self.segments.stats();
        self.output.stats.pulls = *self.pulls.stats();
        self.output
    }

    fn mark_read_error(&mut self) {
        self.output.stats.read_error = true;
    }
}

/// Scan any buffered reader. Invalid UTF-8 bytes are dropped; a read error
/// ends the scan as if the log were truncated at that point.
pub fn scan_reader<R: BufRead>(reader: R) -> ScanOutput {
    scan_buffered(reader).0
}

/// Scan loop shared by [`scan_reader`] and [`scan_log`]; also hands back the
/// read error that stopped it, if any.
fn scan_buffered<R: BufRead>(mut reader: R) -> (ScanOutput, Option<io::Error>) {
    let mut scanner = LogScanner::new();
    let mut buf = Vec::with_capacity(1024);

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                let (line, had_errors) = UTF_8.decode_without_bom_handling(&buf);
                if had_errors {
                    scanner.feed_line(line.replace(char::REPLACEMENT_CHARACTER, "").trim());
                } else {
                    scanner.feed_line(line.trim());
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Error reading combat log, keeping records read so far");
                scanner.mark_read_error();
                return (scanner.finish(), Some(e));
            }
        }
    }

    (scanner.finish(), None)
}

/// Open and scan a combat log file.
///
/// Fails when the path is missing, is not a regular file, or the first read
/// already fails. A read error later in the file keeps what was recovered
/// and sets [`ScanStats::read_error`].
pub fn scan_log(path: &Path) -> Result<ScanOutput, LogError> {
    if !path.exists() {
        return Err(LogError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let io_err = |source| LogError::Io {
        path: path.to_path_buf(),
        source,
    };
    if path.is_dir() {
        return Err(io_err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "path is a directory",
        )));
    }
    let file = File::open(path).map_err(io_err)?;

    let timer = std::time::Instant::now();
    let (output, error) = scan_buffered(BufReader::with_capacity(READ_BUFFER_BYTES, file));
    match error {
        // Nothing was read at all: the file is unreadable, not truncated
        Some(source) if output.stats.lines == 0 => return Err(io_err(source)),
        _ => {}
    }

    tracing::info!(
        path = %path.display(),
        lines = output.stats.lines,
        segments = output.segments.len(),
        pulls = output.pulls.len(),
        unterminated = output.stats.segments.unterminated() + output.stats.pulls.unterminated(),
        read_error = output.stats.read_error,
        elapsed_ms = timer.elapsed().as_millis() as u64,
        "Scanned combat log"
    );
    Ok(output)
}
