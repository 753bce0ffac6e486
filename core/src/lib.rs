pub mod aggregate;
pub mod assembler;
pub mod combat_log;
pub mod error;
pub mod export;
pub mod reader;
pub mod records;

// Re-exports for convenience
pub use error::{ExportError, LogError};
pub use reader::{LogScanner, ScanOutput, ScanStats, scan_log, scan_reader};
pub use records::{Pull, PullPlayer, Segment, SegmentPlayer};
