//! Typed records reassembled from addon lines.
//!
//! Both record families share one shape (a header, player lines, an end
//! marker) and plug into the assembler through [`RecordFamily`].

mod consume;
mod segment;

pub use consume::{ConsumeFamily, Pull, PullPlayer};
pub use segment::{Segment, SegmentFamily, SegmentPlayer};

use crate::combat_log::{Family, TaggedLine};

/// Decoding rules for one record family.
pub trait RecordFamily {
    type Record: std::fmt::Debug;
    type Detail;

    const FAMILY: Family;

    /// Decode a header line into a fresh record. `ordinal` is the 1-based
    /// position of this header among the accepted headers of the stream.
    /// Returns `None` for a malformed header, which is then ignored.
    fn parse_header(line: &TaggedLine<'_>, ordinal: usize) -> Option<Self::Record>;

    /// Decode a player line. Returns `None` for a malformed line.
    fn parse_detail(payload: &str) -> Option<Self::Detail>;

    fn push_detail(record: &mut Self::Record, detail: Self::Detail);

    /// Token an end marker must carry to close `record`.
    fn end_token(record: &Self::Record) -> &str;
}
