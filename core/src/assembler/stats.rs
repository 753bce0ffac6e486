use serde::Serialize;

/// What the assembler did with the tagged lines of one family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FamilyStats {
    /// Headers that decoded and opened a record.
    pub headers: u32,
    /// Headers dropped for having too few fields (or no log timestamp).
    pub malformed_headers: u32,
    pub details: u32,
    pub malformed_details: u32,
    /// Player lines seen while no record was open.
    pub orphan_details: u32,
    /// End markers that closed the open record.
    pub closed_by_end: u32,
    /// End markers whose token did not match the open record.
    pub stray_ends: u32,
    /// End markers seen while no record was open.
    pub orphan_ends: u32,
    /// Records closed because the next header arrived first.
    pub closed_by_header: u32,
    /// Records still open when the stream ended.
    pub closed_at_eof: u32,
}

impl FamilyStats {
    /// Records emitted so far. Every accepted header yields exactly one.
    pub fn finalized(&self) -> u32 {
        self.closed_by_end + self.closed_by_header + self.closed_at_eof
    }

    /// Records that never saw their own end marker.
    pub fn unterminated(&self) -> u32 {
        self.closed_by_header + self.closed_at_eof
    }
}
