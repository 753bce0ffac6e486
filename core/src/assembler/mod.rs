//! Record assembly state machine.
//!
//! One [`RecordAssembler`] per record family consumes that family's tagged
//! lines in stream order:
//! - `Idle`: no record open; player and end lines are discarded
//! - `Open`: one record being built; player lines are appended to it
//!
//! A record is emitted exactly once: when an end marker carrying its token
//! arrives, when the next header arrives first, or when the stream ends.
//! End markers with a different token are ignored and the record stays open.

mod stats;

#[cfg(test)]
mod assembler_tests;

pub use stats::FamilyStats;

use crate::combat_log::{LineTag, TaggedLine};
use crate::records::RecordFamily;

enum AssemblerState<R> {
    Idle,
    Open(R),
}

pub struct RecordAssembler<F: RecordFamily> {
    state: AssemblerState<F::Record>,
    stats: FamilyStats,
}

impl<F: RecordFamily> Default for RecordAssembler<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: RecordFamily> RecordAssembler<F> {
    pub fn new() -> Self {
        Self {
            state: AssemblerState::Idle,
            stats: FamilyStats::default(),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, AssemblerState::Open(_))
    }

    /// The record currently being built, if any.
    pub fn current(&self) -> Option<&F::Record> {
        match &self.state {
            AssemblerState::Open(record) => Some(record),
            AssemblerState::Idle => None,
        }
    }

    pub fn stats(&self) -> &FamilyStats {
        &self.stats
    }

    /// Feed one tagged line of this family. Returns the record finalized by
    /// this line, if any.
    pub fn process(&mut self, line: &TaggedLine<'_>) -> Option<F::Record> {
        debug_assert_eq!(line.family, F::FAMILY);
        match line.tag {
            LineTag::Header => self.handle_header(line),
            LineTag::Detail => {
                self.handle_detail(line.payload);
                None
            }
            LineTag::End => self.handle_end(line.payload),
        }
    }

    /// End of stream: emit the record still open, if any.
    pub fn finish(&mut self) -> Option<F::Record> {
        let record = self.take_open()?;
        self.stats.closed_at_eof += 1;
        tracing::debug!(
            family = ?F::FAMILY,
            token = F::end_token(&record),
            "Record still open at end of log"
        );
        Some(record)
    }

    fn handle_header(&mut self, line: &TaggedLine<'_>) -> Option<F::Record> {
        let ordinal = self.stats.headers as usize + 1;
        let Some(record) = F::parse_header(line, ordinal) else {
            self.stats.malformed_headers += 1;
            return None;
        };
        self.stats.headers += 1;

        let previous = self.take_open();
        if let Some(prev) = &previous {
            self.stats.closed_by_header += 1;
            tracing::debug!(
                family = ?F::FAMILY,
                token = F::end_token(prev),
                "Record closed by next header (missing end marker)"
            );
        }
        self.state = AssemblerState::Open(record);
        previous
    }

    fn handle_detail(&mut self, payload: &str) {
        let AssemblerState::Open(record) = &mut self.state else {
            self.stats.orphan_details += 1;
            return;
        };
        match F::parse_detail(payload) {
            Some(detail) => {
                F::push_detail(record, detail);
                self.stats.details += 1;
            }
            None => self.stats.malformed_details += 1,
        }
    }

    fn handle_end(&mut self, token: &str) -> Option<F::Record> {
        let AssemblerState::Open(record) = &self.state else {
            self.stats.orphan_ends += 1;
            return None;
        };

        if F::end_token(record) != token {
            self.stats.stray_ends += 1;
            tracing::debug!(
                family = ?F::FAMILY,
                expected = F::end_token(record),
                found = token,
                "Ignoring end marker for a different record"
            );
            return None;
        }

        self.stats.closed_by_end += 1;
        self.take_open()
    }

    fn take_open(&mut self) -> Option<F::Record> {
        match std::mem::replace(&mut self.state, AssemblerState::Idle) {
            AssemblerState::Open(record) => Some(record),
            AssemblerState::Idle => None,
        }
    }
}
