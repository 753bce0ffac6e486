//! Recognition and decoding of addon lines embedded in the combat log.
//!
//! The addon writes each record as tagged lines:
//!
//! ```text
//! 12/25 20:15:32.123  OGRH_CONSUME_PULL: 1735157732&2024-12-25&20:15:32&Molten Core&Ragnaros&3&Kargoz&40
//! 12/25 20:15:32.123  OGRH_CONSUME_PLAYER: Tank&Warrior&TANK&95&19&20
//! 12/25 20:15:32.123  OGRH_CONSUME_END: 1735157732
//! ```
//!
//! [`classify_line`] picks out the tagged lines and [`Fields`] splits and
//! coerces their `&`-delimited payloads.

mod classifier;
mod fields;

pub use classifier::{
    CONSUME_END, CONSUME_PLAYER, CONSUME_PULL, Family, LineTag, SEGMENT_END, SEGMENT_HEADER,
    SEGMENT_PLAYER, TaggedLine, classify_line, log_timestamp,
};
pub use fields::{FIELD_DELIMITER, Fields, parse_float, parse_int};
