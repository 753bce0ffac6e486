use memchr::memmem;

/// Addon record family a tagged line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Segment,
    Consume,
}

/// Position of a tagged line within its record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineTag {
    Header,
    Detail,
    End,
}

pub const SEGMENT_HEADER: &str = "OGRH_SEGMENT_HEADER:";
pub const SEGMENT_PLAYER: &str = "OGRH_SEGMENT_PLAYER:";
pub const SEGMENT_END: &str = "OGRH_SEGMENT_END:";
pub const CONSUME_PULL: &str = "OGRH_CONSUME_PULL:";
pub const CONSUME_PLAYER: &str = "OGRH_CONSUME_PLAYER:";
pub const CONSUME_END: &str = "OGRH_CONSUME_END:";

/// Common prefix of every addon marker; lines without it are rejected
/// before any per-marker search.
const MARKER_PREFIX: &[u8] = b"OGRH_";

const MARKERS: [(&str, Family, LineTag); 6] = [
    (SEGMENT_HEADER, Family::Segment, LineTag::Header),
    (SEGMENT_PLAYER, Family::Segment, LineTag::Detail),
    (SEGMENT_END, Family::Segment, LineTag::End),
    (CONSUME_PULL, Family::Consume, LineTag::Header),
    (CONSUME_PLAYER, Family::Consume, LineTag::Detail),
    (CONSUME_END, Family::Consume, LineTag::End),
];

/// A combat log line recognized as part of an addon record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggedLine<'a> {
    pub family: Family,
    pub tag: LineTag,
    /// Text after the marker, whitespace-trimmed on both ends.
    pub payload: &'a str,
    /// Text before the marker (the game's local timestamp, if any).
    pub prefix: &'a str,
}

/// Classify one combat log line.
///
/// Markers are found by substring search anywhere in the line. Returns `None`
/// for unrelated lines and for markers followed by an empty payload.
pub fn classify_line(line: &str) -> Option<TaggedLine<'_>> {
    let bytes = line.as_bytes();
    memmem::find(bytes, MARKER_PREFIX)?;

    for (marker, family, tag) in MARKERS {
        let Some(pos) = memmem::find(bytes, marker.as_bytes()) else {
            continue;
        };
        let payload = line[pos + marker.len()..].trim();
        if payload.is_empty() {
            return None;
        }
        return Some(TaggedLine {
            family,
            tag,
            payload,
            prefix: &line[..pos],
        });
    }
    None
}

/// Extract the `MM/DD HH:MM:SS.mmm` timestamp the game writes in front of
/// addon lines.
///
/// The timestamp must be the last thing before the marker and be separated
/// from it by whitespace.
pub fn log_timestamp(prefix: &str) -> Option<&str> {
    let trimmed = prefix.trim_end();
    if trimmed.len() == prefix.len() {
        return None;
    }

    let (head, time) = trimmed.rsplit_once(' ')?;
    if !is_clock(time) {
        return None;
    }

    // Date digits may be glued to earlier text; only the trailing run counts.
    let date_start = head
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit() || *c == '/')
        .last()
        .map(|(i, _)| i)?;
    if !is_month_day(&head[date_start..]) {
        return None;
    }

    Some(&trimmed[date_start..])
}

/// `D+/D+`
fn is_month_day(s: &str) -> bool {
    s.split_once('/')
        .is_some_and(|(m, d)| is_digits(m) && is_digits(d))
}

/// `D+:D+:D+.D+`
fn is_clock(s: &str) -> bool {
    let Some((hms, frac)) = s.split_once('.') else {
        return false;
    };
    let mut parts = hms.split(':');
    let all_digits = parts.by_ref().take(3).filter(|p| is_digits(p)).count() == 3;
    all_digits && parts.next().is_none() && is_digits(frac)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
