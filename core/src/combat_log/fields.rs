use std::str::FromStr;

/// Separator between positional fields in an addon payload. Never escaped.
pub const FIELD_DELIMITER: char = '&';

/// Positional fields of one payload.
///
/// Accessors coerce on read; a field that is missing or fails coercion
/// yields the type's zero value instead of an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fields<'a> {
    raw: Vec<&'a str>,
}

impl<'a> Fields<'a> {
    pub fn split(payload: &'a str) -> Self {
        Self {
            raw: payload.split(FIELD_DELIMITER).collect(),
        }
    }

    /// Split `payload`, rejecting it when it has fewer than `min` fields
    /// (a truncated write).
    pub fn with_min(payload: &'a str, min: usize) -> Option<Self> {
        let fields = Self::split(payload);
        (fields.len() >= min).then_some(fields)
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Raw field text, empty when out of range.
    pub fn raw(&self, idx: usize) -> &'a str {
        self.raw.get(idx).copied().unwrap_or_default()
    }

    pub fn text(&self, idx: usize) -> String {
        self.raw(idx).to_string()
    }

    pub fn int<T: FromStr + Default>(&self, idx: usize) -> T {
        parse_int(self.raw(idx))
    }

    pub fn float(&self, idx: usize) -> f64 {
        parse_float(self.raw(idx))
    }
}

/// Parse an unsigned decimal integer. Anything other than plain ASCII
/// digits (signs, spaces, decimals) or a value out of range yields zero.
pub fn parse_int<T: FromStr + Default>(s: &str) -> T {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return T::default();
    }
    s.parse().unwrap_or_default()
}

/// Parse an unsigned decimal with at most one `.`; anything else yields zero.
pub fn parse_float(s: &str) -> f64 {
    let mut dots = 0;
    let mut digits = 0;
    for b in s.bytes() {
        match b {
            b'.' => dots += 1,
            b'0'..=b'9' => digits += 1,
            _ => return 0.0,
        }
    }
    if dots > 1 || digits == 0 {
        return 0.0;
    }
    s.parse().unwrap_or_default()
}
