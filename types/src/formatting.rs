//! Number formatting for console reports.
//!
//! Every value printed by the `ogrh` binary goes through here so the
//! leaderboard, segment listing and summaries agree on precision, and so the
//! optional European style (swapping `.` and `,`) is applied in one place.

/// Swap `.` and `,` in an already formatted number.
fn europeanize(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '.' => ',',
            ',' => '.',
            other => other,
        })
        .collect()
}

#[inline]
fn maybe_eu(s: String, european: bool) -> String {
    if european { europeanize(&s) } else { s }
}

/// Format a damage or healing total with a K/M suffix.
///
/// # Examples
/// ```
/// use ogrh_types::formatting::format_compact;
/// assert_eq!(format_compact(500, false), "500");
/// assert_eq!(format_compact(1_500, false), "1.50K");
/// assert_eq!(format_compact(2_250_000, false), "2.25M");
/// assert_eq!(format_compact(1_500, true), "1,50K");
/// ```
pub fn format_compact(n: u64, european: bool) -> String {
    let s = if n >= 1_000_000 {
        format!("{:.2}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.2}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    };
    maybe_eu(s, european)
}

/// Format an integer with thousands separators.
///
/// # Examples
/// ```
/// use ogrh_types::formatting::format_thousands;
/// assert_eq!(format_thousands(0, false), "0");
/// assert_eq!(format_thousands(1_234_567, false), "1,234,567");
/// assert_eq!(format_thousands(1_234_567, true), "1.234.567");
/// ```
pub fn format_thousands(n: u64, european: bool) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    maybe_eu(out, european)
}

/// Format a score average with one decimal place.
///
/// # Examples
/// ```
/// use ogrh_types::formatting::format_score;
/// assert_eq!(format_score(87.24, false), "87.2");
/// assert_eq!(format_score(50.0, true), "50,0");
/// ```
pub fn format_score(n: f64, european: bool) -> String {
    maybe_eu(format!("{:.1}", n), european)
}

/// Format a score as a percentage with one decimal place.
///
/// # Examples
/// ```
/// use ogrh_types::formatting::format_pct;
/// assert_eq!(format_pct(42.7, false), "42.7%");
/// assert_eq!(format_pct(42.7, true), "42,7%");
/// ```
pub fn format_pct(n: f64, european: bool) -> String {
    maybe_eu(format!("{:.1}%", n), european)
}

/// Format a combat time in seconds with two decimals and an `s` suffix.
///
/// # Examples
/// ```
/// use ogrh_types::formatting::format_combat_time;
/// assert_eq!(format_combat_time(120.5, false), "120.50s");
/// assert_eq!(format_combat_time(120.5, true), "120,50s");
/// ```
pub fn format_combat_time(secs: f64, european: bool) -> String {
    maybe_eu(format!("{:.2}s", secs), european)
}

/// Format a duration as `M:SS`, rounding fractional seconds.
///
/// # Examples
/// ```
/// use ogrh_types::formatting::format_duration;
/// assert_eq!(format_duration(125.4), "2:05");
/// assert_eq!(format_duration(0.0), "0:00");
/// ```
pub fn format_duration(secs: f64) -> String {
    let total = secs.max(0.0).round() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_compact() {
        assert_eq!(format_compact(0, false), "0");
        assert_eq!(format_compact(999, false), "999");
        assert_eq!(format_compact(1_000, false), "1.00K");
        assert_eq!(format_compact(15_000, false), "15.00K");
        assert_eq!(format_compact(1_000_000, false), "1.00M");
        assert_eq!(format_compact(15_000, true), "15,00K");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(5, false), "5");
        assert_eq!(format_thousands(999, false), "999");
        assert_eq!(format_thousands(1_000, false), "1,000");
        assert_eq!(format_thousands(123_456, false), "123,456");
        assert_eq!(format_thousands(1_000_000, true), "1.000.000");
    }

    #[test]
    fn test_format_score_rounding() {
        assert_eq!(format_score(33.333, false), "33.3");
        assert_eq!(format_score(99.96, false), "100.0");
        assert_eq!(format_score(0.0, false), "0.0");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(59.4), "0:59");
        assert_eq!(format_duration(59.6), "1:00");
        assert_eq!(format_duration(-3.0), "0:00");
    }
}
