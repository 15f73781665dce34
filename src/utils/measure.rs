//! Span, length and display-width helpers
//!
//! All helpers are total: anything unparsable degrades to a default instead
//! of failing.

use unicode_width::UnicodeWidthStr;

/// Parse a `colspan`/`rowspan` attribute value, clamped to `1..=max`.
///
/// Absent, blank, unparsable or out-of-range (beyond `i64`) values yield 1.
pub fn parse_span(value: Option<&str>, max: usize) -> usize {
    let max = i64::try_from(max).unwrap_or(i64::MAX).max(1);
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .and_then(|n| usize::try_from(n.clamp(1, max)).ok())
        .unwrap_or(1)
}

/// Parse a CSS-like length such as `20px`, `12.5pt` or `30`.
///
/// The leading number is taken and rounded; the unit is ignored. Negative or
/// non-numeric values yield `None`.
pub fn parse_length(value: &str) -> Option<u32> {
    let value = value.trim();
    let end = value
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(value.len());

    let number: f64 = value[..end].parse().ok()?;
    if !number.is_finite() || number < 0.0 {
        return None;
    }
    Some(number.round() as u32)
}

/// Estimate the display width of cell text in character cells.
///
/// East Asian wide characters count as two. For multi-line text the widest
/// line wins.
pub fn string_width(text: &str) -> u32 {
    text.lines()
        .map(|line| UnicodeWidthStr::width(line) as u32)
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_span_defaults() {
        assert_eq!(parse_span(None, 10), 1);
        assert_eq!(parse_span(Some(""), 10), 1);
        assert_eq!(parse_span(Some("abc"), 10), 1);
        assert_eq!(parse_span(Some("0"), 10), 1);
        assert_eq!(parse_span(Some("-3"), 10), 1);
    }

    #[test]
    fn test_parse_span_values() {
        assert_eq!(parse_span(Some("2"), 10), 2);
        assert_eq!(parse_span(Some(" 4 "), 10), 4);
    }

    #[test]
    fn test_parse_span_clamps_large_values() {
        assert_eq!(parse_span(Some("1001"), 1000), 1000);
        assert_eq!(parse_span(Some("4294967296"), 1000), 1000);
        assert_eq!(parse_span(Some("9223372036854775807"), 65534), 65534);
        // beyond i64: unparsable
        assert_eq!(parse_span(Some("99999999999999999999"), 65534), 1);
        assert_eq!(parse_span(Some("5"), 0), 1);
    }

    #[test]
    fn test_parse_length() {
        assert_eq!(parse_length("20px"), Some(20));
        assert_eq!(parse_length("12.6pt"), Some(13));
        assert_eq!(parse_length(" 30 "), Some(30));
        assert_eq!(parse_length("0"), Some(0));
        assert_eq!(parse_length("-5px"), None);
        assert_eq!(parse_length("auto"), None);
        assert_eq!(parse_length(""), None);
    }

    #[test]
    fn test_string_width() {
        assert_eq!(string_width(""), 0);
        assert_eq!(string_width("hello"), 5);
        assert_eq!(string_width("中文"), 4);
        assert_eq!(string_width("ab\nabcd"), 4);
    }
}
