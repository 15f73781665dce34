//! Compiled regular expressions used by content classification

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Numeric literal: optional sign, integer or decimal mantissa, optional
    /// exponent within the double range, optional `d`/`D` type suffix
    pub static ref DOUBLE_PATTERN: Regex = Regex::new(
        r"^[-+]?(\d+(\.\d*)?|\.\d+)([eE]([-+]?([012]?\d{1,2}|30[0-7])|-3([01]?[4-9]|[012]?[0-3])))?[dD]?$"
    )
    .unwrap();

    /// Literal `\n` produced for line breaks by the text adapters
    pub static ref LINE_FEED_PATTERN: Regex = Regex::new(r"\\n").unwrap();
}

/// Whether `text` is a numeric literal
pub fn is_double(text: &str) -> bool {
    DOUBLE_PATTERN.is_match(text)
}

/// Replace line-break placeholders with real newlines
pub fn expand_line_breaks(text: &str) -> String {
    LINE_FEED_PATTERN.replace_all(text, "\n").into_owned()
}

/// Strip thousands-separator commas
pub fn remove_commas(text: &str) -> String {
    text.replace(',', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_pattern_accepts() {
        for s in ["1", "-1", "+2.5", "3.", ".5", "3.14e10", "1E-5", "2.0d", "7D", "1e307"] {
            assert!(is_double(s), "expected {s:?} to be numeric");
        }
    }

    #[test]
    fn test_double_pattern_rejects() {
        for s in ["abc123", "1,234.5", "", ".", "1e", "--1", "1.2.3", "0x10", " 1", "1e308"] {
            assert!(!is_double(s), "expected {s:?} to be text");
        }
    }

    #[test]
    fn test_expand_line_breaks() {
        assert_eq!(expand_line_breaks(r"a\nb"), "a\nb");
        assert_eq!(expand_line_breaks("plain"), "plain");
    }

    #[test]
    fn test_remove_commas() {
        assert_eq!(remove_commas("1,234,567.5"), "1234567.5");
    }
}
