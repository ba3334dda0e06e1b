//! Display-width-aware text trimming.
//!
//! Pane rows must never bleed into their neighbor, and byte-based cutting
//! corrupts multi-byte characters, so trimming works in terminal columns
//! over decoded text.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Marker appended when a name is cut to fit its pane.
pub const TRUNCATION_MARKER: char = '~';

/// Fit `s` into `max_cols` terminal columns.
///
/// Untouched when it already fits; otherwise cut at a character boundary
/// with a trailing `~`, never exceeding `max_cols`.
pub fn fit_to_width(s: &str, max_cols: usize) -> String {
    if s.width() <= max_cols {
        return s.to_string();
    }
    if max_cols == 0 {
        return String::new();
    }

    let budget = max_cols - 1; // room for the marker
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push(TRUNCATION_MARKER);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_strings_pass_through() {
        assert_eq!(fit_to_width("abc", 10), "abc");
        assert_eq!(fit_to_width("abc", 3), "abc");
        assert_eq!(fit_to_width("", 0), "");
    }

    #[test]
    fn test_long_strings_get_marker() {
        assert_eq!(fit_to_width("abcdef", 4), "abc~");
        assert_eq!(fit_to_width("abcdef", 1), "~");
    }

    #[test]
    fn test_wide_chars_count_as_two_columns() {
        // Each CJK char is two columns wide.
        assert_eq!(fit_to_width("日本語", 6), "日本語");
        assert_eq!(fit_to_width("日本語ファイル", 6), "日本~");
    }

    #[test]
    fn test_never_splits_a_wide_char() {
        // Budget of 4 leaves 3 columns; the second wide char won't fit.
        assert_eq!(fit_to_width("日本語x", 4), "日~");
    }

    #[test]
    fn test_result_width_never_exceeds_budget() {
        use unicode_width::UnicodeWidthStr;
        for max in 0..12 {
            let fitted = fit_to_width("mixed日本abc語text", max);
            assert!(fitted.width() <= max, "width {} > {}", fitted.width(), max);
        }
    }
}
