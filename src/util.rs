//! Shared text helpers for terminal output
//!
//! Incident names and descriptions are mostly Vietnamese, so column fitting
//! works on display width (via `unicode-width`), never on byte length.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `s` to at most `width` terminal columns, ending with `…` when cut.
pub fn truncate_to_width(s: &str, width: usize) -> String {
    if s.width() <= width {
        return s.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Truncate or right-pad `s` to exactly `width` columns.
pub fn fit_width(s: &str, width: usize) -> String {
    let mut out = truncate_to_width(s, width);
    let pad = width.saturating_sub(out.width());
    out.extend(std::iter::repeat(' ').take(pad));
    out
}

/// Collapse newlines and runs of whitespace so free text fits on one row.
pub fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_to_width("DB down", 10), "DB down");
    }

    #[test]
    fn long_text_gets_ellipsis_within_width() {
        let cut = truncate_to_width("Sự cố không có tiêu đề", 8);
        assert_eq!(cut, "Sự cố k…");
        assert_eq!(cut.width(), 8);
    }

    #[test]
    fn wide_chars_never_overflow() {
        // each CJK char is two columns
        let cut = truncate_to_width("故障故障故障", 5);
        assert!(cut.width() <= 5);
        assert!(cut.ends_with('…'));
    }

    #[test]
    fn fit_pads_to_exact_width() {
        assert_eq!(fit_width("ab", 4), "ab  ");
        assert_eq!(fit_width("abcdef", 4).width(), 4);
        assert_eq!(truncate_to_width("abc", 0), "");
    }

    #[test]
    fn single_line_collapses_whitespace() {
        assert_eq!(single_line("a\n  b\tc "), "a b c");
    }
}
