//! Text sanitization for caller-supplied fields.

/// Sanitize free text: drop control characters (keeping newline and tab),
/// trim surrounding whitespace, and truncate to `max_len` characters on a
/// character boundary.
pub fn sanitize_text(s: &str, max_len: usize) -> String {
    let cleaned: String = s
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect();
    cleaned.trim().chars().take(max_len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_control_characters() {
        assert_eq!(sanitize_text("db\u{0}\u{7} down", 100), "db down");
    }

    #[test]
    fn test_keeps_newline_and_tab() {
        assert_eq!(sanitize_text("line1\n\tline2", 100), "line1\n\tline2");
    }

    #[test]
    fn test_truncates_on_char_boundary() {
        assert_eq!(sanitize_text("héllo", 2), "hé");
        assert_eq!(sanitize_text("abc", 10), "abc");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(sanitize_text("  spaced  ", 100), "spaced");
    }
}
