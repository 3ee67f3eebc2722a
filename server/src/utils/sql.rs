//! SQL LIKE pattern helpers

/// Escape SQL LIKE metacharacters (%, _, \) so they match literally.
/// Pair with `ESCAPE '\'` in the query.
pub fn escape_like_pattern(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Substring pattern for `folded_col LIKE ? ESCAPE '\'`
///
/// The needle gets the same Unicode lowercasing as the stored folded column.
pub fn contains_pattern(needle: &str) -> String {
    format!("%{}%", escape_like_pattern(&needle.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_pattern_no_special_chars() {
        assert_eq!(escape_like_pattern("sofa"), "sofa");
    }

    #[test]
    fn test_escape_like_pattern_metacharacters() {
        assert_eq!(escape_like_pattern("100%_\\chair"), "100\\%\\_\\\\chair");
    }

    #[test]
    fn test_contains_pattern_folds_ascii_case() {
        assert_eq!(contains_pattern("Bar STOOL"), "%bar stool%");
    }

    #[test]
    fn test_contains_pattern_folds_non_ascii() {
        assert_eq!(contains_pattern("ÉTAGÈRE"), "%étagère%");
    }

    #[test]
    fn test_contains_pattern_empty() {
        assert_eq!(contains_pattern(""), "%%");
    }
}
