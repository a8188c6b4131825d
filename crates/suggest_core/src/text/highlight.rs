//! Typed-query highlighting for suggestion lines.
//!
//! # Invariants
//! - User-typed text is always escaped before it becomes a pattern.
//! - Matches are case-insensitive and anchored at line start or after
//!   whitespace, so word tails are never highlighted.

use regex::{Captures, Regex, RegexBuilder};

/// Opening emphasis marker wrapped around each highlighted match.
pub const EMPHASIS_OPEN: &str = "<strong>";
/// Closing emphasis marker.
pub const EMPHASIS_CLOSE: &str = "</strong>";

/// Wraps every word-anchored occurrence of `typed` inside `line` in emphasis
/// markers.
///
/// Blank `typed` text returns `line` unchanged.
pub fn highlight(line: &str, typed: &str) -> String {
    let Some(pattern) = build_pattern(typed) else {
        return line.to_string();
    };

    pattern
        .replace_all(line, |caps: &Captures<'_>| {
            format!("{}{EMPHASIS_OPEN}{}{EMPHASIS_CLOSE}", &caps[1], &caps[2])
        })
        .into_owned()
}

fn build_pattern(typed: &str) -> Option<Regex> {
    if typed.trim().is_empty() {
        return None;
    }

    let source = format!(r"(^|\s+)({})", regex::escape(typed));
    match RegexBuilder::new(&source).case_insensitive(true).build() {
        Ok(pattern) => Some(pattern),
        Err(err) => {
            // Escaped input only fails on size limits; degrade to no highlight.
            log::warn!(
                "event=highlight_pattern module=text status=error typed_chars={} error={}",
                typed.chars().count(),
                err
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::highlight;

    #[test]
    fn wraps_match_at_line_start() {
        assert_eq!(
            highlight("ул Тверская, д 5", "ул"),
            "<strong>ул</strong> Тверская, д 5"
        );
    }

    #[test]
    fn wraps_match_after_whitespace_case_insensitively() {
        assert_eq!(
            highlight("ул Тверская, д 5", "тверская"),
            "ул <strong>Тверская</strong>, д 5"
        );
    }

    #[test]
    fn ignores_matches_inside_words() {
        assert_eq!(highlight("пер Калужский", "уж"), "пер Калужский");
    }

    #[test]
    fn wraps_every_occurrence() {
        assert_eq!(
            highlight("д 1 д 2", "д"),
            "<strong>д</strong> 1 <strong>д</strong> 2"
        );
    }

    #[test]
    fn treats_pattern_metacharacters_literally() {
        assert_eq!(highlight("ул Ленина", ".*"), "ул Ленина");
        assert_eq!(
            highlight("корп (1)", "(1)"),
            "корп <strong>(1)</strong>"
        );
    }

    #[test]
    fn blank_query_leaves_line_unchanged() {
        assert_eq!(highlight("ул Ленина", "  "), "ул Ленина");
        assert_eq!(highlight("ул Ленина", ""), "ул Ленина");
    }
}
