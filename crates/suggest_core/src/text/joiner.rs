//! Optional-part joiner.
//!
//! # Responsibility
//! - Concatenate present, non-empty parts with a separator.
//!
//! # Invariants
//! - Absent and empty parts are omitted; whitespace-only parts are kept.
//! - Input order is preserved.
//! - Joining never fails.

/// Separator used between sibling groups when none is given.
pub const DEFAULT_SEPARATOR: &str = ", ";
/// Separator used inside "type + name" pairs and for person names.
pub const SPACE_SEPARATOR: &str = " ";

/// One joinable value that may be absent.
///
/// Implemented for string slices, owned strings, options and references of
/// those, so attribute fields and already-joined groups can be fed to
/// [`join`] without conversion.
pub trait Part {
    /// Returns the text of this part, or `None` when absent.
    fn text(&self) -> Option<&str>;
}

impl Part for str {
    fn text(&self) -> Option<&str> {
        Some(self)
    }
}

impl Part for String {
    fn text(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: Part> Part for Option<T> {
    fn text(&self) -> Option<&str> {
        self.as_ref().and_then(Part::text)
    }
}

impl<T: Part + ?Sized> Part for &T {
    fn text(&self) -> Option<&str> {
        (**self).text()
    }
}

/// Joins present, non-empty parts with `separator`.
pub fn join<I>(parts: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: Part,
{
    let mut joined = String::new();
    for part in parts {
        let Some(text) = part.text() else {
            continue;
        };
        if text.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push_str(separator);
        }
        joined.push_str(text);
    }
    joined
}

/// Joins parts with [`DEFAULT_SEPARATOR`].
pub fn join_default<I>(parts: I) -> String
where
    I: IntoIterator,
    I::Item: Part,
{
    join(parts, DEFAULT_SEPARATOR)
}

/// Joins one "type + name" pair, e.g. `("ул", "Ленина")` -> `"ул Ленина"`.
pub fn join_pair(kind: Option<&str>, name: Option<&str>) -> String {
    join([kind, name], SPACE_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::{join, join_default, join_pair, DEFAULT_SEPARATOR};

    #[test]
    fn empty_input_yields_empty_string() {
        let parts: [Option<&str>; 0] = [];
        assert_eq!(join_default(parts), "");
    }

    #[test]
    fn single_part_is_returned_verbatim() {
        assert_eq!(join_default(["Москва"]), "Москва");
    }

    #[test]
    fn skips_empty_and_absent_parts() {
        let parts = [Some(""), None, Some("a"), Some(""), Some("b")];
        assert_eq!(join(parts, DEFAULT_SEPARATOR), "a, b");
    }

    #[test]
    fn keeps_whitespace_only_parts() {
        assert_eq!(join(["a", " ", "b"], "|"), "a| |b");
    }

    #[test]
    fn nested_join_is_associative_under_one_separator() {
        let inner = join(["a", "b"], "-");
        assert_eq!(join([inner.as_str(), "c"], "-"), join(["a", "b", "c"], "-"));
    }

    #[test]
    fn accepts_owned_and_optional_owned_parts() {
        let parts = vec![Some("x".to_string()), None, Some(String::new())];
        assert_eq!(join(&parts, " "), "x");
    }

    #[test]
    fn pair_handles_missing_halves() {
        assert_eq!(join_pair(Some("ул"), Some("Ленина")), "ул Ленина");
        assert_eq!(join_pair(None, Some("Ленина")), "Ленина");
        assert_eq!(join_pair(Some("ул"), None), "ул");
        assert_eq!(join_pair(None, None), "");
    }
}
