//! Outgoing query bias.
//!
//! # Invariants
//! - `augment` is idempotent: an augmented query already matches the bias.
//! - The bias keyword is matched as an escaped literal, case-insensitively.

use crate::model::suggestion::SearchRequest;
use regex::{Regex, RegexBuilder};

/// Prepends a configured keyword to queries that do not mention it yet.
#[derive(Debug, Clone)]
pub struct QueryAugmenter {
    bias: Option<Bias>,
}

#[derive(Debug, Clone)]
struct Bias {
    keyword: String,
    pattern: Regex,
}

impl QueryAugmenter {
    /// Creates an augmenter; `None` or a blank keyword disables augmentation.
    pub fn new(bias_keyword: Option<&str>) -> Result<Self, regex::Error> {
        let bias = match bias_keyword.map(str::trim) {
            Some(keyword) if !keyword.is_empty() => Some(Bias {
                keyword: keyword.to_string(),
                pattern: RegexBuilder::new(&regex::escape(keyword))
                    .case_insensitive(true)
                    .build()?,
            }),
            _ => None,
        };
        Ok(Self { bias })
    }

    /// Augmenter that never rewrites queries.
    pub fn disabled() -> Self {
        Self { bias: None }
    }

    pub fn bias_keyword(&self) -> Option<&str> {
        self.bias.as_ref().map(|bias| bias.keyword.as_str())
    }

    /// Returns `query` with the bias keyword prepended when missing.
    pub fn augment(&self, query: &str) -> String {
        match &self.bias {
            Some(bias) if !bias.pattern.is_match(query) => format!("{} {query}", bias.keyword),
            _ => query.to_string(),
        }
    }

    /// Returns a copy of `request` with its query augmented.
    pub fn apply(&self, request: &SearchRequest) -> SearchRequest {
        SearchRequest {
            query: self.augment(&request.query),
            ..request.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::QueryAugmenter;
    use crate::model::suggestion::SearchRequest;

    fn moscow() -> QueryAugmenter {
        QueryAugmenter::new(Some("Москва")).expect("valid keyword")
    }

    #[test]
    fn prepends_missing_keyword() {
        assert_eq!(moscow().augment("Тверская"), "Москва Тверская");
    }

    #[test]
    fn keeps_query_that_mentions_keyword_in_any_case() {
        assert_eq!(moscow().augment("Москва Тверская"), "Москва Тверская");
        assert_eq!(moscow().augment("тверская москва"), "тверская москва");
        assert_eq!(moscow().augment("МОСКВА"), "МОСКВА");
    }

    #[test]
    fn is_idempotent() {
        let augmenter = moscow();
        let once = augmenter.augment("Арбат 10");
        assert_eq!(augmenter.augment(&once), once);
    }

    #[test]
    fn empty_query_receives_keyword_and_space() {
        assert_eq!(moscow().augment(""), "Москва ");
    }

    #[test]
    fn keyword_metacharacters_are_literal() {
        let augmenter = QueryAugmenter::new(Some("St. (Center)")).expect("valid keyword");
        assert_eq!(augmenter.augment("Stx (Center)"), "St. (Center) Stx (Center)");
        assert_eq!(augmenter.augment("st. (center) 5"), "st. (center) 5");
    }

    #[test]
    fn disabled_bias_leaves_queries_alone() {
        assert_eq!(QueryAugmenter::disabled().augment("Тверская"), "Тверская");
        let blank = QueryAugmenter::new(Some("  ")).expect("blank keyword");
        assert_eq!(blank.bias_keyword(), None);
        assert_eq!(blank.augment("Тверская"), "Тверская");
    }

    #[test]
    fn apply_returns_new_request() {
        let mut request = SearchRequest::new("Тверская");
        request.count = Some(10);
        let augmented = moscow().apply(&request);

        assert_eq!(augmented.query, "Москва Тверская");
        assert_eq!(augmented.count, Some(10));
        assert_eq!(request.query, "Тверская");
    }
}
