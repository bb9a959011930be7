//! Story placeholder extraction
//!
//! A placeholder is a category name followed by a positive index inside angle
//! brackets: `<noun1>`, `<plural noun3>`. The same token appearing several
//! times is a single blank.

use crate::core::{Category, UnknownCategory};
use regex::Regex;
use rustc_hash::FxHashSet;
use std::sync::LazyLock;

/// Matches `<name><index>` where name is one or more space-separated words and
/// index is a positive integer, leading zeros allowed
///
/// `<noun01>` and `<noun1>` are distinct tokens; `<noun0>` is not a placeholder.
pub(crate) static PLACEHOLDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<([A-Za-z]+(?: [A-Za-z]+)*)([0-9]*[1-9][0-9]*)>")
        .expect("placeholder regex is valid")
});

/// One distinct blank in a story template
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placeholder {
    token: String,
    name: String,
    index: u32,
}

impl Placeholder {
    /// Token text between the brackets, e.g. `plural noun3`
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Category name with the index stripped
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn index(&self) -> u32 {
        self.index
    }

    /// Resolve the category this blank asks for
    ///
    /// # Errors
    /// Returns `UnknownCategory` if the name is not a recognized category.
    pub fn category(&self) -> Result<Category, UnknownCategory> {
        self.name.parse()
    }
}

/// Distinct placeholders of `template` in order of first appearance
///
/// # Examples
/// ```
/// use letterpot::madlibs::extract_placeholders;
///
/// let tokens: Vec<String> = extract_placeholders("A <noun1> and a <noun1> met a <verb2>.")
///     .iter()
///     .map(|p| p.token().to_string())
///     .collect();
/// assert_eq!(tokens, ["noun1", "verb2"]);
/// ```
#[must_use]
pub fn extract_placeholders(template: &str) -> Vec<Placeholder> {
    let mut seen = FxHashSet::default();
    let mut placeholders = Vec::new();

    for caps in PLACEHOLDER_RE.captures_iter(template) {
        let name = &caps[1];
        let digits = &caps[2];
        let token = format!("{name}{digits}");

        if !seen.insert(token.clone()) {
            continue;
        }

        // Indices too large for u32 still form a distinct token; saturate the number.
        let index = digits.parse().unwrap_or(u32::MAX);
        placeholders.push(Placeholder {
            token,
            name: name.to_string(),
            index,
        });
    }

    placeholders
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(template: &str) -> Vec<String> {
        extract_placeholders(template)
            .iter()
            .map(|p| p.token().to_string())
            .collect()
    }

    #[test]
    fn repeated_token_extracted_once() {
        assert_eq!(
            tokens("A <noun1> and a <noun1> met a <verb2>."),
            vec!["noun1", "verb2"]
        );
    }

    #[test]
    fn multi_word_category() {
        let placeholders = extract_placeholders("Many <plural noun3> sang.");
        assert_eq!(placeholders.len(), 1);
        assert_eq!(placeholders[0].token(), "plural noun3");
        assert_eq!(placeholders[0].name(), "plural noun");
        assert_eq!(placeholders[0].index(), 3);
        assert_eq!(placeholders[0].category(), Ok(Category::PluralNoun));
    }

    #[test]
    fn first_appearance_order() {
        assert_eq!(
            tokens("<verb2> <noun1> <adjective1> <verb2> <noun1> <pronoun1>"),
            vec!["verb2", "noun1", "adjective1", "pronoun1"]
        );
    }

    #[test]
    fn ignores_non_placeholders() {
        assert!(tokens("no blanks <here> or <noun> or noun1 or <noun0> or <noun00>").is_empty());
        assert!(tokens("").is_empty());
    }

    #[test]
    fn leading_zeros_allowed() {
        let placeholders = extract_placeholders("<noun01> <noun1> <verb010>");
        let tokens: Vec<&str> = placeholders.iter().map(Placeholder::token).collect();
        assert_eq!(tokens, ["noun01", "noun1", "verb010"]);
        assert_eq!(placeholders[0].index(), 1);
        assert_eq!(placeholders[2].index(), 10);
    }

    #[test]
    fn unknown_category_still_extracted() {
        let placeholders = extract_placeholders("Run <adverb1>!");
        assert_eq!(placeholders.len(), 1);
        assert_eq!(
            placeholders[0].category(),
            Err(UnknownCategory("adverb".to_string()))
        );
    }

    #[test]
    fn same_name_different_index_are_distinct() {
        assert_eq!(tokens("<noun1> <noun2> <noun10>"), vec!["noun1", "noun2", "noun10"]);
    }
}
