//! Grammatical categories
//!
//! Categories constrain both player guesses and story blanks. A word can carry
//! several categories at once, tracked with a compact [`CategorySet`].

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A part-of-speech tag used by guesses and story placeholders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Category {
    #[default]
    Noun,
    PluralNoun,
    Verb,
    Adjective,
    Pronoun,
}

/// A category name that is not one of the recognized parts of speech
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category \"{0}\"")]
pub struct UnknownCategory(pub String);

impl Category {
    /// Number of categories
    pub const COUNT: usize = 5;

    /// All categories in canonical order
    pub const ALL: [Self; Self::COUNT] = [
        Self::Noun,
        Self::PluralNoun,
        Self::Verb,
        Self::Adjective,
        Self::Pronoun,
    ];

    /// The name used in data files and placeholders
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Noun => "noun",
            Self::PluralNoun => "plural noun",
            Self::Verb => "verb",
            Self::Adjective => "adjective",
            Self::Pronoun => "pronoun",
        }
    }

    /// Indefinite article for the name: "a verb", "an adjective"
    #[must_use]
    pub const fn article(self) -> &'static str {
        match self {
            Self::Adjective => "an",
            _ => "a",
        }
    }

    /// Position in [`Category::ALL`]
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a category by name
    ///
    /// Matching ignores ASCII case and collapses runs of whitespace, so
    /// `"Plural  Noun"` resolves to [`Category::PluralNoun`].
    ///
    /// # Examples
    /// ```
    /// use letterpot::core::Category;
    ///
    /// assert_eq!(Category::from_name("verb"), Some(Category::Verb));
    /// assert_eq!(Category::from_name("plural noun"), Some(Category::PluralNoun));
    /// assert_eq!(Category::from_name("adverb"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_lowercase();

        Self::ALL.into_iter().find(|c| c.name() == normalized)
    }

    #[inline]
    const fn bit(self) -> u8 {
        1 << self.index()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UnknownCategory(s.trim().to_string()))
    }
}

/// Set of categories attached to a single word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CategorySet(u8);

impl CategorySet {
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, category: Category) {
        self.0 |= category.bit();
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, category: Category) -> bool {
        self.0 & category.bit() != 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Categories in canonical order
    pub fn iter(self) -> impl Iterator<Item = Category> {
        Category::ALL.into_iter().filter(move |&c| self.contains(c))
    }

    /// First category in canonical order, if any
    #[must_use]
    pub fn first(self) -> Option<Category> {
        self.iter().next()
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut set = Self::empty();
        for category in iter {
            set.insert(category);
        }
        set
    }
}

impl fmt::Display for CategorySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(Category::name).collect();
        write!(f, "{}", names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_exact() {
        for category in Category::ALL {
            assert_eq!(Category::from_name(category.name()), Some(category));
        }
    }

    #[test]
    fn from_name_normalizes_case_and_spacing() {
        assert_eq!(Category::from_name("NOUN"), Some(Category::Noun));
        assert_eq!(
            Category::from_name("  Plural   Noun "),
            Some(Category::PluralNoun)
        );
    }

    #[test]
    fn from_str_reports_unknown() {
        let err = "adverb".parse::<Category>().unwrap_err();
        assert_eq!(err, UnknownCategory("adverb".to_string()));
        assert_eq!(err.to_string(), "unknown category \"adverb\"");
    }

    #[test]
    fn article_matches_name() {
        for category in Category::ALL {
            let vowel = category.name().starts_with(['a', 'e', 'i', 'o', 'u']);
            assert_eq!(category.article(), if vowel { "an" } else { "a" });
        }
    }

    #[test]
    fn index_matches_position_in_all() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn category_set_insert_and_contains() {
        let mut set = CategorySet::empty();
        assert!(set.is_empty());

        set.insert(Category::Verb);
        set.insert(Category::Noun);
        set.insert(Category::Verb);

        assert_eq!(set.len(), 2);
        assert!(set.contains(Category::Noun));
        assert!(set.contains(Category::Verb));
        assert!(!set.contains(Category::Adjective));
    }

    #[test]
    fn category_set_iterates_in_canonical_order() {
        let set: CategorySet = [Category::Adjective, Category::Noun].into_iter().collect();
        let order: Vec<Category> = set.iter().collect();
        assert_eq!(order, vec![Category::Noun, Category::Adjective]);
        assert_eq!(set.first(), Some(Category::Noun));
        assert_eq!(set.to_string(), "noun, adjective");
    }
}
