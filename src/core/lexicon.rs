//! Category-tagged word records
//!
//! Every corpus word that can be used as a guess is tagged here with the
//! categories it belongs to. One record per word keeps category membership in a
//! single place instead of parallel per-category lists.

use super::category::{Category, CategorySet, UnknownCategory};
use super::pool::LetterPool;
use rustc_hash::FxHashMap;

/// Word -> categories lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    entries: FxHashMap<String, CategorySet>,
}

impl Lexicon {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(word, category names)` records
    ///
    /// # Errors
    /// Returns `UnknownCategory` for the first unrecognized category name.
    ///
    /// # Examples
    /// ```
    /// use letterpot::core::{Category, Lexicon};
    ///
    /// let lexicon = Lexicon::from_records(&[
    ///     ("hyper", &["noun", "adjective"]),
    ///     ("hers", &["plural noun", "pronoun"]),
    /// ])
    /// .unwrap();
    ///
    /// assert!(lexicon.has_category("hyper", Category::Adjective));
    /// assert!(!lexicon.has_category("hyper", Category::Verb));
    /// ```
    pub fn from_records(records: &[(&str, &[&str])]) -> Result<Self, UnknownCategory> {
        let mut lexicon = Self::new();
        for &(word, categories) in records {
            for name in categories {
                lexicon.tag(word, name.parse()?);
            }
        }
        Ok(lexicon)
    }

    /// Add `category` to the tags of `word`
    pub fn tag(&mut self, word: impl Into<String>, category: Category) {
        self.entries.entry(word.into()).or_default().insert(category);
    }

    /// Add every tag of `other`, keeping existing ones
    pub fn merge(&mut self, other: Self) {
        for (word, set) in other.entries {
            let entry = self.entries.entry(word).or_default();
            for category in set.iter() {
                entry.insert(category);
            }
        }
    }

    /// All categories of `word`, empty if it is untagged
    #[must_use]
    pub fn categories_of(&self, word: &str) -> CategorySet {
        self.entries.get(word).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn has_category(&self, word: &str, category: Category) -> bool {
        self.categories_of(word).contains(category)
    }

    /// The category used when a player does not name one
    #[must_use]
    pub fn primary_category(&self, word: &str) -> Option<Category> {
        self.categories_of(word).first()
    }

    /// Corpus words of `pool` carrying at least one tag, in corpus order
    ///
    /// Only these can ever be accepted as guesses.
    #[must_use]
    pub fn playable_in<'p>(&self, pool: &'p LetterPool) -> Vec<&'p str> {
        pool.words()
            .iter()
            .map(String::as_str)
            .filter(|w| self.entries.contains_key(*w))
            .collect()
    }

    /// Tagged words in sorted order
    #[must_use]
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    /// Tagged words belonging to `category`, sorted
    #[must_use]
    pub fn words_in(&self, category: Category) -> Vec<&str> {
        let mut words: Vec<&str> = self
            .entries
            .iter()
            .filter(|(_, set)| set.contains(category))
            .map(|(word, _)| word.as_str())
            .collect();
        words.sort_unstable();
        words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
