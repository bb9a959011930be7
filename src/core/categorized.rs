//! Word lists grouped by category
//!
//! Used both for the player's accepted guesses and for the fallback story
//! vocabulary. Lists keep insertion order so that anything derived from them is
//! independent of hash iteration order.

use super::category::{Category, UnknownCategory};
use super::lexicon::Lexicon;

/// Ordered, per-category word lists
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorizedWords {
    lists: [Vec<String>; Category::COUNT],
}

impl CategorizedWords {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(category name, words)` records
    ///
    /// # Errors
    /// Returns `UnknownCategory` if a record names an unrecognized category.
    pub fn from_records(records: &[(&str, &[&str])]) -> Result<Self, UnknownCategory> {
        let mut words = Self::new();
        for &(name, list) in records {
            let category: Category = name.parse()?;
            for &word in list {
                words.push(category, word);
            }
        }
        Ok(words)
    }

    /// Group `guesses` by every category the lexicon tags them with
    ///
    /// A guess tagged with several categories appears under each of them;
    /// untagged guesses are left out.
    ///
    /// # Examples
    /// ```
    /// use letterpot::core::{CategorizedWords, Category, Lexicon};
    ///
    /// let lexicon = Lexicon::from_records(&[("hype", &["noun", "verb"])]).unwrap();
    /// let grouped = CategorizedWords::from_guesses(["hype", "zzzz"], &lexicon);
    ///
    /// assert_eq!(grouped.words(Category::Noun), ["hype"]);
    /// assert_eq!(grouped.words(Category::Verb), ["hype"]);
    /// assert!(grouped.words(Category::Adjective).is_empty());
    /// ```
    pub fn from_guesses<I, S>(guesses: I, lexicon: &Lexicon) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut grouped = Self::new();
        for guess in guesses {
            let guess = guess.as_ref();
            for category in lexicon.categories_of(guess).iter() {
                grouped.push(category, guess);
            }
        }
        grouped
    }

    /// Append `word` to `category`, ignoring duplicates within that category
    pub fn push(&mut self, category: Category, word: impl Into<String>) {
        let word = word.into();
        let list = &mut self.lists[category.index()];
        if !list.contains(&word) {
            list.push(word);
        }
    }

    #[must_use]
    pub fn words(&self, category: Category) -> &[String] {
        &self.lists[category.index()]
    }

    /// Total number of entries across categories
    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.iter().all(Vec::is_empty)
    }

    /// Non-empty categories with their words, in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        Category::ALL
            .into_iter()
            .map(|c| (c, self.words(c)))
            .filter(|(_, words)| !words.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_ignores_duplicates_per_category() {
        let mut words = CategorizedWords::new();
        words.push(Category::Verb, "run");
        words.push(Category::Verb, "run");
        words.push(Category::Noun, "run");

        assert_eq!(words.words(Category::Verb), ["run"]);
        assert_eq!(words.words(Category::Noun), ["run"]);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn from_records_preserves_order() {
        let words =
            CategorizedWords::from_records(&[("verb", &["jump", "run"]), ("noun", &["fish"])])
                .unwrap();
        assert_eq!(words.words(Category::Verb), ["jump", "run"]);
        assert_eq!(words.words(Category::Noun), ["fish"]);
    }

    #[test]
    fn from_records_rejects_unknown_category() {
        assert!(CategorizedWords::from_records(&[("adverb", &["fast"])]).is_err());
    }

    #[test]
    fn from_guesses_places_word_under_every_category() {
        let lexicon = Lexicon::from_records(&[
            ("hers", &["plural noun", "pronoun"]),
            ("spry", &["adjective"]),
        ])
        .unwrap();

        let grouped = CategorizedWords::from_guesses(["spry", "hers"], &lexicon);
        assert_eq!(grouped.words(Category::PluralNoun), ["hers"]);
        assert_eq!(grouped.words(Category::Pronoun), ["hers"]);
        assert_eq!(grouped.words(Category::Adjective), ["spry"]);

        let order: Vec<Category> = grouped.iter().map(|(c, _)| c).collect();
        assert_eq!(
            order,
            vec![Category::PluralNoun, Category::Adjective, Category::Pronoun]
        );
    }

    #[test]
    fn empty_by_default() {
        let words = CategorizedWords::new();
        assert!(words.is_empty());
        assert_eq!(words.iter().count(), 0);
    }

    #[test]
    fn iter_never_yields_empty_lists() {
        let mut words = CategorizedWords::new();
        words.push(Category::Verb, "run");

        let lists: Vec<(Category, &[String])> = words.iter().collect();
        assert_eq!(lists.len(), 1);
        assert!(lists.iter().all(|(_, list)| !list.is_empty()));
    }
}
