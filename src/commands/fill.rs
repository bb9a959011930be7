//! Story filling command
//!
//! Fills a template from a list of words without playing a round. Words are
//! grouped by their lexicon categories exactly as accepted guesses would be.

use crate::core::{CategorizedWords, Lexicon};
use crate::madlibs::{FilledStory, extract_placeholders, fill_template_with_default};
use rand::Rng;

/// Configuration for filling a story
pub struct FillConfig {
    pub words: Vec<String>,
    pub default_word: String,
}

impl FillConfig {
    #[must_use]
    pub fn new(words: Vec<String>, default_word: impl Into<String>) -> Self {
        Self {
            words: words.iter().map(|w| w.trim().to_lowercase()).collect(),
            default_word: default_word.into(),
        }
    }
}

/// Result of filling a story
pub struct FillResult {
    pub placeholders: usize,
    /// Supplied words the lexicon does not know, and so could not be used
    pub untagged: Vec<String>,
    pub story: FilledStory,
}

/// Fill `template` with `config.words`, then `filler`
pub fn fill_story<R: Rng + ?Sized>(
    template: &str,
    config: &FillConfig,
    lexicon: &Lexicon,
    filler: &CategorizedWords,
    rng: &mut R,
) -> FillResult {
    let guesses = CategorizedWords::from_guesses(&config.words, lexicon);
    let untagged = config
        .words
        .iter()
        .filter(|w| lexicon.categories_of(w).is_empty())
        .cloned()
        .collect();

    let story = fill_template_with_default(template, &guesses, filler, &config.default_word, rng);

    FillResult {
        placeholders: extract_placeholders(template).len(),
        untagged,
        story,
    }
}
