//! Single-word scoring command
//!
//! Validates and scores one word against a pool without starting a round.

use crate::core::{Category, LetterPool, Lexicon};
use crate::scoring::{InvalidWord, PointTable, score_word};

/// Result of scoring a word
pub struct ScoreReport {
    pub pool: String,
    pub word: String,
    pub category: Category,
    /// Points per letter of the word, in word order
    pub letters: Vec<(char, u32)>,
    pub outcome: Result<(u32, u32), InvalidWord>,
}

/// Score `word` for `pool`, auto-detecting the category when none is given
#[must_use]
pub fn score_command(
    pool: &LetterPool,
    lexicon: &Lexicon,
    word: &str,
    category: Option<Category>,
) -> ScoreReport {
    let word = word.trim().to_lowercase();
    let category = category
        .or_else(|| lexicon.primary_category(&word))
        .unwrap_or_default();

    let outcome = score_word(pool, lexicon, &word, category).map(|s| (s.earned, s.possible));

    let letters = if outcome.is_ok() {
        let table = PointTable::compute(pool);
        word.bytes()
            .map(|b| (b as char, table.points(b).unwrap_or(0)))
            .collect()
    } else {
        Vec::new()
    };

    ScoreReport {
        pool: pool.key().to_string(),
        word,
        category,
        letters,
        outcome,
    }
}
