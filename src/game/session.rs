//! Player session state
//!
//! The session owns everything that changes during a round: score, accepted
//! words and the remaining hint budget. Pool and lexicon are passed in on each
//! call rather than stored.

use super::hint::{HintError, hint_among};
use crate::core::{CategorizedWords, Category, LetterPool, Lexicon};
use crate::scoring::{InvalidWord, score_word};
use log::info;
use rand::Rng;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Why a submitted guess was not accepted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("you've already guessed \"{0}\"")]
    AlreadyGuessed(String),
    #[error(transparent)]
    Invalid(#[from] InvalidWord),
}

/// An accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedGuess {
    pub word: String,
    pub category: Category,
    pub earned: u32,
    pub possible: u32,
    /// Session score after this guess
    pub total: u32,
}

/// Mutable state of one player for one round
#[derive(Debug, Clone)]
pub struct Session {
    player: String,
    score: u32,
    guessed: Vec<String>,
    seen: FxHashSet<String>,
    hints_remaining: usize,
}

impl Session {
    #[must_use]
    pub fn new(player: impl Into<String>, hint_budget: usize) -> Self {
        Self {
            player: player.into(),
            score: 0,
            guessed: Vec::new(),
            seen: FxHashSet::default(),
            hints_remaining: hint_budget,
        }
    }

    #[must_use]
    pub fn player(&self) -> &str {
        &self.player
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    /// Accepted words in submission order
    #[must_use]
    pub fn guessed(&self) -> &[String] {
        &self.guessed
    }

    #[must_use]
    pub fn has_guessed(&self, word: &str) -> bool {
        self.seen.contains(word)
    }

    #[must_use]
    pub const fn hints_remaining(&self) -> usize {
        self.hints_remaining
    }

    /// Accepted words grouped by every category they carry
    #[must_use]
    pub fn categorized(&self, lexicon: &Lexicon) -> CategorizedWords {
        CategorizedWords::from_guesses(&self.guessed, lexicon)
    }

    /// Submit a guess
    ///
    /// Without an explicit category the word's first tagged category is used,
    /// falling back to noun for untagged words. The session changes only when
    /// the guess is accepted.
    ///
    /// # Errors
    /// - `AlreadyGuessed` if the word was accepted before
    /// - `Invalid` if validation fails
    pub fn submit(
        &mut self,
        pool: &LetterPool,
        lexicon: &Lexicon,
        word: &str,
        category: Option<Category>,
    ) -> Result<AcceptedGuess, GuessError> {
        if self.has_guessed(word) {
            return Err(GuessError::AlreadyGuessed(word.to_string()));
        }

        let category = category
            .or_else(|| lexicon.primary_category(word))
            .unwrap_or_default();
        let score = score_word(pool, lexicon, word, category)?;

        self.score += score.earned;
        self.guessed.push(word.to_string());
        self.seen.insert(word.to_string());

        info!(
            "{} found \"{word}\" as {category} for {} points",
            self.player, score.earned
        );

        Ok(AcceptedGuess {
            word: word.to_string(),
            category,
            earned: score.earned,
            possible: score.possible,
            total: self.score,
        })
    }

    /// Spend one hint on a masked unfound word
    ///
    /// Only words the lexicon tags are hinted, since nothing else can be
    /// accepted. The budget is only charged when a hint is actually produced.
    ///
    /// # Errors
    /// - `NoHintsLeft` once the budget is spent
    /// - `Exhausted` if every playable word has been found
    pub fn request_hint<R: Rng + ?Sized>(
        &mut self,
        pool: &LetterPool,
        lexicon: &Lexicon,
        rng: &mut R,
    ) -> Result<String, HintError> {
        if self.hints_remaining == 0 {
            return Err(HintError::NoHintsLeft);
        }

        let masked = hint_among(&lexicon.playable_in(pool), &self.guessed, rng)?;
        self.hints_remaining -= 1;
        Ok(masked)
    }
}
