//! A full round: guessing phase followed by the story
//!
//! `Round` is what the front ends drive. It parses raw player input, forwards
//! guesses and hint requests to the session, and builds the end-of-round
//! summary.

use super::config::GameConfig;
use super::hint::HintError;
use super::session::{AcceptedGuess, GuessError, Session};
use crate::core::{CategorizedWords, Category, LetterPool, Lexicon};
use crate::madlibs::{FilledStory, fill_template_with_default};
use crate::scoring::PointTable;
use log::info;
use rand::Rng;
use rand::seq::IndexedRandom;

/// A parsed line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `word` or `word:category`
    Guess {
        word: String,
        category: Option<Category>,
    },
    Help,
    Done,
    Empty,
}

impl Command {
    /// Parse one line of input
    ///
    /// Input is case-insensitive. A category may follow the word after a
    /// colon; an unrecognized category is reported as an error.
    ///
    /// # Errors
    /// Returns the unrecognized category name.
    ///
    /// # Examples
    /// ```
    /// use letterpot::core::Category;
    /// use letterpot::game::Command;
    ///
    /// assert_eq!(Command::parse("HELP"), Ok(Command::Help));
    /// assert_eq!(
    ///     Command::parse("Hyper:adjective"),
    ///     Ok(Command::Guess { word: "hyper".into(), category: Some(Category::Adjective) })
    /// );
    /// ```
    pub fn parse(input: &str) -> Result<Self, crate::core::UnknownCategory> {
        let input = input.trim().to_lowercase();

        match input.as_str() {
            "" => Ok(Self::Empty),
            "help" => Ok(Self::Help),
            "done" => Ok(Self::Done),
            _ => {
                let (word, category) = match input.split_once(':') {
                    Some((word, name)) => (word.trim(), Some(name.parse::<Category>()?)),
                    None => (input.as_str(), None),
                };
                Ok(Self::Guess {
                    word: word.to_string(),
                    category,
                })
            }
        }
    }
}

/// Everything shown once guessing ends
#[derive(Debug, Clone)]
pub struct RoundSummary {
    pub player: String,
    pub score: u32,
    pub possible: u32,
    pub found: usize,
    pub missed: usize,
    /// Random sample of unfound words
    pub missed_sample: Vec<String>,
    pub story: FilledStory,
}

/// One player's round on one pool
pub struct Round<'a> {
    pool: &'a LetterPool,
    lexicon: &'a Lexicon,
    filler: &'a CategorizedWords,
    config: GameConfig,
    table: PointTable,
    session: Session,
}

impl<'a> Round<'a> {
    #[must_use]
    pub fn new(
        player: impl Into<String>,
        pool: &'a LetterPool,
        lexicon: &'a Lexicon,
        filler: &'a CategorizedWords,
        config: GameConfig,
    ) -> Self {
        let session = Session::new(player, config.hint_budget);
        info!(
            "round started for {} on pool {} ({} words)",
            session.player(),
            pool.key(),
            pool.len()
        );

        Self {
            pool,
            lexicon,
            filler,
            table: PointTable::compute(pool),
            config,
            session,
        }
    }

    #[must_use]
    pub const fn pool(&self) -> &'a LetterPool {
        self.pool
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Point table used for display; scoring recomputes its own
    #[must_use]
    pub const fn table(&self) -> &PointTable {
        &self.table
    }

    #[must_use]
    pub fn max_possible(&self) -> u32 {
        self.table.max_possible()
    }

    /// Submit a guess for scoring
    ///
    /// # Errors
    /// See [`Session::submit`].
    pub fn guess(
        &mut self,
        word: &str,
        category: Option<Category>,
    ) -> Result<AcceptedGuess, GuessError> {
        self.session.submit(self.pool, self.lexicon, word, category)
    }

    /// Request a hint from the session budget
    ///
    /// # Errors
    /// See [`Session::request_hint`].
    pub fn hint<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<String, HintError> {
        self.session.request_hint(self.pool, self.lexicon, rng)
    }

    /// Corpus words that can be accepted as guesses
    #[must_use]
    pub fn playable_words(&self) -> Vec<&'a str> {
        self.lexicon.playable_in(self.pool)
    }

    /// Playable words the player has not found, in corpus order
    #[must_use]
    pub fn missed_words(&self) -> Vec<&'a str> {
        missed_words(self.pool, self.lexicon, self.session.guessed())
    }

    /// Accepted words grouped by category
    #[must_use]
    pub fn found(&self) -> CategorizedWords {
        self.session.categorized(self.lexicon)
    }

    /// End the round and fill `template` with the player's words
    pub fn finish<R: Rng + ?Sized>(&self, template: &str, rng: &mut R) -> RoundSummary {
        let missed = self.missed_words();
        let missed_sample = missed
            .choose_multiple(rng, self.config.missed_sample)
            .map(|w| (*w).to_string())
            .collect();

        let guesses = self.found();
        let story = fill_template_with_default(
            template,
            &guesses,
            self.filler,
            &self.config.default_filler,
            rng,
        );

        RoundSummary {
            player: self.session.player().to_string(),
            score: self.session.score(),
            possible: self.max_possible(),
            found: self.session.guessed().len(),
            missed: missed.len(),
            missed_sample,
            story,
        }
    }
}

/// Tagged corpus words of `pool` not in `guessed`
///
/// Untagged corpus words are never counted: no guess could have scored them.
#[must_use]
pub fn missed_words<'p, S: AsRef<str>>(
    pool: &'p LetterPool,
    lexicon: &Lexicon,
    guessed: &[S],
) -> Vec<&'p str> {
    lexicon
        .playable_in(pool)
        .into_iter()
        .filter(|w| !guessed.iter().any(|g| g.as_ref() == *w))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::madlibs::WordSource;
    use crate::wordlists::GameData;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("  done "), Ok(Command::Done));
        assert_eq!(Command::parse("Help"), Ok(Command::Help));
        assert_eq!(Command::parse(""), Ok(Command::Empty));
        assert_eq!(
            Command::parse("ZEPHYR"),
            Ok(Command::Guess {
                word: "zephyr".to_string(),
                category: None
            })
        );
        assert_eq!(
            Command::parse("hers: plural noun"),
            Ok(Command::Guess {
                word: "hers".to_string(),
                category: Some(Category::PluralNoun)
            })
        );
        assert!(Command::parse("spry:adverb").is_err());
    }

    #[test]
    fn missed_words_excludes_guesses() {
        let pool = LetterPool::new("ehprsyz", ["hyper", "spry", "prey"]).unwrap();
        let lexicon = Lexicon::from_records(&[
            ("hyper", &["adjective"]),
            ("spry", &["adjective"]),
            ("prey", &["noun", "verb"]),
        ])
        .unwrap();
        assert_eq!(missed_words(&pool, &lexicon, &["spry"]), vec!["hyper", "prey"]);
        let none: &[String] = &[];
        assert_eq!(missed_words(&pool, &lexicon, none).len(), 3);
    }

    #[test]
    fn missed_words_skip_untagged() {
        let pool = LetterPool::new("ehprsyz", ["hesp", "hyper", "spry"]).unwrap();
        let lexicon = Lexicon::from_records(&[("hyper", &["adjective"]), ("spry", &["adjective"])])
            .unwrap();
        assert_eq!(missed_words(&pool, &lexicon, &["spry"]), vec!["hyper"]);
    }

    #[test]
    fn full_round_uses_guesses_in_story() {
        let data = GameData::embedded().unwrap();
        let pool = data.pool("ehprsyz").unwrap();
        let mut round = Round::new(
            "nell",
            pool,
            data.lexicon(),
            data.filler(),
            GameConfig::default(),
        );

        round.guess("zephyr", None).unwrap();
        round.guess("spry", None).unwrap();
        assert!(round.guess("zephyr", None).is_err());

        let mut rng = StdRng::seed_from_u64(42);
        let summary = round.finish("The <noun1> was <adjective1>.", &mut rng);

        assert_eq!(summary.story.text, "The zephyr was spry.");
        assert_eq!(summary.story.guesses_used(), 2);
        assert_eq!(summary.found, 2);
        let playable = round.playable_words();
        assert!(playable.len() < pool.len());
        assert!(!playable.contains(&"hesp"));
        assert_eq!(summary.missed, playable.len() - 2);
        assert_eq!(summary.missed_sample.len(), 5);
        assert!(summary.missed_sample.iter().all(|w| {
            playable.contains(&w.as_str()) && w != "zephyr" && w != "spry"
        }));
        assert_eq!(summary.possible, 453);
    }

    #[test]
    fn round_without_guesses_falls_back() {
        let data = GameData::embedded().unwrap();
        let pool = data.pool("aceilms").unwrap();
        let round = Round::new("p", pool, data.lexicon(), data.filler(), GameConfig::new(0));

        let mut rng = StdRng::seed_from_u64(3);
        let summary = round.finish("<verb1>", &mut rng);

        assert_eq!(summary.score, 0);
        assert_eq!(summary.story.blanks[0].source, WordSource::Fallback);
        assert!(
            data.filler()
                .words(Category::Verb)
                .contains(&summary.story.text)
        );
    }

    #[test]
    fn round_hint_budget_from_config() {
        let data = GameData::embedded().unwrap();
        let pool = data.pool("aerlswy").unwrap();
        let mut round = Round::new("p", pool, data.lexicon(), data.filler(), GameConfig::new(1));
        let mut rng = StdRng::seed_from_u64(0);

        assert!(round.hint(&mut rng).is_ok());
        assert_eq!(round.hint(&mut rng), Err(HintError::NoHintsLeft));
    }
}
