//! Guess validation
//!
//! Checks run in a fixed order and the first failure wins: length, then corpus
//! membership, then category.

use crate::core::{Category, LetterPool, Lexicon};
use thiserror::Error;

/// Shortest accepted guess
pub const MIN_WORD_LENGTH: usize = 4;

/// Why a guess was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidWord {
    #[error("\"{word}\" is too short, words need at least {MIN_WORD_LENGTH} letters")]
    TooShort { word: String },
    #[error("\"{word}\" is not a valid word for these letters")]
    NotInPool { word: String },
    #[error("\"{word}\" is not {article} {category}", article = .category.article())]
    WrongCategory { word: String, category: Category },
}

impl InvalidWord {
    /// The rejected word
    #[must_use]
    pub fn word(&self) -> &str {
        match self {
            Self::TooShort { word } | Self::NotInPool { word } | Self::WrongCategory { word, .. } => {
                word
            }
        }
    }
}

/// Validate `word` as a guess of `category` for `pool`
///
/// Returns the word unchanged on success. No state is touched either way.
///
/// # Errors
/// - `TooShort` if the word has fewer than 4 letters
/// - `NotInPool` if the word is not in the pool's corpus
/// - `WrongCategory` if the lexicon does not tag the word with `category`
///
/// # Examples
/// ```
/// use letterpot::core::{Category, LetterPool, Lexicon};
/// use letterpot::scoring::{InvalidWord, validate};
///
/// let pool = LetterPool::new("ehprsyz", ["hyper", "spry"]).unwrap();
/// let lexicon = Lexicon::from_records(&[("hyper", &["noun", "adjective"])]).unwrap();
///
/// assert_eq!(validate(&pool, &lexicon, "hyper", Category::Adjective), Ok("hyper"));
/// assert!(matches!(
///     validate(&pool, &lexicon, "hyper", Category::Verb),
///     Err(InvalidWord::WrongCategory { .. })
/// ));
/// ```
pub fn validate<'w>(
    pool: &LetterPool,
    lexicon: &Lexicon,
    word: &'w str,
    category: Category,
) -> Result<&'w str, InvalidWord> {
    if word.chars().count() < MIN_WORD_LENGTH {
        return Err(InvalidWord::TooShort {
            word: word.to_string(),
        });
    }

    if !pool.contains(word) {
        return Err(InvalidWord::NotInPool {
            word: word.to_string(),
        });
    }

    if !lexicon.has_category(word, category) {
        return Err(InvalidWord::WrongCategory {
            word: word.to_string(),
            category,
        });
    }

    Ok(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (LetterPool, Lexicon) {
        let pool = LetterPool::new("ehprsyz", ["hyper", "spry", "prey", "hesp"]).unwrap();
        let lexicon = Lexicon::from_records(&[
            ("hyper", &["noun", "adjective"]),
            ("spry", &["adjective"]),
            ("prey", &["noun", "verb"]),
            ("hey", &["noun"]),
        ])
        .unwrap();
        (pool, lexicon)
    }

    #[test]
    fn accepts_valid_guess() {
        let (pool, lexicon) = setup();
        assert_eq!(validate(&pool, &lexicon, "prey", Category::Verb), Ok("prey"));
        assert_eq!(validate(&pool, &lexicon, "prey", Category::Noun), Ok("prey"));
    }

    #[test]
    fn three_letter_word_is_too_short_for_every_category() {
        let (pool, lexicon) = setup();
        for category in Category::ALL {
            assert_eq!(
                validate(&pool, &lexicon, "hey", category),
                Err(InvalidWord::TooShort {
                    word: "hey".to_string()
                })
            );
        }
    }

    #[test]
    fn english_word_outside_corpus_not_in_pool() {
        let (pool, lexicon) = setup();
        assert_eq!(
            validate(&pool, &lexicon, "sheep", Category::Noun),
            Err(InvalidWord::NotInPool {
                word: "sheep".to_string()
            })
        );
    }

    #[test]
    fn corpus_word_outside_category() {
        let (pool, lexicon) = setup();
        assert_eq!(
            validate(&pool, &lexicon, "spry", Category::Noun),
            Err(InvalidWord::WrongCategory {
                word: "spry".to_string(),
                category: Category::Noun
            })
        );
    }

    #[test]
    fn untagged_corpus_word_wrong_category() {
        let (pool, lexicon) = setup();
        let err = validate(&pool, &lexicon, "hesp", Category::Noun).unwrap_err();
        assert!(matches!(err, InvalidWord::WrongCategory { .. }));
        assert_eq!(err.word(), "hesp");
    }

    #[test]
    fn error_messages() {
        let err = InvalidWord::WrongCategory {
            word: "spry".to_string(),
            category: Category::PluralNoun,
        };
        assert_eq!(err.to_string(), "\"spry\" is not a plural noun");

        let err = InvalidWord::WrongCategory {
            word: "prey".to_string(),
            category: Category::Adjective,
        };
        assert_eq!(err.to_string(), "\"prey\" is not an adjective");
    }
}
