//! Per-guess scoring

use super::points::PointTable;
use super::validator::{InvalidWord, validate};
use crate::core::{Category, LetterPool, Lexicon};

/// Points earned by one guess alongside the pool's ceiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordScore {
    pub earned: u32,
    pub possible: u32,
}

/// Validate and score a guess
///
/// The point table is recomputed from the corpus on every call, so `possible`
/// is the same for every guess against the same pool. Adding `earned` to a
/// running total is left to the caller.
///
/// # Errors
/// Propagates the validation failure; nothing is scored in that case.
///
/// # Examples
/// ```
/// use letterpot::core::{Category, LetterPool, Lexicon};
/// use letterpot::scoring::score_word;
///
/// let pool = LetterPool::new("ehprsyz", ["hype", "prey", "zeps"]).unwrap();
/// let lexicon = Lexicon::from_records(&[("zeps", &["plural noun"])]).unwrap();
///
/// let score = score_word(&pool, &lexicon, "zeps", Category::PluralNoun).unwrap();
/// assert!(score.earned > 0 && score.earned <= score.possible);
/// ```
pub fn score_word(
    pool: &LetterPool,
    lexicon: &Lexicon,
    word: &str,
    category: Category,
) -> Result<WordScore, InvalidWord> {
    let word = validate(pool, lexicon, word, category)?;
    let table = PointTable::compute(pool);

    Ok(WordScore {
        earned: table.word_points(word),
        possible: table.max_possible(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::GameData;

    #[test]
    fn hyper_as_adjective_scores() {
        let data = GameData::embedded().unwrap();
        let pool = data.pool("ehprsyz").unwrap();

        let score = score_word(pool, data.lexicon(), "hyper", Category::Adjective).unwrap();
        assert_eq!(score.earned, 15);
        assert_eq!(score.possible, 453);
        assert!(score.earned > 0 && score.earned <= score.possible);
    }

    #[test]
    fn hyper_as_verb_is_wrong_category() {
        let data = GameData::embedded().unwrap();
        let pool = data.pool("ehprsyz").unwrap();

        let result = score_word(pool, data.lexicon(), "hyper", Category::Verb);
        assert!(matches!(result, Err(InvalidWord::WrongCategory { .. })));
    }

    #[test]
    fn possible_is_constant_across_guesses() {
        let data = GameData::embedded().unwrap();
        let pool = data.pool("aerlswy").unwrap();

        let a = score_word(pool, data.lexicon(), "lawyer", Category::Noun).unwrap();
        let b = score_word(pool, data.lexicon(), "weary", Category::Adjective).unwrap();
        assert_eq!(a.possible, b.possible);
        assert_eq!(a.possible, PointTable::compute(pool).max_possible());
    }

    #[test]
    fn longer_word_with_same_letters_earns_more() {
        let data = GameData::embedded().unwrap();
        let pool = data.pool("ehprsyz").unwrap();

        let zephyr = score_word(pool, data.lexicon(), "zephyr", Category::Noun).unwrap();
        let zephyrs = score_word(pool, data.lexicon(), "zephyrs", Category::PluralNoun).unwrap();
        assert!(zephyrs.earned > zephyr.earned);
    }

    #[test]
    fn invalid_guess_is_not_scored() {
        let data = GameData::embedded().unwrap();
        let pool = data.pool("ehprsyz").unwrap();

        assert!(matches!(
            score_word(pool, data.lexicon(), "spy", Category::Noun),
            Err(InvalidWord::TooShort { .. })
        ));
        assert!(matches!(
            score_word(pool, data.lexicon(), "lawyer", Category::Noun),
            Err(InvalidWord::NotInPool { .. })
        ));
    }
}
