//! Hints
//!
//! A hint reveals the first and last letter of a random word the player has not
//! found yet. Budgeting is left to the caller.

use crate::core::LetterPool;
use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;

/// Character standing in for hidden letters
pub const MASK_CHAR: char = '-';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HintError {
    #[error("you have used up all your hints")]
    NoHintsLeft,
    #[error("every word has already been found")]
    Exhausted,
}

/// Mask all but the first and last character
///
/// # Examples
/// ```
/// use letterpot::game::mask_word;
///
/// assert_eq!(mask_word("crumble"), "c-----e");
/// assert_eq!(mask_word("espy"), "e--y");
/// ```
#[must_use]
pub fn mask_word(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    match chars.as_slice() {
        [] => String::new(),
        [only] => only.to_string(),
        [first, middle @ .., last] => {
            let mut masked = String::with_capacity(word.len());
            masked.push(*first);
            masked.extend(std::iter::repeat_n(MASK_CHAR, middle.len()));
            masked.push(*last);
            masked
        }
    }
}

/// Masked form of a random corpus word not in `exclude`
///
/// # Errors
/// Returns `HintError::Exhausted` if every corpus word is excluded.
pub fn hint<R, S>(pool: &LetterPool, exclude: &[S], rng: &mut R) -> Result<String, HintError>
where
    R: Rng + ?Sized,
    S: AsRef<str>,
{
    hint_among(pool.words(), exclude, rng)
}

/// Masked form of a random word from `candidates` not in `exclude`
///
/// # Errors
/// Returns `HintError::Exhausted` if every candidate is excluded.
pub fn hint_among<R, C, S>(
    candidates: &[C],
    exclude: &[S],
    rng: &mut R,
) -> Result<String, HintError>
where
    R: Rng + ?Sized,
    C: AsRef<str>,
    S: AsRef<str>,
{
    let remaining: Vec<&str> = candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|w| !exclude.iter().any(|e| e.as_ref() == *w))
        .collect();

    remaining
        .choose(rng)
        .map(|w| mask_word(w))
        .ok_or(HintError::Exhausted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn mask_keeps_ends() {
        assert_eq!(mask_word("zephyrs"), "z-----s");
        assert_eq!(mask_word("ab"), "ab");
        assert_eq!(mask_word("a"), "a");
        assert_eq!(mask_word(""), "");
    }

    #[test]
    fn mask_length_matches_word() {
        for word in ["espy", "hyper", "zephyr", "zephyrs"] {
            let masked = mask_word(word);
            assert_eq!(masked.len(), word.len());
            assert_eq!(masked.matches(MASK_CHAR).count(), word.len() - 2);
        }
    }

    #[test]
    fn hint_skips_excluded_words() {
        let pool = LetterPool::new("ehprsyz", ["hyper", "spry", "zephyr"]).unwrap();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let masked = hint(&pool, &["hyper", "zephyr"], &mut rng).unwrap();
            assert_eq!(masked, "s--y");
        }
    }

    #[test]
    fn hint_comes_from_corpus() {
        let pool = LetterPool::new("ehprsyz", ["hyper", "spry", "zephyr"]).unwrap();
        let masks: Vec<String> = pool.words().iter().map(|w| mask_word(w)).collect();
        let none: &[&str] = &[];

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let masked = hint(&pool, none, &mut rng).unwrap();
            assert!(masks.contains(&masked));
        }
    }

    #[test]
    fn hint_among_only_draws_candidates() {
        let none: &[&str] = &[];
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(hint_among(&["spry"], none, &mut rng).unwrap(), "s--y");
        }
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            hint_among(&["spry"], &["spry"], &mut rng),
            Err(HintError::Exhausted)
        );
    }

    #[test]
    fn hint_fails_when_everything_guessed() {
        let pool = LetterPool::new("ehprsyz", ["hyper", "spry"]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let guessed = vec!["spry".to_string(), "hyper".to_string()];
        assert_eq!(hint(&pool, &guessed, &mut rng), Err(HintError::Exhausted));
    }
}
