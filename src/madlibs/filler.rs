//! Story filling
//!
//! Each distinct blank gets one word, chosen in first-appearance order:
//! 1. an unused player guess for the blank's category
//! 2. otherwise an unused fallback word for that category
//! 3. otherwise the default filler word
//!
//! "Unused" is tracked per category, so a word listed under two categories can
//! fill one blank of each.

use super::template::{PLACEHOLDER_RE, Placeholder, extract_placeholders};
use crate::core::{CategorizedWords, Category, UnknownCategory};
use log::{debug, warn};
use rand::Rng;
use rand::seq::IndexedRandom;
use regex::Captures;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// Word used when a category has no candidates left
pub const DEFAULT_FILLER_WORD: &str = "square";

/// Where a blank's word came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordSource {
    Guess,
    Fallback,
    Default,
}

/// A resolved blank
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilledBlank {
    pub placeholder: Placeholder,
    pub category: Category,
    pub word: String,
    pub source: WordSource,
}

/// Result of one fill pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilledStory {
    /// Story text with every recognized placeholder replaced
    pub text: String,
    /// Resolved blanks in first-appearance order
    pub blanks: Vec<FilledBlank>,
    /// Placeholders whose category was not recognized, left in the text as-is
    pub unknown: Vec<UnknownCategory>,
}

impl FilledStory {
    /// Number of blanks filled from the player's guesses
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.blanks
            .iter()
            .filter(|b| b.source == WordSource::Guess)
            .count()
    }
}

impl fmt::Display for FilledStory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Fill `template` using `guesses` first and `fallback` second
///
/// Blanks that run out of candidates get [`DEFAULT_FILLER_WORD`].
///
/// # Examples
/// ```
/// use letterpot::core::{CategorizedWords, Category};
/// use letterpot::madlibs::fill_template;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let mut guesses = CategorizedWords::new();
/// guesses.push(Category::Noun, "zephyr");
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let story = fill_template("A <noun1> blew.", &guesses, &CategorizedWords::new(), &mut rng);
/// assert_eq!(story.text, "A zephyr blew.");
/// ```
pub fn fill_template<R: Rng + ?Sized>(
    template: &str,
    guesses: &CategorizedWords,
    fallback: &CategorizedWords,
    rng: &mut R,
) -> FilledStory {
    fill_template_with_default(template, guesses, fallback, DEFAULT_FILLER_WORD, rng)
}

/// Same as [`fill_template`] with a custom word for exhausted categories
pub fn fill_template_with_default<R: Rng + ?Sized>(
    template: &str,
    guesses: &CategorizedWords,
    fallback: &CategorizedWords,
    default_word: &str,
    rng: &mut R,
) -> FilledStory {
    let mut used: [FxHashSet<&str>; Category::COUNT] = Default::default();
    let mut blanks = Vec::new();
    let mut unknown = Vec::new();

    for placeholder in extract_placeholders(template) {
        let category = match placeholder.category() {
            Ok(category) => category,
            Err(err) => {
                warn!("leaving <{}> unfilled: {err}", placeholder.token());
                unknown.push(err);
                continue;
            }
        };

        let used_here = &mut used[category.index()];
        let (word, source) = if let Some(word) = pick_unused(guesses, category, used_here, rng) {
            (word, WordSource::Guess)
        } else if let Some(word) = pick_unused(fallback, category, used_here, rng) {
            (word, WordSource::Fallback)
        } else {
            warn!("no {category} words left for <{}>", placeholder.token());
            (default_word, WordSource::Default)
        };

        if source != WordSource::Default {
            used_here.insert(word);
        }
        debug!("<{}> -> {word} ({source:?})", placeholder.token());

        blanks.push(FilledBlank {
            placeholder,
            category,
            word: word.to_string(),
            source,
        });
    }

    let text = substitute(template, &blanks);

    FilledStory {
        text,
        blanks,
        unknown,
    }
}

/// Uniformly random word from `words[category]` not yet in `used`
fn pick_unused<'w, R: Rng + ?Sized>(
    words: &'w CategorizedWords,
    category: Category,
    used: &FxHashSet<&str>,
    rng: &mut R,
) -> Option<&'w str> {
    let candidates: Vec<&'w str> = words
        .words(category)
        .iter()
        .map(String::as_str)
        .filter(|w| !used.contains(w))
        .collect();

    candidates.choose(rng).copied()
}

/// Replace every occurrence of each resolved token, scanning left to right
fn substitute(template: &str, blanks: &[FilledBlank]) -> String {
    let lookup: FxHashMap<&str, &str> = blanks
        .iter()
        .map(|b| (b.placeholder.token(), b.word.as_str()))
        .collect();

    PLACEHOLDER_RE
        .replace_all(template, |caps: &Captures| {
            let token = format!("{}{}", &caps[1], &caps[2]);
            lookup
                .get(token.as_str())
                .map_or_else(|| caps[0].to_string(), |word| (*word).to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fallback() -> CategorizedWords {
        CategorizedWords::from_records(&[
            ("noun", &["banana", "lizard"]),
            ("verb", &["run", "jump"]),
            ("adjective", &["shiny"]),
        ])
        .unwrap()
    }

    #[test]
    fn repeated_token_gets_same_word() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let story = fill_template(
                "A <noun1> and a <noun1> met a <verb2>.",
                &CategorizedWords::new(),
                &fallback(),
                &mut rng,
            );

            assert_eq!(story.blanks.len(), 2);
            let noun = &story.blanks[0].word;
            let verb = &story.blanks[1].word;
            assert_eq!(story.text, format!("A {noun} and a {noun} met a {verb}."));
        }
    }

    #[test]
    fn verb_blank_uses_fallback_verbs_only() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let story = fill_template("<verb1>", &CategorizedWords::new(), &fallback(), &mut rng);
            assert!(
                story.text == "run" || story.text == "jump",
                "unexpected {}",
                story.text
            );
            assert_eq!(story.blanks[0].source, WordSource::Fallback);
        }
    }

    #[test]
    fn guesses_preferred_over_fallback() {
        let mut guesses = CategorizedWords::new();
        guesses.push(Category::Noun, "zephyr");

        let mut rng = StdRng::seed_from_u64(1);
        let story = fill_template("<noun1> then <noun2>", &guesses, &fallback(), &mut rng);

        assert_eq!(story.blanks[0].word, "zephyr");
        assert_eq!(story.blanks[0].source, WordSource::Guess);
        assert_eq!(story.blanks[1].source, WordSource::Fallback);
        assert!(["banana", "lizard"].contains(&story.blanks[1].word.as_str()));
        assert_eq!(story.guesses_used(), 1);
    }

    #[test]
    fn words_not_reused_within_category() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let story = fill_template(
                "<noun1> <noun2> <noun3>",
                &CategorizedWords::new(),
                &fallback(),
                &mut rng,
            );

            let words: Vec<&str> = story.blanks.iter().map(|b| b.word.as_str()).collect();
            assert_ne!(words[0], words[1]);
            assert_eq!(words[2], DEFAULT_FILLER_WORD);
            assert_eq!(story.blanks[2].source, WordSource::Default);
        }
    }

    #[test]
    fn same_word_allowed_across_categories() {
        let mut guesses = CategorizedWords::new();
        guesses.push(Category::Noun, "calm");
        guesses.push(Category::Adjective, "calm");

        let mut rng = StdRng::seed_from_u64(3);
        let story = fill_template(
            "<noun1> <adjective1>",
            &guesses,
            &CategorizedWords::new(),
            &mut rng,
        );
        assert_eq!(story.text, "calm calm");
    }

    #[test]
    fn exhausted_category_uses_default_word() {
        let mut rng = StdRng::seed_from_u64(0);
        let story = fill_template(
            "A <pronoun1> smiled.",
            &CategorizedWords::new(),
            &CategorizedWords::new(),
            &mut rng,
        );
        assert_eq!(story.text, "A square smiled.");
        assert!(story.unknown.is_empty());
    }

    #[test]
    fn custom_default_word() {
        let mut rng = StdRng::seed_from_u64(0);
        let story = fill_template_with_default(
            "<noun1>",
            &CategorizedWords::new(),
            &CategorizedWords::new(),
            "blob",
            &mut rng,
        );
        assert_eq!(story.text, "blob");
    }

    #[test]
    fn unknown_category_flagged_and_left_in_place() {
        let mut rng = StdRng::seed_from_u64(0);
        let story = fill_template(
            "Go <adverb1> past the <noun1>.",
            &CategorizedWords::new(),
            &fallback(),
            &mut rng,
        );

        assert_eq!(story.unknown, vec![UnknownCategory("adverb".to_string())]);
        assert!(story.text.starts_with("Go <adverb1> past the "));
        assert!(!story.text.contains("<noun1>"));
    }

    #[test]
    fn no_recognized_placeholder_survives() {
        let template = "<noun1> <plural noun1> <verb1> <adjective1> <pronoun1> <noun1> <verb2>";
        let mut rng = StdRng::seed_from_u64(11);
        let story = fill_template(template, &CategorizedWords::new(), &fallback(), &mut rng);

        assert!(!story.text.contains('<'));
        assert_eq!(story.blanks.len(), 6);
    }

    #[test]
    fn substituted_words_do_not_disturb_other_tokens() {
        let mut guesses = CategorizedWords::new();
        guesses.push(Category::Noun, "noun2");

        let mut rng = StdRng::seed_from_u64(5);
        let story = fill_template(
            "<noun1>|<noun2>",
            &guesses,
            &CategorizedWords::new(),
            &mut rng,
        );
        assert_eq!(story.text, "noun2|square");
    }

    #[test]
    fn zero_padded_token_filled_everywhere() {
        let mut guesses = CategorizedWords::new();
        guesses.push(Category::Noun, "zephyr");

        let mut rng = StdRng::seed_from_u64(2);
        let story = fill_template(
            "<noun01>, <noun01>!",
            &guesses,
            &CategorizedWords::new(),
            &mut rng,
        );
        assert_eq!(story.text, "zephyr, zephyr!");
    }

    #[test]
    fn display_is_text() {
        let mut rng = StdRng::seed_from_u64(0);
        let story = fill_template("plain", &CategorizedWords::new(), &fallback(), &mut rng);
        assert_eq!(story.to_string(), "plain");
        assert!(story.blanks.is_empty());
    }
}
