//! Data audit command
//!
//! Pools, lexicon and filler are trusted at runtime; this checks that they
//! actually agree with each other.

use crate::core::{CategorizedWords, Category, LetterPool, Lexicon};
use crate::scoring::MIN_WORD_LENGTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;

/// A single data problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    TooShort { pool: String, word: String },
    NotDrawable { pool: String, word: String },
    OrphanTag { word: String },
    NoFiller { category: Category },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort { pool, word } => {
                write!(f, "{pool}: \"{word}\" is shorter than {MIN_WORD_LENGTH} letters")
            }
            Self::NotDrawable { pool, word } => {
                write!(f, "{pool}: \"{word}\" cannot be spelled from the pool letters")
            }
            Self::OrphanTag { word } => {
                write!(f, "lexicon: \"{word}\" is tagged but appears in no pool")
            }
            Self::NoFiller { category } => write!(f, "filler: no words for {category}"),
        }
    }
}

/// Audit result
#[derive(Debug, Default)]
pub struct CheckReport {
    pub pools_checked: usize,
    pub words_checked: usize,
    pub findings: Vec<Finding>,
}

impl CheckReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Audit pools, lexicon and filler
///
/// Set `show_progress` to draw a progress bar on stderr.
///
/// # Panics
///
/// Will not panic - the progress bar template is a constant.
#[must_use]
pub fn run_check(
    pools: &[LetterPool],
    lexicon: &Lexicon,
    filler: &CategorizedWords,
    show_progress: bool,
) -> CheckReport {
    let lexicon_words = lexicon.words();
    let total = pools.iter().map(LetterPool::len).sum::<usize>() + lexicon_words.len();

    let pb = if show_progress {
        ProgressBar::new(total as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} | {msg}")
            .expect("progress template is valid")
            .progress_chars("█▓▒░"),
    );

    let mut report = CheckReport::default();

    for pool in pools {
        pb.set_message(format!("pool {}", pool.key()));
        for word in pool.words() {
            if word.chars().count() < MIN_WORD_LENGTH {
                report.findings.push(Finding::TooShort {
                    pool: pool.key().to_string(),
                    word: word.clone(),
                });
            }
            if !pool.can_draw(word) {
                report.findings.push(Finding::NotDrawable {
                    pool: pool.key().to_string(),
                    word: word.clone(),
                });
            }
            report.words_checked += 1;
            pb.inc(1);
        }
        report.pools_checked += 1;
    }

    pb.set_message("lexicon");
    for word in lexicon_words {
        if !pools.iter().any(|p| p.contains(word)) {
            report.findings.push(Finding::OrphanTag {
                word: word.to_string(),
            });
        }
        report.words_checked += 1;
        pb.inc(1);
    }

    for category in Category::ALL {
        if filler.words(category).is_empty() {
            report.findings.push(Finding::NoFiller { category });
        }
    }

    pb.finish_with_message("Complete!");
    report
}
