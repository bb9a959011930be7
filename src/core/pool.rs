//! Letter pool representation
//!
//! A pool is identified by 7 distinct lowercase letters and owns the corpus of
//! valid words that can be spelled from them.

use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

/// Number of letters in a pool key
pub const POOL_SIZE: usize = 7;

/// Error type for malformed pools
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("pool key must be exactly {POOL_SIZE} letters, got {0}")]
    InvalidLength(usize),
    #[error("pool key must contain only lowercase ASCII letters")]
    InvalidCharacters,
    #[error("pool key letters must be distinct, '{0}' repeats")]
    RepeatedLetter(char),
}

/// A 7-letter pool with its corpus of valid words
///
/// The corpus is trusted: words are expected to be pre-filtered so that each is
/// at least 4 letters long and drawable from the key. [`LetterPool::can_draw`]
/// is available for auditing data that was not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    key: String,
    words: Vec<String>,
    index: FxHashSet<String>,
}

impl LetterPool {
    /// Create a pool from a key and its corpus
    ///
    /// Duplicate corpus words are dropped, keeping the first occurrence.
    ///
    /// # Errors
    /// Returns `PoolError` if the key is not 7 distinct lowercase ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use letterpot::core::LetterPool;
    ///
    /// let pool = LetterPool::new("ehprsyz", ["hyper", "spry", "hyper"]).unwrap();
    /// assert_eq!(pool.len(), 2);
    /// assert!(pool.contains("spry"));
    ///
    /// assert!(LetterPool::new("abc", ["cab"]).is_err());
    /// ```
    pub fn new<I, S>(key: impl Into<String>, words: I) -> Result<Self, PoolError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let key = key.into();
        validate_key(&key)?;

        let mut index = FxHashSet::default();
        let mut unique = Vec::new();
        for word in words {
            let word: String = word.into();
            if index.insert(word.clone()) {
                unique.push(word);
            }
        }

        Ok(Self {
            key,
            words: unique,
            index,
        })
    }

    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Corpus words in data order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check whether `word` can be spelled from the key, using each key letter
    /// at most as many times as it appears
    #[must_use]
    pub fn can_draw(&self, word: &str) -> bool {
        let mut available = letter_counts(&self.key);
        word.bytes().all(|ch| match available.get_mut(&ch) {
            Some(n) if *n > 0 => {
                *n -= 1;
                true
            }
            _ => false,
        })
    }
}

fn validate_key(key: &str) -> Result<(), PoolError> {
    if !key.bytes().all(|ch| ch.is_ascii_lowercase()) {
        return Err(PoolError::InvalidCharacters);
    }

    // ASCII only from here, so bytes and letters agree
    if key.len() != POOL_SIZE {
        return Err(PoolError::InvalidLength(key.len()));
    }

    let mut seen = FxHashSet::default();
    for ch in key.chars() {
        if !seen.insert(ch) {
            return Err(PoolError::RepeatedLetter(ch));
        }
    }

    Ok(())
}

fn letter_counts(text: &str) -> FxHashMap<u8, u8> {
    let mut counts = FxHashMap::default();
    for ch in text.bytes() {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}
