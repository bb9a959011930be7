//! Letter rarity point table
//!
//! Point values are relative to a pool's corpus: the letter that occurs most
//! often across all corpus words is worth 1 point, the rarest is worth 10, and
//! everything in between is interpolated linearly on letter proportion.

use crate::core::LetterPool;
use log::debug;
use rustc_hash::FxHashMap;

/// Lowest value a letter can score
pub const MIN_POINTS: u32 = 1;

/// Highest value a letter can score
pub const MAX_POINTS: u32 = 10;

/// Per-letter point values and corpus letter counts for one pool
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PointTable {
    points: FxHashMap<u8, u32>,
    counts: FxHashMap<u8, u32>,
}

/// Compute the point table for `pool`
///
/// Shorthand for [`PointTable::compute`].
#[must_use]
pub fn compute_point_table(pool: &LetterPool) -> PointTable {
    PointTable::compute(pool)
}

impl PointTable {
    /// Derive point values from the letter distribution of the pool's corpus
    ///
    /// # Algorithm
    /// 1. Count every letter occurrence across all corpus words
    /// 2. proportion(l) = count(l) / total occurrences
    /// 3. If all proportions are equal, every letter scores 10
    /// 4. Otherwise score(l) = 1 + 9 × (max - proportion(l)) / (max - min),
    ///    rounded half away from zero
    ///
    /// # Examples
    /// ```
    /// use letterpot::core::LetterPool;
    /// use letterpot::scoring::PointTable;
    ///
    /// let pool = LetterPool::new("ehprsyz", ["hype", "prey", "zeps"]).unwrap();
    /// let table = PointTable::compute(&pool);
    ///
    /// // 'e' and 'p' appear in every word, 'z' only once
    /// assert_eq!(table.points(b'e'), Some(1));
    /// assert_eq!(table.points(b'z'), Some(10));
    /// ```
    #[must_use]
    pub fn compute(pool: &LetterPool) -> Self {
        let counts = count_letters(pool.words());
        let total: u32 = counts.values().sum();

        if total == 0 {
            return Self::default();
        }

        let proportions: FxHashMap<u8, f64> = counts
            .iter()
            .map(|(&letter, &count)| (letter, f64::from(count) / f64::from(total)))
            .collect();

        let min_p = proportions.values().copied().fold(f64::INFINITY, f64::min);
        let max_p = proportions
            .values()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);

        #[allow(clippy::float_cmp)] // Exact equality is the uniform-distribution case
        let uniform = min_p == max_p;

        let points = proportions
            .iter()
            .map(|(&letter, &p)| {
                let value = if uniform {
                    MAX_POINTS
                } else {
                    let scaled = (max_p - p) / (max_p - min_p);
                    let raw = f64::from(MIN_POINTS) + scaled * f64::from(MAX_POINTS - MIN_POINTS);
                    (raw.round() as u32).clamp(MIN_POINTS, MAX_POINTS)
                };
                (letter, value)
            })
            .collect();

        debug!(
            "point table for {}: {} letters over {} occurrences",
            pool.key(),
            counts.len(),
            total
        );

        Self { points, counts }
    }

    /// Point value of `letter`, `None` if it never occurs in the corpus
    #[inline]
    #[must_use]
    pub fn points(&self, letter: u8) -> Option<u32> {
        self.points.get(&letter).copied()
    }

    /// Occurrences of `letter` across the corpus
    #[inline]
    #[must_use]
    pub fn count(&self, letter: u8) -> u32 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    #[must_use]
    pub const fn points_by_letter(&self) -> &FxHashMap<u8, u32> {
        &self.points
    }

    #[must_use]
    pub const fn count_by_letter(&self) -> &FxHashMap<u8, u32> {
        &self.counts
    }

    /// Letters present in the corpus, alphabetical
    #[must_use]
    pub fn letters(&self) -> Vec<u8> {
        let mut letters: Vec<u8> = self.points.keys().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// Sum of letter points over `word`, counting repeats
    ///
    /// Letters outside the corpus contribute nothing.
    #[must_use]
    pub fn word_points(&self, word: &str) -> u32 {
        word.bytes().filter_map(|ch| self.points(ch)).sum()
    }

    /// Total obtainable score: Σ count(l) × points(l) over the corpus
    #[must_use]
    pub fn max_possible(&self) -> u32 {
        self.counts
            .iter()
            .map(|(letter, &count)| count * self.points.get(letter).copied().unwrap_or(0))
            .sum()
    }
}

fn count_letters(words: &[String]) -> FxHashMap<u8, u32> {
    let mut counts = FxHashMap::default();
    for word in words {
        for ch in word.bytes() {
            *counts.entry(ch).or_insert(0) += 1;
        }
    }
    counts
}
