//! Pool summary command
//!
//! Computes the point table of every pool in parallel.

use crate::core::{Category, LetterPool, Lexicon};
use crate::scoring::PointTable;
use rayon::prelude::*;

/// Summary of one pool
pub struct PoolSummary {
    pub key: String,
    pub words: usize,
    /// Corpus words carrying at least one category
    pub playable: usize,
    pub max_possible: u32,
    /// (letter, corpus count, points), alphabetical
    pub letters: Vec<(char, u32, u32)>,
    /// Highest-scoring playable word and its points
    pub best_word: Option<(String, u32)>,
    /// Playable words per category, canonical order
    pub per_category: Vec<(Category, usize)>,
}

/// Summarize every pool, keeping input order
#[must_use]
pub fn summarize_pools(pools: &[LetterPool], lexicon: &Lexicon) -> Vec<PoolSummary> {
    pools
        .par_iter()
        .map(|pool| summarize_pool(pool, lexicon))
        .collect()
}

fn summarize_pool(pool: &LetterPool, lexicon: &Lexicon) -> PoolSummary {
    let table = PointTable::compute(pool);

    let letters = table
        .letters()
        .into_iter()
        .map(|l| (l as char, table.count(l), table.points(l).unwrap_or(0)))
        .collect();

    let playable = lexicon.playable_in(pool);

    // Ties broken alphabetically so the result is stable
    let best_word = playable
        .iter()
        .map(|w| (w.to_string(), table.word_points(w)))
        .max_by(|(wa, pa), (wb, pb)| pa.cmp(pb).then_with(|| wb.cmp(wa)));

    let per_category = Category::ALL
        .into_iter()
        .map(|c| {
            let n = playable
                .iter()
                .filter(|w| lexicon.has_category(w, c))
                .count();
            (c, n)
        })
        .collect();

    PoolSummary {
        key: pool.key().to_string(),
        words: pool.len(),
        playable: playable.len(),
        max_possible: table.max_possible(),
        letters,
        best_word,
        per_category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::GameData;

    #[test]
    fn summaries_keep_pool_order() {
        let data = GameData::embedded().unwrap();
        let summaries = summarize_pools(data.pools(), data.lexicon());

        let keys: Vec<&str> = summaries.iter().map(|s| s.key.as_str()).collect();
        let expected: Vec<&str> = data.pools().iter().map(LetterPool::key).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn ehprsyz_summary() {
        let data = GameData::embedded().unwrap();
        let summaries = summarize_pools(data.pools(), data.lexicon());
        let summary = summaries.iter().find(|s| s.key == "ehprsyz").unwrap();

        assert_eq!(summary.words, 36);
        assert_eq!(summary.max_possible, 453);
        assert_eq!(summary.letters.len(), 7);
        assert!(summary.playable <= summary.words);
        assert!(summary.letters.contains(&('z', 4, 10)));

        let (best, points) = summary.best_word.clone().unwrap();
        assert_eq!(best, "zephyrs");
        assert_eq!(points, 10 + 1 + 2 + 5 + 3 + 4 + 2);
    }

    #[test]
    fn category_counts_match_lexicon() {
        let data = GameData::embedded().unwrap();
        let summaries = summarize_pools(data.pools(), data.lexicon());
        let summary = summaries.iter().find(|s| s.key == "ehprsyz").unwrap();

        let pronouns = summary
            .per_category
            .iter()
            .find(|(c, _)| *c == Category::Pronoun)
            .map(|(_, n)| *n);
        assert_eq!(pronouns, Some(1));
    }
}
