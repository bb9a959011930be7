//! Game data
//!
//! Provides the embedded pools, lexicon and filler vocabulary compiled into the
//! binary, bundled as [`GameData`].

mod embedded;
pub mod loader;

pub use embedded::{FILLER, FILLER_COUNT, LEXICON, LEXICON_COUNT, POOLS, POOLS_COUNT, STORY};

use crate::core::{CategorizedWords, LetterPool, Lexicon};
use loader::CustomPool;
use anyhow::{Context, Result};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Pools, lexicon and fallback vocabulary for a game
#[derive(Debug, Clone)]
pub struct GameData {
    pools: Vec<LetterPool>,
    lexicon: Lexicon,
    filler: CategorizedWords,
}

impl GameData {
    /// Load the data embedded at build time
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded data is malformed (bad pool key or
    /// unknown category name).
    pub fn embedded() -> Result<Self> {
        let pools = POOLS
            .iter()
            .map(|&(key, words)| {
                LetterPool::new(key, words.iter().copied())
                    .with_context(|| format!("embedded pool {key}"))
            })
            .collect::<Result<Vec<_>>>()?;

        let lexicon = Lexicon::from_records(LEXICON).context("embedded lexicon")?;
        let filler = CategorizedWords::from_records(FILLER).context("embedded filler")?;

        Ok(Self::new(pools, lexicon, filler))
    }

    #[must_use]
    pub const fn new(pools: Vec<LetterPool>, lexicon: Lexicon, filler: CategorizedWords) -> Self {
        Self {
            pools,
            lexicon,
            filler,
        }
    }

    /// Add or replace a pool
    pub fn insert_pool(&mut self, pool: LetterPool) {
        self.pools.retain(|p| p.key() != pool.key());
        self.pools.push(pool);
    }

    /// Add a pool read from disk, merging its tags into the lexicon
    pub fn insert_custom(&mut self, custom: CustomPool) {
        self.lexicon.merge(custom.tags);
        self.insert_pool(custom.pool);
    }

    #[must_use]
    pub fn pools(&self) -> &[LetterPool] {
        &self.pools
    }

    #[must_use]
    pub fn pool(&self, key: &str) -> Option<&LetterPool> {
        self.pools.iter().find(|p| p.key() == key)
    }

    pub fn random_pool<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&LetterPool> {
        self.pools.choose(rng)
    }

    #[must_use]
    pub const fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    #[must_use]
    pub const fn filler(&self) -> &CategorizedWords {
        &self.filler
    }
}
