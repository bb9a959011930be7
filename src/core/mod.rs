//! Core domain types for the letter pot game
//!
//! Pools, categories and the category-tagged lexicon. Everything here is pure
//! data with no I/O.

mod categorized;
mod category;
mod lexicon;
mod pool;

pub use categorized::CategorizedWords;
pub use category::{Category, CategorySet, UnknownCategory};
pub use lexicon::Lexicon;
pub use pool::{LetterPool, POOL_SIZE, PoolError};
