//! Scoring engine
//!
//! Letter rarity points, guess validation and per-guess scoring.

mod accumulator;
pub mod points;
mod validator;

pub use accumulator::{WordScore, score_word};
pub use points::{PointTable, compute_point_table};
pub use validator::{InvalidWord, MIN_WORD_LENGTH, validate};
