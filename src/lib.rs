//! Letter Pot
//!
//! A spelling-bee word game: find words in a pool of seven letters, earn
//! points weighted by how rare each letter is in the pool's corpus, then see
//! your words dropped into a MadLibs-style story.
//!
//! # Quick Start
//!
//! ```rust
//! use letterpot::core::Category;
//! use letterpot::scoring::score_word;
//! use letterpot::wordlists::GameData;
//!
//! let data = GameData::embedded().unwrap();
//! let pool = data.pool("ehprsyz").unwrap();
//!
//! let score = score_word(pool, data.lexicon(), "hyper", Category::Adjective).unwrap();
//! assert_eq!(score.earned, 15);
//! ```

// Core domain types
pub mod core;

// Rarity-weighted scoring and word validation
pub mod scoring;

// Story templates and placeholder filling
pub mod madlibs;

// Sessions, hints and rounds
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
