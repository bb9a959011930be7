//! MadLibs story completion
//!
//! Extracts typed blanks from a story template and fills them from the
//! player's guesses, then from a fallback vocabulary.

mod filler;
mod template;

pub use filler::{
    DEFAULT_FILLER_WORD, FilledBlank, FilledStory, WordSource, fill_template,
    fill_template_with_default,
};
pub use template::{Placeholder, extract_placeholders};
