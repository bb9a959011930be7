//! Game flow
//!
//! Session state, hints, and the round that ties guessing to the story.

mod config;
mod hint;
mod round;
mod session;

pub use config::GameConfig;
pub use hint::{HintError, MASK_CHAR, hint, hint_among, mask_word};
pub use round::{Command, Round, RoundSummary, missed_words};
pub use session::{AcceptedGuess, GuessError, Session};
