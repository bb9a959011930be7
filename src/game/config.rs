//! Round configuration

use crate::madlibs::DEFAULT_FILLER_WORD;

/// Tunable settings for a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Hints available per session
    pub hint_budget: usize,
    /// Word used for story blanks with no candidates left
    pub default_filler: String,
    /// How many missed words to reveal at the end of a round
    pub missed_sample: usize,
}

impl GameConfig {
    #[must_use]
    pub fn new(hint_budget: usize) -> Self {
        Self {
            hint_budget,
            ..Self::default()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            hint_budget: 3,
            default_filler: DEFAULT_FILLER_WORD.to_string(),
            missed_sample: 5,
        }
    }
}
