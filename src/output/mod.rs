//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_check_report, print_fill_result, print_pool_summaries, print_round_summary,
    print_score_report, print_story,
};
