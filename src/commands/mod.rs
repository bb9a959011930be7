//! Command implementations

pub mod check;
pub mod fill;
pub mod pools;
pub mod score;
pub mod simple;

pub use check::{CheckReport, Finding, run_check};
pub use fill::{FillConfig, FillResult, fill_story};
pub use pools::{PoolSummary, summarize_pools};
pub use score::{ScoreReport, score_command};
pub use simple::run_simple;
