//! Embedded game data
//!
//! Pools, lexicon and filler vocabulary compiled into the binary at build time.

// Include generated data from build script
include!(concat!(env!("OUT_DIR"), "/pools.rs"));
include!(concat!(env!("OUT_DIR"), "/lexicon.rs"));
include!(concat!(env!("OUT_DIR"), "/filler.rs"));

/// Default story template
pub const STORY: &str = include_str!("../../data/stories/olo.txt");
