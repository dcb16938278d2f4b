//! Turn-state analysis: normalization into [`GameInfo`] and opponent
//! profiling from action histories.

pub mod extractor;
pub mod profiler;

pub use extractor::{GameInfo, extract_game_info};
pub use profiler::{ActionPattern, NO_ACTION_YET, OpponentProfile};
