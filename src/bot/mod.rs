//! The agent side of the pipeline.
//!
//! This module implements:
//! - `AdvisorPlayer`: a [`crate::game::TableAgent`] that consults the
//!   advisory service and records every completed turn
//! - `legalize`: the degrade/clamp state machine that turns any proposed
//!   decision into a legal one
//! - `fallback_decision`: the deterministic strategy behind the advisory path
//! - `DecisionLog`: the per-session decision history
//!
//! The load-bearing guarantee lives in `legalize`: whatever the advisory
//! service says, or fails to say, the engine receives a member of the
//! turn's legal-action set.

pub mod fallback;
pub mod legalize;
pub mod models;
pub mod player;

pub use fallback::{Holding, Tier, classify_holding, fallback_decision};
pub use legalize::{clamp_raise, legalize};
pub use models::{DecisionLog, DecisionRecord, DecisionSource};
pub use player::AdvisorPlayer;
