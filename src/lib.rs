//! # Advisor Poker
//!
//! LLM-advised Texas Hold'em agents. An external rules engine drives each
//! agent through the [`game::TableAgent`] seam; the agent consults a
//! free-text reasoning service and turns whatever comes back into a strictly
//! legal action.
//!
//! ## The decision pipeline
//!
//! Per turn: the raw engine state is normalized into a
//! [`analysis::GameInfo`] (pot totaling, opponent profiling, legal-action
//! typing), rendered into a prompt and sent to the advisory service, the
//! reply is parsed totally into a [`game::entities::Decision`], and the
//! decision is legalized against the turn's legal-action set: clamped into
//! the raise window, degraded to a legal kind, all-in detected. If the
//! advisory round-trip fails in any way, a deterministic fallback heuristic
//! decides instead. Every completed turn is appended to the agent's
//! [`bot::DecisionLog`].
//!
//! No failure is fatal to a match: the worst outcome of any turn is a
//! conservative fold or a minimum-size legal action.
//!
//! ## Core Modules
//!
//! - [`game`]: engine vocabulary, wire types, and the agent seam
//! - [`analysis`]: turn-state normalization and opponent profiling
//! - [`advisor`]: the outbound advisory round-trip and reply parsing
//! - [`bot`]: the agent, the legalizer, the fallback, and the history
//!
//! ## Example
//!
//! ```no_run
//! use advisor_poker::{AdvisorConfig, AdvisorPlayer};
//!
//! let config = AdvisorConfig::from_env().unwrap();
//! let player = AdvisorPlayer::new("hero", config).unwrap();
//! // Hand `player` to the rules-engine binding as a `TableAgent`.
//! ```

/// Turn-state analysis: normalization and opponent profiling.
pub mod analysis;

/// The outbound advisory path.
pub mod advisor;

/// The agent, the legalizer, the fallback, and the decision history.
pub mod bot;

/// Advisory service configuration.
pub mod config;

/// Rules-engine vocabulary and the agent seam.
pub mod game;

pub use advisor::{AdvisorClient, AdvisorError};
pub use analysis::{GameInfo, extract_game_info};
pub use bot::{AdvisorPlayer, DecisionLog, fallback_decision, legalize};
pub use config::{AdvisorConfig, ConfigError, ModelKind};
pub use game::TableAgent;
pub use game::entities::{
    Chips, Decision, DecisionKind, FinalAction, LegalAction, RoundState, Street, ValidAction,
};
