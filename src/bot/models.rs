//! Agent decision-history models.

use crate::game::entities::{Chips, Decision, DecisionKind, Street};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Which path produced a turn's decision.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionSource {
    /// The advisory service replied and the reply was legalized.
    Advisory,
    /// The advisory path failed; the deterministic fallback decided.
    Fallback,
}

impl fmt::Display for DecisionSource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Advisory => write!(f, "advisory"),
            Self::Fallback => write!(f, "fallback"),
        }
    }
}

/// One completed turn, as recorded in the agent's history.
///
/// Records are immutable once appended; `proposed` keeps the pre-legalization
/// decision so adjusted advice stays visible.
#[derive(Clone, Debug, Serialize)]
pub struct DecisionRecord {
    pub timestamp: DateTime<Utc>,
    pub street: Street,
    pub hole_cards: String,
    pub community_cards: String,
    pub stack: Chips,
    pub pot_size: Chips,
    pub source: DecisionSource,
    pub proposed: Decision,
    pub final_kind: DecisionKind,
    pub final_amount: Chips,
}

/// Append-only, in-memory decision history for one agent session.
///
/// Retained for the session; nothing here prunes it.
#[derive(Debug, Default)]
pub struct DecisionLog {
    records: Vec<DecisionRecord>,
}

impl DecisionLog {
    pub fn push(&mut self, record: DecisionRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[DecisionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Serializes the whole session history, for callers that persist it.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.records)
    }
}
