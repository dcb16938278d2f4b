//! Opponent profiling from the engine's action histories.

use crate::game::entities::{Chips, HistoryAction, Seat, Street};
use serde::Serialize;
use std::collections::HashMap;

/// Shown for an opponent with no recorded action on the current street.
pub const NO_ACTION_YET: &str = "no action yet";

/// Aggregate action counts for one opponent across all streets.
///
/// The engine reports its history verbs uppercase, so all matching here is
/// case-insensitive. `total` counts every recorded action, blinds included;
/// the per-verb counters only the three betting verbs.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ActionPattern {
    pub total: u32,
    pub folds: u32,
    pub calls: u32,
    /// Raises and bets combined.
    pub raises: u32,
}

impl ActionPattern {
    /// Fraction of recorded actions that were raises or bets.
    pub fn aggression_rate(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.raises as f32 / self.total as f32
        }
    }
}

/// What the pipeline knows about one opponent on the current turn.
#[derive(Clone, Debug, Serialize)]
pub struct OpponentProfile {
    pub name: String,
    pub uuid: String,
    pub stack: Chips,
    /// Rendered description of the opponent's latest action this street.
    pub last_action: String,
    pub pattern: ActionPattern,
}

/// Builds the profile for one opponent seat.
pub fn profile_opponent(
    seat: &Seat,
    histories: &HashMap<String, Vec<HistoryAction>>,
    street: Street,
) -> OpponentProfile {
    OpponentProfile {
        name: seat.name.clone(),
        uuid: seat.uuid.clone(),
        stack: seat.stack,
        last_action: last_action_text(histories, &seat.uuid, street),
        pattern: action_pattern(histories, &seat.uuid),
    }
}

/// Renders a player's most recent action on the given street.
///
/// The street's history is scanned newest-first and the first entry for the
/// player wins; [`NO_ACTION_YET`] when there is none.
pub fn last_action_text(
    histories: &HashMap<String, Vec<HistoryAction>>,
    uuid: &str,
    street: Street,
) -> String {
    let Some(actions) = histories.get(street.as_str()) else {
        return NO_ACTION_YET.to_string();
    };
    for action in actions.iter().rev() {
        if action.uuid != uuid {
            continue;
        }
        let verb = action.action.to_lowercase();
        return match verb.as_str() {
            "fold" => "folds".to_string(),
            "call" => format!("calls {}", action.amount),
            "raise" => format!("raises to {}", action.amount),
            "bet" => format!("bets {}", action.amount),
            _ => verb,
        };
    }
    NO_ACTION_YET.to_string()
}

/// Tallies a player's actions over every street of the hand.
pub fn action_pattern(
    histories: &HashMap<String, Vec<HistoryAction>>,
    uuid: &str,
) -> ActionPattern {
    let mut pattern = ActionPattern::default();
    for actions in histories.values() {
        for action in actions {
            if action.uuid != uuid {
                continue;
            }
            pattern.total += 1;
            match action.action.to_lowercase().as_str() {
                "fold" => pattern.folds += 1,
                "call" => pattern.calls += 1,
                "raise" | "bet" => pattern.raises += 1,
                _ => {}
            }
        }
    }
    pattern
}
