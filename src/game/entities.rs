//! Game vocabulary shared by the whole decision pipeline.
//!
//! The wire types mirror the JSON the rules engine sends verbatim and stay
//! tolerant of fields this crate does not consume. Everything downstream of
//! the state extractor works with the typed forms instead.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Chip amounts (stacks, pots, bets). Always turn-absolute totals.
pub type Chips = u64;

/// A betting phase of the hand.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    /// The engine's lowercase name for this street, also used as the
    /// `action_histories` key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Preflop => "preflop",
            Self::Flop => "flop",
            Self::Turn => "turn",
            Self::River => "river",
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The three action kinds an agent can return to the engine.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionKind {
    Fold,
    Call,
    Raise,
}

impl DecisionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fold => "fold",
            Self::Call => "call",
            Self::Raise => "raise",
        }
    }

    /// Maps an advisory action verb to a kind. `bet` is folded into raise,
    /// matching how the engine reports aggressive actions.
    pub fn from_verb(verb: &str) -> Option<Self> {
        match verb.trim().to_lowercase().as_str() {
            "fold" => Some(Self::Fold),
            "call" => Some(Self::Call),
            "raise" | "bet" => Some(Self::Raise),
            _ => None,
        }
    }
}

impl fmt::Display for DecisionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A decision as advised (or produced by the fallback), before legalization.
///
/// `amount` is `None` when the advisory reply carried no usable number; the
/// legalizer resolves it against the turn's actual bounds.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Decision {
    pub kind: DecisionKind,
    pub amount: Option<Chips>,
}

impl Decision {
    pub fn new(kind: DecisionKind, amount: Option<Chips>) -> Self {
        Self { kind, amount }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.amount {
            Some(amount) => write!(f, "{} {amount}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// A decision after legalization: guaranteed to be a member of the turn's
/// legal-action set with its amount in bounds.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct FinalAction {
    pub kind: DecisionKind,
    pub amount: Chips,
    pub all_in: bool,
}

impl fmt::Display for FinalAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.all_in {
            write!(f, "{} {} (all-in)", self.kind, self.amount)
        } else {
            write!(f, "{} {}", self.kind, self.amount)
        }
    }
}

/// A legal action as declared by the engine for the current turn.
///
/// At most one of each variant appears per turn. A raise ceiling of `None`
/// means the engine reported no upper bound.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub enum LegalAction {
    Fold,
    Call(Chips),
    Raise { min: Chips, max: Option<Chips> },
}

impl LegalAction {
    pub fn kind(&self) -> DecisionKind {
        match self {
            Self::Fold => DecisionKind::Fold,
            Self::Call(_) => DecisionKind::Call,
            Self::Raise { .. } => DecisionKind::Raise,
        }
    }

    /// Converts one wire action into its typed form.
    ///
    /// Returns `None` for action verbs this crate does not act on and for
    /// raise windows the engine marked unavailable (negative bounds).
    pub fn from_wire(action: &ValidAction) -> Option<Self> {
        match action.action.to_lowercase().as_str() {
            "fold" => Some(Self::Fold),
            "call" => match action.amount {
                AmountBounds::Fixed(amount) => Some(Self::Call(amount.max(0) as Chips)),
                AmountBounds::Window { min, .. } => Some(Self::Call(min.max(0) as Chips)),
            },
            "raise" | "bet" => match action.amount {
                AmountBounds::Fixed(amount) if amount >= 0 => Some(Self::Raise {
                    min: amount as Chips,
                    max: None,
                }),
                AmountBounds::Window { min, max } if min >= 0 => Some(Self::Raise {
                    min: min as Chips,
                    max: (max >= 0).then_some(max as Chips),
                }),
                _ => None,
            },
            _ => None,
        }
    }
}

impl fmt::Display for LegalAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Fold => write!(f, "fold"),
            Self::Call(amount) => write!(f, "call {amount}"),
            Self::Raise { min, max: Some(max) } => write!(f, "raise {min}-{max}"),
            Self::Raise { min, max: None } => write!(f, "raise >= {min}"),
        }
    }
}

/// Finds the call amount in a legal-action set, if a call is legal.
pub fn find_call(actions: &[LegalAction]) -> Option<Chips> {
    actions.iter().find_map(|action| match action {
        LegalAction::Call(amount) => Some(*amount),
        _ => None,
    })
}

/// Finds the raise window in a legal-action set, if a raise is legal.
pub fn find_raise(actions: &[LegalAction]) -> Option<(Chips, Option<Chips>)> {
    actions.iter().find_map(|action| match action {
        LegalAction::Raise { min, max } => Some((*min, *max)),
        _ => None,
    })
}

// === Wire types ===
// The engine speaks JSON; these deserialize exactly what it sends and ignore
// the rest. Amounts stay signed here because the engine encodes "raise
// unavailable" as a negative window.

/// One entry of the engine's `valid_actions` list.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ValidAction {
    pub action: String,
    pub amount: AmountBounds,
}

/// A wire amount: fixed for fold/call, a `{min, max}` window for raise.
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AmountBounds {
    Window { min: i64, max: i64 },
    Fixed(i64),
}

/// A seat in the engine's turn state.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Seat {
    pub uuid: String,
    pub name: String,
    pub stack: Chips,
}

/// One recorded action in a street's history.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct HistoryAction {
    #[serde(default)]
    pub uuid: String,
    pub action: String,
    #[serde(default)]
    pub amount: Chips,
}

/// Pot composition: the main pot plus any side pots.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Pot {
    #[serde(default)]
    pub main: PotShare,
    #[serde(default)]
    pub side: Vec<PotShare>,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize)]
pub struct PotShare {
    pub amount: Chips,
}

/// The engine's per-turn state snapshot.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RoundState {
    pub street: Street,
    #[serde(default)]
    pub community_card: Vec<String>,
    #[serde(default)]
    pub pot: Pot,
    #[serde(default)]
    pub seats: Vec<Seat>,
    /// Street name -> actions taken on that street, oldest first.
    #[serde(default)]
    pub action_histories: HashMap<String, Vec<HistoryAction>>,
}

/// Match-start notification payload.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct GameStart {
    #[serde(default)]
    pub player_num: u32,
    #[serde(default)]
    pub rule: GameRule,
    #[serde(default)]
    pub seats: Vec<Seat>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct GameRule {
    #[serde(default)]
    pub max_round: u32,
    #[serde(default)]
    pub small_blind_amount: Chips,
    #[serde(default)]
    pub initial_stack: Chips,
}
