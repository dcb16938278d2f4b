//! Rules-engine vocabulary and the agent seam.
//!
//! The engine drives agents through [`TableAgent`]: one `declare_action` call
//! per decision point, plus lifecycle notifications that carry no bearing on
//! action legality.

pub mod cards;
pub mod entities;

use async_trait::async_trait;
use entities::{Chips, DecisionKind, GameStart, HistoryAction, RoundState, Seat, Street, ValidAction};

/// A seat occupant the rules engine can ask for decisions.
///
/// `declare_action` must return before the engine resumes the hand; the
/// remaining hooks are notifications and default to no-ops. Implementations
/// must return a legal action for every turn, whatever state they are in.
#[async_trait]
pub trait TableAgent {
    /// Decide the action for the current turn.
    async fn declare_action(
        &mut self,
        valid_actions: &[ValidAction],
        hole_cards: &[String],
        round_state: &RoundState,
    ) -> (DecisionKind, Chips);

    /// The match is starting; seats carry every player's name and uuid.
    fn receive_game_start(&mut self, _game: &GameStart) {}

    /// A new hand is being dealt.
    fn receive_round_start(&mut self, _round_count: u32, _hole_cards: &[String], _seats: &[Seat]) {}

    /// A new street is opening on the current hand.
    fn receive_street_start(&mut self, _street: Street, _round_state: &RoundState) {}

    /// Another seat acted.
    fn receive_game_update(&mut self, _action: &HistoryAction, _round_state: &RoundState) {}

    /// The hand finished; `winners` holds the winning seats' uuids.
    fn receive_round_result(&mut self, _winners: &[String], _round_state: &RoundState) {}
}
