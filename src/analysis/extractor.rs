//! Turn-state normalization.
//!
//! Everything downstream (prompt rendering, legalization, fallback) works
//! from [`GameInfo`] so the engine's wire format stays confined to this
//! module and `game::entities`.

use super::profiler::{self, OpponentProfile};
use crate::game::cards;
use crate::game::entities::{
    self, Chips, LegalAction, RoundState, Street, ValidAction,
};

/// The normalized view of one decision point.
#[derive(Clone, Debug)]
pub struct GameInfo {
    /// Own hole cards, rendered for display.
    pub hole_cards: String,
    /// Community cards, rendered for display.
    pub community_cards: String,
    pub street: Street,
    pub my_stack: Chips,
    /// Main pot plus every side pot.
    pub pot_size: Chips,
    /// Amount needed to call, 0 when no call is legal this turn.
    pub call_amount: Chips,
    pub opponents: Vec<OpponentProfile>,
    pub legal_actions: Vec<LegalAction>,
    /// The raw turn state, kept for logging only. Decisions never read it.
    pub round_state: RoundState,
}

/// Normalizes a turn into a [`GameInfo`].
///
/// `my_uuid` is the agent's engine-assigned identifier; when it matches no
/// seat (or is not known yet) the own stack defaults to 0 and every seat
/// profiles as an opponent.
pub fn extract_game_info(
    round_state: &RoundState,
    hole_cards: &[String],
    valid_actions: &[ValidAction],
    my_uuid: Option<&str>,
) -> GameInfo {
    let pot_size = round_state.pot.main.amount
        + round_state
            .pot
            .side
            .iter()
            .map(|share| share.amount)
            .sum::<Chips>();

    let mut my_stack = 0;
    let mut opponents = Vec::new();
    for seat in &round_state.seats {
        if my_uuid == Some(seat.uuid.as_str()) {
            my_stack = seat.stack;
        } else {
            opponents.push(profiler::profile_opponent(
                seat,
                &round_state.action_histories,
                round_state.street,
            ));
        }
    }

    let legal_actions: Vec<LegalAction> = valid_actions
        .iter()
        .filter_map(LegalAction::from_wire)
        .collect();
    let call_amount = entities::find_call(&legal_actions).unwrap_or(0);

    GameInfo {
        hole_cards: cards::format_cards(hole_cards),
        community_cards: cards::format_cards(&round_state.community_card),
        street: round_state.street,
        my_stack,
        pot_size,
        call_amount,
        opponents,
        legal_actions,
        round_state: round_state.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn round_state() -> RoundState {
        serde_json::from_value(json!({
            "street": "flop",
            "community_card": ["2H", "7D", "KS"],
            "pot": {
                "main": {"amount": 100},
                "side": [{"amount": 30}, {"amount": 15}]
            },
            "seats": [
                {"uuid": "me", "name": "hero", "stack": 940},
                {"uuid": "opp1", "name": "alice", "stack": 870},
                {"uuid": "opp2", "name": "bob", "stack": 1210}
            ],
            "action_histories": {
                "flop": [{"uuid": "opp1", "action": "BET", "amount": 40}]
            }
        }))
        .unwrap()
    }

    fn valid_actions() -> Vec<ValidAction> {
        serde_json::from_value(json!([
            {"action": "fold", "amount": 0},
            {"action": "call", "amount": 40},
            {"action": "raise", "amount": {"min": 80, "max": 940}}
        ]))
        .unwrap()
    }

    #[test]
    fn test_pot_includes_side_pots() {
        let hole = vec!["AS".to_string(), "AD".to_string()];
        let info = extract_game_info(&round_state(), &hole, &valid_actions(), Some("me"));
        assert_eq!(info.pot_size, 145);
    }

    #[test]
    fn test_seats_partition_into_self_and_opponents() {
        let hole = vec!["AS".to_string(), "AD".to_string()];
        let info = extract_game_info(&round_state(), &hole, &valid_actions(), Some("me"));
        assert_eq!(info.my_stack, 940);
        assert_eq!(info.opponents.len(), 2);
        assert_eq!(info.opponents[0].last_action, "bets 40");
        assert_eq!(info.opponents[1].last_action, profiler::NO_ACTION_YET);
    }

    #[test]
    fn test_unknown_identifier_defaults_stack_to_zero() {
        let hole = vec!["AS".to_string(), "AD".to_string()];
        let info = extract_game_info(&round_state(), &hole, &valid_actions(), Some("stranger"));
        assert_eq!(info.my_stack, 0);
        assert_eq!(info.opponents.len(), 3);
    }

    #[test]
    fn test_call_amount_defaults_to_zero_without_call_option() {
        let actions: Vec<ValidAction> = serde_json::from_value(json!([
            {"action": "fold", "amount": 0}
        ]))
        .unwrap();
        let hole = vec!["AS".to_string(), "AD".to_string()];
        let info = extract_game_info(&round_state(), &hole, &actions, Some("me"));
        assert_eq!(info.call_amount, 0);
        assert_eq!(info.legal_actions, vec![LegalAction::Fold]);
    }

    #[test]
    fn test_card_display_strings() {
        let hole = vec!["AS".to_string(), "AD".to_string()];
        let info = extract_game_info(&round_state(), &hole, &valid_actions(), Some("me"));
        assert_eq!(info.hole_cards, "A♠ A♦");
        assert_eq!(info.community_cards, "2♥ 7♦ K♠");
    }
}
