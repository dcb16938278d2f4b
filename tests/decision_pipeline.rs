/// Integration tests for the turn decision pipeline
///
/// These tests drive the pipeline the way the rules engine does: wire-shaped
/// JSON in, a legal (kind, amount) pair out, including the degraded paths
/// where the advisory service misbehaves or is unreachable.
use advisor_poker::advisor::parse_reply;
use advisor_poker::bot::DecisionSource;
use advisor_poker::game::entities::{self, GameStart, LegalAction, RoundState, ValidAction};
use advisor_poker::{
    AdvisorConfig, AdvisorPlayer, DecisionKind, TableAgent, extract_game_info, fallback_decision,
    legalize,
};
use serde_json::json;

fn wire_actions(value: serde_json::Value) -> Vec<ValidAction> {
    serde_json::from_value(value).unwrap()
}

fn legal_actions(value: serde_json::Value) -> Vec<LegalAction> {
    wire_actions(value)
        .iter()
        .filter_map(LegalAction::from_wire)
        .collect()
}

fn codes(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|c| c.to_string()).collect()
}

/// A config whose endpoint nothing listens on, so the advisory round-trip
/// fails fast and the fallback decides.
fn unreachable_config() -> AdvisorConfig {
    AdvisorConfig {
        base_url: "http://127.0.0.1:9".to_string(),
        api_key: "test-key".to_string(),
        model: "test-model".to_string(),
        max_tokens: 256,
        temperature: 0.7,
        timeout_secs: 1,
        default_raise: 50,
    }
}

#[test]
fn test_oversized_raise_is_clamped_and_flagged_all_in() {
    let legal = legal_actions(json!([
        {"action": "fold", "amount": 0},
        {"action": "call", "amount": 20},
        {"action": "raise", "amount": {"min": 40, "max": 1000}},
    ]));
    let raw = parse_reply(r#"{"action": "raise", "amount": 5000}"#, 50);

    let action = legalize(&raw, &legal, 5000);

    assert_eq!(action.kind, DecisionKind::Raise);
    assert_eq!(action.amount, 1000);
    assert!(action.all_in);
}

#[test]
fn test_raise_advice_on_a_raise_less_turn_becomes_a_call() {
    let legal = legal_actions(json!([
        {"action": "fold", "amount": 0},
        {"action": "call", "amount": 20},
    ]));
    let raw = parse_reply(r#"{"action": "raise", "amount": 100}"#, 50);

    let action = legalize(&raw, &legal, 1000);

    assert_eq!(action.kind, DecisionKind::Call);
    assert_eq!(action.amount, 20);
    assert!(!action.all_in);
}

#[test]
fn test_prose_reply_resolves_to_the_actual_call_amount() {
    let legal = legal_actions(json!([
        {"action": "fold", "amount": 0},
        {"action": "call", "amount": 20},
    ]));
    let raw = parse_reply("let's just call here, maybe 30", 50);

    assert_eq!(raw.kind, DecisionKind::Call);
    assert_eq!(raw.amount, Some(0));

    let action = legalize(&raw, &legal, 1000);
    assert_eq!(action.kind, DecisionKind::Call);
    assert_eq!(action.amount, 20);
}

#[test]
fn test_fallback_with_pocket_aces_and_no_raise_option_calls() {
    let legal = legal_actions(json!([
        {"action": "fold", "amount": 0},
        {"action": "call", "amount": 20},
    ]));

    let action = fallback_decision(&codes(&["AS", "AH"]), &[], 1000, 20, &legal);

    assert_eq!(action.kind, DecisionKind::Call);
    assert_eq!(action.amount, entities::find_call(&legal).unwrap());
}

#[test]
fn test_opponent_with_no_recorded_actions_has_zero_aggression() {
    let round_state: RoundState = serde_json::from_value(json!({
        "street": "preflop",
        "community_card": [],
        "pot": {"main": {"amount": 30}, "side": []},
        "seats": [
            {"uuid": "me", "name": "hero", "stack": 1000},
            {"uuid": "opp", "name": "silent", "stack": 1000},
        ],
        "action_histories": {}
    }))
    .unwrap();
    let valid = wire_actions(json!([
        {"action": "fold", "amount": 0},
        {"action": "call", "amount": 20},
    ]));

    let info = extract_game_info(&round_state, &codes(&["AS", "AH"]), &valid, Some("me"));

    assert_eq!(info.opponents.len(), 1);
    let pattern = &info.opponents[0].pattern;
    assert_eq!(pattern.total, 0);
    assert_eq!(pattern.aggression_rate(), 0.0);
    assert_eq!(info.opponents[0].last_action, "no action yet");
}

#[tokio::test]
async fn test_unreachable_advisory_degrades_to_fallback() {
    let mut player = AdvisorPlayer::new("hero", unreachable_config()).unwrap();

    let game_start: GameStart = serde_json::from_value(json!({
        "player_num": 2,
        "rule": {"max_round": 10, "small_blind_amount": 10, "initial_stack": 1000},
        "seats": [
            {"uuid": "seat-0", "name": "hero", "stack": 1000},
            {"uuid": "seat-1", "name": "villain", "stack": 1000},
        ]
    }))
    .unwrap();
    player.receive_game_start(&game_start);
    assert_eq!(player.engine_uuid(), Some("seat-0"));

    let round_state: RoundState = serde_json::from_value(json!({
        "street": "preflop",
        "community_card": [],
        "pot": {"main": {"amount": 30}, "side": []},
        "seats": [
            {"uuid": "seat-0", "name": "hero", "stack": 1000},
            {"uuid": "seat-1", "name": "villain", "stack": 1000},
        ],
        "action_histories": {
            "preflop": [{"uuid": "seat-1", "action": "RAISE", "amount": 20}]
        }
    }))
    .unwrap();
    let valid = wire_actions(json!([
        {"action": "fold", "amount": 0},
        {"action": "call", "amount": 20},
        {"action": "raise", "amount": {"min": 40, "max": 1000}},
    ]));

    // Junk hole cards: the fallback folds them.
    let (kind, amount) = player
        .declare_action(&valid, &codes(&["9H", "3C"]), &round_state)
        .await;

    assert_eq!(kind, DecisionKind::Fold);
    assert_eq!(amount, 0);

    let history = player.history();
    assert_eq!(history.len(), 1);
    let record = &history.records()[0];
    assert_eq!(record.source, DecisionSource::Fallback);
    assert_eq!(record.final_kind, DecisionKind::Fold);
    assert_eq!(record.stack, 1000);
    assert_eq!(record.pot_size, 30);
}

#[tokio::test]
async fn test_strong_hand_on_fallback_path_raises_the_minimum() {
    let mut player = AdvisorPlayer::new("hero", unreachable_config()).unwrap();

    let round_state: RoundState = serde_json::from_value(json!({
        "street": "preflop",
        "community_card": [],
        "pot": {"main": {"amount": 30}, "side": []},
        "seats": [
            {"uuid": "seat-0", "name": "hero", "stack": 1000},
            {"uuid": "seat-1", "name": "villain", "stack": 1000},
        ],
        "action_histories": {}
    }))
    .unwrap();
    let valid = wire_actions(json!([
        {"action": "fold", "amount": 0},
        {"action": "call", "amount": 20},
        {"action": "raise", "amount": {"min": 40, "max": 1000}},
    ]));

    // No game-start notification: the agent does not know its seat yet and
    // must still return a legal action.
    let (kind, amount) = player
        .declare_action(&valid, &codes(&["KS", "KH"]), &round_state)
        .await;

    assert_eq!(kind, DecisionKind::Raise);
    // Unknown seat means an unknown (zero) stack, so the minimum raise
    // already commits it: the window snaps to its ceiling.
    assert_eq!(amount, 1000);
    assert_eq!(player.history().len(), 1);
}

#[test]
fn test_raw_and_legalized_decisions_are_distinct_values() {
    let legal = legal_actions(json!([
        {"action": "fold", "amount": 0},
        {"action": "call", "amount": 20},
        {"action": "raise", "amount": {"min": 40, "max": 1000}},
    ]));

    let raw = parse_reply(r#"{"action": "raise", "amount": 5000}"#, 50);
    let action = legalize(&raw, &legal, 2000);

    // Legalization produced a new value; the raw decision is untouched.
    assert_eq!(raw.amount, Some(5000));
    assert_eq!(action.amount, 1000);
}
