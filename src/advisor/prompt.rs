//! Prompt rendering for the advisory service.

use crate::analysis::GameInfo;
use crate::game::entities::LegalAction;
use std::fmt::Write;

/// Fixed instruction preamble describing the required reply shape.
pub const SYSTEM_PREAMBLE: &str = "You are a professional Texas Hold'em player. \
Given the current game state, choose the best action for this turn. \
Your reply must be JSON with an \"action\" field (fold, call, or raise) \
and a numeric \"amount\" field.";

/// Renders a turn summary as the user message of the advisory request.
pub fn build_prompt(info: &GameInfo) -> String {
    format!(
        "Current Texas Hold'em game state:\n\
         \n\
         My hole cards: {hole}\n\
         Community cards: {board}\n\
         Street: {street}\n\
         \n\
         My stack: {stack}\n\
         Pot size: {pot}\n\
         Amount to call: {call}\n\
         \n\
         Opponents:\n\
         {opponents}\n\
         \n\
         Legal actions: {actions}\n\
         \n\
         Weigh hand strength and potential, pot odds, opponent action patterns, \
         and stack depth.\n\
         A raise to the top of the raise window commits your entire remaining \
         stack (all-in); with a premium holding, or to apply maximum pressure, \
         that is a legitimate choice.\n\
         \n\
         Reply with JSON only, for example:\n\
         {{\"action\": \"call\", \"amount\": {call}}}\n\
         {{\"action\": \"raise\", \"amount\": 50}}\n\
         {{\"action\": \"fold\", \"amount\": 0}}\n",
        hole = info.hole_cards,
        board = info.community_cards,
        street = info.street,
        stack = info.my_stack,
        pot = info.pot_size,
        call = info.call_amount,
        opponents = render_opponents(info),
        actions = render_legal_actions(info),
    )
}

fn render_opponents(info: &GameInfo) -> String {
    if info.opponents.is_empty() {
        return "  (none)".to_string();
    }
    info.opponents
        .iter()
        .map(|opp| {
            let mut line = format!(
                "  {}: stack {}, last action: {}",
                opp.name, opp.stack, opp.last_action
            );
            if opp.pattern.total > 0 {
                let _ = write!(
                    line,
                    ", aggression {:.0}% over {} actions",
                    opp.pattern.aggression_rate() * 100.0,
                    opp.pattern.total
                );
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_legal_actions(info: &GameInfo) -> String {
    if info.legal_actions.is_empty() {
        return "(none)".to_string();
    }
    info.legal_actions
        .iter()
        .map(|action| match action {
            LegalAction::Raise { max: Some(_), .. } => format!("{action} (max is all-in)"),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
