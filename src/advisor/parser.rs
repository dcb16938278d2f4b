//! Advisory reply parsing.
//!
//! Replies are unconstrained text: sometimes the requested JSON object,
//! sometimes prose around it, sometimes neither. Parsing is total: any
//! input string produces a well-formed [`Decision`], so a rambling reply can
//! never fail a turn.

use crate::game::entities::{Chips, Decision, DecisionKind};
use serde::Deserialize;

/// The reply shape the prompt asks for.
#[derive(Deserialize)]
struct StructuredReply {
    action: String,
    #[serde(default)]
    amount: Option<serde_json::Value>,
}

/// Parses a raw advisory reply into a decision.
///
/// Stage one is a strict JSON parse of the whole reply; it wins when the
/// action verb is recognized, taking the amount only if it is a number.
/// Anything else falls to a keyword scan over the lowercased text, with
/// `default_raise` filling in a raise that names no number.
pub fn parse_reply(text: &str, default_raise: Chips) -> Decision {
    if let Ok(reply) = serde_json::from_str::<StructuredReply>(text) {
        if let Some(kind) = DecisionKind::from_verb(&reply.action) {
            let amount = reply.amount.as_ref().and_then(serde_json::Value::as_u64);
            return Decision::new(kind, amount);
        }
    }
    recover_from_text(text, default_raise)
}

fn recover_from_text(text: &str, default_raise: Chips) -> Decision {
    let text = text.to_lowercase();
    if text.contains("fold") {
        Decision::new(DecisionKind::Fold, Some(0))
    } else if text.contains("call") {
        // The legalizer resolves the actual call amount.
        Decision::new(DecisionKind::Call, Some(0))
    } else if text.contains("raise") || text.contains("bet") {
        let amount = first_number(&text).unwrap_or(default_raise);
        Decision::new(DecisionKind::Raise, Some(amount))
    } else {
        Decision::new(DecisionKind::Call, Some(0))
    }
}

/// First run of decimal digits in the text, if it fits in a chip amount.
fn first_number(text: &str) -> Option<Chips> {
    let start = text.find(|ch: char| ch.is_ascii_digit())?;
    let digits: String = text[start..]
        .chars()
        .take_while(|ch| ch.is_ascii_digit())
        .collect();
    digits.parse().ok()
}
