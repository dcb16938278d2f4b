//! Decision legalization.
//!
//! Whatever the advisory path proposes, the output of [`legalize`] is a
//! member of the turn's legal-action set with its amount in bounds. This is
//! the invariant the rest of the crate leans on.

use crate::game::entities::{self, Chips, Decision, DecisionKind, FinalAction, LegalAction};

/// Maps a raw decision onto the turn's legal-action set.
///
/// Degrade order for an illegal kind: Call if legal, else Fold if legal,
/// else the first legal kind. Fold and Call take the fixed amount the legal
/// action carries; Raise is clamped through [`clamp_raise`]. Legalization is
/// idempotent: feeding the result back in changes nothing.
pub fn legalize(raw: &Decision, legal: &[LegalAction], stack: Chips) -> FinalAction {
    match resolve_kind(raw.kind, legal) {
        DecisionKind::Fold => FinalAction {
            kind: DecisionKind::Fold,
            amount: 0,
            all_in: false,
        },
        DecisionKind::Call => FinalAction {
            kind: DecisionKind::Call,
            amount: entities::find_call(legal).unwrap_or(0),
            all_in: false,
        },
        DecisionKind::Raise => match entities::find_raise(legal) {
            Some((min, max)) => {
                let (amount, all_in) = clamp_raise(raw.amount, min, max, stack);
                FinalAction {
                    kind: DecisionKind::Raise,
                    amount,
                    all_in,
                }
            }
            // resolve_kind only returns Raise when a window exists; stay
            // total anyway.
            None => FinalAction {
                kind: DecisionKind::Fold,
                amount: 0,
                all_in: false,
            },
        },
    }
}

/// Picks the kind to act with: the raw kind when legal, degraded otherwise.
fn resolve_kind(raw: DecisionKind, legal: &[LegalAction]) -> DecisionKind {
    if legal.iter().any(|action| action.kind() == raw) {
        return raw;
    }
    if legal
        .iter()
        .any(|action| matches!(action, LegalAction::Call(_)))
    {
        return DecisionKind::Call;
    }
    if legal.iter().any(|action| matches!(action, LegalAction::Fold)) {
        return DecisionKind::Fold;
    }
    legal
        .first()
        .map(LegalAction::kind)
        .unwrap_or(DecisionKind::Fold)
}

/// Resolves a raise amount against the window, with all-in detection.
///
/// One decision table keyed on the ceiling:
///
/// | window          | amount                    | all-in when                        |
/// |-----------------|---------------------------|------------------------------------|
/// | `min > max`     | `max` (single feasible)   | always                             |
/// | finite `max`    | clamp to `[min, max]`     | amount reaches `max`, or amount >= `stack + min` (ceiling under-reported); snaps to `max` |
/// | unbounded       | at least `min`, never more than the stack covers | amount >= `stack` |
///
/// A raw amount of `None` (missing or non-numeric advice) clamps to `min`.
pub fn clamp_raise(
    raw: Option<Chips>,
    min: Chips,
    max: Option<Chips>,
    stack: Chips,
) -> (Chips, bool) {
    match max {
        // The stack cannot cover the nominal minimum: one feasible size,
        // fully committed.
        Some(max) if min > max => (max, true),
        Some(max) => {
            let clamped = raw.unwrap_or(min).clamp(min, max);
            if clamped == max || clamped >= stack.saturating_add(min) {
                (max, true)
            } else {
                (clamped, false)
            }
        }
        None => {
            let clamped = raw.unwrap_or(min).max(min);
            if clamped >= stack {
                (clamped.min(stack.max(min)), true)
            } else {
                (clamped, false)
            }
        }
    }
}
