//! Deterministic fallback strategy.
//!
//! Engaged whenever the advisory path is unavailable. A pure function of the
//! turn's inputs: identical inputs always produce the identical action, so a
//! flaky advisory service degrades a match gracefully instead of randomly.

use super::legalize::clamp_raise;
use crate::game::cards;
use crate::game::entities::{self, Chips, DecisionKind, FinalAction, LegalAction};
use std::fmt;

/// A medium holding calls at most this fraction of the stack: call amounts
/// above stack / 5 fold instead.
const MEDIUM_CALL_STACK_DIVISOR: Chips = 5;

/// Hole-card classification used by the fallback.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Holding {
    /// Pair of tens or better.
    StrongPair,
    /// Same suit, ranks within four of each other.
    SuitedConnector,
    /// Pair of sevens through nines.
    MediumPair,
    /// Same suit, ranks far apart.
    Suited,
    /// Offsuit, ranks within four of each other and both at least seven.
    Connector,
    /// Highest card is a queen or better.
    HighCard,
    /// Pair below sevens.
    SmallPair,
    /// Everything else.
    Junk,
    /// Fewer than two cards, or codes that do not parse.
    Unreadable,
}

/// Strength tier a holding plays at.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Tier {
    Strong,
    Medium,
    Weak,
}

impl Holding {
    pub fn tier(&self) -> Tier {
        match self {
            Self::StrongPair | Self::SuitedConnector => Tier::Strong,
            Self::MediumPair | Self::Suited | Self::Connector | Self::HighCard => Tier::Medium,
            Self::SmallPair | Self::Junk | Self::Unreadable => Tier::Weak,
        }
    }
}

impl fmt::Display for Holding {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = match self {
            Self::StrongPair => "strong pair",
            Self::SuitedConnector => "suited connector",
            Self::MediumPair => "medium pair",
            Self::Suited => "suited",
            Self::Connector => "connector",
            Self::HighCard => "high card",
            Self::SmallPair => "small pair",
            Self::Junk => "junk",
            Self::Unreadable => "unreadable",
        };
        write!(f, "{repr}")
    }
}

/// Classifies a two-card holding from its raw card codes.
pub fn classify_holding(hole_cards: &[String]) -> Holding {
    if hole_cards.len() < 2 {
        return Holding::Unreadable;
    }
    let (Some((rank1, suit1)), Some((rank2, suit2))) = (
        cards::split_code(&hole_cards[0]),
        cards::split_code(&hole_cards[1]),
    ) else {
        return Holding::Unreadable;
    };

    let v1 = cards::rank_value(rank1);
    let v2 = cards::rank_value(rank2);

    if v1 == v2 {
        if v1 >= 10 {
            Holding::StrongPair
        } else if v1 >= 7 {
            Holding::MediumPair
        } else {
            Holding::SmallPair
        }
    } else if suit1.eq_ignore_ascii_case(&suit2) {
        if v1.abs_diff(v2) <= 4 {
            Holding::SuitedConnector
        } else {
            Holding::Suited
        }
    } else if v1.abs_diff(v2) <= 4 && v1.min(v2) >= 7 {
        Holding::Connector
    } else if v1.max(v2) >= 12 {
        Holding::HighCard
    } else {
        Holding::Junk
    }
}

/// Decides a turn without the advisory service.
///
/// Strong holdings take the minimum of the raise window (resolved through the
/// same clamp table the legalizer uses, so a collapsed window still comes out
/// legal), else call. Medium holdings call when the price is within a fifth
/// of the stack. Everything else folds.
pub fn fallback_decision(
    hole_cards: &[String],
    community_cards: &[String],
    stack: Chips,
    call_amount: Chips,
    legal: &[LegalAction],
) -> FinalAction {
    let holding = classify_holding(hole_cards);
    log::debug!(
        "fallback engaged: hole {}, board {}, holding {holding}",
        cards::format_cards(hole_cards),
        cards::format_cards(community_cards),
    );

    let fold = FinalAction {
        kind: DecisionKind::Fold,
        amount: 0,
        all_in: false,
    };

    match holding.tier() {
        Tier::Strong => {
            if let Some((min, max)) = entities::find_raise(legal) {
                let (amount, all_in) = clamp_raise(Some(min), min, max, stack);
                return FinalAction {
                    kind: DecisionKind::Raise,
                    amount,
                    all_in,
                };
            }
            match entities::find_call(legal) {
                Some(amount) => FinalAction {
                    kind: DecisionKind::Call,
                    amount,
                    all_in: false,
                },
                None => fold,
            }
        }
        Tier::Medium => match entities::find_call(legal) {
            Some(amount) if call_amount.saturating_mul(MEDIUM_CALL_STACK_DIVISOR) <= stack => {
                FinalAction {
                    kind: DecisionKind::Call,
                    amount,
                    all_in: false,
                }
            }
            _ => fold,
        },
        Tier::Weak => fold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entities::LegalAction::{Call, Fold, Raise};

    fn codes(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|c| c.to_string()).collect()
    }

    fn menu() -> Vec<LegalAction> {
        vec![
            Fold,
            Call(20),
            Raise {
                min: 40,
                max: Some(1000),
            },
        ]
    }

    #[test]
    fn test_classification_table() {
        let cases = [
            (&["AS", "AH"][..], Holding::StrongPair),
            (&["TS", "TD"], Holding::StrongPair),
            (&["9S", "9D"], Holding::MediumPair),
            (&["7C", "7H"], Holding::MediumPair),
            (&["5C", "5H"], Holding::SmallPair),
            (&["AS", "KS"], Holding::SuitedConnector),
            (&["8H", "6H"], Holding::SuitedConnector),
            (&["AH", "2H"], Holding::Suited),
            (&["9C", "8D"], Holding::Connector),
            (&["TD", "7C"], Holding::Connector),
            (&["AC", "7D"], Holding::HighCard),
            (&["QD", "3C"], Holding::HighCard),
            (&["9H", "3C"], Holding::Junk),
            (&["2D", "7S"], Holding::Junk),
            (&["AS"], Holding::Unreadable),
            (&["A", "KH"], Holding::Unreadable),
        ];
        for (hole, expected) in cases {
            assert_eq!(classify_holding(&codes(hole)), expected, "hole {hole:?}");
        }
    }

    #[test]
    fn test_strong_holding_raises_the_window_minimum() {
        let action = fallback_decision(&codes(&["AS", "AH"]), &[], 1000, 20, &menu());
        assert_eq!(
            action,
            FinalAction {
                kind: DecisionKind::Raise,
                amount: 40,
                all_in: false,
            }
        );
    }

    #[test]
    fn test_strong_holding_calls_when_raise_is_not_legal() {
        let legal = vec![Fold, Call(20)];
        let action = fallback_decision(&codes(&["AS", "AH"]), &[], 1000, 20, &legal);
        assert_eq!(action.kind, DecisionKind::Call);
        assert_eq!(action.amount, 20);
    }

    #[test]
    fn test_strong_holding_folds_with_no_raise_or_call() {
        let legal = vec![Fold];
        let action = fallback_decision(&codes(&["AS", "AH"]), &[], 1000, 0, &legal);
        assert_eq!(action.kind, DecisionKind::Fold);
    }

    #[test]
    fn test_medium_holding_calls_a_cheap_price() {
        // 20 is exactly a fifth of 100: boundary inclusive.
        let action = fallback_decision(&codes(&["9S", "9D"]), &[], 100, 20, &menu());
        assert_eq!(action.kind, DecisionKind::Call);
    }

    #[test]
    fn test_medium_holding_folds_an_expensive_price() {
        let action = fallback_decision(&codes(&["9S", "9D"]), &[], 99, 20, &menu());
        assert_eq!(action.kind, DecisionKind::Fold);
    }

    #[test]
    fn test_weak_holding_folds() {
        let action = fallback_decision(&codes(&["9H", "3C"]), &[], 1000, 20, &menu());
        assert_eq!(action.kind, DecisionKind::Fold);
        assert_eq!(action.amount, 0);
    }

    #[test]
    fn test_unreadable_cards_fold() {
        let action = fallback_decision(&[], &[], 1000, 20, &menu());
        assert_eq!(action.kind, DecisionKind::Fold);
    }

    #[test]
    fn test_collapsed_window_still_comes_out_legal() {
        let legal = vec![
            Fold,
            Call(20),
            Raise {
                min: 80,
                max: Some(55),
            },
        ];
        let action = fallback_decision(&codes(&["AS", "AH"]), &[], 55, 20, &legal);
        assert_eq!(action.amount, 55);
        assert!(action.all_in);
    }

    #[test]
    fn test_determinism() {
        let hole = codes(&["QD", "JD"]);
        let board = codes(&["2H", "7D", "KS"]);
        let first = fallback_decision(&hole, &board, 500, 60, &menu());
        for _ in 0..10 {
            assert_eq!(fallback_decision(&hole, &board, 500, 60, &menu()), first);
        }
    }
}
