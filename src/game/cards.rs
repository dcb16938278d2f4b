//! Card-code helpers.
//!
//! The engine identifies cards as rank-then-suit codes such as `"AS"` or
//! `"TD"`. Display formatting swaps the suit letter for its glyph; anything
//! that does not look like a card code passes through untouched so a quirky
//! engine never breaks a turn.

/// Suit glyph for a suit letter, or the letter itself when unrecognized.
pub fn suit_glyph(suit: char) -> char {
    match suit.to_ascii_uppercase() {
        'C' => '♣',
        'D' => '♦',
        'H' => '♥',
        'S' => '♠',
        other => other,
    }
}

/// Numeric rank for a rank token (A=14, K=13, Q=12, J=11, T=10, digits face
/// value). Unknown tokens map to 0 and classify as unplayable.
pub fn rank_value(rank: &str) -> u8 {
    match rank {
        "A" | "a" => 14,
        "K" | "k" => 13,
        "Q" | "q" => 12,
        "J" | "j" => 11,
        "T" | "t" => 10,
        "9" => 9,
        "8" => 8,
        "7" => 7,
        "6" => 6,
        "5" => 5,
        "4" => 4,
        "3" => 3,
        "2" => 2,
        _ => 0,
    }
}

/// Splits a card code into its rank token and suit letter.
///
/// Returns `None` for codes shorter than two characters.
pub fn split_code(code: &str) -> Option<(&str, char)> {
    if code.chars().count() < 2 {
        return None;
    }
    let suit = code.chars().next_back()?;
    let rank = &code[..code.len() - suit.len_utf8()];
    Some((rank, suit))
}

/// Renders a list of card codes for display, e.g. `["AS", "KH"]` -> `"A♠ K♥"`.
///
/// An empty list renders as `"none"`; malformed codes are kept verbatim.
pub fn format_cards(codes: &[String]) -> String {
    if codes.is_empty() {
        return "none".to_string();
    }
    codes
        .iter()
        .map(|code| match split_code(code) {
            Some((rank, suit)) => format!("{rank}{}", suit_glyph(suit)),
            None => code.clone(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_format_maps_suit_letters_to_glyphs() {
        assert_eq!(format_cards(&codes(&["AS", "KH", "TD", "2C"])), "A♠ K♥ T♦ 2♣");
    }

    #[test]
    fn test_format_empty_hand() {
        assert_eq!(format_cards(&[]), "none");
    }

    #[test]
    fn test_format_passes_short_codes_through() {
        assert_eq!(format_cards(&codes(&["A", "KH"])), "A K♥");
    }

    #[test]
    fn test_format_keeps_unknown_suit_letters() {
        assert_eq!(format_cards(&codes(&["AX"])), "AX");
    }

    #[test]
    fn test_rank_values() {
        assert_eq!(rank_value("A"), 14);
        assert_eq!(rank_value("T"), 10);
        assert_eq!(rank_value("7"), 7);
        assert_eq!(rank_value("10"), 0);
        assert_eq!(rank_value("joker"), 0);
    }

    #[test]
    fn test_split_code() {
        assert_eq!(split_code("AS"), Some(("A", 'S')));
        assert_eq!(split_code("Th"), Some(("T", 'h')));
        assert_eq!(split_code("2"), None);
        assert_eq!(split_code(""), None);
    }
}
