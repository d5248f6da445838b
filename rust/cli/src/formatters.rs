//! Card, board, hand and action formatters for terminal display.
//!
//! Suits render as ♥ ♦ ♣ ♠ where the terminal is expected to support
//! Unicode, and as h d c s otherwise.
//!
//! ```rust
//! use holdem_engine::cards::{Card, Rank, Suit};
//! use holdem_cli::formatters::{format_card, format_board};
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_board(&[ace_spades]).starts_with("[A"));
//! ```

use holdem_engine::actions::{PlayType, PlayerAction};
use holdem_engine::cards::{Card, Rank, Suit};
use holdem_engine::hand::HandValue;

/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM) or VS Code (VSCODE_INJECTION). Unix-like systems are
/// assumed to render Unicode.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Format a Rank as a single character (2-9, T, J, Q, K, A).
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "T",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
    .to_string()
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Format a board in bracket notation, `[]` when empty.
pub fn format_board(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// Rank name, the cards that make it, and the kickers after a bar.
///
/// ```rust
/// use holdem_engine::cards::parse_cards;
/// use holdem_engine::eval::evaluate;
/// # use holdem_cli::formatters::format_hand_value;
///
/// let value = evaluate(&parse_cards("As Ad Kc 9h 7s 4d 2c").unwrap()).unwrap();
/// let text = format_hand_value(&value);
/// assert!(text.starts_with("Pair ["));
/// assert!(text.contains(" | kickers ["));
/// ```
pub fn format_hand_value(value: &HandValue) -> String {
    let mut s = format!("{} {}", value.rank(), format_board(value.cards()));
    if !value.kickers().is_empty() {
        s.push_str(&format!(" | kickers {}", format_board(value.kickers())));
    }
    s
}

/// ```rust
/// use holdem_engine::actions::PlayerAction;
/// # use holdem_cli::formatters::format_action;
///
/// assert_eq!(format_action(&PlayerAction::fold()), "fold");
/// assert_eq!(format_action(&PlayerAction::raise_to(100)), "raise to 100");
/// assert_eq!(format_action(&PlayerAction::all_in()), "all-in");
/// ```
pub fn format_action(action: &PlayerAction) -> String {
    match (action.play, action.amount) {
        (PlayType::Raise, Some(to)) => format!("raise to {}", to),
        (play, _) => play.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holdem_engine::cards::parse_cards;
    use holdem_engine::eval::evaluate;

    #[test]
    fn test_format_rank() {
        assert_eq!(format_rank(&Rank::Two), "2");
        assert_eq!(format_rank(&Rank::Ten), "T");
        assert_eq!(format_rank(&Rank::Ace), "A");
    }

    #[test]
    fn test_format_suit_unicode_or_ascii() {
        let hearts = format_suit(&Suit::Hearts);
        assert!(hearts == "♥" || hearts == "h");
        let spades = format_suit(&Suit::Spades);
        assert!(spades == "♠" || spades == "s");
    }

    #[test]
    fn test_format_board_empty() {
        assert_eq!(format_board(&[]), "[]");
    }

    #[test]
    fn test_format_board_with_cards() {
        let board = parse_cards("As Kh Qd").unwrap();
        let formatted = format_board(&board);
        assert!(formatted.starts_with("[A"));
        assert_eq!(formatted.split(' ').count(), 3);
    }

    #[test]
    fn straight_flush_has_no_kickers() {
        let value = evaluate(&parse_cards("9s 8s 7s 6s 5s 2d 3c").unwrap()).unwrap();
        let text = format_hand_value(&value);
        assert!(text.starts_with("Straight Flush ["));
        assert!(!text.contains("kickers"));
    }

    #[test]
    fn check_and_call_print_their_name() {
        assert_eq!(format_action(&PlayerAction::check()), "check");
        assert_eq!(format_action(&PlayerAction::call()), "call");
    }
}
