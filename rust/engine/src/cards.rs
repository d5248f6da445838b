use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::GameError;

/// Represents one of the four suits in a standard 52-card deck.
///
/// Suits carry a fixed total order (Diamonds < Clubs < Hearts < Spades) that
/// breaks ties between cards of equal rank, which keeps kicker selection and
/// hand comparison deterministic.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Diamonds suit (♦)
    Diamonds,
    /// Clubs suit (♣)
    Clubs,
    /// Hearts suit (♥)
    Hearts,
    /// Spades suit (♠)
    Spades,
}

/// Represents the rank (face value) of a playing card from Two through Ace.
/// Numeric values are assigned for comparison and hand evaluation purposes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two = 2,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
    /// Ace (14)
    Ace,
}

impl Rank {
    pub fn from_u8(v: u8) -> Option<Rank> {
        let r = match v {
            2 => Rank::Two,
            3 => Rank::Three,
            4 => Rank::Four,
            5 => Rank::Five,
            6 => Rank::Six,
            7 => Rank::Seven,
            8 => Rank::Eight,
            9 => Rank::Nine,
            10 => Rank::Ten,
            11 => Rank::Jack,
            12 => Rank::Queen,
            13 => Rank::King,
            14 => Rank::Ace,
            _ => return None,
        };
        Some(r)
    }

    pub fn value(self) -> u8 {
        self as u8
    }

    fn symbol(self) -> char {
        match self {
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
            r => (b'0' + r.value()) as char,
        }
    }
}

impl Suit {
    fn symbol(self) -> char {
        match self {
            Suit::Diamonds => 'd',
            Suit::Clubs => 'c',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        }
    }
}

/// Represents a single playing card with a rank and suit.
///
/// Field order matters: the derived ordering compares rank first and falls
/// back to suit, so `Card` is totally ordered by value then suit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
    /// The suit of the card
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = GameError;

    /// Parses short notation such as `As`, `td`, `10h` or `2♣`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let bad = || GameError::CardParse(s.to_string());
        let suit_char = s.chars().last().ok_or_else(bad)?;
        let rank_part = &s[..s.len() - suit_char.len_utf8()];

        let suit = match suit_char {
            'd' | 'D' | '♦' => Suit::Diamonds,
            'c' | 'C' | '♣' => Suit::Clubs,
            'h' | 'H' | '♥' => Suit::Hearts,
            's' | 'S' | '♠' => Suit::Spades,
            _ => return Err(bad()),
        };
        let rank = match rank_part.to_ascii_uppercase().as_str() {
            "A" => Rank::Ace,
            "K" => Rank::King,
            "Q" => Rank::Queen,
            "J" => Rank::Jack,
            "T" | "10" => Rank::Ten,
            n => n
                .parse::<u8>()
                .ok()
                .filter(|v| (2..=9).contains(v))
                .and_then(Rank::from_u8)
                .ok_or_else(bad)?,
        };
        Ok(Card { rank, suit })
    }
}

/// Parses a whitespace or comma separated list of cards.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, GameError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::parse)
        .collect()
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Diamonds, Suit::Clubs, Suit::Hearts, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &r in &all_ranks() {
        for &s in &all_suits() {
            v.push(Card { rank: r, suit: s });
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_prints_short_notation() {
        let c: Card = "Td".parse().unwrap();
        assert_eq!(c, Card::new(Rank::Ten, Suit::Diamonds));
        assert_eq!(c.to_string(), "Td");
        assert_eq!("10h".parse::<Card>().unwrap().rank, Rank::Ten);
        assert_eq!("2♣".parse::<Card>().unwrap(), Card::new(Rank::Two, Suit::Clubs));
    }

    #[test]
    fn rejects_malformed_cards() {
        for bad in ["", "1s", "Ax", "11h", "s"] {
            assert!(matches!(bad.parse::<Card>(), Err(GameError::CardParse(_))), "{bad}");
        }
    }

    #[test]
    fn value_breaks_ties_before_suit() {
        let ace_d = Card::new(Rank::Ace, Suit::Diamonds);
        let king_s = Card::new(Rank::King, Suit::Spades);
        let ace_s = Card::new(Rank::Ace, Suit::Spades);
        assert!(ace_d > king_s);
        assert!(ace_s > ace_d);
    }
}
