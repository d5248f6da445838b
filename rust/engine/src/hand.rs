use std::cmp::{Ordering, Reverse};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank};

/// Hand categories from weakest to strongest.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum HandRank {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandRank {
    /// Number of rank-defining cards a hand of this category carries.
    pub fn card_count(self) -> usize {
        match self {
            HandRank::HighCard => 1,
            HandRank::Pair => 2,
            HandRank::ThreeOfAKind => 3,
            HandRank::TwoPair | HandRank::FourOfAKind => 4,
            HandRank::Straight
            | HandRank::Flush
            | HandRank::FullHouse
            | HandRank::StraightFlush
            | HandRank::RoyalFlush => 5,
        }
    }

    pub fn all() -> [HandRank; 10] {
        [
            HandRank::HighCard,
            HandRank::Pair,
            HandRank::TwoPair,
            HandRank::ThreeOfAKind,
            HandRank::Straight,
            HandRank::Flush,
            HandRank::FullHouse,
            HandRank::FourOfAKind,
            HandRank::StraightFlush,
            HandRank::RoyalFlush,
        ]
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HandRank::HighCard => "High Card",
            HandRank::Pair => "Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
            HandRank::RoyalFlush => "Royal Flush",
        };
        f.write_str(s)
    }
}

/// The evaluated strength of a five-card poker hand.
///
/// `cards` holds the cards that define the category (the pair, the trips and
/// pair of a full house, the five cards of a straight, ...) and `kickers` the
/// remaining cards up to five. Ordering is lexicographic over
/// `(rank, cards, kickers)`, which is exactly what the derived `Ord` does
/// given the field order and the normalization performed by [`HandValue::sort`].
#[derive(Debug, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    cards: Vec<Card>,
    kickers: Vec<Card>,
}

impl HandValue {
    /// Builds a normalized hand value.
    pub fn new(rank: HandRank, cards: Vec<Card>, kickers: Vec<Card>) -> Self {
        debug_assert_eq!(cards.len(), rank.card_count());
        debug_assert_eq!(cards.len() + kickers.len(), 5);
        let mut hv = Self {
            rank,
            cards,
            kickers,
        };
        hv.sort();
        hv
    }

    pub fn rank(&self) -> HandRank {
        self.rank
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn kickers(&self) -> &[Card] {
        &self.kickers
    }

    /// The top card of the hand; for the wheel this is the five.
    pub fn high_card(&self) -> Card {
        self.cards[0]
    }

    /// Normalizes internal card order so equal hands compare and serialize identically.
    pub fn sort(&mut self) {
        match self.rank {
            HandRank::FullHouse => {
                let trips_rank = self
                    .cards
                    .iter()
                    .map(|c| c.rank)
                    .find(|r| self.cards.iter().filter(|c| c.rank == *r).count() == 3);
                let (mut trips, mut pair): (Vec<Card>, Vec<Card>) = self
                    .cards
                    .iter()
                    .partition(|c| Some(c.rank) == trips_rank);
                trips.sort_unstable_by_key(|c| Reverse(c.suit));
                pair.sort_unstable_by_key(|c| Reverse(c.suit));
                trips.extend(pair);
                self.cards = trips;
            }
            HandRank::Straight | HandRank::StraightFlush | HandRank::RoyalFlush
                if is_wheel(&self.cards) =>
            {
                self.cards
                    .sort_unstable_by_key(|c| Reverse((wheel_value(c.rank), c.suit)));
            }
            _ => self.cards.sort_unstable_by(value_desc_suit_asc),
        }
        self.kickers.sort_unstable_by(value_desc_suit_asc);
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rank)?;
        for c in &self.cards {
            write!(f, " {}", c)?;
        }
        if !self.kickers.is_empty() {
            write!(f, " |")?;
            for c in &self.kickers {
                write!(f, " {}", c)?;
            }
        }
        Ok(())
    }
}

fn value_desc_suit_asc(a: &Card, b: &Card) -> Ordering {
    b.rank.cmp(&a.rank).then(a.suit.cmp(&b.suit))
}

fn is_wheel(cards: &[Card]) -> bool {
    [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]
        .iter()
        .all(|r| cards.iter().any(|c| c.rank == *r))
}

fn wheel_value(r: Rank) -> u8 {
    if r == Rank::Ace { 1 } else { r.value() }
}
