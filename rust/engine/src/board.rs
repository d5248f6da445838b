use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;

/// The shared cards in the middle of the table; at most five per hand.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct CommunityCards {
    cards: Vec<Card>,
}

impl CommunityCards {
    pub const CAPACITY: usize = 5;

    pub fn add(&mut self, c: Card) -> Result<(), GameError> {
        if self.cards.len() >= Self::CAPACITY {
            return Err(GameError::BoardFull);
        }
        self.cards.push(c);
        Ok(())
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.cards.len() == Self::CAPACITY
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    #[test]
    fn sixth_card_is_rejected() {
        let mut board = CommunityCards::default();
        for c in parse_cards("2c 3d 4h 5s 6c").unwrap() {
            board.add(c).unwrap();
        }
        assert!(board.is_complete());
        let extra = parse_cards("7d").unwrap()[0];
        assert!(matches!(board.add(extra), Err(GameError::BoardFull)));
        assert_eq!(board.len(), 5);

        board.clear();
        assert!(board.is_empty());
    }
}
