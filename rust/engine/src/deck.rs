use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// A 52-card deck with its own seeded RNG.
///
/// Every deck owns its generator, so two tables never share random state and
/// a given seed always reproduces the same sequence of shuffles.
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep initial order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    /// Shuffles the cards that have not been dealt yet.
    pub fn shuffle(&mut self) {
        let pos = self.position;
        self.cards[pos..].shuffle(&mut self.rng);
    }

    pub fn draw(&mut self) -> Result<Card, GameError> {
        let c = self.peek()?;
        self.position += 1;
        Ok(c)
    }

    pub fn peek(&self) -> Result<Card, GameError> {
        self.cards
            .get(self.position)
            .copied()
            .ok_or(GameError::DeckEmpty)
    }

    pub fn burn(&mut self) -> Result<(), GameError> {
        self.draw().map(|_| ())
    }

    /// Restores all 52 cards and reshuffles them.
    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.position = 0;
        self.shuffle();
    }

    pub fn count(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}
