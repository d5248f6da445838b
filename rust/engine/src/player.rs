use crate::cards::Card;
use crate::errors::GameError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque, stable player identity used to key the betting ledgers.
pub type PlayerId = Uuid;

/// Default starting stack size for each player in chips
pub const STARTING_STACK: u32 = 1_000;

/// A player's two private cards.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct HoleCards {
    cards: Vec<Card>,
}

impl HoleCards {
    pub fn add(&mut self, c: Card) -> Result<(), GameError> {
        if self.cards.len() >= 2 {
            return Err(GameError::HoleCardsFull);
        }
        self.cards.push(c);
        Ok(())
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// Represents a seated player with their chip stack and hole cards.
///
/// Players are owned by the engine; strategies only ever see the snapshot in
/// an [`crate::actions::ActRequest`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    chips: u32,
    hand: HoleCards,
    /// Index into the engine's player list; updated when busted players leave
    seat: usize,
}

impl Player {
    pub fn new(name: impl Into<String>, chips: u32) -> Self {
        Self::with_id(Uuid::new_v4(), name, chips)
    }

    pub fn with_id(id: PlayerId, name: impl Into<String>, chips: u32) -> Self {
        Self {
            id,
            name: name.into(),
            chips,
            hand: HoleCards::default(),
            seat: 0,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn chips(&self) -> u32 {
        self.chips
    }
    pub fn seat(&self) -> usize {
        self.seat
    }
    pub(crate) fn set_seat(&mut self, seat: usize) {
        self.seat = seat;
    }

    pub fn hole_cards(&self) -> &[Card] {
        self.hand.cards()
    }

    pub fn give_card(&mut self, c: Card) -> Result<(), GameError> {
        self.hand.add(c)
    }

    pub fn clear_cards(&mut self) {
        self.hand.clear();
    }

    pub fn add_chips(&mut self, amount: u32) {
        self.chips = self.chips.saturating_add(amount);
    }

    /// Removes up to `amount` chips from the stack and returns what was actually taken.
    pub fn bet(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.chips);
        self.chips -= taken;
        taken
    }
}
