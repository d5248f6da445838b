//! Records exchanged between the engine and strategy collaborators.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::HandValue;
use crate::player::PlayerId;
use crate::pot::SidePot;

/// A betting street. Streets only ever move forward within a hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Street {
    /// Before flop (hole cards dealt, blinds posted)
    Preflop,
    /// After flop (3 community cards)
    Flop,
    /// After turn (4th community card)
    Turn,
    /// After river (5th community card)
    River,
    /// Hands are compared and pots paid out
    Showdown,
}

impl Street {
    pub fn next(self) -> Street {
        match self {
            Street::Preflop => Street::Flop,
            Street::Flop => Street::Turn,
            Street::Turn => Street::River,
            Street::River | Street::Showdown => Street::Showdown,
        }
    }

    /// Community cards that are on the board once this street is dealt.
    pub fn board_len(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River | Street::Showdown => 5,
        }
    }
}

/// The kind of move a player makes on their turn.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PlayType {
    Fold,
    Check,
    Call,
    Raise,
    AllIn,
}

impl FromStr for PlayType {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fold" => Ok(PlayType::Fold),
            "check" => Ok(PlayType::Check),
            "call" => Ok(PlayType::Call),
            "raise" => Ok(PlayType::Raise),
            "allin" | "all-in" | "all_in" => Ok(PlayType::AllIn),
            _ => Err(GameError::UnknownAction(s.to_string())),
        }
    }
}

impl fmt::Display for PlayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PlayType::Fold => "fold",
            PlayType::Check => "check",
            PlayType::Call => "call",
            PlayType::Raise => "raise",
            PlayType::AllIn => "all-in",
        };
        f.write_str(s)
    }
}

/// A strategy's decision.
///
/// For [`PlayType::Raise`] the amount is the total the player will have
/// committed on the current street, not the increment. Other play types
/// ignore the amount.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerAction {
    pub play: PlayType,
    pub amount: Option<u32>,
}

impl PlayerAction {
    pub fn new(play: PlayType, amount: Option<u32>) -> Self {
        Self { play, amount }
    }
    pub fn fold() -> Self {
        Self::new(PlayType::Fold, None)
    }
    pub fn check() -> Self {
        Self::new(PlayType::Check, None)
    }
    pub fn call() -> Self {
        Self::new(PlayType::Call, None)
    }
    pub fn raise_to(total: u32) -> Self {
        Self::new(PlayType::Raise, Some(total))
    }
    pub fn all_in() -> Self {
        Self::new(PlayType::AllIn, None)
    }
}

/// What a strategy may know about one opponent still in the hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct OpponentSummary {
    pub seat: usize,
    pub chips: u32,
    pub committed_street: u32,
    pub committed_hand: u32,
    /// Always false: folded players are left out of the snapshot.
    #[serde(default)]
    pub folded: bool,
}

/// Read-only snapshot handed to the acting player's strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActRequest {
    pub player_id: PlayerId,
    pub hole_cards: Vec<Card>,
    pub community_cards: Vec<Card>,
    pub street: Street,
    /// Chips still owed to match the highest bet on this street
    pub to_call: u32,
    /// Smallest legal raise increment beyond calling
    pub min_raise: u32,
    /// Smallest legal street total for a raise (`committed_street + to_call + min_raise`)
    pub min_raise_to: u32,
    pub any_bet_this_street: bool,
    pub pot: u32,
    pub committed_street: u32,
    pub committed_hand: u32,
    pub stack: u32,
    pub active_players: usize,
    pub seat: usize,
    pub dealer_seat: usize,
    pub small_blind: u32,
    pub big_blind: u32,
    pub opponents: BTreeMap<PlayerId, OpponentSummary>,
}

/// One player's evaluated hand at showdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowdownHand {
    pub player_id: PlayerId,
    pub name: String,
    pub hole_cards: Vec<Card>,
    pub value: HandValue,
}

/// Outcome of one complete hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandResult {
    pub hand_number: u64,
    pub board: Vec<Card>,
    /// Every player who reached showdown, in evaluation order; empty when
    /// everyone else folded
    pub showdown: Vec<ShowdownHand>,
    /// Players holding the best hand, or the last player standing
    pub winners: Vec<PlayerId>,
    pub pots: Vec<SidePot>,
    pub payouts: Vec<(PlayerId, u32)>,
}

impl HandResult {
    pub fn total_paid(&self) -> u32 {
        self.payouts.iter().map(|(_, amount)| amount).sum()
    }
}
