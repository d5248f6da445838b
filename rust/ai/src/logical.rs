//! Strategies that look at their stack, the table or their own cards.

use holdem_engine::actions::{ActRequest, PlayerAction, Street};
use holdem_engine::cards::Card;
use holdem_engine::eval::evaluate_available;
use holdem_engine::hand::HandRank;
use holdem_engine::strategy::Strategy;

/// Calls anything up to a tenth of its stack.
#[derive(Debug, Clone, Default)]
pub struct FiscalResponsibility;

impl Strategy for FiscalResponsibility {
    fn act(&mut self, req: &ActRequest) -> PlayerAction {
        if req.to_call == 0 {
            PlayerAction::check()
        } else if req.to_call as u64 * 10 > req.stack as u64 {
            PlayerAction::fold()
        } else {
            PlayerAction::call()
        }
    }

    fn name(&self) -> &str {
        "fiscal"
    }
}

/// Bets when few players remain and stays passive otherwise.
#[derive(Debug, Clone, Default)]
pub struct PositionPlayer;

impl Strategy for PositionPlayer {
    fn act(&mut self, req: &ActRequest) -> PlayerAction {
        if req.active_players > 3 {
            return if req.to_call > 0 {
                PlayerAction::fold()
            } else {
                PlayerAction::check()
            };
        }
        if req.to_call == 0 {
            let target = req.min_raise_to.max(req.big_blind);
            if req.committed_street + req.stack > target {
                PlayerAction::raise_to(target)
            } else {
                PlayerAction::all_in()
            }
        } else if req.stack >= 2 * req.to_call {
            PlayerAction::call()
        } else {
            PlayerAction::fold()
        }
    }

    fn name(&self) -> &str {
        "position"
    }
}

/// Raises with a pair or better, stays in cheap preflop pots, folds the rest.
///
/// The raise grows with each street: the minimum plus 1, 2, 4 or 8 chips.
#[derive(Debug, Clone, Default)]
pub struct PairKing;

impl PairKing {
    fn hand_rank(req: &ActRequest) -> HandRank {
        let cards: Vec<Card> = req
            .hole_cards
            .iter()
            .chain(&req.community_cards)
            .copied()
            .collect();
        if let Ok(value) = evaluate_available(&cards) {
            return value.rank();
        }
        match req.hole_cards.as_slice() {
            [a, b] if a.rank == b.rank => HandRank::Pair,
            _ => HandRank::HighCard,
        }
    }

    fn street_bonus(street: Street) -> u32 {
        match street {
            Street::Preflop => 1,
            Street::Flop => 2,
            Street::Turn => 4,
            Street::River | Street::Showdown => 8,
        }
    }
}

impl Strategy for PairKing {
    fn act(&mut self, req: &ActRequest) -> PlayerAction {
        let reach = req.committed_street + req.stack;
        if Self::hand_rank(req) >= HandRank::Pair {
            let bigger = req.min_raise_to + Self::street_bonus(req.street);
            return if reach > bigger {
                PlayerAction::raise_to(bigger)
            } else if reach > req.min_raise_to {
                PlayerAction::raise_to(req.min_raise_to)
            } else {
                PlayerAction::all_in()
            };
        }
        if req.to_call == 0 {
            return PlayerAction::check();
        }
        let cheap = req.committed_street + req.to_call <= 10 * req.big_blind;
        if req.street == Street::Preflop && req.stack > req.to_call && cheap {
            PlayerAction::call()
        } else {
            PlayerAction::fold()
        }
    }

    fn name(&self) -> &str {
        "pair-king"
    }
}
