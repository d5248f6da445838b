//! Strategies that follow one fixed rule regardless of their cards.

use holdem_engine::actions::{ActRequest, PlayerAction, Street};
use holdem_engine::strategy::Strategy;

/// Folds every time it is asked to act.
#[derive(Debug, Clone, Default)]
pub struct Fold;

impl Strategy for Fold {
    fn act(&mut self, _req: &ActRequest) -> PlayerAction {
        PlayerAction::fold()
    }

    fn name(&self) -> &str {
        "fold"
    }
}

/// Checks when it is free, folds to any bet.
#[derive(Debug, Clone, Default)]
pub struct CheckOrFold;

impl Strategy for CheckOrFold {
    fn act(&mut self, req: &ActRequest) -> PlayerAction {
        if req.to_call > 0 {
            PlayerAction::fold()
        } else {
            PlayerAction::check()
        }
    }

    fn name(&self) -> &str {
        "check-or-fold"
    }
}

/// Never folds and never raises.
#[derive(Debug, Clone, Default)]
pub struct CheckOrCall;

impl Strategy for CheckOrCall {
    fn act(&mut self, req: &ActRequest) -> PlayerAction {
        if req.to_call > 0 {
            PlayerAction::call()
        } else {
            PlayerAction::check()
        }
    }

    fn name(&self) -> &str {
        "check-or-call"
    }
}

#[derive(Debug, Clone, Default)]
pub struct AllIn;

impl Strategy for AllIn {
    fn act(&mut self, _req: &ActRequest) -> PlayerAction {
        PlayerAction::all_in()
    }

    fn name(&self) -> &str {
        "all-in"
    }
}

/// Shoves whenever it out-chips every opponent by more than the call,
/// otherwise checks or folds.
#[derive(Debug, Clone, Default)]
pub struct Bully;

impl Strategy for Bully {
    fn act(&mut self, req: &ActRequest) -> PlayerAction {
        let biggest = req.opponents.values().map(|o| o.chips).max().unwrap_or(0);
        if req.stack > biggest + req.to_call {
            PlayerAction::all_in()
        } else if req.to_call == 0 {
            PlayerAction::check()
        } else {
            PlayerAction::fold()
        }
    }

    fn name(&self) -> &str {
        "bully"
    }
}

/// Raises the minimum preflop when the big blind option comes round, checks
/// later streets, and calls only bets of at most a quarter of the pot.
#[derive(Debug, Clone, Default)]
pub struct Naive;

impl Strategy for Naive {
    fn act(&mut self, req: &ActRequest) -> PlayerAction {
        if req.to_call == 0 {
            if req.street != Street::Preflop {
                return PlayerAction::check();
            }
            return if req.min_raise_to >= req.committed_street + req.stack {
                PlayerAction::all_in()
            } else {
                PlayerAction::raise_to(req.min_raise_to)
            };
        }
        if req.to_call <= req.pot / 4 {
            PlayerAction::call()
        } else {
            PlayerAction::fold()
        }
    }

    fn name(&self) -> &str {
        "naive"
    }
}

/// Ignores its cards and looks only at the price: calls when the call is more
/// than a quarter of the pot it would then be part of, checks when free and
/// folds otherwise.
#[derive(Debug, Clone, Default)]
pub struct PotOdds;

impl Strategy for PotOdds {
    fn act(&mut self, req: &ActRequest) -> PlayerAction {
        if req.to_call == 0 {
            return PlayerAction::check();
        }
        let to_call = u64::from(req.to_call);
        if 4 * to_call > u64::from(req.pot) + to_call {
            PlayerAction::call()
        } else {
            PlayerAction::fold()
        }
    }

    fn name(&self) -> &str {
        "pot-odds"
    }
}
