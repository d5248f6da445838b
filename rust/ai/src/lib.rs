//! # holdem-ai: Built-in Player Strategies
//!
//! Rule-based and random decision makers that plug into the table engine
//! through [`holdem_engine::strategy::Strategy`].
//!
//! ## Core Components
//!
//! - [`simple`] - Fixed-rule strategies (fold, check-or-call, all-in, bully, naive)
//! - [`logical`] - Strategies that weigh stack, position or hand strength
//! - [`random`] - Strategies driven by their own seeded RNG
//! - [`create_ai`] - Registry that builds a strategy from its name
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_ai::create_ai;
//! use holdem_engine::config::TableConfig;
//! use holdem_engine::engine::Engine;
//! use holdem_engine::player::Player;
//!
//! let mut engine = Engine::new(TableConfig { seed: Some(42), ..TableConfig::default() }).unwrap();
//! for (i, name) in ["naive", "random"].iter().enumerate() {
//!     let ai = create_ai(name, i as u64).unwrap();
//!     engine.add_player(Player::new(*name, 1000), ai).unwrap();
//! }
//! let result = engine.play_hand().unwrap();
//! assert!(!result.winners.is_empty());
//! ```

use holdem_engine::strategy::Strategy;
use thiserror::Error;

pub mod logical;
pub mod random;
pub mod simple;

/// Names accepted by [`create_ai`].
pub const AVAILABLE_AIS: &[&str] = &[
    "fold",
    "check-or-fold",
    "check-or-call",
    "all-in",
    "bully",
    "fiscal",
    "naive",
    "pot-odds",
    "position",
    "pair-king",
    "random",
    "weighted-random",
    "coin-flip",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AiError {
    #[error("Unknown AI type: {0} (available: {list})", list = AVAILABLE_AIS.join(", "))]
    UnknownStrategy(String),
}

/// Builds a strategy by name.
///
/// `seed` initializes the strategy's own RNG; deterministic strategies ignore it.
///
/// # Example
///
/// ```rust
/// use holdem_ai::{create_ai, AiError};
///
/// let ai = create_ai("bully", 0).unwrap();
/// assert_eq!(ai.name(), "bully");
/// assert!(matches!(create_ai("telepath", 0), Err(AiError::UnknownStrategy(_))));
/// ```
pub fn create_ai(name: &str, seed: u64) -> Result<Box<dyn Strategy>, AiError> {
    let ai: Box<dyn Strategy> = match name {
        "fold" => Box::new(simple::Fold),
        "check-or-fold" => Box::new(simple::CheckOrFold),
        "check-or-call" => Box::new(simple::CheckOrCall),
        "all-in" => Box::new(simple::AllIn),
        "bully" => Box::new(simple::Bully),
        "naive" => Box::new(simple::Naive),
        "pot-odds" => Box::new(simple::PotOdds),
        "fiscal" => Box::new(logical::FiscalResponsibility),
        "position" => Box::new(logical::PositionPlayer),
        "pair-king" => Box::new(logical::PairKing),
        "random" => Box::new(random::RandomAgent::new(seed)),
        "weighted-random" => Box::new(random::WeightedRandom::new(seed)),
        "coin-flip" => Box::new(random::CoinFlip::new(seed)),
        _ => return Err(AiError::UnknownStrategy(name.to_string())),
    };
    Ok(ai)
}
