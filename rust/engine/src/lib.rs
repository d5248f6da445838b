//! # holdem-engine: Texas Hold'em Table Engine
//!
//! A deterministic Texas Hold'em engine for 2 to 10 seated players. Provides
//! hand evaluation, the betting state machine, side pot settlement and the
//! records exchanged with pluggable player strategies.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and parsing
//! - [`deck`] - Deterministic deck shuffling with a per-deck ChaCha20 RNG
//! - [`hand`] - Hand categories and comparable hand values
//! - [`eval`] - Best five-card hand out of seven
//! - [`engine`] - Hand lifecycle, turn order and showdown
//! - [`rules`] - Betting validation
//! - [`pot`] - Main pot and side pot settlement
//! - [`actions`] - Streets, actions, act requests and hand results
//! - [`strategy`] - The decision-maker contract
//! - [`logger`] - HandRecord serialization to JSONL
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use holdem_engine::cards::parse_cards;
//! use holdem_engine::eval::evaluate;
//! use holdem_engine::hand::HandRank;
//!
//! let cards = parse_cards("Ah Kh Qh Jh Th 2c 3d").unwrap();
//! let value = evaluate(&cards).unwrap();
//! assert_eq!(value.rank(), HandRank::RoyalFlush);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! Every deck owns its generator, so a seed reproduces the same deal:
//!
//! ```rust
//! use holdem_engine::deck::Deck;
//!
//! let mut a = Deck::new_with_seed(42);
//! let mut b = Deck::new_with_seed(42);
//! a.reset();
//! b.reset();
//! assert_eq!(a.draw(), b.draw());
//! ```

pub mod actions;
pub mod board;
pub mod cards;
pub mod config;
pub mod deck;
pub mod engine;
pub mod errors;
pub mod eval;
pub mod hand;
pub mod logger;
pub mod player;
pub mod pot;
pub mod rules;
pub mod strategy;
