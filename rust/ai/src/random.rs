//! Strategies driven by their own seeded generator.
//!
//! Each instance owns a `ChaCha20Rng`, so a table seeded the same way replays
//! the same decisions and two tables never share random state.

use holdem_engine::actions::{ActRequest, PlayType, PlayerAction};
use holdem_engine::strategy::Strategy;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Play types that are sensible in the current spot.
fn legal_plays(req: &ActRequest) -> Vec<PlayType> {
    let mut legal = vec![PlayType::Fold, PlayType::AllIn];
    if req.to_call == 0 {
        legal.push(PlayType::Check);
    } else if req.stack > req.to_call {
        legal.push(PlayType::Call);
    }
    if can_raise(req) {
        legal.push(PlayType::Raise);
    }
    legal
}

fn can_raise(req: &ActRequest) -> bool {
    req.min_raise > 0 && req.committed_street + req.stack > req.min_raise_to
}

/// A raise-to amount between the legal minimum and one chip short of all-in.
fn random_raise(rng: &mut ChaCha20Rng, req: &ActRequest) -> PlayerAction {
    let reach = req.committed_street + req.stack;
    PlayerAction::raise_to(rng.random_range(req.min_raise_to..reach))
}

fn build(rng: &mut ChaCha20Rng, play: PlayType, req: &ActRequest) -> PlayerAction {
    match play {
        PlayType::Raise => random_raise(rng, req),
        other => PlayerAction::new(other, None),
    }
}

/// Picks uniformly among the legal plays.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: ChaCha20Rng,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Strategy for RandomAgent {
    fn act(&mut self, req: &ActRequest) -> PlayerAction {
        let legal = legal_plays(req);
        let play = legal[self.rng.random_range(0..legal.len())];
        build(&mut self.rng, play, req)
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Draws a fixed weight per play type once, then samples legal plays by weight.
#[derive(Debug, Clone)]
pub struct WeightedRandom {
    rng: ChaCha20Rng,
    weights: [(PlayType, f64); 5],
}

impl WeightedRandom {
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let weights = [
            PlayType::Fold,
            PlayType::Check,
            PlayType::Call,
            PlayType::Raise,
            PlayType::AllIn,
        ]
        .map(|p| (p, rng.random::<f64>()));
        Self { rng, weights }
    }

    fn weight(&self, play: PlayType) -> f64 {
        self.weights
            .iter()
            .find(|(p, _)| *p == play)
            .map_or(0.0, |(_, w)| *w)
    }
}

impl Strategy for WeightedRandom {
    fn act(&mut self, req: &ActRequest) -> PlayerAction {
        let legal = legal_plays(req);
        let total: f64 = legal.iter().map(|p| self.weight(*p)).sum();
        let point = self.rng.random::<f64>() * total;

        let mut cumulative = 0.0;
        let mut pick = legal[0];
        for play in &legal {
            cumulative += self.weight(*play);
            if cumulative >= point {
                pick = *play;
                break;
            }
        }
        build(&mut self.rng, pick, req)
    }

    fn name(&self) -> &str {
        "weighted-random"
    }
}

/// Folds or shoves with even odds.
#[derive(Debug, Clone)]
pub struct CoinFlip {
    rng: ChaCha20Rng,
}

impl CoinFlip {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }
}

impl Strategy for CoinFlip {
    fn act(&mut self, _req: &ActRequest) -> PlayerAction {
        if self.rng.random_bool(0.5) {
            PlayerAction::all_in()
        } else {
            PlayerAction::fold()
        }
    }

    fn name(&self) -> &str {
        "coin-flip"
    }
}
