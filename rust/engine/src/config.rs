use serde::{Deserialize, Serialize};

use crate::errors::GameError;
use crate::player::STARTING_STACK;

/// Most seats a single table supports.
pub const MAX_SEATS: usize = 10;

/// Stakes and table limits for one engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub small_blind: u32,
    pub big_blind: u32,
    /// Chips each new player is seated with
    pub starting_chips: u32,
    /// Table capacity, between 2 and [`MAX_SEATS`]
    pub seats: usize,
    /// Deck seed; `None` draws one from OS entropy
    pub seed: Option<u64>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            small_blind: 1,
            big_blind: 2,
            starting_chips: STARTING_STACK,
            seats: MAX_SEATS,
            seed: None,
        }
    }
}

impl TableConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.small_blind == 0 || self.big_blind == 0 {
            return Err(GameError::InvalidConfig(
                "blinds must be greater than zero".to_string(),
            ));
        }
        if self.small_blind > self.big_blind {
            return Err(GameError::InvalidConfig(format!(
                "small blind {} exceeds big blind {}",
                self.small_blind, self.big_blind
            )));
        }
        if !(2..=MAX_SEATS).contains(&self.seats) {
            return Err(GameError::InvalidConfig(format!(
                "seats must be between 2 and {MAX_SEATS}, got {}",
                self.seats
            )));
        }
        if self.starting_chips == 0 {
            return Err(GameError::InvalidConfig(
                "starting chips must be greater than zero".to_string(),
            ));
        }
        if self.starting_chips.checked_mul(self.seats as u32).is_none() {
            return Err(GameError::InvalidConfig(format!(
                "{} seats of {} starting chips exceed {} chips",
                self.seats,
                self.starting_chips,
                u32::MAX
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(TableConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_inverted_blinds() {
        let cfg = TableConfig {
            small_blind: 5,
            big_blind: 2,
            ..TableConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_oversized_table() {
        let cfg = TableConfig {
            seats: 11,
            ..TableConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_table_total_past_u32() {
        let cfg = TableConfig {
            starting_chips: 1_000_000_000,
            seats: 5,
            ..TableConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(GameError::InvalidConfig(_))));

        let cfg = TableConfig {
            seats: 4,
            ..cfg
        };
        assert!(cfg.validate().is_ok());
    }
}
