//! Layered CLI configuration.
//!
//! Values start from defaults, are overridden by a TOML file named in
//! `HOLDEM_CONFIG`, then by `HOLDEM_*` environment variables. Command-line
//! flags are applied on top by each command.

use holdem_ai::AVAILABLE_AIS;
use holdem_engine::config::{TableConfig, MAX_SEATS};
use holdem_engine::player::STARTING_STACK;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub small_blind: u32,
    pub big_blind: u32,
    pub starting_chips: u32,
    pub players: usize,
    /// Strategy names assigned to seats in turn
    pub ai: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub small_blind: ValueSource,
    pub big_blind: ValueSource,
    pub starting_chips: ValueSource,
    pub players: ValueSource,
    pub ai: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            small_blind: ValueSource::Default,
            big_blind: ValueSource::Default,
            starting_chips: ValueSource::Default,
            players: ValueSource::Default,
            ai: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            small_blind: 1,
            big_blind: 2,
            starting_chips: STARTING_STACK,
            players: 4,
            ai: vec!["random".into()],
        }
    }
}

impl Config {
    /// Table settings for `seats` players, with an explicit seed taking
    /// precedence over the configured one.
    pub fn table(&self, seats: usize, seed: Option<u64>) -> TableConfig {
        TableConfig {
            small_blind: self.small_blind,
            big_blind: self.big_blind,
            starting_chips: self.starting_chips,
            seats,
            seed: seed.or(self.seed),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("HOLDEM_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.small_blind {
            cfg.small_blind = v;
            sources.small_blind = ValueSource::File;
        }
        if let Some(v) = f.big_blind {
            cfg.big_blind = v;
            sources.big_blind = ValueSource::File;
        }
        if let Some(v) = f.starting_chips {
            cfg.starting_chips = v;
            sources.starting_chips = ValueSource::File;
        }
        if let Some(v) = f.players {
            cfg.players = v;
            sources.players = ValueSource::File;
        }
        if let Some(v) = f.ai {
            cfg.ai = v;
            sources.ai = ValueSource::File;
        }
    }

    if let Some(v) = env_parsed("HOLDEM_SEED")? {
        cfg.seed = Some(v);
        sources.seed = ValueSource::Env;
    }
    if let Some(v) = env_parsed("HOLDEM_SMALL_BLIND")? {
        cfg.small_blind = v;
        sources.small_blind = ValueSource::Env;
    }
    if let Some(v) = env_parsed("HOLDEM_BIG_BLIND")? {
        cfg.big_blind = v;
        sources.big_blind = ValueSource::Env;
    }
    if let Some(v) = env_parsed("HOLDEM_STARTING_CHIPS")? {
        cfg.starting_chips = v;
        sources.starting_chips = ValueSource::Env;
    }
    if let Some(v) = env_parsed("HOLDEM_PLAYERS")? {
        cfg.players = v;
        sources.players = ValueSource::Env;
    }
    if let Ok(list) = std::env::var("HOLDEM_AI")
        && !list.is_empty()
    {
        cfg.ai = split_names(&list);
        sources.ai = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    small_blind: Option<u32>,
    #[serde(default)]
    big_blind: Option<u32>,
    #[serde(default)]
    starting_chips: Option<u32>,
    #[serde(default)]
    players: Option<usize>,
    #[serde(default)]
    ai: Option<Vec<String>>,
}

fn env_parsed<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => v
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::Invalid(format!("Invalid {}: {}", key, v))),
        _ => Ok(None),
    }
}

pub fn split_names(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Checks the table settings and that every strategy name is known.
pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if !(2..=MAX_SEATS).contains(&cfg.players) {
        return Err(ConfigError::Invalid(format!(
            "players must be between 2 and {}, got {}",
            MAX_SEATS, cfg.players
        )));
    }
    cfg.table(cfg.players, None)
        .validate()
        .map_err(|e| ConfigError::Invalid(e.to_string()))?;
    if cfg.ai.is_empty() {
        return Err(ConfigError::Invalid("ai list must not be empty".into()));
    }
    if let Some(bad) = cfg.ai.iter().find(|n| !AVAILABLE_AIS.contains(&n.as_str())) {
        return Err(ConfigError::Invalid(format!(
            "unknown ai '{}' (available: {})",
            bad,
            AVAILABLE_AIS.join(", ")
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn rejects_out_of_range_players() {
        let cfg = Config {
            players: 11,
            ..Config::default()
        };
        assert!(matches!(validate(&cfg), Err(ConfigError::Invalid(m)) if m.contains("players")));
    }

    #[test]
    fn rejects_inverted_blinds() {
        let cfg = Config {
            small_blind: 5,
            big_blind: 2,
            ..Config::default()
        };
        assert!(validate(&cfg).is_err());
    }

    #[test]
    fn rejects_unknown_ai() {
        let cfg = Config {
            ai: vec!["naive".into(), "oracle".into()],
            ..Config::default()
        };
        let e = validate(&cfg).unwrap_err();
        assert!(e.to_string().contains("oracle"));
    }

    #[test]
    fn split_names_trims_and_skips_blanks() {
        assert_eq!(split_names(" naive, ,random,"), vec!["naive", "random"]);
    }

    #[test]
    fn explicit_seed_wins_over_configured() {
        let cfg = Config {
            seed: Some(1),
            ..Config::default()
        };
        assert_eq!(cfg.table(3, Some(9)).seed, Some(9));
        assert_eq!(cfg.table(3, None).seed, Some(1));
        assert_eq!(cfg.table(3, None).seats, 3);
    }
}
