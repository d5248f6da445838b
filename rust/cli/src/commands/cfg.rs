//! Configuration command handler.
//!
//! Prints every resolved setting as pretty JSON together with where it came
//! from (`default`, `file` or `env`):
//!
//! ```json
//! {
//!   "big_blind": {
//!     "value": 2,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(e.into());
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "small_blind": {
            "value": config.small_blind,
            "source": sources.small_blind,
        },
        "big_blind": {
            "value": config.big_blind,
            "source": sources.big_blind,
        },
        "starting_chips": {
            "value": config.starting_chips,
            "source": sources.starting_chips,
        },
        "players": {
            "value": config.players,
            "source": sources.players,
        },
        "ai": {
            "value": config.ai,
            "source": sources.ai,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
