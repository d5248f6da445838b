//! Command handler modules for the holdem CLI.
//!
//! Each command lives in its own file and exposes
//! `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`, taking its
//! output streams as `&mut dyn Write` so tests can capture them.

pub mod cfg;
pub mod rank;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use rank::handle_rank_command;
pub use sim::{handle_sim_command, SimOptions};
