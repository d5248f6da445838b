//! # holdem CLI Library
//!
//! Command-line front end for the Texas Hold'em engine and its built-in
//! strategies.
//!
//! ## Main Entry Point
//!
//! [`run`] parses command-line arguments and executes the appropriate
//! subcommand, writing to the given output streams.
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = holdem_cli::run(["holdem", "rank", "As Ks Qs Js Ts 2d 3c"], &mut out, &mut err);
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().contains("Royal Flush"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `sim`: Play hands between built-in strategies, optionally writing JSONL history
//! - `rank`: Evaluate seven cards
//! - `cfg`: Display the resolved configuration and its sources

use clap::Parser;
use std::io::Write;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod logging;
pub mod ui;

use cli::{Commands, HoldemCli};
use commands::{handle_cfg_command, handle_rank_command, handle_sim_command, SimOptions};

pub use error::CliError;

const COMMANDS: &[&str] = &["sim", "rank", "cfg"];

/// Parses `args` and runs the selected command.
///
/// Help and version go to `out` with exit code `0`. Parse errors print the
/// clap message plus a command summary to `err`; command failures print
/// `Error: ...` to `err`. Both return [`exit_code::ERROR`].
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HoldemCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_parse_error(&e, out, err),
    };

    let result = match cli.cmd {
        Commands::Sim {
            hands,
            players,
            seed,
            ai,
            output,
            quiet,
        } => {
            let opts = SimOptions {
                hands,
                players,
                seed,
                ai,
                output,
                quiet,
            };
            handle_sim_command(&opts, out, err)
        }
        Commands::Rank { cards } => handle_rank_command(&cards, out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = writeln!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn report_parse_error(e: &clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if write!(out, "{}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::SUCCESS
        }
        _ => {
            let _ = write_usage(e, err);
            exit_code::ERROR
        }
    }
}

fn write_usage(e: &clap::Error, err: &mut dyn Write) -> std::io::Result<()> {
    writeln!(err, "{}", e)?;
    writeln!(err)?;
    writeln!(err, "holdem - Texas Hold'em simulator")?;
    writeln!(err, "Usage: holdem <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in COMMANDS {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: holdem --help")
}
