//! Simulation command: seat built-in strategies at one table and play hands
//! until the requested count is reached or only one player has chips left.
//!
//! After every hand the table's chip total is compared with the total at the
//! start; any difference aborts the run with an engine error.
//!
//! # Examples
//!
//! ```no_run
//! use holdem_cli::commands::{handle_sim_command, SimOptions};
//! use std::io;
//!
//! let opts = SimOptions {
//!     hands: 100,
//!     seed: Some(42),
//!     ai: vec!["naive".into(), "pair-king".into()],
//!     ..SimOptions::default()
//! };
//! handle_sim_command(&opts, &mut io::stdout(), &mut io::stderr()).unwrap();
//! ```

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_action, format_board, format_hand_value};
use crate::ui;
use holdem_ai::create_ai;
use holdem_engine::actions::HandResult;
use holdem_engine::engine::Engine;
use holdem_engine::logger::{ActionRecord, HandLogger, HandRecord};
use holdem_engine::player::{Player, PlayerId};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info};

/// Flags of the `sim` command; `None`/empty fields fall back to config.
#[derive(Debug, Clone, Default)]
pub struct SimOptions {
    pub hands: u64,
    pub players: Option<usize>,
    pub seed: Option<u64>,
    pub ai: Vec<String>,
    pub output: Option<PathBuf>,
    pub quiet: bool,
}

pub fn handle_sim_command(
    opts: &SimOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if opts.hands == 0 {
        ui::write_error(err, "hands must be >= 1")?;
        return Err(CliError::InvalidInput("hands must be >= 1".to_string()));
    }

    let mut cfg = config::load_with_sources()?.config;
    if let Some(players) = opts.players {
        cfg.players = players;
    }
    if !opts.ai.is_empty() {
        cfg.ai = opts.ai.clone();
    }
    config::validate(&cfg).map_err(|e| CliError::InvalidInput(e.to_string()))?;

    let mut engine = Engine::new(cfg.table(cfg.players, opts.seed))?;
    for seat in 0..cfg.players {
        let name = &cfg.ai[seat % cfg.ai.len()];
        let strategy = create_ai(name, engine.seed().wrapping_add(seat as u64 + 1))?;
        let player = Player::new(format!("{}-{}", name, seat + 1), cfg.starting_chips);
        engine.add_player(player, strategy)?;
    }

    let mut logger = match &opts.output {
        Some(path) => match HandLogger::create(path) {
            Ok(l) => Some(l),
            Err(e) => {
                ui::write_error(err, &format!("Failed to open output file: {}", e))?;
                return Err(CliError::Io(e));
            }
        },
        None => None,
    };

    let expected = engine.total_chips();
    writeln!(
        out,
        "Seed {}: {} players, blinds {}/{}, {} chips each",
        engine.seed(),
        cfg.players,
        cfg.small_blind,
        cfg.big_blind,
        cfg.starting_chips
    )?;
    if !opts.quiet {
        for p in engine.players() {
            let strategy = engine.strategy_name(p.id()).unwrap_or("unknown");
            writeln!(out, "  Seat {}: {} plays {}", p.seat() + 1, p.name(), strategy)?;
        }
    }

    let mut played = 0u64;
    while played < opts.hands {
        if engine.players().iter().filter(|p| p.chips() > 0).count() < 2 {
            break;
        }
        let result = engine.play_hand()?;
        played += 1;

        let total = engine.total_chips();
        if total != expected {
            return Err(CliError::Engine(format!(
                "chip conservation violated after hand {}: expected {}, found {}",
                result.hand_number, expected, total
            )));
        }

        if let Some(logger) = logger.as_mut() {
            let record = HandRecord::from_result(
                logger.next_id(),
                Some(engine.seed()),
                engine.history(),
                &result,
            );
            logger.write(&record)?;
        }

        debug!(hand = result.hand_number, winners = result.winners.len(), "hand simulated");
        if !opts.quiet {
            print_hand(&engine, &result, out)?;
        }
    }

    info!(hands = played, "simulation finished");
    writeln!(out, "Played {} hands", played)?;
    if played < opts.hands {
        writeln!(out, "Stopped early: only one player has chips")?;
    }
    writeln!(out, "Final stacks: {}", stacks(&engine))?;
    if let Some(path) = &opts.output {
        writeln!(out, "Hand history written to {}", path.display())?;
    }
    Ok(())
}

fn name_of(engine: &Engine, id: PlayerId) -> String {
    engine
        .player(id)
        .map_or_else(|| id.to_string(), |p| p.name().to_string())
}

fn stacks(engine: &Engine) -> String {
    engine
        .players()
        .iter()
        .map(|p| format!("{}={}", p.name(), p.chips()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// One line per street that saw action, e.g. `  Flop: naive-1 check, bully-2 raise to 8`.
fn print_actions(
    engine: &Engine,
    history: &[ActionRecord],
    out: &mut dyn Write,
) -> Result<(), CliError> {
    for street in history.chunk_by(|a, b| a.street == b.street) {
        let moves: Vec<String> = street
            .iter()
            .map(|r| format!("{} {}", name_of(engine, r.player_id), format_action(&r.action)))
            .collect();
        writeln!(out, "  {:?}: {}", street[0].street, moves.join(", "))?;
    }
    Ok(())
}

fn print_hand(engine: &Engine, result: &HandResult, out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "Hand {}", result.hand_number)?;
    print_actions(engine, engine.history(), out)?;
    writeln!(out, "  Board: {}", format_board(&result.board))?;
    for shown in &result.showdown {
        writeln!(
            out,
            "  {} shows {}: {}",
            shown.name,
            format_board(&shown.hole_cards),
            format_hand_value(&shown.value)
        )?;
    }
    let winners: Vec<String> = result.winners.iter().map(|id| name_of(engine, *id)).collect();
    let paid: Vec<String> = result
        .payouts
        .iter()
        .map(|(id, amount)| format!("{} +{}", name_of(engine, *id), amount))
        .collect();
    writeln!(out, "  Winners: {} ({})", winners.join(", "), paid.join(", "))?;
    writeln!(out, "  Stacks: {}", stacks(engine))?;
    Ok(())
}
