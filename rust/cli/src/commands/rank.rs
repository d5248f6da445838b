//! `rank`: evaluate seven cards and print the category, the cards that make
//! it and the kickers.

use crate::error::CliError;
use crate::formatters::{format_board, format_hand_value};
use holdem_engine::cards::parse_cards;
use holdem_engine::eval::evaluate;
use std::io::Write;

/// Cards may arrive as separate arguments or as one quoted string.
pub fn handle_rank_command(cards: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let joined = cards.join(" ");
    let parsed = parse_cards(&joined).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    let value = evaluate(&parsed).map_err(|e| CliError::InvalidInput(e.to_string()))?;

    writeln!(out, "Cards:   {}", format_board(&parsed))?;
    writeln!(out, "Rank:    {}", value.rank())?;
    writeln!(out, "Best:    {}", format_board(value.cards()))?;
    writeln!(out, "Kickers: {}", format_board(value.kickers()))?;
    writeln!(out, "Hand:    {}", format_hand_value(&value))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn prints_rank_and_kickers() {
        let mut out = Vec::new();
        handle_rank_command(&args("Ah Ad Kc Qs 9h 4d 2c"), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Rank:    Pair"));
        assert!(text.lines().any(|l| l.starts_with("Kickers: [K")));
    }

    #[test]
    fn accepts_a_single_quoted_argument() {
        let mut out = Vec::new();
        handle_rank_command(&["As Ks Qs Js Ts 2d 3c".to_string()], &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("Royal Flush"));
    }

    #[test]
    fn wrong_card_count_is_invalid_input() {
        let mut out = Vec::new();
        let e = handle_rank_command(&args("As Ks Qs"), &mut out).unwrap_err();
        assert!(matches!(e, CliError::InvalidInput(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn bad_card_is_invalid_input() {
        let mut out = Vec::new();
        let e = handle_rank_command(&args("As Ks Qs Js Ts 2d Zz"), &mut out).unwrap_err();
        assert!(matches!(e, CliError::InvalidInput(_)));
    }
}
