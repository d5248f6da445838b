//! Main pot and side pot settlement.
//!
//! Contributions are sliced into pots at every distinct contribution level.
//! A pot is open to the players who reached showdown and put in at least its
//! level; folded players fund pots but can never win them. Chips are never
//! created or lost: the payouts always add up to the sum of contributions.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::hand::HandValue;
use crate::player::PlayerId;

/// One slice of the pot and the players who can win it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SidePot {
    pub amount: u32,
    pub eligible: Vec<PlayerId>,
}

/// Slices per-player hand contributions into pots.
///
/// `contributions` holds every player's total for the hand, folded players
/// included, in seat order. `contenders` are the players who reached
/// showdown. A slice nobody can win is added to the previous slice.
pub fn build_side_pots(contributions: &[(PlayerId, u32)], contenders: &[PlayerId]) -> Vec<SidePot> {
    let mut levels: Vec<u32> = contributions
        .iter()
        .map(|&(_, c)| c)
        .filter(|&c| c > 0)
        .collect();
    levels.sort_unstable();
    levels.dedup();

    let mut pots: Vec<SidePot> = Vec::new();
    let mut unclaimed = 0u32;
    let mut prev = 0u32;
    for level in levels {
        let reached: Vec<PlayerId> = contributions
            .iter()
            .filter(|&&(_, c)| c >= level)
            .map(|&(id, _)| id)
            .collect();
        let amount = (level - prev) * reached.len() as u32;
        prev = level;

        let eligible: Vec<PlayerId> = reached
            .into_iter()
            .filter(|id| contenders.contains(id))
            .collect();
        if eligible.is_empty() {
            match pots.last_mut() {
                Some(last) => last.amount += amount,
                None => unclaimed += amount,
            }
        } else {
            pots.push(SidePot {
                amount: amount + unclaimed,
                eligible,
            });
            unclaimed = 0;
        }
    }
    if unclaimed > 0 {
        pots.push(SidePot {
            amount: unclaimed,
            eligible: contenders.to_vec(),
        });
    }
    pots
}

/// Pays every pot to the best hands among its eligible players.
///
/// `hands` is in evaluation order; that order decides who receives the odd
/// chips of a split pot. Returns the total won per player, in the order
/// players first won something.
pub fn distribute(pots: &[SidePot], hands: &[(PlayerId, HandValue)]) -> Vec<(PlayerId, u32)> {
    let mut payouts: Vec<(PlayerId, u32)> = Vec::new();
    for pot in pots {
        let winners = best_among(hands, |id| pot.eligible.contains(id));
        let winners = if winners.is_empty() {
            best_among(hands, |_| true)
        } else {
            winners
        };
        if winners.is_empty() {
            continue;
        }

        let share = pot.amount / winners.len() as u32;
        let remainder = pot.amount % winners.len() as u32;
        for (i, id) in winners.iter().enumerate() {
            let won = if i == 0 { share + remainder } else { share };
            credit(&mut payouts, *id, won);
        }
        debug!(amount = pot.amount, winners = winners.len(), "pot awarded");
    }
    payouts
}

/// Builds the pots and pays them out in one step.
pub fn settle(
    contributions: &[(PlayerId, u32)],
    hands: &[(PlayerId, HandValue)],
) -> (Vec<SidePot>, Vec<(PlayerId, u32)>) {
    let contenders: Vec<PlayerId> = hands.iter().map(|(id, _)| *id).collect();
    let pots = build_side_pots(contributions, &contenders);
    let payouts = distribute(&pots, hands);
    (pots, payouts)
}

fn best_among(hands: &[(PlayerId, HandValue)], eligible: impl Fn(&PlayerId) -> bool) -> Vec<PlayerId> {
    let candidates: Vec<&(PlayerId, HandValue)> =
        hands.iter().filter(|(id, _)| eligible(id)).collect();
    let Some(best) = candidates.iter().map(|(_, v)| v).max() else {
        return Vec::new();
    };
    candidates
        .iter()
        .filter(|(_, v)| v == best)
        .map(|(id, _)| *id)
        .collect()
}

fn credit(payouts: &mut Vec<(PlayerId, u32)>, id: PlayerId, amount: u32) {
    match payouts.iter_mut().find(|(p, _)| *p == id) {
        Some((_, total)) => *total += amount,
        None => payouts.push((id, amount)),
    }
}
