//! Seven-card hand evaluation.
//!
//! The evaluator checks categories from strongest to weakest and returns the
//! first match. All work is done on a copy of the input sorted from highest to
//! lowest card, so the result never depends on how the cards were ordered or
//! split between hole cards and board.

use crate::cards::{all_suits, Card, Rank};
use crate::errors::GameError;
use crate::hand::{HandRank, HandValue};

/// Evaluates exactly seven distinct cards into their best five-card hand.
pub fn evaluate(cards: &[Card]) -> Result<HandValue, GameError> {
    if cards.len() != 7 {
        return Err(GameError::InvalidCardCount {
            expected: "7",
            actual: cards.len(),
        });
    }
    classify(cards)
}

/// Like [`evaluate`] but accepts five to seven cards, for hand readings
/// taken before the river.
pub fn evaluate_available(cards: &[Card]) -> Result<HandValue, GameError> {
    if !(5..=7).contains(&cards.len()) {
        return Err(GameError::InvalidCardCount {
            expected: "5 to 7",
            actual: cards.len(),
        });
    }
    classify(cards)
}

/// Evaluates two hole cards together with a complete five-card board.
pub fn best_hand(hole: &[Card], board: &[Card]) -> Result<HandValue, GameError> {
    let all: Vec<Card> = hole.iter().chain(board).copied().collect();
    evaluate(&all)
}

fn classify(cards: &[Card]) -> Result<HandValue, GameError> {
    let mut sorted = cards.to_vec();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    if let Some(w) = sorted.windows(2).find(|w| w[0] == w[1]) {
        return Err(GameError::DuplicateCard(w[0]));
    }

    let groups = group_by_rank(&sorted);
    let hv = straight_flush(&sorted)
        .or_else(|| four_of_a_kind(&sorted, &groups))
        .or_else(|| full_house(&groups))
        .or_else(|| flush(&sorted))
        .or_else(|| straight(&sorted))
        .or_else(|| three_of_a_kind(&sorted, &groups))
        .or_else(|| pairs(&sorted, &groups))
        .unwrap_or_else(|| high_card(&sorted));
    Ok(hv)
}

/// Groups descending cards by rank, highest rank first.
fn group_by_rank(sorted: &[Card]) -> Vec<Vec<Card>> {
    let mut groups: Vec<Vec<Card>> = Vec::new();
    for &c in sorted {
        match groups.last_mut() {
            Some(g) if g[0].rank == c.rank => g.push(c),
            _ => groups.push(vec![c]),
        }
    }
    groups
}

fn suited(sorted: &[Card]) -> impl Iterator<Item = Vec<Card>> + '_ {
    all_suits()
        .into_iter()
        .map(move |s| sorted.iter().copied().filter(|c| c.suit == s).collect::<Vec<_>>())
        .filter(|cards| cards.len() >= 5)
}

/// Takes the best `n` cards of `pool`, which must already be sorted descending.
fn kickers<'a>(n: usize, pool: impl Iterator<Item = &'a Card>) -> Vec<Card> {
    pool.take(n).copied().collect()
}

/// Finds the highest five-card run in `sorted`, treating the ace as both
/// high and low. Returns the run from its top card down (the wheel ends with
/// the ace).
fn find_run(sorted: &[Card]) -> Option<Vec<Card>> {
    // best card per value; index 1 doubles as the low ace
    let mut best: [Option<Card>; 15] = [None; 15];
    for &c in sorted {
        let v = c.rank.value() as usize;
        if best[v].is_none() {
            best[v] = Some(c);
        }
    }
    best[1] = best[Rank::Ace.value() as usize];

    (5..=14usize).rev().find_map(|top| {
        (0..5)
            .map(|offset| best[top - offset])
            .collect::<Option<Vec<Card>>>()
    })
}

fn run_top(run: &[Card]) -> u8 {
    run[0].rank.value()
}

fn straight_flush(sorted: &[Card]) -> Option<HandValue> {
    let run = suited(sorted)
        .filter_map(|cards| find_run(&cards))
        .max_by_key(|run| run_top(run))?;
    let rank = if run_top(&run) == Rank::Ace.value() {
        HandRank::RoyalFlush
    } else {
        HandRank::StraightFlush
    };
    Some(HandValue::new(rank, run, Vec::new()))
}

fn four_of_a_kind(sorted: &[Card], groups: &[Vec<Card>]) -> Option<HandValue> {
    let quads = groups.iter().find(|g| g.len() == 4)?;
    let rest = sorted.iter().filter(|c| c.rank != quads[0].rank);
    Some(HandValue::new(
        HandRank::FourOfAKind,
        quads.clone(),
        kickers(1, rest),
    ))
}

fn full_house(groups: &[Vec<Card>]) -> Option<HandValue> {
    let trips = groups.iter().find(|g| g.len() >= 3)?;
    // a second set of trips can fill the pair role with its two best cards
    let pair = groups
        .iter()
        .find(|g| g[0].rank != trips[0].rank && g.len() >= 2)?;
    let mut cards: Vec<Card> = trips[..3].to_vec();
    cards.extend_from_slice(&pair[..2]);
    Some(HandValue::new(HandRank::FullHouse, cards, Vec::new()))
}

fn flush(sorted: &[Card]) -> Option<HandValue> {
    let cards = suited(sorted).next()?;
    Some(HandValue::new(
        HandRank::Flush,
        cards[..5].to_vec(),
        Vec::new(),
    ))
}

fn straight(sorted: &[Card]) -> Option<HandValue> {
    let run = find_run(sorted)?;
    Some(HandValue::new(HandRank::Straight, run, Vec::new()))
}

fn three_of_a_kind(sorted: &[Card], groups: &[Vec<Card>]) -> Option<HandValue> {
    let trips = groups.iter().find(|g| g.len() == 3)?;
    let rest = sorted.iter().filter(|c| c.rank != trips[0].rank);
    Some(HandValue::new(
        HandRank::ThreeOfAKind,
        trips.clone(),
        kickers(2, rest),
    ))
}

fn pairs(sorted: &[Card], groups: &[Vec<Card>]) -> Option<HandValue> {
    let mut pairs = groups.iter().filter(|g| g.len() == 2);
    let top = pairs.next()?;
    match pairs.next() {
        Some(second) => {
            let mut cards = top.clone();
            cards.extend_from_slice(second);
            let rest = sorted
                .iter()
                .filter(|c| c.rank != top[0].rank && c.rank != second[0].rank);
            Some(HandValue::new(HandRank::TwoPair, cards, kickers(1, rest)))
        }
        None => {
            let rest = sorted.iter().filter(|c| c.rank != top[0].rank);
            Some(HandValue::new(HandRank::Pair, top.clone(), kickers(3, rest)))
        }
    }
}

fn high_card(sorted: &[Card]) -> HandValue {
    HandValue::new(
        HandRank::HighCard,
        vec![sorted[0]],
        kickers(4, sorted[1..].iter()),
    )
}
