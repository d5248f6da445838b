use std::collections::BTreeMap;

use holdem_ai::{create_ai, AiError, AVAILABLE_AIS};
use holdem_engine::actions::{ActRequest, OpponentSummary, PlayType, PlayerAction, Street};
use holdem_engine::cards::parse_cards;
use holdem_engine::config::TableConfig;
use holdem_engine::engine::Engine;
use holdem_engine::errors::GameError;
use holdem_engine::player::Player;

/// Preflop spot: blinds 1/2, facing the big blind with 100 chips behind.
fn request() -> ActRequest {
    let opponent = Player::new("villain", 0);
    let mut opponents = BTreeMap::new();
    opponents.insert(
        opponent.id(),
        OpponentSummary {
            seat: 1,
            chips: 90,
            committed_street: 2,
            committed_hand: 2,
            folded: false,
        },
    );
    ActRequest {
        player_id: Player::new("hero", 0).id(),
        hole_cards: parse_cards("7c 2d").unwrap(),
        community_cards: Vec::new(),
        street: Street::Preflop,
        to_call: 2,
        min_raise: 2,
        min_raise_to: 4,
        any_bet_this_street: true,
        pot: 3,
        committed_street: 0,
        committed_hand: 0,
        stack: 100,
        active_players: 3,
        seat: 0,
        dealer_seat: 0,
        small_blind: 1,
        big_blind: 2,
        opponents,
    }
}

fn act(name: &str, req: &ActRequest) -> PlayerAction {
    create_ai(name, 7).unwrap().act(req)
}

#[test]
fn registry_builds_every_listed_strategy() {
    for name in AVAILABLE_AIS {
        let ai = create_ai(name, 1).unwrap();
        assert_eq!(ai.name(), *name);
    }
}

#[test]
fn registry_rejects_unknown_names() {
    let err = create_ai("telepath", 0).err().unwrap();
    assert_eq!(err, AiError::UnknownStrategy("telepath".to_string()));
    assert!(err.to_string().contains("check-or-call"));
}

#[test]
fn fixed_rule_strategies() {
    let req = request();
    assert_eq!(act("fold", &req), PlayerAction::fold());
    assert_eq!(act("check-or-fold", &req), PlayerAction::fold());
    assert_eq!(act("check-or-call", &req), PlayerAction::call());
    assert_eq!(act("all-in", &req), PlayerAction::all_in());

    let free = ActRequest { to_call: 0, ..request() };
    assert_eq!(act("check-or-fold", &free), PlayerAction::check());
    assert_eq!(act("check-or-call", &free), PlayerAction::check());
}

#[test]
fn bully_shoves_only_as_chip_leader() {
    assert_eq!(act("bully", &request()), PlayerAction::all_in());
    let short = ActRequest { stack: 92, ..request() };
    assert_eq!(act("bully", &short), PlayerAction::fold());
}

#[test]
fn naive_opens_preflop_and_respects_pot_odds() {
    let option = ActRequest { to_call: 0, ..request() };
    assert_eq!(act("naive", &option), PlayerAction::raise_to(4));

    let flop = ActRequest {
        to_call: 0,
        street: Street::Flop,
        ..request()
    };
    assert_eq!(act("naive", &flop), PlayerAction::check());

    let cheap = ActRequest { to_call: 2, pot: 8, ..request() };
    assert_eq!(act("naive", &cheap), PlayerAction::call());
    assert_eq!(act("naive", &request()), PlayerAction::fold());
}

#[test]
fn fiscal_calls_up_to_a_tenth_of_stack() {
    assert_eq!(act("fiscal", &request()), PlayerAction::call());
    let pricey = ActRequest { to_call: 11, ..request() };
    assert_eq!(act("fiscal", &pricey), PlayerAction::fold());
}

#[test]
fn position_player_bets_short_handed() {
    let free = ActRequest { to_call: 0, ..request() };
    assert_eq!(act("position", &free), PlayerAction::raise_to(4));
    assert_eq!(act("position", &request()), PlayerAction::call());

    let crowded = ActRequest { active_players: 6, ..request() };
    assert_eq!(act("position", &crowded), PlayerAction::fold());
}

#[test]
fn pair_king_raises_pairs_and_limps_junk() {
    let pocket = ActRequest {
        hole_cards: parse_cards("Kc Kd").unwrap(),
        ..request()
    };
    assert_eq!(act("pair-king", &pocket), PlayerAction::raise_to(5));
    assert_eq!(act("pair-king", &request()), PlayerAction::call());

    let flop_miss = ActRequest {
        street: Street::Flop,
        community_cards: parse_cards("Ah 9s 4c").unwrap(),
        ..request()
    };
    assert_eq!(act("pair-king", &flop_miss), PlayerAction::fold());
}

#[test]
fn random_strategies_only_make_legal_raises() {
    let req = request();
    for name in ["random", "weighted-random"] {
        let mut ai = create_ai(name, 99).unwrap();
        for _ in 0..500 {
            let action = ai.act(&req);
            if action.play == PlayType::Raise {
                let to = action.amount.unwrap();
                assert!(to >= req.min_raise_to && to < req.stack, "{name} raised to {to}");
            }
            if action.play == PlayType::Check {
                panic!("{name} checked while facing a bet");
            }
        }
    }
}

#[test]
fn coin_flip_only_folds_or_shoves() {
    let mut ai = create_ai("coin-flip", 5).unwrap();
    let plays: Vec<PlayType> = (0..100).map(|_| ai.act(&request()).play).collect();
    assert!(plays.iter().all(|p| matches!(p, PlayType::Fold | PlayType::AllIn)));
    assert!(plays.contains(&PlayType::Fold));
    assert!(plays.contains(&PlayType::AllIn));
}

#[test]
fn same_seed_same_decisions() {
    let mut a = create_ai("random", 3).unwrap();
    let mut b = create_ai("random", 3).unwrap();
    for _ in 0..50 {
        assert_eq!(a.act(&request()), b.act(&request()));
    }
}

#[test]
fn every_strategy_survives_a_tournament() {
    let config = TableConfig {
        small_blind: 5,
        big_blind: 10,
        seed: Some(2024),
        ..TableConfig::default()
    };
    for names in AVAILABLE_AIS.chunks(7) {
        let mut engine = Engine::new(config).unwrap();
        for (i, name) in names.iter().enumerate() {
            let ai = create_ai(name, i as u64).unwrap();
            engine.add_player(Player::new(*name, 300), ai).unwrap();
        }
        let total = 300 * names.len() as u32;
        for _ in 0..500 {
            match engine.play_hand() {
                Ok(_) => assert_eq!(engine.total_chips(), total),
                Err(GameError::NotEnoughPlayers) => break,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }
        assert_eq!(engine.total_chips(), total);
    }
}

#[test]
fn pot_odds_calls_expensive_prices_only() {
    let free = ActRequest { to_call: 0, ..request() };
    assert_eq!(act("pot-odds", &free), PlayerAction::check());

    // 2 to win 3: price 2/5
    assert_eq!(act("pot-odds", &request()), PlayerAction::call());

    // 2 to win 30: price 2/32
    let cheap = ActRequest { pot: 30, ..request() };
    assert_eq!(act("pot-odds", &cheap), PlayerAction::fold());

    // exactly a quarter is not enough
    let quarter = ActRequest { to_call: 2, pot: 6, ..request() };
    assert_eq!(act("pot-odds", &quarter), PlayerAction::fold());
}
