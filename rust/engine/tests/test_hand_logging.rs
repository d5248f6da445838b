use std::fs;

use holdem_engine::actions::{ActRequest, PlayType, PlayerAction, Street};
use holdem_engine::cards::parse_cards;
use holdem_engine::config::TableConfig;
use holdem_engine::engine::Engine;
use holdem_engine::logger::{format_hand_id, ActionRecord, HandLogger, HandRecord};
use holdem_engine::player::Player;
use holdem_engine::strategy::Strategy;
use uuid::Uuid;

struct Caller;

impl Strategy for Caller {
    fn act(&mut self, _req: &ActRequest) -> PlayerAction {
        PlayerAction::call()
    }
    fn name(&self) -> &str {
        "caller"
    }
}

fn record() -> HandRecord {
    HandRecord {
        hand_id: "20250102-000001".to_string(),
        seed: Some(1),
        actions: vec![ActionRecord {
            player_id: Uuid::new_v4(),
            street: Street::Preflop,
            action: PlayerAction::check(),
        }],
        board: parse_cards("Ac Kd 7h").unwrap(),
        pots: Vec::new(),
        payouts: Vec::new(),
        ts: None,
        showdown: None,
    }
}

#[test]
fn writes_jsonl_with_lf_only() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logs").join("hands.jsonl");
    let mut logger = HandLogger::create(&path).expect("create logger");
    logger.write(&record()).expect("write");
    logger.write(&record()).expect("write");

    let text = fs::read_to_string(&path).expect("read file");
    assert!(text.ends_with('\n'));
    assert!(!text.contains('\r'));
    assert_eq!(text.lines().count(), 2);

    let back: HandRecord = serde_json::from_str(text.lines().next().unwrap()).unwrap();
    assert!(back.ts.is_some());
    assert_eq!(back.board, record().board);
}

#[test]
fn hand_ids_are_sequential() {
    let mut logger = HandLogger::with_seq_for_test("20250102");
    assert_eq!(logger.next_id(), "20250102-000001");
    assert_eq!(logger.next_id(), "20250102-000002");
    assert_eq!(format_hand_id("19991231", 42), "19991231-000042");
}

#[test]
fn record_from_showdown_result() {
    let config = TableConfig {
        seed: Some(3),
        ..TableConfig::default()
    };
    let mut engine = Engine::new(config).unwrap();
    for name in ["a", "b"] {
        engine
            .add_player(Player::new(name, 100), Box::new(Caller))
            .unwrap();
    }
    let result = engine.play_hand().unwrap();
    let rec = HandRecord::from_result(
        "20250102-000001".to_string(),
        Some(engine.seed()),
        engine.history(),
        &result,
    );

    assert_eq!(rec.board.len(), 5);
    assert_eq!(rec.actions.len(), engine.history().len());
    assert_eq!(rec.actions[0].street, Street::Preflop);
    assert_eq!(rec.actions[0].action.play, PlayType::Call);
    let showdown = rec.showdown.expect("callers always reach showdown");
    assert_eq!(showdown.winners, result.winners);
    assert_eq!(showdown.hands.len(), 2);
    assert_eq!(rec.payouts.iter().map(|(_, a)| a).sum::<u32>(), 4);
}
