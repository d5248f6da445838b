use std::io::Write;
use std::sync::{Arc, Mutex};

use holdem_engine::actions::{ActRequest, PlayType, PlayerAction};
use holdem_engine::config::TableConfig;
use holdem_engine::engine::Engine;
use holdem_engine::player::{Player, PlayerId};
use holdem_engine::strategy::Strategy;
use tracing_subscriber::fmt;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

struct Idle;

impl Strategy for Idle {
    fn act(&mut self, _req: &ActRequest) -> PlayerAction {
        PlayerAction::fold()
    }
    fn name(&self) -> &str {
        "idle"
    }
}

fn engine() -> (Engine, Vec<PlayerId>) {
    let mut engine = Engine::new(TableConfig {
        seed: Some(1),
        ..TableConfig::default()
    })
    .unwrap();
    let mut ids = Vec::new();
    for name in ["a", "b", "c"] {
        let p = Player::new(name, 100);
        ids.push(p.id());
        engine.add_player(p, Box::new(Idle)).unwrap();
    }
    (engine, ids)
}

#[test]
fn check_facing_bet_emits_warning() {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let (mut engine, ids) = engine();
        engine.next_hand().unwrap();
        engine.apply_move(ids[2], PlayType::Check, None).unwrap();
    });

    let text = captured.text();
    assert!(text.contains("WARN"), "{text}");
    assert!(text.contains("check while facing a bet played as a call"));
}

#[test]
fn abandoned_hand_refund_is_logged() {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let (mut engine, _) = engine();
        engine.next_hand().unwrap();
        engine.next_hand().unwrap();
        assert_eq!(engine.total_chips(), 300);
    });

    assert!(captured.text().contains("contributions refunded"));
}
