use holdem_engine::actions::{PlayType, PlayerAction};
use holdem_engine::errors::GameError;
use holdem_engine::rules::{validate_action, BetContext, ValidatedAction as V};

fn facing_bet() -> BetContext {
    BetContext {
        stack: 1000,
        committed_street: 0,
        street_high: 50,
        min_raise: 50,
    }
}

fn unopened() -> BetContext {
    BetContext {
        stack: 1000,
        committed_street: 0,
        street_high: 0,
        min_raise: 2,
    }
}

#[test]
fn fold_is_always_legal() {
    assert_eq!(validate_action(&facing_bet(), PlayerAction::fold()), Ok(V::Fold));
}

#[test]
fn check_facing_bet_becomes_call() {
    assert_eq!(
        validate_action(&facing_bet(), PlayerAction::check()),
        Ok(V::Call(50))
    );
}

#[test]
fn call_with_nothing_owed_becomes_check() {
    assert_eq!(validate_action(&unopened(), PlayerAction::call()), Ok(V::Check));
}

#[test]
fn call_for_whole_stack_is_all_in() {
    let ctx = BetContext {
        stack: 30,
        ..facing_bet()
    };
    assert_eq!(validate_action(&ctx, PlayerAction::call()), Ok(V::AllIn(30)));
}

#[test]
fn call_accounts_for_chips_already_in() {
    let ctx = BetContext {
        committed_street: 20,
        ..facing_bet()
    };
    assert_eq!(validate_action(&ctx, PlayerAction::call()), Ok(V::Call(30)));
}

#[test]
fn minimum_raise_is_accepted() {
    assert_eq!(
        validate_action(&facing_bet(), PlayerAction::raise_to(100)),
        Ok(V::Raise { to: 100, added: 100 })
    );
}

#[test]
fn raise_below_minimum_is_rejected() {
    assert_eq!(
        validate_action(&facing_bet(), PlayerAction::raise_to(99)),
        Err(GameError::InvalidRaise {
            amount: 99,
            minimum: 100
        })
    );
}

#[test]
fn raise_without_amount_is_rejected() {
    let action = PlayerAction::new(PlayType::Raise, None);
    assert_eq!(
        validate_action(&facing_bet(), action),
        Err(GameError::MissingRaiseAmount)
    );
}

#[test]
fn raise_beyond_stack_is_all_in() {
    let ctx = BetContext {
        stack: 80,
        committed_street: 10,
        ..facing_bet()
    };
    assert_eq!(
        validate_action(&ctx, PlayerAction::raise_to(90)),
        Ok(V::AllIn(80))
    );
    assert_eq!(
        validate_action(&ctx, PlayerAction::raise_to(500)),
        Ok(V::AllIn(80))
    );
}

#[test]
fn opening_bet_needs_the_big_blind() {
    assert_eq!(
        validate_action(&unopened(), PlayerAction::raise_to(2)),
        Ok(V::Raise { to: 2, added: 2 })
    );
    assert!(validate_action(&unopened(), PlayerAction::raise_to(1)).is_err());
}

#[test]
fn all_in_moves_whole_stack() {
    assert_eq!(
        validate_action(&facing_bet(), PlayerAction::all_in()),
        Ok(V::AllIn(1000))
    );
}
