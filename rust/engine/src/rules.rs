use crate::actions::{PlayType as A, PlayerAction};
use crate::errors::GameError;

/// Betting state as seen by the player about to act.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetContext {
    /// Player's remaining chip stack
    pub stack: u32,
    /// Chips the player already put in on this street
    pub committed_street: u32,
    /// Highest street total of any player
    pub street_high: u32,
    /// Current minimum raise increment (last raise size, or the big blind)
    pub min_raise: u32,
}

impl BetContext {
    pub fn to_call(&self) -> u32 {
        self.street_high.saturating_sub(self.committed_street)
    }

    pub fn min_raise_to(&self) -> u32 {
        self.street_high + self.min_raise
    }
}

/// An action checked against the betting rules, carrying the chips it moves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedAction {
    Fold,
    Check,
    /// Chips added to match the street high
    Call(u32),
    /// New street total and the chips added to reach it
    Raise { to: u32, added: u32 },
    /// Whole remaining stack
    AllIn(u32),
}

/// Validates a player action according to betting rules and stack size.
///
/// Converts a [`PlayerAction`] into a [`ValidatedAction`], enforcing the
/// minimum raise and converting short calls and raises to all-ins.
///
/// # Leniency
///
/// A check while facing a bet is played as a call, and a call with nothing
/// owed is played as a check. Neither is an error.
///
/// # Errors
///
/// - [`GameError::MissingRaiseAmount`] - a raise without a target amount
/// - [`GameError::InvalidRaise`] - a raise-to below `street_high + min_raise`
///   that the player could afford
///
/// # Examples
///
/// ```
/// use holdem_engine::actions::PlayerAction;
/// use holdem_engine::rules::{validate_action, BetContext, ValidatedAction};
///
/// let ctx = BetContext { stack: 1000, committed_street: 0, street_high: 50, min_raise: 50 };
/// assert_eq!(validate_action(&ctx, PlayerAction::call()), Ok(ValidatedAction::Call(50)));
///
/// // Short stack: the raise becomes an all-in
/// let short = BetContext { stack: 80, ..ctx };
/// assert_eq!(validate_action(&short, PlayerAction::raise_to(200)), Ok(ValidatedAction::AllIn(80)));
/// ```
///
/// ```
/// use holdem_engine::actions::PlayerAction;
/// use holdem_engine::errors::GameError;
/// use holdem_engine::rules::{validate_action, BetContext};
///
/// let ctx = BetContext { stack: 1000, committed_street: 0, street_high: 50, min_raise: 50 };
/// let result = validate_action(&ctx, PlayerAction::raise_to(60));
/// assert_eq!(result, Err(GameError::InvalidRaise { amount: 60, minimum: 100 }));
/// ```
pub fn validate_action(
    ctx: &BetContext,
    action: PlayerAction,
) -> Result<ValidatedAction, GameError> {
    let to_call = ctx.to_call();
    match action.play {
        A::Fold => Ok(ValidatedAction::Fold),
        A::Check | A::Call => {
            if to_call == 0 {
                Ok(ValidatedAction::Check)
            } else if to_call >= ctx.stack {
                Ok(ValidatedAction::AllIn(ctx.stack))
            } else {
                Ok(ValidatedAction::Call(to_call))
            }
        }
        A::Raise => {
            let amount = action.amount.ok_or(GameError::MissingRaiseAmount)?;
            let reachable = ctx.committed_street + ctx.stack;
            if amount >= reachable {
                Ok(ValidatedAction::AllIn(ctx.stack))
            } else if amount < ctx.min_raise_to() {
                Err(GameError::InvalidRaise {
                    amount,
                    minimum: ctx.min_raise_to(),
                })
            } else {
                Ok(ValidatedAction::Raise {
                    to: amount,
                    added: amount - ctx.committed_street,
                })
            }
        }
        A::AllIn => Ok(ValidatedAction::AllIn(ctx.stack)),
    }
}
