use crate::actions::{ActRequest, PlayerAction};

/// Decision maker for one seated player.
///
/// The engine calls [`Strategy::act`] whenever the player is due to act and
/// applies the returned action after validating it. A strategy only ever sees
/// the snapshot in the request, never the engine itself.
pub trait Strategy: Send {
    fn act(&mut self, request: &ActRequest) -> PlayerAction;

    fn name(&self) -> &str;
}
