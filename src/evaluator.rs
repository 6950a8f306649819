//! Heuristic evaluation consumed at depth cutoffs.

use crate::game::GameState;

/// A static estimate of a non-terminal state's value.
///
/// Scores are from the maximizing player's perspective and should sit inside
/// the utility range so they never outrank a real win or loss. Evaluators
/// must be total over non-terminal states and deterministic. Searches call
/// them only at cutoff nodes, never on terminal states.
///
/// Any `Fn(&G) -> f32` closure that is `Send + Sync` is an evaluator.
pub trait Evaluator<G: GameState>: Send + Sync {
    fn evaluate(&self, state: &G) -> f32;
}

impl<G, F> Evaluator<G> for F
where
    G: GameState,
    F: Fn(&G) -> f32 + Send + Sync,
{
    fn evaluate(&self, state: &G) -> f32 {
        self(state)
    }
}
