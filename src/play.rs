//! Plays a game to completion between two strategies.

use tracing::debug;

use crate::error::Result;
use crate::game::{GameState, Player};
use crate::search::Strategy;

/// The moves of a finished game and where they led.
#[derive(Debug, Clone)]
pub struct GameRecord<G: GameState> {
    pub moves: Vec<G::Action>,
    pub final_state: G,
}

impl<G: GameState> GameRecord<G> {
    /// The winner, `None` for a draw or an abandoned game.
    pub fn winner(&self) -> Option<Player> {
        if self.final_state.is_terminal() {
            self.final_state.winner()
        } else {
            None
        }
    }
}

/// Plays from `start` until the game ends, asking `maximizer` and
/// `minimizer` for moves in turn.
///
/// Stops early if a strategy has no action to offer, which only happens
/// on a non-terminal state without legal actions.
pub fn play_out<G, X, O>(start: G, maximizer: &X, minimizer: &O) -> Result<GameRecord<G>>
where
    G: GameState,
    X: Strategy<G> + ?Sized,
    O: Strategy<G> + ?Sized,
{
    let mut state = start;
    let mut moves = Vec::new();

    while !state.is_terminal() {
        let player = state.turn();
        let chosen = match player {
            Player::Maximizing => maximizer.choose_action(&state)?,
            Player::Minimizing => minimizer.choose_action(&state)?,
        };
        let Some(action) = chosen else {
            debug!(ply = moves.len(), "no action available, abandoning game");
            break;
        };

        debug!(ply = moves.len(), ?player, ?action, "move");
        moves.push(action);
        state = state.successor(action);
    }

    Ok(GameRecord {
        moves,
        final_state: state,
    })
}
