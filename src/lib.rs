//! Adversarial game-tree search for Tic-Tac-Toe: [Minimax], [Alpha-Beta] and
//! [Expectimax].
//!
//! Each strategy is a [`search::Strategy`] over any type implementing
//! [`game::GameState`]; the crate ships one, [`tictactoe::TicTacToe`].
//! Searches are plain recursive tree walks with no shared mutable state, so
//! independent searches may run on different threads.
//!
//! ```
//! use ttt_search::minimax::Minimax;
//! use ttt_search::search::Strategy;
//! use ttt_search::tictactoe::TicTacToe;
//!
//! let root: TicTacToe = "XX.OO....".parse().unwrap();
//! let result = Minimax::default().search(&root).unwrap();
//! assert_eq!(result.action, Some(2));
//! assert_eq!(result.value(), 1.0);
//! ```
//!
//! [Minimax]: minimax::Minimax
//! [Alpha-Beta]: alphabeta::AlphaBeta
//! [Expectimax]: expectimax::Expectimax

pub mod alphabeta;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod expectimax;
pub mod game;
pub mod minimax;
pub mod play;
pub mod search;
pub mod survey;
pub mod tictactoe;

pub use error::{Error, Result};
