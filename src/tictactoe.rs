//! Tic-Tac-Toe as a [`GameState`].
//!
//! X moves first and is the maximizing player; O minimizes. Cells are
//! numbered 0-8 row by row, and legal actions are listed in that order.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::evaluator::Evaluator;
use crate::game::{GameState, Player};

/// One of the two marks a player puts on the board.
#[derive(Hash, Clone, Eq, PartialEq, Copy, Debug)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub const fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl From<Mark> for Player {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Player::Maximizing,
            Mark::O => Player::Minimizing,
        }
    }
}

// What is in a square of the board
#[derive(Hash, Clone, Eq, PartialEq, Copy, Debug)]
pub enum Square {
    X,
    O,
    Empty,
}

impl Square {
    pub fn to_char(self) -> char {
        match self {
            Square::X => 'X',
            Square::O => 'O',
            Square::Empty => '.',
        }
    }

    pub fn from_char(c: char) -> Option<Square> {
        match c {
            'X' | 'x' => Some(Square::X),
            'O' | 'o' => Some(Square::O),
            '.' | '-' | '_' => Some(Square::Empty),
            _ => None,
        }
    }
}

impl From<Mark> for Square {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Square::X,
            Mark::O => Square::O,
        }
    }
}

/// How a finished game ended.
#[derive(Clone, Copy, Eq, PartialEq, Debug)]
pub enum Outcome {
    Win(Mark),
    Draw,
}

pub type Board = [Square; 9];

/// Every line as `(start, step)`.
const THREE_IN_A_ROW: [(usize, usize); 8] = [
    (0, 1), // horizontal wins
    (3, 1),
    (6, 1),
    (0, 3), // vertical wins
    (1, 3),
    (2, 3),
    (0, 4), // diagonal wins
    (2, 2),
];

fn line(start: usize, step: usize) -> [usize; 3] {
    [start, start + step, start + 2 * step]
}

/// An immutable Tic-Tac-Toe position.
#[derive(Hash, Clone, Eq, PartialEq, Debug)]
pub struct TicTacToe {
    board: Board,
    to_move: Mark,
}

impl TicTacToe {
    /// The empty board, X to move.
    pub fn new() -> Self {
        TicTacToe {
            board: [Square::Empty; 9],
            to_move: Mark::X,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Indices of the empty cells, ascending.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.board
            .iter()
            .enumerate()
            .filter(|(_, square)| **square == Square::Empty)
            .map(|(i, _)| i)
    }

    fn place(&self, loc: usize) -> Self {
        let mut new_board = self.board;
        new_board[loc] = self.to_move.into();
        TicTacToe {
            board: new_board,
            to_move: self.to_move.opponent(),
        }
    }

    /// Plays the mover's mark on `loc`, checking that the move is legal.
    pub fn play(&self, loc: usize) -> Result<Self> {
        if self.outcome().is_some() {
            return Err(Error::GameOver);
        }
        match self.board.get(loc) {
            None => Err(Error::InvalidPosition { position: loc }),
            Some(Square::Empty) => Ok(self.place(loc)),
            Some(_) => Err(Error::IllegalMove { position: loc }),
        }
    }

    /// Returns `None` while the game is still in progress.
    pub fn outcome(&self) -> Option<Outcome> {
        for (start, step) in THREE_IN_A_ROW {
            let [a, b, c] = line(start, step);
            if self.board[a] == self.board[b] && self.board[a] == self.board[c] {
                match self.board[a] {
                    Square::X => return Some(Outcome::Win(Mark::X)),
                    Square::O => return Some(Outcome::Win(Mark::O)),
                    Square::Empty => (),
                }
            }
        }

        if self.board.iter().all(|s| s != &Square::Empty) {
            return Some(Outcome::Draw);
        }

        None
    }

    /// The board as nine characters, e.g. `"XO..X...."`. Parses back with
    /// [`str::parse`].
    pub fn encode(&self) -> String {
        self.board.iter().map(|s| s.to_char()).collect()
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TicTacToe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board: Vec<char> = self
            .board
            .iter()
            .map(|s| match s {
                Square::Empty => ' ',
                other => other.to_char(),
            })
            .collect();
        let division = "---------";
        writeln!(f, "{} | {} | {}", board[0], board[1], board[2])?;
        writeln!(f, "{division}")?;
        writeln!(f, "{} | {} | {}", board[3], board[4], board[5])?;
        writeln!(f, "{division}")?;
        writeln!(f, "{} | {} | {}", board[6], board[7], board[8])
    }
}

impl FromStr for TicTacToe {
    type Err = Error;

    /// Reads nine cells of `X`, `O` or `.` (also `-`, `_`) row by row.
    /// Whitespace and `|` are ignored. The mover is inferred from the piece
    /// counts.
    fn from_str(s: &str) -> Result<Self> {
        let cells: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        if cells.len() != 9 {
            return Err(Error::InvalidBoardLength {
                expected: 9,
                got: cells.len(),
                context: s.to_string(),
            });
        }

        let mut board = [Square::Empty; 9];
        for (position, character) in cells.into_iter().enumerate() {
            board[position] =
                Square::from_char(character).ok_or_else(|| Error::InvalidCellCharacter {
                    character,
                    position,
                    context: s.to_string(),
                })?;
        }

        let x_count = board.iter().filter(|s| **s == Square::X).count();
        let o_count = board.iter().filter(|s| **s == Square::O).count();
        let to_move = if x_count == o_count {
            Mark::X
        } else if x_count == o_count + 1 {
            Mark::O
        } else {
            return Err(Error::InvalidPieceCounts { x_count, o_count });
        };

        Ok(TicTacToe { board, to_move })
    }
}

impl GameState for TicTacToe {
    type Action = usize;

    fn turn(&self) -> Player {
        self.to_move.into()
    }

    fn legal_actions(&self) -> Vec<usize> {
        if self.outcome().is_some() {
            return Vec::new();
        }
        self.empty_cells().collect()
    }

    fn successor(&self, action: usize) -> Self {
        self.place(action)
    }

    fn is_terminal(&self) -> bool {
        self.outcome().is_some()
    }

    fn winner(&self) -> Option<Player> {
        match self.outcome() {
            Some(Outcome::Win(mark)) => Some(mark.into()),
            _ => None,
        }
    }
}

/// Scores a position by the lines each side can still complete.
///
/// A line holding only X marks adds 1 for one mark and 3 for two; lines
/// holding only O marks subtract the same. The sum is divided by 24 so the
/// result stays within `[-1, 1]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct OpenLines;

impl Evaluator<TicTacToe> for OpenLines {
    fn evaluate(&self, state: &TicTacToe) -> f32 {
        let weight = |marks: usize| if marks >= 2 { 3.0 } else { 1.0 };

        let score: f32 = THREE_IN_A_ROW
            .iter()
            .map(|&(start, step)| {
                let cells = line(start, step).map(|i| state.board[i]);
                let x = cells.iter().filter(|s| **s == Square::X).count();
                let o = cells.iter().filter(|s| **s == Square::O).count();
                match (x, o) {
                    (0, 0) => 0.0,
                    (x, 0) => weight(x),
                    (0, o) => -weight(o),
                    _ => 0.0,
                }
            })
            .sum();

        score / 24.0
    }
}
