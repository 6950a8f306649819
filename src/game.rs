//! Holds the collaborator contract every search strategy consumes.
//! To search a game, implement [`GameState`] for it.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

/// The value of a searched position.
///
/// Every evaluation is either [`Exact`](Evaluation::Exact) or [`Heuristic`](Evaluation::Heuristic).
///
/// - [`Exact`](Evaluation::Exact) values were derived from finished games only.
///
/// - [`Heuristic`](Evaluation::Heuristic) values depend, somewhere below them,
///   on an estimate taken at a depth cutoff.
///
/// Both carry a score from the maximizing player's perspective.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluation {
    Exact(f32),
    Heuristic(f32),
}

impl Evaluation {
    /// Builds an evaluation, choosing the variant from `exact`.
    pub const fn tagged(value: f32, exact: bool) -> Self {
        if exact {
            Self::Exact(value)
        } else {
            Self::Heuristic(value)
        }
    }

    /// Gets the value of the contents, ignoring the variant.
    pub fn val(&self) -> &f32 {
        match self {
            Self::Exact(t) | Self::Heuristic(t) => t,
        }
    }

    /// Like `Evaluation::val`, but consumes and gives ownership.
    pub fn take(self) -> f32 {
        match self {
            Self::Exact(t) | Self::Heuristic(t) => t,
        }
    }

    /// True if no heuristic estimate went into this value.
    pub const fn is_exact(&self) -> bool {
        matches!(self, Self::Exact(_))
    }
}

/// The two players of a zero-sum game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Maximizing,
    Minimizing,
}

impl Player {
    /// The opposite player.
    pub const fn flip(&self) -> Self {
        match self {
            Self::Maximizing => Self::Minimizing,
            Self::Minimizing => Self::Maximizing,
        }
    }

    /// This is `1` for the maximizer and `-1` for the minimizer.
    pub const fn sign(&self) -> f32 {
        match self {
            Self::Maximizing => 1.0,
            Self::Minimizing => -1.0,
        }
    }

    /// The score this player starts from before seeing any child.
    pub const fn worst(&self) -> f32 {
        match self {
            Self::Maximizing => f32::NEG_INFINITY,
            Self::Minimizing => f32::INFINITY,
        }
    }

    /// Whether this player strictly prefers `candidate` over `incumbent`.
    ///
    /// Strictness keeps the first of several equal values, which is what
    /// makes searches break ties in legal-action order.
    pub fn prefers(&self, candidate: f32, incumbent: f32) -> bool {
        match self {
            Self::Maximizing => candidate > incumbent,
            Self::Minimizing => candidate < incumbent,
        }
    }
}

/// A finite, fully observable, two-player zero-sum game.
///
/// Implementations must be immutable snapshots: [`GameState::successor`]
/// returns a fresh state and never touches `self`. Searches rely on this
/// to be callable from several threads at once.
///
/// To implement this trait, you must implement [`GameState::turn`],
/// [`GameState::legal_actions`], [`GameState::successor`],
/// [`GameState::is_terminal`] and [`GameState::winner`]. You can optionally
/// override [`GameState::utility`] for games whose outcomes are not just
/// win/loss/draw.
pub trait GameState: Sized + Clone {
    /// Identifies a single legal move, e.g. a board cell index.
    type Action: Copy + Eq + Debug;

    /// Returns the [`Player`] whose turn it is.
    fn turn(&self) -> Player;

    /// Returns every legal action, in the order searches visit them.
    ///
    /// The order decides ties: searches keep the first action that reaches
    /// the best value. Must be non-empty unless the state is terminal.
    fn legal_actions(&self) -> Vec<Self::Action>;

    /// Returns the state reached by playing `action`.
    ///
    /// `action` must be a member of [`GameState::legal_actions`]. Searches
    /// never pass anything else, so implementations need not check.
    fn successor(&self, action: Self::Action) -> Self;

    /// True iff the game is over: somebody won or no actions remain.
    fn is_terminal(&self) -> bool;

    /// The winner of a terminal state, `None` for a draw.
    ///
    /// Only meaningful when [`GameState::is_terminal`] holds.
    fn winner(&self) -> Option<Player>;

    /// The score of a terminal state from the maximizer's perspective.
    ///
    /// Defaults to `+1` for a maximizer win, `-1` for a minimizer win and
    /// `0` for a draw.
    fn utility(&self) -> f32 {
        self.winner().map_or(0.0, |p| p.sign())
    }
}
