//! A hand-built game tree for exercising the searches on exact shapes.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use ttt_search::evaluator::Evaluator;
use ttt_search::game::{GameState, Player};
use ttt_search::tictactoe::TicTacToe;

#[derive(Debug)]
pub enum Node {
    /// A finished game worth this much to the maximizer.
    Leaf(f32),
    /// `player` picks one of the children. An empty list is a broken
    /// state: not terminal, but nothing to play.
    Turn(Player, Vec<Arc<Node>>),
}

#[derive(Debug, Clone)]
pub struct Tree(pub Arc<Node>);

pub fn leaf(value: f32) -> Tree {
    Tree(Arc::new(Node::Leaf(value)))
}

pub fn max(children: Vec<Tree>) -> Tree {
    Tree(Arc::new(Node::Turn(
        Player::Maximizing,
        children.into_iter().map(|t| t.0).collect(),
    )))
}

pub fn min(children: Vec<Tree>) -> Tree {
    Tree(Arc::new(Node::Turn(
        Player::Minimizing,
        children.into_iter().map(|t| t.0).collect(),
    )))
}

pub fn leaves(values: &[f32]) -> Vec<Tree> {
    values.iter().copied().map(leaf).collect()
}

impl GameState for Tree {
    type Action = usize;

    fn turn(&self) -> Player {
        match self.0.as_ref() {
            Node::Turn(player, _) => *player,
            Node::Leaf(_) => Player::Maximizing,
        }
    }

    fn legal_actions(&self) -> Vec<usize> {
        match self.0.as_ref() {
            Node::Turn(_, children) => (0..children.len()).collect(),
            Node::Leaf(_) => Vec::new(),
        }
    }

    fn successor(&self, action: usize) -> Self {
        match self.0.as_ref() {
            Node::Turn(_, children) => Tree(children[action].clone()),
            Node::Leaf(_) => self.clone(),
        }
    }

    fn is_terminal(&self) -> bool {
        matches!(self.0.as_ref(), Node::Leaf(_))
    }

    fn winner(&self) -> Option<Player> {
        match self.0.as_ref() {
            Node::Leaf(v) if *v > 0.0 => Some(Player::Maximizing),
            Node::Leaf(v) if *v < 0.0 => Some(Player::Minimizing),
            _ => None,
        }
    }

    fn utility(&self) -> f32 {
        match self.0.as_ref() {
            Node::Leaf(v) => *v,
            Node::Turn(..) => 0.0,
        }
    }
}

/// Records every state it is asked to evaluate.
#[derive(Clone, Default)]
pub struct Recorder {
    pub seen: Arc<Mutex<Vec<TicTacToe>>>,
}

impl Recorder {
    pub fn calls(&self) -> Vec<TicTacToe> {
        self.seen.lock().unwrap().clone()
    }
}

impl Evaluator<TicTacToe> for Recorder {
    fn evaluate(&self, state: &TicTacToe) -> f32 {
        self.seen.lock().unwrap().push(state.clone());
        0.25
    }
}
