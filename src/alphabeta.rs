//! This module's primary struct is [`AlphaBeta`],
//! which runs minimax search with alpha-beta pruning.
use tracing::debug;

use crate::config::SearchConfig;
use crate::error::Result;
use crate::evaluator::Evaluator;
use crate::game::{Evaluation, GameState, Player};
use crate::search::{Cutoff, Expansion, SearchResult, Strategy};

/// Minimax with alpha-beta pruning.
///
/// Each node receives the `alpha` (best value the maximizer can already
/// guarantee) and `beta` (best value the minimizer can already guarantee)
/// of its parent and narrows its own copy as children come back. Once
/// `alpha >= beta` the remaining children are skipped.
///
/// The root value always equals [`crate::minimax::Minimax`]'s, and the node
/// count never exceeds it. Below the root a pruned child reports only a
/// bound, so the actions recorded at inner nodes can differ from minimax's
/// when several share the optimal value. The root action is still the
/// first best one in legal order; `survey::compare_pruning` counts any
/// disagreement instead of hiding it.
pub struct AlphaBeta<G: GameState> {
    config: SearchConfig,
    evaluator: Option<Box<dyn Evaluator<G>>>,
}

impl<G: GameState> AlphaBeta<G> {
    /// Create a searcher with no evaluator.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            evaluator: None,
        }
    }

    /// Use `evaluator` to score cutoff nodes.
    pub fn with_evaluator(mut self, evaluator: impl Evaluator<G> + 'static) -> Self {
        self.evaluator = Some(Box::new(evaluator));
        self
    }

    /// Stop expanding `depth_limit` plies below the root.
    pub fn with_depth_limit(mut self, depth_limit: usize) -> Self {
        self.config.depth_limit = Some(depth_limit);
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

impl<G: GameState> Default for AlphaBeta<G> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

fn alphabeta<G: GameState>(
    state: &G,
    depth: usize,
    mut alpha: f32,
    mut beta: f32,
    cutoff: &Cutoff<G>,
    nodes: &mut u64,
) -> (Evaluation, Option<G::Action>) {
    *nodes += 1;

    let actions = match cutoff.expand(state, depth) {
        Expansion::Leaf(evaluation) => return (evaluation, None),
        Expansion::Children(actions) => actions,
    };

    let player = state.turn();
    let mut best_value = player.worst();
    let mut best_action = None;
    let mut exact = true;

    for action in actions {
        let (child, _) = alphabeta(
            &state.successor(action),
            depth + 1,
            alpha,
            beta,
            cutoff,
            nodes,
        );
        exact &= child.is_exact();
        if player.prefers(*child.val(), best_value) {
            best_value = child.take();
            best_action = Some(action);
        }

        match player {
            Player::Maximizing => alpha = alpha.max(best_value),
            Player::Minimizing => beta = beta.min(best_value),
        }
        if alpha >= beta {
            break;
        }
    }

    (Evaluation::tagged(best_value, exact), best_action)
}

impl<G: GameState> Strategy<G> for AlphaBeta<G> {
    fn name(&self) -> &'static str {
        "alphabeta"
    }

    fn search(&self, state: &G) -> Result<SearchResult<G::Action>> {
        let cutoff = Cutoff::new(&self.config, self.evaluator.as_deref())?;
        let mut nodes = 0;
        let (evaluation, action) = alphabeta(
            state,
            0,
            f32::NEG_INFINITY,
            f32::INFINITY,
            &cutoff,
            &mut nodes,
        );

        debug!(
            strategy = self.name(),
            value = evaluation.val(),
            exact = evaluation.is_exact(),
            ?action,
            nodes,
            "search finished"
        );

        Ok(SearchResult {
            evaluation,
            action,
            nodes,
        })
    }
}
