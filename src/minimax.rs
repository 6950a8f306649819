//! This module's primary struct is [`Minimax`],
//! which runs exhaustive minimax search on a game.
use tracing::debug;

use crate::config::SearchConfig;
use crate::error::Result;
use crate::evaluator::Evaluator;
use crate::game::{Evaluation, GameState};
use crate::search::{Cutoff, Expansion, SearchResult, Strategy};

/// Plain minimax with no pruning.
///
/// Every successor of every expanded node is visited. The maximizer takes
/// the largest child value, the minimizer the smallest, and ties go to the
/// first action in [`GameState::legal_actions`] order.
///
/// Searches run to the end of the game unless the [`SearchConfig`] sets a
/// depth limit, in which case non-terminal nodes at the limit are scored by
/// the evaluator supplied with [`Minimax::with_evaluator`].
pub struct Minimax<G: GameState> {
    config: SearchConfig,
    evaluator: Option<Box<dyn Evaluator<G>>>,
}

impl<G: GameState> Minimax<G> {
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

impl<G: GameState> Default for Minimax<G> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

fn minimax<G: GameState>(
    state: &G,
    depth: usize,
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
        let (child, _) = minimax(&state.successor(action), depth + 1, cutoff, nodes);
        exact &= child.is_exact();
        if player.prefers(*child.val(), best_value) {
            best_value = child.take();
            best_action = Some(action);
        }
    }

    (Evaluation::tagged(best_value, exact), best_action)
}

impl<G: GameState> Strategy<G> for Minimax<G> {
    fn name(&self) -> &'static str {
        "minimax"
    }

    fn search(&self, state: &G) -> Result<SearchResult<G::Action>> {
        let cutoff = Cutoff::new(&self.config, self.evaluator.as_deref())?;
        let mut nodes = 0;
        let (evaluation, action) = minimax(state, 0, &cutoff, &mut nodes);

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
