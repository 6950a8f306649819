//! This module's primary struct is [`Expectimax`], which searches against
//! an opponent that picks uniformly at random.
use tracing::debug;

use crate::config::SearchConfig;
use crate::error::Result;
use crate::evaluator::Evaluator;
use crate::game::{Evaluation, GameState, Player};
use crate::search::{Cutoff, Expansion, SearchResult, Strategy};

/// Expectimax search.
///
/// Maximizer nodes behave as in minimax. Minimizer nodes are chance nodes:
/// their value is the plain mean over all legal successors, and they never
/// select an action. Searching a root where the minimizer is to move
/// therefore yields `action: None`; [`Strategy::choose_action`] still falls
/// back to the first legal action.
pub struct Expectimax<G: GameState> {
    config: SearchConfig,
    evaluator: Option<Box<dyn Evaluator<G>>>,
}

impl<G: GameState> Expectimax<G> {
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

impl<G: GameState> Default for Expectimax<G> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

fn expectimax<G: GameState>(
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

    let mut exact = true;

    match state.turn() {
        Player::Maximizing => {
            let mut best_value = Player::Maximizing.worst();
            let mut best_action = None;
            for action in actions {
                let (child, _) = expectimax(&state.successor(action), depth + 1, cutoff, nodes);
                exact &= child.is_exact();
                if Player::Maximizing.prefers(*child.val(), best_value) {
                    best_value = child.take();
                    best_action = Some(action);
                }
            }
            (Evaluation::tagged(best_value, exact), best_action)
        }
        Player::Minimizing => {
            let count = actions.len();
            let mut total = 0.0;
            for action in actions {
                let (child, _) = expectimax(&state.successor(action), depth + 1, cutoff, nodes);
                exact &= child.is_exact();
                total += child.take();
            }
            let mean = if count == 0 { 0.0 } else { total / count as f32 };
            (Evaluation::tagged(mean, exact), None)
        }
    }
}

impl<G: GameState> Strategy<G> for Expectimax<G> {
    fn name(&self) -> &'static str {
        "expectimax"
    }

    fn search(&self, state: &G) -> Result<SearchResult<G::Action>> {
        let cutoff = Cutoff::new(&self.config, self.evaluator.as_deref())?;
        let mut nodes = 0;
        let (evaluation, action) = expectimax(state, 0, &cutoff, &mut nodes);

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
