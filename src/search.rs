//! Pieces shared by the search strategies: the [`Strategy`] trait, the
//! [`SearchResult`] it returns, and terminal/cutoff handling.

use tracing::trace;

use crate::config::{MissingEvaluator, SearchConfig};
use crate::error::{Error, Result};
use crate::evaluator::Evaluator;
use crate::game::{Evaluation, GameState};

/// Outcome of one root search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<A> {
    /// Value of the root from the maximizer's perspective.
    pub evaluation: Evaluation,

    /// Move achieving `evaluation`. `None` at a leaf, at a chance node, or
    /// when the root is cut off.
    pub action: Option<A>,

    /// Entries into the recursive value function, root included.
    pub nodes: u64,
}

impl<A> SearchResult<A> {
    /// The root value, ignoring whether it is exact.
    pub fn value(&self) -> f32 {
        *self.evaluation.val()
    }
}

/// A search strategy over games of type `G`.
pub trait Strategy<G: GameState> {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Searches the tree below `state`.
    fn search(&self, state: &G) -> Result<SearchResult<G::Action>>;

    /// Picks the move to play in `state`.
    ///
    /// Falls back to the first legal action whenever the search did not
    /// record one, so this returns `Some` for every state that has a legal
    /// action.
    fn choose_action(&self, state: &G) -> Result<Option<G::Action>> {
        let result = self.search(state)?;
        Ok(result
            .action
            .or_else(|| state.legal_actions().first().copied()))
    }
}

/// What a search does at a node.
pub(crate) enum Expansion<A> {
    /// Stop here with this value.
    Leaf(Evaluation),
    /// Recurse into these actions, in order.
    Children(Vec<A>),
}

/// Terminal and depth-cutoff handling for one root search.
pub(crate) struct Cutoff<'a, G: GameState> {
    evaluator: Option<&'a dyn Evaluator<G>>,
    depth_limit: Option<usize>,
}

impl<'a, G: GameState> Cutoff<'a, G> {
    /// Fails fast if `config` asks for a depth limit it cannot evaluate.
    pub(crate) fn new(
        config: &SearchConfig,
        evaluator: Option<&'a dyn Evaluator<G>>,
    ) -> Result<Self> {
        if let (Some(depth_limit), None, MissingEvaluator::Fail) =
            (config.depth_limit, evaluator, config.missing_evaluator)
        {
            return Err(Error::MissingEvaluator { depth_limit });
        }

        Ok(Self {
            evaluator,
            depth_limit: config.depth_limit,
        })
    }

    /// Decides whether `state`, `depth` plies below the root, is a leaf.
    ///
    /// Terminal utility takes precedence over the depth limit. A
    /// non-terminal state without legal actions scores as a draw.
    pub(crate) fn expand(&self, state: &G, depth: usize) -> Expansion<G::Action> {
        if state.is_terminal() {
            return Expansion::Leaf(Evaluation::Exact(state.utility()));
        }

        if self.depth_limit.is_some_and(|limit| depth >= limit) {
            let value = self.evaluator.map_or(0.0, |e| e.evaluate(state));
            trace!(depth, value, "depth cutoff");
            return Expansion::Leaf(Evaluation::Heuristic(value));
        }

        let actions = state.legal_actions();
        if actions.is_empty() {
            trace!(depth, "no legal actions on a non-terminal state, scoring as draw");
            return Expansion::Leaf(Evaluation::Exact(0.0));
        }

        Expansion::Children(actions)
    }
}
