//! Whole-game checks: enumerating reachable states and comparing
//! [`Minimax`] against [`AlphaBeta`] on every one of them.

use std::hash::Hash;

use rayon::prelude::*;
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::alphabeta::AlphaBeta;
use crate::error::Result;
use crate::game::GameState;
use crate::minimax::Minimax;
use crate::search::Strategy;

/// Every state reachable from `root`, root included, each listed once in
/// depth-first discovery order.
pub fn reachable_states<G>(root: &G) -> Vec<G>
where
    G: GameState + Hash + Eq,
{
    let mut seen: FxHashSet<G> = FxHashSet::default();
    let mut states = Vec::new();
    let mut stack = vec![root.clone()];

    while let Some(state) = stack.pop() {
        if !seen.insert(state.clone()) {
            continue;
        }
        if !state.is_terminal() {
            for action in state.legal_actions().into_iter().rev() {
                stack.push(state.successor(action));
            }
        }
        states.push(state);
    }

    states
}

/// Totals from running both searches on every non-terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PruningReport {
    pub states: usize,
    pub value_mismatches: usize,
    pub action_mismatches: usize,
    pub minimax_nodes: u64,
    pub alphabeta_nodes: u64,
    /// States where alpha-beta visited strictly fewer nodes.
    pub pruned_states: usize,
    /// States where alpha-beta visited more nodes. Should stay zero.
    pub regressions: usize,
}

impl PruningReport {
    /// Same root values everywhere, and never more work.
    pub fn is_consistent(&self) -> bool {
        self.value_mismatches == 0 && self.regressions == 0
    }

    fn merge(self, other: Self) -> Self {
        Self {
            states: self.states + other.states,
            value_mismatches: self.value_mismatches + other.value_mismatches,
            action_mismatches: self.action_mismatches + other.action_mismatches,
            minimax_nodes: self.minimax_nodes + other.minimax_nodes,
            alphabeta_nodes: self.alphabeta_nodes + other.alphabeta_nodes,
            pruned_states: self.pruned_states + other.pruned_states,
            regressions: self.regressions + other.regressions,
        }
    }
}

/// Runs exhaustive [`Minimax`] and [`AlphaBeta`] on every non-terminal state
/// reachable from `root`, in parallel.
pub fn compare_pruning<G>(root: &G) -> Result<PruningReport>
where
    G: GameState + Hash + Eq + Send + Sync,
{
    let states: Vec<G> = reachable_states(root)
        .into_iter()
        .filter(|s| !s.is_terminal())
        .collect();
    debug!(states = states.len(), "comparing minimax and alpha-beta");

    let report = states
        .par_iter()
        .map(|state| -> Result<PruningReport> {
            let full = Minimax::default().search(state)?;
            let pruned = AlphaBeta::default().search(state)?;
            Ok(PruningReport {
                states: 1,
                value_mismatches: usize::from(full.value() != pruned.value()),
                action_mismatches: usize::from(full.action != pruned.action),
                minimax_nodes: full.nodes,
                alphabeta_nodes: pruned.nodes,
                pruned_states: usize::from(pruned.nodes < full.nodes),
                regressions: usize::from(pruned.nodes > full.nodes),
            })
        })
        .try_reduce(PruningReport::default, |a, b| Ok(a.merge(b)))?;

    debug!(?report, "comparison finished");
    Ok(report)
}
