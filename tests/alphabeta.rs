mod common;

use common::{leaves, max, min, Recorder};
use ttt_search::alphabeta::AlphaBeta;
use ttt_search::config::{MissingEvaluator, SearchConfig};
use ttt_search::error::Error;
use ttt_search::game::{Evaluation, GameState};
use ttt_search::minimax::Minimax;
use ttt_search::search::Strategy;
use ttt_search::tictactoe::{OpenLines, TicTacToe};

#[test]
fn test_prunes_after_beta_cutoff() {
    let root = max(vec![
        min(leaves(&[3.0, 12.0, 8.0])),
        min(leaves(&[2.0, 4.0, 6.0])),
        min(leaves(&[14.0, 5.0, 2.0])),
    ]);
    let full = Minimax::default().search(&root).unwrap();
    let pruned = AlphaBeta::default().search(&root).unwrap();

    assert_eq!(pruned.evaluation, full.evaluation);
    assert_eq!(pruned.action, Some(0));
    // The second minimizer stops after its first leaf.
    assert_eq!(full.nodes, 13);
    assert_eq!(pruned.nodes, 11);
}

#[test]
fn test_prunes_after_alpha_cutoff() {
    let root = min(vec![max(leaves(&[3.0, 5.0])), max(leaves(&[6.0, 1.0, 2.0]))]);
    let full = Minimax::default().search(&root).unwrap();
    let pruned = AlphaBeta::default().search(&root).unwrap();

    assert_eq!(pruned.evaluation, Evaluation::Exact(5.0));
    assert_eq!(pruned.action, Some(0));
    assert_eq!(full.nodes, 8);
    assert_eq!(pruned.nodes, 6);
}

#[test]
fn test_empty_board_matches_minimax_with_less_work() {
    let root = TicTacToe::new();
    let full = Minimax::default().search(&root).unwrap();
    let pruned = AlphaBeta::default().search(&root).unwrap();

    assert_eq!(pruned.evaluation, Evaluation::Exact(0.0));
    assert_eq!(pruned.value(), full.value());
    assert_eq!(pruned.action, Some(0));
    assert_eq!(pruned.nodes, 18_297);
    assert!(pruned.nodes < full.nodes);
}

#[test]
fn test_known_positions() {
    let cases = [
        ("X........", 0.0, 4, 59_705, 2_338),
        ("XO.......", 1.0, 3, 8_232, 749),
        ("XX.OO....", 1.0, 2, 157, 36),
    ];
    for (board, value, action, full_nodes, pruned_nodes) in cases {
        let root: TicTacToe = board.parse().unwrap();
        let full = Minimax::default().search(&root).unwrap();
        let pruned = AlphaBeta::default().search(&root).unwrap();

        assert_eq!(full.value(), value, "{board}");
        assert_eq!(pruned.value(), value, "{board}");
        assert_eq!(pruned.action, Some(action), "{board}");
        assert_eq!(full.nodes, full_nodes, "{board}");
        assert_eq!(pruned.nodes, pruned_nodes, "{board}");
    }
}

#[test]
fn test_depth_limit_never_evaluates_terminals() {
    let root: TicTacToe = "XX.OO....".parse().unwrap();
    let recorder = Recorder::default();
    let alphabeta = AlphaBeta::default()
        .with_depth_limit(1)
        .with_evaluator(recorder.clone());

    let result = alphabeta.search(&root).unwrap();

    let calls = recorder.calls();
    assert_eq!(calls.len(), 4);
    assert!(calls.iter().all(|s| !s.is_terminal()));
    assert_eq!(result.action, Some(2));
    assert_eq!(result.evaluation, Evaluation::Heuristic(1.0));
}

#[test]
fn test_depth_limited_values_match_minimax() {
    for board in ["", "X...O....", "XO..X....", "X.O.X..O."] {
        let root: TicTacToe = if board.is_empty() {
            TicTacToe::new()
        } else {
            board.parse().unwrap()
        };
        for depth in 1..=3 {
            let full = Minimax::default()
                .with_depth_limit(depth)
                .with_evaluator(OpenLines)
                .search(&root)
                .unwrap();
            let pruned = AlphaBeta::default()
                .with_depth_limit(depth)
                .with_evaluator(OpenLines)
                .search(&root)
                .unwrap();
            assert_eq!(pruned.value(), full.value(), "{board} at depth {depth}");
            assert!(pruned.nodes <= full.nodes, "{board} at depth {depth}");
        }
    }
}

#[test]
fn test_missing_evaluator_policy() {
    let neutral = AlphaBeta::new(SearchConfig::depth_limited(1));
    let result = neutral.search(&TicTacToe::new()).unwrap();
    assert_eq!(result.evaluation, Evaluation::Heuristic(0.0));

    let failing = AlphaBeta::new(SearchConfig {
        depth_limit: Some(1),
        missing_evaluator: MissingEvaluator::Fail,
    });
    assert!(matches!(
        failing.search(&TicTacToe::new()),
        Err(Error::MissingEvaluator { depth_limit: 1 })
    ));
}
