use ttt_search::alphabeta::AlphaBeta;
use ttt_search::expectimax::Expectimax;
use ttt_search::minimax::Minimax;
use ttt_search::play::play_out;
use ttt_search::search::Strategy;
use ttt_search::survey::compare_pruning;
use ttt_search::tictactoe::{OpenLines, TicTacToe};
use ttt_search::Result;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // empty board
    let root = TicTacToe::new();

    let strategies: Vec<Box<dyn Strategy<TicTacToe>>> = vec![
        Box::new(Minimax::default()),
        Box::new(AlphaBeta::default()),
        Box::new(Expectimax::default()),
        Box::new(AlphaBeta::default().with_depth_limit(2).with_evaluator(OpenLines)),
    ];

    println!("Searching the empty board.");
    for strategy in &strategies {
        let now = std::time::Instant::now();
        let result = strategy.search(&root)?;
        println!(
            "{:>10}: value {:+.4} ({}), move {:?}, {} nodes in {} microseconds",
            strategy.name(),
            result.value(),
            if result.evaluation.is_exact() { "exact" } else { "heuristic" },
            result.action,
            result.nodes,
            now.elapsed().as_micros()
        );
    }

    // X in the top left, O in the middle right: O played badly.
    let x_o_board = root.play(0)?.play(5)?;
    let result = Minimax::default().search(&x_o_board)?;
    println!("\nAfter X top left, O middle right:\n{x_o_board}");
    println!("X is winning: value {}, move {:?}", result.value(), result.action);

    let report = compare_pruning(&root)?;
    println!(
        "\nAcross {} positions alpha-beta visited {} nodes to minimax's {}, {} value mismatches.",
        report.states, report.alphabeta_nodes, report.minimax_nodes, report.value_mismatches
    );

    // simulate two bots playing
    let bot = AlphaBeta::default();
    let record = play_out(root, &bot, &bot)?;
    println!("\nSelf-play moves {:?}\n{}", record.moves, record.final_state);
    match record.winner() {
        Some(player) => println!("{player:?} won"),
        None => println!("Draw"),
    }

    Ok(())
}
