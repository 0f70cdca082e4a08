mod cli;

use std::io::stderr;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use gambit_core::{Board, Move, Position, divide, generate_moves, perft};
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .without_time()
        .with_writer(stderr)
        .with_env_filter(filter)
        .init();
}

/// Start from the initial position and apply each move in order.
fn setup(moves: &[String]) -> Result<Board> {
    let mut board = Board::new();
    for text in moves {
        let mv: Move = text
            .trim()
            .parse()
            .with_context(|| format!("invalid move `{text}`"))?;
        board
            .make_move(mv)
            .with_context(|| format!("cannot play {mv}"))?;
    }
    Ok(board)
}

fn parse_square(text: &str) -> Result<Position> {
    text.parse()
        .with_context(|| format!("invalid square `{text}`"))
}

fn show(board: &Board) {
    println!("{}", board.pretty());
    println!();
    println!("{board}");
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let mut board = setup(&cli.moves)?;

    match cli.command.unwrap_or(Command::Show) {
        Command::Show => show(&board),

        Command::Moves { square } => {
            let pos = parse_square(&square)?;
            let moves = generate_moves(&board, pos);
            info!(square = %pos, piece = ?board.piece_at(pos), count = moves.len(), "generated");
            for mv in &moves {
                println!("{mv}");
            }
        }

        Command::Play { square, index } => {
            let pos = parse_square(&square)?;
            let moves = generate_moves(&board, pos);
            if index >= moves.len() {
                bail!("{pos} has {} candidate moves, no index {index}", moves.len());
            }
            let mv = moves[index];
            board
                .make_move(mv)
                .with_context(|| format!("cannot play {mv}"))?;
            info!(%mv, "played");
            show(&board);
        }

        Command::Perft { depth, divide: split } => {
            let start = Instant::now();
            let nodes = if split {
                let results = divide(&board, depth);
                for (mv, count) in &results {
                    println!("{mv}: {count}");
                }
                results.iter().map(|(_, n)| n).sum()
            } else {
                perft(&board, depth)
            };
            let elapsed = start.elapsed();
            println!();
            println!("Nodes: {nodes}");
            info!(depth, nodes, ?elapsed, "perft finished");
        }
    }

    Ok(())
}
