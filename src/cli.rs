use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about = "Pseudo-legal move generation on a mailbox board", long_about = None)]
pub struct Cli {
    /// Moves to play from the starting position first, comma separated (e.g. E2E4,E7E5)
    #[arg(short, long, global = true, value_delimiter = ',')]
    pub moves: Vec<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the board and its FEN
    Show,

    /// List the candidate moves of the piece on a square
    Moves {
        /// Square such as G1
        square: String,
    },

    /// Play one candidate of the piece on a square and print the result
    Play {
        /// Square such as G1
        square: String,
        /// Which candidate to play, in generation order
        #[arg(short, long, default_value_t = 0)]
        index: usize,
    },

    /// Count the candidate tree to the given depth
    Perft {
        depth: usize,
        /// Print the count below each root move
        #[arg(short, long)]
        divide: bool,
    },
}
