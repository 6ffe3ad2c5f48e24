//! Command-line arguments

use std::str::FromStr;

use anyhow::{anyhow, Context};
use chess_engine::api::DEFAULT_SEARCH_DEPTH;
use chess_engine::board::square_from_algebraic;
use chess_engine::{PieceKind, Square};
use clap::Parser;

/// Play scripted moves from the starting position, then let the engine answer
#[derive(Debug, Parser)]
#[command(name = "chess-minimax", version)]
pub struct Cli {
    /// Search depth in plies
    #[arg(short, long, default_value_t = DEFAULT_SEARCH_DEPTH)]
    pub depth: u32,

    /// Moves to play first, as origin and destination squares (`e2e4`, `e7e8n` to underpromote)
    #[arg(short, long, num_args = 1.., value_delimiter = ' ')]
    pub moves: Vec<String>,

    /// Engine plies to play after the scripted moves
    #[arg(short, long, default_value_t = 1)]
    pub plies: u32,

    /// Print the final report as JSON
    #[arg(long)]
    pub json: bool,
}

/// One `--moves` entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptedMove {
    pub origin: Square,
    pub destination: Square,
    pub promotion: Option<PieceKind>,
}

impl FromStr for ScriptedMove {
    type Err = anyhow::Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return Err(anyhow!("expected a move like e2e4 or e7e8q, got {:?}", text));
        }

        let origin = square_from_algebraic(&text[..2])
            .with_context(|| format!("bad origin square in {:?}", text))?;
        let destination = square_from_algebraic(&text[2..4])
            .with_context(|| format!("bad destination square in {:?}", text))?;
        let promotion = match text[4..].chars().next() {
            None => None,
            Some(letter) => Some(
                PieceKind::from_letter(letter)
                    .ok_or_else(|| anyhow!("unknown promotion piece {:?} in {:?}", letter, text))?,
            ),
        };

        Ok(ScriptedMove {
            origin,
            destination,
            promotion,
        })
    }
}
