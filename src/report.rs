//! Game report printed after a run

use std::fmt;

use chess_engine::api::{get_game_state, GameState};
use chess_engine::board::algebraic;
use chess_engine::evaluation::{BoardEvaluator, StandardBoardEvaluator};
use chess_engine::{Alliance, Move, Position};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlySource {
    Scripted,
    Engine,
}

/// One played move
#[derive(Debug, Clone, Serialize)]
pub struct PlyRecord {
    pub side: Alliance,
    pub notation: String,
    pub origin: &'static str,
    pub destination: &'static str,
    pub source: PlySource,
}

impl PlyRecord {
    pub fn new(side: Alliance, mv: &Move, source: PlySource) -> Self {
        PlyRecord {
            side,
            notation: mv.to_string(),
            origin: algebraic(mv.origin()),
            destination: algebraic(mv.destination()),
            source,
        }
    }
}

/// Final position plus the moves that led there
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub plies: Vec<PlyRecord>,
    pub side_to_move: Alliance,
    pub state: GameState,
    pub evaluation: i32,
    pub board: Vec<String>,
}

impl Report {
    pub fn new(position: &Position, plies: Vec<PlyRecord>) -> Self {
        Report {
            plies,
            side_to_move: position.side_to_move(),
            state: get_game_state(position),
            evaluation: StandardBoardEvaluator.evaluate(position, 0),
            board: position.to_string().lines().map(str::to_string).collect(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, ply) in self.plies.iter().enumerate() {
            let marker = match ply.source {
                PlySource::Scripted => "",
                PlySource::Engine => " (engine)",
            };
            writeln!(f, "{:>3}. {} {}{}", index + 1, ply.side, ply.notation, marker)?;
        }
        writeln!(f)?;
        for row in &self.board {
            writeln!(f, "{}", row)?;
        }
        writeln!(f)?;
        writeln!(
            f,
            "{} to move, {:?}, evaluation {}",
            self.side_to_move, self.state, self.evaluation
        )
    }
}
