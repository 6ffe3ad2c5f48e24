//! Error types for chess engine
//!
//! Only programmer and data errors live here. A move that is illegal or that would leave the
//! mover in check is an expected outcome and is reported through
//! [`MoveStatus`](crate::player::MoveStatus), never as an error.

use thiserror::Error;

use crate::types::Alliance;

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessEngineError {
    /// Position has no king for one side
    #[error("Malformed position: no {alliance} king on the board")]
    MissingKing { alliance: Alliance },

    /// Position has more than one king for one side
    #[error("Malformed position: more than one {alliance} king on the board")]
    ExtraKing { alliance: Alliance },

    /// En passant pawn that is not an opposing pawn standing on the board
    #[error("Malformed position: no {alliance} pawn on square {square} to capture en passant")]
    InvalidEnPassantPawn { alliance: Alliance, square: i32 },

    /// The sentinel null move was applied
    #[error("Cannot apply the null move")]
    NullMove,

    /// Invalid square index (out of bounds)
    #[error("Invalid square index: {square} (must be 0-63)")]
    InvalidSquare { square: i32 },

    /// Text that is not an algebraic square name
    #[error("Unknown square notation: {notation:?}")]
    UnknownNotation { notation: String },
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
