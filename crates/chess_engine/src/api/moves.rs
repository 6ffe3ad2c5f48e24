//! Move lookup and execution
//!
//! External input arrives as square pairs (clicks, `e2e4` text). Lookup searches both sides'
//! legal moves, White first, and yields [`Move::Null`] when nothing matches. A pair naming the
//! other side's move is found here and then rejected by [`make_move`] as illegal.

use tracing::debug;

use crate::board::{square_from_algebraic, square_from_index};
use crate::error::ChessEngineResult;
use crate::moves::Move;
use crate::player::MoveTransition;
use crate::position::Position;
use crate::types::*;

/// The legal move from `origin` to `destination`, or [`Move::Null`]
///
/// Promotions are returned with the default queen.
///
/// # Arguments
///
/// * `position` - The position to search
/// * `origin` - Square index (0-63) the piece stands on
/// * `destination` - Square index (0-63) it should reach
///
/// # Examples
///
/// ```rust
/// use chess_engine::api::{create_move, new_game};
///
/// let position = new_game();
/// assert_eq!(create_move(&position, 52, 36).to_string(), "e4");
/// assert!(create_move(&position, 52, 28).is_null());
/// ```
pub fn create_move(position: &Position, origin: Square, destination: Square) -> Move {
    position
        .all_legal_moves()
        .find(|mv| mv.origin() == origin && mv.destination() == destination)
        .copied()
        .unwrap_or(Move::Null)
}

/// Same as [`create_move`], validating raw square indices first
///
/// # Errors
///
/// Returns [`crate::ChessEngineError::InvalidSquare`] if either index is outside 0-63.
pub fn create_move_from_indices(
    position: &Position,
    origin: i32,
    destination: i32,
) -> ChessEngineResult<Move> {
    Ok(create_move(
        position,
        square_from_index(origin)?,
        square_from_index(destination)?,
    ))
}

/// Same as [`create_move`], with squares given in algebraic notation (`"e2"`, `"e4"`)
///
/// # Errors
///
/// Returns [`crate::ChessEngineError::UnknownNotation`] if either square cannot be parsed.
pub fn create_move_from_notation(
    position: &Position,
    origin: &str,
    destination: &str,
) -> ChessEngineResult<Move> {
    Ok(create_move(
        position,
        square_from_algebraic(origin)?,
        square_from_algebraic(destination)?,
    ))
}

/// Look up a move, asking `choose` for the promoted piece if the move promotes
///
/// `choose` is only called for promotions. Pawns and kings are not valid choices and fall back to
/// a queen.
///
/// # Arguments
///
/// * `position` - The position to search
/// * `origin` - Square index the pawn stands on
/// * `destination` - Square index on the last row
/// * `choose` - Receives the queen-promotion move and returns the piece kind to promote to
///
/// # Examples
///
/// ```rust,ignore
/// let mv = create_move_with_promotion(&position, 49, 56, |_| PieceKind::Knight);
/// assert_eq!(mv.to_string(), "bxa1=N");
/// ```
pub fn create_move_with_promotion<F>(
    position: &Position,
    origin: Square,
    destination: Square,
    choose: F,
) -> Move
where
    F: FnOnce(&Move) -> PieceKind,
{
    let mv = create_move(position, origin, destination);
    if mv.is_promotion() {
        let kind = choose(&mv);
        debug!("{} promotes to {}", mv, kind);
        mv.promote_to(kind)
    } else {
        mv
    }
}

/// Play `mv` for the side to move
///
/// A rejected move leaves the position untouched; check [`MoveTransition::status`].
///
/// # Examples
///
/// ```rust
/// use chess_engine::api::{create_move, make_move, new_game};
/// use chess_engine::MoveStatus;
///
/// let position = new_game();
/// let transition = make_move(&position, &create_move(&position, 52, 36));
/// assert_eq!(transition.status(), MoveStatus::Done);
/// ```
pub fn make_move<'a>(position: &'a Position, mv: &Move) -> MoveTransition<'a> {
    position.current_player().make_move(mv)
}
