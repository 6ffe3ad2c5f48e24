//! Sliding piece move generation
//!
//! Common functionality for sliding pieces (bishops, rooks, queens).
//! These pieces can move multiple squares in a direction until blocked.
//!
//! ## Algorithm
//!
//! For each direction vector:
//! 1. Stop if the *current* square sits on a column the vector would wrap from
//! 2. Step one offset; stop if it leaves the board
//! 3. Empty square: record a quiet move and keep walking
//! 4. Opponent piece: record the capture and stop
//! 5. Own piece: stop

use super::{offset_square, step};
use crate::moves::Move;
use crate::position::Position;
use crate::types::*;

/// Generate moves for a sliding piece along `vectors`
///
/// `is_excluded(square, vector)` reports whether stepping `vector` from `square` would wrap
/// around the board edge.
///
/// # Arguments
///
/// * `position` - The current position
/// * `piece` - The slider whose rays are walked
/// * `vectors` - Direction offsets, one ray each
/// * `is_excluded` - Edge test applied to the square the ray currently stands on
/// * `moves` - Output vector to append moves to
pub fn generate_sliding_moves(
    position: &Position,
    piece: &Piece,
    vectors: &[i32],
    is_excluded: fn(Square, i32) -> bool,
    moves: &mut Vec<Move>,
) {
    for &vector in vectors {
        let mut current = piece.square();
        loop {
            if is_excluded(current, vector) {
                break;
            }
            let Some(destination) = offset_square(current, vector) else {
                break;
            };

            let (mv, blocked) = step(position, piece, destination);
            moves.extend(mv);
            if blocked {
                break;
            }
            current = destination;
        }
    }
}
