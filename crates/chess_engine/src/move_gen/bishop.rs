//! Bishop move generation
//!
//! Bishops slide diagonally until blocked by another piece or the board edge.

use super::sliding;
use crate::constants::*;
use crate::moves::Move;
use crate::position::Position;
use crate::types::*;

/// Whether a diagonal step from `square` would wrap around a side edge
pub(super) fn is_diagonal_excluded(square: Square, vector: i32) -> bool {
    let square = square as usize;
    (FIRST_COLUMN[square] && (vector == NW || vector == SW))
        || (EIGHTH_COLUMN[square] && (vector == NO || vector == SO))
}

pub fn generate_bishop_moves(position: &Position, piece: &Piece, moves: &mut Vec<Move>) {
    sliding::generate_sliding_moves(position, piece, &BISHOP_VECTORS, is_diagonal_excluded, moves);
}
