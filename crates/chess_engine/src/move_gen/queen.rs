//! Queen move generation
//!
//! The queen combines the rook's and bishop's rays, and inherits both sets of edge exclusions.

use super::bishop::is_diagonal_excluded;
use super::rook::is_straight_excluded;
use super::sliding;
use crate::constants::*;
use crate::moves::Move;
use crate::position::Position;
use crate::types::*;

fn is_queen_excluded(square: Square, vector: i32) -> bool {
    is_diagonal_excluded(square, vector) || is_straight_excluded(square, vector)
}

pub fn generate_queen_moves(position: &Position, piece: &Piece, moves: &mut Vec<Move>) {
    sliding::generate_sliding_moves(position, piece, &QUEEN_VECTORS, is_queen_excluded, moves);
}
