//! King move generation
//!
//! Kings move one square in any direction. Moving into an attacked square is pseudo-legal here
//! and rejected later by the leaves-in-check test. Castling is generated separately in
//! [`crate::player::castling`].

use super::generate_jump_moves;
use crate::constants::*;
use crate::moves::Move;
use crate::position::Position;
use crate::types::*;

fn is_king_excluded(square: Square, offset: i32) -> bool {
    let square = square as usize;
    (FIRST_COLUMN[square] && matches!(offset, W | NW | SW))
        || (EIGHTH_COLUMN[square] && matches!(offset, O | NO | SO))
}

pub fn generate_king_moves(position: &Position, piece: &Piece, moves: &mut Vec<Move>) {
    generate_jump_moves(position, piece, &KING_OFFSETS, is_king_excluded, moves);
}
