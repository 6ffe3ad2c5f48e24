//! Knight move generation
//!
//! Knights jump in an L-shape and ignore pieces in between. Near the side edges some jumps
//! would wrap around the flat board, so they are excluded by the knight's *current* column:
//!
//! - First column: -17, -10, 6, 15
//! - Second column: -10, 6
//! - Seventh column: -6, 10
//! - Eighth column: -15, -6, 10, 17

use super::generate_jump_moves;
use crate::constants::*;
use crate::moves::Move;
use crate::position::Position;
use crate::types::*;

fn is_knight_excluded(square: Square, offset: i32) -> bool {
    let square = square as usize;
    (FIRST_COLUMN[square] && matches!(offset, -17 | -10 | 6 | 15))
        || (SECOND_COLUMN[square] && matches!(offset, -10 | 6))
        || (SEVENTH_COLUMN[square] && matches!(offset, -6 | 10))
        || (EIGHTH_COLUMN[square] && matches!(offset, -15 | -6 | 10 | 17))
}

/// Generate knight moves from the knight's square
///
/// Knights jump, so each of the eight offsets is tested on its own. Offsets that would wrap past
/// the a-, b-, g- or h-file are skipped before the board is consulted.
///
/// # Arguments
///
/// * `position` - The position the knight stands on
/// * `piece` - The knight itself
/// * `moves` - Output vector to append quiet moves and captures to
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_knight_moves(&position, &knight_on_g1, &mut moves);
/// // Nf3 and Nh3 from the starting position
/// ```
pub fn generate_knight_moves(position: &Position, piece: &Piece, moves: &mut Vec<Move>) {
    generate_jump_moves(position, piece, &KNIGHT_OFFSETS, is_knight_excluded, moves);
}
