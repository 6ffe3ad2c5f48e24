//! Rook move generation
//!
//! Rooks slide along files and ranks until blocked by another piece or the board edge.

use super::sliding;
use crate::constants::*;
use crate::moves::Move;
use crate::position::Position;
use crate::types::*;

/// Whether a sideways step from `square` would wrap onto the neighbouring row
pub(super) fn is_straight_excluded(square: Square, vector: i32) -> bool {
    let square = square as usize;
    (FIRST_COLUMN[square] && vector == W) || (EIGHTH_COLUMN[square] && vector == O)
}

pub fn generate_rook_moves(position: &Position, piece: &Piece, moves: &mut Vec<Move>) {
    sliding::generate_sliding_moves(position, piece, &ROOK_VECTORS, is_straight_excluded, moves);
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn test_open_rook_has_fourteen_moves() {
        let position = build(with_kings(Alliance::White).with_piece(Piece::rook(Alliance::White, 36)));
        assert_eq!(destinations(&position, 36).len(), 14);
    }

    #[test]
    fn test_rook_on_a_file_does_not_wrap_west() {
        let position = build(with_kings(Alliance::White).with_piece(Piece::rook(Alliance::White, 32)));
        let squares = destinations(&position, 32);
        assert!(!squares.contains(&31), "a4 must not reach h5");
        assert!(squares.contains(&39));
    }

    #[test]
    fn test_rook_blocked_by_own_piece() {
        let position = build(
            with_kings(Alliance::White)
                .with_piece(Piece::rook(Alliance::White, 56))
                .with_piece(Piece::pawn(Alliance::White, 48))
                .with_piece(Piece::knight(Alliance::White, 57)),
        );
        assert!(destinations(&position, 56).is_empty());
    }
}
