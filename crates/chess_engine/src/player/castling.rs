//! Castle move construction
//!
//! Castles are computed per side once both sides' pseudo-legal moves exist, because "the king
//! does not pass through an attacked square" needs the opponent's full attack set. Preconditions:
//!
//! - King on its home square, unmoved, not in check, and holding the matching castle right
//! - Rook of the same alliance on its corner square, unmoved
//! - Every square strictly between king and rook empty
//! - Neither the square the king crosses nor its destination attacked by an opponent move

use crate::constants::*;
use crate::moves::Move;
use crate::position::Position;
use crate::types::*;

use super::calculate_attacks_on_square;

/// Castle moves available to `king`
pub(crate) fn calculate_king_castles(
    position: &Position,
    king: &Piece,
    in_check: bool,
    opponent_moves: &[Move],
) -> Vec<Move> {
    let mut castles = Vec::new();
    let home = king.alliance().king_home();

    if king.square() != home || !king.is_first_move() || in_check {
        return castles;
    }

    let is_safe = |squares: &[Square]| {
        squares
            .iter()
            .all(|&square| calculate_attacks_on_square(square, opponent_moves).next().is_none())
    };
    let is_empty = |squares: &[Square]| squares.iter().all(|&square| !position.is_occupied(square));

    if king.is_king_side_castle_capable() {
        let crossing = [home + 1, home + 2];
        if let Some(rook) = castle_rook(position, king, home + KING_SIDE_ROOK_OFFSET) {
            if is_empty(&crossing) && is_safe(&crossing) {
                castles.push(Move::KingSideCastle {
                    king: *king,
                    destination: home + 2,
                    rook,
                    rook_destination: home + 1,
                });
            }
        }
    }

    if king.is_queen_side_castle_capable() {
        let between = [home - 1, home - 2, home - 3];
        if let Some(rook) = castle_rook(position, king, home + QUEEN_SIDE_ROOK_OFFSET) {
            if is_empty(&between) && is_safe(&between[..2]) {
                castles.push(Move::QueenSideCastle {
                    king: *king,
                    destination: home - 2,
                    rook,
                    rook_destination: home - 1,
                });
            }
        }
    }

    castles
}

/// Unmoved rook of the king's alliance on `square`
fn castle_rook(position: &Position, king: &Piece, square: Square) -> Option<Piece> {
    position.piece_at(square).filter(|piece| {
        piece.kind() == PieceKind::Rook
            && piece.alliance() == king.alliance()
            && piece.is_first_move()
    })
}

#[cfg(test)]
mod tests {
    use crate::position::{Position, PositionConfig};
    use crate::types::*;

    fn castling_config(side_to_move: Alliance) -> PositionConfig {
        PositionConfig::new(side_to_move)
            .with_piece(Piece::king(Alliance::White, 60, true, true))
            .with_piece(Piece::rook(Alliance::White, 56))
            .with_piece(Piece::rook(Alliance::White, 63))
            .with_piece(Piece::king(Alliance::Black, 4, true, true))
            .with_piece(Piece::rook(Alliance::Black, 0))
            .with_piece(Piece::rook(Alliance::Black, 7))
    }

    fn castles(position: &Position, alliance: Alliance) -> Vec<String> {
        position
            .player(alliance)
            .legal_moves()
            .iter()
            .filter(|mv| mv.is_castling())
            .map(|mv| mv.to_string())
            .collect()
    }

    #[test]
    fn test_both_castles_offered_on_clear_board() {
        let position = Position::new(castling_config(Alliance::White)).unwrap();
        assert_eq!(castles(&position, Alliance::White), vec!["O-O", "O-O-O"]);
        assert_eq!(castles(&position, Alliance::Black), vec!["O-O", "O-O-O"]);
    }

    #[test]
    fn test_castle_rights_gate_castling() {
        let config = castling_config(Alliance::White)
            .with_piece(Piece::king(Alliance::White, 60, false, true));
        let position = Position::new(config).unwrap();
        assert_eq!(castles(&position, Alliance::White), vec!["O-O-O"]);
    }

    #[test]
    fn test_moved_rook_prevents_castle() {
        let config = castling_config(Alliance::White)
            .with_piece(Piece::rook(Alliance::White, 56).with_first_move(false));
        let position = Position::new(config).unwrap();
        assert_eq!(castles(&position, Alliance::White), vec!["O-O"]);
    }

    #[test]
    fn test_blocked_queen_side() {
        // b1 must be empty even though the king never crosses it
        let config = castling_config(Alliance::White).with_piece(Piece::knight(Alliance::White, 57));
        let position = Position::new(config).unwrap();
        assert_eq!(castles(&position, Alliance::White), vec!["O-O"]);
    }

    #[test]
    fn test_attacked_b1_does_not_prevent_queen_side() {
        let config = castling_config(Alliance::White).with_piece(Piece::bishop(Alliance::Black, 43));
        let position = Position::new(config).unwrap();
        // d3 bishop hits b1 and f1: queen side stays open, king side is denied
        assert_eq!(castles(&position, Alliance::White), vec!["O-O-O"]);
    }

    #[test]
    fn test_no_castle_out_of_check() {
        let config = castling_config(Alliance::White).with_piece(Piece::knight(Alliance::Black, 45));
        let position = Position::new(config).unwrap();
        assert!(position.white_player().is_in_check());
        assert!(castles(&position, Alliance::White).is_empty());
    }
}
