//! Pawn move generation
//!
//! Handles pawn-specific move generation including:
//! - Single and double forward pushes
//! - Diagonal captures
//! - En passant
//! - Promotion (generated as a queen; the caller may pick another piece)
//!
//! ## Offsets
//!
//! Candidates are `[7, 8, 9, 16]` scaled by the alliance direction, so a White pawn walks toward
//! row 0 and a Black pawn toward row 7. The `7` diagonal heads east for White and west for Black,
//! and the `9` diagonal the other way, which decides which edge column excludes each capture.

use super::offset_square;
use crate::constants::*;
use crate::moves::Move;
use crate::position::Position;
use crate::types::*;

/// Generate pawn moves from the pawn's square
///
/// # Arguments
///
/// * `position` - Supplies occupancy and the pawn that may be taken en passant
/// * `piece` - The pawn; its alliance decides the direction of travel
/// * `moves` - Output vector; moves reaching the last row are pushed as queen promotions
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_pawn_moves(&position, &pawn_on_e2, &mut moves);
/// // e3 and the double push to e4
/// ```
pub fn generate_pawn_moves(position: &Position, piece: &Piece, moves: &mut Vec<Move>) {
    let square = piece.square();
    let alliance = piece.alliance();
    let index = square as usize;

    for &offset in &PAWN_OFFSETS {
        let Some(destination) = offset_square(square, alliance.direction() * offset) else {
            continue;
        };

        match offset {
            8 => {
                if !position.is_occupied(destination) {
                    moves.push(push_or_promote(piece, destination));
                }
            }
            16 => {
                let Some(skipped) = offset_square(square, alliance.direction() * 8) else {
                    continue;
                };
                if piece.is_first_move()
                    && alliance.is_pawn_start_square(square)
                    && !position.is_occupied(skipped)
                    && !position.is_occupied(destination)
                {
                    moves.push(Move::PawnJump {
                        piece: *piece,
                        destination,
                    });
                }
            }
            7 => {
                let wraps = (EIGHTH_COLUMN[index] && alliance.is_white())
                    || (FIRST_COLUMN[index] && alliance.is_black());
                if !wraps {
                    let beside = square as i32 + alliance.opposite_direction();
                    diagonal_capture(position, piece, destination, beside, moves);
                }
            }
            9 => {
                let wraps = (FIRST_COLUMN[index] && alliance.is_white())
                    || (EIGHTH_COLUMN[index] && alliance.is_black());
                if !wraps {
                    let beside = square as i32 - alliance.opposite_direction();
                    diagonal_capture(position, piece, destination, beside, moves);
                }
            }
            _ => {}
        }
    }
}

fn push_or_promote(piece: &Piece, destination: Square) -> Move {
    if piece.alliance().is_pawn_promotion_square(destination) {
        Move::PawnPromotion {
            piece: *piece,
            destination,
            captured: None,
            promote_to: PieceKind::Queen,
        }
    } else {
        Move::PawnMove {
            piece: *piece,
            destination,
        }
    }
}

/// A diagonal capture onto `destination`, or an en-passant capture of the pawn on `beside`
fn diagonal_capture(
    position: &Position,
    piece: &Piece,
    destination: Square,
    beside: i32,
    moves: &mut Vec<Move>,
) {
    match position.piece_at(destination) {
        Some(occupant) if occupant.alliance() != piece.alliance() => {
            if piece.alliance().is_pawn_promotion_square(destination) {
                moves.push(Move::PawnPromotion {
                    piece: *piece,
                    destination,
                    captured: Some(occupant),
                    promote_to: PieceKind::Queen,
                });
            } else {
                moves.push(Move::PawnAttack {
                    piece: *piece,
                    destination,
                    captured: occupant,
                });
            }
        }
        Some(_) => {}
        None => {
            if let Some(en_passant) = position.en_passant_pawn() {
                if en_passant.alliance() != piece.alliance()
                    && en_passant.square() as i32 == beside
                {
                    moves.push(Move::PawnEnPassantAttack {
                        piece: *piece,
                        destination,
                        captured: en_passant,
                    });
                }
            }
        }
    }
}
