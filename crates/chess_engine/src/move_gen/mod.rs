//! Pseudo-legal move generation
//!
//! Generates, per piece, every move its movement pattern allows on the current board without
//! considering whether the mover's own king is left attacked. That check is made later by
//! [`Player::make_move`](crate::player::Player::make_move) against the resulting position.
//!
//! Castles are not generated here: they depend on the opponent's attacks, which are only known
//! once both sides' pseudo-legal moves exist (see [`crate::player::castling`]).
//!
//! ## Module Organization
//!
//! - `sliding` - Ray walking shared by bishops, rooks and queens
//! - `bishop`, `rook`, `queen` - Direction sets and edge exclusions for each slider
//! - `knight`, `king` - Single-step jumpers with edge exclusions
//! - `pawn` - Pushes, double pushes, captures, en passant and promotion

mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;
mod sliding;

use crate::board::is_valid_square;
use crate::moves::Move;
use crate::position::Position;
use crate::types::*;

/// Every pseudo-legal move for one piece on `position`
///
/// Dispatches on the piece kind. Castling is never produced here because it needs the
/// opponent's attacks, which only the assembled position knows.
///
/// # Examples
///
/// ```rust
/// use chess_engine::move_gen::calculate_moves;
/// use chess_engine::Position;
///
/// let position = Position::standard();
/// let knight = position.piece_at(62).unwrap();
/// assert_eq!(calculate_moves(&knight, &position).len(), 2);
/// ```
pub fn calculate_moves(piece: &Piece, position: &Position) -> Vec<Move> {
    let mut moves = Vec::new();
    match piece.kind() {
        PieceKind::Pawn => pawn::generate_pawn_moves(position, piece, &mut moves),
        PieceKind::Knight => knight::generate_knight_moves(position, piece, &mut moves),
        PieceKind::Bishop => bishop::generate_bishop_moves(position, piece, &mut moves),
        PieceKind::Rook => rook::generate_rook_moves(position, piece, &mut moves),
        PieceKind::Queen => queen::generate_queen_moves(position, piece, &mut moves),
        PieceKind::King => king::generate_king_moves(position, piece, &mut moves),
    }
    moves
}

/// Concatenate every active piece's pseudo-legal moves, in square order
pub fn generate_pseudo_legal_moves(position: &Position, alliance: Alliance) -> Vec<Move> {
    position
        .active_pieces(alliance)
        .iter()
        .flat_map(|piece| calculate_moves(piece, position))
        .collect()
}

/// Outcome of a non-pawn piece stepping onto `destination`
///
/// Returns the move (quiet or capture) if the square is empty or holds an opponent piece, and
/// whether the square was occupied, which ends a slider's ray.
pub(crate) fn step(position: &Position, piece: &Piece, destination: Square) -> (Option<Move>, bool) {
    match position.piece_at(destination) {
        None => (
            Some(Move::Major {
                piece: *piece,
                destination,
            }),
            false,
        ),
        Some(occupant) if occupant.alliance() != piece.alliance() => (
            Some(Move::MajorAttack {
                piece: *piece,
                destination,
                captured: occupant,
            }),
            true,
        ),
        Some(_) => (None, true),
    }
}

/// Candidate square one offset away, if it stays on the board
#[inline]
pub(crate) fn offset_square(square: Square, offset: i32) -> Option<Square> {
    let candidate = square as i32 + offset;
    is_valid_square(candidate).then_some(candidate as Square)
}

/// Push single-step moves for a jumper (knight or king)
pub(crate) fn generate_jump_moves(
    position: &Position,
    piece: &Piece,
    offsets: &[i32],
    is_excluded: fn(Square, i32) -> bool,
    moves: &mut Vec<Move>,
) {
    for &offset in offsets {
        if is_excluded(piece.square(), offset) {
            continue;
        }
        if let Some(destination) = offset_square(piece.square(), offset) {
            if let (Some(mv), _) = step(position, piece, destination) {
                moves.push(mv);
            }
        }
    }
}
