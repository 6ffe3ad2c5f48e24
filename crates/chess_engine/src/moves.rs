//! # Moves - Closed Move Variant and Move Application
//!
//! ## Overview
//!
//! Every move the engine can produce is one variant of [`Move`]. The variant decides how
//! [`Move::apply`] builds the next [`Position`]; there is no trait object or virtual dispatch, so
//! adding a kind of move is a compile error everywhere it is not handled.
//!
//! A move never mutates the position it was generated from. [`Move::apply`] takes that origin
//! position explicitly and returns a brand-new one, which keeps the previous position valid for
//! history, undo-by-reference and tree search.
//!
//! ## The Application Rule
//!
//! All variants follow the same rule:
//! 1. Copy every piece of the mover except the moved piece (and, for castles, the rook)
//! 2. Copy every opponent piece except the captured one
//! 3. Place the moved piece on its destination with its first-move flag cleared
//! 4. Hand the turn to the opponent
//! 5. Clear the en-passant pawn, unless this is a double push, which sets it to the moved pawn
//!
//! En-passant removes the captured pawn from its own square, one rank behind the destination.
//! Promotion applies its underlying push or capture first, then swaps the pawn on the destination
//! for the chosen piece while keeping the side to move the underlying move already set.

use std::fmt;

use crate::board::algebraic;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::position::{Position, PositionConfig};
use crate::types::*;

/// A single move, computed against one position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Non-pawn piece to an empty square
    Major { piece: Piece, destination: Square },
    /// Non-pawn piece capturing on its destination
    MajorAttack {
        piece: Piece,
        destination: Square,
        captured: Piece,
    },
    /// Single pawn push
    PawnMove { piece: Piece, destination: Square },
    /// Double pawn push from the starting rank
    PawnJump { piece: Piece, destination: Square },
    /// Diagonal pawn capture
    PawnAttack {
        piece: Piece,
        destination: Square,
        captured: Piece,
    },
    /// Diagonal pawn capture of a pawn that just double-pushed past
    PawnEnPassantAttack {
        piece: Piece,
        destination: Square,
        captured: Piece,
    },
    /// Push or capture onto the promotion rank, swapping the pawn for `promote_to`
    PawnPromotion {
        piece: Piece,
        destination: Square,
        captured: Option<Piece>,
        promote_to: PieceKind,
    },
    KingSideCastle {
        king: Piece,
        destination: Square,
        rook: Piece,
        rook_destination: Square,
    },
    QueenSideCastle {
        king: Piece,
        destination: Square,
        rook: Piece,
        rook_destination: Square,
    },
    /// Sentinel for "no legal move matched this origin/destination pair"
    Null,
}

impl Move {
    /// The piece being moved (pre-move value), `None` for the null move
    pub fn moved_piece(&self) -> Option<Piece> {
        match *self {
            Move::Major { piece, .. }
            | Move::MajorAttack { piece, .. }
            | Move::PawnMove { piece, .. }
            | Move::PawnJump { piece, .. }
            | Move::PawnAttack { piece, .. }
            | Move::PawnEnPassantAttack { piece, .. }
            | Move::PawnPromotion { piece, .. } => Some(piece),
            Move::KingSideCastle { king, .. } | Move::QueenSideCastle { king, .. } => Some(king),
            Move::Null => None,
        }
    }

    /// Square the moved piece starts on, [`NO_SQUARE`] for the null move
    pub fn origin(&self) -> Square {
        self.moved_piece().map_or(NO_SQUARE, |piece| piece.square())
    }

    /// Square the moved piece lands on, [`NO_SQUARE`] for the null move
    pub fn destination(&self) -> Square {
        match *self {
            Move::Major { destination, .. }
            | Move::MajorAttack { destination, .. }
            | Move::PawnMove { destination, .. }
            | Move::PawnJump { destination, .. }
            | Move::PawnAttack { destination, .. }
            | Move::PawnEnPassantAttack { destination, .. }
            | Move::PawnPromotion { destination, .. }
            | Move::KingSideCastle { destination, .. }
            | Move::QueenSideCastle { destination, .. } => destination,
            Move::Null => NO_SQUARE,
        }
    }

    /// The piece removed from the board by this move
    pub fn captured_piece(&self) -> Option<Piece> {
        match *self {
            Move::MajorAttack { captured, .. }
            | Move::PawnAttack { captured, .. }
            | Move::PawnEnPassantAttack { captured, .. } => Some(captured),
            Move::PawnPromotion { captured, .. } => captured,
            _ => None,
        }
    }

    pub fn is_attack(&self) -> bool {
        self.captured_piece().is_some()
    }

    pub fn is_castling(&self) -> bool {
        matches!(self, Move::KingSideCastle { .. } | Move::QueenSideCastle { .. })
    }

    pub fn is_promotion(&self) -> bool {
        matches!(self, Move::PawnPromotion { .. })
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Move::Null)
    }

    /// Kind the pawn turns into, for promotions
    pub fn promotion_kind(&self) -> Option<PieceKind> {
        match *self {
            Move::PawnPromotion { promote_to, .. } => Some(promote_to),
            _ => None,
        }
    }

    /// Rook moved by a castle
    pub fn castle_rook(&self) -> Option<Piece> {
        match *self {
            Move::KingSideCastle { rook, .. } | Move::QueenSideCastle { rook, .. } => Some(rook),
            _ => None,
        }
    }

    /// Choose the promoted kind; any other move is returned unchanged
    ///
    /// Pawns and kings are not valid promotion targets and fall back to a queen.
    pub fn promote_to(self, kind: PieceKind) -> Move {
        match self {
            Move::PawnPromotion {
                piece,
                destination,
                captured,
                ..
            } => Move::PawnPromotion {
                piece,
                destination,
                captured,
                promote_to: match kind {
                    PieceKind::Pawn | PieceKind::King => PieceKind::Queen,
                    other => other,
                },
            },
            other => other,
        }
    }

    /// Same move, ignoring which piece a promotion was asked to produce
    pub fn matches(&self, other: &Move) -> bool {
        self.promote_to(PieceKind::Queen) == other.promote_to(PieceKind::Queen)
    }

    /// The push or capture a promotion decorates
    fn underlying(&self) -> Option<Move> {
        match *self {
            Move::PawnPromotion {
                piece,
                destination,
                captured: Some(captured),
                ..
            } => Some(Move::PawnAttack {
                piece,
                destination,
                captured,
            }),
            Move::PawnPromotion {
                piece,
                destination,
                captured: None,
                ..
            } => Some(Move::PawnMove { piece, destination }),
            _ => None,
        }
    }

    /// Build the position that results from playing this move on `position`
    ///
    /// # Errors
    ///
    /// Returns [`ChessEngineError::NullMove`] for the null move, and propagates construction
    /// errors if the resulting board would be malformed (a king captured).
    pub fn apply(&self, position: &Position) -> ChessEngineResult<Position> {
        match *self {
            Move::Null => Err(ChessEngineError::NullMove),
            Move::Major { piece, destination } | Move::PawnMove { piece, destination } => {
                relocate(position, piece, destination, None, None, None)
            }
            Move::MajorAttack {
                piece,
                destination,
                captured,
            }
            | Move::PawnAttack {
                piece,
                destination,
                captured,
            }
            | Move::PawnEnPassantAttack {
                piece,
                destination,
                captured,
            } => relocate(position, piece, destination, Some(captured), None, None),
            Move::PawnJump { piece, destination } => {
                let jumped = piece.moved_to(destination, false);
                relocate(position, piece, destination, None, None, Some(jumped))
            }
            Move::KingSideCastle {
                king,
                destination,
                rook,
                rook_destination,
            }
            | Move::QueenSideCastle {
                king,
                destination,
                rook,
                rook_destination,
            } => relocate(
                position,
                king,
                destination,
                None,
                Some((rook, rook_destination)),
                None,
            ),
            Move::PawnPromotion {
                piece,
                destination,
                promote_to,
                ..
            } => {
                let underlying = self.underlying().ok_or(ChessEngineError::NullMove)?;
                let pawn_moved = underlying.apply(position)?;
                let landed_pawn = piece.moved_to(destination, false);

                let mut config = PositionConfig::new(pawn_moved.side_to_move());
                for placed in pawn_moved.all_pieces() {
                    if *placed != landed_pawn {
                        config.place(*placed);
                    }
                }
                config.place(landed_pawn.promoted(promote_to));
                Position::new(config)
            }
        }
    }
}

/// Shared application rule for every non-promotion move
fn relocate(
    position: &Position,
    moved: Piece,
    destination: Square,
    captured: Option<Piece>,
    castle_rook: Option<(Piece, Square)>,
    en_passant_pawn: Option<Piece>,
) -> ChessEngineResult<Position> {
    let mover = moved.alliance();
    let mut config = PositionConfig::new(mover.opponent());

    for piece in position.active_pieces(mover) {
        let is_castle_rook = castle_rook.is_some_and(|(rook, _)| rook == *piece);
        if *piece != moved && !is_castle_rook {
            config.place(*piece);
        }
    }

    for piece in position.active_pieces(mover.opponent()) {
        if captured != Some(*piece) {
            config.place(*piece);
        }
    }

    config.place(moved.moved_to(destination, castle_rook.is_some()));
    if let Some((rook, rook_destination)) = castle_rook {
        config.place(rook.moved_to(rook_destination, false));
    }
    config.en_passant_pawn = en_passant_pawn;

    Position::new(config)
}

impl fmt::Display for Move {
    /// Short notation: piece letter plus destination, `x` for captures, `O-O`/`O-O-O`
    /// for castles and an `=Q` style suffix for promotions
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Move::Major { piece, destination } => {
                write!(f, "{}{}", piece.kind(), algebraic(destination))
            }
            Move::MajorAttack {
                piece, destination, ..
            } => write!(f, "{}x{}", piece.kind(), algebraic(destination)),
            Move::PawnMove { destination, .. } | Move::PawnJump { destination, .. } => {
                f.write_str(algebraic(destination))
            }
            Move::PawnAttack {
                piece, destination, ..
            }
            | Move::PawnEnPassantAttack {
                piece, destination, ..
            } => write!(
                f,
                "{}x{}",
                &algebraic(piece.square())[..1],
                algebraic(destination)
            ),
            Move::PawnPromotion { promote_to, .. } => match self.underlying() {
                Some(underlying) => write!(f, "{}={}", underlying, promote_to),
                None => f.write_str("Null Move"),
            },
            Move::KingSideCastle { .. } => f.write_str("O-O"),
            Move::QueenSideCastle { .. } => f.write_str("O-O-O"),
            Move::Null => f.write_str("Null Move"),
        }
    }
}
