//! # Chess Engine Core Types - Squares, Sides and Pieces
//!
//! ## Overview
//!
//! This module defines the value types every other module passes around. All of them are `Copy`
//! and immutable: a piece never changes in place. Moving a piece produces a *new* [`Piece`] value
//! at the destination square with its first-move flag cleared, and the old value stays valid in
//! the [`Position`](crate::position::Position) it came from.
//!
//! ## Square Numbering
//!
//! Squares are plain `i8` indices into a flat 64-slot array:
//!
//! ```text
//!  0  1  2  3  4  5  6  7     <- row 0: a8 .. h8 (black back rank)
//!  8  9 10 11 12 13 14 15
//!  ...
//! 56 57 58 59 60 61 62 63     <- row 7: a1 .. h1 (white back rank)
//! ```
//!
//! `row = square / 8`, `column = square % 8`. The orientation matters: pawn direction, the
//! promotion rank and the double-push rank are all derived from it.
//!
//! ## Piece Identity
//!
//! Two pieces are equal iff kind, alliance, square and first-move flag match. Identity is
//! positional, never an object address. The king's castle-right flags and castled flag are
//! carried along but deliberately excluded from equality and hashing.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::constants::*;

/// Board square index (0-63), see the module docs for orientation
pub type Square = i8;

/// Square value used by the null move for its origin and destination
pub const NO_SQUARE: Square = -1;

/// One of the two sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alliance {
    #[default]
    White,
    Black,
}

impl Alliance {
    /// Pawn advance multiplier: White walks toward row 0, Black toward row 7
    #[inline]
    pub fn direction(self) -> i32 {
        match self {
            Alliance::White => -1,
            Alliance::Black => 1,
        }
    }

    /// File offset pointing from a capturing pawn toward the `+7` diagonal
    #[inline]
    pub fn opposite_direction(self) -> i32 {
        -self.direction()
    }

    #[inline]
    pub fn opponent(self) -> Alliance {
        match self {
            Alliance::White => Alliance::Black,
            Alliance::Black => Alliance::White,
        }
    }

    #[inline]
    pub fn is_white(self) -> bool {
        self == Alliance::White
    }

    #[inline]
    pub fn is_black(self) -> bool {
        self == Alliance::Black
    }

    /// Whether a pawn of this alliance promotes on `square`
    pub fn is_pawn_promotion_square(self, square: Square) -> bool {
        match self {
            Alliance::White => EIGHTH_RANK[square as usize],
            Alliance::Black => FIRST_RANK[square as usize],
        }
    }

    /// Whether `square` is on this alliance's pawn starting rank
    pub fn is_pawn_start_square(self, square: Square) -> bool {
        match self {
            Alliance::White => SECOND_RANK[square as usize],
            Alliance::Black => SEVENTH_RANK[square as usize],
        }
    }

    /// Home square of this alliance's king
    pub fn king_home(self) -> Square {
        match self {
            Alliance::White => WHITE_KING_HOME,
            Alliance::Black => BLACK_KING_HOME,
        }
    }
}

impl fmt::Display for Alliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alliance::White => f.write_str("White"),
            Alliance::Black => f.write_str("Black"),
        }
    }
}

/// The six piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Material value in centipawns
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => PAWN_VALUE,
            PieceKind::Knight => KNIGHT_VALUE,
            PieceKind::Bishop => BISHOP_VALUE,
            PieceKind::Rook => ROOK_VALUE,
            PieceKind::Queen => QUEEN_VALUE,
            PieceKind::King => KING_VALUE,
        }
    }

    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    #[inline]
    pub fn is_king(self) -> bool {
        self == PieceKind::King
    }

    /// Parse an upper- or lower-case piece letter
    pub fn from_letter(letter: char) -> Option<PieceKind> {
        match letter.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Immutable piece value
///
/// The castle fields only carry meaning for kings; every other kind keeps them `false`.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    kind: PieceKind,
    alliance: Alliance,
    square: Square,
    first_move: bool,
    king_side_castle_capable: bool,
    queen_side_castle_capable: bool,
    castled: bool,
}

impl Piece {
    /// A piece that has not moved yet
    pub fn new(kind: PieceKind, alliance: Alliance, square: Square) -> Self {
        Piece {
            kind,
            alliance,
            square,
            first_move: true,
            king_side_castle_capable: false,
            queen_side_castle_capable: false,
            castled: false,
        }
    }

    pub fn pawn(alliance: Alliance, square: Square) -> Self {
        Self::new(PieceKind::Pawn, alliance, square)
    }

    pub fn knight(alliance: Alliance, square: Square) -> Self {
        Self::new(PieceKind::Knight, alliance, square)
    }

    pub fn bishop(alliance: Alliance, square: Square) -> Self {
        Self::new(PieceKind::Bishop, alliance, square)
    }

    pub fn rook(alliance: Alliance, square: Square) -> Self {
        Self::new(PieceKind::Rook, alliance, square)
    }

    pub fn queen(alliance: Alliance, square: Square) -> Self {
        Self::new(PieceKind::Queen, alliance, square)
    }

    /// An unmoved king with explicit castle rights
    pub fn king(
        alliance: Alliance,
        square: Square,
        king_side_castle_capable: bool,
        queen_side_castle_capable: bool,
    ) -> Self {
        Piece {
            king_side_castle_capable,
            queen_side_castle_capable,
            ..Self::new(PieceKind::King, alliance, square)
        }
    }

    /// Same piece with the first-move flag overridden
    pub fn with_first_move(self, first_move: bool) -> Self {
        Piece { first_move, ..self }
    }

    /// The value this piece becomes after moving to `destination`
    ///
    /// A king that moves loses both castle rights and records whether the move was a castle.
    pub fn moved_to(self, destination: Square, castled: bool) -> Self {
        let is_king = self.kind.is_king();
        Piece {
            square: destination,
            first_move: false,
            king_side_castle_capable: false,
            queen_side_castle_capable: false,
            castled: is_king && castled,
            ..self
        }
    }

    /// Replace this piece's kind on its current square (pawn promotion)
    pub fn promoted(self, kind: PieceKind) -> Self {
        Piece {
            first_move: false,
            ..Self::new(kind, self.alliance, self.square)
        }
    }

    #[inline]
    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn alliance(&self) -> Alliance {
        self.alliance
    }

    #[inline]
    pub fn square(&self) -> Square {
        self.square
    }

    #[inline]
    pub fn is_first_move(&self) -> bool {
        self.first_move
    }

    #[inline]
    pub fn value(&self) -> i32 {
        self.kind.value()
    }

    pub fn is_king_side_castle_capable(&self) -> bool {
        self.king_side_castle_capable
    }

    pub fn is_queen_side_castle_capable(&self) -> bool {
        self.queen_side_castle_capable
    }

    pub fn is_castled(&self) -> bool {
        self.castled
    }

    /// Board letter: upper case for White, lower case for Black
    pub fn symbol(&self) -> char {
        match self.alliance {
            Alliance::White => self.kind.letter(),
            Alliance::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }
}

impl PartialEq for Piece {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.alliance == other.alliance
            && self.square == other.square
            && self.first_move == other.first_move
    }
}

impl Eq for Piece {}

impl Hash for Piece {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.alliance.hash(state);
        self.square.hash(state);
        self.first_move.hash(state);
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
