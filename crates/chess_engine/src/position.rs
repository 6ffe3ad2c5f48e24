//! # Position - Immutable Board Snapshot
//!
//! ## Overview
//!
//! A [`Position`] is created once and never mutated. Construction is the only place positions are
//! made, and it does all of the derived work up front:
//! 1. Materialize the 64-square array and each side's active pieces (in square order)
//! 2. Locate exactly one king per side, failing with [`ChessEngineError`] otherwise
//! 3. Generate every piece's pseudo-legal moves for *both* sides
//! 4. Derive check status per side from the opponent's pseudo-legal destinations
//! 5. Add castle moves per side, which need the opponent-wide attack information from step 3
//!
//! Because every position computes its own move lists from its own board, the move lists used for
//! mobility and check are always fresh for that node. Nothing is shared or cached across positions.
//!
//! Per-side queries (legal moves, check, checkmate, castling) are exposed through the borrowed
//! [`Player`] view.

use std::collections::BTreeMap;
use std::fmt;

use crate::board::is_valid_square;
use crate::constants::*;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::move_gen::generate_pseudo_legal_moves;
use crate::moves::Move;
use crate::player::castling::calculate_king_castles;
use crate::player::{calculate_attacks_on_square, Player};
use crate::types::*;

/// Arguments for building a position: a sparse square-to-piece map, the pawn that may be
/// captured en passant this ply, and the side to move
#[derive(Debug, Clone, Default)]
pub struct PositionConfig {
    pieces: BTreeMap<Square, Piece>,
    pub en_passant_pawn: Option<Piece>,
    pub side_to_move: Alliance,
}

impl PositionConfig {
    pub fn new(side_to_move: Alliance) -> Self {
        PositionConfig {
            pieces: BTreeMap::new(),
            en_passant_pawn: None,
            side_to_move,
        }
    }

    /// Put a piece on its own square, replacing any previous occupant
    pub fn place(&mut self, piece: Piece) {
        self.pieces.insert(piece.square(), piece);
    }

    pub fn with_piece(mut self, piece: Piece) -> Self {
        self.place(piece);
        self
    }

    pub fn with_en_passant_pawn(mut self, pawn: Piece) -> Self {
        self.en_passant_pawn = Some(pawn);
        self
    }

    /// Pieces placed so far, keyed by their own square
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.values()
    }
}

/// Derived per-side data, computed once at construction
#[derive(Debug, Clone)]
pub(crate) struct SideState {
    pub(crate) pieces: Vec<Piece>,
    pub(crate) king: Piece,
    pub(crate) legal_moves: Vec<Move>,
    pub(crate) in_check: bool,
}

/// Immutable board snapshot with both sides' moves precomputed
#[derive(Debug, Clone)]
pub struct Position {
    squares: [Option<Piece>; NUM_SQUARES],
    en_passant_pawn: Option<Piece>,
    side_to_move: Alliance,
    white: SideState,
    black: SideState,
}

impl Position {
    /// Build a position from an explicit configuration
    ///
    /// # Errors
    ///
    /// - [`ChessEngineError::InvalidSquare`] if a piece sits off the board
    /// - [`ChessEngineError::MissingKing`] / [`ChessEngineError::ExtraKing`] unless each side
    ///   has exactly one king
    /// - [`ChessEngineError::InvalidEnPassantPawn`] if the en passant pawn is not a pawn of the
    ///   side that just moved, standing on its square
    pub fn new(config: PositionConfig) -> ChessEngineResult<Position> {
        let mut squares = [None; NUM_SQUARES];
        for piece in config.pieces.values() {
            let square = piece.square() as i32;
            if !is_valid_square(square) {
                return Err(ChessEngineError::InvalidSquare { square });
            }
            squares[square as usize] = Some(*piece);
        }

        let white_king = establish_king(&squares, Alliance::White)?;
        let black_king = establish_king(&squares, Alliance::Black)?;
        if let Some(pawn) = config.en_passant_pawn {
            check_en_passant_pawn(&squares, pawn, config.side_to_move)?;
        }

        Ok(Self::assemble(
            squares,
            config.en_passant_pawn,
            config.side_to_move,
            white_king,
            black_king,
        ))
    }

    /// The standard starting layout with White to move
    pub fn standard() -> Position {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut squares = [None; NUM_SQUARES];
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            let (black_square, white_square) = (file as Square, 56 + file as Square);
            let (black, white) = if kind.is_king() {
                (
                    Piece::king(Alliance::Black, black_square, true, true),
                    Piece::king(Alliance::White, white_square, true, true),
                )
            } else {
                (
                    Piece::new(kind, Alliance::Black, black_square),
                    Piece::new(kind, Alliance::White, white_square),
                )
            };
            squares[black_square as usize] = Some(black);
            squares[white_square as usize] = Some(white);
            squares[8 + file] = Some(Piece::pawn(Alliance::Black, 8 + file as Square));
            squares[48 + file] = Some(Piece::pawn(Alliance::White, 48 + file as Square));
        }

        Self::assemble(
            squares,
            None,
            Alliance::White,
            Piece::king(Alliance::White, WHITE_KING_HOME, true, true),
            Piece::king(Alliance::Black, BLACK_KING_HOME, true, true),
        )
    }

    fn assemble(
        squares: [Option<Piece>; NUM_SQUARES],
        en_passant_pawn: Option<Piece>,
        side_to_move: Alliance,
        white_king: Piece,
        black_king: Piece,
    ) -> Position {
        let active = |alliance: Alliance| -> Vec<Piece> {
            squares
                .iter()
                .flatten()
                .filter(|piece| piece.alliance() == alliance)
                .copied()
                .collect()
        };

        let mut position = Position {
            squares,
            en_passant_pawn,
            side_to_move,
            white: SideState {
                pieces: active(Alliance::White),
                king: white_king,
                legal_moves: Vec::new(),
                in_check: false,
            },
            black: SideState {
                pieces: active(Alliance::Black),
                king: black_king,
                legal_moves: Vec::new(),
                in_check: false,
            },
        };

        let white_standard = generate_pseudo_legal_moves(&position, Alliance::White);
        let black_standard = generate_pseudo_legal_moves(&position, Alliance::Black);

        let white_in_check =
            calculate_attacks_on_square(white_king.square(), &black_standard).next().is_some();
        let black_in_check =
            calculate_attacks_on_square(black_king.square(), &white_standard).next().is_some();

        let white_castles =
            calculate_king_castles(&position, &white_king, white_in_check, &black_standard);
        let black_castles =
            calculate_king_castles(&position, &black_king, black_in_check, &white_standard);

        position.white.legal_moves = white_standard;
        position.white.legal_moves.extend(white_castles);
        position.white.in_check = white_in_check;
        position.black.legal_moves = black_standard;
        position.black.legal_moves.extend(black_castles);
        position.black.in_check = black_in_check;

        position
    }

    /// Occupant of a square
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares.get(square as usize).copied().flatten()
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.piece_at(square).is_some()
    }

    /// The pawn that may be captured en passant this ply
    pub fn en_passant_pawn(&self) -> Option<Piece> {
        self.en_passant_pawn
    }

    pub fn side_to_move(&self) -> Alliance {
        self.side_to_move
    }

    pub fn white_pieces(&self) -> &[Piece] {
        &self.white.pieces
    }

    pub fn black_pieces(&self) -> &[Piece] {
        &self.black.pieces
    }

    pub fn active_pieces(&self, alliance: Alliance) -> &[Piece] {
        &self.side(alliance).pieces
    }

    /// Every piece on the board, White first
    pub fn all_pieces(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.white.pieces.iter().chain(self.black.pieces.iter())
    }

    /// Both sides' legal moves, White first
    pub fn all_legal_moves(&self) -> impl Iterator<Item = &Move> + '_ {
        self.white
            .legal_moves
            .iter()
            .chain(self.black.legal_moves.iter())
    }

    pub fn white_player(&self) -> Player<'_> {
        Player::new(self, Alliance::White)
    }

    pub fn black_player(&self) -> Player<'_> {
        Player::new(self, Alliance::Black)
    }

    /// View of the side to move
    pub fn current_player(&self) -> Player<'_> {
        Player::new(self, self.side_to_move)
    }

    pub fn player(&self, alliance: Alliance) -> Player<'_> {
        Player::new(self, alliance)
    }

    pub(crate) fn side(&self, alliance: Alliance) -> &SideState {
        match alliance {
            Alliance::White => &self.white,
            Alliance::Black => &self.black,
        }
    }
}

fn establish_king(
    squares: &[Option<Piece>; NUM_SQUARES],
    alliance: Alliance,
) -> ChessEngineResult<Piece> {
    let mut kings = squares
        .iter()
        .flatten()
        .filter(|piece| piece.kind().is_king() && piece.alliance() == alliance);

    let king = kings
        .next()
        .copied()
        .ok_or(ChessEngineError::MissingKing { alliance })?;
    if kings.next().is_some() {
        return Err(ChessEngineError::ExtraKing { alliance });
    }
    Ok(king)
}

/// The en passant pawn must be the opposing pawn actually on its square, first-move flag included
fn check_en_passant_pawn(
    squares: &[Option<Piece>; NUM_SQUARES],
    pawn: Piece,
    side_to_move: Alliance,
) -> ChessEngineResult<()> {
    let alliance = side_to_move.opponent();
    let on_board = squares.get(pawn.square() as usize).copied().flatten();
    if pawn.kind() != PieceKind::Pawn || pawn.alliance() != alliance || on_board != Some(pawn) {
        return Err(ChessEngineError::InvalidEnPassantPawn {
            alliance,
            square: pawn.square() as i32,
        });
    }
    Ok(())
}

impl fmt::Display for Position {
    /// Eight rows of eight cells, `-` for empty squares
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, square) in self.squares.iter().enumerate() {
            let symbol = square.map_or('-', |piece| piece.symbol());
            write!(f, "{:>3}", symbol)?;
            if (index + 1) % SQUARES_PER_ROW == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
