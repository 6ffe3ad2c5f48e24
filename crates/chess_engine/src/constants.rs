//! # Chess Engine Constants - Geometry Tables, Values & Evaluation Bonuses
//!
//! ## Overview
//!
//! This module centralizes every constant the engine relies on: the square membership tables used
//! to stop pieces wrapping around the board edge, the algebraic-notation table, movement offset
//! vectors, piece values (in centipawns) and the bonuses used by the standard evaluator. All tables
//! are computed at compile time by `const fn`s, so there is no process-wide mutable state.
//!
//! ## Flat 64-Square Geometry
//!
//! The board is a flat array. Row 0 is the black back rank (a8..h8), row 7 the white back rank
//! (a1..h1). Movement is encoded as index offsets:
//! - **North (N)**: -8 (toward row 0, White's pawn direction)
//! - **South (S)**: +8
//! - **East (O)**: +1
//! - **West (W)**: -1
//! - **Diagonals**: combinations (NO = -7, NW = -9, SO = +9, SW = +7)
//!
//! ### Why Column Tables?
//!
//! On a flat array, `a4 - 1` is `h5`: a naive offset walks off one edge and reappears on the other.
//! Instead of converting to (column, row) on every step, generators look up whether the *current*
//! square sits on a column from which an offset would wrap. A bishop on the first column may not
//! use NW (-9) or SW (+7); a knight on the second column may not use the two-files-west jumps, and
//! so on. The same trick with rank tables answers "is this the promotion rank?" and "is this the
//! pawn starting rank?" in one lookup.
//!
//! ## Centipawn Valuation
//!
//! - **Pawn**: 100
//! - **Knight**: 300
//! - **Bishop**: 300
//! - **Rook**: 500
//! - **Queen**: 900
//! - **King**: 10,000 (more than every other piece combined)

/// Number of squares on the board
pub const NUM_SQUARES: usize = 64;

/// Number of squares in one row
pub const SQUARES_PER_ROW: usize = 8;

pub const FORWARD: i32 = 8;
pub const SIDEWARD: i32 = 1;
pub const S: i32 = FORWARD;
pub const O: i32 = SIDEWARD;
pub const N: i32 = -S;
pub const W: i32 = -O;
pub const NO: i32 = N + O;
pub const SO: i32 = S + O;
pub const NW: i32 = N + W;
pub const SW: i32 = S + W;

pub const BISHOP_VECTORS: [i32; 4] = [NW, NO, SW, SO];
pub const ROOK_VECTORS: [i32; 4] = [N, W, O, S];
pub const QUEEN_VECTORS: [i32; 8] = [NW, N, NO, W, O, SW, S, SO];
pub const KNIGHT_OFFSETS: [i32; 8] = [
    N + N + W, N + N + O, W + W + N, O + O + N,
    W + W + S, O + O + S, S + S + W, S + S + O,
];
pub const KING_OFFSETS: [i32; 8] = [NW, N, NO, W, O, SW, S, SO];

/// Pawn candidate offsets, scaled by the alliance direction at generation time
pub const PAWN_OFFSETS: [i32; 4] = [7, 8, 9, 16];

const fn init_columns() -> [[bool; NUM_SQUARES]; SQUARES_PER_ROW] {
    let mut columns = [[false; NUM_SQUARES]; SQUARES_PER_ROW];
    let mut square = 0;
    while square < NUM_SQUARES {
        columns[square % SQUARES_PER_ROW][square] = true;
        square += 1;
    }
    columns
}

const fn init_rows() -> [[bool; NUM_SQUARES]; SQUARES_PER_ROW] {
    let mut rows = [[false; NUM_SQUARES]; SQUARES_PER_ROW];
    let mut square = 0;
    while square < NUM_SQUARES {
        rows[square / SQUARES_PER_ROW][square] = true;
        square += 1;
    }
    rows
}

/// `COLUMNS[c][square]` is true iff `square` lies on column `c` (0 = a-file)
pub const COLUMNS: [[bool; NUM_SQUARES]; SQUARES_PER_ROW] = init_columns();

/// `ROWS[r][square]` is true iff `square` lies on row `r` (0 = eighth rank)
pub const ROWS: [[bool; NUM_SQUARES]; SQUARES_PER_ROW] = init_rows();

pub const FIRST_COLUMN: [bool; NUM_SQUARES] = COLUMNS[0];
pub const SECOND_COLUMN: [bool; NUM_SQUARES] = COLUMNS[1];
pub const SEVENTH_COLUMN: [bool; NUM_SQUARES] = COLUMNS[6];
pub const EIGHTH_COLUMN: [bool; NUM_SQUARES] = COLUMNS[7];

pub const EIGHTH_RANK: [bool; NUM_SQUARES] = ROWS[0];
pub const SEVENTH_RANK: [bool; NUM_SQUARES] = ROWS[1];
pub const SIXTH_RANK: [bool; NUM_SQUARES] = ROWS[2];
pub const FIFTH_RANK: [bool; NUM_SQUARES] = ROWS[3];
pub const FOURTH_RANK: [bool; NUM_SQUARES] = ROWS[4];
pub const THIRD_RANK: [bool; NUM_SQUARES] = ROWS[5];
pub const SECOND_RANK: [bool; NUM_SQUARES] = ROWS[6];
pub const FIRST_RANK: [bool; NUM_SQUARES] = ROWS[7];

#[rustfmt::skip]
pub const ALGEBRAIC_NOTATION: [&str; NUM_SQUARES] = [
    "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8",
    "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7",
    "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6",
    "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5",
    "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4",
    "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3",
    "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2",
    "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1",
];

pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 300;
pub const BISHOP_VALUE: i32 = 300;
pub const ROOK_VALUE: i32 = 500;
pub const QUEEN_VALUE: i32 = 900;
pub const KING_VALUE: i32 = 10000;

pub const WHITE_KING_HOME: i8 = 60;
pub const BLACK_KING_HOME: i8 = 4;

/// King-side rook sits three files east of the king's home square
pub const KING_SIDE_ROOK_OFFSET: i8 = 3;
/// Queen-side rook sits four files west of the king's home square
pub const QUEEN_SIDE_ROOK_OFFSET: i8 = -4;

pub const CHECK_BONUS: i32 = 50;
pub const CHECK_MATE_BONUS: i32 = 10000;
pub const CASTLE_BONUS: i32 = 60;
pub const DEPTH_BONUS_VALUE: i32 = 100;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_tables() {
        assert!(FIRST_COLUMN[0] && FIRST_COLUMN[8] && FIRST_COLUMN[56]);
        assert!(!FIRST_COLUMN[1]);
        assert!(EIGHTH_COLUMN[7] && EIGHTH_COLUMN[63]);
        assert!(SECOND_COLUMN[9] && SEVENTH_COLUMN[14]);
        assert_eq!(FIRST_COLUMN.iter().filter(|&&b| b).count(), 8);
    }

    #[test]
    fn test_rank_tables() {
        assert!(EIGHTH_RANK[0] && EIGHTH_RANK[7] && !EIGHTH_RANK[8]);
        assert!(FIRST_RANK[56] && FIRST_RANK[63]);
        assert!(SECOND_RANK[48] && SEVENTH_RANK[15]);
        for row in ROWS.iter() {
            assert_eq!(row.iter().filter(|&&b| b).count(), 8);
        }
    }

    #[test]
    fn test_compass_offsets() {
        assert_eq!(NW, -9);
        assert_eq!(NO, -7);
        assert_eq!(SW, 7);
        assert_eq!(SO, 9);
        assert!(KNIGHT_OFFSETS.contains(&-17) && KNIGHT_OFFSETS.contains(&6));
    }

    #[test]
    fn test_algebraic_corners() {
        assert_eq!(ALGEBRAIC_NOTATION[0], "a8");
        assert_eq!(ALGEBRAIC_NOTATION[7], "h8");
        assert_eq!(ALGEBRAIC_NOTATION[56], "a1");
        assert_eq!(ALGEBRAIC_NOTATION[63], "h1");
    }
}
