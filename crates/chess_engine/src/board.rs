//! Board utilities and helper functions
//!
//! Provides fundamental square operations used throughout the engine:
//! - Square validation
//! - Row/column lookup
//! - Algebraic notation in both directions

use crate::constants::*;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::*;

/// Check if an index is a square on the board
#[inline]
pub fn is_valid_square(n: i32) -> bool {
    (0..NUM_SQUARES as i32).contains(&n)
}

/// Convert a raw index into a square, rejecting anything off the board
pub fn square_from_index(n: i32) -> ChessEngineResult<Square> {
    if is_valid_square(n) {
        Ok(n as Square)
    } else {
        Err(ChessEngineError::InvalidSquare { square: n })
    }
}

/// Row of a square (0 = eighth rank)
#[inline]
pub fn row(square: Square) -> i8 {
    square / SQUARES_PER_ROW as i8
}

/// Column of a square (0 = a-file)
#[inline]
pub fn column(square: Square) -> i8 {
    square % SQUARES_PER_ROW as i8
}

/// Convert column and row to a square
#[inline]
pub fn square_at(column: i8, row: i8) -> Square {
    row * SQUARES_PER_ROW as i8 + column
}

/// Algebraic name of a square, e.g. `60 -> "e1"`
///
/// # Panics
///
/// Panics if `square` is outside 0-63. Squares stored in a position are always valid.
#[inline]
pub fn algebraic(square: Square) -> &'static str {
    ALGEBRAIC_NOTATION[square as usize]
}

/// Square named by algebraic notation, e.g. `"e1" -> 60`
pub fn square_from_algebraic(notation: &str) -> ChessEngineResult<Square> {
    let trimmed = notation.trim();
    ALGEBRAIC_NOTATION
        .iter()
        .position(|name| name.eq_ignore_ascii_case(trimmed))
        .map(|index| index as Square)
        .ok_or_else(|| ChessEngineError::UnknownNotation {
            notation: notation.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_square_bounds() {
        assert!(is_valid_square(0));
        assert!(is_valid_square(63));
        assert!(!is_valid_square(-1));
        assert!(!is_valid_square(64));
    }

    #[test]
    fn test_square_from_index_rejects_out_of_range() {
        assert_eq!(square_from_index(12), Ok(12));
        assert_eq!(
            square_from_index(70),
            Err(ChessEngineError::InvalidSquare { square: 70 })
        );
    }

    #[test]
    fn test_row_and_column() {
        assert_eq!(row(60), 7);
        assert_eq!(column(60), 4);
        assert_eq!(square_at(4, 7), 60);
    }

    #[test]
    fn test_algebraic_round_trip_every_square() {
        for square in 0..NUM_SQUARES as Square {
            let name = algebraic(square);
            assert_eq!(square_from_algebraic(name), Ok(square));
        }
    }

    #[test]
    fn test_algebraic_accepts_upper_case() {
        assert_eq!(square_from_algebraic("E4"), Ok(36));
        assert!(square_from_algebraic("z9").is_err());
        assert!(square_from_algebraic("").is_err());
    }
}
