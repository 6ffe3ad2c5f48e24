//! Material evaluation
//!
//! Counts the piece values of one side, king included.

use crate::player::Player;

/// Sum of the values of a side's active pieces
pub fn material(player: &Player<'_>) -> i32 {
    player.active_pieces().iter().map(|piece| piece.value()).sum()
}
