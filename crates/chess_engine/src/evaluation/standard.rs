//! Material, mobility and king-safety evaluation
//!
//! Per side:
//! - Material value of every active piece
//! - One point per legal move (mobility)
//! - [`CASTLE_BONUS`] if the side's king has castled
//! - [`CHECK_BONUS`] if the opponent is in check
//! - [`CHECK_MATE_BONUS`] scaled by [`depth_bonus`] if the opponent is checkmated
//!
//! The position score is White's side score minus Black's.

use super::material::material;
use super::BoardEvaluator;
use crate::constants::*;
use crate::player::Player;
use crate::position::Position;

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardBoardEvaluator;

impl StandardBoardEvaluator {
    fn score_player(player: &Player<'_>, depth: u32) -> i32 {
        material(player)
            + mobility(player)
            + castled(player)
            + check(player)
            + checkmate(player, depth)
    }
}

impl BoardEvaluator for StandardBoardEvaluator {
    fn evaluate(&self, position: &Position, depth: u32) -> i32 {
        Self::score_player(&position.white_player(), depth)
            - Self::score_player(&position.black_player(), depth)
    }
}

/// Multiplier for a mate found with `depth` plies remaining
///
/// A mate reached with more search depth left (fewer plies from the root) earns the larger bonus.
pub fn depth_bonus(depth: u32) -> i32 {
    if depth == 0 {
        1
    } else {
        DEPTH_BONUS_VALUE.saturating_mul(i32::try_from(depth).unwrap_or(i32::MAX))
    }
}

fn mobility(player: &Player<'_>) -> i32 {
    player.legal_moves().len() as i32
}

fn castled(player: &Player<'_>) -> i32 {
    if player.is_castled() {
        CASTLE_BONUS
    } else {
        0
    }
}

fn check(player: &Player<'_>) -> i32 {
    if player.opponent().is_in_check() {
        CHECK_BONUS
    } else {
        0
    }
}

fn checkmate(player: &Player<'_>, depth: u32) -> i32 {
    if player.opponent().is_in_checkmate() {
        CHECK_MATE_BONUS.saturating_mul(depth_bonus(depth))
    } else {
        0
    }
}
