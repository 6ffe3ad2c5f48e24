//! Static position evaluation
//!
//! Scores are from White's point of view: positive favours White, negative favours Black.
//!
//! ## Module Organization
//!
//! - `material` - Material count for one side
//! - `standard` - [`StandardBoardEvaluator`]: material, mobility, castle, check and mate bonuses

mod material;
mod standard;

pub use material::material;
pub use standard::{depth_bonus, StandardBoardEvaluator};

use crate::position::Position;

/// Scores a position with `depth` plies of search still remaining
pub trait BoardEvaluator {
    fn evaluate(&self, position: &Position, depth: u32) -> i32;
}
