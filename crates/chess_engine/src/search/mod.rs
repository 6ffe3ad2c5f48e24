//! Move selection strategies
//!
//! Plain fixed-depth minimax over the legal-move tree. There is no pruning, no move ordering and
//! no caching between calls: every search builds its tree from scratch out of immutable positions.
//!
//! ## Module Organization
//!
//! - `minimax` - [`MiniMax`], the recursive tree walk and the root-move bookkeeping

mod minimax;

pub use minimax::MiniMax;
pub(crate) use minimax::BestMoveTracker;

use crate::moves::Move;
use crate::position::Position;

/// Picks a move for the side to move
pub trait MoveStrategy {
    /// The chosen move, or `None` if the side to move has no move that can be played
    fn execute(&self, position: &Position) -> Option<Move>;
}
