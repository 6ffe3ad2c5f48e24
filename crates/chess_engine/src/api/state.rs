//! Game state queries and AI move generation

use instant::Instant;
use tracing::{debug, info};

use crate::moves::Move;
use crate::position::Position;
use crate::search::{BestMoveTracker, MiniMax, MoveStrategy};

/// Status of the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameState {
    Playing,
    Check,
    Checkmate,
    Stalemate,
}

impl GameState {
    pub fn is_over(self) -> bool {
        matches!(self, GameState::Checkmate | GameState::Stalemate)
    }
}

/// Get current game state for the side to move
pub fn get_game_state(position: &Position) -> GameState {
    let player = position.current_player();
    match (player.is_in_check(), player.has_escape_moves()) {
        (true, false) => GameState::Checkmate,
        (false, false) => GameState::Stalemate,
        (true, true) => GameState::Check,
        (false, true) => GameState::Playing,
    }
}

/// Best move for the side to move, searching `depth` plies
///
/// # Arguments
///
/// * `position` - The position to search from
/// * `depth` - Plies to look ahead; `0` is treated as `1`
///
/// Returns `None` when the side to move has no playable move.
pub fn best_move(position: &Position, depth: u32) -> Option<Move> {
    MiniMax::new(depth).execute(position)
}

/// Get AI's response to current position
///
/// Chooses the same move as [`best_move`], yielding to the executor between first-ply moves.
pub async fn reply(position: &Position, depth: u32) -> Option<Move> {
    let start = Instant::now();
    let search = MiniMax::new(depth);
    let player = position.current_player();
    info!(
        "Searching {} plies for {} in the background",
        search.depth(),
        player.alliance()
    );

    let mut nodes = 0u64;
    let mut tracker = BestMoveTracker::new(player.alliance());
    for mv in player.legal_moves() {
        if let Some(value) = search.score_root_move(position, mv, &mut nodes) {
            debug!("{} scores {}", mv, value);
            tracker.offer(*mv, value);
        }
        futures_lite::future::yield_now().await;
    }

    tracker.finish(start, nodes)
}
