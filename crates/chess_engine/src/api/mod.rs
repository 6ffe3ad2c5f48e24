//! Public API for the chess engine
//!
//! The surface consumed by front ends (board renderers, command lines, game loops). Callers never
//! need to know the move variant taxonomy: moves are looked up by square pairs and played against
//! the side to move.
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (new_game)
//! - `moves` - Move lookup by squares or notation, promotion choice, move execution
//! - `state` - Game state queries and best-move search (sync and async)

mod game;
mod moves;
mod state;

pub use game::new_game;
pub use moves::{
    create_move, create_move_from_indices, create_move_from_notation, create_move_with_promotion,
    make_move,
};
pub use state::{best_move, get_game_state, reply, GameState};

/// Search depth used when the caller does not pick one
pub const DEFAULT_SEARCH_DEPTH: u32 = 4;
