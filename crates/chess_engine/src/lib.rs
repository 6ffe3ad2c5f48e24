//! # Chess Engine - Immutable Rules Core with Minimax Search
//!
//! A chess rules engine over a flat 64-square board plus a fixed-depth minimax searcher.
//!
//! ## Architecture
//!
//! - **Positions are values.** A [`Position`] is built once, computes both sides' moves and check
//!   status at construction, and is never mutated. Playing a move returns a new position, so the
//!   previous one stays valid for history and tree search.
//! - **Moves are a closed enum.** [`Move::apply`] is a match over the variants; promotion carries
//!   its underlying push or capture inline.
//! - **Legality is two-phase.** Generators emit pseudo-legal moves; [`Player::make_move`] applies
//!   a move and rejects it if the mover's king ends up attacked.
//!
//! ## Quick Start
//!
//! ```rust
//! use chess_engine::{api, MoveStatus};
//!
//! let position = api::new_game();
//! let mv = api::create_move_from_notation(&position, "e2", "e4").unwrap();
//! let transition = api::make_move(&position, &mv);
//! assert_eq!(transition.status(), MoveStatus::Done);
//!
//! let reply = api::best_move(transition.to_position(), 1);
//! assert!(reply.is_some());
//! ```

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod move_gen;
pub mod moves;
pub mod player;
pub mod position;
pub mod search;
pub mod types;

pub use error::{ChessEngineError, ChessEngineResult};
pub use evaluation::{BoardEvaluator, StandardBoardEvaluator};
pub use moves::Move;
pub use player::{MoveStatus, MoveTransition, Player};
pub use position::{Position, PositionConfig};
pub use search::{MiniMax, MoveStrategy};
pub use types::{Alliance, Piece, PieceKind, Square, NO_SQUARE};
