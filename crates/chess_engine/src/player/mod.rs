//! Side-to-move view - legality, check, checkmate and stalemate
//!
//! A [`Player`] borrows a [`Position`] and one [`Alliance`]. It owns nothing: every answer is
//! read from data the position computed at construction, or derived by attempting moves.
//!
//! ## Module Organization
//!
//! - `castling` - Castle preconditions and castle move construction
//! - `transition` - [`MoveTransition`] and [`MoveStatus`], the outcome of one move attempt

pub(crate) mod castling;
mod transition;

pub use transition::{MoveStatus, MoveTransition};

use std::borrow::Cow;

use tracing::{debug, warn};

use crate::moves::Move;
use crate::position::Position;
use crate::types::*;

/// Moves in `moves` landing on `square`
pub fn calculate_attacks_on_square(
    square: Square,
    moves: &[Move],
) -> impl Iterator<Item = &Move> + '_ {
    moves.iter().filter(move |mv| mv.destination() == square)
}

/// One side of a position
#[derive(Debug, Clone, Copy)]
pub struct Player<'a> {
    position: &'a Position,
    alliance: Alliance,
}

impl<'a> Player<'a> {
    pub(crate) fn new(position: &'a Position, alliance: Alliance) -> Self {
        Player { position, alliance }
    }

    pub fn alliance(&self) -> Alliance {
        self.alliance
    }

    pub fn position(&self) -> &'a Position {
        self.position
    }

    /// Pseudo-legal moves plus castles; self-check is filtered by [`Player::make_move`]
    pub fn legal_moves(&self) -> &'a [Move] {
        &self.position.side(self.alliance).legal_moves
    }

    pub fn king(&self) -> Piece {
        self.position.side(self.alliance).king
    }

    pub fn active_pieces(&self) -> &'a [Piece] {
        self.position.active_pieces(self.alliance)
    }

    pub fn opponent(&self) -> Player<'a> {
        Player::new(self.position, self.alliance.opponent())
    }

    pub fn is_in_check(&self) -> bool {
        self.position.side(self.alliance).in_check
    }

    /// Membership in the legal set; the promotion kind is not part of the comparison
    pub fn is_move_legal(&self, mv: &Move) -> bool {
        self.legal_moves().iter().any(|legal| legal.matches(mv))
    }

    /// Attempt a move from this side's perspective
    ///
    /// The move must be a member of the legal set, and after applying it the mover's king must not
    /// be attacked by the opponent's moves. On failure the transition holds the unchanged position.
    pub fn make_move(&self, mv: &Move) -> MoveTransition<'a> {
        if !self.is_move_legal(mv) {
            return MoveTransition::new(
                self.position,
                Cow::Borrowed(self.position),
                *mv,
                MoveStatus::IllegalMove,
            );
        }

        let next = match mv.apply(self.position) {
            Ok(next) => next,
            Err(err) => {
                warn!("Legal move {} failed to apply: {}", mv, err);
                return MoveTransition::new(
                    self.position,
                    Cow::Borrowed(self.position),
                    *mv,
                    MoveStatus::IllegalMove,
                );
            }
        };

        let king_square = next.player(self.alliance).king().square();
        let attacker = next.player(self.alliance.opponent());
        if calculate_attacks_on_square(king_square, attacker.legal_moves())
            .next()
            .is_some()
        {
            debug!("{} rejected: leaves {} king attacked", mv, self.alliance);
            return MoveTransition::new(
                self.position,
                Cow::Borrowed(self.position),
                *mv,
                MoveStatus::LeavesPlayerInCheck,
            );
        }

        MoveTransition::new(self.position, Cow::Owned(next), *mv, MoveStatus::Done)
    }

    /// Whether any legal move survives the leaves-in-check test
    pub fn has_escape_moves(&self) -> bool {
        self.legal_moves()
            .iter()
            .any(|mv| self.make_move(mv).status().is_done())
    }

    pub fn is_in_checkmate(&self) -> bool {
        self.is_in_check() && !self.has_escape_moves()
    }

    pub fn is_in_stalemate(&self) -> bool {
        !self.is_in_check() && !self.has_escape_moves()
    }

    pub fn is_castled(&self) -> bool {
        self.king().is_castled()
    }

    pub fn is_king_side_castle_capable(&self) -> bool {
        self.king().is_king_side_castle_capable()
    }

    pub fn is_queen_side_castle_capable(&self) -> bool {
        self.king().is_queen_side_castle_capable()
    }
}
