//! Fixed-depth minimax
//!
//! White maximizes and Black minimizes. A node is terminal when no depth remains or when the side
//! to move has no move that survives the leaves-in-check test (checkmate or stalemate); terminal
//! nodes are scored by the evaluator with the remaining depth, so mates found closer to the root
//! are worth more.
//!
//! At the root every first-ply move is scored separately and the **last** move reaching the
//! extreme value wins ties, which makes the choice reproducible for a fixed move order.

use instant::Instant;
use tracing::{debug, info};

use super::MoveStrategy;
use crate::evaluation::{BoardEvaluator, StandardBoardEvaluator};
use crate::moves::Move;
use crate::position::Position;
use crate::types::Alliance;

/// Minimax searcher with a fixed depth
#[derive(Debug, Clone)]
pub struct MiniMax<E = StandardBoardEvaluator> {
    depth: u32,
    evaluator: E,
}

impl MiniMax<StandardBoardEvaluator> {
    /// Search `depth` plies with the standard evaluator; a depth of 0 searches one ply
    pub fn new(depth: u32) -> Self {
        Self::with_evaluator(depth, StandardBoardEvaluator)
    }
}

impl<E: BoardEvaluator> MiniMax<E> {
    pub fn with_evaluator(depth: u32, evaluator: E) -> Self {
        MiniMax {
            depth: depth.max(1),
            evaluator,
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Value of playing `mv` at the root, `None` if the move cannot be played
    pub(crate) fn score_root_move(
        &self,
        position: &Position,
        mv: &Move,
        nodes: &mut u64,
    ) -> Option<i32> {
        let transition = position.current_player().make_move(mv);
        if !transition.status().is_done() {
            return None;
        }
        Some(self.value(transition.to_position(), self.depth - 1, nodes))
    }

    /// Minimax value of `position` with `depth` plies remaining
    fn value(&self, position: &Position, depth: u32, nodes: &mut u64) -> i32 {
        *nodes += 1;
        if depth == 0 {
            return self.evaluator.evaluate(position, depth);
        }

        let player = position.current_player();
        let children: Vec<Position> = player
            .legal_moves()
            .iter()
            .map(|mv| player.make_move(mv))
            .filter(|transition| transition.status().is_done())
            .map(|transition| transition.into_position())
            .collect();

        if children.is_empty() {
            return self.evaluator.evaluate(position, depth);
        }

        let values = children
            .iter()
            .map(|child| self.value(child, depth - 1, nodes));
        let best = match player.alliance() {
            Alliance::White => values.max(),
            Alliance::Black => values.min(),
        };
        best.unwrap_or_else(|| self.evaluator.evaluate(position, depth))
    }
}

impl<E: BoardEvaluator> MoveStrategy for MiniMax<E> {
    fn execute(&self, position: &Position) -> Option<Move> {
        let start = Instant::now();
        let player = position.current_player();
        info!(
            "Searching {} plies for {} ({} candidate moves)",
            self.depth,
            player.alliance(),
            player.legal_moves().len()
        );

        let mut nodes = 0u64;
        let mut tracker = BestMoveTracker::new(player.alliance());
        for mv in player.legal_moves() {
            if let Some(value) = self.score_root_move(position, mv, &mut nodes) {
                debug!("{} scores {}", mv, value);
                tracker.offer(*mv, value);
            }
        }

        tracker.finish(start, nodes)
    }
}

/// Root bookkeeping shared by the synchronous and asynchronous searches
#[derive(Debug)]
pub(crate) struct BestMoveTracker {
    alliance: Alliance,
    best: Option<(Move, i32)>,
}

impl BestMoveTracker {
    pub(crate) fn new(alliance: Alliance) -> Self {
        BestMoveTracker {
            alliance,
            best: None,
        }
    }

    /// Record a root move's value; ties go to the later move
    pub(crate) fn offer(&mut self, mv: Move, value: i32) {
        let replaces = match self.best {
            None => true,
            Some((_, best)) => match self.alliance {
                Alliance::White => value >= best,
                Alliance::Black => value <= best,
            },
        };
        if replaces {
            self.best = Some((mv, value));
        }
    }

    pub(crate) fn finish(self, start: Instant, nodes: u64) -> Option<Move> {
        let elapsed_ms = start.elapsed().as_millis();
        match self.best {
            Some((mv, value)) => {
                info!(
                    "{} plays {} (value {}, {} nodes, {} ms)",
                    self.alliance, mv, value, nodes, elapsed_ms
                );
                Some(mv)
            }
            None => {
                info!("{} has no playable move ({} ms)", self.alliance, elapsed_ms);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::PositionConfig;
    use crate::types::*;

    #[test]
    fn test_depth_zero_searches_one_ply() {
        assert_eq!(MiniMax::new(0).depth(), 1);
        assert_eq!(MiniMax::new(3).depth(), 3);
    }

    #[test]
    fn test_tracker_prefers_last_equal_extreme() {
        let first = Move::Major {
            piece: Piece::knight(Alliance::White, 62),
            destination: 45,
        };
        let second = Move::Major {
            piece: Piece::knight(Alliance::White, 57),
            destination: 42,
        };

        let mut white = BestMoveTracker::new(Alliance::White);
        white.offer(first, 10);
        white.offer(second, 10);
        assert_eq!(white.finish(Instant::now(), 0), Some(second));

        let mut black = BestMoveTracker::new(Alliance::Black);
        black.offer(first, -5);
        black.offer(second, 3);
        assert_eq!(black.finish(Instant::now(), 0), Some(first));
    }

    #[test]
    fn test_captures_hanging_queen() {
        let config = PositionConfig::new(Alliance::White)
            .with_piece(Piece::king(Alliance::White, 60, false, false))
            .with_piece(Piece::rook(Alliance::White, 56).with_first_move(false))
            .with_piece(Piece::queen(Alliance::Black, 16))
            .with_piece(Piece::king(Alliance::Black, 7, false, false));
        let position = Position::new(config).unwrap();

        let chosen = MiniMax::new(1).execute(&position).unwrap();
        assert_eq!(chosen.destination(), 16);
        assert!(chosen.is_attack());
    }

    #[test]
    fn test_finds_mate_in_one() {
        let config = PositionConfig::new(Alliance::White)
            .with_piece(Piece::king(Alliance::White, 60, false, false))
            .with_piece(Piece::rook(Alliance::White, 56).with_first_move(false))
            .with_piece(Piece::pawn(Alliance::Black, 13).with_first_move(false))
            .with_piece(Piece::pawn(Alliance::Black, 14).with_first_move(false))
            .with_piece(Piece::pawn(Alliance::Black, 15).with_first_move(false))
            .with_piece(Piece::king(Alliance::Black, 6, false, false));
        let position = Position::new(config).unwrap();

        let chosen = MiniMax::new(2).execute(&position).unwrap();
        assert_eq!(chosen.to_string(), "Ra8");

        let next = chosen.apply(&position).unwrap();
        assert!(next.current_player().is_in_checkmate());
    }

    #[test]
    fn test_no_move_when_mated() {
        let config = PositionConfig::new(Alliance::Black)
            .with_piece(Piece::king(Alliance::Black, 6, false, false))
            .with_piece(Piece::pawn(Alliance::Black, 13).with_first_move(false))
            .with_piece(Piece::pawn(Alliance::Black, 14).with_first_move(false))
            .with_piece(Piece::pawn(Alliance::Black, 15).with_first_move(false))
            .with_piece(Piece::rook(Alliance::White, 0).with_first_move(false))
            .with_piece(Piece::king(Alliance::White, 60, false, false));
        let position = Position::new(config).unwrap();

        assert_eq!(MiniMax::new(2).execute(&position), None);
    }
}
