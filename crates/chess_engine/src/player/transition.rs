//! Outcome of one move attempt

use std::borrow::Cow;

use crate::moves::Move;
use crate::position::Position;

/// Whether an attempted move was played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveStatus {
    Done,
    IllegalMove,
    LeavesPlayerInCheck,
}

impl MoveStatus {
    pub fn is_done(self) -> bool {
        self == MoveStatus::Done
    }
}

/// Original position, resulting position, attempted move and status
///
/// When the attempt fails the resulting position borrows the original, so a rejected move costs
/// no board construction.
#[derive(Debug, Clone)]
pub struct MoveTransition<'a> {
    from: &'a Position,
    to: Cow<'a, Position>,
    mv: Move,
    status: MoveStatus,
}

impl<'a> MoveTransition<'a> {
    pub(crate) fn new(
        from: &'a Position,
        to: Cow<'a, Position>,
        mv: Move,
        status: MoveStatus,
    ) -> Self {
        MoveTransition {
            from,
            to,
            mv,
            status,
        }
    }

    pub fn from_position(&self) -> &'a Position {
        self.from
    }

    pub fn to_position(&self) -> &Position {
        &self.to
    }

    /// Resulting position, cloning the original if the attempt failed
    pub fn into_position(self) -> Position {
        self.to.into_owned()
    }

    pub fn mv(&self) -> Move {
        self.mv
    }

    pub fn status(&self) -> MoveStatus {
        self.status
    }
}
