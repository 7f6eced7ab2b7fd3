use std::fmt;

use smallvec::SmallVec;

/// A destination cell, addressed as (row, column).
///
/// Isolation moves carry no origin: a player's piece always moves from
/// wherever it currently stands. [`SENTINEL_MOVE`] stands for "no legal move
/// available" and is what an agent returns to forfeit a turn it cannot play.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: i32,
    pub col: i32,
}

/// The "no move" sentinel. Surrounding game rules treat it as a forfeit.
pub const SENTINEL_MOVE: Move = Move { row: -1, col: -1 };

impl Move {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn is_sentinel(&self) -> bool {
        *self == SENTINEL_MOVE
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A queen on a 7x7 board peaks at 24 reachable cells, so move lists for
/// mid-sized boards never leave the stack.
pub type MoveList = SmallVec<[Move; 24]>;
