use std::fmt;

use super::{Board, Player};
use crate::moves::Move;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.height as i32 {
            for col in 0..self.width as i32 {
                let cell = Move::new(row, col);
                let symbol = if self.location(Player::One) == Some(cell) {
                    "1"
                } else if self.location(Player::Two) == Some(cell) {
                    "2"
                } else if self.is_open(cell) {
                    "."
                } else {
                    "x"
                };
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Builds a [`Board`] from row literals, one per board row. The symbols are
/// those of [`Board::from_diagram`]: `.` open, `x` blocked, `1` and `2` the
/// players. Panics on a malformed diagram, so keep it to tests and examples.
///
/// ```
/// use isolation::isolation_position;
///
/// let board = isolation_position! {
///     "1 . ."
///     ". x ."
///     ". . 2"
/// };
/// assert_eq!(board.blank_count(), 6);
/// ```
#[macro_export]
macro_rules! isolation_position {
    ($($row:literal)+) => {
        $crate::board::Board::from_diagram(concat!($($row, "\n"),+))
            .expect("invalid board diagram")
    };
}
