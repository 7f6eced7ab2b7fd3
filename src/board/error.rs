use thiserror::Error;

use crate::board::Player;
use crate::moves::Move;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("cell {cell:?} is outside the {width}x{height} board")]
    OutOfBounds {
        cell: Move,
        width: usize,
        height: usize,
    },
    #[error("cannot put a player on cell {cell:?}, it is already blocked")]
    CellUnavailable { cell: Move },
    #[error("player {player:?} is already on the board")]
    PlayerAlreadyPlaced { player: Player },
    #[error("board diagram has no rows")]
    EmptyDiagram,
    #[error("board diagram row {row} has {found} cells, expected {expected}")]
    RaggedDiagram {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unrecognized cell symbol {symbol:?} in board diagram")]
    UnknownCellSymbol { symbol: String },
}
