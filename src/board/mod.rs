pub mod error;

mod display;

#[cfg(test)]
mod tests;

use crate::moves::{Move, MoveList, SENTINEL_MOVE};
use crate::search::GameState;
use error::BoardError;

pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 7;

/// The two competitors. Player one moves first.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    fn index(&self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

const QUEEN_DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// State of one Isolation game: which cells are still open, where each player
/// stands, and whose turn it is.
///
/// A cell is blocked from the moment a player enters it and stays blocked for
/// the rest of the game, which covers both rules at once: nobody may land on
/// an occupied cell, and a vacated cell never reopens.
///
/// The board is a value type. [`Board::forecast_move`] clones and advances the
/// clone, so a search can explore a subtree without ever touching the state
/// owned by an enclosing call.
#[derive(Clone)]
pub struct Board {
    width: usize,
    height: usize,
    blocked: Vec<bool>,
    locations: [Option<Move>; 2],
    turn: Player,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Board {
    /// An empty board with both players still off the grid. While a player is
    /// unplaced, every open cell is a legal first move.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            blocked: vec![false; width * height],
            locations: [None, None],
            turn: Player::One,
        }
    }

    /// Parses a position diagram: one line per row, cells separated by
    /// whitespace. `.` is an open cell, `x` a blocked one, `1` and `2` the
    /// players. The active player defaults to player one; use
    /// [`Board::set_turn`] for positions where player two is on the move.
    pub fn from_diagram(diagram: &str) -> Result<Board, BoardError> {
        let rows: Vec<Vec<&str>> = diagram
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.split_whitespace().collect())
            .collect();

        let height = rows.len();
        if height == 0 {
            return Err(BoardError::EmptyDiagram);
        }
        let width = rows[0].len();

        let mut board = Board::new(width, height);
        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(BoardError::RaggedDiagram {
                    row: row_index,
                    expected: width,
                    found: row.len(),
                });
            }
            for (col_index, symbol) in row.iter().enumerate() {
                let cell = Move::new(row_index as i32, col_index as i32);
                match *symbol {
                    "." => (),
                    "x" => board.block(cell),
                    "1" => board.put_player(Player::One, cell)?,
                    "2" => board.put_player(Player::Two, cell)?,
                    other => {
                        return Err(BoardError::UnknownCellSymbol {
                            symbol: other.to_string(),
                        })
                    }
                }
            }
        }

        Ok(board)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn set_turn(&mut self, player: Player) {
        self.turn = player;
    }

    /// Where `player` currently stands, or `None` before its opening move.
    pub fn location(&self, player: Player) -> Option<Move> {
        self.locations[player.index()]
    }

    /// Places `player` on an open cell. Used for position setup; moves made
    /// during play go through [`Board::forecast_move`].
    pub fn put_player(&mut self, player: Player, cell: Move) -> Result<(), BoardError> {
        if !self.in_bounds(cell) {
            return Err(BoardError::OutOfBounds {
                cell,
                width: self.width,
                height: self.height,
            });
        }
        if self.blocked[self.cell_index(cell)] {
            return Err(BoardError::CellUnavailable { cell });
        }
        if self.locations[player.index()].is_some() {
            return Err(BoardError::PlayerAlreadyPlaced { player });
        }
        self.block(cell);
        self.locations[player.index()] = Some(cell);
        Ok(())
    }

    pub fn in_bounds(&self, cell: Move) -> bool {
        cell.row >= 0
            && cell.col >= 0
            && (cell.row as usize) < self.height
            && (cell.col as usize) < self.width
    }

    /// True for cells that are on the board and not yet blocked.
    pub fn is_open(&self, cell: Move) -> bool {
        self.in_bounds(cell) && !self.blocked[self.cell_index(cell)]
    }

    /// Cells still available anywhere on the board.
    pub fn blank_count(&self) -> usize {
        self.blocked.iter().filter(|&&blocked| !blocked).count()
    }

    /// Legal moves for `player`, regardless of whose turn it is: every open
    /// cell before the player's opening move, queen rays from its location
    /// afterwards.
    pub fn legal_moves_for(&self, player: Player) -> MoveList {
        match self.locations[player.index()] {
            None => self.open_cells(),
            Some(origin) => self.queen_moves_from(origin),
        }
    }

    /// Applies a move for the active player and returns the resulting board
    /// with the turn advanced. The original board is left untouched.
    pub fn forecast_move(&self, game_move: Move) -> Board {
        debug_assert!(
            self.legal_moves_for(self.turn).contains(&game_move),
            "forecast of illegal move {:?} for {:?}",
            game_move,
            self.turn
        );
        let mut next = self.clone();
        next.block(game_move);
        next.locations[next.turn.index()] = Some(game_move);
        next.turn = next.turn.opponent();
        next
    }

    /// Win/loss value of a finished game from `player`'s perspective, `None`
    /// while the active player can still move.
    pub fn utility(&self, player: Player) -> Option<f64> {
        if !self.legal_moves_for(self.turn).is_empty() {
            return None;
        }
        if self.turn == player {
            Some(f64::NEG_INFINITY)
        } else {
            Some(f64::INFINITY)
        }
    }

    fn cell_index(&self, cell: Move) -> usize {
        cell.row as usize * self.width + cell.col as usize
    }

    fn block(&mut self, cell: Move) {
        let index = self.cell_index(cell);
        self.blocked[index] = true;
    }

    fn open_cells(&self) -> MoveList {
        let mut cells = MoveList::new();
        for row in 0..self.height as i32 {
            for col in 0..self.width as i32 {
                let cell = Move::new(row, col);
                if self.is_open(cell) {
                    cells.push(cell);
                }
            }
        }
        cells
    }

    fn queen_moves_from(&self, origin: Move) -> MoveList {
        let mut moves = MoveList::new();
        for &(row_step, col_step) in QUEEN_DIRECTIONS.iter() {
            let mut cell = Move::new(origin.row + row_step, origin.col + col_step);
            while self.is_open(cell) {
                moves.push(cell);
                cell = Move::new(cell.row + row_step, cell.col + col_step);
            }
        }
        moves
    }
}

impl GameState for Board {
    type Player = Player;

    fn active_player(&self) -> Player {
        self.turn
    }

    fn opponent(&self, player: Player) -> Player {
        player.opponent()
    }

    fn legal_moves(&self) -> MoveList {
        self.legal_moves_for(self.turn)
    }

    fn forecast_move(&self, game_move: Move) -> Board {
        Board::forecast_move(self, game_move)
    }

    fn player_location(&self, player: Player) -> Move {
        self.location(player).unwrap_or(SENTINEL_MOVE)
    }

    fn max_ply(&self) -> u8 {
        (self.width * self.height).min(u8::MAX as usize) as u8
    }
}
