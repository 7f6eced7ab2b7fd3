//! Heuristic evaluation strategies for Isolation positions.
//!
//! Every strategy resolves finished games through [`Board::utility`] before
//! applying its mobility formula, so won and lost positions dominate any
//! heuristic score. All formulas count queen moves for each player and differ
//! only in how they weigh the agent's mobility against the opponent's.

use crate::board::{Board, Player};
use crate::search::Evaluator;

fn mobility(board: &Board, player: Player) -> (f64, f64) {
    let own = board.legal_moves_for(player).len() as f64;
    let opponent = board.legal_moves_for(player.opponent()).len() as f64;
    (own, opponent)
}

/// Weighs the agent's own mobility twice as heavily as the opponent's:
/// `2 * own - opponent`.
#[derive(Clone, Copy, Default, Debug)]
pub struct Defensive;

impl Evaluator<Board> for Defensive {
    fn score(&self, board: &Board, player: Player) -> f64 {
        if let Some(utility) = board.utility(player) {
            return utility;
        }
        let (own, opponent) = mobility(board, player);
        2.0 * own - opponent
    }
}

/// Weighs restricting the opponent twice as heavily as staying mobile:
/// `own - 2 * opponent`.
#[derive(Clone, Copy, Default, Debug)]
pub struct Aggressive;

impl Evaluator<Board> for Aggressive {
    fn score(&self, board: &Board, player: Player) -> f64 {
        if let Some(utility) = board.utility(player) {
            return utility;
        }
        let (own, opponent) = mobility(board, player);
        own - 2.0 * opponent
    }
}

/// Plays the opening aggressively and the endgame defensively, switching once
/// the number of blank cells drops to `cutoff`. The original tuning used 35
/// blanks on a 7x7 board.
#[derive(Clone, Copy, Debug)]
pub struct Staged {
    pub cutoff: usize,
}

impl Default for Staged {
    fn default() -> Self {
        Self { cutoff: 35 }
    }
}

impl Evaluator<Board> for Staged {
    fn score(&self, board: &Board, player: Player) -> f64 {
        if let Some(utility) = board.utility(player) {
            return utility;
        }
        let (own, opponent) = mobility(board, player);
        if board.blank_count() > self.cutoff {
            own - 3.0 * opponent
        } else {
            3.0 * own - opponent
        }
    }
}
