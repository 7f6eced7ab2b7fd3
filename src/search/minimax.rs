//! Fixed-depth minimax search.

use super::{update_best, Evaluator, GameState, SearchError, TimeoutGuard};
use crate::moves::{Move, SENTINEL_MOVE};

/// Exhaustively searches `depth` plies ahead and returns the move whose
/// subtree value is best for `agent`, the player on the move at the root.
///
/// Fixed-depth search has no partial result to fall back on, so a timeout
/// propagates to the caller, which converts it into the sentinel move.
pub fn minimax<S, E>(
    state: &S,
    depth: u8,
    agent: S::Player,
    evaluator: &E,
    guard: &TimeoutGuard,
) -> Result<Move, SearchError>
where
    S: GameState,
    E: Evaluator<S>,
{
    let (_value, game_move) = minimax_value(state, depth, agent, evaluator, guard)?;
    Ok(game_move)
}

/// One node of the minimax walk: maximizes when `agent` is on the move,
/// minimizes otherwise. Scores always come from `agent`'s perspective so
/// they stay comparable across the whole tree.
pub(super) fn minimax_value<S, E>(
    state: &S,
    depth: u8,
    agent: S::Player,
    evaluator: &E,
    guard: &TimeoutGuard,
) -> Result<(f64, Move), SearchError>
where
    S: GameState,
    E: Evaluator<S>,
{
    guard.check()?;

    if depth == 0 {
        // Leaf: the agent's own location stands in for a move. Only the
        // value is meaningful above this frame.
        let location = state.player_location(agent);
        return Ok((evaluator.score(state, agent), location));
    }

    let candidates = state.legal_moves();
    if candidates.is_empty() {
        return Ok((evaluator.score(state, agent), SENTINEL_MOVE));
    }

    let maximizing = state.active_player() == agent;
    let mut best_score = if maximizing {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    let mut best_move = None;

    for &candidate in candidates.iter() {
        let forecast = state.forecast_move(candidate);
        let (score, _reply) = minimax_value(&forecast, depth - 1, agent, evaluator, guard)?;
        update_best(score, candidate, maximizing, &mut best_score, &mut best_move);
    }

    Ok((best_score, best_move.unwrap_or(SENTINEL_MOVE)))
}
