//! Alpha-beta pruned search with iterative deepening.
//!
//! `max_value` and `min_value` carry the running `[alpha, beta]` window:
//! alpha is the best score the maximizer can already force, beta the best the
//! minimizer can. A subtree whose value escapes the window cannot influence
//! the root decision and its remaining siblings are skipped. Pruning never
//! changes the computed root value, only how much of the tree is visited.
//!
//! The root pass reports a move rather than a value, and the
//! [`iterative_deepening`] driver turns it into an anytime algorithm bounded
//! by the wall clock instead of a fixed ply count.

use log::debug;

use super::{update_best, Evaluator, GameState, SearchError, TimeoutGuard};
use crate::moves::{Move, SENTINEL_MOVE};

/// Root alpha-beta pass at a fixed depth: one maximizing layer over the
/// agent's legal moves, each scored by [`min_value`].
///
/// Alpha widens with every sibling value before the best-move comparison
/// runs. That only tightens pruning in later sibling subtrees; move selection
/// is driven by its own strictly-greater running maximum, so the first of
/// several equal-valued moves wins.
pub fn alpha_beta<S, E>(
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
    guard.check()?;

    let candidates = state.legal_moves();
    if candidates.is_empty() {
        return Ok(SENTINEL_MOVE);
    }

    let horizon = depth.saturating_sub(1);
    let mut alpha = f64::NEG_INFINITY;
    let beta = f64::INFINITY;
    let mut best_score = f64::NEG_INFINITY;
    let mut best_move = None;

    for &candidate in candidates.iter() {
        let forecast = state.forecast_move(candidate);
        let score = min_value(&forecast, horizon, agent, evaluator, guard, alpha, beta)?;
        alpha = alpha.max(score);
        update_best(score, candidate, true, &mut best_score, &mut best_move);
    }

    Ok(best_move.unwrap_or(SENTINEL_MOVE))
}

/// Maximizing interior layer. Returns a value only; interior nodes never
/// report moves.
pub(super) fn max_value<S, E>(
    state: &S,
    depth: u8,
    agent: S::Player,
    evaluator: &E,
    guard: &TimeoutGuard,
    mut alpha: f64,
    beta: f64,
) -> Result<f64, SearchError>
where
    S: GameState,
    E: Evaluator<S>,
{
    guard.check()?;

    if depth == 0 {
        return Ok(evaluator.score(state, agent));
    }

    let candidates = state.legal_moves();
    if candidates.is_empty() {
        return Ok(evaluator.score(state, agent));
    }

    let mut value = f64::NEG_INFINITY;
    for &candidate in candidates.iter() {
        let forecast = state.forecast_move(candidate);
        value = value.max(min_value(
            &forecast,
            depth - 1,
            agent,
            evaluator,
            guard,
            alpha,
            beta,
        )?);
        if value >= beta {
            return Ok(value);
        }
        alpha = alpha.max(value);
    }

    Ok(value)
}

/// Minimizing interior layer, the mirror image of [`max_value`].
pub(super) fn min_value<S, E>(
    state: &S,
    depth: u8,
    agent: S::Player,
    evaluator: &E,
    guard: &TimeoutGuard,
    alpha: f64,
    mut beta: f64,
) -> Result<f64, SearchError>
where
    S: GameState,
    E: Evaluator<S>,
{
    guard.check()?;

    if depth == 0 {
        return Ok(evaluator.score(state, agent));
    }

    let candidates = state.legal_moves();
    if candidates.is_empty() {
        return Ok(evaluator.score(state, agent));
    }

    let mut value = f64::INFINITY;
    for &candidate in candidates.iter() {
        let forecast = state.forecast_move(candidate);
        value = value.min(max_value(
            &forecast,
            depth - 1,
            agent,
            evaluator,
            guard,
            alpha,
            beta,
        )?);
        if value <= alpha {
            return Ok(value);
        }
        beta = beta.min(value);
    }

    Ok(value)
}

/// Anytime driver: runs the root pass at depth 1, 2, 3, ... up to the state's
/// ply bound, overwriting the best move after each fully completed depth.
///
/// A timeout stops the loop and discards the aborted depth, so the move
/// played always comes from the deepest search that finished in full. The
/// sentinel comes back only when no legal move exists or not even depth 1
/// fits the budget.
pub fn iterative_deepening<S, E>(
    state: &S,
    agent: S::Player,
    evaluator: &E,
    guard: &TimeoutGuard,
) -> Move
where
    S: GameState,
    E: Evaluator<S>,
{
    let mut best_move = SENTINEL_MOVE;

    for depth in 1..=state.max_ply().max(1) {
        match alpha_beta(state, depth, agent, evaluator, guard) {
            Ok(game_move) => {
                debug!("depth {} completed: best move {}", depth, game_move);
                best_move = game_move;
            }
            Err(SearchError::Timeout) => {
                debug!("timeout at depth {}, keeping depth {} result", depth, depth - 1);
                break;
            }
        }
    }

    best_move
}
