//! Game-playing agents: fixed-depth minimax and iterative-deepening
//! alpha-beta, sharing one configuration record.
//!
//! An agent's `get_move` is the single place a search timeout is caught: the
//! minimax agent has no partial result and forfeits with the sentinel, the
//! alpha-beta agent falls back to the deepest fully completed depth.


use log::debug;

use crate::evaluate::Defensive;
use crate::moves::{Move, SENTINEL_MOVE};
use crate::search::{
    iterative_deepening, minimax, Evaluator, GameState, SearchError, TimeSource, TimeoutGuard,
};

/// Constructor-time agent configuration, read-only during search.
#[derive(Clone, Debug)]
pub struct AgentConfig<E> {
    /// Plies to look ahead in fixed-depth search. The iterative-deepening
    /// agent ignores this and is bounded by the clock and the board size.
    pub search_depth: u8,
    /// Remaining-time threshold in milliseconds below which a search aborts.
    pub timeout_ms: f64,
    /// Heuristic used to score leaf and terminal positions.
    pub evaluator: E,
}

impl Default for AgentConfig<Defensive> {
    fn default() -> Self {
        Self {
            search_depth: 3,
            timeout_ms: 10.0,
            evaluator: Defensive,
        }
    }
}

/// Chooses moves with depth-limited minimax.
pub struct MinimaxAgent<E = Defensive> {
    config: AgentConfig<E>,
}

impl MinimaxAgent<Defensive> {
    pub fn new() -> Self {
        Self::with_config(AgentConfig::default())
    }
}

impl Default for MinimaxAgent<Defensive> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> MinimaxAgent<E> {
    pub fn with_config(config: AgentConfig<E>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AgentConfig<E> {
        &self.config
    }

    /// Returns a legal move for the active player, or the sentinel when no
    /// legal move exists or the fixed-depth search cannot finish in time.
    pub fn get_move<S>(&self, state: &S, clock: &dyn TimeSource) -> Move
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let guard = TimeoutGuard::new(clock, self.config.timeout_ms);
        let agent = state.active_player();

        match minimax(
            state,
            self.config.search_depth,
            agent,
            &self.config.evaluator,
            &guard,
        ) {
            Ok(game_move) => game_move,
            Err(SearchError::Timeout) => {
                debug!("fixed-depth search timed out, forfeiting the turn");
                SENTINEL_MOVE
            }
        }
    }
}

/// Chooses moves with iterative-deepening alpha-beta search: an anytime
/// agent that plays the deepest fully completed answer.
pub struct AlphaBetaAgent<E = Defensive> {
    config: AgentConfig<E>,
}

impl AlphaBetaAgent<Defensive> {
    pub fn new() -> Self {
        Self::with_config(AgentConfig::default())
    }
}

impl Default for AlphaBetaAgent<Defensive> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> AlphaBetaAgent<E> {
    pub fn with_config(config: AgentConfig<E>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AgentConfig<E> {
        &self.config
    }

    /// Returns a legal move for the active player whenever at least depth 1
    /// completes within the budget; the sentinel otherwise.
    pub fn get_move<S>(&self, state: &S, clock: &dyn TimeSource) -> Move
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let guard = TimeoutGuard::new(clock, self.config.timeout_ms);
        let agent = state.active_player();

        iterative_deepening(state, agent, &self.config.evaluator, &guard)
    }
}
