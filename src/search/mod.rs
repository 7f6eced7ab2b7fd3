//! Time-bounded adversarial search.
//!
//! Two engines share one state-space walk: fixed-depth [`minimax`] and an
//! alpha-beta searcher ([`alpha_beta`]) driven by [`iterative_deepening`].
//! Both are pure depth-first recursions over immutable forecast states; no
//! tree is materialized and no positions are cached.
//!
//! Every recursive entry point polls the turn clock through a
//! [`TimeoutGuard`] before doing anything else and unwinds with
//! [`SearchError::Timeout`] once the budget runs dry. The unwinding `Result`
//! short-circuits all enclosing sibling evaluations, so a caller always gets
//! either a fully computed answer or the best fully completed earlier one.

mod alpha_beta;
mod minimax;
mod traits;


pub use alpha_beta::{alpha_beta, iterative_deepening};
pub use minimax::minimax;
pub use traits::{Evaluator, GameState, TimeSource};

use crate::moves::Move;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The turn clock dropped below the configured threshold. The in-progress
    /// depth has no usable result; recovery happens at the top-level caller.
    #[error("search aborted: turn clock below threshold")]
    Timeout,
}

/// Polls the remaining turn time and aborts the search once it runs out.
///
/// [`TimeoutGuard::check`] must be the first action of every recursive search
/// call, before any move generation: recursion gets deep, and clock drift has
/// to be caught at the frame boundary.
pub struct TimeoutGuard<'a> {
    clock: &'a dyn TimeSource,
    threshold_ms: f64,
}

impl<'a> TimeoutGuard<'a> {
    pub fn new(clock: &'a dyn TimeSource, threshold_ms: f64) -> Self {
        Self {
            clock,
            threshold_ms,
        }
    }

    /// Fails with [`SearchError::Timeout`] once the remaining time falls
    /// below the threshold. Negative clock readings fail like any other
    /// below-threshold value.
    #[inline]
    pub fn check(&self) -> Result<(), SearchError> {
        if self.clock.time_left_ms() < self.threshold_ms {
            Err(SearchError::Timeout)
        } else {
            Ok(())
        }
    }
}

/// Updates the running best score and move when `score` is strictly better.
/// Ties keep the earliest candidate; the first candidate is always accepted,
/// so a nonempty candidate list can never end in "no move".
fn update_best(
    score: f64,
    candidate: Move,
    maximizing: bool,
    best_score: &mut f64,
    best_move: &mut Option<Move>,
) -> bool {
    let is_better = match best_move {
        None => true,
        Some(_) if maximizing => score > *best_score,
        Some(_) => score < *best_score,
    };

    if is_better {
        *best_score = score;
        *best_move = Some(candidate);
    }
    is_better
}
