//! Shared pieces of the two game-tree searches.

use std::time::Duration;

use crate::eval::Evaluator;
use crate::movegen::Move;

/// Result of a game-tree search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Minimax value of the root, from White's point of view.
    pub score: i32,
    /// The move achieving `score`, or `None` if the root was a leaf (depth 0
    /// or no legal move).
    pub best_move: Option<Move>,
    /// Number of positions visited, root included.
    pub nodes: u64,
    /// Wall time spent inside the search.
    pub elapsed: Duration,
}

/// Per-search state threaded through the recursion.
pub(crate) struct Tree<'a, E> {
    pub(crate) eval: &'a E,
    pub(crate) nodes: u64,
}

impl<'a, E: Evaluator> Tree<'a, E> {
    pub(crate) fn new(eval: &'a E) -> Self {
        Self { eval, nodes: 0 }
    }
}

/// Whether `score` beats `best` for the player to move. Ties keep the
/// earlier move.
#[inline]
pub(crate) fn improves(maximizing: bool, score: i32, best: i32) -> bool {
    if maximizing { score > best } else { score < best }
}

/// The value a node starts from before any child has been seen.
#[inline]
pub(crate) fn worst_for(maximizing: bool) -> i32 {
    if maximizing { i32::MIN } else { i32::MAX }
}
