use std::time::Instant;

use log::{debug, trace};

use crate::board::Board;
use crate::eval::{Evaluator, Material};
use crate::movegen::Move;
use crate::piece::Side;
use crate::search::{SearchOutcome, Tree, improves, worst_for};

/// Exhaustive minimax search to `depth` plies with the [`Material`] evaluator.
///
/// `side` moves at the root; `maximizing` says whether it wants high scores.
/// Each ply flips both. A depth of 0, or a root where `side` cannot move,
/// returns the static evaluation and no move.
pub fn minimax(board: &Board, depth: u32, maximizing: bool, side: Side) -> SearchOutcome {
    minimax_with(&Material, board, depth, maximizing, side)
}

/// [`minimax`] with a custom evaluator.
pub fn minimax_with<E: Evaluator>(
    eval: &E,
    board: &Board,
    depth: u32,
    maximizing: bool,
    side: Side,
) -> SearchOutcome {
    let started = Instant::now();
    let mut tree = Tree::new(eval);
    let (score, best_move) = tree.minimax(board, depth, maximizing, side);
    let elapsed = started.elapsed();

    debug!(
        "minimax: depth {depth} for {side}: score {score}, best {best_move:?}, {} nodes, {elapsed:?}",
        tree.nodes
    );
    SearchOutcome {
        score,
        best_move,
        nodes: tree.nodes,
        elapsed,
    }
}

impl<E: Evaluator> Tree<'_, E> {
    pub(crate) fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        maximizing: bool,
        side: Side,
    ) -> (i32, Option<Move>) {
        self.nodes += 1;
        if depth == 0 {
            return (self.eval.evaluate(board), None);
        }
        let moves = board.legal_moves(side);
        if moves.is_empty() {
            return (self.eval.evaluate(board), None);
        }
        trace!("minimax: depth {depth}, {side} has {} moves", moves.len());

        let mut best_score = worst_for(maximizing);
        let mut best_move = None;
        for mv in moves {
            let child = board.apply_move(&mv);
            let (score, _) = self.minimax(&child, depth - 1, !maximizing, side.opponent());
            if best_move.is_none() || improves(maximizing, score, best_score) {
                best_score = score;
                best_move = Some(mv);
            }
        }
        (best_score, best_move)
    }
}
