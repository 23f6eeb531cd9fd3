use std::time::Instant;

use log::{debug, trace};

use crate::board::Board;
use crate::eval::{Evaluator, Material};
use crate::movegen::Move;
use crate::piece::Side;
use crate::search::{SearchOutcome, Tree, improves, worst_for};

/// Minimax with alpha-beta pruning, using the [`Material`] evaluator.
///
/// Same contract as [`minimax`](crate::minimax): the returned score is
/// identical at equal depth, and so is the move unless several moves share
/// the optimal score. Visits at most as many nodes.
pub fn alpha_beta(board: &Board, depth: u32, maximizing: bool, side: Side) -> SearchOutcome {
    alpha_beta_with(&Material, board, depth, maximizing, side)
}

/// [`alpha_beta`] with a custom evaluator.
pub fn alpha_beta_with<E: Evaluator>(
    eval: &E,
    board: &Board,
    depth: u32,
    maximizing: bool,
    side: Side,
) -> SearchOutcome {
    let started = Instant::now();
    let mut tree = Tree::new(eval);
    let (score, best_move) = tree.alpha_beta(board, depth, i32::MIN, i32::MAX, maximizing, side);
    let elapsed = started.elapsed();

    debug!(
        "alpha-beta: depth {depth} for {side}: score {score}, best {best_move:?}, {} nodes, {elapsed:?}",
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
    /// `alpha` is the best score the maximizer is already guaranteed,
    /// `beta` the best the minimizer is. Siblings are skipped once
    /// `beta <= alpha`.
    pub(crate) fn alpha_beta(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
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
        trace!(
            "alpha-beta: depth {depth}, {side} has {} moves, window [{alpha}, {beta}]",
            moves.len()
        );

        let mut best_score = worst_for(maximizing);
        let mut best_move = None;
        for mv in moves {
            let child = board.apply_move(&mv);
            let (score, _) =
                self.alpha_beta(&child, depth - 1, alpha, beta, !maximizing, side.opponent());
            if best_move.is_none() || improves(maximizing, score, best_score) {
                best_score = score;
                best_move = Some(mv);
            }

            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }
        (best_score, best_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::minimax::minimax;
    use crate::piece::Piece;
    use searchlab_core::Position;

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn depth_zero_is_static_evaluation() {
        let out = alpha_beta(&Board::new(), 0, true, Side::White);
        assert_eq!(out.score, 0);
        assert_eq!(out.best_move, None);
        assert_eq!(out.nodes, 1);
    }

    #[test]
    fn initial_board_values_by_depth() {
        let board = Board::new();
        let expected = [(1, -1, 8), (2, 0, 21), (3, -1, 81), (4, 0, 179)];
        for (depth, score, nodes) in expected {
            let out = alpha_beta(&board, depth, true, Side::White);
            assert_eq!(out.score, score, "depth {depth}");
            assert_eq!(out.nodes, nodes, "depth {depth}");
            assert_eq!(out.best_move, Some(Move::step(p(5, 0), p(4, 1))), "depth {depth}");
        }
    }

    #[test]
    fn prunes_on_the_initial_board() {
        let board = Board::new();
        let full = minimax(&board, 4, true, Side::White);
        let pruned = alpha_beta(&board, 4, true, Side::White);
        assert_eq!(full.score, pruned.score);
        assert!(pruned.nodes < full.nodes);
    }

    #[test]
    fn agrees_with_minimax_for_black() {
        let board = Board::new().apply_move(&Move::step(p(5, 2), p(4, 3)));
        for depth in 0..=3 {
            let full = minimax(&board, depth, false, Side::Black);
            let pruned = alpha_beta(&board, depth, false, Side::Black);
            assert_eq!(full.score, pruned.score, "depth {depth}");
            assert!(pruned.nodes <= full.nodes, "depth {depth}");
        }
    }

    #[test]
    fn single_reply_is_forced() {
        let mut board = Board::empty();
        board.set(p(5, 0), Piece::WHITE_MAN);
        board.set(p(0, 7), Piece::BLACK_MAN);
        let out = alpha_beta(&board, 2, true, Side::White);
        assert_eq!(out.best_move, Some(Move::step(p(5, 0), p(4, 1))));
    }
}
