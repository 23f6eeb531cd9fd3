use crate::board::{Board, SIZE};
use crate::piece::Piece;

/// Static scoring of a board position.
///
/// Scores are absolute: positive favours White, negative favours Black,
/// whoever is to move.
pub trait Evaluator {
    fn evaluate(&self, board: &Board) -> i32;
}

/// Material plus a row bonus for men.
///
/// A man is worth 10 plus its distance in rows from its own promotion row; a
/// king is worth a flat 30.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Material;

const MAN_VALUE: i32 = 10;
const KING_VALUE: i32 = 30;

impl Evaluator for Material {
    fn evaluate(&self, board: &Board) -> i32 {
        let mut score = 0;
        for pos in Board::bounds() {
            let piece = board.piece(pos).unwrap_or(Piece::EMPTY);
            score += match piece {
                Piece::WHITE_MAN => MAN_VALUE + pos.row,
                Piece::WHITE_KING => KING_VALUE,
                Piece::BLACK_MAN => -(MAN_VALUE + (SIZE - 1 - pos.row)),
                Piece::BLACK_KING => -KING_VALUE,
                _ => 0,
            };
        }
        score
    }
}

/// Score `board` with [`Material`].
pub fn evaluate(board: &Board) -> i32 {
    Material.evaluate(board)
}
