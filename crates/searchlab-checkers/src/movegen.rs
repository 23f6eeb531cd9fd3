//! Move generation and application.
//!
//! Rules implemented:
//! - men step one square diagonally forward, kings one square in any
//!   diagonal direction;
//! - any piece captures by jumping an adjacent enemy in any diagonal
//!   direction onto an empty square directly behind it;
//! - captures are mandatory: if one exists anywhere, only captures are legal;
//! - each move is a single hop (no chained jumps);
//! - a man reaching its promotion row is crowned.

use std::fmt;

use searchlab_core::Position;

use crate::board::Board;
use crate::piece::{Piece, Side};

/// Step directions, forward pair first. Men use the first two, kings all four.
const WHITE_STEPS: [Position; 4] = [
    Position::new(-1, -1),
    Position::new(-1, 1),
    Position::new(1, -1),
    Position::new(1, 1),
];
const BLACK_STEPS: [Position; 4] = [
    Position::new(1, -1),
    Position::new(1, 1),
    Position::new(-1, -1),
    Position::new(-1, 1),
];

/// One ply: a piece moving from `from` to `to`, jumping `captured` if set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub from: Position,
    pub to: Position,
    pub captured: Option<Position>,
}

impl Move {
    /// A non-capturing move.
    #[inline]
    pub const fn step(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            captured: None,
        }
    }

    /// A capture of the piece on `over`.
    #[inline]
    pub const fn jump(from: Position, over: Position, to: Position) -> Self {
        Self {
            from,
            to,
            captured: Some(over),
        }
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)?;
        if let Some(c) = self.captured {
            write!(f, " x {c}")?;
        }
        Ok(())
    }
}

impl Board {
    /// All legal moves for `side`, in row-major order of the moving piece.
    ///
    /// If any capture is available only captures are returned. An empty
    /// result means `side` cannot move.
    pub fn legal_moves(&self, side: Side) -> Vec<Move> {
        let captures = self.captures(side);
        if !captures.is_empty() {
            return captures;
        }

        let mut moves = Vec::new();
        for (from, piece) in self.pieces(side) {
            self.push_steps(from, piece, &mut moves);
        }
        moves
    }

    /// Every single-hop capture available to `side`.
    pub fn captures(&self, side: Side) -> Vec<Move> {
        let mut captures = Vec::new();
        for (from, piece) in self.pieces(side) {
            self.push_jumps(from, piece, &mut captures);
        }
        captures
    }

    /// Whether `side` has no legal move.
    pub fn is_terminal(&self, side: Side) -> bool {
        self.legal_moves(side).is_empty()
    }

    /// The board after playing `mv`, with the turn handed to the opponent of
    /// the moving piece.
    ///
    /// The moving piece is relocated, a jumped piece is removed, and a man
    /// landing on its promotion row is crowned. `mv` is assumed to come from
    /// [`legal_moves`](Self::legal_moves) for this board.
    pub fn apply_move(&self, mv: &Move) -> Board {
        let mut next = *self;
        let piece = self.piece(mv.from).unwrap_or(Piece::EMPTY);
        debug_assert!(!piece.is_empty(), "no piece to move at {}", mv.from);

        next.set(mv.from, Piece::EMPTY);
        next.set(mv.to, piece);
        if let Some(captured) = mv.captured {
            next.set(captured, Piece::EMPTY);
        }

        if let Some(side) = piece.side() {
            if mv.to.row == side.promotion_row() {
                next.set(mv.to, piece.crowned());
            }
            next = next.with_turn(side.opponent());
        }
        next
    }

    fn push_steps(&self, from: Position, piece: Piece, out: &mut Vec<Move>) {
        let Some(side) = piece.side() else {
            return;
        };
        let dirs = match side {
            Side::White => &WHITE_STEPS,
            Side::Black => &BLACK_STEPS,
        };
        let dirs = if piece.is_king() { &dirs[..] } else { &dirs[..2] };

        for &dir in dirs {
            let to = from + dir;
            if self.piece(to) == Some(Piece::EMPTY) {
                out.push(Move::step(from, to));
            }
        }
    }

    fn push_jumps(&self, from: Position, piece: Piece, out: &mut Vec<Move>) {
        for over in from.diagonals() {
            let to = over + (over - from);
            let (Some(victim), Some(landing)) = (self.piece(over), self.piece(to)) else {
                continue;
            };
            if landing.is_empty() && victim.is_enemy_of(piece) {
                out.push(Move::jump(from, over, to));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    fn board_with(pieces: &[(Position, Piece)]) -> Board {
        let mut board = Board::empty();
        for &(pos, piece) in pieces {
            board.set(pos, piece);
        }
        board
    }

    #[test]
    fn initial_white_moves() {
        let moves = Board::new().legal_moves(Side::White);
        assert_eq!(
            moves,
            vec![
                Move::step(p(5, 0), p(4, 1)),
                Move::step(p(5, 2), p(4, 1)),
                Move::step(p(5, 2), p(4, 3)),
                Move::step(p(5, 4), p(4, 3)),
                Move::step(p(5, 4), p(4, 5)),
                Move::step(p(5, 6), p(4, 5)),
                Move::step(p(5, 6), p(4, 7)),
            ]
        );
    }

    #[test]
    fn initial_black_moves() {
        let moves = Board::new().legal_moves(Side::Black);
        assert_eq!(moves.len(), 7);
        assert_eq!(moves[0], Move::step(p(2, 1), p(3, 0)));
        assert_eq!(moves[6], Move::step(p(2, 7), p(3, 6)));
        assert!(Board::new().captures(Side::Black).is_empty());
    }

    #[test]
    fn men_only_step_forward() {
        let board = board_with(&[(p(4, 3), Piece::WHITE_MAN)]);
        assert_eq!(
            board.legal_moves(Side::White),
            vec![Move::step(p(4, 3), p(3, 2)), Move::step(p(4, 3), p(3, 4))]
        );
        let board = board_with(&[(p(4, 3), Piece::BLACK_MAN)]);
        assert_eq!(
            board.legal_moves(Side::Black),
            vec![Move::step(p(4, 3), p(5, 2)), Move::step(p(4, 3), p(5, 4))]
        );
    }

    #[test]
    fn kings_step_in_all_directions() {
        let board = board_with(&[(p(4, 3), Piece::WHITE_KING)]);
        assert_eq!(
            board.legal_moves(Side::White),
            vec![
                Move::step(p(4, 3), p(3, 2)),
                Move::step(p(4, 3), p(3, 4)),
                Move::step(p(4, 3), p(5, 2)),
                Move::step(p(4, 3), p(5, 4)),
            ]
        );
        let board = board_with(&[(p(4, 3), Piece::BLACK_KING)]);
        assert_eq!(
            board.legal_moves(Side::Black),
            vec![
                Move::step(p(4, 3), p(5, 2)),
                Move::step(p(4, 3), p(5, 4)),
                Move::step(p(4, 3), p(3, 2)),
                Move::step(p(4, 3), p(3, 4)),
            ]
        );
    }

    #[test]
    fn men_capture_backwards() {
        let board = board_with(&[(p(3, 2), Piece::WHITE_MAN), (p(4, 3), Piece::BLACK_MAN)]);
        assert_eq!(
            board.captures(Side::White),
            vec![Move::jump(p(3, 2), p(4, 3), p(5, 4))]
        );
    }

    #[test]
    fn capture_needs_empty_landing_on_board() {
        // Landing square occupied.
        let board = board_with(&[
            (p(4, 3), Piece::WHITE_MAN),
            (p(3, 4), Piece::BLACK_MAN),
            (p(2, 5), Piece::BLACK_MAN),
        ]);
        assert!(board.captures(Side::White).is_empty());

        // Landing square off the board.
        let board = board_with(&[(p(1, 2), Piece::WHITE_MAN), (p(0, 3), Piece::BLACK_MAN)]);
        assert!(board.captures(Side::White).is_empty());

        // Own pieces cannot be jumped.
        let board = board_with(&[(p(4, 3), Piece::WHITE_MAN), (p(3, 4), Piece::WHITE_KING)]);
        assert!(board.captures(Side::White).is_empty());
    }

    #[test]
    fn capture_anywhere_suppresses_all_steps() {
        let board = board_with(&[
            (p(7, 0), Piece::WHITE_MAN),
            (p(5, 6), Piece::WHITE_MAN),
            (p(4, 5), Piece::BLACK_MAN),
        ]);
        let moves = board.legal_moves(Side::White);
        assert_eq!(moves, vec![Move::jump(p(5, 6), p(4, 5), p(3, 4))]);
        assert!(moves.iter().all(Move::is_capture));
    }

    #[test]
    fn apply_step_moves_piece_and_passes_turn() {
        let board = Board::new();
        let next = board.apply_move(&Move::step(p(5, 0), p(4, 1)));
        assert_eq!(next.piece(p(5, 0)), Some(Piece::EMPTY));
        assert_eq!(next.piece(p(4, 1)), Some(Piece::WHITE_MAN));
        assert_eq!(next.turn(), Side::Black);
        assert_eq!(next.count(Side::White), 12);
        // The source board is untouched.
        assert_eq!(board.piece(p(5, 0)), Some(Piece::WHITE_MAN));
    }

    #[test]
    fn apply_capture_removes_victim() {
        let board = board_with(&[(p(4, 3), Piece::WHITE_MAN), (p(3, 4), Piece::BLACK_MAN)]);
        let next = board.apply_move(&Move::jump(p(4, 3), p(3, 4), p(2, 5)));
        assert_eq!(next.piece(p(2, 5)), Some(Piece::WHITE_MAN));
        assert_eq!(next.piece(p(3, 4)), Some(Piece::EMPTY));
        assert_eq!(next.piece(p(4, 3)), Some(Piece::EMPTY));
        assert_eq!(next.count(Side::Black), 0);
        assert!(next.is_terminal(Side::Black));
    }

    #[test]
    fn promotion_on_far_row() {
        let board = board_with(&[(p(1, 2), Piece::WHITE_MAN), (p(6, 5), Piece::BLACK_MAN)]);
        let next = board.apply_move(&Move::step(p(1, 2), p(0, 1)));
        assert_eq!(next.piece(p(0, 1)), Some(Piece::WHITE_KING));
        assert_eq!(next.piece(p(6, 5)), Some(Piece::BLACK_MAN));

        let next = next.apply_move(&Move::step(p(6, 5), p(7, 4)));
        assert_eq!(next.piece(p(7, 4)), Some(Piece::BLACK_KING));
        assert_eq!(next.piece(p(0, 1)), Some(Piece::WHITE_KING));
    }

    #[test]
    fn capture_onto_far_row_crowns() {
        let board = board_with(&[(p(2, 3), Piece::WHITE_MAN), (p(1, 4), Piece::BLACK_MAN)]);
        let next = board.apply_move(&Move::jump(p(2, 3), p(1, 4), p(0, 5)));
        assert_eq!(next.piece(p(0, 5)), Some(Piece::WHITE_KING));
    }

    #[test]
    fn blocked_side_is_terminal() {
        // A black man on the bottom row cannot step forward.
        let board = board_with(&[(p(7, 0), Piece::BLACK_MAN), (p(0, 7), Piece::WHITE_MAN)]);
        assert!(board.is_terminal(Side::Black));
        assert!(board.is_terminal(Side::White));
        assert!(!Board::new().is_terminal(Side::White));
    }

    #[test]
    fn move_display() {
        assert_eq!(Move::step(p(5, 0), p(4, 1)).to_string(), "(5, 0) -> (4, 1)");
        assert_eq!(
            Move::jump(p(4, 3), p(3, 4), p(2, 5)).to_string(),
            "(4, 3) -> (2, 5) x (3, 4)"
        );
    }
}
