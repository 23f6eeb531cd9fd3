//! Checkers board state.
//!
//! A [`Board`] is a plain `Copy` value: searches copy it before every
//! hypothetical move, so no two branches ever share a mutable board.

use std::fmt;

use searchlab_core::{Position, Range};

use crate::piece::{Piece, Side};

/// Board edge length.
pub const SIZE: i32 = 8;

/// Rows filled with men at the start, per side.
const START_ROWS: i32 = 3;

/// An 8×8 checkers position plus the side to move.
///
/// Only squares where `row + col` is odd are ever occupied. The turn marker
/// is informational: move generation and search take the acting side
/// explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    squares: [[Piece; SIZE as usize]; SIZE as usize],
    turn: Side,
}

impl Board {
    /// The standard starting layout: three rows of men per side on the dark
    /// squares, Black on rows 0–2, White on rows 5–7, White to move.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for pos in Self::bounds() {
            if !is_playable(pos) {
                continue;
            }
            if pos.row < START_ROWS {
                board.set(pos, Piece::BLACK_MAN);
            } else if pos.row >= SIZE - START_ROWS {
                board.set(pos, Piece::WHITE_MAN);
            }
        }
        board
    }

    /// A board with no pieces, White to move.
    pub fn empty() -> Self {
        Self {
            squares: [[Piece::EMPTY; SIZE as usize]; SIZE as usize],
            turn: Side::White,
        }
    }

    /// Build a board from signed piece codes, row 0 first.
    pub fn from_codes(
        codes: [[i8; SIZE as usize]; SIZE as usize],
        turn: Side,
    ) -> Result<Self, BoardError> {
        let mut board = Self::empty().with_turn(turn);
        for pos in Self::bounds() {
            let code = codes[pos.row as usize][pos.col as usize];
            let piece = Piece::new(code).ok_or(BoardError::InvalidSquare { code, pos })?;
            board.set(pos, piece);
        }
        Ok(board)
    }

    /// The rectangle `[0, 8) × [0, 8)`.
    #[inline]
    pub fn bounds() -> Range {
        Range::with_size(SIZE, SIZE)
    }

    /// The side marked as being to move.
    #[inline]
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// The same position with a different side to move.
    #[inline]
    pub fn with_turn(mut self, turn: Side) -> Self {
        self.turn = turn;
        self
    }

    /// The piece at `pos`, or `None` off the board.
    #[inline]
    pub fn piece(&self, pos: Position) -> Option<Piece> {
        if !Self::bounds().contains(pos) {
            return None;
        }
        Some(self.squares[pos.row as usize][pos.col as usize])
    }

    /// Put `piece` on `pos`. Does nothing off the board.
    #[inline]
    pub fn set(&mut self, pos: Position, piece: Piece) {
        if !Self::bounds().contains(pos) {
            return;
        }
        self.squares[pos.row as usize][pos.col as usize] = piece;
    }

    /// Row-major iterator over the pieces belonging to `side`.
    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Position, Piece)> + '_ {
        Self::bounds().into_iter().filter_map(move |pos| {
            let piece = self.squares[pos.row as usize][pos.col as usize];
            (piece.side() == Some(side)).then_some((pos, piece))
        })
    }

    /// Number of pieces `side` has left.
    pub fn count(&self, side: Side) -> usize {
        self.pieces(side).count()
    }

    /// The signed code of every square, row 0 first.
    pub fn codes(&self) -> [[i8; SIZE as usize]; SIZE as usize] {
        self.squares.map(|row| row.map(Piece::code))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether pieces may stand on `pos` (the dark squares).
#[inline]
pub fn is_playable(pos: Position) -> bool {
    (pos.row + pos.col) % 2 == 1
}

/// Errors that can occur when building a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// A code outside `-2..=2`.
    InvalidCode(i8),
    /// A square holding a code outside `-2..=2`.
    InvalidSquare { code: i8, pos: Position },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCode(code) => write!(f, "board: invalid piece code {code}"),
            Self::InvalidSquare { code, pos } => {
                write!(f, "board: invalid piece code {code} at {pos}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_layout() {
        let board = Board::new();
        assert_eq!(board.count(Side::White), 12);
        assert_eq!(board.count(Side::Black), 12);
        assert_eq!(board.turn(), Side::White);
        assert_eq!(board.piece(Position::new(0, 1)), Some(Piece::BLACK_MAN));
        assert_eq!(board.piece(Position::new(2, 7)), Some(Piece::BLACK_MAN));
        assert_eq!(board.piece(Position::new(5, 0)), Some(Piece::WHITE_MAN));
        assert_eq!(board.piece(Position::new(7, 6)), Some(Piece::WHITE_MAN));
        assert_eq!(board.piece(Position::new(3, 0)), Some(Piece::EMPTY));
        assert_eq!(board.piece(Position::new(4, 1)), Some(Piece::EMPTY));
    }

    #[test]
    fn light_squares_stay_empty() {
        let board = Board::new();
        for pos in Board::bounds() {
            if !is_playable(pos) {
                assert_eq!(board.piece(pos), Some(Piece::EMPTY), "{pos}");
            }
        }
    }

    #[test]
    fn off_board_access() {
        let mut board = Board::empty();
        assert_eq!(board.piece(Position::new(-1, 0)), None);
        assert_eq!(board.piece(Position::new(0, 8)), None);
        board.set(Position::new(8, 8), Piece::WHITE_KING);
        assert_eq!(board, Board::empty());
    }

    #[test]
    fn codes_round_trip() {
        let board = Board::new();
        let rebuilt = Board::from_codes(board.codes(), Side::White).unwrap();
        assert_eq!(rebuilt, board);
    }

    #[test]
    fn from_codes_rejects_bad_rank() {
        let mut codes = [[0i8; 8]; 8];
        codes[4][3] = -3;
        let err = Board::from_codes(codes, Side::Black).unwrap_err();
        assert_eq!(
            err,
            BoardError::InvalidSquare {
                code: -3,
                pos: Position::new(4, 3)
            }
        );
        assert_eq!(err.to_string(), "board: invalid piece code -3 at (4, 3)");
    }

    #[test]
    fn pieces_iterate_row_major() {
        let mut board = Board::empty();
        board.set(Position::new(6, 1), Piece::WHITE_MAN);
        board.set(Position::new(1, 2), Piece::WHITE_KING);
        board.set(Position::new(3, 4), Piece::BLACK_MAN);
        let white: Vec<_> = board.pieces(Side::White).collect();
        assert_eq!(
            white,
            vec![
                (Position::new(1, 2), Piece::WHITE_KING),
                (Position::new(6, 1), Piece::WHITE_MAN),
            ]
        );
        assert_eq!(board.count(Side::Black), 1);
    }
}
