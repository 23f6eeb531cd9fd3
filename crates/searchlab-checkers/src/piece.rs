//! Sides and pieces.
//!
//! A [`Piece`] is a newtype over `i8`: the sign says which [`Side`] owns it
//! and the magnitude is its rank (0 = empty, 1 = man, 2 = king).

use std::fmt;

use crate::board::BoardError;

/// One of the two players.
///
/// White is the positive side and moves towards row 0; Black is the negative
/// side and moves towards row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// `+1` for White, `-1` for Black.
    #[inline]
    pub const fn sign(self) -> i8 {
        match self {
            Self::White => 1,
            Self::Black => -1,
        }
    }

    /// Side owning pieces of the given sign, or `None` for zero.
    #[inline]
    pub const fn from_sign(sign: i8) -> Option<Self> {
        match sign {
            1..=i8::MAX => Some(Self::White),
            i8::MIN..=-1 => Some(Self::Black),
            0 => None,
        }
    }

    #[inline]
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// The row on which this side's men are crowned.
    #[inline]
    pub const fn promotion_row(self) -> i32 {
        match self {
            Self::White => 0,
            Self::Black => 7,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::White => f.write_str("white"),
            Self::Black => f.write_str("black"),
        }
    }
}

/// The content of one board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "i8", into = "i8"))]
pub struct Piece(i8);

impl Piece {
    pub const EMPTY: Self = Self(0);
    pub const WHITE_MAN: Self = Self(1);
    pub const WHITE_KING: Self = Self(2);
    pub const BLACK_MAN: Self = Self(-1);
    pub const BLACK_KING: Self = Self(-2);

    /// Decode a piece from its signed code, or `None` if `|code| > 2`.
    #[inline]
    pub const fn new(code: i8) -> Option<Self> {
        if code >= -2 && code <= 2 {
            Some(Self(code))
        } else {
            None
        }
    }

    /// A man belonging to `side`.
    #[inline]
    pub const fn man(side: Side) -> Self {
        Self(side.sign())
    }

    /// A king belonging to `side`.
    #[inline]
    pub const fn king(side: Side) -> Self {
        Self(side.sign() * 2)
    }

    /// The signed code of this piece.
    #[inline]
    pub const fn code(self) -> i8 {
        self.0
    }

    /// 0 for an empty square, 1 for a man, 2 for a king.
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0.unsigned_abs()
    }

    #[inline]
    pub const fn side(self) -> Option<Side> {
        Side::from_sign(self.0)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        self.rank() == 2
    }

    /// Whether this piece and `other` belong to opposite sides.
    #[inline]
    pub const fn is_enemy_of(self, other: Piece) -> bool {
        (self.0 > 0 && other.0 < 0) || (self.0 < 0 && other.0 > 0)
    }

    /// The crowned version of this piece; kings and empty squares are unchanged.
    #[inline]
    pub const fn crowned(self) -> Self {
        if self.rank() == 1 { Self(self.0 * 2) } else { self }
    }
}

impl TryFrom<i8> for Piece {
    type Error = BoardError;

    fn try_from(code: i8) -> Result<Self, BoardError> {
        Self::new(code).ok_or(BoardError::InvalidCode(code))
    }
}

impl From<Piece> for i8 {
    fn from(p: Piece) -> Self {
        p.0
    }
}
