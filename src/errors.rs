use std::error::Error;
use std::fmt;

use crate::board::geometry::Square;
use crate::board::piece::Color;

pub type RulesResult<T> = Result<T, RulesError>;

/// Failures raised by the rules layer.
///
/// `KingNotFound` and `EmptySourceSquare` are caller defects, never modeled
/// game states; operations that hit them abort instead of returning a
/// partial result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// No king of the given color is on the board.
    KingNotFound(Color),
    /// A move was requested from a square that holds no piece.
    EmptySourceSquare(Square),
    /// A square outside the 8x8 board reached rule logic.
    OffBoardSquare(Square),
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesError::KingNotFound(color) => {
                write!(f, "no {color:?} king on the board")
            }
            RulesError::EmptySourceSquare((file, rank)) => {
                write!(f, "no piece on source square ({file}, {rank})")
            }
            RulesError::OffBoardSquare((file, rank)) => {
                write!(f, "square ({file}, {rank}) is outside the board")
            }
        }
    }
}

impl Error for RulesError {}
