//! Immutable position value.
//!
//! `Snapshot` is the central model for the engine: the 64-square grid, side
//! to move, castling rights and ability, en-passant target, and move number.
//! Every transition clones a snapshot and edits the clone; published
//! snapshots are never mutated.

use crate::board::geometry::{index_to_square, is_valid, square_to_index, Square};
use crate::board::piece::{Color, Piece, PieceKind};
use crate::errors::{RulesError, RulesResult};

/// What a square holds relative to a color. This single classification is
/// the gate every move-generation rule consults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupancy {
    Invalid,
    Empty,
    Friendly,
    Enemy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

/// Per-color, per-side castling booleans. Used both for the permanent
/// rights (monotonic, never turn back on) and for the recomputed
/// position-dependent ability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingFlags {
    pub light_kingside: bool,
    pub light_queenside: bool,
    pub dark_kingside: bool,
    pub dark_queenside: bool,
}

impl CastlingFlags {
    pub const fn none() -> Self {
        CastlingFlags {
            light_kingside: false,
            light_queenside: false,
            dark_kingside: false,
            dark_queenside: false,
        }
    }

    pub fn get(&self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::Light, CastleSide::Kingside) => self.light_kingside,
            (Color::Light, CastleSide::Queenside) => self.light_queenside,
            (Color::Dark, CastleSide::Kingside) => self.dark_kingside,
            (Color::Dark, CastleSide::Queenside) => self.dark_queenside,
        }
    }

    pub fn set(&mut self, color: Color, side: CastleSide, value: bool) {
        match (color, side) {
            (Color::Light, CastleSide::Kingside) => self.light_kingside = value,
            (Color::Light, CastleSide::Queenside) => self.light_queenside = value,
            (Color::Dark, CastleSide::Kingside) => self.dark_kingside = value,
            (Color::Dark, CastleSide::Queenside) => self.dark_queenside = value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub grid: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling_rights: CastlingFlags,
    pub castling_ability: CastlingFlags,
    pub en_passant_target: Option<Square>,
    pub fullmove_number: u16,
}

impl Snapshot {
    /// An empty board with Light to move and no rights; the FEN parser and
    /// tests populate it square by square.
    pub fn empty() -> Self {
        Snapshot {
            grid: [None; 64],
            side_to_move: Color::Light,
            castling_rights: CastlingFlags::none(),
            castling_ability: CastlingFlags::none(),
            en_passant_target: None,
            fullmove_number: 1,
        }
    }

    /// The piece on a square, `None` for empty or off-board squares.
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if !is_valid(square) {
            return None;
        }
        self.grid[square_to_index(square)]
    }

    /// Place a piece. Callers pass valid squares only.
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.grid[square_to_index(square)] = Some(piece);
    }

    /// Clear a square, returning what was on it.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.grid[square_to_index(square)].take()
    }

    /// Lift the piece on `from` onto `to`, overwriting any capture victim.
    /// An empty source is a caller defect.
    pub fn relocate(&mut self, from: Square, to: Square) -> RulesResult<()> {
        if !is_valid(from) {
            return Err(RulesError::OffBoardSquare(from));
        }
        if !is_valid(to) {
            return Err(RulesError::OffBoardSquare(to));
        }
        let piece = self
            .remove(from)
            .ok_or(RulesError::EmptySourceSquare(from))?;
        self.grid[square_to_index(to)] = Some(piece);
        Ok(())
    }

    pub fn occupancy(&self, square: Square, color: Color) -> Occupancy {
        if !is_valid(square) {
            return Occupancy::Invalid;
        }
        match self.grid[square_to_index(square)] {
            None => Occupancy::Empty,
            Some(piece) if piece.color == color => Occupancy::Friendly,
            Some(_) => Occupancy::Enemy,
        }
    }

    pub fn find_king(&self, color: Color) -> RulesResult<Square> {
        for (index, slot) in self.grid.iter().enumerate() {
            if let Some(piece) = slot {
                if piece.kind == PieceKind::King && piece.color == color {
                    return Ok(index_to_square(index));
                }
            }
        }
        Err(RulesError::KingNotFound(color))
    }

    /// Every square occupied by the given color, in grid order.
    pub fn squares_of(&self, color: Color) -> Vec<Square> {
        let mut squares = Vec::new();
        for (index, slot) in self.grid.iter().enumerate() {
            if let Some(piece) = slot {
                if piece.color == color {
                    squares.push(index_to_square(index));
                }
            }
        }
        squares
    }
}
