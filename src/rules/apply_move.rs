//! The `(snapshot, from, to) -> snapshot` transition.
//!
//! One primitive serves both real move application and the legality
//! filter's probes: it handles en-passant capture and bookkeeping, piece
//! relocation, the castling rook hop, monotonic rights revocation, ability
//! recomputation, the turn flip, and the move counter.

use crate::board::geometry::Square;
use crate::board::piece::{Color, PieceKind};
use crate::board::snapshot::{CastleSide, Snapshot};
use crate::errors::{RulesError, RulesResult};
use crate::rules::castling::{king_home, recompute_ability, rook_home};

pub fn apply_move(snapshot: &Snapshot, from: Square, to: Square) -> RulesResult<Snapshot> {
    let moving = snapshot
        .piece_at(from)
        .ok_or(RulesError::EmptySourceSquare(from))?;

    let mut next = snapshot.clone();

    // En-passant bookkeeping. The target square survives exactly one ply:
    // it is consumed by a pawn landing on it, replaced by a fresh double
    // push, and cleared by anything else.
    if moving.kind == PieceKind::Pawn && snapshot.en_passant_target == Some(to) {
        // The captured pawn sits beside the target, on the rank the
        // capturing pawn came from.
        next.remove((to.0, from.1));
        next.en_passant_target = None;
    } else if moving.kind == PieceKind::Pawn && (to.1 - from.1).abs() == 2 {
        next.en_passant_target = Some((from.0, (from.1 + to.1) / 2));
    } else {
        next.en_passant_target = None;
    }

    next.relocate(from, to)?;

    // A king sliding two files is a castle; the native rook hops over it.
    if moving.kind == PieceKind::King && (to.0 - from.0).abs() == 2 {
        let rank = from.1;
        if to.0 == 6 {
            next.relocate((7, rank), (5, rank))?;
        } else {
            next.relocate((0, rank), (3, rank))?;
        }
    }

    // Rights only ever decay: a side keeps a right while its king and the
    // native rook both still stand on their original squares.
    for color in [Color::Light, Color::Dark] {
        for side in [CastleSide::Kingside, CastleSide::Queenside] {
            let keep = next.castling_rights.get(color, side)
                && matches!(
                    next.piece_at(king_home(color)),
                    Some(p) if p.kind == PieceKind::King && p.color == color
                )
                && matches!(
                    next.piece_at(rook_home(color, side)),
                    Some(p) if p.kind == PieceKind::Rook && p.color == color
                );
            next.castling_rights.set(color, side, keep);
        }
    }

    next.side_to_move = moving.color.opposite();
    if moving.color == Color::Dark {
        next.fullmove_number += 1;
    }

    recompute_ability(&mut next)?;

    Ok(next)
}

/// The reached-back-rank condition. It is computed and reported, but never
/// resolved into a promoted piece: the pawn keeps its kind.
pub fn pawn_awaiting_promotion(snapshot: &Snapshot) -> Option<Square> {
    for color in [Color::Light, Color::Dark] {
        let back_rank: i8 = match color {
            Color::Light => 7,
            Color::Dark => 0,
        };
        for file in 0i8..8 {
            let square = (file, back_rank);
            if let Some(piece) = snapshot.piece_at(square) {
                if piece.kind == PieceKind::Pawn && piece.color == color {
                    return Some(square);
                }
            }
        }
    }
    None
}
