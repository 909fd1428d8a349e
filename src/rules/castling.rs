use crate::board::geometry::Square;
use crate::board::piece::{Color, PieceKind};
use crate::board::snapshot::{CastleSide, CastlingFlags, Snapshot};
use crate::errors::RulesResult;
use crate::rules::check::is_king_in_check;

pub fn home_rank(color: Color) -> i8 {
    match color {
        Color::Light => 0,
        Color::Dark => 7,
    }
}

pub fn king_home(color: Color) -> Square {
    (4, home_rank(color))
}

pub fn rook_home(color: Color, side: CastleSide) -> Square {
    let file = match side {
        CastleSide::Kingside => 7,
        CastleSide::Queenside => 0,
    };
    (file, home_rank(color))
}

/// Position-dependent castling eligibility. True only when the permanent
/// right is intact, king and native rook still sit on their original
/// squares, every square strictly between them is empty, the king is not in
/// check, and neither the square it passes through nor its landing square
/// is attacked (probed by relocating the king there and re-running the
/// check detector).
pub fn can_castle(snapshot: &Snapshot, color: Color, side: CastleSide) -> RulesResult<bool> {
    if !snapshot.castling_rights.get(color, side) {
        return Ok(false);
    }

    let rank = home_rank(color);
    let king_square = king_home(color);
    let rook_square = rook_home(color, side);

    match snapshot.piece_at(king_square) {
        Some(piece) if piece.kind == PieceKind::King && piece.color == color => {}
        _ => return Ok(false),
    }
    match snapshot.piece_at(rook_square) {
        Some(piece) if piece.kind == PieceKind::Rook && piece.color == color => {}
        _ => return Ok(false),
    }

    let between: &[i8] = match side {
        CastleSide::Kingside => &[5, 6],
        CastleSide::Queenside => &[1, 2, 3],
    };
    for file in between {
        if snapshot.piece_at((*file, rank)).is_some() {
            return Ok(false);
        }
    }

    if is_king_in_check(snapshot, color)? {
        return Ok(false);
    }

    // Passage and landing squares, in walking order.
    let path: [i8; 2] = match side {
        CastleSide::Kingside => [5, 6],
        CastleSide::Queenside => [3, 2],
    };
    for file in path {
        let mut probe = snapshot.clone();
        probe.relocate(king_square, (file, rank))?;
        if is_king_in_check(&probe, color)? {
            return Ok(false);
        }
    }

    Ok(true)
}

/// Rebuild the ability flags for both colors and both sides. Evaluated
/// against a fixed copy so the cached flags never feed their own
/// recomputation.
pub fn recompute_ability(snapshot: &mut Snapshot) -> RulesResult<()> {
    let base = snapshot.clone();
    let mut ability = CastlingFlags::none();

    for color in [Color::Light, Color::Dark] {
        for side in [CastleSide::Kingside, CastleSide::Queenside] {
            ability.set(color, side, can_castle(&base, color, side)?);
        }
    }

    snapshot.castling_ability = ability;
    Ok(())
}
