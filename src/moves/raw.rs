use crate::board::geometry::Square;
use crate::board::piece::PieceKind;
use crate::board::snapshot::Snapshot;
use crate::moves::king::raw_king_moves;
use crate::moves::knight::raw_knight_moves;
use crate::moves::pawn::raw_pawn_moves;
use crate::moves::slider::{raw_bishop_moves, raw_queen_moves, raw_rook_moves};

/// Raw destinations for the piece on `from`, dispatched by kind. An empty
/// or off-board origin yields an empty list, not an error.
pub fn raw_moves(snapshot: &Snapshot, from: Square) -> Vec<Square> {
    let Some(piece) = snapshot.piece_at(from) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    match piece.kind {
        PieceKind::Pawn => raw_pawn_moves(snapshot, from, piece.color, &mut out),
        PieceKind::Knight => raw_knight_moves(snapshot, from, piece.color, &mut out),
        PieceKind::Bishop => raw_bishop_moves(snapshot, from, piece.color, &mut out),
        PieceKind::Rook => raw_rook_moves(snapshot, from, piece.color, &mut out),
        PieceKind::Queen => raw_queen_moves(snapshot, from, piece.color, &mut out),
        PieceKind::King => raw_king_moves(snapshot, from, piece.color, &mut out),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::raw_moves;
    use crate::board::piece::{Color, Piece, PieceKind};
    use crate::board::snapshot::Snapshot;

    #[test]
    fn empty_origin_yields_no_moves() {
        let snapshot = Snapshot::empty();
        assert!(raw_moves(&snapshot, (3, 3)).is_empty());
        assert!(raw_moves(&snapshot, (9, 9)).is_empty());
    }

    #[test]
    fn dispatch_reaches_every_kind() {
        let mut snapshot = Snapshot::empty();
        snapshot.place(
            (3, 3),
            Piece {
                kind: PieceKind::Queen,
                color: Color::Dark,
            },
        );
        assert_eq!(raw_moves(&snapshot, (3, 3)).len(), 27);
    }
}
