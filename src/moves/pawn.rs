use crate::board::geometry::{step, Direction, Square};
use crate::board::piece::Color;
use crate::board::snapshot::{Occupancy, Snapshot};

/// Raw pawn destinations: single push onto an empty square, double push from
/// the start rank when both intervening squares are empty, and diagonal
/// captures onto enemy squares or the current en-passant target.
pub fn raw_pawn_moves(snapshot: &Snapshot, from: Square, color: Color, out: &mut Vec<Square>) {
    let (forward, start_rank): (i8, i8) = match color {
        Color::Light => (1, 1),
        Color::Dark => (-1, 6),
    };

    let one = step(from, Direction::Vertical, forward);
    if snapshot.occupancy(one, color) == Occupancy::Empty {
        out.push(one);

        if from.1 == start_rank {
            let two = step(from, Direction::Vertical, 2 * forward);
            if snapshot.occupancy(two, color) == Occupancy::Empty {
                out.push(two);
            }
        }
    }

    let captures = match color {
        Color::Light => [
            step(from, Direction::DiagonalFalling, -1),
            step(from, Direction::DiagonalRising, 1),
        ],
        Color::Dark => [
            step(from, Direction::DiagonalRising, -1),
            step(from, Direction::DiagonalFalling, 1),
        ],
    };

    for target in captures {
        match snapshot.occupancy(target, color) {
            Occupancy::Enemy => out.push(target),
            Occupancy::Empty if snapshot.en_passant_target == Some(target) => out.push(target),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::raw_pawn_moves;
    use crate::board::piece::{Color, Piece, PieceKind};
    use crate::board::snapshot::Snapshot;

    fn pawn(color: Color) -> Piece {
        Piece {
            kind: PieceKind::Pawn,
            color,
        }
    }

    #[test]
    fn start_rank_pawn_has_single_and_double_push() {
        let mut snapshot = Snapshot::empty();
        snapshot.place((4, 1), pawn(Color::Light));

        let mut moves = Vec::new();
        raw_pawn_moves(&snapshot, (4, 1), Color::Light, &mut moves);
        assert_eq!(moves, vec![(4, 2), (4, 3)]);
    }

    #[test]
    fn blocked_pawn_has_no_pushes_at_all() {
        let mut snapshot = Snapshot::empty();
        snapshot.place((4, 1), pawn(Color::Light));
        snapshot.place((4, 2), pawn(Color::Dark));

        let mut moves = Vec::new();
        raw_pawn_moves(&snapshot, (4, 1), Color::Light, &mut moves);
        assert!(moves.is_empty());
    }

    #[test]
    fn double_push_needs_both_squares_empty() {
        let mut snapshot = Snapshot::empty();
        snapshot.place((4, 1), pawn(Color::Light));
        snapshot.place((4, 3), pawn(Color::Dark));

        let mut moves = Vec::new();
        raw_pawn_moves(&snapshot, (4, 1), Color::Light, &mut moves);
        assert_eq!(moves, vec![(4, 2)]);
    }

    #[test]
    fn diagonals_capture_enemies_only() {
        let mut snapshot = Snapshot::empty();
        snapshot.place((4, 3), pawn(Color::Light));
        snapshot.place((3, 4), pawn(Color::Dark));
        snapshot.place((5, 4), pawn(Color::Light));
        snapshot.place((4, 4), pawn(Color::Dark));

        let mut moves = Vec::new();
        raw_pawn_moves(&snapshot, (4, 3), Color::Light, &mut moves);
        assert_eq!(moves, vec![(3, 4)]);
    }

    #[test]
    fn en_passant_target_counts_as_a_capture_square() {
        let mut snapshot = Snapshot::empty();
        snapshot.place((4, 4), pawn(Color::Light));
        snapshot.place((3, 4), pawn(Color::Dark));
        snapshot.en_passant_target = Some((3, 5));

        let mut moves = Vec::new();
        raw_pawn_moves(&snapshot, (4, 4), Color::Light, &mut moves);
        assert!(moves.contains(&(3, 5)));
    }

    #[test]
    fn dark_pawns_move_toward_rank_one() {
        let mut snapshot = Snapshot::empty();
        snapshot.place((2, 6), pawn(Color::Dark));
        snapshot.place((1, 5), pawn(Color::Light));

        let mut moves = Vec::new();
        raw_pawn_moves(&snapshot, (2, 6), Color::Dark, &mut moves);
        assert_eq!(moves, vec![(2, 5), (2, 4), (1, 5)]);
    }
}
