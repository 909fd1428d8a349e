use crate::board::geometry::{step, Direction, Square};
use crate::board::piece::Color;
use crate::board::snapshot::{CastleSide, Occupancy, Snapshot};

/// Raw king destinations: the eight adjacent squares on an empty/enemy
/// filter, plus one pseudo-move per castling side whose ability flag is
/// currently set, mapped to the king's post-castle square.
pub fn raw_king_moves(snapshot: &Snapshot, from: Square, color: Color, out: &mut Vec<Square>) {
    let neighbors = [
        step(from, Direction::Horizontal, 1),
        step(from, Direction::Horizontal, -1),
        step(from, Direction::Vertical, 1),
        step(from, Direction::Vertical, -1),
        step(from, Direction::DiagonalRising, 1),
        step(from, Direction::DiagonalRising, -1),
        step(from, Direction::DiagonalFalling, 1),
        step(from, Direction::DiagonalFalling, -1),
    ];

    for target in neighbors {
        match snapshot.occupancy(target, color) {
            Occupancy::Empty | Occupancy::Enemy => out.push(target),
            Occupancy::Friendly | Occupancy::Invalid => {}
        }
    }

    let home_rank: i8 = match color {
        Color::Light => 0,
        Color::Dark => 7,
    };
    if snapshot.castling_ability.get(color, CastleSide::Kingside) {
        out.push((6, home_rank));
    }
    if snapshot.castling_ability.get(color, CastleSide::Queenside) {
        out.push((2, home_rank));
    }
}
