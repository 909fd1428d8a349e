use crate::board::geometry::Square;
use crate::board::piece::Color;
use crate::board::snapshot::{Occupancy, Snapshot};

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (-1, 2),
    (1, 2),
    (-2, 1),
    (2, 1),
    (-2, -1),
    (2, -1),
    (-1, -2),
    (1, -2),
];

/// Raw knight destinations: the eight fixed jumps, kept when they land on
/// an empty or enemy square.
pub fn raw_knight_moves(snapshot: &Snapshot, from: Square, color: Color, out: &mut Vec<Square>) {
    for (d_file, d_rank) in KNIGHT_JUMPS {
        let target = (from.0 + d_file, from.1 + d_rank);
        match snapshot.occupancy(target, color) {
            Occupancy::Empty | Occupancy::Enemy => out.push(target),
            Occupancy::Friendly | Occupancy::Invalid => {}
        }
    }
}
