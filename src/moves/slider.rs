use crate::board::geometry::{step, Direction, Square};
use crate::board::piece::Color;
use crate::board::snapshot::{Occupancy, Snapshot};

/// Ray traversal along one axis, walked independently in both signed
/// senses: empty squares are appended and the walk continues, the first
/// enemy square is appended and stops it, a friendly or off-board square
/// stops it without appending.
pub fn traverse(
    snapshot: &Snapshot,
    from: Square,
    color: Color,
    direction: Direction,
    out: &mut Vec<Square>,
) {
    for sense in [1i8, -1] {
        let mut distance = sense;
        loop {
            let target = step(from, direction, distance);
            match snapshot.occupancy(target, color) {
                Occupancy::Empty => out.push(target),
                Occupancy::Enemy => {
                    out.push(target);
                    break;
                }
                Occupancy::Friendly | Occupancy::Invalid => break,
            }
            distance += sense;
        }
    }
}

pub fn raw_bishop_moves(snapshot: &Snapshot, from: Square, color: Color, out: &mut Vec<Square>) {
    traverse(snapshot, from, color, Direction::DiagonalRising, out);
    traverse(snapshot, from, color, Direction::DiagonalFalling, out);
}

pub fn raw_rook_moves(snapshot: &Snapshot, from: Square, color: Color, out: &mut Vec<Square>) {
    traverse(snapshot, from, color, Direction::Horizontal, out);
    traverse(snapshot, from, color, Direction::Vertical, out);
}

pub fn raw_queen_moves(snapshot: &Snapshot, from: Square, color: Color, out: &mut Vec<Square>) {
    for direction in Direction::ALL {
        traverse(snapshot, from, color, direction, out);
    }
}
