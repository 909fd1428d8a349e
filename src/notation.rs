//! Short-algebraic move rendering.
//!
//! Castling is special-cased before anything else; every other move is
//! piece letter (none for pawns), a capture marker when the destination
//! holds an enemy piece, and the destination coordinate. No check suffix,
//! no promotion suffix, no disambiguation between twin pieces.

use crate::board::geometry::{is_valid, square_to_algebraic, Square};
use crate::board::piece::PieceKind;
use crate::board::snapshot::{Occupancy, Snapshot};
use crate::errors::{RulesError, RulesResult};
use crate::rules::castling::king_home;

fn piece_letter(kind: PieceKind) -> &'static str {
    match kind {
        PieceKind::Pawn => "",
        PieceKind::Knight => "N",
        PieceKind::Bishop => "B",
        PieceKind::Rook => "R",
        PieceKind::Queen => "Q",
        PieceKind::King => "K",
    }
}

pub fn render_move(snapshot: &Snapshot, from: Square, to: Square) -> RulesResult<String> {
    let piece = snapshot
        .piece_at(from)
        .ok_or(RulesError::EmptySourceSquare(from))?;
    if !is_valid(to) {
        return Err(RulesError::OffBoardSquare(to));
    }

    // A king sliding two files off its home square is a castle, whatever
    // the destination holds.
    if piece.kind == PieceKind::King && from == king_home(piece.color) && (to.0 - from.0).abs() == 2
    {
        let castle = if to.0 == 6 { "O-O" } else { "O-O-O" };
        return Ok(castle.to_owned());
    }

    let destination =
        square_to_algebraic(to).map_err(|_| RulesError::OffBoardSquare(to))?;
    let letter = piece_letter(piece.kind);

    if snapshot.occupancy(to, piece.color) == Occupancy::Enemy {
        if piece.kind == PieceKind::Pawn {
            let origin_file = char::from(b'a' + from.0 as u8);
            Ok(format!("{origin_file}x{destination}"))
        } else {
            Ok(format!("{letter}x{destination}"))
        }
    } else {
        Ok(format!("{letter}{destination}"))
    }
}

#[cfg(test)]
mod tests {
    use super::render_move;
    use crate::board::piece::{Color, Piece, PieceKind};
    use crate::board::snapshot::Snapshot;
    use crate::errors::RulesError;
    use crate::rules::apply_move::apply_move;
    use crate::utils::fen_parser::parse_fen;

    fn put(snapshot: &mut Snapshot, square: (i8, i8), kind: PieceKind, color: Color) {
        snapshot.place(square, Piece { kind, color });
    }

    #[test]
    fn quiet_moves_are_letter_plus_destination() {
        let mut snapshot = Snapshot::empty();
        put(&mut snapshot, (6, 0), PieceKind::Knight, Color::Light);
        put(&mut snapshot, (4, 1), PieceKind::Pawn, Color::Light);

        assert_eq!(render_move(&snapshot, (6, 0), (5, 2)), Ok("Nf3".to_owned()));
        assert_eq!(render_move(&snapshot, (4, 1), (4, 3)), Ok("e4".to_owned()));
    }

    #[test]
    fn captures_take_an_x_and_pawns_show_their_file() {
        let mut snapshot = Snapshot::empty();
        put(&mut snapshot, (4, 3), PieceKind::Pawn, Color::Light);
        put(&mut snapshot, (3, 4), PieceKind::Pawn, Color::Dark);
        put(&mut snapshot, (0, 0), PieceKind::Rook, Color::Light);
        put(&mut snapshot, (0, 7), PieceKind::Rook, Color::Dark);

        assert_eq!(render_move(&snapshot, (4, 3), (3, 4)), Ok("exd5".to_owned()));
        assert_eq!(render_move(&snapshot, (0, 0), (0, 7)), Ok("Rxa8".to_owned()));
    }

    #[test]
    fn castles_render_as_oh_strings() {
        let game =
            parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("fen should parse");
        assert_eq!(render_move(&game, (4, 0), (6, 0)), Ok("O-O".to_owned()));
        assert_eq!(render_move(&game, (4, 0), (2, 0)), Ok("O-O-O".to_owned()));
        assert_eq!(render_move(&game, (4, 7), (2, 7)), Ok("O-O-O".to_owned()));
    }

    #[test]
    fn en_passant_capture_renders_without_capture_marker() {
        // The renderer is occupancy-driven and the en-passant destination
        // square is empty, so the capture reads like a quiet pawn move.
        let game = parse_fen("k7/3p4/8/4P3/8/8/8/K7 b - - 0 1").expect("fen should parse");
        let pushed = apply_move(&game, (3, 6), (3, 4)).expect("double push should apply");
        assert_eq!(render_move(&pushed, (4, 4), (3, 5)), Ok("d6".to_owned()));
    }

    #[test]
    fn rendering_from_an_empty_square_aborts() {
        let snapshot = Snapshot::empty();
        assert_eq!(
            render_move(&snapshot, (3, 3), (3, 4)),
            Err(RulesError::EmptySourceSquare((3, 3)))
        );
    }
}
