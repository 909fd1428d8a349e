//! Terminal-oriented Unicode board renderer.
//!
//! Presentation only: reads the grid through the snapshot's accessors and
//! never touches rule logic.

use crate::board::piece::{Color, Piece, PieceKind};
use crate::board::snapshot::Snapshot;

/// Render the board to a Unicode string for terminal output, rank 8 at the
/// top.
pub fn render_board(snapshot: &Snapshot) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0i8..8).rev() {
        out.push(char::from(b'1' + rank as u8));
        out.push(' ');

        for file in 0i8..8 {
            match snapshot.piece_at((file, rank)) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank as u8));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}
