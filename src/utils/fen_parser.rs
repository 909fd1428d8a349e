//! FEN-to-Snapshot parser.
//!
//! Consumes the six-field position description once to build the initial
//! snapshot: board layout, side to move, castling rights, en-passant
//! target, and move counters. The halfmove clock is validated and then
//! ignored (no fifty-move rule here). Castling ability is derived from the
//! assembled position before the snapshot is returned.

use crate::board::geometry::algebraic_to_square;
use crate::board::piece::{Color, Piece};
use crate::board::snapshot::{CastlingFlags, Snapshot};
use crate::rules::castling::recompute_ability;

/// Standard chess starting position in Forsyth-Edwards Notation.
pub const STARTING_POSITION_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub fn parse_fen(fen: &str) -> Result<Snapshot, String> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or("Missing board layout in FEN")?;
    let side_part = parts.next().ok_or("Missing side-to-move in FEN")?;
    let castling_part = parts.next().ok_or("Missing castling rights in FEN")?;
    let en_passant_part = parts.next().ok_or("Missing en-passant square in FEN")?;
    let halfmove_part = parts.next().ok_or("Missing halfmove clock in FEN")?;
    let fullmove_part = parts.next().ok_or("Missing fullmove number in FEN")?;

    if parts.next().is_some() {
        return Err("FEN has extra trailing fields".to_owned());
    }

    let mut snapshot = Snapshot::empty();

    parse_board(board_part, &mut snapshot)?;
    snapshot.side_to_move = parse_side_to_move(side_part)?;
    snapshot.castling_rights = parse_castling_rights(castling_part)?;
    snapshot.en_passant_target = parse_en_passant_target(en_passant_part)?;

    halfmove_part
        .parse::<u16>()
        .map_err(|_| format!("Invalid halfmove clock: {halfmove_part}"))?;
    snapshot.fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| format!("Invalid fullmove number: {fullmove_part}"))?;

    recompute_ability(&mut snapshot).map_err(|e| e.to_string())?;

    Ok(snapshot)
}

fn parse_board(board_part: &str, snapshot: &mut Snapshot) -> Result<(), String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err("Board layout must contain 8 ranks".to_owned());
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - fen_rank_idx as i8;
        let mut file: i8 = 0;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                file += empty_count as i8;
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| format!("Invalid piece character '{ch}' in board layout"))?;

            if file >= 8 {
                return Err("Board rank has too many files".to_owned());
            }

            snapshot.place((file, rank), piece);
            file += 1;
        }

        if file != 8 {
            return Err("Board rank does not sum to 8 files".to_owned());
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, String> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(format!("Invalid side-to-move field: {side_part}")),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<CastlingFlags, String> {
    let mut rights = CastlingFlags::none();
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.light_kingside = true,
            'Q' => rights.light_queenside = true,
            'k' => rights.dark_kingside = true,
            'q' => rights.dark_queenside = true,
            _ => return Err(format!("Invalid castling rights character: {ch}")),
        }
    }

    Ok(rights)
}

fn parse_en_passant_target(en_passant_part: &str) -> Result<Option<(i8, i8)>, String> {
    if en_passant_part == "-" {
        return Ok(None);
    }
    Ok(Some(algebraic_to_square(en_passant_part)?))
}

#[cfg(test)]
mod tests {
    use super::{parse_fen, STARTING_POSITION_FEN};
    use crate::board::piece::{Color, PieceKind};
    use crate::utils::render_board::render_board;

    #[test]
    fn parse_starting_fen_and_render_board() {
        let snapshot = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_board(&snapshot));

        assert_eq!(snapshot.side_to_move, Color::Light);
        assert_eq!(snapshot.fullmove_number, 1);
        assert_eq!(snapshot.en_passant_target, None);
        assert!(snapshot.castling_rights.light_kingside);
        assert!(snapshot.castling_rights.dark_queenside);
        assert!(!snapshot.castling_ability.light_kingside);

        let king = snapshot.piece_at((4, 0)).expect("e1 should hold a piece");
        assert_eq!(king.kind, PieceKind::King);
        assert_eq!(king.color, Color::Light);
        let pawn = snapshot.piece_at((0, 6)).expect("a7 should hold a piece");
        assert_eq!(pawn.kind, PieceKind::Pawn);
        assert_eq!(pawn.color, Color::Dark);
    }

    #[test]
    fn en_passant_field_parses_to_a_square() {
        let snapshot = parse_fen("k7/8/8/3pP3/8/8/8/K7 w - d6 0 2").expect("fen should parse");
        assert_eq!(snapshot.en_passant_target, Some((3, 5)));
    }

    #[test]
    fn malformed_strings_are_rejected() {
        assert!(parse_fen("").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 extra")
            .is_err());
    }
}
