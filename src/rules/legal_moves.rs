//! Legality filtering and the per-turn move dictionary.
//!
//! Every raw move is applied to a private copy of the snapshot and kept
//! only when the mover's own king is safe afterwards. One mechanism rejects
//! walking into check, ignoring an existing check, and breaking a pin; no
//! separate pin detection exists. The dictionary keys are rendered
//! notation, exactly the legal moves of the side to move.

use std::collections::BTreeMap;

use crate::board::geometry::Square;
use crate::board::piece::Color;
use crate::board::snapshot::Snapshot;
use crate::errors::RulesResult;
use crate::moves::raw::raw_moves;
use crate::notation::render_move;
use crate::rules::apply_move::apply_move;
use crate::rules::check::is_king_in_check;

/// A vetted move together with the snapshot it produces, so the controller
/// never re-applies what the filter already simulated.
#[derive(Debug, Clone)]
pub struct LegalMove {
    pub from: Square,
    pub to: Square,
    pub snapshot_after: Snapshot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
}

/// Legal destinations for the piece on one square. An empty origin yields
/// an empty list.
pub fn legal_destinations(snapshot: &Snapshot, from: Square) -> RulesResult<Vec<Square>> {
    let Some(piece) = snapshot.piece_at(from) else {
        return Ok(Vec::new());
    };

    let mut out = Vec::new();
    for to in raw_moves(snapshot, from) {
        let probe = apply_move(snapshot, from, to)?;
        if !is_king_in_check(&probe, piece.color)? {
            out.push(to);
        }
    }
    Ok(out)
}

/// The full legal-move dictionary for the side to move, keyed by rendered
/// notation.
pub fn legal_move_table(snapshot: &Snapshot) -> RulesResult<BTreeMap<String, LegalMove>> {
    let mover = snapshot.side_to_move;
    let mut table = BTreeMap::new();

    for from in snapshot.squares_of(mover) {
        for to in raw_moves(snapshot, from) {
            let after = apply_move(snapshot, from, to)?;
            if is_king_in_check(&after, mover)? {
                continue;
            }
            let notation = render_move(snapshot, from, to)?;
            table.insert(
                notation,
                LegalMove {
                    from,
                    to,
                    snapshot_after: after,
                },
            );
        }
    }

    Ok(table)
}

/// Terminal-state classification for the side to move, evaluated once per
/// turn against its dictionary.
pub fn game_status(
    snapshot: &Snapshot,
    table: &BTreeMap<String, LegalMove>,
) -> RulesResult<GameStatus> {
    if !table.is_empty() {
        return Ok(GameStatus::InProgress);
    }
    if is_king_in_check(snapshot, snapshot.side_to_move)? {
        Ok(GameStatus::Checkmate {
            winner: snapshot.side_to_move.opposite(),
        })
    } else {
        Ok(GameStatus::Stalemate)
    }
}

#[cfg(test)]
mod tests {
    use super::{game_status, legal_destinations, legal_move_table, GameStatus};
    use crate::board::piece::Color;
    use crate::rules::check::is_king_in_check;
    use crate::utils::fen_parser::{parse_fen, STARTING_POSITION_FEN};

    #[test]
    fn starting_position_has_twenty_legal_moves() {
        let game = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        let table = legal_move_table(&game).expect("table should build");
        assert_eq!(table.len(), 20);
        assert!(table.contains_key("e4"));
        assert!(table.contains_key("Nf3"));
        assert!(!table.contains_key("O-O"));
    }

    #[test]
    fn no_legal_move_leaves_the_mover_in_check() {
        let game = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        let table = legal_move_table(&game).expect("table should build");
        for entry in table.values() {
            let still_checked = is_king_in_check(&entry.snapshot_after, Color::Light)
                .expect("check probe should succeed");
            assert!(!still_checked);
        }
    }

    #[test]
    fn a_pinned_rook_may_only_slide_along_the_pin_file() {
        let game = parse_fen("4k3/4r3/8/8/8/8/4R3/4K3 w - - 0 1").expect("fen should parse");
        let mut destinations =
            legal_destinations(&game, (4, 1)).expect("destinations should build");
        destinations.sort();
        assert_eq!(
            destinations,
            vec![(4, 2), (4, 3), (4, 4), (4, 5), (4, 6)]
        );
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let game = parse_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 0 3")
            .expect("fen should parse");
        let table = legal_move_table(&game).expect("table should build");
        assert!(table.is_empty());
        assert_eq!(
            game_status(&game, &table).expect("status should evaluate"),
            GameStatus::Checkmate {
                winner: Color::Dark
            }
        );
    }

    #[test]
    fn a_cornered_but_unchecked_king_is_stalemate() {
        let game = parse_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("fen should parse");
        let table = legal_move_table(&game).expect("table should build");
        assert!(table.is_empty());
        assert_eq!(
            game_status(&game, &table).expect("status should evaluate"),
            GameStatus::Stalemate
        );
    }

    #[test]
    fn castle_entries_respect_ability_not_just_rights() {
        let game = parse_fen("4k3/8/8/8/8/5r2/8/R3K2R w KQ - 0 1").expect("fen should parse");
        let table = legal_move_table(&game).expect("table should build");
        assert!(table.contains_key("O-O-O"));
        assert!(!table.contains_key("O-O"));
    }

    #[test]
    fn dictionary_keys_round_trip_to_their_moves() {
        let game = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        let table = legal_move_table(&game).expect("table should build");
        for (key, entry) in &table {
            let rendered = crate::notation::render_move(&game, entry.from, entry.to)
                .expect("rendering a legal move should succeed");
            assert_eq!(&rendered, key);
            let looked_up = table.get(&rendered).expect("key should be present");
            assert_eq!((looked_up.from, looked_up.to), (entry.from, entry.to));
        }
    }

    #[test]
    fn empty_origin_square_has_no_legal_destinations() {
        let game = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert!(legal_destinations(&game, (4, 4))
            .expect("probe should succeed")
            .is_empty());
    }
}
