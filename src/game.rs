//! Turn sequencing over a history of snapshots.
//!
//! The controller builds the legal-move dictionary for the side to move,
//! classifies terminal states, obtains one token from a move source,
//! reprompts on unknown tokens, and appends the filter's already-simulated
//! snapshot to history. History entries are never mutated after being
//! pushed.

use crate::board::snapshot::Snapshot;
use crate::input::move_source::MoveSource;
use crate::rules::legal_moves::{game_status, legal_move_table, GameStatus};
use crate::utils::fen_parser::{parse_fen, STARTING_POSITION_FEN};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// A move was applied; the notation names it.
    Played { notation: String },
    /// The side to move had no legal moves; nothing changed.
    Finished(GameStatus),
}

pub struct Game {
    history: Vec<Snapshot>,
    notation_history: Vec<String>,
}

impl Game {
    pub fn new_game() -> Self {
        let start =
            parse_fen(STARTING_POSITION_FEN).expect("starting FEN should always parse");
        Game {
            history: vec![start],
            notation_history: Vec::new(),
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, String> {
        let start = parse_fen(fen)?;
        Ok(Game {
            history: vec![start],
            notation_history: Vec::new(),
        })
    }

    pub fn current(&self) -> &Snapshot {
        self.history
            .last()
            .expect("history always holds the initial snapshot")
    }

    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    pub fn notation_history(&self) -> &[String] {
        &self.notation_history
    }

    /// Run one turn against a move source. Unknown tokens reprompt the
    /// source without touching history; a source error ends the game.
    pub fn play_turn(&mut self, source: &mut dyn MoveSource) -> Result<TurnOutcome, String> {
        let table = legal_move_table(self.current()).map_err(|e| e.to_string())?;
        let status = game_status(self.current(), &table).map_err(|e| e.to_string())?;
        if status != GameStatus::InProgress {
            return Ok(TurnOutcome::Finished(status));
        }

        loop {
            let token = source.next_token(self.current(), &table)?;
            match table.get(&token) {
                Some(entry) => {
                    self.history.push(entry.snapshot_after.clone());
                    self.notation_history.push(token.clone());
                    return Ok(TurnOutcome::Played { notation: token });
                }
                None => source.notify_rejected(&token),
            }
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new_game()
    }
}
