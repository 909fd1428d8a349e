use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};

use crate::board::piece::Color;
use crate::board::snapshot::Snapshot;
use crate::input::move_source::MoveSource;
use crate::rules::legal_moves::LegalMove;

/// Reads one trimmed token per turn from stdin. The token "moves" lists
/// the current dictionary instead of being submitted.
pub struct TerminalSource;

impl TerminalSource {
    pub fn new() -> Self {
        TerminalSource
    }
}

impl Default for TerminalSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSource for TerminalSource {
    fn name(&self) -> &str {
        "terminal"
    }

    fn next_token(
        &mut self,
        snapshot: &Snapshot,
        table: &BTreeMap<String, LegalMove>,
    ) -> Result<String, String> {
        let stdin = io::stdin();
        let mut line = String::new();

        loop {
            let side = match snapshot.side_to_move {
                Color::Light => "light",
                Color::Dark => "dark",
            };
            print!("{side} to move ({} legal moves) > ", table.len());
            io::stdout().flush().map_err(|e| e.to_string())?;

            line.clear();
            let read = stdin
                .lock()
                .read_line(&mut line)
                .map_err(|e| e.to_string())?;
            if read == 0 {
                return Err("input stream closed".to_owned());
            }

            let token = line.trim();
            if token.is_empty() {
                continue;
            }
            if token == "moves" {
                let keys: Vec<&str> = table.keys().map(String::as_str).collect();
                println!("{}", keys.join(" "));
                continue;
            }
            return Ok(token.to_owned());
        }
    }

    fn notify_rejected(&mut self, token: &str) {
        println!("'{token}' is not a legal move here (try 'moves')");
    }
}
