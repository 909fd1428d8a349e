use std::collections::BTreeMap;

use rand::prelude::IndexedRandom;

use crate::board::snapshot::Snapshot;
use crate::input::move_source::MoveSource;
use crate::rules::legal_moves::LegalMove;

/// Selects uniformly from the dictionary keys. Used for a low-effort
/// opponent and for exercising the turn loop in tests.
pub struct RandomSource;

impl RandomSource {
    pub fn new() -> Self {
        RandomSource
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSource for RandomSource {
    fn name(&self) -> &str {
        "random"
    }

    fn next_token(
        &mut self,
        _snapshot: &Snapshot,
        table: &BTreeMap<String, LegalMove>,
    ) -> Result<String, String> {
        let keys: Vec<&String> = table.keys().collect();
        let mut rng = rand::rng();
        let picked = keys
            .as_slice()
            .choose(&mut rng)
            .ok_or("no legal moves to choose from")?;
        Ok((*picked).clone())
    }
}
