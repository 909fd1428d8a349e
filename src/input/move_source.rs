use std::collections::BTreeMap;

use crate::board::snapshot::Snapshot;
use crate::rules::legal_moves::LegalMove;

/// One turn's worth of move input. The controller treats the returned
/// token purely as a lookup key into the legal-move dictionary; no move
/// parsing happens behind this trait.
pub trait MoveSource {
    fn name(&self) -> &str;

    /// Produce one trimmed token. `Err` means the input channel is gone
    /// and the game cannot continue.
    fn next_token(
        &mut self,
        snapshot: &Snapshot,
        table: &BTreeMap<String, LegalMove>,
    ) -> Result<String, String>;

    /// Called when the previous token matched nothing in the dictionary.
    fn notify_rejected(&mut self, _token: &str) {}
}
