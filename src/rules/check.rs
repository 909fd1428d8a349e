use crate::board::piece::Color;
use crate::board::snapshot::Snapshot;
use crate::errors::RulesResult;
use crate::moves::raw::raw_moves;

/// Whether `color`'s king is attacked: the raw move set of every
/// enemy-occupied square is generated and the king square looked for in
/// each. Costs a full-board generation, which is fine at one evaluation
/// per legality probe.
pub fn is_king_in_check(snapshot: &Snapshot, color: Color) -> RulesResult<bool> {
    let king_square = snapshot.find_king(color)?;

    for from in snapshot.squares_of(color.opposite()) {
        if raw_moves(snapshot, from).contains(&king_square) {
            return Ok(true);
        }
    }

    Ok(false)
}
