//! Bankruptcy detection and ownership cleanup.

use tracing::{debug, error};

use crate::board::Board;
use crate::error::{Result, SimError};
use crate::player::Player;

/// Returns the players still solvent (budget >= 0), clearing ownership for
/// the first bankrupt player found.
///
/// Only one player's properties are released per call even if several are
/// bankrupt at once; the match engine re-runs this check every turn, so any
/// stragglers are caught on the next check. In practice at most one player
/// can newly go bankrupt between checks, since only a single player acts per
/// turn.
///
/// A shrunken roster with no findable bankrupt player is structurally
/// unreachable; if it ever happens the match must not continue, so it is
/// surfaced as a fatal [`SimError::InconsistentElimination`].
pub fn filter_bankrupt(players: &[Player], board: &mut Board) -> Result<Vec<Player>> {
    let survivors: Vec<Player> = players.iter().filter(|p| p.budget >= 0).cloned().collect();
    if survivors.len() < players.len() {
        let loser = players.iter().find(|p| p.budget < 0).ok_or_else(|| {
            error!("roster shrank but no bankrupt player found");
            SimError::InconsistentElimination
        })?;
        debug!(player = %loser.name, budget = loser.budget, "player eliminated");
        release_properties(&loser.name, board);
    }
    Ok(survivors)
}

/// Clears the owner field of every property held by `name`. Ownership is
/// released, never reassigned.
pub fn release_properties(name: &str, board: &mut Board) {
    for property in &mut board.cells {
        if property.owner.as_deref() == Some(name) {
            property.owner = None;
        }
    }
}
