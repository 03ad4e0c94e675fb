//! Rent resolution between a visiting player and a property's landlord.

use tracing::warn;

use crate::board::Property;
use crate::player::Player;

/// Both budgets after a completed rent transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RentTransfer {
    pub landlord_budget: i64,
    pub visitor_budget: i64,
}

/// Index of the first active player whose name matches `owner`.
///
/// Names are unique within a match, so the first match is the only match in
/// practice. `None` means the owner is no longer active (eliminated before
/// their ownership was cleared), a recoverable condition rather than an
/// error.
pub fn find_landlord(players: &[Player], owner: &str) -> Option<usize> {
    players.iter().position(|p| p.name == owner)
}

/// Transfers the property's rent from the visitor to the landlord.
///
/// No-op when the property has no owner. When the owner field is set but
/// names no active player, the transfer is skipped and the condition logged;
/// the match carries on. A player landing on their own property pays rent to
/// themselves, a net zero.
pub fn pay_rent(players: &mut [Player], visitor: usize, property: &Property) -> Option<RentTransfer> {
    let owner = property.owner.as_deref()?;
    let Some(landlord) = find_landlord(players, owner) else {
        warn!(
            owner,
            estate = %property.estate,
            "property owner not among active players; rent skipped"
        );
        return None;
    };
    players[landlord].budget += property.rent;
    players[visitor].budget -= property.rent;
    Some(RentTransfer {
        landlord_budget: players[landlord].budget,
        visitor_budget: players[visitor].budget,
    })
}
