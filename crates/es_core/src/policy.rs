//! Agent purchase decision policy.
//!
//! Each personality maps (budget, value) to a buy/no-buy decision. Three of
//! the four rules are deterministic; only `Random` consumes the RNG.

use rand::Rng;

use crate::board::Property;
use crate::player::{Personality, Player};

impl Personality {
    /// The purchase predicate for this personality.
    ///
    /// Affordability is deliberately NOT part of the rule for Impulsive and
    /// Exigent: an Impulsive player happily goes negative on a purchase,
    /// which is the mechanism by which it gets eliminated. Only Cautious
    /// checks its remaining balance.
    pub fn wants_purchase<R: Rng>(self, budget: i64, value: i64, rng: &mut R) -> bool {
        match self {
            Personality::Impulsive => true,
            Personality::Exigent => value > 500,
            Personality::Cautious => budget - value >= 80,
            Personality::Random => rng.gen_bool(0.5),
        }
    }
}

/// Attempts the purchase: sets the owner and debits the buyer if and only if
/// the personality rule fires; otherwise leaves both untouched.
///
/// Must only be called on an unowned property; the match engine guarantees
/// this by resolving rent first.
pub fn buy_property<R: Rng>(player: &mut Player, property: &mut Property, rng: &mut R) {
    debug_assert!(property.owner.is_none(), "purchase attempted on owned property");
    if player
        .personality
        .wants_purchase(player.budget, property.value, rng)
    {
        property.owner = Some(player.name.clone());
        player.budget -= property.value;
    }
}
