//! Players and their purchasing personalities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Every player starts a match with this many credits.
pub const STARTING_BUDGET: i64 = 300;

/// The closed set of purchasing personalities.
///
/// Declaration order is the canonical order: it drives report rendering and
/// breaks ties when two personalities hold the same win count.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Personality {
    /// Buys any property it lands on, affordable or not.
    Impulsive,
    /// Buys only properties valued above 500.
    Exigent,
    /// Buys only if at least 80 credits remain after the purchase.
    Cautious,
    /// Buys with probability 0.5, independent of value or affordability.
    Random,
}

impl Personality {
    pub const ALL: [Personality; 4] = [
        Personality::Impulsive,
        Personality::Exigent,
        Personality::Cautious,
        Personality::Random,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Personality::Impulsive => "Impulsive",
            Personality::Exigent => "Exigent",
            Personality::Cautious => "Cautious",
            Personality::Random => "Random",
        }
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One participant in a match.
///
/// `name` is the player's identity within a match (unique by construction);
/// `personality` never changes for the match's lifetime. A budget below zero
/// marks the player for elimination, but the stored value itself is left
/// untouched when the player is removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub personality: Personality,
    pub budget: i64,
}

impl Player {
    pub fn new(name: impl Into<String>, personality: Personality, budget: i64) -> Self {
        Self {
            name: name.into(),
            personality,
            budget,
        }
    }
}

/// The standard four-player roster, one player per personality, in
/// declaration order. Callers shuffle the starting order per match.
pub fn default_roster(starting_budget: i64) -> Vec<Player> {
    vec![
        Player::new("Player One", Personality::Impulsive, starting_budget),
        Player::new("Player Two", Personality::Exigent, starting_budget),
        Player::new("Player Three", Personality::Cautious, starting_budget),
        Player::new("Player Four", Personality::Random, starting_budget),
    ]
}
