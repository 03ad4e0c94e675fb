//! Aggregate statistics over a batch of trials.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::engine::MatchOutcome;
use crate::player::Personality;

/// Running totals folded from per-match outcomes.
///
/// `merge` is commutative and associative, so partial aggregates from
/// parallel workers combine to the same result in any order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialStats {
    pub timeouts: u32,
    pub total_turns: u64,
    pub wins: BTreeMap<Personality, u32>,
}

impl Default for TrialStats {
    fn default() -> Self {
        Self {
            timeouts: 0,
            total_turns: 0,
            wins: Personality::ALL.iter().map(|&p| (p, 0)).collect(),
        }
    }
}

impl TrialStats {
    /// Folds one match outcome into the totals.
    pub fn record(&mut self, outcome: &MatchOutcome) {
        if outcome.timed_out {
            self.timeouts += 1;
        }
        self.total_turns += u64::from(outcome.turns);
        *self.wins.entry(outcome.winner).or_default() += 1;
    }

    /// Combines two partial aggregates.
    pub fn merge(mut self, other: Self) -> Self {
        self.timeouts += other.timeouts;
        self.total_turns += other.total_turns;
        for (personality, count) in other.wins {
            *self.wins.entry(personality).or_default() += count;
        }
        self
    }

    pub fn wins_for(&self, personality: Personality) -> u32 {
        self.wins.get(&personality).copied().unwrap_or(0)
    }

    pub fn total_wins(&self) -> u32 {
        self.wins.values().sum()
    }

    pub fn average_turns(&self, trials: u32) -> f64 {
        if trials == 0 {
            return 0.0;
        }
        self.total_turns as f64 / f64::from(trials)
    }

    pub fn win_percentage(&self, personality: Personality, trials: u32) -> f64 {
        if trials == 0 {
            return 0.0;
        }
        f64::from(self.wins_for(personality)) / f64::from(trials) * 100.0
    }

    /// Personality with the most wins; ties go to the first personality in
    /// declaration order.
    pub fn top_personality(&self) -> Personality {
        let mut best = Personality::ALL[0];
        for personality in Personality::ALL {
            if self.wins_for(personality) > self.wins_for(best) {
                best = personality;
            }
        }
        best
    }

    /// The human-readable end-of-batch report.
    pub fn render_report(&self, trials: u32) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Finished by timeout: {}", self.timeouts);
        let _ = writeln!(out);
        let _ = writeln!(out, "Average turns per match: {:.2}", self.average_turns(trials));
        let _ = writeln!(out);
        let _ = writeln!(out, "Win percentage by personality:");
        for personality in Personality::ALL {
            let _ = writeln!(
                out,
                "{}: {:.2}%",
                personality,
                self.win_percentage(personality, trials)
            );
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "Most winning personality: {}", self.top_personality());
        out
    }
}
