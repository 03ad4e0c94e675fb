//! Trial runner: batches of independent matches.
//!
//! Each trial builds a fresh roster and board, runs one match, and yields a
//! [`MatchOutcome`]. Trials share no state, so the batch runs on rayon; each
//! trial's RNG streams are derived from the base seed, making the aggregate
//! deterministic for a fixed seed regardless of worker count.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tracing::info;

use crate::board::{Board, BOARD_SIZE};
use crate::engine::MatchEngine;
use crate::error::Result;
use crate::player::{default_roster, STARTING_BUDGET};
use crate::stats::TrialStats;

/// Trial count used when the caller does not override it.
pub const DEFAULT_TRIALS: u32 = 300;

/// Property values are drawn uniformly from this range per match.
pub const VALUE_MIN: i64 = 200;
pub const VALUE_MAX: i64 = 4499;

/// Configuration for one batch of trials.
#[derive(Debug, Clone)]
pub struct TrialConfig {
    pub trials: u32,
    /// Base seed; per-trial streams are derived from it.
    pub seed: u64,
    pub starting_budget: i64,
    /// The 20 property names shared by every trial's board.
    pub property_names: Vec<String>,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: 0,
            starting_budget: STARTING_BUDGET,
            property_names: crate::catalog::placeholder_names(),
        }
    }
}

/// Runs the whole batch in parallel and merges the partial aggregates.
pub fn run_trials(config: &TrialConfig) -> Result<TrialStats> {
    let stats = (0..config.trials)
        .into_par_iter()
        .map(|trial| run_trial(config, trial))
        .try_reduce(TrialStats::default, |a, b| Ok(a.merge(b)))?;
    info!(
        trials = config.trials,
        seed = config.seed,
        timeouts = stats.timeouts,
        "trial batch finished"
    );
    Ok(stats)
}

fn run_trial(config: &TrialConfig, trial: u32) -> Result<TrialStats> {
    // Separate streams for match setup and for in-match rolls, so a change
    // in setup draws cannot shift the match replay.
    let mut setup_rng = ChaCha8Rng::seed_from_u64(derive_seed(config.seed, trial, "setup"));

    let mut players = default_roster(config.starting_budget);
    players.shuffle(&mut setup_rng);

    let values: Vec<i64> = (0..BOARD_SIZE)
        .map(|_| setup_rng.gen_range(VALUE_MIN..=VALUE_MAX))
        .collect();
    let board = Board::build(config.property_names.clone(), &values)?;

    let engine = MatchEngine::new(players, board, derive_seed(config.seed, trial, "match"));
    let outcome = engine.play()?;

    let mut stats = TrialStats::default();
    stats.record(&outcome);
    Ok(stats)
}

/// Per-trial, per-stream seed derivation from the base seed.
fn derive_seed(base: u64, trial: u32, stream: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    base.hash(&mut hasher);
    trial.hash(&mut hasher);
    stream.hash(&mut hasher);
    hasher.finish()
}
