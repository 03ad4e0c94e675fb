//! # es_core - Deterministic Board Game Match Simulation Engine
//!
//! This library simulates matches of a Monopoly-style board game among four
//! AI agents with fixed purchasing personalities, and aggregates win/turn
//! statistics across batches of independent trials.
//!
//! ## Features
//! - 100% deterministic simulation (same seed = same result)
//! - Closed set of four purchasing personalities, exhaustively testable
//! - Parallel trial batches with deterministic per-trial seeding
//! - JSON-serializable outcomes and aggregates

pub mod board;
pub mod catalog;
pub mod elimination;
pub mod engine;
pub mod error;
pub mod player;
pub mod policy;
pub mod rent;
pub mod runner;
pub mod stats;

// Re-export the main simulation types
pub use board::{Board, Property, BOARD_SIZE};
pub use catalog::{load_property_names, placeholder_names};
pub use engine::{MatchEngine, MatchOutcome, LAP_BONUS, TURN_LIMIT};
pub use error::{Result, SimError};
pub use player::{Personality, Player, STARTING_BUDGET};
pub use runner::{run_trials, TrialConfig, DEFAULT_TRIALS};
pub use stats::TrialStats;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
