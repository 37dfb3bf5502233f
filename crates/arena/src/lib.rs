//! Match harness for the chess strategies
//!
//! This crate provides infrastructure for:
//! - Running games and matches between strategies
//! - Classifying game endings (checkmate, stalemate, move-cap draws)
//! - Saving match results as JSON and loading runs from TOML config files
//!
//! # Usage
//!
//! ```bash
//! # Run a match between the minimax and greedy strategies
//! cargo run -p arena -- match minimax greedy --games 10
//!
//! # Run a match described by a config file
//! cargo run -p arena -- config arena.toml
//! ```

mod match_runner;
mod results;

pub use match_runner::*;
pub use results::*;
