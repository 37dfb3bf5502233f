//! Match runner for playing games between strategies

use chess_rules::{Board, Color, Strategy};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::results::{GameResult, MatchResult};

/// Configuration for a match
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Maximum moves per game before declaring a draw
    pub max_moves: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Print progress during the match
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_moves: 200,
            alternate_colors: true,
            verbose: true,
        }
    }
}

/// A full arena run, loadable from a TOML file: two strategy specs (as
/// understood by the CLI, e.g. `minimax:3`) and the match settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArenaConfig {
    pub engine1: String,
    pub engine2: String,
    #[serde(default, rename = "match")]
    pub match_config: MatchConfig,
}

impl ArenaConfig {
    pub fn from_toml_file(path: &Path) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        toml::from_str(&contents).map_err(|e| format!("Failed to parse config: {}", e))
    }
}

/// Runs matches between two strategies
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two strategies
    ///
    /// Returns the result from engine1's perspective
    pub fn run_match(&self, engine1: &mut dyn Strategy, engine2: &mut dyn Strategy) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            // Alternate colors if configured
            let engine1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let game_result = if engine1_white {
                self.play_game(engine1, engine2)
            } else {
                // Flip since engine1 is black this game
                self.play_game(engine2, engine1).flipped()
            };

            result.record(game_result);

            if self.config.verbose {
                let color = if engine1_white { "W" } else { "B" };
                let outcome = match game_result {
                    GameResult::Win => "1-0",
                    GameResult::Loss => "0-1",
                    GameResult::Draw => "1/2",
                };
                println!(
                    "Game {}/{}: {} ({}) - Score: {}-{}-{}",
                    game_num + 1,
                    self.config.num_games,
                    outcome,
                    color,
                    result.wins,
                    result.losses,
                    result.draws
                );
            }
        }

        result
    }

    /// Play a single game, returns the result from White's perspective
    fn play_game(&self, white: &mut dyn Strategy, black: &mut dyn Strategy) -> GameResult {
        let mut board = Board::startpos();

        for _move_num in 0..self.config.max_moves {
            let mover = board.side_to_move;
            let chosen = if mover == Color::White {
                white.choose_move(&board)
            } else {
                black.choose_move(&board)
            };

            match chosen {
                Some(mv) => {
                    let applied = board.try_move(mv.from, mv.to);
                    debug_assert!(applied, "strategy returned an illegal move");
                }
                None => {
                    // No legal moves: mate loses for the side to move,
                    // stalemate is a draw.
                    if board.is_checkmate(mover) {
                        return if mover == Color::White {
                            GameResult::Loss
                        } else {
                            GameResult::Win
                        };
                    }
                    return GameResult::Draw;
                }
            }
        }

        // Move cap reached
        GameResult::Draw
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    engine1: &mut dyn Strategy,
    engine2: &mut dyn Strategy,
    num_games: u32,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        verbose: false,
        ..Default::default()
    };
    MatchRunner::new(config).run_match(engine1, engine2)
}
