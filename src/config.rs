/// External configuration loader.
///
/// Reads `config.toml` from the current working directory.
/// Falls back to sensible defaults if the file is missing or incomplete.
use serde::Deserialize;

use twenty48::types::{DEFAULT_GRID_SIZE, DEFAULT_OBSTACLE_COUNT};

/// Resolved settings for the autoplay runner
#[derive(Clone, Debug)]
pub struct RunConfig {
    pub grid_size: usize,
    pub obstacle_count: usize,
    pub seed: u32,
    pub games: u32,
    pub max_turns: u32,
}

// ── TOML Schema (with serde defaults) ──

#[derive(Deserialize, Debug, Default)]
struct TomlConfig {
    #[serde(default)]
    board: TomlBoard,
    #[serde(default)]
    run: TomlRun,
}

#[derive(Deserialize, Debug)]
struct TomlBoard {
    #[serde(default = "default_grid_size")]
    grid_size: usize,
    #[serde(default = "default_obstacles")]
    obstacles: usize,
}

#[derive(Deserialize, Debug)]
struct TomlRun {
    #[serde(default = "default_seed")]
    seed: u32,
    #[serde(default = "default_games")]
    games: u32,
    #[serde(default = "default_max_turns")]
    max_turns: u32,
}

// ── Defaults ──

fn default_grid_size() -> usize { DEFAULT_GRID_SIZE }
fn default_obstacles() -> usize { DEFAULT_OBSTACLE_COUNT }
fn default_seed() -> u32 { 1 }
fn default_games() -> u32 { 1 }
fn default_max_turns() -> u32 { 10_000 }

impl Default for TomlBoard {
    fn default() -> Self {
        TomlBoard {
            grid_size: default_grid_size(),
            obstacles: default_obstacles(),
        }
    }
}

impl Default for TomlRun {
    fn default() -> Self {
        TomlRun {
            seed: default_seed(),
            games: default_games(),
            max_turns: default_max_turns(),
        }
    }
}

// ── Loading ──

impl RunConfig {
    /// Load config from `config.toml` in the working directory.
    /// Missing file or missing keys gracefully fall back to defaults.
    pub fn load() -> Self {
        let toml_cfg = match std::fs::read_to_string("config.toml") {
            Ok(text) => match toml::from_str::<TomlConfig>(&text) {
                Ok(cfg) => cfg,
                Err(e) => {
                    eprintln!("Warning: config.toml parse error: {e}");
                    eprintln!("Using default settings.");
                    TomlConfig::default()
                }
            },
            Err(_) => TomlConfig::default(),
        };

        RunConfig {
            grid_size: toml_cfg.board.grid_size.max(1),
            obstacle_count: toml_cfg.board.obstacles,
            seed: toml_cfg.run.seed,
            games: toml_cfg.run.games,
            max_turns: toml_cfg.run.max_turns,
        }
    }
}
