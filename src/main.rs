//! Headless autoplay runner (default binary).
//!
//! This is a smoke-runner for the simulation core: it plays seeded games
//! with uniformly random directions and prints a summary per game plus
//! the final board. There is no interactive input or terminal UI here;
//! rendering is a separate concern that consumes the same snapshot API.

mod config;

use anyhow::{Context, Result};

use twenty48::core::{GameBoard, SimpleRng};
use twenty48::types::Direction;

use crate::config::RunConfig;

fn main() -> Result<()> {
    let mut cfg = RunConfig::load();

    // Optional CLI override: twenty48 [seed]
    if let Some(arg) = std::env::args().nth(1) {
        cfg.seed = arg
            .parse::<u32>()
            .with_context(|| format!("invalid seed '{arg}'"))?;
    }

    for game_index in 0..cfg.games {
        let seed = cfg.seed.wrapping_add(game_index);
        run_game(&cfg, seed, game_index);
    }

    Ok(())
}

fn run_game(cfg: &RunConfig, seed: u32, game_index: u32) {
    let mut game = GameBoard::new(cfg.grid_size, cfg.obstacle_count, seed);
    // Separate stream for direction picks so board spawns stay a pure
    // function of the board seed.
    let mut dice = SimpleRng::new(seed ^ 0x9e37_79b9);

    let mut turns = 0u32;
    while !game.state().is_terminal() && turns < cfg.max_turns {
        let dir = Direction::all()[dice.next_range(4) as usize];
        game.apply_move(dir);
        turns += 1;
    }

    let highest = game
        .cells()
        .iter()
        .filter_map(|c| c.value())
        .max()
        .unwrap_or(0);

    println!(
        "game {game_index} (seed {seed}): {} after {turns} turns, highest tile {highest}",
        game.state().as_str()
    );
    print!("{}", game.board());
}
