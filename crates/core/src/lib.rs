//! Core simulation crate - pure, deterministic, and testable
//!
//! This crate contains the whole board simulation for the obstacle
//! variant of 2048. It has **zero dependencies** on UI, networking, or
//! I/O, making it:
//!
//! - **Deterministic**: the same seed produces identical games
//! - **Testable**: every rule is exercised by unit and integration tests
//! - **Portable**: runs in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: square grid storage with bounds-checked access
//! - [`lane`]: per-direction row/column traversal descriptors
//! - [`game`]: the shift/merge engine, win/loss decisions, spawning
//! - [`rng`]: seedable LCG random source for placement
//! - [`snapshot`]: owned state copies for renderers
//!
//! # Game Rules
//!
//! - A move slides every tile toward one edge; obstacles block sliding
//!   and split rows/columns into independent segments
//! - Two adjacent-after-sliding equal tiles merge into their sum; each
//!   tile merges at most once per move
//! - A merge producing 2048 wins; a board with no legal move loses
//! - Every move that changes the board spawns one value-1 tile at a
//!   random empty cell
//!
//! # Example
//!
//! ```
//! use twenty48_core::GameBoard;
//! use twenty48_types::{Direction, GameState};
//!
//! let mut game = GameBoard::new(6, 4, 12345);
//! game.apply_move(Direction::Left);
//!
//! let snapshot = game.snapshot();
//! assert_eq!(snapshot.grid_size, 6);
//! assert_ne!(snapshot.state, GameState::Win);
//! ```

pub mod board;
pub mod game;
pub mod lane;
pub mod rng;
pub mod snapshot;

pub use twenty48_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game::GameBoard;
pub use lane::Lane;
pub use rng::SimpleRng;
pub use snapshot::BoardSnapshot;
