//! Render snapshot - an owned copy of everything a renderer needs
//!
//! Presentation layers read a [`BoardSnapshot`] instead of borrowing the
//! live engine, keeping draw code decoupled from simulation mutation.

use twenty48_types::{Cell, GameState};

/// Owned copy of the visible board state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub grid_size: usize,
    /// Flat cell values, row-major (x + y * grid_size)
    pub cells: Vec<Cell>,
    pub state: GameState,
    /// Flat index of the most recent spawn, for spawn effects
    pub last_spawned: usize,
}

impl BoardSnapshot {
    /// Cell at (x, y), or `None` out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= self.grid_size || y >= self.grid_size {
            return None;
        }
        Some(self.cells[x + y * self.grid_size])
    }

    /// Grid coordinates of the most recent spawn
    pub fn last_spawned_xy(&self) -> (usize, usize) {
        (
            self.last_spawned % self.grid_size,
            self.last_spawned / self.grid_size,
        )
    }
}
