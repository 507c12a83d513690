//! Game module - the board simulation engine
//!
//! Owns the grid, the game state, and the random source. A turn is one
//! [`GameBoard::apply_move`] call: every lane of the chosen direction is
//! shifted and merged independently, then a tile spawns if anything
//! changed, then move availability decides whether the game is lost.
//! Everything is synchronous and deterministic for a given seed.

use twenty48_types::{
    Cell, Direction, GameState, MOVE_SPAWN_TILE, START_TILE, WIN_TILE,
};

use crate::board::Board;
use crate::lane::Lane;
use crate::rng::SimpleRng;
use crate::snapshot::BoardSnapshot;

/// Result of scanning a lane for the next non-empty cell
enum Hit {
    /// Obstacle at this lane-local index; the lane restarts past it
    Obstacle(usize),
    /// Tile at this lane-local index
    Tile(usize),
}

/// The simulation engine: grid, state, and random source
///
/// Created with a seed so obstacle placement and spawning are
/// reproducible; mutated exclusively through [`GameBoard::apply_move`]
/// and [`GameBoard::reset`].
#[derive(Debug, Clone)]
pub struct GameBoard {
    board: Board,
    state: GameState,
    rng: SimpleRng,
    /// Flat index of the most recent spawn, for presentation effects only
    last_spawned: usize,
    /// Whether any cell changed during the last move
    anything_moved: bool,
}

impl GameBoard {
    /// Create a board with obstacles and one starting tile
    ///
    /// Places `min(obstacle_count, grid_size^2)` obstacles at distinct
    /// random empty cells, then a starting tile of value [`START_TILE`]
    /// if any empty cell remains.
    ///
    /// # Panics
    ///
    /// Panics if `grid_size` is zero.
    pub fn new(grid_size: usize, obstacle_count: usize, seed: u32) -> Self {
        let mut game = Self {
            board: Board::new(grid_size),
            state: GameState::Play,
            rng: SimpleRng::new(seed),
            last_spawned: 0,
            anything_moved: false,
        };
        game.reset(grid_size, obstacle_count);
        game
    }

    /// Create a board from explicit cells, in `Play` state
    ///
    /// Useful for resuming a position or setting up exact scenarios.
    ///
    /// # Panics
    ///
    /// Panics if `cells.len() != grid_size * grid_size` or `grid_size` is
    /// zero.
    pub fn from_cells(grid_size: usize, cells: Vec<Cell>, seed: u32) -> Self {
        Self {
            board: Board::from_cells(grid_size, cells),
            state: GameState::Play,
            rng: SimpleRng::new(seed),
            last_spawned: 0,
            anything_moved: false,
        }
    }

    /// Deal a fresh board, reusing the current random source
    ///
    /// # Panics
    ///
    /// Panics if `grid_size` is zero.
    pub fn reset(&mut self, grid_size: usize, obstacle_count: usize) {
        self.board = Board::new(grid_size);
        self.state = GameState::Play;
        self.last_spawned = 0;
        self.anything_moved = false;

        // The clamp keeps the placement loop finite even when asked for
        // more obstacles than the board has cells.
        let count = obstacle_count.min(self.board.cell_count());
        self.spawn_assuming_space(Cell::Obstacle, count);

        // The starting tile needs the emptiness check: the obstacles may
        // have filled the board completely.
        self.try_spawn(START_TILE);
    }

    /// Apply one directional move; returns whether any cell changed
    ///
    /// A no-op once the game is won or lost. If the move changed the
    /// board, one tile of value [`MOVE_SPAWN_TILE`] spawns at a random
    /// empty cell; if no legal move remains afterwards, the game is lost.
    pub fn apply_move(&mut self, dir: Direction) -> bool {
        if self.state.is_terminal() {
            return false;
        }

        self.anything_moved = false;

        for lane in Lane::sweep(dir, self.board.grid_size()) {
            self.shift_lane(lane);
        }

        if self.anything_moved {
            self.try_spawn(MOVE_SPAWN_TILE);
        }

        // A turn that just won stays won, so the availability check only
        // demotes an ongoing game.
        if self.state == GameState::Play && !self.moves_available() {
            self.state = GameState::Lose;
        }

        self.anything_moved
    }

    /// Shift and merge a single lane
    ///
    /// `cursor` is the lane-local position the next settled tile will
    /// occupy. Each iteration pulls the nearest tile to the cursor,
    /// merges it with the next equal tile or packs the next unequal tile
    /// behind it, then advances. Obstacles restart the process just past
    /// themselves, so the stretches between them are handled as
    /// independent segments.
    fn shift_lane(&mut self, lane: Lane) {
        let mut cursor = 0;
        while cursor + 1 < lane.len() {
            let first = match self.scan(lane, cursor) {
                None => break,
                Some(Hit::Obstacle(at)) => {
                    cursor = at + 1;
                    continue;
                }
                Some(Hit::Tile(at)) => at,
            };

            let first_cell = self.board.at(lane.at(first));
            if first != cursor {
                self.board.set_at(lane.at(cursor), first_cell);
                self.board.set_at(lane.at(first), Cell::Empty);
                self.anything_moved = true;
            }

            let second = match self.scan(lane, first + 1) {
                None => break,
                Some(Hit::Obstacle(at)) => {
                    cursor = at + 1;
                    continue;
                }
                Some(Hit::Tile(at)) => at,
            };

            let second_cell = self.board.at(lane.at(second));
            let merged = match (first_cell, second_cell) {
                (Cell::Tile(a), Cell::Tile(b)) if a == b => Some(a + b),
                _ => None,
            };

            if let Some(sum) = merged {
                self.board.set_at(lane.at(cursor), Cell::Tile(sum));
                self.board.set_at(lane.at(second), Cell::Empty);
                self.anything_moved = true;
                if sum == WIN_TILE {
                    self.state = GameState::Win;
                }
            } else if second != cursor + 1 {
                self.board.set_at(lane.at(cursor + 1), second_cell);
                self.board.set_at(lane.at(second), Cell::Empty);
                self.anything_moved = true;
            }

            cursor += 1;
        }
    }

    /// Find the next non-empty cell at or after `from`, lane-local
    fn scan(&self, lane: Lane, from: usize) -> Option<Hit> {
        for i in from..lane.len() {
            match self.board.at(lane.at(i)) {
                Cell::Empty => continue,
                Cell::Obstacle => return Some(Hit::Obstacle(i)),
                Cell::Tile(_) => return Some(Hit::Tile(i)),
            }
        }
        None
    }

    /// True iff at least one tile can slide or merge somewhere
    ///
    /// Recomputed from scratch every turn; moves and merges can create
    /// and destroy availability anywhere on the board.
    pub fn moves_available(&self) -> bool {
        let n = self.board.grid_size();
        for y in 0..n {
            for x in 0..n {
                if let Some(Cell::Tile(v)) = self.board.get(x, y) {
                    for neighbor in self.board.neighbors(x, y) {
                        if neighbor.is_empty() || neighbor == Cell::Tile(v) {
                            return true;
                        }
                    }
                }
            }
        }
        false
    }

    /// Place `count` copies of `cell` on random empty cells
    ///
    /// Rejection-samples cell indices, so the caller must guarantee
    /// enough empty cells exist.
    fn spawn_assuming_space(&mut self, cell: Cell, count: usize) {
        let cell_count = self.board.cell_count() as u32;
        let mut remaining = count;

        while remaining > 0 {
            let idx = self.rng.next_range(cell_count) as usize;
            if self.board.at(idx).is_empty() {
                self.board.set_at(idx, cell);
                self.last_spawned = idx;
                remaining -= 1;
            }
        }
    }

    /// Spawn one tile of `value` if the board has room
    fn try_spawn(&mut self, value: u32) -> bool {
        let has_space = self.board.has_empty();
        if has_space {
            self.spawn_assuming_space(Cell::Tile(value), 1);
        }
        has_space
    }

    /// The underlying grid
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Edge length of the grid
    pub fn grid_size(&self) -> usize {
        self.board.grid_size()
    }

    /// Cell at (x, y), or `None` out of bounds
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.board.get(x, y)
    }

    /// Flat cell storage, row-major
    pub fn cells(&self) -> &[Cell] {
        self.board.cells()
    }

    /// Current game state
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Flat index of the most recently spawned item
    pub fn last_spawned(&self) -> usize {
        self.last_spawned
    }

    /// Grid coordinates of the most recently spawned item
    pub fn last_spawned_xy(&self) -> (usize, usize) {
        let n = self.board.grid_size();
        (self.last_spawned % n, self.last_spawned / n)
    }

    /// Whether the last move changed any cell
    pub fn anything_moved(&self) -> bool {
        self.anything_moved
    }

    /// Owned copy of the visible state for renderers
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            grid_size: self.board.grid_size(),
            cells: self.board.cells().to_vec(),
            state: self.state,
            last_spawned: self.last_spawned,
        }
    }
}

impl Default for GameBoard {
    fn default() -> Self {
        Self::new(
            twenty48_types::DEFAULT_GRID_SIZE,
            twenty48_types::DEFAULT_OBSTACLE_COUNT,
            1,
        )
    }
}
