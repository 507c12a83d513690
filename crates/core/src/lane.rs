//! Lane module - axis traversal for directional moves
//!
//! A move sweeps the grid one row or column at a time. Rather than
//! parameterizing the shift loop with per-axis accessor callbacks, each
//! row/column is described by a [`Lane`]: the flat index of its leading
//! edge, the flat step toward the trailing edge, and its length. The
//! shift loop then works entirely in lane-local coordinates (0 at the
//! leading edge, always incrementing by one), identical for all four
//! directions.

use twenty48_types::Direction;

/// One row or column, viewed from its leading edge
///
/// The leading edge is the edge tiles slide toward: column 0 for `Left`,
/// the last column for `Right`, row 0 for `Up`, the last row for `Down`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lane {
    /// Flat index of the leading-edge cell
    origin: usize,
    /// Flat-index distance between successive cells, signed
    step: isize,
    /// Number of cells in the lane
    len: usize,
}

impl Lane {
    /// Flat index of lane-local position `i` (0 = leading edge)
    #[inline(always)]
    pub fn at(&self, i: usize) -> usize {
        (self.origin as isize + self.step * i as isize) as usize
    }

    /// Number of cells in the lane
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The lanes swept by a move in `dir` on a `grid_size` board
    ///
    /// Rows for `Left`/`Right`, columns for `Up`/`Down`. Every cell of the
    /// grid belongs to exactly one lane of the sweep.
    pub fn sweep(dir: Direction, grid_size: usize) -> impl Iterator<Item = Lane> {
        let n = grid_size as isize;
        (0..n).map(move |k| {
            let (origin, step) = match dir {
                Direction::Left => (k * n, 1),
                Direction::Right => (k * n + n - 1, -1),
                Direction::Up => (k, n),
                Direction::Down => (k + n * (n - 1), -n),
            };
            Lane {
                origin: origin as usize,
                step,
                len: grid_size,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flatten(dir: Direction, n: usize) -> Vec<Vec<usize>> {
        Lane::sweep(dir, n)
            .map(|lane| (0..lane.len()).map(|i| lane.at(i)).collect())
            .collect()
    }

    #[test]
    fn test_left_lanes_are_rows_leading_west() {
        assert_eq!(
            flatten(Direction::Left, 3),
            vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8]]
        );
    }

    #[test]
    fn test_right_lanes_are_rows_leading_east() {
        assert_eq!(
            flatten(Direction::Right, 3),
            vec![vec![2, 1, 0], vec![5, 4, 3], vec![8, 7, 6]]
        );
    }

    #[test]
    fn test_up_lanes_are_columns_leading_north() {
        assert_eq!(
            flatten(Direction::Up, 3),
            vec![vec![0, 3, 6], vec![1, 4, 7], vec![2, 5, 8]]
        );
    }

    #[test]
    fn test_down_lanes_are_columns_leading_south() {
        assert_eq!(
            flatten(Direction::Down, 3),
            vec![vec![6, 3, 0], vec![7, 4, 1], vec![8, 5, 2]]
        );
    }

    #[test]
    fn test_sweep_covers_every_cell_once() {
        for dir in Direction::all() {
            for n in 1..=5 {
                let mut seen: Vec<usize> = flatten(dir, n).into_iter().flatten().collect();
                seen.sort_unstable();
                let expected: Vec<usize> = (0..n * n).collect();
                assert_eq!(seen, expected, "direction {:?}, size {}", dir, n);
            }
        }
    }
}
