//! Board tests - grid storage behaviors through the facade API

use twenty48::core::Board;
use twenty48::types::Cell;

#[test]
fn test_board_new_empty() {
    let board = Board::new(5);
    assert_eq!(board.grid_size(), 5);
    assert_eq!(board.cell_count(), 25);

    for y in 0..5 {
        for x in 0..5 {
            assert_eq!(board.get(x, y), Some(Cell::Empty));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new(4);
    assert_eq!(board.get(4, 0), None);
    assert_eq!(board.get(0, 4), None);
    assert_eq!(board.get(100, 100), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new(4);

    assert!(board.set(2, 3, Cell::Tile(32)));
    assert_eq!(board.get(2, 3), Some(Cell::Tile(32)));

    assert!(board.set(0, 0, Cell::Obstacle));
    assert_eq!(board.get(0, 0), Some(Cell::Obstacle));

    assert!(board.set(2, 3, Cell::Empty));
    assert_eq!(board.get(2, 3), Some(Cell::Empty));
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new(4);
    assert!(!board.set(4, 0, Cell::Tile(2)));
    assert!(!board.set(0, 4, Cell::Tile(2)));
}

#[test]
fn test_board_flat_storage_is_row_major() {
    let mut board = Board::new(3);
    board.set(1, 2, Cell::Tile(8));
    assert_eq!(board.cells()[1 + 2 * 3], Cell::Tile(8));
}

#[test]
fn test_board_empty_counting() {
    let mut board = Board::new(2);
    assert_eq!(board.count_empty(), 4);
    assert!(board.has_empty());

    board.set(0, 0, Cell::Obstacle);
    board.set(1, 0, Cell::Tile(2));
    board.set(0, 1, Cell::Tile(2));
    board.set(1, 1, Cell::Tile(4));
    assert_eq!(board.count_empty(), 0);
    assert!(!board.has_empty());
}

#[test]
fn test_board_neighbors_respect_bounds() {
    let board = Board::new(1);
    assert!(board.neighbors(0, 0).is_empty());

    let board = Board::new(3);
    assert_eq!(board.neighbors(0, 0).len(), 2);
    assert_eq!(board.neighbors(1, 0).len(), 3);
    assert_eq!(board.neighbors(1, 1).len(), 4);
}

#[test]
fn test_board_display_layout() {
    let board = Board::from_cells(
        2,
        vec![Cell::Tile(2), Cell::Empty, Cell::Obstacle, Cell::Tile(1024)],
    );
    let text = board.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains('2'));
    assert!(lines[0].contains('.'));
    assert!(lines[1].contains('#'));
    assert!(lines[1].contains("1024"));
}
