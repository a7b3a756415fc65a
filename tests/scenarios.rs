//! Reference scenarios on the full-size default grid.

use poly_fill::{fill, Grid};

const RECTANGLE: [(i32, i32); 7] = [(1, 1), (1, 2), (1, 5), (3, 5), (5, 5), (5, 3), (5, 1)];
const TRIANGLE: [(i32, i32); 3] = [(1, 1), (5, 5), (5, 1)];

/// True if any cell of `row` in columns `cols` is empty.
fn has_empty(grid: &Grid, row: usize, cols: std::ops::Range<usize>) -> bool {
    grid.row_slice(row)[cols].contains(&0)
}

fn assert_rectangle_footprint(grid: &Grid) {
    assert_eq!(grid.dimensions(), (19200, 10800));
    assert!(has_empty(grid, 0, 1..6));
    for row in 1..=5 {
        assert!(!has_empty(grid, row, 1..6), "row {}", row);
    }
    assert!(has_empty(grid, 6, 1..6));
}

#[test]
fn rectangle_fast() {
    let result = fill(&RECTANGLE, "fast", None).unwrap();
    assert_rectangle_footprint(&result.grid);
}

#[test]
fn triangle_fast_widens_one_column_per_row() {
    let result = fill(&TRIANGLE, "fast", None).unwrap();
    let grid = &result.grid;
    assert_eq!(grid.dimensions(), (19200, 10800));
    assert!(has_empty(grid, 0, 1..6));
    for row in 1..=5usize {
        assert!(!has_empty(grid, row, 1..row + 1), "row {}", row);
        if row < 5 {
            assert!(!grid.is_filled(row, row + 1), "row {}", row);
        }
    }
    assert!(has_empty(grid, 6, 1..6));
}

#[test]
fn rectangle_rourke() {
    let result = fill(&RECTANGLE, "rourke", None).unwrap();
    assert_rectangle_footprint(&result.grid);
}

#[test]
fn rectangle_flood_with_seed() {
    let result = fill(&RECTANGLE, "flood", Some((3, 3))).unwrap();
    assert_rectangle_footprint(&result.grid);
}

#[test]
fn rectangle_footprint_identical_across_algorithms() {
    let fast = fill(&RECTANGLE, "fast", None).unwrap();
    let rourke = fill(&RECTANGLE, "rourke", None).unwrap();
    let flood = fill(&RECTANGLE, "flood", Some((3, 3))).unwrap();
    assert_eq!(fast.grid.count_filled(), 25);
    assert!(fast.grid.compare(&rourke.grid).unwrap().identical);
    assert!(fast.grid.compare(&flood.grid).unwrap().identical);
}

#[test]
fn unknown_algorithm_is_rejected() {
    let err = fill(&RECTANGLE, "skimage", None).unwrap_err();
    assert!(matches!(err, poly_fill::FillError::InvalidAlgorithm(_)));
}
