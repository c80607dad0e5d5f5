use arcade::error::{Axis, MazeError};
use arcade::maze::{generate, Cell, Grid, MazeGenerator};
use glam::{IVec2, Vec2};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

fn border_cells(grid: &Grid) -> impl Iterator<Item = IVec2> + '_ {
    grid.cells().map(|(cell, _)| cell).filter(|cell| grid.is_border(*cell))
}

#[test]
fn test_generate_default_maze() {
    let grid = generate(21, 21).unwrap();

    assert_that(&grid.cols()).is_equal_to(21);
    assert_that(&grid.rows()).is_equal_to(21);
    assert_that(&grid.get(IVec2::ZERO)).is_equal_to(Some(Cell::Wall));
    assert_that(&grid.get(IVec2::new(1, 1))).is_equal_to(Some(Cell::Passage));
    assert_that(&grid.is_fully_connected()).is_true();
}

#[test]
fn test_border_stays_wall() {
    for (cols, rows) in [(2, 2), (3, 9), (20, 7), (21, 21), (40, 31)] {
        for seed in 0..5 {
            let grid = MazeGenerator::new(cols, rows).unwrap().with_widen_probability(1.0).generate_seeded(seed);
            let carved_border: Vec<IVec2> = border_cells(&grid).filter(|cell| grid.is_passage(*cell)).collect();
            assert_that(&carved_border).is_empty();
        }
    }
}

#[test]
fn test_every_passage_reachable() {
    for probability in [0.0, 0.3, 1.0] {
        for seed in 0..10 {
            let grid = MazeGenerator::new(25, 17)
                .unwrap()
                .with_widen_probability(probability)
                .generate_seeded(seed);
            assert!(grid.is_fully_connected(), "seed {seed} at p={probability}:\n{grid}");
        }
    }
}

#[test]
fn test_no_widening_gives_perfect_tree() {
    let grid = MazeGenerator::new(21, 15).unwrap().with_widen_probability(0.0).generate_seeded(99);
    // 10 x 7 lattice cells joined by 69 carved walls.
    let lattice = 10 * 7;
    assert_eq!(grid.passage_count(), 2 * lattice - 1);

    // Every lattice cell is visited.
    for row in (1..15).step_by(2) {
        for col in (1..21).step_by(2) {
            assert!(grid.is_passage(IVec2::new(col, row)));
        }
    }
}

#[test]
fn test_widening_adds_loops() {
    let tree = MazeGenerator::new(31, 31).unwrap().with_widen_probability(0.0).generate_seeded(5);
    let widened = MazeGenerator::new(31, 31).unwrap().with_widen_probability(1.0).generate_seeded(5);
    assert_that(&widened.passage_count()).is_greater_than(tree.passage_count());
}

#[test]
fn test_widen_probability_out_of_range() {
    let generator = MazeGenerator::new(9, 9).unwrap();
    assert_that(&generator.with_widen_probability(2.5).widen_probability()).is_equal_to(1.0);
    assert_that(&generator.with_widen_probability(-1.0).widen_probability()).is_equal_to(0.0);

    let unset = generator.with_widen_probability(f64::NAN);
    assert_that(&unset.widen_probability()).is_equal_to(0.0);
    let grid = unset.generate_seeded(1);
    assert_eq!(grid, generator.with_widen_probability(0.0).generate_seeded(1));
    assert_eq!(grid.passage_count(), 2 * 4 * 4 - 1);
}

#[test]
fn test_same_seed_same_maze() {
    let generator = MazeGenerator::new(21, 21).unwrap();
    assert_eq!(generator.generate_seeded(1234), generator.generate_seeded(1234));
    assert_ne!(generator.generate_seeded(1), generator.generate_seeded(2));
}

#[test]
fn test_even_dimensions_round_up() {
    let generator = MazeGenerator::new(20, 10).unwrap();
    assert_eq!((generator.cols(), generator.rows()), (21, 11));

    let grid = generator.generate_seeded(0);
    assert_eq!((grid.cols(), grid.rows()), (21, 11));
}

#[test]
fn test_invalid_dimensions() {
    assert_eq!(
        generate(0, 21).unwrap_err(),
        MazeError::InvalidDimension {
            axis: Axis::Columns,
            value: 0
        }
    );
    assert_eq!(
        generate(21, 1).unwrap_err(),
        MazeError::InvalidDimension {
            axis: Axis::Rows,
            value: 1
        }
    );
    assert_that(&generate(0, 0).unwrap_err().to_string()).contains("columns = 0");
}

#[test]
fn test_passage_tiles_and_start() {
    let grid = MazeGenerator::new(9, 9).unwrap().generate_seeded(3);
    let tiles = grid.passage_tiles(64.0);

    assert_that(&tiles.len()).is_equal_to(grid.passage_count());
    assert_that(&grid.start_position(64.0)).is_equal_to(Vec2::new(96.0, 96.0));
    // Row-major: the start cell is the first passage.
    assert_that(&tiles[0]).is_equal_to(Vec2::new(96.0, 96.0));
    for tile in &tiles {
        assert!(!grid.is_wall_at(*tile, 64.0));
    }
}

#[test]
fn test_display_matches_cells() {
    let grid = MazeGenerator::new(5, 5).unwrap().with_widen_probability(0.0).generate_seeded(8);
    let text = grid.to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "#####");
    assert_eq!(lines[4], "#####");
    assert_eq!(lines[1].chars().nth(1), Some('.'));
}
