//! Randomized maze generation: depth-first carving followed by a widening pass.

use glam::IVec2;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::constants::WIDEN_PROBABILITY;
use crate::error::{Axis, MazeError};
use crate::maze::direction::Direction;
use crate::maze::grid::{Cell, Grid};

/// Generates mazes of a fixed size.
///
/// Dimensions are normalized to odd values so walls and passages alternate on a regular lattice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MazeGenerator {
    cols: u32,
    rows: u32,
    widen_probability: f64,
}

/// One pending step of the depth-first carve.
struct CarveFrame {
    cell: IVec2,
    directions: [Direction; 4],
    next: usize,
}

impl MazeGenerator {
    /// Creates a generator, rounding even dimensions up to the next odd value.
    ///
    /// Zero is rejected, as is one: a single row or column leaves no interior for the start cell.
    pub fn new(cols: u32, rows: u32) -> Result<Self, MazeError> {
        Ok(Self {
            cols: normalize(Axis::Columns, cols)?,
            rows: normalize(Axis::Rows, rows)?,
            widen_probability: WIDEN_PROBABILITY,
        })
    }

    /// Overrides the widening probability. Values are clamped to `[0, 1]`; NaN disables widening.
    pub fn with_widen_probability(mut self, probability: f64) -> Self {
        self.widen_probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        self
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn widen_probability(&self) -> f64 {
        self.widen_probability
    }

    /// Generates a maze deterministically from a seed.
    pub fn generate_seeded(&self, seed: u64) -> Grid {
        self.generate_with(&mut SmallRng::seed_from_u64(seed))
    }

    /// Generates a maze using the provided random source.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Grid {
        let mut grid = Grid::filled(self.cols, self.rows, Cell::Wall);
        carve(&mut grid, Grid::START, rng);
        let tree_passages = grid.passage_count();

        let opened = widen(&mut grid, self.widen_probability, rng);
        debug!(
            cols = self.cols,
            rows = self.rows,
            tree_passages,
            opened,
            "Maze generated"
        );
        grid
    }
}

/// Generates a maze with the thread-local random source.
pub fn generate(cols: u32, rows: u32) -> Result<Grid, MazeError> {
    let generator = MazeGenerator::new(cols, rows)?;
    Ok(generator.generate_with(&mut rand::rng()))
}

fn normalize(axis: Axis, value: u32) -> Result<u32, MazeError> {
    if value < 2 {
        return Err(MazeError::InvalidDimension { axis, value });
    }
    Ok(if value % 2 == 0 { value + 1 } else { value })
}

/// Depth-first carve from `start` over the odd lattice.
///
/// Each cell shuffles its four directions once when first entered, then tries them in order,
/// descending into the first unvisited interior neighbour. This is the recursive backtracker
/// with the call stack made explicit.
pub(crate) fn carve<R: Rng + ?Sized>(grid: &mut Grid, start: IVec2, rng: &mut R) {
    let mut stack = vec![enter(grid, start, rng)];

    while let Some(frame) = stack.last_mut() {
        let Some(&dir) = frame.directions.get(frame.next) else {
            stack.pop();
            continue;
        };
        frame.next += 1;

        let current = frame.cell;
        let next = current + dir.lattice_step();
        if grid.is_interior(next) && grid.get(next) == Some(Cell::Wall) {
            grid.set(current + dir.as_ivec2(), Cell::Passage);
            stack.push(enter(grid, next, rng));
        }
    }
}

fn enter<R: Rng + ?Sized>(grid: &mut Grid, cell: IVec2, rng: &mut R) -> CarveFrame {
    grid.set(cell, Cell::Passage);
    let mut directions = Direction::DIRECTIONS;
    directions.shuffle(rng);
    CarveFrame {
        cell,
        directions,
        next: 0,
    }
}

/// Opens interior walls that already touch two or more passages, each with independent `probability`.
///
/// Cells are visited row-major and see the conversions made before them. Returns the number opened.
pub(crate) fn widen<R: Rng + ?Sized>(grid: &mut Grid, probability: f64, rng: &mut R) -> usize {
    let mut opened = 0;
    for row in 1..grid.rows().saturating_sub(1) as i32 {
        for col in 1..grid.cols().saturating_sub(1) as i32 {
            let cell = IVec2::new(col, row);
            if grid.get(cell) != Some(Cell::Wall) || !rng.random_bool(probability) {
                continue;
            }
            if grid.passage_neighbors(cell).len() >= 2 {
                grid.set(cell, Cell::Passage);
                opened += 1;
            }
        }
    }
    opened
}
