//! The maze grid and its coordinate helpers.

use std::collections::HashSet;
use std::fmt;

use glam::{IVec2, Vec2};
use pathfinding::prelude::bfs_reach;
use smallvec::SmallVec;

use crate::maze::direction::Direction;

/// A single maze cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Wall,
    Passage,
}

/// A rectangular maze, stored row-major. Cell coordinates are `(col, row)` as an `IVec2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cols: u32,
    rows: u32,
    cells: Vec<Cell>,
}

impl Grid {
    /// The cell carving starts from, and where the player spawns.
    pub const START: IVec2 = IVec2::new(1, 1);

    /// Creates a grid with every cell set to `cell`.
    pub fn filled(cols: u32, rows: u32, cell: Cell) -> Self {
        Self {
            cols,
            rows,
            cells: vec![cell; cols as usize * rows as usize],
        }
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    fn index(&self, cell: IVec2) -> Option<usize> {
        self.contains(cell)
            .then(|| cell.y as usize * self.cols as usize + cell.x as usize)
    }

    /// Returns true if the cell lies inside the grid.
    pub fn contains(&self, cell: IVec2) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as u32) < self.cols && (cell.y as u32) < self.rows
    }

    pub fn get(&self, cell: IVec2) -> Option<Cell> {
        self.index(cell).map(|i| self.cells[i])
    }

    /// Overwrites a cell. Out-of-bounds writes are ignored.
    pub fn set(&mut self, cell: IVec2, value: Cell) {
        if let Some(i) = self.index(cell) {
            self.cells[i] = value;
        }
    }

    pub fn is_passage(&self, cell: IVec2) -> bool {
        self.get(cell) == Some(Cell::Passage)
    }

    /// Out-of-bounds cells count as walls.
    pub fn is_wall(&self, cell: IVec2) -> bool {
        !self.is_passage(cell)
    }

    /// Returns true for cells on the outermost ring.
    pub fn is_border(&self, cell: IVec2) -> bool {
        self.contains(cell)
            && (cell.x == 0 || cell.y == 0 || cell.x as u32 == self.cols - 1 || cell.y as u32 == self.rows - 1)
    }

    /// Returns true for cells strictly inside the border.
    pub fn is_interior(&self, cell: IVec2) -> bool {
        self.contains(cell) && !self.is_border(cell)
    }

    /// Orthogonal neighbours of `cell` that are passages.
    pub fn passage_neighbors(&self, cell: IVec2) -> SmallVec<[IVec2; 4]> {
        Direction::DIRECTIONS
            .iter()
            .map(|dir| cell + dir.as_ivec2())
            .filter(|&neighbor| self.is_passage(neighbor))
            .collect()
    }

    /// Iterates every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (IVec2, Cell)> + '_ {
        let cols = self.cols as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| (IVec2::new((i % cols) as i32, (i / cols) as i32), cell))
    }

    /// Iterates every passage cell in row-major order.
    pub fn passages(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.cells()
            .filter_map(|(pos, cell)| (cell == Cell::Passage).then_some(pos))
    }

    pub fn passage_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell == Cell::Passage).count()
    }

    /// The world-space centre of a cell.
    pub fn tile_center(cell: IVec2, tile_size: f32) -> Vec2 {
        cell.as_vec2() * tile_size + Vec2::splat(tile_size / 2.0)
    }

    /// The cell containing a world-space point.
    pub fn cell_at(world: Vec2, tile_size: f32) -> IVec2 {
        (world / tile_size).floor().as_ivec2()
    }

    pub fn is_wall_at(&self, world: Vec2, tile_size: f32) -> bool {
        self.is_wall(Self::cell_at(world, tile_size))
    }

    /// The size of the whole maze in world units.
    pub fn world_size(&self, tile_size: f32) -> Vec2 {
        Vec2::new(self.cols as f32, self.rows as f32) * tile_size
    }

    /// Centred world positions of every passage cell, row-major.
    pub fn passage_tiles(&self, tile_size: f32) -> Vec<Vec2> {
        self.passages().map(|cell| Self::tile_center(cell, tile_size)).collect()
    }

    /// Centred world position of the start cell.
    pub fn start_position(&self, tile_size: f32) -> Vec2 {
        Self::tile_center(Self::START, tile_size)
    }

    /// All passage cells reachable from `start` through orthogonal passage steps.
    ///
    /// Returns an empty set when `start` is not a passage.
    pub fn reachable_from(&self, start: IVec2) -> HashSet<IVec2> {
        if !self.is_passage(start) {
            return HashSet::new();
        }
        bfs_reach(start, |&cell| self.passage_neighbors(cell)).collect()
    }

    /// Returns true if every passage can be reached from the start cell.
    pub fn is_fully_connected(&self) -> bool {
        self.reachable_from(Self::START).len() == self.passage_count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols as usize) {
            for cell in row {
                f.write_str(match cell {
                    Cell::Wall => "#",
                    Cell::Passage => ".",
                })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> Grid {
        // #####
        // #...#
        // #####
        let mut grid = Grid::filled(5, 3, Cell::Wall);
        for x in 1..4 {
            grid.set(IVec2::new(x, 1), Cell::Passage);
        }
        grid
    }

    #[test]
    fn test_out_of_bounds_is_wall() {
        let grid = corridor();
        assert!(grid.is_wall(IVec2::new(-1, 0)));
        assert!(grid.is_wall(IVec2::new(5, 1)));
        assert_eq!(grid.get(IVec2::new(0, 3)), None);
    }

    #[test]
    fn test_border_and_interior() {
        let grid = corridor();
        assert!(grid.is_border(IVec2::new(0, 1)));
        assert!(grid.is_border(IVec2::new(4, 2)));
        assert!(grid.is_interior(IVec2::new(2, 1)));
        assert!(!grid.is_border(IVec2::new(7, 7)));
    }

    #[test]
    fn test_tile_center_round_trip() {
        let center = Grid::tile_center(IVec2::new(3, 2), 64.0);
        assert_eq!(center, Vec2::new(224.0, 160.0));
        assert_eq!(Grid::cell_at(center, 64.0), IVec2::new(3, 2));
    }

    #[test]
    fn test_display() {
        assert_eq!(corridor().to_string(), "#####\n#...#\n#####\n");
    }

    #[test]
    fn test_reachable_from_wall_is_empty() {
        assert!(corridor().reachable_from(IVec2::ZERO).is_empty());
        assert_eq!(corridor().reachable_from(Grid::START).len(), 3);
    }
}
