//! Axis-aligned box tests shared by both games.
//!
//! Boxes are described by a centre and a half-extent (half the side length).

use glam::{IVec2, Vec2};

use crate::maze::Grid;

/// Returns true if two centred square boxes overlap. Touching edges do not count.
pub fn boxes_overlap(a: Vec2, a_half: f32, b: Vec2, b_half: f32) -> bool {
    let reach = a_half + b_half;
    (a.x - b.x).abs() < reach && (a.y - b.y).abs() < reach
}

/// The inclusive range of cells a box covers. Edges that sit exactly on a cell boundary
/// do not spill into the next cell.
fn covered_cells(center: Vec2, half: f32, tile_size: f32) -> (IVec2, IVec2) {
    let min = ((center - half) / tile_size).floor().as_ivec2();
    let max = ((center + half) / tile_size).ceil().as_ivec2() - IVec2::ONE;
    (min, max)
}

/// Returns true if a box overlaps any wall cell (or leaves the grid).
pub fn overlaps_wall(grid: &Grid, tile_size: f32, center: Vec2, half: f32) -> bool {
    let (min, max) = covered_cells(center, half, tile_size);
    (min.y..=max.y).any(|row| (min.x..=max.x).any(|col| grid.is_wall(IVec2::new(col, row))))
}

/// Moves a box by `delta`, one axis at a time, stopping flush against walls.
///
/// Long moves are split into sub-steps short enough that the box cannot pass over a wall cell.
/// The box is assumed to start clear of walls. If a snap would still overlap, that axis does not move.
pub fn slide_against_walls(grid: &Grid, tile_size: f32, position: Vec2, delta: Vec2, half: f32) -> Vec2 {
    if !delta.is_finite() {
        return position;
    }

    let gap = tile_size - 2.0 * half;
    let max_step = if gap > 0.0 { gap } else { tile_size };
    let steps = (delta.abs().max_element() / max_step).ceil().max(1.0) as u32;
    let step = delta / steps as f32;

    (0..steps).fold(position, |resolved, _| slide_step(grid, tile_size, resolved, step, half))
}

fn slide_step(grid: &Grid, tile_size: f32, position: Vec2, delta: Vec2, half: f32) -> Vec2 {
    let mut resolved = position;

    if delta.x != 0.0 {
        resolved.x = resolve_axis(position.x + delta.x, delta.x, half, tile_size, |x| {
            overlaps_wall(grid, tile_size, Vec2::new(x, resolved.y), half)
        })
        .unwrap_or(resolved.x);
    }

    if delta.y != 0.0 {
        resolved.y = resolve_axis(position.y + delta.y, delta.y, half, tile_size, |y| {
            overlaps_wall(grid, tile_size, Vec2::new(resolved.x, y), half)
        })
        .unwrap_or(resolved.y);
    }

    resolved
}

/// Resolves movement along one axis: the candidate itself if clear, else flush against the blocking cell.
fn resolve_axis(candidate: f32, step: f32, half: f32, tile_size: f32, blocked: impl Fn(f32) -> bool) -> Option<f32> {
    if !blocked(candidate) {
        return Some(candidate);
    }

    let snapped = if step > 0.0 {
        let blocking = ((candidate + half) / tile_size).ceil() - 1.0;
        blocking * tile_size - half
    } else {
        let blocking = ((candidate - half) / tile_size).floor();
        (blocking + 1.0) * tile_size + half
    };

    (!blocked(snapped)).then_some(snapped)
}
