use std::ops::RangeInclusive;

use log::warn;
use rand::Rng;
use thiserror::Error;

use crate::config::{GridConfig, MAX_PLACEMENT_ATTEMPTS};
use crate::snake::{Position, Snake};

/// Placement could not find a free cell.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum PlacementError {
    #[error("no free cell left on the {width}x{height} board")]
    NoFreeCell { width: u16, height: u16 },
}

/// The single food item currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates food at `position`.
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Spawns food in a cell the snake does not occupy.
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        grid: GridConfig,
        snake: &Snake,
    ) -> Result<Self, PlacementError> {
        spawn_position(rng, grid, snake).map(Self::new)
    }

    /// Moves this food to a fresh unoccupied cell.
    pub fn respawn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        grid: GridConfig,
        snake: &Snake,
    ) -> Result<(), PlacementError> {
        self.position = spawn_position(rng, grid, snake)?;
        Ok(())
    }
}

/// Picks a uniformly random cell of the whole grid that the snake does not occupy.
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    grid: GridConfig,
    snake: &Snake,
) -> Result<Position, PlacementError> {
    let xs = 0..=i32::from(grid.width) - 1;
    let ys = 0..=i32::from(grid.height) - 1;

    sample_free_cell(rng, grid, xs, ys, |position| !snake.contains(position))
}

/// Rejection-samples a cell inside `xs` × `ys` for which `is_free` holds.
///
/// After [`MAX_PLACEMENT_ATTEMPTS`] misses the free cells are enumerated and
/// one is drawn uniformly, so a crowded board still terminates. Fails only
/// when no cell in the range is free.
pub(crate) fn sample_free_cell<R, F>(
    rng: &mut R,
    grid: GridConfig,
    xs: RangeInclusive<i32>,
    ys: RangeInclusive<i32>,
    is_free: F,
) -> Result<Position, PlacementError>
where
    R: Rng + ?Sized,
    F: Fn(Position) -> bool,
{
    let no_free_cell = PlacementError::NoFreeCell {
        width: grid.width,
        height: grid.height,
    };
    if xs.is_empty() || ys.is_empty() {
        return Err(no_free_cell);
    }

    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let position = Position {
            x: rng.gen_range(xs.clone()),
            y: rng.gen_range(ys.clone()),
        };
        if is_free(position) {
            return Ok(position);
        }
    }

    warn!("placement missed {MAX_PLACEMENT_ATTEMPTS} random draws, scanning free cells");

    let candidates: Vec<Position> = ys
        .flat_map(|y| xs.clone().map(move |x| Position { x, y }))
        .filter(|position| is_free(*position))
        .collect();

    if candidates.is_empty() {
        return Err(no_free_cell);
    }

    Ok(candidates[rng.gen_range(0..candidates.len())])
}
