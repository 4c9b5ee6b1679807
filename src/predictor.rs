use log::{debug, warn};
use rand::Rng;

use super::board::{Grid, Point};
use super::error::Result;
use super::rng::rng_from_seed;

/// Draw cap for the sampler. Running out of attempts returns whatever was
/// collected so far.
pub const MAX_ATTEMPTS: usize = 100;

/// Cell count of the standard 5x5 board, used by the fallback range.
const STANDARD_CELLS: usize = 25;

const SAFE_BLOCK_RANGES: [(usize, (usize, usize)); 7] = [
    (1, (7, 12)),
    (2, (6, 9)),
    (3, (5, 5)),
    (4, (3, 4)),
    (5, (2, 3)),
    (10, (2, 2)),
    (20, (1, 1)),
];

/// Inclusive bounds for how many safe spots to predict.
pub fn safe_spot_range(bombs_count: usize) -> (usize, usize) {
    if let Some((_, range)) = SAFE_BLOCK_RANGES.iter().find(|(bombs, _)| *bombs == bombs_count) {
        return *range
    }
    let total_safe = STANDARD_CELLS.saturating_sub(bombs_count);
    let low = (total_safe / 2).max(1);
    (low, total_safe.max(low))
}

/// Pick up to a drawn number of distinct safe cells, never the top-left one.
/// Returns `(target, spots)`; `spots` may be shorter than `target` if the
/// attempt cap runs out first.
pub fn guess_safe_spots<R: Rng + ?Sized>(grid: &Grid, bombs_count: usize, rng: &mut R) -> (usize, Vec<Point>) {
    let (low, high) = safe_spot_range(bombs_count);
    let target = rng.random_range(low..=high);
    let size = grid.size();

    let mut spots: Vec<Point> = Vec::with_capacity(target);
    let mut attempts = 0;
    while spots.len() < target && attempts < MAX_ATTEMPTS {
        let row = rng.random_range(0..size.height);
        let col = rng.random_range(0..size.width);
        let point = Point(row, col);
        attempts += 1;
        if point == Point::ORIGIN {
            continue
        }
        if grid.is_safe(&point) && !spots.contains(&point) {
            spots.push(point);
        }
    }

    if spots.len() < target {
        warn!("sampler stopped after {} attempts with {}/{} spots", attempts, spots.len(), target);
    } else {
        debug!("sampled {} spots in {} attempts", spots.len(), attempts);
    }
    (target, spots)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    pub grid: Grid,
    pub target: usize,
    pub spots: Vec<Point>,
}

/// Generate the grid and sample spots from one generator seeded with `seed`.
pub fn predict<S: AsRef<[u8]>>(grid_size: usize, bombs_count: usize, seed: S) -> Result<Prediction> {
    let mut rng = rng_from_seed(seed);
    let grid = Grid::generate(grid_size, bombs_count, &mut rng)?;
    let (target, spots) = guess_safe_spots(&grid, bombs_count, &mut rng);
    Ok(Prediction{grid, target, spots})
}

#[cfg(test)]
use proptest::prelude::*;
