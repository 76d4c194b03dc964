//! # Cellular Automaton
//!
//! Grows cave structure on the occupancy grid: a seeded random spray of
//! walls is smoothed by repeated application of a local transition rule.
//!
//! ## Transition Rule
//!
//! An interior cell becomes a wall next round when its 3x3 neighbourhood
//! (the cell itself included) holds at least `min_threshold` walls, or when
//! its corner-trimmed 5x5 neighbourhood holds at most `max_threshold` walls.
//! The second clause walls off sparse open areas far from any structure.
//!
//! ## Double Buffering
//!
//! Every round reads only the previous round's grid and writes a separate
//! buffer; buffers swap at round end. No cell ever observes a same-round
//! update of a neighbour.
//!
//! Neighbourhood counts clip at the grid edge by exclusion on both axes:
//! out-of-range cells contribute nothing.

use cavegen_core::Grid;
use rand::Rng;

use crate::config::Phase;

/// Probability that an interior cell starts as a wall.
pub const FILL_PROBABILITY: f64 = 0.4;

/// Seeds a fresh occupancy grid.
///
/// Every border cell is a wall. Every interior cell is a wall with
/// probability [`FILL_PROBABILITY`], consuming the RNG in strict row-major
/// order (row by row, column within row), so the layout is a pure function
/// of the RNG stream.
#[must_use]
pub fn seed_grid(width: usize, height: usize, rng: &mut impl Rng) -> Grid {
    let mut grid = Grid::filled(width, height);
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            grid.set(x, y, rng.gen::<f64>() < FILL_PROBABILITY);
        }
    }
    grid
}

/// Counts walls in the 3x3 block centred on `(x, y)`, the cell itself
/// included. Cells outside the grid are excluded from the count.
#[must_use]
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub fn neighbor_count(grid: &Grid, x: usize, y: usize) -> u32 {
    let (w, h) = (grid.width() as i32, grid.height() as i32);
    let (cx, cy) = (x as i32, y as i32);
    let mut count = 0;
    for j in cy - 1..=cy + 1 {
        for i in cx - 1..=cx + 1 {
            if i < 0 || j < 0 || i >= w || j >= h {
                continue;
            }
            if grid.get(i as usize, j as usize) {
                count += 1;
            }
        }
    }
    count
}

/// Counts walls in the 5x5 block centred on `(x, y)`, excluding the four
/// far corners where both offsets are +/-2. Cells outside the grid are
/// excluded from the count.
#[must_use]
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub fn extended_neighbor_count(grid: &Grid, x: usize, y: usize) -> u32 {
    let (w, h) = (grid.width() as i32, grid.height() as i32);
    let (cx, cy) = (x as i32, y as i32);
    let mut count = 0;
    for j in cy - 2..=cy + 2 {
        for i in cx - 2..=cx + 2 {
            if (i - cx).abs() == 2 && (j - cy).abs() == 2 {
                continue;
            }
            if i < 0 || j < 0 || i >= w || j >= h {
                continue;
            }
            if grid.get(i as usize, j as usize) {
                count += 1;
            }
        }
    }
    count
}

/// Runs one automaton round.
///
/// Reads `current` only, writes every interior cell of `next`. Border cells
/// of `next` are left untouched, so a buffer that starts fully filled keeps
/// its border filled forever.
pub fn step(current: &Grid, next: &mut Grid, phase: Phase) {
    debug_assert_eq!(current.width(), next.width());
    debug_assert_eq!(current.height(), next.height());

    for y in 1..current.height() - 1 {
        for x in 1..current.width() - 1 {
            let close = neighbor_count(current, x, y);
            let far = extended_neighbor_count(current, x, y);
            next.set(x, y, close >= phase.min_threshold || far <= phase.max_threshold);
        }
    }
}

/// Applies the full phase schedule to `grid`.
///
/// Each phase runs for exactly its configured number of rounds, in schedule
/// order, consuming the previous phase's final grid. `buffer` is the write
/// target for each round; the two grids swap roles after every round, and
/// `grid` always holds the committed state on return.
pub fn run_schedule(grid: &mut Grid, buffer: &mut Grid, phases: &[Phase]) {
    for (phase_no, phase) in phases.iter().enumerate() {
        for round in 0..phase.rounds {
            step(grid, buffer, *phase);
            std::mem::swap(grid, buffer);
            tracing::trace!(phase_no, round, "automaton round committed");
        }
    }
}
