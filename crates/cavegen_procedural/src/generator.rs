//! # Generation Pipeline
//!
//! Sequences the whole synthesis into one deterministic, blocking run:
//! seed the grid, smooth it through the phase schedule, extract rooms,
//! repair connectivity, classify tiles.
//!
//! A generator is one-shot by construction: [`CaveGenerator::generate`]
//! consumes the instance, so a second map needs a fresh generator (and a
//! different seed, if it should differ). The pipeline stages advance
//! strictly forward and never revisit an earlier stage.

use cavegen_core::{Grid, EMPTY};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::automaton;
use crate::config::CaveConfig;
use crate::connector::{self, RepairFailure};
use crate::rooms;
use crate::tiles::TileGrid;

/// Pipeline stage marker, advancing strictly forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// No grid exists yet.
    Uninitialized,
    /// The occupancy grid has been randomly seeded.
    Initialized,
    /// The full phase schedule has run.
    Smoothed,
    /// Rooms are analyzed and corridors carved.
    ConnectivityRepaired,
    /// The tile layer has been classified; the run is complete.
    Classified,
}

/// Deterministic cave generator.
///
/// Owns its configuration and RNG; the occupancy grid is created, mutated
/// and handed out by [`generate`](Self::generate) alone. All randomness is
/// drawn from one `ChaCha8` stream seeded by the configuration, so equal
/// configurations produce bitwise-equal caves on every platform.
#[derive(Debug)]
pub struct CaveGenerator {
    config: CaveConfig,
    rng: ChaCha8Rng,
    stage: Stage,
}

impl CaveGenerator {
    /// Creates a generator for one run of the given configuration.
    #[must_use]
    pub fn new(config: CaveConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed());
        Self {
            config,
            rng,
            stage: Stage::Uninitialized,
        }
    }

    /// Runs the whole pipeline and returns the finished cave.
    ///
    /// Consumes the generator: one instance, one generation.
    #[must_use]
    pub fn generate(mut self) -> GeneratedCave {
        let (width, height) = (self.config.grid_width(), self.config.grid_height());

        let mut grid = automaton::seed_grid(width, height, &mut self.rng);
        self.enter(Stage::Initialized);
        tracing::trace!(grid = %grid, "seeded occupancy grid");

        let mut buffer = Grid::filled(width, height);
        automaton::run_schedule(&mut grid, &mut buffer, self.config.phases());
        self.enter(Stage::Smoothed);
        tracing::trace!(grid = %grid, "schedule complete");

        let rooms = rooms::find_rooms(&grid, EMPTY);
        tracing::debug!(rooms = rooms.len(), "room partition computed");
        let repair_failures = connector::connect_rooms(&mut grid, rooms, &mut self.rng);
        self.enter(Stage::ConnectivityRepaired);

        let tiles = TileGrid::classify(&grid);
        self.enter(Stage::Classified);
        tracing::debug!(
            fill_ratio = grid.fill_ratio(),
            isolated_rooms = repair_failures.len(),
            "generation complete"
        );

        GeneratedCave {
            grid,
            tiles,
            repair_failures,
            tile_size: self.config.tile_size(),
        }
    }

    /// Advances the pipeline stage; transitions are strictly forward.
    fn enter(&mut self, next: Stage) {
        debug_assert!(next > self.stage, "pipeline must advance forward");
        tracing::debug!(from = ?self.stage, to = ?next, "pipeline stage");
        self.stage = next;
    }
}

/// The finished output of one generation run.
///
/// Plain data only: the occupancy grid for debug or overlay rendering, the
/// tile-index layer for the atlas-backed renderer, and the structured
/// connectivity diagnostics. Row 0 is the logical top of the map.
#[derive(Clone, Debug)]
pub struct GeneratedCave {
    grid: Grid,
    tiles: TileGrid,
    repair_failures: Vec<RepairFailure>,
    tile_size: u32,
}

impl GeneratedCave {
    /// The raw boolean occupancy grid, read-only.
    #[inline]
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The `(W-1) x (H-1)` tile-index layer.
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &TileGrid {
        &self.tiles
    }

    /// Connectivity repairs that failed; empty when the cave is fully
    /// traversable.
    #[inline]
    #[must_use]
    pub fn repair_failures(&self) -> &[RepairFailure] {
        &self.repair_failures
    }

    /// Returns true if no room was left isolated.
    #[inline]
    #[must_use]
    pub fn is_fully_connected(&self) -> bool {
        self.repair_failures.is_empty()
    }

    /// Pixel size of one tile, passed through from the configuration.
    #[inline]
    #[must_use]
    pub const fn tile_size(&self) -> u32 {
        self.tile_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Phase;

    fn small_config(seed: u64) -> CaveConfig {
        CaveConfig::new(20, 20, seed, 16, vec![Phase::new(5, 2, 4)]).unwrap()
    }

    #[test]
    fn test_generate_produces_padded_layers() {
        let cave = CaveGenerator::new(small_config(1)).generate();
        assert_eq!(cave.grid().width(), 21);
        assert_eq!(cave.grid().height(), 21);
        assert_eq!(cave.tiles().width(), 20);
        assert_eq!(cave.tiles().height(), 20);
        assert_eq!(cave.tile_size(), 16);
    }

    #[test]
    fn test_generate_keeps_the_border_filled() {
        for seed in 0..8 {
            let cave = CaveGenerator::new(small_config(seed)).generate();
            assert!(cave.grid().border_is_filled(), "seed {seed}");
        }
    }

    #[test]
    fn test_stage_ordering() {
        assert!(Stage::Uninitialized < Stage::Initialized);
        assert!(Stage::Initialized < Stage::Smoothed);
        assert!(Stage::Smoothed < Stage::ConnectivityRepaired);
        assert!(Stage::ConnectivityRepaired < Stage::Classified);
    }

    #[test]
    fn test_connectivity_diagnostics_match_the_map() {
        use crate::rooms::find_rooms;
        use cavegen_core::EMPTY;

        for seed in 0..8 {
            let cave = CaveGenerator::new(small_config(seed)).generate();
            let rooms = find_rooms(cave.grid(), EMPTY);
            if cave.is_fully_connected() && !rooms.is_empty() {
                assert_eq!(rooms.len(), 1, "seed {seed}");
            }
        }
    }
}
