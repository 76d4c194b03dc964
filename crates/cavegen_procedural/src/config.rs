//! # Generation Configuration
//!
//! Immutable configuration values built through a validating factory.
//! Invalid input is rejected here, before any grid state exists.

use cavegen_core::GenerationError;

/// One stage of the automaton schedule.
///
/// Phases are order-significant: each phase smooths the grid left behind by
/// the previous one, for exactly `rounds` rounds with its own thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Phase {
    /// A cell becomes a wall when its 3x3 neighbourhood (itself included)
    /// holds at least this many walls.
    pub min_threshold: u32,
    /// A cell also becomes a wall when its corner-trimmed 5x5 neighbourhood
    /// holds at most this many walls, which seals off open spray.
    pub max_threshold: u32,
    /// Number of automaton rounds this phase runs for.
    pub rounds: u32,
}

impl Phase {
    /// Creates a new phase.
    #[inline]
    #[must_use]
    pub const fn new(min_threshold: u32, max_threshold: u32, rounds: u32) -> Self {
        Self {
            min_threshold,
            max_threshold,
            rounds,
        }
    }
}

/// Validated configuration for one generation run.
///
/// Constructed through [`CaveConfig::new`]; once built it is immutable.
/// The requested size is padded by one cell per axis internally so that the
/// marching-squares tile layer comes out at exactly `width x height`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaveConfig {
    width: usize,
    height: usize,
    seed: u64,
    tile_size: u32,
    phases: Vec<Phase>,
}

impl CaveConfig {
    /// Creates a validated configuration.
    ///
    /// `width` and `height` are the dimensions of the tile layer the caller
    /// will receive; `seed` drives all randomness; `tile_size` is opaque
    /// pixel metadata passed through to the render collaborator.
    ///
    /// # Errors
    ///
    /// - [`GenerationError::InvalidDimensions`] if either dimension is zero.
    /// - [`GenerationError::EmptyPhaseSchedule`] if `phases` is empty.
    pub fn new(
        width: usize,
        height: usize,
        seed: u64,
        tile_size: u32,
        phases: Vec<Phase>,
    ) -> Result<Self, GenerationError> {
        if width == 0 || height == 0 {
            return Err(GenerationError::InvalidDimensions { width, height });
        }
        if phases.is_empty() {
            return Err(GenerationError::EmptyPhaseSchedule);
        }
        Ok(Self {
            width,
            height,
            seed,
            tile_size,
            phases,
        })
    }

    /// Occupancy grid width: the requested width plus the padding cell.
    #[inline]
    #[must_use]
    pub const fn grid_width(&self) -> usize {
        self.width + 1
    }

    /// Occupancy grid height: the requested height plus the padding cell.
    #[inline]
    #[must_use]
    pub const fn grid_height(&self) -> usize {
        self.height + 1
    }

    /// The seed driving all randomness in this run.
    #[inline]
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Pixel size of one tile; opaque pass-through metadata.
    #[inline]
    #[must_use]
    pub const fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// The automaton schedule, in execution order.
    #[inline]
    #[must_use]
    pub fn phases(&self) -> &[Phase] {
        &self.phases
    }
}
