//! # Generation Errors
//!
//! Every failure mode of the cave generation pipeline. Configuration
//! problems are rejected before any grid state exists; classifier queries
//! outside the tile layer fail explicitly rather than clamping or wrapping.

use thiserror::Error;

/// Errors that can occur while configuring or querying a generation run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Requested map dimensions are not positive.
    #[error("invalid map dimensions: {width}x{height} (both must be positive)")]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },

    /// The automaton schedule contains no phases.
    #[error("automaton schedule is empty: at least one phase is required")]
    EmptyPhaseSchedule,

    /// A tile classification query lies outside the tile layer.
    #[error("tile coordinate ({x}, {y}) out of bounds (valid range is (0, 0) to ({max_x}, {max_y}))")]
    TileCoordOutOfBounds {
        /// Queried tile column.
        x: usize,
        /// Queried tile row.
        y: usize,
        /// Largest valid tile column.
        max_x: usize,
        /// Largest valid tile row.
        max_y: usize,
    },

    /// The tile atlas has no region under the requested name.
    #[error("tile atlas is missing region {name:?}")]
    MissingAtlasRegion {
        /// The decimal region name that failed to resolve.
        name: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_values() {
        let err = GenerationError::InvalidDimensions {
            width: 0,
            height: 12,
        };
        assert!(err.to_string().contains("0x12"));

        let err = GenerationError::TileCoordOutOfBounds {
            x: 10,
            y: 3,
            max_x: 9,
            max_y: 9,
        };
        assert!(err.to_string().contains("(10, 3)"));
        assert!(err.to_string().contains("(9, 9)"));
    }
}
