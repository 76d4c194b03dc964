//! # Marching Squares Tile Classification
//!
//! Turns the occupancy grid into a renderable tile-index layer. Each tile
//! sits between four grid cells; the 2x2 corner pattern selects one of 16
//! variants.
//!
//! ## Bit Layout
//!
//! A corner contributes 1 when EMPTY, 0 when filled:
//!
//! ```text
//! index = bit(c10) | bit(c11) << 1 | bit(c01) << 2 | bit(c00) << 3
//! ```
//!
//! where `c00 = grid[y][x]`, `c01 = grid[y][x+1]`, `c10 = grid[y+1][x]`,
//! `c11 = grid[y+1][x+1]`. All corners filled gives 0, all corners empty
//! gives 15. The external tile atlas indexes its 16 regions by the decimal
//! strings `"0"` through `"15"`, so this exact layout is load-bearing.

use cavegen_core::{GenerationError, Grid};

/// Atlas region names, indexed by tile index.
const REGION_NAMES: [&str; 16] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15",
];

/// An external texture atlas holding the 16 tile variants.
///
/// The generation core knows nothing about texture formats; it only ever
/// asks for regions named `"0"` through `"15"`.
pub trait TileAtlas {
    /// Whatever the renderer calls a texture region.
    type Region;

    /// Looks up a region by name, or `None` if the atlas lacks it.
    fn region(&self, name: &str) -> Option<&Self::Region>;
}

/// Computes the marching-squares index for the tile at `(x, y)`.
///
/// Valid tile coordinates are `x` in `[0, W-2]` and `y` in `[0, H-2]`.
///
/// # Errors
///
/// [`GenerationError::TileCoordOutOfBounds`] for queries outside the tile
/// layer; coordinates are never clamped or wrapped.
pub fn tile_index(grid: &Grid, x: usize, y: usize) -> Result<u8, GenerationError> {
    if x + 1 >= grid.width() || y + 1 >= grid.height() {
        return Err(GenerationError::TileCoordOutOfBounds {
            x,
            y,
            max_x: grid.width().saturating_sub(2),
            max_y: grid.height().saturating_sub(2),
        });
    }
    Ok(classify_cell(grid, x, y))
}

/// Marching-squares core. Callers guarantee in-range coordinates.
fn classify_cell(grid: &Grid, x: usize, y: usize) -> u8 {
    let bit = |filled: bool| u8::from(!filled);
    let c00 = grid.get(x, y);
    let c01 = grid.get(x + 1, y);
    let c10 = grid.get(x, y + 1);
    let c11 = grid.get(x + 1, y + 1);
    bit(c10) | (bit(c11) << 1) | (bit(c01) << 2) | (bit(c00) << 3)
}

/// The `(W-1) x (H-1)` tile-index layer classified from an occupancy grid.
///
/// Row 0 is the logical top, matching the occupancy grid; renderers with a
/// bottom-left origin invert row order themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    width: usize,
    height: usize,
    indices: Vec<u8>,
}

impl TileGrid {
    /// Classifies every tile of the occupancy grid.
    #[must_use]
    pub fn classify(grid: &Grid) -> Self {
        let (width, height) = (grid.width() - 1, grid.height() - 1);
        let mut indices = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                indices.push(classify_cell(grid, x, y));
            }
        }
        Self {
            width,
            height,
            indices,
        }
    }

    /// Tile layer width.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Tile layer height.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the tile index at `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`GenerationError::TileCoordOutOfBounds`] for out-of-range queries.
    pub fn get(&self, x: usize, y: usize) -> Result<u8, GenerationError> {
        if x >= self.width || y >= self.height {
            return Err(GenerationError::TileCoordOutOfBounds {
                x,
                y,
                max_x: self.width.saturating_sub(1),
                max_y: self.height.saturating_sub(1),
            });
        }
        Ok(self.indices[y * self.width + x])
    }

    /// Returns the atlas region name for the tile at `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`GenerationError::TileCoordOutOfBounds`] for out-of-range queries.
    pub fn atlas_name(&self, x: usize, y: usize) -> Result<&'static str, GenerationError> {
        Ok(REGION_NAMES[self.get(x, y)? as usize])
    }

    /// Resolves every tile against an atlas, row-major.
    ///
    /// # Errors
    ///
    /// [`GenerationError::MissingAtlasRegion`] if the atlas lacks any
    /// region this layer refers to.
    pub fn resolve<'a, A: TileAtlas>(
        &self,
        atlas: &'a A,
    ) -> Result<Vec<&'a A::Region>, GenerationError> {
        self.indices
            .iter()
            .map(|&idx| {
                let name = REGION_NAMES[idx as usize];
                atlas
                    .region(name)
                    .ok_or_else(|| GenerationError::MissingAtlasRegion {
                        name: name.to_owned(),
                    })
            })
            .collect()
    }
}
