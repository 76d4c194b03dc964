//! # Occupancy Grid
//!
//! Rectangular boolean lattice: `true` is a filled wall cell, `false` is
//! empty floor. Cells are stored row-major in a single allocation.
//!
//! ## Border Invariant
//!
//! Row 0, row `H-1`, column 0 and column `W-1` are filled for the entire
//! lifetime of a generated grid. The pipeline upholds this by only ever
//! writing interior cells after construction; the grid itself starts fully
//! filled.

use std::fmt;

use crate::point::Point;

/// Cell value for a wall.
pub const FILLED: bool = true;

/// Cell value for floor.
pub const EMPTY: bool = false;

/// A rectangular boolean occupancy lattice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates a grid with every cell filled.
    #[must_use]
    pub fn filled(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![FILLED; width * height],
        }
    }

    /// Grid width in cells.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Returns the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    #[inline]
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> bool {
        debug_assert!(x < self.width && y < self.height);
        self.cells[y * self.width + x]
    }

    /// Sets the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        debug_assert!(x < self.width && y < self.height);
        self.cells[y * self.width + x] = value;
    }

    /// Returns true if the point lies inside the grid.
    #[inline]
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0
            && p.y >= 0
            && (p.x as usize) < self.width
            && (p.y as usize) < self.height
    }

    /// Returns true if the point lies strictly inside the border,
    /// i.e. `x` in `[1, W-2]` and `y` in `[1, H-2]`.
    #[inline]
    #[must_use]
    pub fn is_interior(&self, p: Point) -> bool {
        p.x >= 1
            && p.y >= 1
            && (p.x as usize) < self.width - 1
            && (p.y as usize) < self.height - 1
    }

    /// Returns the cell under a point.
    ///
    /// # Panics
    ///
    /// Panics if the point lies outside the grid.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_sign_loss)]
    pub fn cell(&self, p: Point) -> bool {
        debug_assert!(self.contains(p));
        self.get(p.x as usize, p.y as usize)
    }

    /// Sets the cell under a point.
    ///
    /// # Panics
    ///
    /// Panics if the point lies outside the grid.
    #[inline]
    #[allow(clippy::cast_sign_loss)]
    pub fn set_cell(&mut self, p: Point, value: bool) {
        debug_assert!(self.contains(p));
        self.set(p.x as usize, p.y as usize, value);
    }

    /// Fraction of cells that are filled, in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn fill_ratio(&self) -> f64 {
        let filled = self.cells.iter().filter(|&&c| c == FILLED).count();
        filled as f64 / self.cells.len() as f64
    }

    /// Returns true if every border cell is filled.
    #[must_use]
    pub fn border_is_filled(&self) -> bool {
        let last_x = self.width - 1;
        let last_y = self.height - 1;
        (0..self.width).all(|x| self.get(x, 0) && self.get(x, last_y))
            && (0..self.height).all(|y| self.get(0, y) && self.get(last_x, y))
    }
}

impl fmt::Display for Grid {
    /// Renders the grid as ASCII art: `#` for walls, `.` for floor,
    /// one row per line, row 0 first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                f.write_str(if self.get(x, y) { "#" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
