//! # Lattice Points
//!
//! Integer coordinates on the occupancy lattice.
//!
//! Room membership is tracked in hash sets keyed by `Point`, so the type
//! carries value semantics: structural equality and a packed-integer hash
//! (`x` in the high 32 bits, `y` in the low 32 bits) rather than anything
//! identity-based.

use std::hash::{Hash, Hasher};

/// An integer coordinate on the lattice.
///
/// `x` grows rightwards, `y` grows downwards: row 0 is the logical top of
/// the grid. Renderers with a bottom-left origin invert rows themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl Point {
    /// Creates a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this point translated by the given offsets.
    #[inline]
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Returns the per-axis unit direction from `self` towards `target`.
    ///
    /// Each component is `-1`, `0` or `1` (the sign of the difference).
    #[inline]
    #[must_use]
    pub const fn direction_to(self, target: Self) -> Self {
        Self {
            x: (target.x - self.x).signum(),
            y: (target.y - self.y).signum(),
        }
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Pack both coordinates into one u64 so the hash is a single write.
        #[allow(clippy::cast_sign_loss)]
        let packed = ((self.x as u32 as u64) << 32) | (self.y as u32 as u64);
        state.write_u64(packed);
    }
}
