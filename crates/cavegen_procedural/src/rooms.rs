//! # Room Analysis
//!
//! Partitions matching cells into maximal 4-connected components ("rooms")
//! with a breadth-first flood fill. The partition is a pure function of the
//! grid's topology: scan order only decides which cell becomes a room's
//! seed, never which cells end up together.

use std::collections::{HashSet, VecDeque};

use cavegen_core::{Grid, Point};

/// 4-connected neighbourhood: up, left, right, down.
const VON_NEUMANN_HOOD: [(i32, i32); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

/// One maximal 4-connected component of same-valued cells.
///
/// Cells are kept in discovery order; the first cell is the room's
/// deterministic representative. A hash index backs O(1) membership tests.
#[derive(Clone, Debug)]
pub struct Room {
    cells: Vec<Point>,
    index: HashSet<Point>,
}

impl Room {
    fn with_seed(seed: Point) -> Self {
        let mut room = Self {
            cells: Vec::new(),
            index: HashSet::new(),
        };
        room.push(seed);
        room
    }

    fn push(&mut self, p: Point) {
        self.cells.push(p);
        self.index.insert(p);
    }

    /// Number of cells in the room.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the room holds no cells. Never the case for rooms
    /// produced by [`find_rooms`].
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The room's deterministic representative: its first-discovered cell.
    ///
    /// # Panics
    ///
    /// Panics if the room is empty.
    #[inline]
    #[must_use]
    pub fn seed(&self) -> Point {
        self.cells[0]
    }

    /// Returns true if the point belongs to this room.
    #[inline]
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        self.index.contains(&p)
    }

    /// The room's cells in discovery order.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }
}

/// Extracts every room of `target`-valued cells from the grid.
///
/// Scans row-major for an unvisited matching cell, flood-fills its
/// component breadth-first over 4-connected matching neighbours, and
/// repeats until every matching cell belongs to exactly one room. Returns
/// an empty list when nothing matches.
#[must_use]
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub fn find_rooms(grid: &Grid, target: bool) -> Vec<Room> {
    let (width, height) = (grid.width(), grid.height());
    let mut visited = vec![false; width * height];
    let mut rooms = Vec::new();

    for y in 0..height {
        for x in 0..width {
            if visited[y * width + x] || grid.get(x, y) != target {
                continue;
            }
            visited[y * width + x] = true;

            let seed = Point::new(x as i32, y as i32);
            let mut room = Room::with_seed(seed);
            let mut frontier = VecDeque::new();
            frontier.push_back(seed);

            while let Some(current) = frontier.pop_front() {
                for (dx, dy) in VON_NEUMANN_HOOD {
                    let neighbor = current.offset(dx, dy);
                    if !grid.contains(neighbor) || grid.cell(neighbor) != target {
                        continue;
                    }
                    let slot = neighbor.y as usize * width + neighbor.x as usize;
                    if visited[slot] {
                        continue;
                    }
                    visited[slot] = true;
                    room.push(neighbor);
                    frontier.push_back(neighbor);
                }
            }
            rooms.push(room);
        }
    }
    rooms
}
