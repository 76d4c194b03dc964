//! # Connectivity Repair
//!
//! After smoothing, the cave may have fallen apart into isolated rooms.
//! The largest room is declared canonical; every other room carves a
//! corridor from its representative cell towards the map centre until the
//! corridor merges with any region outside the originating room.
//!
//! Carving mutates the grid as the pass goes, so corridors cut for one room
//! can help or hinder rooms processed later; the room partition itself is
//! computed once, before any carving, and never recomputed mid-pass.
//!
//! A walk that leaves the carvable interior without merging is not an
//! error: it is reported back as structured diagnostic data so callers can
//! detect residual isolated rooms.

use cavegen_core::{Grid, Point, EMPTY, FILLED};
use rand::Rng;

use crate::rooms::Room;

/// Diagnostic record for one failed corridor walk.
///
/// Non-fatal: the affected room simply stays disconnected (possibly
/// enlarged by the carved corridor).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RepairFailure {
    /// Size of the room the walk started from.
    pub room_size: usize,
    /// The room's representative cell, where the walk started.
    pub room_seed: Point,
    /// Where the walk left the carvable interior.
    pub last_position: Point,
}

/// Repairs connectivity by carving corridors towards the map centre.
///
/// Rooms are processed in descending size order (ties keep their discovery
/// order); the largest room is never walked. Each walk moves exactly one
/// unit per iteration: when both axis directions are nonzero a fair coin
/// flip picks the axis, otherwise the single nonzero axis is taken, so the
/// position changes every iteration. A room whose representative sits on
/// the exact centre walks along +x.
///
/// Returns one [`RepairFailure`] per room whose walk left the interior
/// without merging.
pub fn connect_rooms(grid: &mut Grid, mut rooms: Vec<Room>, rng: &mut impl Rng) -> Vec<RepairFailure> {
    rooms.sort_by(|a, b| b.len().cmp(&a.len()));

    let mut failures = Vec::new();
    for room in rooms.iter().skip(1) {
        if let Some(failure) = connect_room(grid, room, rng) {
            tracing::debug!(
                room_size = failure.room_size,
                ?failure.last_position,
                "corridor walk left the interior without merging"
            );
            failures.push(failure);
        }
    }
    failures
}

/// Walks one corridor from `room` towards the centre. Returns a failure
/// record if the walk exits the interior before merging.
#[allow(clippy::cast_possible_wrap)]
fn connect_room(grid: &mut Grid, room: &Room, rng: &mut impl Rng) -> Option<RepairFailure> {
    let center = Point::new(grid.width() as i32 / 2, grid.height() as i32 / 2);
    let seed = room.seed();
    let delta = seed.direction_to(center);

    let mut position = seed;
    loop {
        position = advance(position, delta, rng);

        if !grid.is_interior(position) {
            return Some(RepairFailure {
                room_size: room.len(),
                room_seed: seed,
                last_position: position,
            });
        }
        if grid.cell(position) == EMPTY && !room.contains(position) {
            // Merged into another region.
            return None;
        }
        if grid.cell(position) == FILLED {
            grid.set_cell(position, EMPTY);
        }
    }
}

/// Moves one unit along `delta`. The returned position always differs from
/// `position`.
fn advance(position: Point, delta: Point, rng: &mut impl Rng) -> Point {
    if delta.x != 0 && delta.y != 0 {
        if rng.gen::<f64>() < 0.5 {
            position.offset(delta.x, 0)
        } else {
            position.offset(0, delta.y)
        }
    } else if delta.x != 0 {
        position.offset(delta.x, 0)
    } else if delta.y != 0 {
        position.offset(0, delta.y)
    } else {
        // Representative sits on the exact centre.
        position.offset(1, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rooms::find_rooms;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn grid_from_rows(rows: &[&str]) -> Grid {
        let mut grid = Grid::filled(rows[0].len(), rows.len());
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                grid.set(x, y, c == '#');
            }
        }
        grid
    }

    #[test]
    fn test_aligned_pocket_merges_without_randomness() {
        // The pocket at (5, 2) is vertically aligned with the centre
        // (5, 5), so the walk is a straight line down through one wall
        // into the big room on row 4.
        let grid_rows = [
            "###########",
            "###########",
            "#####.#####",
            "###########",
            "#.........#",
            "###########",
            "###########",
            "###########",
            "###########",
            "###########",
            "###########",
        ];
        let mut grid = grid_from_rows(&grid_rows);
        let rooms = find_rooms(&grid, EMPTY);
        assert_eq!(rooms.len(), 2);

        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let failures = connect_rooms(&mut grid, rooms, &mut rng);
        assert!(failures.is_empty());

        // The carved corridor joins the pocket to the row-4 room.
        assert_eq!(grid.cell(Point::new(5, 3)), EMPTY);
        let after = find_rooms(&grid, EMPTY);
        assert_eq!(after.len(), 1);
    }

    #[test]
    fn test_walk_past_the_border_reports_failure() {
        // The single-cell pocket at (5, 8) walks up towards the centre,
        // but the canonical room lies off to the side of the carved
        // column, so the walk punches through to the top border and exits.
        let grid_rows = [
            "###########",
            "###########",
            "###########",
            "###########",
            "###########",
            "###########",
            "###########",
            "###########",
            "#####.#####",
            "#....######",
            "###########",
        ];
        let mut grid = grid_from_rows(&grid_rows);
        let rooms = find_rooms(&grid, EMPTY);
        assert_eq!(rooms.len(), 2);

        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let failures = connect_rooms(&mut grid, rooms, &mut rng);

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].room_size, 1);
        assert_eq!(failures[0].room_seed, Point::new(5, 8));
        assert_eq!(failures[0].last_position, Point::new(5, 0));

        // The failed walk still carved its corridor.
        assert_eq!(grid.cell(Point::new(5, 4)), EMPTY);
    }

    #[test]
    fn test_largest_room_is_never_walked() {
        let grid_rows = [
            "#######",
            "#.....#",
            "#######",
            "##.####",
            "#######",
        ];
        let mut grid = grid_from_rows(&grid_rows);
        let rooms = find_rooms(&grid, EMPTY);
        let canonical_before: Vec<Point> = rooms[0].cells().to_vec();

        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let _ = connect_rooms(&mut grid, rooms, &mut rng);

        // Every cell of the canonical room is still empty.
        for p in canonical_before {
            assert_eq!(grid.cell(p), EMPTY);
        }
    }

    #[test]
    fn test_no_rooms_is_a_clean_pass() {
        let mut grid = Grid::filled(8, 8);
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let failures = connect_rooms(&mut grid, Vec::new(), &mut rng);
        assert!(failures.is_empty());
    }
}
