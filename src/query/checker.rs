//! Exact disc-footprint safety checks.

use crate::core::GridCoord;
use crate::grid::GridStorage;

/// Clearance checker for one-off safety queries.
///
/// A cell is safe for a robot of radius `r` when the cell itself is in
/// bounds and no occupied cell lies within Euclidean distance `r` of
/// it. Cells of the disc that fall outside the grid are ignored: the
/// robot may overhang the map boundary.
pub struct ClearanceChecker<'a> {
    storage: &'a GridStorage,
}

impl<'a> ClearanceChecker<'a> {
    /// Create a new clearance checker.
    pub fn new(storage: &'a GridStorage) -> Self {
        Self { storage }
    }

    /// Get the storage.
    pub fn storage(&self) -> &GridStorage {
        self.storage
    }

    /// Check if the robot disc centred on `coord` touches no obstacle.
    pub fn is_cell_safe(&self, coord: GridCoord, radius: i32) -> bool {
        if !self.storage.is_valid_coord(coord) {
            return false;
        }

        let radius = radius.max(0);
        let r_sq = (radius as i64) * (radius as i64);

        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if (dx as i64) * (dx as i64) + (dy as i64) * (dy as i64) > r_sq {
                    continue;
                }
                let cell = GridCoord::new(coord.x + dx, coord.y + dy);
                if let Some(state) = self.storage.get(cell) {
                    if state.is_occupied() {
                        return false;
                    }
                }
            }
        }

        true
    }

    /// Find the nearest occupied cell within `max_distance` cells.
    pub fn nearest_obstacle(&self, coord: GridCoord, max_distance: i32) -> Option<GridCoord> {
        let max_cells = max_distance.max(0);
        let mut nearest: Option<(GridCoord, i64)> = None;

        for dy in -max_cells..=max_cells {
            for dx in -max_cells..=max_cells {
                let cell = GridCoord::new(coord.x + dx, coord.y + dy);
                if !self.storage.is_valid_coord(cell) {
                    continue;
                }
                if self.storage.is_occupied(cell) {
                    let dist_sq = coord.distance_squared(&cell);
                    if dist_sq <= (max_cells as i64) * (max_cells as i64) {
                        match nearest {
                            None => nearest = Some((cell, dist_sq)),
                            Some((_, d)) if dist_sq < d => nearest = Some((cell, dist_sq)),
                            _ => {}
                        }
                    }
                }
            }
        }

        nearest.map(|(c, _)| c)
    }

    /// Distance to the nearest obstacle, capped at `max_distance`.
    pub fn clearance(&self, coord: GridCoord, max_distance: i32) -> f32 {
        match self.nearest_obstacle(coord, max_distance) {
            Some(obstacle) => coord.distance(&obstacle),
            None => max_distance as f32,
        }
    }

    /// Check if every cell on the straight line between two cells is
    /// safe for the given radius.
    ///
    /// Uses Bresenham's line algorithm to enumerate the cells.
    pub fn is_line_clear(&self, from: GridCoord, to: GridCoord, radius: i32) -> bool {
        let mut x0 = from.x;
        let mut y0 = from.y;
        let x1 = to.x;
        let y1 = to.y;

        let dx = (x1 - x0).abs();
        let dy = (y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx - dy;

        loop {
            if !self.is_cell_safe(GridCoord::new(x0, y0), radius) {
                return false;
            }

            if x0 == x1 && y0 == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x0 += sx;
            }
            if e2 < dx {
                err += dx;
                y0 += sy;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Obstacle;

    fn grid_with_wall() -> GridStorage {
        let mut grid = GridStorage::new(20, 20);
        for y in 0..20 {
            grid.set(GridCoord::new(10, y), crate::grid::CellState::Occupied);
        }
        grid
    }

    #[test]
    fn test_cell_safety_with_radius() {
        let grid = grid_with_wall();
        let checker = ClearanceChecker::new(&grid);

        // On the wall
        assert!(!checker.is_cell_safe(GridCoord::new(10, 10), 0));
        // Adjacent: fine with a point robot, not with radius 1
        assert!(checker.is_cell_safe(GridCoord::new(9, 10), 0));
        assert!(!checker.is_cell_safe(GridCoord::new(9, 10), 1));
        // Two cells away clears radius 1
        assert!(checker.is_cell_safe(GridCoord::new(8, 10), 1));
        assert!(!checker.is_cell_safe(GridCoord::new(8, 10), 2));
    }

    #[test]
    fn test_out_of_bounds_centre_is_unsafe() {
        let grid = GridStorage::new(10, 10);
        let checker = ClearanceChecker::new(&grid);
        assert!(!checker.is_cell_safe(GridCoord::new(-1, 5), 0));
        assert!(!checker.is_cell_safe(GridCoord::new(5, 10), 0));
    }

    #[test]
    fn test_boundary_overhang_is_allowed() {
        let grid = GridStorage::new(10, 10);
        let checker = ClearanceChecker::new(&grid);
        // Disc pokes past the edge but the centre cell is in bounds
        assert!(checker.is_cell_safe(GridCoord::new(0, 0), 3));
    }

    #[test]
    fn test_nearest_obstacle() {
        let mut grid = GridStorage::new(20, 20);
        grid.stamp_obstacle(&Obstacle::new(15, 15, 0));
        let checker = ClearanceChecker::new(&grid);

        assert_eq!(
            checker.nearest_obstacle(GridCoord::new(12, 15), 5),
            Some(GridCoord::new(15, 15))
        );
        assert_eq!(checker.nearest_obstacle(GridCoord::new(2, 2), 5), None);
        assert!((checker.clearance(GridCoord::new(12, 15), 10) - 3.0).abs() < 1e-6);
        assert_eq!(checker.clearance(GridCoord::new(2, 2), 5), 5.0);
    }

    #[test]
    fn test_line_clear() {
        let grid = grid_with_wall();
        let checker = ClearanceChecker::new(&grid);

        // Parallel to the wall
        assert!(checker.is_line_clear(GridCoord::new(2, 2), GridCoord::new(2, 17), 1));
        // Crossing the wall
        assert!(!checker.is_line_clear(GridCoord::new(2, 10), GridCoord::new(18, 10), 0));
    }
}
