//! Precomputed clearance field.
//!
//! Distances are propagated outward from every occupied cell with a
//! brushfire (multi-source BFS) pass: orthogonal steps cost 1 cell,
//! diagonal steps cost sqrt(2). The resulting metric is octile distance
//! to the nearest occupied cell, which is always >= the Euclidean
//! distance and exceeds it by at most a factor of sqrt(4 - 2*sqrt(2)).

use std::collections::VecDeque;

use crate::core::GridCoord;
use crate::grid::GridStorage;

/// Maximum ratio of octile distance over Euclidean distance.
pub const OCTILE_RATIO: f32 = 1.0824;

/// Per-cell distance (in cell units) to the nearest occupied cell.
///
/// Occupied cells have distance 0. A grid with no obstacles has
/// `f32::MAX` everywhere.
#[derive(Clone, Debug)]
pub struct ClearanceField {
    distances: Vec<f32>,
    width: usize,
    height: usize,
}

impl ClearanceField {
    /// Compute the field for the current contents of the grid.
    pub fn from_storage(storage: &GridStorage) -> Self {
        let width = storage.width();
        let height = storage.height();
        let mut distances = vec![f32::MAX; width * height];

        // Seed the queue with every occupied cell at distance 0
        let mut queue = VecDeque::new();
        for (i, &cell) in storage.cells_raw().iter().enumerate() {
            if cell != 0 {
                distances[i] = 0.0;
                queue.push_back(storage.index_to_coord(i));
            }
        }

        let sqrt2 = std::f32::consts::SQRT_2;
        let neighbors = [
            (-1, 0, 1.0),
            (1, 0, 1.0),
            (0, -1, 1.0),
            (0, 1, 1.0),
            (-1, -1, sqrt2),
            (1, -1, sqrt2),
            (-1, 1, sqrt2),
            (1, 1, sqrt2),
        ];

        while let Some(coord) = queue.pop_front() {
            let current = distances[coord.y as usize * width + coord.x as usize];

            for &(dx, dy, cost) in &neighbors {
                let nx = coord.x + dx;
                let ny = coord.y + dy;

                if nx < 0 || ny < 0 || nx >= width as i32 || ny >= height as i32 {
                    continue;
                }

                let idx = ny as usize * width + nx as usize;
                let new_dist = current + cost;

                if new_dist < distances[idx] {
                    distances[idx] = new_dist;
                    queue.push_back(GridCoord::new(nx, ny));
                }
            }
        }

        Self {
            distances,
            width,
            height,
        }
    }

    /// Distance to the nearest occupied cell, in cell units.
    /// Returns 0.0 for out-of-bounds coordinates.
    #[inline]
    pub fn distance(&self, coord: GridCoord) -> f32 {
        if coord.x < 0
            || coord.y < 0
            || coord.x as usize >= self.width
            || coord.y as usize >= self.height
        {
            return 0.0;
        }
        self.distances[coord.y as usize * self.width + coord.x as usize]
    }

    /// Field width in cells
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Field height in cells
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Obstacle;

    #[test]
    fn test_empty_grid_has_max_clearance() {
        let grid = GridStorage::new(10, 10);
        let field = ClearanceField::from_storage(&grid);
        assert_eq!(field.distance(GridCoord::new(5, 5)), f32::MAX);
    }

    #[test]
    fn test_distance_around_single_cell() {
        let mut grid = GridStorage::new(11, 11);
        grid.stamp_obstacle(&Obstacle::new(5, 5, 0));
        let field = ClearanceField::from_storage(&grid);

        assert_eq!(field.distance(GridCoord::new(5, 5)), 0.0);
        assert!((field.distance(GridCoord::new(5, 6)) - 1.0).abs() < 1e-6);
        assert!((field.distance(GridCoord::new(6, 6)) - std::f32::consts::SQRT_2).abs() < 1e-6);
        assert!((field.distance(GridCoord::new(5, 8)) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_octile_metric() {
        let mut grid = GridStorage::new(20, 20);
        grid.stamp_obstacle(&Obstacle::new(0, 0, 0));
        let field = ClearanceField::from_storage(&grid);

        // Offset (3, 1): octile distance = sqrt(2) + 2
        let expected = std::f32::consts::SQRT_2 + 2.0;
        assert!((field.distance(GridCoord::new(3, 1)) - expected).abs() < 1e-5);
    }

    #[test]
    fn test_out_of_bounds_is_zero() {
        let grid = GridStorage::new(5, 5);
        let field = ClearanceField::from_storage(&grid);
        assert_eq!(field.distance(GridCoord::new(-1, 2)), 0.0);
        assert_eq!(field.distance(GridCoord::new(2, 5)), 0.0);
    }

    #[test]
    fn test_octile_never_underestimates_euclidean() {
        let mut grid = GridStorage::new(30, 30);
        grid.stamp_obstacle(&Obstacle::new(14, 14, 2));
        let field = ClearanceField::from_storage(&grid);

        for (coord, _) in grid.iter() {
            let octile = field.distance(coord);
            if octile == f32::MAX {
                continue;
            }
            // Nearest occupied cell by brute force
            let euclid = grid
                .iter()
                .filter(|(_, s)| s.is_occupied())
                .map(|(o, _)| coord.distance(&o))
                .fold(f32::MAX, f32::min);
            assert!(octile >= euclid - 1e-4);
            assert!(octile <= euclid * OCTILE_RATIO + 1e-4);
        }
    }
}
