//! Circular obstacle definition.

use serde::{Deserialize, Serialize};

use super::GridCoord;

/// A circular obstacle on the grid.
///
/// Every cell whose centre lies within Euclidean distance `radius`
/// of the obstacle centre belongs to the obstacle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Centre cell of the obstacle.
    pub center: GridCoord,
    /// Radius in cells. Radius 0 covers exactly the centre cell.
    pub radius: i32,
}

impl Obstacle {
    /// Create a new obstacle. Negative radii are clamped to 0.
    pub fn new(x: i32, y: i32, radius: i32) -> Self {
        Self {
            center: GridCoord::new(x, y),
            radius: radius.max(0),
        }
    }

    /// Does the disc cover this cell?
    #[inline]
    pub fn contains(&self, cell: GridCoord) -> bool {
        self.center.distance_squared(&cell) <= (self.radius as i64) * (self.radius as i64)
    }

    /// Inclusive bounding box of the disc: (min corner, max corner).
    pub fn bounds(&self) -> (GridCoord, GridCoord) {
        (
            GridCoord::new(self.center.x - self.radius, self.center.y - self.radius),
            GridCoord::new(self.center.x + self.radius, self.center.y + self.radius),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_disc() {
        let o = Obstacle::new(10, 10, 3);
        assert!(o.contains(GridCoord::new(10, 10)));
        assert!(o.contains(GridCoord::new(13, 10)));
        assert!(o.contains(GridCoord::new(12, 12))); // 8 <= 9
        assert!(!o.contains(GridCoord::new(13, 11))); // 10 > 9
        assert!(!o.contains(GridCoord::new(14, 10)));
    }

    #[test]
    fn test_zero_radius() {
        let o = Obstacle::new(5, 5, 0);
        assert!(o.contains(GridCoord::new(5, 5)));
        assert!(!o.contains(GridCoord::new(5, 6)));
    }

    #[test]
    fn test_negative_radius_clamped() {
        let o = Obstacle::new(0, 0, -3);
        assert_eq!(o.radius, 0);
    }

    #[test]
    fn test_bounds() {
        let o = Obstacle::new(4, 7, 2);
        let (min, max) = o.bounds();
        assert_eq!(min, GridCoord::new(2, 5));
        assert_eq!(max, GridCoord::new(6, 9));
    }
}
