//! BFS planner implementation.

use log::{debug, trace};
use std::collections::{HashMap, HashSet, VecDeque};

use crate::core::GridCoord;
use crate::grid::GridStorage;
use crate::query::{ClearanceChecker, ClearanceField, OCTILE_RATIO};

use super::types::{Connectivity, PathFailure, PathResult, PlannerConfig};

/// Breadth-first shortest-path planner.
///
/// Every move costs one step, so the first time the goal is reached
/// the path has the minimal number of cells. Per-node collision checks
/// go through the precomputed [`ClearanceField`]; the exact disc check
/// is only consulted in the narrow band where the field's octile
/// metric cannot decide.
pub struct BfsPlanner<'a> {
    storage: &'a GridStorage,
    clearance: &'a ClearanceField,
    config: PlannerConfig,
}

impl<'a> BfsPlanner<'a> {
    /// Create a new BFS planner
    pub fn new(
        storage: &'a GridStorage,
        clearance: &'a ClearanceField,
        config: PlannerConfig,
    ) -> Self {
        Self {
            storage,
            clearance,
            config,
        }
    }

    /// Create with default configuration
    pub fn with_defaults(storage: &'a GridStorage, clearance: &'a ClearanceField) -> Self {
        Self::new(storage, clearance, PlannerConfig::default())
    }

    /// Find a minimal-step path from start to goal for a robot disc of
    /// the given radius (in cells).
    pub fn find_path(&self, start: GridCoord, goal: GridCoord, radius: i32) -> PathResult {
        let radius = radius.max(0);
        trace!(
            "[Bfs] find_path: start=({},{}) goal=({},{}) radius={}",
            start.x,
            start.y,
            goal.x,
            goal.y,
            radius
        );

        if !self.storage.is_valid_coord(start) || !self.storage.is_valid_coord(goal) {
            debug!("[Bfs] FAILED: OutOfBounds - start or goal outside grid");
            return PathResult::failed(PathFailure::OutOfBounds, 0);
        }

        let checker = ClearanceChecker::new(self.storage);

        if !checker.is_cell_safe(start, radius) {
            debug!(
                "[Bfs] FAILED: StartBlocked at ({},{}), radius={}",
                start.x, start.y, radius
            );
            return PathResult::failed(PathFailure::StartBlocked, 0);
        }
        if !checker.is_cell_safe(goal, radius) {
            debug!(
                "[Bfs] FAILED: GoalBlocked at ({},{}), radius={}",
                goal.x, goal.y, radius
            );
            return PathResult::failed(PathFailure::GoalBlocked, 0);
        }

        if start == goal {
            return PathResult {
                path: vec![start],
                nodes_expanded: 0,
                success: true,
                failure_reason: None,
            };
        }

        // BFS search
        let mut queue = VecDeque::new();
        let mut visited = HashSet::new();
        let mut came_from: HashMap<GridCoord, GridCoord> = HashMap::new();

        queue.push_back(start);
        visited.insert(start);

        let mut nodes_expanded = 0;

        while let Some(current) = queue.pop_front() {
            nodes_expanded += 1;

            if nodes_expanded > self.config.max_iterations {
                debug!(
                    "[Bfs] FAILED: MaxIterationsExceeded ({} nodes)",
                    nodes_expanded
                );
                return PathResult::failed(PathFailure::MaxIterationsExceeded, nodes_expanded);
            }

            let neighbors = match self.config.connectivity {
                Connectivity::Four => current.neighbors_4().to_vec(),
                Connectivity::Eight => current.neighbors_8().to_vec(),
            };

            for neighbor in neighbors {
                if visited.contains(&neighbor) {
                    continue;
                }

                // The goal was validated up front; reaching it ends the
                // search with a minimal-step path
                if neighbor == goal {
                    came_from.insert(neighbor, current);
                    return self.reconstruct_path(came_from, start, goal, nodes_expanded);
                }

                if !self.is_cell_safe(&checker, neighbor, radius) {
                    continue;
                }

                visited.insert(neighbor);
                came_from.insert(neighbor, current);
                queue.push_back(neighbor);
            }
        }

        debug!(
            "[Bfs] FAILED: NoPath after expanding {} nodes",
            nodes_expanded
        );
        PathResult::failed(PathFailure::NoPath, nodes_expanded)
    }

    /// Collision check for one node.
    ///
    /// The clearance field decides almost every cell: octile distance
    /// <= radius means a real collision, octile distance beyond
    /// radius * OCTILE_RATIO means definitely clear. Only the band in
    /// between needs the exact disc scan.
    #[inline]
    fn is_cell_safe(&self, checker: &ClearanceChecker, coord: GridCoord, radius: i32) -> bool {
        if !self.storage.is_valid_coord(coord) {
            return false;
        }

        let d = self.clearance.distance(coord);
        let r = radius as f32;

        if d <= r {
            false
        } else if d > r * OCTILE_RATIO {
            true
        } else {
            checker.is_cell_safe(coord, radius)
        }
    }

    /// Reconstruct the path from the came_from map
    fn reconstruct_path(
        &self,
        came_from: HashMap<GridCoord, GridCoord>,
        start: GridCoord,
        goal: GridCoord,
        nodes_expanded: usize,
    ) -> PathResult {
        let mut path = Vec::new();
        let mut current = goal;

        while let Some(&prev) = came_from.get(&current) {
            path.push(current);
            current = prev;
        }
        path.push(current); // Add start
        path.reverse();

        debug_assert_eq!(path.first(), Some(&start));

        trace!(
            "[Bfs] SUCCESS: path length={} cells, nodes_expanded={}",
            path.len(),
            nodes_expanded
        );

        PathResult {
            path,
            nodes_expanded,
            success: true,
            failure_reason: None,
        }
    }
}

/// Convenience: find a path with a freshly computed clearance field
/// and default configuration.
pub fn find_path(
    storage: &GridStorage,
    start: GridCoord,
    goal: GridCoord,
    radius: i32,
) -> PathResult {
    let clearance = ClearanceField::from_storage(storage);
    BfsPlanner::with_defaults(storage, &clearance).find_path(start, goal, radius)
}

/// Convenience: check whether any path exists.
pub fn path_exists(storage: &GridStorage, start: GridCoord, goal: GridCoord, radius: i32) -> bool {
    find_path(storage, start, goal, radius).success
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Obstacle;
    use crate::pathfinding::PlannerConfig;

    fn planner_result(
        storage: &GridStorage,
        config: PlannerConfig,
        start: GridCoord,
        goal: GridCoord,
        radius: i32,
    ) -> PathResult {
        let clearance = ClearanceField::from_storage(storage);
        BfsPlanner::new(storage, &clearance, config).find_path(start, goal, radius)
    }

    #[test]
    fn test_straight_line_path() {
        let grid = GridStorage::new(10, 10);
        let result = find_path(&grid, GridCoord::new(0, 0), GridCoord::new(5, 0), 0);

        assert!(result.success);
        // 4-connected: cells in path = manhattan distance + 1
        assert_eq!(result.steps(), 6);
        assert_eq!(result.path[0], GridCoord::new(0, 0));
        assert_eq!(result.path[5], GridCoord::new(5, 0));
    }

    #[test]
    fn test_path_steps_match_manhattan() {
        let grid = GridStorage::new(15, 15);
        let start = GridCoord::new(2, 3);
        let goal = GridCoord::new(9, 11);
        let result = find_path(&grid, start, goal, 0);

        assert!(result.success);
        assert_eq!(
            result.steps(),
            start.manhattan_distance(&goal) as usize + 1
        );
    }

    #[test]
    fn test_consecutive_cells_are_adjacent() {
        let mut grid = GridStorage::new(20, 20);
        grid.stamp_obstacle(&Obstacle::new(10, 10, 3));
        let result = find_path(&grid, GridCoord::new(2, 10), GridCoord::new(18, 10), 1);

        assert!(result.success);
        for pair in result.path.windows(2) {
            assert_eq!(pair[0].manhattan_distance(&pair[1]), 1);
        }
    }

    #[test]
    fn test_detour_around_obstacle_is_longer() {
        let mut grid = GridStorage::new(20, 20);
        let start = GridCoord::new(2, 10);
        let goal = GridCoord::new(18, 10);

        let direct = find_path(&grid, start, goal, 0);
        grid.stamp_obstacle(&Obstacle::new(10, 10, 4));
        let detour = find_path(&grid, start, goal, 0);

        assert!(direct.success && detour.success);
        assert!(detour.steps() > direct.steps());
    }

    #[test]
    fn test_eight_connected_shorter() {
        let grid = GridStorage::new(10, 10);
        let config = PlannerConfig {
            connectivity: Connectivity::Eight,
            ..Default::default()
        };
        let result = planner_result(
            &grid,
            config,
            GridCoord::new(0, 0),
            GridCoord::new(5, 5),
            0,
        );

        assert!(result.success);
        // Diagonal moves collapse the 11-cell cardinal path to 6 cells
        assert_eq!(result.steps(), 6);
    }

    #[test]
    fn test_start_equals_goal() {
        let grid = GridStorage::new(10, 10);
        let result = find_path(&grid, GridCoord::new(4, 4), GridCoord::new(4, 4), 1);

        assert!(result.success);
        assert_eq!(result.steps(), 1);
        assert_eq!(result.path, vec![GridCoord::new(4, 4)]);
    }

    #[test]
    fn test_out_of_bounds_endpoints() {
        let grid = GridStorage::new(10, 10);
        let result = find_path(&grid, GridCoord::new(-1, 0), GridCoord::new(5, 5), 0);
        assert_eq!(result.failure_reason, Some(PathFailure::OutOfBounds));

        let result = find_path(&grid, GridCoord::new(0, 0), GridCoord::new(5, 10), 0);
        assert_eq!(result.failure_reason, Some(PathFailure::OutOfBounds));
    }

    #[test]
    fn test_blocked_endpoints() {
        let mut grid = GridStorage::new(10, 10);
        grid.stamp_obstacle(&Obstacle::new(2, 2, 1));

        let result = find_path(&grid, GridCoord::new(2, 2), GridCoord::new(8, 8), 0);
        assert_eq!(result.failure_reason, Some(PathFailure::StartBlocked));

        let result = find_path(&grid, GridCoord::new(8, 8), GridCoord::new(2, 3), 0);
        assert_eq!(result.failure_reason, Some(PathFailure::GoalBlocked));

        // Radius reaches the obstacle even though the cell itself is free
        let result = find_path(&grid, GridCoord::new(5, 2), GridCoord::new(8, 8), 2);
        assert_eq!(result.failure_reason, Some(PathFailure::StartBlocked));
    }

    #[test]
    fn test_wall_blocks_all_paths() {
        let mut grid = GridStorage::new(11, 11);
        for y in 0..11 {
            grid.set(GridCoord::new(5, y), crate::grid::CellState::Occupied);
        }

        let result = find_path(&grid, GridCoord::new(2, 5), GridCoord::new(8, 5), 0);
        assert_eq!(result.failure_reason, Some(PathFailure::NoPath));
        assert!(result.nodes_expanded > 0);
        assert!(!path_exists(&grid, GridCoord::new(2, 5), GridCoord::new(8, 5), 0));
    }

    #[test]
    fn test_gap_too_narrow_for_radius() {
        // Vertical wall with a 3-cell gap at y=9..=11
        let mut grid = GridStorage::new(21, 21);
        for y in 0..21 {
            if !(9..=11).contains(&y) {
                grid.set(GridCoord::new(10, y), crate::grid::CellState::Occupied);
            }
        }

        let start = GridCoord::new(2, 10);
        let goal = GridCoord::new(18, 10);

        // A point robot slips through the gap
        assert!(find_path(&grid, start, goal, 0).success);
        // A radius-2 robot cannot: the gap centre is only 2 cells from the wall
        let result = find_path(&grid, start, goal, 2);
        assert_eq!(result.failure_reason, Some(PathFailure::NoPath));
    }

    #[test]
    fn test_max_iterations_exceeded() {
        let grid = GridStorage::new(50, 50);
        let config = PlannerConfig {
            max_iterations: 10,
            ..Default::default()
        };
        let result = planner_result(
            &grid,
            config,
            GridCoord::new(0, 0),
            GridCoord::new(49, 49),
            0,
        );

        assert_eq!(
            result.failure_reason,
            Some(PathFailure::MaxIterationsExceeded)
        );
    }

    #[test]
    fn test_path_respects_radius_clearance() {
        let mut grid = GridStorage::new(30, 30);
        grid.stamp_obstacle(&Obstacle::new(15, 15, 4));

        let result = find_path(&grid, GridCoord::new(2, 15), GridCoord::new(28, 15), 2);
        assert!(result.success);

        let checker = ClearanceChecker::new(&grid);
        for cell in &result.path {
            assert!(checker.is_cell_safe(*cell, 2));
        }
    }
}
