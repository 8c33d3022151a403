//! Path planning types.

use serde::{Deserialize, Serialize};

use crate::core::GridCoord;

/// Grid connectivity for the search.
///
/// 4-connected is the default: step counts are only comparable when
/// every move covers the same distance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Connectivity {
    /// Cardinal moves only (N, E, S, W)
    #[default]
    Four,
    /// Cardinal and diagonal moves
    Eight,
}

/// Path planning configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Grid connectivity
    #[serde(default)]
    pub connectivity: Connectivity,
    /// Maximum number of nodes to expand before giving up
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
}

fn default_max_iterations() -> usize {
    100_000
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            connectivity: Connectivity::Four,
            max_iterations: default_max_iterations(),
        }
    }
}

/// Result of a shortest-path query
#[derive(Clone, Debug)]
pub struct PathResult {
    /// Path as grid coordinates, including both endpoints
    /// (empty if no path found)
    pub path: Vec<GridCoord>,
    /// Number of nodes expanded during search
    pub nodes_expanded: usize,
    /// Whether a path was found
    pub success: bool,
    /// Reason for failure (if any)
    pub failure_reason: Option<PathFailure>,
}

impl PathResult {
    /// Create a failed result
    pub(super) fn failed(reason: PathFailure, nodes_expanded: usize) -> Self {
        Self {
            path: Vec::new(),
            nodes_expanded,
            success: false,
            failure_reason: Some(reason),
        }
    }

    /// Number of cells in the path, endpoints included.
    /// Zero when no path was found.
    pub fn steps(&self) -> usize {
        self.path.len()
    }
}

/// Reason for path failure
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathFailure {
    /// Start or goal is outside the grid
    OutOfBounds,
    /// Start position collides with an obstacle
    StartBlocked,
    /// Goal position collides with an obstacle
    GoalBlocked,
    /// No path exists between start and goal
    NoPath,
    /// Maximum iterations exceeded
    MaxIterationsExceeded,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_result() {
        let result = PathResult::failed(PathFailure::NoPath, 42);
        assert!(!result.success);
        assert_eq!(result.steps(), 0);
        assert_eq!(result.nodes_expanded, 42);
        assert_eq!(result.failure_reason, Some(PathFailure::NoPath));
    }

    #[test]
    fn test_connectivity_default() {
        assert_eq!(Connectivity::default(), Connectivity::Four);
    }
}
