//! Shortest-path search on the obstacle grid.
//!
//! This module provides breadth-first path planning:
//!
//! - **BFS Search**: minimal-step collision-free paths for a circular
//!   robot, 4-connected by default
//!
//! ```rust,ignore
//! use galaxy_map::pathfinding::{BfsPlanner, PlannerConfig};
//! use galaxy_map::query::ClearanceField;
//!
//! let field = ClearanceField::from_storage(&storage);
//! let planner = BfsPlanner::new(&storage, &field, PlannerConfig::default());
//!
//! let result = planner.find_path(start, goal, radius);
//! if result.success {
//!     println!("Path found with {} cells", result.steps());
//! }
//! ```

mod bfs;
mod types;

pub use bfs::{find_path, path_exists, BfsPlanner};
pub use types::{Connectivity, PathFailure, PathResult, PlannerConfig};
