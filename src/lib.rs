//! # Galaxy-Map: Obstacle Maps and Safe Shortest Paths
//!
//! A 2D obstacle-map library for planning collision-free paths for a
//! circular robot on a bounded cell grid.
//!
//! ## Features
//!
//! - **Binary Occupancy Grid**: circular obstacles rasterized into a
//!   flat row-major grid
//! - **Radius-Aware Planning**: BFS shortest paths that keep the whole
//!   robot disc clear of obstacles
//! - **Precomputed Clearance**: a brushfire distance field makes the
//!   per-node collision check O(1)
//! - **Persistence and Rendering**: maps round-trip through grayscale
//!   PNG and render to SVG
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use galaxy_map::{GalaxyMap, GridCoord, Obstacle};
//!
//! // Create a 200x200 map with a few circular obstacles
//! let mut map = GalaxyMap::new(200, 200);
//! map.add_obstacles(&[
//!     Obstacle::new(60, 80, 12),
//!     Obstacle::new(140, 120, 18),
//! ]);
//!
//! // Find the shortest path for a robot of radius 5 cells
//! let result = map.find_shortest_path(GridCoord::new(10, 10), GridCoord::new(190, 190), 5);
//! if result.success {
//!     println!("Found a path of {} cells", result.steps());
//! }
//! ```
//!
//! ## Coordinate Frame
//!
//! Cell (0, 0) is the bottom-left corner of the map; X grows to the
//! right and Y grows upward. All distances are in cell units.
//!
//! ## Architecture
//!
//! The library is organized into modules:
//!
//! - [`core`]: Fundamental types ([`GridCoord`], [`Obstacle`])
//! - [`grid`]: Binary occupancy grid storage
//! - [`query`]: Clearance field and disc-footprint safety checks
//! - [`pathfinding`]: BFS shortest-path search
//! - [`io`]: PNG map persistence
//! - [`viz`]: SVG rendering
//! - [`config`]: TOML configuration
//!
//! ## Data Flow
//!
//! ```text
//!   Obstacle list ──stamp──► GridStorage ──brushfire──► ClearanceField
//!                                │                           │
//!                       save/load PNG                        │
//!                                │                           ▼
//!                                └────────────────────► BfsPlanner
//!                                                            │
//!                                                            ▼
//!                                                       PathResult ──► SVG
//! ```

pub mod config;
pub mod core;
pub mod grid;
pub mod io;
pub mod pathfinding;
pub mod query;
pub mod viz;

mod error;
mod map;

// Re-export main types at crate root
pub use crate::core::{GridCoord, Obstacle};
pub use config::GalaxyConfig;
pub use error::{GalaxyError, Result};
pub use grid::{CellState, GridStorage};
pub use map::GalaxyMap;
pub use pathfinding::{Connectivity, PathFailure, PathResult, PlannerConfig};
pub use query::{ClearanceChecker, ClearanceField};
pub use viz::SvgRenderer;
