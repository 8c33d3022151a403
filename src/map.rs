//! High-level map facade.
//!
//! [`GalaxyMap`] ties together the obstacle grid, the clearance field,
//! the planner, persistence, and rendering behind one API.

use log::info;
use std::path::Path;

use crate::core::{GridCoord, Obstacle};
use crate::error::Result;
use crate::grid::GridStorage;
use crate::io;
use crate::pathfinding::{BfsPlanner, PathResult, PlannerConfig};
use crate::query::ClearanceField;
use crate::viz::SvgRenderer;

/// An obstacle map with safe shortest-path search for a circular robot.
///
/// The clearance field is cached between path queries and recomputed
/// only after the map changes.
#[derive(Clone, Debug)]
pub struct GalaxyMap {
    /// Binary obstacle grid
    storage: GridStorage,
    /// Obstacles stamped into the grid
    obstacles: Vec<Obstacle>,
    /// Robot radius used by the most recent path query
    path_radius: i32,
    /// Most recently found path (empty if the last query failed)
    shortest_path: Vec<GridCoord>,
    /// Cached clearance field, invalidated on map edits
    clearance: Option<ClearanceField>,
    /// Planner configuration
    planner_config: PlannerConfig,
}

impl GalaxyMap {
    /// Create an empty map of the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_config(width, height, PlannerConfig::default())
    }

    /// Create an empty map with a custom planner configuration.
    pub fn with_config(width: usize, height: usize, planner_config: PlannerConfig) -> Self {
        Self {
            storage: GridStorage::new(width, height),
            obstacles: Vec::new(),
            path_radius: 0,
            shortest_path: Vec::new(),
            clearance: None,
            planner_config,
        }
    }

    /// Map width in cells
    pub fn width(&self) -> usize {
        self.storage.width()
    }

    /// Map height in cells
    pub fn height(&self) -> usize {
        self.storage.height()
    }

    /// The underlying grid
    pub fn storage(&self) -> &GridStorage {
        &self.storage
    }

    /// Obstacles stamped into the grid
    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// The most recently found path (empty if none)
    pub fn shortest_path(&self) -> &[GridCoord] {
        &self.shortest_path
    }

    /// Robot radius used by the most recent path query
    pub fn path_radius(&self) -> i32 {
        self.path_radius
    }

    /// Stamp a list of circular obstacles into the map.
    pub fn add_obstacles(&mut self, obstacles: &[Obstacle]) {
        for obstacle in obstacles {
            self.add_obstacle(*obstacle);
        }
    }

    /// Stamp a single obstacle into the map.
    pub fn add_obstacle(&mut self, obstacle: Obstacle) {
        let marked = self.storage.stamp_obstacle(&obstacle);
        info!(
            "Added obstacle at ({},{}) radius {} ({} cells marked)",
            obstacle.center.x, obstacle.center.y, obstacle.radius, marked
        );
        self.obstacles.push(obstacle);
        self.invalidate();
    }

    /// Find the shortest safe path for a robot disc of `radius` cells.
    ///
    /// On success the path is retained and available through
    /// [`shortest_path`](Self::shortest_path); on failure the retained
    /// path is cleared.
    pub fn find_shortest_path(
        &mut self,
        start: GridCoord,
        end: GridCoord,
        radius: i32,
    ) -> PathResult {
        self.path_radius = radius.max(0);

        let clearance = self
            .clearance
            .get_or_insert_with(|| ClearanceField::from_storage(&self.storage));

        let planner = BfsPlanner::new(&self.storage, clearance, self.planner_config.clone());
        let result = planner.find_path(start, end, self.path_radius);

        self.shortest_path = result.path.clone();
        result
    }

    /// Save the obstacle grid as a grayscale PNG.
    pub fn save_map(&self, path: &Path) -> Result<()> {
        io::save_png(&self.storage, path)
    }

    /// Replace the grid with one loaded from an image file.
    ///
    /// The image carries only the raster, so the vector obstacle list
    /// and any retained path are cleared.
    pub fn load_map(&mut self, path: &Path) -> Result<()> {
        self.storage = io::load_png(path)?;
        self.obstacles.clear();
        self.shortest_path.clear();
        self.invalidate();
        Ok(())
    }

    /// Render the map and the retained path to an SVG file.
    pub fn render_svg(&self, path: &Path) -> Result<()> {
        SvgRenderer::new().render_to_file(
            &self.storage,
            &self.obstacles,
            &self.shortest_path,
            self.path_radius,
            path,
        )
    }

    /// Clear all obstacles and any retained path.
    pub fn clear(&mut self) {
        self.storage.clear();
        self.obstacles.clear();
        self.shortest_path.clear();
        self.path_radius = 0;
        self.invalidate();
    }

    fn invalidate(&mut self) {
        self.clearance = None;
    }
}
