//! SVG rendering for manual inspection
//!
//! Generates SVG files showing:
//! - Occupied cells from the raster map (dark red underlay)
//! - Obstacle discs (red circles)
//! - The found path drawn as translucent robot-radius discs
//! - Start/end markers with labels

use svg::node::element::{Circle, Group, Rectangle, Text};
use svg::Document;

use crate::core::{GridCoord, Obstacle};
use crate::error::Result;
use crate::grid::GridStorage;

/// Color palette.
mod colors {
    /// Map boundary - green
    pub const BOUNDARY: &str = "#009E73";
    /// Occupied raster cells - dark red
    pub const OCCUPIED_CELL: &str = "#550000";
    /// Obstacle discs - red
    pub const OBSTACLE: &str = "#D55E00";
    /// Obstacle outline - white
    pub const OBSTACLE_EDGE: &str = "#FFFFFF";
    /// Path discs - gray
    pub const PATH_DISC: &str = "#BBBBBB";
    /// Path disc outline - orange
    pub const PATH_EDGE: &str = "#E69F00";
    /// Start/end markers - white
    pub const ENDPOINT: &str = "#FFFFFF";
    /// Marker labels - green
    pub const LABEL: &str = "#009E73";
    /// Background - black
    pub const BACKGROUND: &str = "#000000";
}

/// Opacity for the path discs.
const PATH_DISC_OPACITY: f32 = 0.15;

/// SVG renderer for maps and paths.
pub struct SvgRenderer {
    /// Pixels per cell
    scale: f32,
    /// Margin around the map in pixels
    margin: f32,
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SvgRenderer {
    /// Create a renderer with the default scale (4 px per cell).
    pub fn new() -> Self {
        Self {
            scale: 4.0,
            margin: 20.0,
        }
    }

    /// Create a renderer with a custom scale in pixels per cell.
    pub fn with_scale(scale: f32) -> Self {
        Self {
            scale,
            margin: 20.0,
        }
    }

    /// Map a cell centre to SVG pixel coordinates.
    /// The Y axis is flipped so map y grows upward.
    fn cell_to_px(&self, cell: GridCoord, grid_height: usize) -> (f32, f32) {
        let px = self.margin + (cell.x as f32 + 0.5) * self.scale;
        let py = self.margin + (grid_height as f32 - 1.0 - cell.y as f32 + 0.5) * self.scale;
        (px, py)
    }

    /// Render the map, obstacles, and path into an SVG document.
    pub fn render(
        &self,
        storage: &GridStorage,
        obstacles: &[Obstacle],
        path: &[GridCoord],
        path_radius: i32,
    ) -> Document {
        let width = (storage.width() as f32 * self.scale + 2.0 * self.margin) as i32;
        let height = (storage.height() as f32 * self.scale + 2.0 * self.margin) as i32;

        let mut doc = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", (0, 0, width, height));

        // Layer 0: Background
        doc = doc.add(
            Rectangle::new()
                .set("x", 0)
                .set("y", 0)
                .set("width", width)
                .set("height", height)
                .set("fill", colors::BACKGROUND),
        );

        // Layer 1: Occupied raster cells
        doc = doc.add(self.render_occupied_cells(storage));

        // Layer 2: Map boundary
        doc = doc.add(
            Rectangle::new()
                .set("x", self.margin)
                .set("y", self.margin)
                .set("width", storage.width() as f32 * self.scale)
                .set("height", storage.height() as f32 * self.scale)
                .set("fill", "none")
                .set("stroke", colors::BOUNDARY)
                .set("stroke-width", 3),
        );

        // Layer 3: Obstacle discs
        doc = doc.add(self.render_obstacles(storage, obstacles));

        // Layer 4: Path discs
        doc = doc.add(self.render_path(storage, path, path_radius));

        // Layer 5: Start/end markers
        if !path.is_empty() {
            doc = doc.add(self.render_endpoints(storage, path, path_radius));
        }

        // Layer 6: Title
        doc = doc.add(
            Text::new(format!(
                "Galaxy map {}x{}, robot radius {}",
                storage.width(),
                storage.height(),
                path_radius
            ))
            .set("x", self.margin)
            .set("y", self.margin - 6.0)
            .set("font-size", 12)
            .set("font-family", "sans-serif")
            .set("fill", colors::LABEL),
        );

        doc
    }

    /// Render the map and write it to a file.
    pub fn render_to_file(
        &self,
        storage: &GridStorage,
        obstacles: &[Obstacle],
        path: &[GridCoord],
        path_radius: i32,
        output_path: &std::path::Path,
    ) -> Result<()> {
        let doc = self.render(storage, obstacles, path, path_radius);
        svg::save(output_path, &doc)?;
        Ok(())
    }

    fn render_occupied_cells(&self, storage: &GridStorage) -> Group {
        let mut group = Group::new().set("id", "occupied_cells");

        for (cell, state) in storage.iter() {
            if !state.is_occupied() {
                continue;
            }
            let (px, py) = self.cell_to_px(cell, storage.height());
            group = group.add(
                Rectangle::new()
                    .set("x", px - 0.5 * self.scale)
                    .set("y", py - 0.5 * self.scale)
                    .set("width", self.scale)
                    .set("height", self.scale)
                    .set("fill", colors::OCCUPIED_CELL),
            );
        }

        group
    }

    fn render_obstacles(&self, storage: &GridStorage, obstacles: &[Obstacle]) -> Group {
        let mut group = Group::new().set("id", "obstacles");

        for obstacle in obstacles {
            let (cx, cy) = self.cell_to_px(obstacle.center, storage.height());
            group = group.add(
                Circle::new()
                    .set("cx", cx)
                    .set("cy", cy)
                    .set("r", obstacle.radius as f32 * self.scale)
                    .set("fill", colors::OBSTACLE)
                    .set("fill-opacity", 0.9)
                    .set("stroke", colors::OBSTACLE_EDGE)
                    .set("stroke-width", 2),
            );
        }

        group
    }

    fn render_path(&self, storage: &GridStorage, path: &[GridCoord], path_radius: i32) -> Group {
        let mut group = Group::new().set("id", "path");

        // Robot discs are drawn at least half a cell wide so a
        // zero-radius path is still visible
        let disc_r = (path_radius as f32).max(0.5) * self.scale;

        for cell in path {
            let (cx, cy) = self.cell_to_px(*cell, storage.height());
            group = group.add(
                Circle::new()
                    .set("cx", cx)
                    .set("cy", cy)
                    .set("r", disc_r)
                    .set("fill", colors::PATH_DISC)
                    .set("fill-opacity", PATH_DISC_OPACITY)
                    .set("stroke", colors::PATH_EDGE)
                    .set("stroke-width", 1),
            );
        }

        group
    }

    fn render_endpoints(
        &self,
        storage: &GridStorage,
        path: &[GridCoord],
        path_radius: i32,
    ) -> Group {
        let mut group = Group::new().set("id", "endpoints");
        let disc_r = (path_radius as f32).max(0.5) * self.scale;

        let ends = [(path[0], "start"), (path[path.len() - 1], "end")];
        for (cell, label) in ends {
            let (cx, cy) = self.cell_to_px(cell, storage.height());
            group = group.add(
                Circle::new()
                    .set("cx", cx)
                    .set("cy", cy)
                    .set("r", disc_r)
                    .set("fill", colors::ENDPOINT)
                    .set("fill-opacity", 0.9)
                    .set("stroke", colors::PATH_EDGE)
                    .set("stroke-width", 2),
            );
            group = group.add(
                Text::new(label)
                    .set("x", cx + disc_r + 4.0)
                    .set("y", cy)
                    .set("font-size", 14)
                    .set("font-family", "sans-serif")
                    .set("font-weight", "bold")
                    .set("fill", colors::LABEL),
            );
        }

        group
    }
}
