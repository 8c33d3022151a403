//! Configuration loading for galaxy-map.

use serde::Deserialize;
use std::path::Path;

use crate::error::Result;
use crate::pathfinding::PlannerConfig;

/// Main configuration structure
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GalaxyConfig {
    #[serde(default)]
    pub map: MapSection,
    #[serde(default)]
    pub planner: PlannerConfig,
    #[serde(default)]
    pub demo: DemoSection,
    #[serde(default)]
    pub output: OutputSection,
}

/// Map dimensions
#[derive(Clone, Debug, Deserialize)]
pub struct MapSection {
    /// Map width in cells (default: 200)
    #[serde(default = "default_width")]
    pub width: usize,

    /// Map height in cells (default: 200)
    #[serde(default = "default_height")]
    pub height: usize,
}

/// Random world generation settings
#[derive(Clone, Debug, Deserialize)]
pub struct DemoSection {
    /// Number of obstacles to generate (default: 10)
    #[serde(default = "default_obstacle_count")]
    pub obstacle_count: usize,

    /// Obstacle and robot radii stay below min(width, height) divided
    /// by this (default: 10)
    #[serde(default = "default_max_radius_divisor")]
    pub max_radius_divisor: u32,

    /// Seed for deterministic generation (default: random)
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Output configuration
#[derive(Clone, Debug, Deserialize)]
pub struct OutputSection {
    /// Path to save the map file
    #[serde(default = "default_map_path")]
    pub map_path: String,

    /// Path to save SVG visualization
    #[serde(default = "default_svg_path")]
    pub svg_path: String,
}

fn default_width() -> usize {
    200
}

fn default_height() -> usize {
    200
}

fn default_obstacle_count() -> usize {
    10
}

fn default_max_radius_divisor() -> u32 {
    10
}

fn default_map_path() -> String {
    "map.png".to_string()
}

fn default_svg_path() -> String {
    "galaxy.svg".to_string()
}

impl Default for MapSection {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

impl Default for DemoSection {
    fn default() -> Self {
        Self {
            obstacle_count: default_obstacle_count(),
            max_radius_divisor: default_max_radius_divisor(),
            seed: None,
        }
    }
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            map_path: default_map_path(),
            svg_path: default_svg_path(),
        }
    }
}

impl GalaxyConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }
}
