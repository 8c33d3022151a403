//! Random-world demo for galaxy-map.
//!
//! Builds a map with random circular obstacles, round-trips it through
//! PNG, then searches for a safe shortest path between random start and
//! end points for a random robot radius, retrying until one is found.
//!
//! Usage:
//!   cargo run --bin galaxy_demo -- --seed 42
//!   cargo run --bin galaxy_demo -- --width 120 --height 90 --obstacles 6

use clap::Parser;
use log::{info, warn};
use rand::prelude::*;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

use galaxy_map::{GalaxyConfig, GalaxyError, GalaxyMap, GridCoord, Obstacle, Result};

/// Random-world path planning demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Map width in cells (overrides config)
    #[arg(long)]
    width: Option<usize>,

    /// Map height in cells (overrides config)
    #[arg(long)]
    height: Option<usize>,

    /// Number of obstacles to generate (overrides config)
    #[arg(long)]
    obstacles: Option<usize>,

    /// Seed for deterministic worlds (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    /// Output directory for the map image and SVG
    #[arg(short, long, default_value = "./output")]
    output: PathBuf,

    /// Maximum number of random start/end draws before giving up
    #[arg(long, default_value_t = 50)]
    max_attempts: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = if let Some(path) = &args.config {
        info!("Loading configuration from {:?}", path);
        GalaxyConfig::load(path)?
    } else if Path::new("galaxy.toml").exists() {
        info!("Loading configuration from galaxy.toml");
        GalaxyConfig::load(Path::new("galaxy.toml"))?
    } else {
        info!("Using default configuration");
        GalaxyConfig::default()
    };

    // CLI overrides
    if let Some(width) = args.width {
        config.map.width = width;
    }
    if let Some(height) = args.height {
        config.map.height = height;
    }
    if let Some(count) = args.obstacles {
        config.demo.obstacle_count = count;
    }
    if let Some(seed) = args.seed {
        config.demo.seed = Some(seed);
    }

    let (width, height) = (config.map.width, config.map.height);
    if width < 4 || height < 4 {
        return Err(GalaxyError::Config(format!(
            "map dimensions {}x{} are too small for the demo",
            width, height
        )));
    }

    let mut rng = match config.demo.seed {
        Some(seed) => {
            info!("Seeding RNG with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    // Radii stay below a fraction of the smaller map dimension so
    // obstacles and the robot always fit
    let min_dim = width.min(height) as i32;
    let max_radius = (min_dim / config.demo.max_radius_divisor.max(1) as i32).max(2);

    info!(
        "Building {}x{} map with {} obstacles (radius < {})",
        width, height, config.demo.obstacle_count, max_radius
    );

    let mut map = GalaxyMap::with_config(width, height, config.planner.clone());
    let obstacles: Vec<Obstacle> = (0..config.demo.obstacle_count)
        .map(|_| {
            let r = rng.gen_range(1..max_radius);
            let x = rng.gen_range(r..width as i32 - r - 1);
            let y = rng.gen_range(r..height as i32 - r - 1);
            Obstacle::new(x, y, r)
        })
        .collect();
    map.add_obstacles(&obstacles);

    // Round-trip the raster through PNG and verify nothing was lost
    std::fs::create_dir_all(&args.output)?;
    let map_path = args.output.join(&config.output.map_path);
    map.save_map(&map_path)?;
    let reloaded = galaxy_map::io::load_png(&map_path)?;
    if reloaded != *map.storage() {
        return Err(GalaxyError::InvalidMap(format!(
            "map did not survive the PNG round-trip through {}",
            map_path.display()
        )));
    }
    info!(
        "Saved map to {} ({} occupied cells)",
        map_path.display(),
        map.storage().count_occupied()
    );

    // Draw random robots until one finds a path
    let mut found = false;
    for attempt in 1..=args.max_attempts {
        let r = rng.gen_range(1..max_radius);
        let lo = r;
        let (hi_x, hi_y) = (width as i32 - r - 1, height as i32 - r - 1);
        if hi_x < lo || hi_y < lo {
            continue;
        }

        let start = GridCoord::new(rng.gen_range(lo..=hi_x), rng.gen_range(lo..=hi_y));
        let end = GridCoord::new(rng.gen_range(lo..=hi_x), rng.gen_range(lo..=hi_y));

        let result = map.find_shortest_path(start, end, r);
        if result.success {
            println!(
                "The shortest safe path for a radius-{} robot from ({},{}) to ({},{}) is {} steps long.",
                r, start.x, start.y, end.x, end.y,
                result.steps()
            );
            found = true;
            break;
        }

        info!(
            "Attempt {}: robot radius {} from ({},{}) to ({},{}) failed ({:?}), drawing new points",
            attempt,
            r,
            start.x,
            start.y,
            end.x,
            end.y,
            result.failure_reason
        );
    }

    if !found {
        warn!(
            "No path found after {} attempts; rendering the map anyway",
            args.max_attempts
        );
    }

    let svg_path = args.output.join(&config.output.svg_path);
    map.render_svg(&svg_path)?;
    println!("Wrote visualization to {}", svg_path.display());

    Ok(())
}
