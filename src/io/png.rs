//! PNG persistence for the obstacle grid.
//!
//! Format: 8-bit grayscale, one pixel per cell.
//! - Occupied cells are white (255), free cells are black (0)
//! - Image row 0 is the top of the map: pixel (col, row) maps to
//!   cell (col, height - 1 - row)
//!
//! Loading thresholds pixels at 128 so antialiased edges still decode.

use image::GrayImage;
use std::path::Path;

use crate::core::GridCoord;
use crate::error::{GalaxyError, Result};
use crate::grid::{CellState, GridStorage};

/// Pixel values above or equal to this are occupied.
const OCCUPIED_THRESHOLD: u8 = 128;

/// Save a grid as a grayscale PNG.
pub fn save_png(storage: &GridStorage, path: &Path) -> Result<()> {
    let width = storage.width() as u32;
    let height = storage.height() as u32;

    if width == 0 || height == 0 {
        return Err(GalaxyError::InvalidMap(
            "cannot save a zero-sized map".to_string(),
        ));
    }

    let img = GrayImage::from_fn(width, height, |px, py| {
        let cell = GridCoord::new(px as i32, (height - 1 - py) as i32);
        if storage.is_occupied(cell) {
            image::Luma([255u8])
        } else {
            image::Luma([0u8])
        }
    });

    img.save(path)?;
    Ok(())
}

/// Load a grid from an image file.
///
/// The image dimensions define the grid size. Any format the image
/// crate can decode works; pixels are converted to 8-bit luma first.
pub fn load_png(path: &Path) -> Result<GridStorage> {
    let img = image::open(path)?.into_luma8();
    let (width, height) = img.dimensions();

    if width == 0 || height == 0 {
        return Err(GalaxyError::InvalidMap(format!(
            "map image {} has a zero dimension",
            path.display()
        )));
    }

    let mut storage = GridStorage::new(width as usize, height as usize);
    for (px, py, pixel) in img.enumerate_pixels() {
        if pixel.0[0] >= OCCUPIED_THRESHOLD {
            let cell = GridCoord::new(px as i32, (height - 1 - py) as i32);
            storage.set(cell, CellState::Occupied);
        }
    }

    Ok(storage)
}
