//! Map persistence as grayscale PNG images.

mod png;

pub use png::{load_png, save_png};
