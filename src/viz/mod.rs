//! SVG visualization of maps and paths.

mod svg;

pub use self::svg::SvgRenderer;
