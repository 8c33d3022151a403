//! Error types for galaxy-map.

use thiserror::Error;

/// Galaxy-map error type
#[derive(Error, Debug)]
pub enum GalaxyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid map: {0}")]
    InvalidMap(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<toml::de::Error> for GalaxyError {
    fn from(e: toml::de::Error) -> Self {
        GalaxyError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GalaxyError>;
