use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DotPaintError {
    #[error("Input listener error: {0}")]
    Input(String),

    #[error("Pointer error: {0}")]
    Pointer(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("Failed to load image {}: {source}", .path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialize error: {0}")]
    TomlDe(#[from] toml::de::Error),
}

pub type DotPaintResult<T> = Result<T, DotPaintError>;
