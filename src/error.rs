//! Error types for icon generation

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for rendering and export
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating icon assets
#[derive(Error, Debug)]
pub enum Error {
    /// Canvas size must be at least one pixel
    #[error("Invalid canvas size: {0} (must be positive)")]
    InvalidSize(u32),

    /// Failed to create a directory or write a file
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The PNG encoder rejected the canvas
    #[error("Failed to encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Failed to build the in-memory canvas
    #[error("Rendering failed: {0}")]
    Render(String),

    /// Unreadable or malformed configuration file
    #[error("Invalid configuration in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}
