//! Error types for guibase.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort startup. Every variant ends the process with exit code 1.
#[derive(Error, Debug)]
pub enum InitError {
    /// Window dimensions must both be non-zero.
    #[error("invalid window size {width}x{height}")]
    InvalidWindowSize { width: u32, height: u32 },

    /// The windowing library could not create its event loop.
    #[error("could not initialize windowing: {0}")]
    EventLoop(String),

    /// The OS refused to open the window.
    #[error("could not initialize window: {0}")]
    WindowCreation(String),

    /// The GPU context (surface, adapter or device) could not be created.
    #[error("could not initialize graphics context: {0}")]
    GraphicsContext(String),
}

/// Errors loading optional assets. These never abort the application.
#[derive(Error, Debug)]
pub enum AssetError {
    /// The font file could not be read.
    #[error("could not read font '{}': {source}", path.display())]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not a TrueType/OpenType font.
    #[error("'{}' is not a TrueType or OpenType font", path.display())]
    FontInvalid { path: PathBuf },
}

/// A specialized Result type for startup operations.
pub type Result<T> = std::result::Result<T, InitError>;
