use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the image-to-text pipeline.
#[derive(Error, Debug)]
pub enum AsciiError {
    /// The input file does not exist.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that was requested.
        path: PathBuf,
    },

    /// The input file exists but could not be read, or was empty.
    #[error("failed to read {}: {source}", path.display())]
    ReadFailure {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The PNG decoder rejected the input bytes.
    #[error("failed to decode PNG: {0}")]
    DecodeError(String),

    /// Pixel buffer length does not match width × height × 4.
    #[error("invalid image data: expected {expected} bytes, got {actual}")]
    InvalidImageData {
        /// Byte count implied by the dimensions.
        expected: usize,
        /// Byte count actually supplied.
        actual: usize,
    },

    /// Dimensions too small (or zero) for the requested resize.
    #[error("unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions {
        /// Width that was rejected.
        width: u32,
        /// Height that was rejected.
        height: u32,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The terminal could not be queried or written to.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AsciiError>;
