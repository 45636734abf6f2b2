//! ASCII Fit - PNG to terminal-sized ASCII art
//!
//! This library decodes a PNG, converts it to a luminance grid, shrinks the
//! grid with progressive bilinear resizing until it fits the console, and
//! maps every cell to a glyph of a fixed density ramp.
//!
//! # Example
//! ```no_run
//! use ascii_fit::{AsciiConfig, process_file, terminal};
//! use std::path::Path;
//!
//! let config = AsciiConfig::default();
//! let console = terminal::console_size_or(config.fallback_size);
//! let text = process_file(Path::new("photo.png"), console, &config).unwrap();
//! print!("{text}");
//! ```

pub mod ascii;
pub mod config;
pub mod decode;
pub mod error;
pub mod filters;
pub mod lut;
pub mod planner;
pub mod processor;
pub mod resample;
pub mod terminal;

// Re-export main types for convenience
pub use config::AsciiConfig;
pub use error::{AsciiError, Result};
pub use processor::{process_file, process_pixels, process_png};
pub use terminal::ConsoleSize;
