//! File loading and PNG decoding

use std::io::ErrorKind;
use std::path::Path;

use image::ImageFormat;

use crate::error::{AsciiError, Result};

/// A decoded image: row-major RGBA bytes plus dimensions
#[derive(Debug, Clone)]
pub struct DecodedImage {
    /// 4 bytes per pixel (R, G, B, A), length = width * height * 4
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Read a whole file into memory
///
/// An empty file counts as a failed read.
pub fn load_file(path: &Path) -> Result<Vec<u8>> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AsciiError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => AsciiError::ReadFailure {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    if bytes.is_empty() {
        return Err(AsciiError::ReadFailure {
            path: path.to_path_buf(),
            source: std::io::Error::new(ErrorKind::UnexpectedEof, "file is empty"),
        });
    }

    log::debug!("loaded {} bytes from {}", bytes.len(), path.display());
    Ok(bytes)
}

/// Decode PNG bytes into an RGBA pixel buffer
///
/// Any bit depth or color type the PNG decoder understands is accepted and
/// expanded to 8-bit RGBA.
pub fn decode_png(bytes: &[u8]) -> Result<DecodedImage> {
    let img = image::load_from_memory_with_format(bytes, ImageFormat::Png)
        .map_err(|e| AsciiError::DecodeError(e.to_string()))?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    log::debug!("decoded PNG: {}x{}", width, height);
    Ok(DecodedImage {
        pixels: rgba.into_raw(),
        width,
        height,
    })
}
