use std::path::Path;

use crate::ascii::map_to_text;
use crate::config::AsciiConfig;
use crate::decode::{decode_png, load_file};
use crate::error::Result;
use crate::filters::calculate_luminance;
use crate::planner::fit_to_console;
use crate::terminal::ConsoleSize;

/// Converts raw RGBA pixels to ASCII art that fits the console
///
/// Pipeline:
/// 1. Extract luminance from the RGBA buffer
/// 2. Halve repeatedly until the grid is close to the console size
/// 3. Finish with one aspect-preserving bilinear resize
/// 4. Map each cell to a glyph of the density ramp
///
/// # Arguments
/// * `pixels` - Row-major RGBA bytes, `width * height * 4` long
/// * `width`, `height` - Image dimensions in pixels
/// * `console` - Console size to fit into
/// * `config` - Conversion settings
///
/// # Returns
/// The rendered text, one line per row
pub fn process_pixels(
    pixels: &[u8],
    width: u32,
    height: u32,
    console: ConsoleSize,
    config: &AsciiConfig,
) -> Result<String> {
    config.validate()?;

    let lum = calculate_luminance(pixels, width, height)?;
    let fitted = fit_to_console(lum, console, config.allow_upscale)?;
    let (out_width, out_height) = fitted.dimensions();

    log::info!(
        "rendering {}x{} image as {}x{} characters",
        width,
        height,
        out_width,
        out_height
    );
    Ok(map_to_text(&fitted))
}

/// Decodes PNG bytes and converts them to ASCII art
///
/// A failed decode aborts; nothing is rendered from partial data.
pub fn process_png(bytes: &[u8], console: ConsoleSize, config: &AsciiConfig) -> Result<String> {
    let image = decode_png(bytes)?;
    process_pixels(&image.pixels, image.width, image.height, console, config)
}

/// Loads a PNG file and converts it to ASCII art
pub fn process_file(path: &Path, console: ConsoleSize, config: &AsciiConfig) -> Result<String> {
    let bytes = load_file(path)?;
    process_png(&bytes, console, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AsciiError;

    #[test]
    fn test_process_small_gray() {
        let pixels = [128u8, 128, 128, 255].repeat(16);
        let text =
            process_pixels(&pixels, 4, 4, ConsoleSize::new(80, 24), &AsciiConfig::default())
                .unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        let glyph = lines[0].chars().next().unwrap();
        assert!(lines.iter().all(|line| *line == glyph.to_string().repeat(4)));
    }

    #[test]
    fn test_process_single_pixel_column() {
        let pixels = [255u8, 255, 255, 255].repeat(1000);
        let text =
            process_pixels(&pixels, 1, 1000, ConsoleSize::new(80, 24), &AsciiConfig::default())
                .unwrap();
        assert_eq!(text, "@\n".repeat(24));
    }

    #[test]
    fn test_process_rejects_bad_buffer() {
        let result = process_pixels(
            &[0; 10],
            4,
            4,
            ConsoleSize::new(80, 24),
            &AsciiConfig::default(),
        );
        assert!(matches!(result, Err(AsciiError::InvalidImageData { .. })));
    }

    #[test]
    fn test_process_rejects_invalid_config() {
        let config = AsciiConfig {
            fallback_size: ConsoleSize::new(0, 0),
            ..Default::default()
        };
        let pixels = [0u8; 16];
        let result = process_pixels(&pixels, 2, 2, ConsoleSize::new(80, 24), &config);
        assert!(matches!(result, Err(AsciiError::InvalidConfig(_))));
    }

    #[test]
    fn test_process_png_garbage() {
        let result = process_png(
            b"\x89PNG but not really",
            ConsoleSize::default(),
            &AsciiConfig::default(),
        );
        assert!(matches!(result, Err(AsciiError::DecodeError(_))));
    }
}
