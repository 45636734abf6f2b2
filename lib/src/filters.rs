use image::{GrayImage, Luma};

use crate::error::{AsciiError, Result};

/// Perceptual luminance weights (ITU-R BT.601)
pub const LUMA_WEIGHTS: [f32; 3] = [0.299, 0.587, 0.114];

/// Calculate luminance from a raw RGBA buffer
///
/// Formula: L = round(0.299*R + 0.587*G + 0.114*B), alpha is ignored
///
/// # Arguments
/// * `pixels` - Row-major RGBA bytes, 4 per pixel
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
///
/// # Returns
/// Grayscale image with the same dimensions, or `InvalidImageData` if the
/// buffer length is not `width * height * 4`
pub fn calculate_luminance(pixels: &[u8], width: u32, height: u32) -> Result<GrayImage> {
    let expected = width as usize * height as usize * 4;
    if pixels.len() != expected {
        return Err(AsciiError::InvalidImageData {
            expected,
            actual: pixels.len(),
        });
    }

    let mut output = GrayImage::new(width, height);
    let [wr, wg, wb] = LUMA_WEIGHTS;

    for (rgba, out) in pixels.chunks_exact(4).zip(output.pixels_mut()) {
        let luminance = wr * rgba[0] as f32 + wg * rgba[1] as f32 + wb * rgba[2] as f32;
        *out = Luma([luminance.round() as u8]);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
        rgba.repeat((width * height) as usize)
    }

    #[test]
    fn test_luminance_black() {
        let lum = calculate_luminance(&solid(10, 10, [0, 0, 0, 255]), 10, 10).unwrap();
        assert_eq!(lum.get_pixel(0, 0)[0], 0);
    }

    #[test]
    fn test_luminance_white() {
        let lum = calculate_luminance(&solid(10, 10, [255, 255, 255, 255]), 10, 10).unwrap();
        assert_eq!(lum.get_pixel(9, 9)[0], 255);
    }

    #[test]
    fn test_luminance_gray() {
        let lum = calculate_luminance(&solid(4, 4, [128, 128, 128, 255]), 4, 4).unwrap();
        for pixel in lum.pixels() {
            assert!((127..=128).contains(&pixel[0]));
        }
    }

    #[test]
    fn test_luminance_weights() {
        // Pure channels: 0.299*255 = 76.2, 0.587*255 = 149.7, 0.114*255 = 29.1
        let pixels = [255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255];
        let lum = calculate_luminance(&pixels, 3, 1).unwrap();
        assert_eq!(lum.get_pixel(0, 0)[0], 76);
        assert_eq!(lum.get_pixel(1, 0)[0], 150);
        assert_eq!(lum.get_pixel(2, 0)[0], 29);
    }

    #[test]
    fn test_luminance_ignores_alpha() {
        let opaque = calculate_luminance(&solid(2, 2, [90, 40, 200, 255]), 2, 2).unwrap();
        let clear = calculate_luminance(&solid(2, 2, [90, 40, 200, 0]), 2, 2).unwrap();
        assert_eq!(opaque, clear);
    }

    #[test]
    fn test_luminance_preserves_dimensions() {
        let lum = calculate_luminance(&solid(7, 3, [1, 2, 3, 4]), 7, 3).unwrap();
        assert_eq!(lum.dimensions(), (7, 3));
    }

    #[test]
    fn test_luminance_rejects_short_buffer() {
        let result = calculate_luminance(&[0; 15], 2, 2);
        assert!(matches!(
            result,
            Err(AsciiError::InvalidImageData {
                expected: 16,
                actual: 15
            })
        ));
    }

    #[test]
    fn test_luminance_empty_image() {
        let lum = calculate_luminance(&[], 0, 0).unwrap();
        assert_eq!(lum.dimensions(), (0, 0));
    }
}
