//! Bilinear resampling of luminance grids

use image::{GrayImage, Luma};

use crate::error::{AsciiError, Result};

/// Resize a grayscale grid with bilinear interpolation
///
/// Source coordinates are `x' * (W-1)/W'` and `y' * (H-1)/H'`. The top-left
/// neighbor is clamped to `[0, W-2] x [0, H-2]` so the 2x2 neighborhood never
/// leaves the source. An axis of length 1 has a single neighbor and is
/// replicated. Blended values are truncated, not rounded.
///
/// # Arguments
/// * `input` - Source grid (W x H)
/// * `out_width` - Target width W'
/// * `out_height` - Target height H'
///
/// # Returns
/// A new grid of `out_width x out_height`. Resizing to the source dimensions
/// returns an exact copy. Fails with `UnsupportedDimensions` when a source
/// or target dimension is zero.
pub fn bilinear_resize(input: &GrayImage, out_width: u32, out_height: u32) -> Result<GrayImage> {
    let (width, height) = input.dimensions();

    if out_width == 0 || out_height == 0 {
        return Err(AsciiError::UnsupportedDimensions {
            width: out_width,
            height: out_height,
        });
    }

    if (width, height) == (out_width, out_height) {
        return Ok(input.clone());
    }

    if width == 0 || height == 0 {
        return Err(AsciiError::UnsupportedDimensions { width, height });
    }

    let x_ratio = (width - 1) as f32 / out_width as f32;
    let y_ratio = (height - 1) as f32 / out_height as f32;
    let mut output = GrayImage::new(out_width, out_height);

    for y in 0..out_height {
        let (y0, y1, fy) = neighbors(y_ratio * y as f32, height);

        for x in 0..out_width {
            let (x0, x1, fx) = neighbors(x_ratio * x as f32, width);

            let a = input.get_pixel(x0, y0)[0] as f32;
            let b = input.get_pixel(x1, y0)[0] as f32;
            let c = input.get_pixel(x0, y1)[0] as f32;
            let d = input.get_pixel(x1, y1)[0] as f32;

            // Same polynomial as the four-weight blend; lerping keeps equal
            // neighbors exact so truncation cannot drop a level.
            let top = a + (b - a) * fx;
            let bottom = c + (d - c) * fx;
            let value = top + (bottom - top) * fy;

            output.put_pixel(x, y, Luma([value as u8]));
        }
    }

    Ok(output)
}

/// Lower neighbor, upper neighbor and fractional weight along one axis
///
/// `len` must be non-zero. For `len == 1` both neighbors are cell 0.
fn neighbors(pos: f32, len: u32) -> (u32, u32, f32) {
    if len < 2 {
        return (0, 0, 0.0);
    }
    let lower = (pos.floor() as u32).min(len - 2);
    (lower, lower + 1, pos - lower as f32)
}
