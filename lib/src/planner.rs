//! Scale planning: how to shrink an image to fit the console
//!
//! Large images are first halved repeatedly, then finished with one uniform
//! resize that preserves the aspect ratio. Shrinking in coarse steps keeps a
//! single huge interpolation from skipping most of the source pixels.

use image::GrayImage;

use crate::error::{AsciiError, Result};
use crate::resample::bilinear_resize;
use crate::terminal::ConsoleSize;

/// Ordered resize steps for one image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalePlan {
    /// Dimensions after each halving step, in order
    pub halvings: Vec<(u32, u32)>,
    /// Final dimensions, or `None` when the last halving (or the source) already fits
    pub finish: Option<(u32, u32)>,
}

impl ScalePlan {
    /// Every resize target, halvings first
    pub fn steps(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.halvings.iter().copied().chain(self.finish)
    }

    /// Dimensions of the grid after the whole plan has run
    pub fn output_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        self.steps().last().unwrap_or((width, height))
    }
}

/// Work out the resize steps for a `width x height` source
///
/// # Arguments
/// * `width`, `height` - Source dimensions, both non-zero
/// * `console` - Target console size, both dimensions non-zero
/// * `allow_upscale` - When false the finishing scale is clamped to at least
///   1.0 so small images are never enlarged
pub fn plan_scale(
    width: u32,
    height: u32,
    console: ConsoleSize,
    allow_upscale: bool,
) -> Result<ScalePlan> {
    if width == 0 || height == 0 {
        return Err(AsciiError::UnsupportedDimensions { width, height });
    }
    if console.width == 0 || console.height == 0 {
        return Err(AsciiError::UnsupportedDimensions {
            width: console.width,
            height: console.height,
        });
    }

    let (mut w, mut h) = (width, height);
    let mut halvings = Vec::new();

    // Halving stops before either axis drops below 2 cells.
    while (w / 2 >= console.width || h / 2 >= console.height) && w / 2 >= 2 && h / 2 >= 2 {
        w /= 2;
        h /= 2;
        halvings.push((w, h));
    }

    let mut scale = f32::max(
        w as f32 / console.width as f32,
        h as f32 / console.height as f32,
    );
    if !allow_upscale {
        scale = scale.max(1.0);
    }

    let finish_width = ((w as f32 / scale) as u32).max(1);
    let finish_height = ((h as f32 / scale) as u32).max(1);
    let finish = ((finish_width, finish_height) != (w, h)).then_some((finish_width, finish_height));

    Ok(ScalePlan { halvings, finish })
}

/// Resize a luminance grid so it fits inside the console
///
/// Runs [`plan_scale`] and feeds every step through [`bilinear_resize`]. Each
/// step consumes the previous grid.
pub fn fit_to_console(
    grid: GrayImage,
    console: ConsoleSize,
    allow_upscale: bool,
) -> Result<GrayImage> {
    let (width, height) = grid.dimensions();
    let plan = plan_scale(width, height, console, allow_upscale)?;

    log::debug!(
        "fitting {}x{} into {}x{}: {} halving step(s), finish {:?}",
        width,
        height,
        console.width,
        console.height,
        plan.halvings.len(),
        plan.finish
    );

    let mut grid = grid;
    for (w, h) in plan.steps() {
        grid = bilinear_resize(&grid, w, h)?;
        log::trace!("resized to {}x{}", w, h);
    }

    Ok(grid)
}
