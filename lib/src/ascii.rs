use image::GrayImage;

use crate::lut::density_char;

/// Map a luminance grid to text
///
/// One glyph per cell, each row terminated by `'\n'`. The result has
/// `width * height + height` characters.
pub fn map_to_text(grid: &GrayImage) -> String {
    let (width, height) = grid.dimensions();
    let mut output = String::with_capacity((width as usize + 1) * height as usize);

    for row in grid.rows() {
        output.extend(row.map(|pixel| density_char(pixel[0])));
        output.push('\n');
    }

    output
}
