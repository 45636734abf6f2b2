/// Basic example: Render a synthetic test image as ASCII art
///
/// This creates a test image with some basic shapes and prints it sized to the terminal
use ascii_fit::{AsciiConfig, process_pixels, terminal};
use image::{Rgba, RgbaImage};

fn main() {
    println!("ASCII Fit - Basic Example");
    println!("=========================\n");

    let width = 320;
    let height = 160;
    let mut img = RgbaImage::new(width, height);

    // Horizontal gradient background
    for y in 0..height {
        for x in 0..width {
            let v = (x * 160 / width) as u8;
            img.put_pixel(x, y, Rgba([v, v, v, 255]));
        }
    }

    // Bright circle in the center
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 50.0;

    for y in 0..height {
        for x in 0..width {
            let dx = x as f32 - center_x;
            let dy = y as f32 - center_y;
            let dist = (dx * dx + dy * dy).sqrt();

            if dist < radius {
                img.put_pixel(x, y, Rgba([255, 255, 255, 255]));
            } else if (dist - radius).abs() < 5.0 {
                img.put_pixel(x, y, Rgba([0, 0, 0, 255]));
            }
        }
    }

    println!("Created test image: {}x{}", width, height);

    let config = AsciiConfig::default();
    let console = terminal::console_size_or(config.fallback_size);
    println!("Console size: {}x{}\n", console.width, console.height);

    let text = process_pixels(img.as_raw(), width, height, console, &config)
        .expect("Failed to render test image");
    print!("{text}");
}
