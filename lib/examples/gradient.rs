/// Gradient example: convert a synthetic image and write both exports
///
/// Builds a horizontal gray ramp with a dark circle on top, prints the
/// ASCII art and saves ascii-art.txt and ascii-art.png.
use asciify::export::{IMAGE_FILE_NAME, TEXT_FILE_NAME, save_png, save_text};
use asciify::{ConverterConfig, convert_image};
use image::{Rgba, RgbaImage};
use std::path::Path;

fn main() -> asciify::Result<()> {
    println!("asciify - Gradient Example");
    println!("==========================\n");

    let width = 320;
    let height = 240;
    let center_x = width as f32 / 2.0;
    let center_y = height as f32 / 2.0;
    let radius = 60.0;

    let img = RgbaImage::from_fn(width, height, |x, y| {
        let dx = x as f32 - center_x;
        let dy = y as f32 - center_y;
        if (dx * dx + dy * dy).sqrt() < radius {
            Rgba([20, 20, 20, 255])
        } else {
            let v = (x * 255 / (width - 1)) as u8;
            Rgba([v, v, v, 255])
        }
    });

    println!("Created test image: {}x{}", width, height);

    let config = ConverterConfig::default();
    let art = convert_image(&img, &config)?;

    println!("Grid: {} columns x {} rows\n", art.columns(), art.rows());
    print!("{art}");

    save_text(&art, Path::new(TEXT_FILE_NAME))?;
    save_png(&art, &config, Path::new(IMAGE_FILE_NAME))?;

    println!("\n✓ Saved text to:  {}", TEXT_FILE_NAME);
    println!("✓ Saved image to: {}", IMAGE_FILE_NAME);
    Ok(())
}
