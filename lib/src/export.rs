use crate::ascii::AsciiArt;
use crate::config::ConverterConfig;
use crate::error::{AsciiError, Result};
use crate::glyph::covers_scaled;
use image::{ImageFormat, Rgba, RgbaImage};
use std::path::Path;

/// Default file name for the text export
pub const TEXT_FILE_NAME: &str = "ascii-art.txt";

/// Default file name for the image export
pub const IMAGE_FILE_NAME: &str = "ascii-art.png";

const NBSP: &str = "\u{00A0}";

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const INK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Text to place on the clipboard
///
/// With `preserve_spacing` every ordinary space becomes a non-breaking space
/// so targets that collapse whitespace keep the columns aligned.
pub fn clipboard_payload(art: &AsciiArt, preserve_spacing: bool) -> String {
    if preserve_spacing {
        art.as_str().replace(' ', NBSP)
    } else {
        art.as_str().to_owned()
    }
}

/// Write the art verbatim as UTF-8 text
pub fn save_text(art: &AsciiArt, path: &Path) -> Result<()> {
    if art.is_empty() {
        return Err(AsciiError::EmptyArt);
    }
    std::fs::write(path, art.as_str())?;
    log::info!("saved {} rows of text to {}", art.rows(), path.display());
    Ok(())
}

/// Render the art back into a bitmap
///
/// Black glyphs on a white canvas of `columns * font_size` by
/// `floor(rows * line_height)` pixels. Row `i` sits on the baseline
/// `(i + 1) * line_height`.
///
/// # Arguments
/// * `art` - The text to draw
/// * `config` - Font size and line height factor
///
/// # Returns
/// RGBA image with the rendered text
pub fn render_png(art: &AsciiArt, config: &ConverterConfig) -> Result<RgbaImage> {
    config.validate()?;
    if art.is_empty() || art.columns() == 0 {
        return Err(AsciiError::EmptyArt);
    }

    let font_size = config.font_size;
    let line_height = config.line_height();
    let width = art.columns() * font_size;
    let height = (art.rows() as f32 * line_height).floor() as u32;

    let mut output = RgbaImage::from_pixel(width, height, BACKGROUND);

    for (row, line) in art.lines().enumerate() {
        let baseline = (row + 1) as f32 * line_height;
        let top = (baseline - font_size as f32).floor() as i64;

        for (column, ch) in line.chars().enumerate() {
            let left = column as u32 * font_size;

            for local_y in 0..font_size {
                let py = top + local_y as i64;
                if py < 0 || py >= height as i64 {
                    continue;
                }
                for local_x in 0..font_size {
                    if covers_scaled(ch, local_x, local_y, font_size) {
                        output.put_pixel(left + local_x, py as u32, INK);
                    }
                }
            }
        }
    }

    Ok(output)
}

/// Render the art and save it as a PNG file
///
/// # Errors
/// * `ImageExportDisabled` when `config.enable_image_export` is false
pub fn save_png(art: &AsciiArt, config: &ConverterConfig, path: &Path) -> Result<()> {
    if !config.enable_image_export {
        return Err(AsciiError::ImageExportDisabled);
    }
    let image = render_png(art, config)?;
    image.save_with_format(path, ImageFormat::Png)?;
    log::info!(
        "saved {}x{} image to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}
