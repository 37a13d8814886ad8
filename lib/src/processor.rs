use crate::ascii::{AsciiArt, map_grid};
use crate::config::ConverterConfig;
use crate::error::{AsciiError, Result};
use crate::raster::downsample;
use image::RgbaImage;
use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::path::Path;

/// The committed result of one conversion request
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Decoded source image, kept for preview
    pub source: RgbaImage,
    /// Text rendering of the source
    pub art: AsciiArt,
}

/// Converts an image to ASCII art
///
/// Pipeline:
/// 1. Validate dimensions and compute the grid size
/// 2. Resample to one pixel per text cell
/// 3. Map each pixel to a ramp character by luminance
///
/// # Arguments
/// * `input` - The source image
/// * `config` - Configuration for the conversion
///
/// # Errors
/// Fails on an invalid config or a degenerate image, before any grid is
/// allocated.
pub fn convert_image(input: &RgbaImage, config: &ConverterConfig) -> Result<AsciiArt> {
    config.validate()?;

    let grid = downsample(input, config)?;
    Ok(map_grid(&grid))
}

/// Decode an encoded image (format guessed from its contents) and convert it
pub fn convert_bytes(bytes: &[u8], config: &ConverterConfig) -> Result<Conversion> {
    let source = image::load_from_memory(bytes)?.to_rgba8();
    let art = convert_image(&source, config)?;
    Ok(Conversion { source, art })
}

/// Read, decode and convert an image file
pub fn convert_file(path: &Path, config: &ConverterConfig) -> Result<Conversion> {
    let bytes = std::fs::read(path)?;
    log::debug!("read {} bytes from {}", bytes.len(), path.display());
    convert_bytes(&bytes, config)
}

/// Run a conversion job, turning a panic (e.g. inside a decoder) into
/// `AsciiError::Panicked` so worker threads report it like any other failure
pub fn run_guarded<T>(job: impl FnOnce() -> Result<T>) -> Result<T> {
    catch_unwind(AssertUnwindSafe(job))
        .unwrap_or_else(|payload| Err(AsciiError::Panicked(panic_message(payload.as_ref()))))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
