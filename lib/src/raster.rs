use crate::config::ConverterConfig;
use crate::error::{AsciiError, Result};
use image::{RgbaImage, imageops};

/// Compute the downsampled grid size for a source image
///
/// Width is fixed by `config.width`. Height follows the source aspect ratio,
/// squashed by `config.cell_aspect` because glyph cells are taller than wide:
/// `floor((src_height / src_width) * width * cell_aspect)`
///
/// # Errors
/// * `ZeroDimension` if either source dimension is 0
/// * `EmptyGrid` if the computed height rounds down to 0 rows
/// * `GridTooLarge` if it exceeds `config.max_rows`
pub fn grid_dimensions(
    src_width: u32,
    src_height: u32,
    config: &ConverterConfig,
) -> Result<(u32, u32)> {
    if src_width == 0 || src_height == 0 {
        return Err(AsciiError::ZeroDimension {
            width: src_width,
            height: src_height,
        });
    }

    let aspect = src_height as f64 / src_width as f64;
    // Saturates for absurd aspect ratios, caught by the limit below
    let rows = (aspect * config.width as f64 * config.cell_aspect).floor() as u64;

    if rows == 0 {
        return Err(AsciiError::EmptyGrid {
            width: src_width,
            height: src_height,
        });
    }

    let too_large = || AsciiError::GridTooLarge {
        width: src_width,
        height: src_height,
        rows,
        max_rows: config.max_rows,
    };
    let rows = u32::try_from(rows).map_err(|_| too_large())?;
    if rows > config.max_rows {
        return Err(too_large());
    }

    Ok((config.width, rows))
}

/// Resample the source image into exactly one pixel per text cell
///
/// # Arguments
/// * `input` - The decoded source image
/// * `config` - Grid width, aspect compensation and resize filter
///
/// # Returns
/// An image of `grid_dimensions(..)` pixels
pub fn downsample(input: &RgbaImage, config: &ConverterConfig) -> Result<RgbaImage> {
    let (width, height) = input.dimensions();
    let (columns, rows) = grid_dimensions(width, height, config)?;

    log::debug!(
        "downsampling {}x{} to {}x{} grid ({:?})",
        width,
        height,
        columns,
        rows,
        config.resize_filter
    );

    Ok(imageops::resize(input, columns, rows, config.resize_filter))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use image::imageops::FilterType;

    #[test]
    fn test_grid_dimensions_landscape() {
        let config = ConverterConfig::default();
        assert_eq!(grid_dimensions(80, 40, &config).unwrap(), (80, 20));
    }

    #[test]
    fn test_grid_dimensions_two_by_one() {
        let config = ConverterConfig::default();
        // floor((1 / 2) * 80 * 0.5) = 20
        assert_eq!(grid_dimensions(2, 1, &config).unwrap(), (80, 20));
    }

    #[test]
    fn test_grid_dimensions_rounds_down() {
        let config = ConverterConfig::default();
        // (100 / 300) * 40 = 13.33
        assert_eq!(grid_dimensions(300, 100, &config).unwrap(), (80, 13));
        // (1000 / 640) * 40 = 62.5
        assert_eq!(grid_dimensions(640, 1000, &config).unwrap(), (80, 62));
    }

    #[test]
    fn test_grid_dimensions_custom_width() {
        let config = ConverterConfig {
            width: 40,
            cell_aspect: 1.0,
            ..Default::default()
        };
        assert_eq!(grid_dimensions(100, 100, &config).unwrap(), (40, 40));
    }

    #[test]
    fn test_zero_width_rejected() {
        let config = ConverterConfig::default();
        let err = grid_dimensions(0, 10, &config).unwrap_err();
        assert!(matches!(err, AsciiError::ZeroDimension { width: 0, height: 10 }));
    }

    #[test]
    fn test_zero_height_rejected() {
        let config = ConverterConfig::default();
        assert!(matches!(
            grid_dimensions(10, 0, &config),
            Err(AsciiError::ZeroDimension { .. })
        ));
    }

    #[test]
    fn test_very_wide_image_rejected() {
        let config = ConverterConfig::default();
        // (1 / 100) * 40 = 0.4
        assert!(matches!(
            grid_dimensions(100, 1, &config),
            Err(AsciiError::EmptyGrid { .. })
        ));
    }

    #[test]
    fn test_very_tall_image_rejected() {
        let config = ConverterConfig::default();
        // (100000 / 1) * 40 = 4000000 rows
        let err = grid_dimensions(1, 100_000, &config).unwrap_err();
        assert!(matches!(
            err,
            AsciiError::GridTooLarge {
                rows: 4_000_000,
                max_rows: 2000,
                ..
            }
        ));
    }

    #[test]
    fn test_row_count_beyond_u32_rejected() {
        let config = ConverterConfig {
            width: 1000,
            cell_aspect: 4.0,
            max_rows: 100_000,
            ..Default::default()
        };
        let err = grid_dimensions(1, u32::MAX, &config).unwrap_err();
        match err {
            AsciiError::GridTooLarge { rows, .. } => assert!(rows > u32::MAX as u64),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_row_limit_is_inclusive() {
        let config = ConverterConfig {
            max_rows: 20,
            ..Default::default()
        };
        assert_eq!(grid_dimensions(80, 40, &config).unwrap(), (80, 20));
        assert!(matches!(
            grid_dimensions(80, 42, &config),
            Err(AsciiError::GridTooLarge { rows: 21, .. })
        ));
    }

    #[test]
    fn test_downsample_too_tall_allocates_nothing() {
        let img = RgbaImage::new(1, 100_000);
        assert!(matches!(
            downsample(&img, &ConverterConfig::default()),
            Err(AsciiError::GridTooLarge { .. })
        ));
    }

    #[test]
    fn test_downsample_dimensions() {
        let img = RgbaImage::from_pixel(160, 120, Rgba([10, 20, 30, 255]));
        let config = ConverterConfig::default();
        let grid = downsample(&img, &config).unwrap();
        assert_eq!(grid.dimensions(), (80, 30));
    }

    #[test]
    fn test_downsample_preserves_uniform_color() {
        let img = RgbaImage::from_pixel(37, 91, Rgba([0, 0, 0, 255]));
        let config = ConverterConfig {
            resize_filter: FilterType::Nearest,
            ..Default::default()
        };
        let grid = downsample(&img, &config).unwrap();
        assert!(grid.pixels().all(|p| p.0 == [0, 0, 0, 255]));
    }

    #[test]
    fn test_downsample_empty_image() {
        let img = RgbaImage::new(0, 0);
        let config = ConverterConfig::default();
        assert!(matches!(
            downsample(&img, &config),
            Err(AsciiError::ZeroDimension { .. })
        ));
    }
}
