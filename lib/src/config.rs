use crate::error::{AsciiError, Result};
use image::imageops::FilterType;

/// Configuration for ASCII art conversion and export
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Grid
    pub width: u32,              // columns of text, default 80
    pub cell_aspect: f64,        // glyph width/height compensation, default 0.5
    pub max_rows: u32,           // taller grids are rejected, default 2000
    pub resize_filter: FilterType,

    /// Image export
    pub font_size: u32,          // px, default 8
    pub line_height_factor: f32, // line height = font_size * factor, default 1.2

    /// Behavior
    pub preserve_spacing_on_copy: bool, // swap spaces for NBSP on copy, default true
    pub enable_image_export: bool,      // default true
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            // Grid
            width: 80,
            cell_aspect: 0.5,
            max_rows: 2000,
            resize_filter: FilterType::Triangle,

            // Image export
            font_size: 8,
            line_height_factor: 1.2,

            // Behavior
            preserve_spacing_on_copy: true,
            enable_image_export: true,
        }
    }
}

impl ConverterConfig {
    /// Line height in pixels used by the PNG exporter
    pub fn line_height(&self) -> f32 {
        self.font_size as f32 * self.line_height_factor
    }

    /// Validates the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.width < 1 || self.width > 1000 {
            return Err(AsciiError::InvalidConfig(format!(
                "width must be between 1 and 1000, got {}",
                self.width
            )));
        }
        if !(self.cell_aspect > 0.0 && self.cell_aspect <= 4.0) {
            return Err(AsciiError::InvalidConfig(format!(
                "cell_aspect must be in (0.0, 4.0], got {}",
                self.cell_aspect
            )));
        }
        if self.max_rows < 1 || self.max_rows > 100_000 {
            return Err(AsciiError::InvalidConfig(format!(
                "max_rows must be between 1 and 100000, got {}",
                self.max_rows
            )));
        }
        if self.font_size < 1 || self.font_size > 128 {
            return Err(AsciiError::InvalidConfig(format!(
                "font_size must be between 1 and 128, got {}",
                self.font_size
            )));
        }
        if !(1.0..=4.0).contains(&self.line_height_factor) {
            return Err(AsciiError::InvalidConfig(format!(
                "line_height_factor must be between 1.0 and 4.0, got {}",
                self.line_height_factor
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ConverterConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.width, 80);
        assert!(config.preserve_spacing_on_copy);
        assert!(config.enable_image_export);
    }

    #[test]
    fn test_default_line_height() {
        let config = ConverterConfig::default();
        assert!((config.line_height() - 9.6).abs() < 1e-4);
    }

    #[test]
    fn test_invalid_width() {
        let mut config = ConverterConfig::default();
        config.width = 0;
        assert!(matches!(config.validate(), Err(AsciiError::InvalidConfig(_))));

        config.width = 1001;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_cell_aspect() {
        let mut config = ConverterConfig::default();
        config.cell_aspect = 0.0;
        assert!(config.validate().is_err());

        config.cell_aspect = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_max_rows() {
        let mut config = ConverterConfig::default();
        config.max_rows = 0;
        assert!(config.validate().is_err());

        config.max_rows = 100_001;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_font_metrics() {
        let mut config = ConverterConfig::default();
        config.font_size = 0;
        assert!(config.validate().is_err());

        let mut config = ConverterConfig::default();
        config.line_height_factor = 0.5;
        assert!(config.validate().is_err());
    }
}
