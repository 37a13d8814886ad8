use crate::lut::char_for_pixel;
use image::RgbaImage;
use rayon::prelude::*;
use std::fmt;

/// A rendered block of ASCII art
///
/// Every row holds exactly `columns` characters and is terminated by `\n`,
/// including the last one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiArt {
    text: String,
    columns: u32,
    rows: u32,
}

impl AsciiArt {
    /// Wrap already formatted text, counting rows and the widest row
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let rows = text.lines().count() as u32;
        let columns = text
            .lines()
            .map(|line| line.chars().count() as u32)
            .max()
            .unwrap_or(0);
        Self { text, columns, rows }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Width of the widest row in characters
    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterate rows without their line breaks
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}

impl fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Map a downsampled grid to ASCII art
///
/// Pixels are visited in row-major order; each one becomes one ramp
/// character and each row ends with a line break.
///
/// # Arguments
/// * `grid` - One pixel per text cell
///
/// # Returns
/// Text with `grid.height()` rows of `grid.width()` characters
pub fn map_grid(grid: &RgbaImage) -> AsciiArt {
    let (width, height) = grid.dimensions();

    // Parallelize row mapping, rows are joined back in order
    let rows: Vec<String> = (0..height)
        .into_par_iter()
        .map(|y| {
            let mut row = String::with_capacity(width as usize + 1);
            for x in 0..width {
                row.push(char_for_pixel(grid.get_pixel(x, y)));
            }
            row.push('\n');
            row
        })
        .collect();

    AsciiArt {
        text: rows.concat(),
        columns: width,
        rows: height,
    }
}
