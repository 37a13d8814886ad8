use thiserror::Error;

/// Errors produced while converting or exporting ASCII art
#[derive(Error, Debug)]
pub enum AsciiError {
    #[error("image has a zero dimension ({width}x{height})")]
    ZeroDimension { width: u32, height: u32 },

    #[error("image {width}x{height} is too wide to produce a single row of text")]
    EmptyGrid { width: u32, height: u32 },

    #[error("image {width}x{height} needs {rows} rows of text, the limit is {max_rows}")]
    GridTooLarge {
        width: u32,
        height: u32,
        rows: u64,
        max_rows: u32,
    },

    #[error("conversion panicked: {0}")]
    Panicked(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("there is no ASCII art to export")]
    EmptyArt,

    #[error("image export is disabled")]
    ImageExportDisabled,

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AsciiError>;
