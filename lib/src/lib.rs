//! asciify - image to monospace ASCII art converter
//!
//! Images are resampled to an 80 column grid and every cell is mapped to a
//! character from a ten step luminance ramp. The result can be exported as
//! plain text, clipboard text or a re-rendered PNG.
//!
//! # Example
//! ```no_run
//! use asciify::{ConverterConfig, convert_image, export};
//! use image;
//!
//! let input = image::open("photo.jpg").unwrap().to_rgba8();
//! let config = ConverterConfig::default();
//! let art = convert_image(&input, &config).unwrap();
//! print!("{art}");
//! export::save_png(&art, &config, "ascii-art.png".as_ref()).unwrap();
//! ```

pub mod ascii;
pub mod config;
pub mod error;
pub mod export;
pub mod glyph;
pub mod lut;
pub mod processor;
pub mod raster;
pub mod session;

// Re-export main types for convenience
pub use ascii::AsciiArt;
pub use config::ConverterConfig;
pub use error::{AsciiError, Result};
pub use processor::{Conversion, convert_bytes, convert_file, convert_image, run_guarded};
pub use session::{ConversionState, Outcome, Session, Ticket};
