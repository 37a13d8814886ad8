//! Character ramp and luminance lookup
//!
//! Every pixel is reduced to a perceptual luma and bucketed into one of the
//! ten ramp characters below.

use image::Rgba;

/// Fill characters ordered by luminance
///
/// 10 levels from darkest (@) to lightest (space)
pub const RAMP: [char; 10] = [
    '@', // 0: darkest
    '%', // 1
    '#', // 2
    '*', // 3
    '+', // 4
    '=', // 5
    '-', // 6
    ':', // 7
    '.', // 8
    ' ', // 9: lightest
];

/// Scale applied to the luma weights so they stay integral
const WEIGHT_SCALE: u32 = 100;

/// Maximum value returned by [`luminance`]
pub const MAX_LUMA: u32 = 255 * WEIGHT_SCALE;

/// Perceptual luma of an RGB triple, scaled by 100
///
/// Formula: L = 0.30*R + 0.59*G + 0.11*B
///
/// # Returns
/// Luma in `0..=MAX_LUMA`
pub fn luminance(r: u8, g: u8, b: u8) -> u32 {
    30 * r as u32 + 59 * g as u32 + 11 * b as u32
}

/// Ramp index for a scaled luma value
///
/// Equivalent to `floor((L / 255) * (RAMP.len() - 1))`, computed without
/// floating point so pure white lands exactly on the last bucket.
pub fn ramp_index(luma: u32) -> usize {
    let last = RAMP.len() - 1;
    let index = (luma.min(MAX_LUMA) as u64 * last as u64 / MAX_LUMA as u64) as usize;
    index.min(last)
}

/// Get the ramp character for a pixel sample (alpha is ignored)
pub fn char_for_pixel(pixel: &Rgba<u8>) -> char {
    let [r, g, b, _] = pixel.0;
    RAMP[ramp_index(luminance(r, g, b))]
}
