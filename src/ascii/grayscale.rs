//! RGB to grayscale conversion using ITU-R BT.601 luminance formula.

use super::frame::RgbFrame;

/// Convert an RGB frame to grayscale (one byte per pixel).
///
/// Y = 0.299*R + 0.587*G + 0.114*B, computed with coefficients scaled by 1000.
pub fn to_grayscale(frame: &RgbFrame) -> Vec<u8> {
    let pixel_count = (frame.width * frame.height) as usize;
    let mut gray = Vec::with_capacity(pixel_count);

    for rgb in frame.data.chunks_exact(3) {
        gray.push(luminance(rgb[0], rgb[1], rgb[2]));
    }

    gray
}

#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> u8 {
    ((299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000) as u8
}

/// Mean brightness, used as the braille dot threshold.
pub fn mean_brightness(gray: &[u8]) -> u8 {
    if gray.is_empty() {
        return 128;
    }
    let sum: u64 = gray.iter().map(|&g| g as u64).sum();
    (sum / gray.len() as u64) as u8
}
