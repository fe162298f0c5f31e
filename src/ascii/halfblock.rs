//! Truecolor "pixel" rendering with upper half blocks.
//!
//! Every terminal cell shows two vertically stacked pixels: the foreground
//! color paints the top half (`▀`), the background the bottom half. With the
//! usual 2:1 cell aspect this gives square pixels.

use super::charset::HALF_BLOCK;
use super::downsample::downsample_colors;
use super::frame::{ArtFrame, RgbFrame};

/// Render `frame` into a `char_width` x `char_height` grid of half blocks.
pub fn render(frame: &RgbFrame, char_width: u16, char_height: u16) -> ArtFrame {
    if char_width == 0 || char_height == 0 {
        return ArtFrame::default();
    }

    let pixel_rows = char_height.saturating_mul(2);
    let colors = downsample_colors(frame, char_width, pixel_rows);
    if colors.is_empty() {
        return ArtFrame::default();
    }

    let width = char_width as usize;
    let cells = width * char_height as usize;
    let mut top = Vec::with_capacity(cells);
    let mut bottom = Vec::with_capacity(cells);
    for pair in colors.chunks(width * 2) {
        let (upper, lower) = pair.split_at(width);
        top.extend_from_slice(upper);
        bottom.extend_from_slice(lower);
    }

    ArtFrame::from_chars(vec![HALF_BLOCK; cells], char_width, char_height)
        .with_fg(top)
        .with_bg(bottom)
}
