//! Area-averaging from image pixels down to a cell grid.

use super::frame::{CellColor, RgbFrame};

/// Pixel bounds `[start, end)` covered by cell `index` of `cells` across `pixels`.
fn cell_span(index: u16, cells: u16, pixels: u32) -> (u32, u32) {
    let size = pixels as f32 / cells as f32;
    let start = (index as f32 * size) as u32;
    let end = (((index + 1) as f32 * size) as u32).min(pixels);
    // Upscaling leaves cells narrower than a pixel; sample the nearest one.
    if end <= start {
        let start = start.min(pixels - 1);
        (start, start + 1)
    } else {
        (start, end)
    }
}

/// Average brightness per cell.
///
/// Returns `char_width * char_height` values in row-major order, or an empty
/// vector when any dimension is zero.
pub fn downsample(
    gray: &[u8],
    img_width: u32,
    img_height: u32,
    char_width: u16,
    char_height: u16,
) -> Vec<u8> {
    if char_width == 0 || char_height == 0 || img_width == 0 || img_height == 0 || gray.is_empty() {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(char_width as usize * char_height as usize);
    for cy in 0..char_height {
        let (start_y, end_y) = cell_span(cy, char_height, img_height);
        for cx in 0..char_width {
            let (start_x, end_x) = cell_span(cx, char_width, img_width);

            let mut sum = 0u32;
            let mut count = 0u32;
            for py in start_y..end_y {
                for px in start_x..end_x {
                    if let Some(&g) = gray.get((py * img_width + px) as usize) {
                        sum += g as u32;
                        count += 1;
                    }
                }
            }
            result.push(if count > 0 { (sum / count) as u8 } else { 0 });
        }
    }
    result
}

/// Average color per cell.
pub fn downsample_colors(frame: &RgbFrame, char_width: u16, char_height: u16) -> Vec<CellColor> {
    let (img_width, img_height) = (frame.width, frame.height);
    if char_width == 0
        || char_height == 0
        || img_width == 0
        || img_height == 0
        || frame.data.is_empty()
    {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(char_width as usize * char_height as usize);
    for cy in 0..char_height {
        let (start_y, end_y) = cell_span(cy, char_height, img_height);
        for cx in 0..char_width {
            let (start_x, end_x) = cell_span(cx, char_width, img_width);

            let (mut r, mut g, mut b, mut count) = (0u32, 0u32, 0u32, 0u32);
            for py in start_y..end_y {
                for px in start_x..end_x {
                    let idx = ((py * img_width + px) * 3) as usize;
                    if let Some(rgb) = frame.data.get(idx..idx + 3) {
                        r += rgb[0] as u32;
                        g += rgb[1] as u32;
                        b += rgb[2] as u32;
                        count += 1;
                    }
                }
            }

            result.push(if count > 0 {
                CellColor {
                    r: (r / count) as u8,
                    g: (g / count) as u8,
                    b: (b / count) as u8,
                }
            } else {
                CellColor::default()
            });
        }
    }
    result
}
