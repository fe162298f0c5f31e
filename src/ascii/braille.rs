//! Braille rendering: each character is a 2x4 dot matrix, giving 8
//! subpixels per terminal cell.

/// Braille base character (U+2800, empty braille pattern).
pub const BRAILLE_BASE: char = '\u{2800}';

/// Dot bit for `[column][row]` in a braille cell.
const DOT_BITS: [[u8; 4]; 2] = [[0x01, 0x02, 0x04, 0x40], [0x08, 0x10, 0x20, 0x80]];

/// Convert a 2x4 grid (`grid[x][y]`) to its braille character.
pub fn grid_to_braille(grid: [[bool; 4]; 2]) -> char {
    let mut code = 0u32;
    for (x, column) in grid.iter().enumerate() {
        for (y, &on) in column.iter().enumerate() {
            if on {
                code |= DOT_BITS[x][y] as u32;
            }
        }
    }
    char::from_u32(BRAILLE_BASE as u32 + code).unwrap_or(BRAILLE_BASE)
}

/// Render grayscale pixels as braille; pixels at or above `threshold` are dots.
pub fn render(
    gray: &[u8],
    img_width: u32,
    img_height: u32,
    char_width: u16,
    char_height: u16,
    threshold: u8,
    invert: bool,
) -> Vec<char> {
    if char_width == 0 || char_height == 0 || img_width == 0 || img_height == 0 || gray.is_empty() {
        return Vec::new();
    }

    let scale_x = img_width as f32 / (char_width as u32 * 2) as f32;
    let scale_y = img_height as f32 / (char_height as u32 * 4) as f32;

    let mut result = Vec::with_capacity(char_width as usize * char_height as usize);
    for cy in 0..char_height as u32 {
        for cx in 0..char_width as u32 {
            let mut grid = [[false; 4]; 2];
            for dy in 0..4u32 {
                for dx in 0..2u32 {
                    let src_x = ((cx * 2 + dx) as f32 * scale_x) as u32;
                    let src_y = ((cy * 4 + dy) as f32 * scale_y) as u32;
                    if src_x >= img_width || src_y >= img_height {
                        continue;
                    }
                    if let Some(&g) = gray.get((src_y * img_width + src_x) as usize) {
                        let brightness = if invert { 255 - g } else { g };
                        grid[dx as usize][dy as usize] = brightness >= threshold;
                    }
                }
            }
            result.push(grid_to_braille(grid));
        }
    }
    result
}
