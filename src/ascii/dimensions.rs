//! Dimension calculation for aspect-ratio-correct rendering.

/// Terminal characters are typically ~2x taller than wide.
const DEFAULT_CHAR_ASPECT_RATIO: f32 = 2.0;

/// Largest character grid that fits `max_char_width` x `max_char_height`
/// and keeps the image's aspect ratio on screen.
pub fn calculate_dimensions(
    img_width: u32,
    img_height: u32,
    max_char_width: u16,
    max_char_height: u16,
) -> (u16, u16) {
    fit_with_aspect(
        img_width,
        img_height,
        max_char_width,
        max_char_height,
        DEFAULT_CHAR_ASPECT_RATIO,
    )
}

/// Fit for a custom character aspect ratio (cell height / cell width).
fn fit_with_aspect(
    img_width: u32,
    img_height: u32,
    max_char_width: u16,
    max_char_height: u16,
    char_aspect: f32,
) -> (u16, u16) {
    if img_width == 0 || img_height == 0 || max_char_width == 0 || max_char_height == 0 {
        return (0, 0);
    }

    let img_aspect = img_width as f32 / img_height as f32;
    // A square image needs char_aspect times more columns than rows.
    let target_char_aspect = img_aspect * char_aspect;

    let char_width = max_char_width;
    let char_height = (char_width as f32 / target_char_aspect).round() as u16;

    if char_height <= max_char_height {
        // Very wide images still get one row.
        (char_width, char_height.max(1))
    } else {
        let char_height = max_char_height;
        let char_width = (char_height as f32 * target_char_aspect).round() as u16;
        (char_width.clamp(1, max_char_width), char_height)
    }
}
