//! Show artwork as terminal art.
//!
//! Pipeline for a decoded image:
//!
//! 1. **Sizing** - fit the image into the requested character box, keeping
//!    its aspect ratio on ~2:1 terminal cells
//! 2. **Pixels** - truecolor half blocks, two image rows per cell, or
//! 3. **Ramps** - grayscale (BT.601), area-average downsampling and a
//!    brightness-to-character ramp, tinted with the cell color when color is on
//! 4. **Braille** - thresholded 2x4 dot patterns
//!
//! # Character Sets
//!
//! See [`CharSet`]: `pixels` (default), `standard`, `blocks`, `minimal` and
//! `braille`. Without color, `pixels` falls back to the `blocks` ramp.

pub mod braille;
mod charset;
mod dimensions;
mod downsample;
mod frame;
mod grayscale;
mod halfblock;
mod mapping;

pub use charset::{CharSet, BLOCKS_CHARSET, HALF_BLOCK, MINIMAL_CHARSET, STANDARD_CHARSET};
pub use dimensions::calculate_dimensions;
pub use downsample::{downsample, downsample_colors};
pub use frame::{ArtFrame, CellColor, RgbFrame};
pub use grayscale::{luminance, mean_brightness, to_grayscale};
pub use mapping::{gamma_correct, map_to_chars_dithered, map_to_chars_gamma};

pub use braille::render as render_braille;
pub use halfblock::render as render_half_blocks;

/// Default art box width in characters.
pub const DEFAULT_ART_WIDTH: u16 = 80;

/// Default art box height in characters.
pub const DEFAULT_ART_HEIGHT: u16 = 40;

/// How a piece of artwork should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtOptions {
    /// Maximum width in characters
    pub width: u16,
    /// Maximum height in characters
    pub height: u16,
    pub charset: CharSet,
    /// Emit colors (truecolor cells or tinted ramps)
    pub color: bool,
    /// Invert brightness for light terminal backgrounds
    pub invert: bool,
    /// Floyd-Steinberg dithering for ramp charsets
    pub dither: bool,
}

impl Default for ArtOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_ART_WIDTH,
            height: DEFAULT_ART_HEIGHT,
            charset: CharSet::default(),
            color: true,
            invert: false,
            dither: false,
        }
    }
}

/// Render a decoded image according to `options`.
pub fn render_art(frame: &RgbFrame, options: &ArtOptions) -> ArtFrame {
    let (char_width, char_height) =
        calculate_dimensions(frame.width, frame.height, options.width, options.height);
    if char_width == 0 || char_height == 0 {
        return ArtFrame::default();
    }

    let charset = match options.charset {
        CharSet::Pixels if options.color => {
            return render_half_blocks(frame, char_width, char_height);
        }
        CharSet::Pixels => CharSet::Blocks,
        other => other,
    };

    let gray = to_grayscale(frame);
    let chars = if charset.is_braille() {
        let threshold = mean_brightness(&gray);
        render_braille(
            &gray,
            frame.width,
            frame.height,
            char_width,
            char_height,
            threshold,
            options.invert,
        )
    } else {
        let brightness = downsample(&gray, frame.width, frame.height, char_width, char_height);
        if options.dither {
            map_to_chars_dithered(
                &brightness,
                char_width,
                char_height,
                charset.chars(),
                options.invert,
            )
        } else {
            map_to_chars_gamma(&brightness, charset.chars(), options.invert)
        }
    };

    let art = ArtFrame::from_chars(chars, char_width, char_height);
    if options.color {
        art.with_fg(downsample_colors(frame, char_width, char_height))
    } else {
        art
    }
}
