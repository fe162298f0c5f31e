//! Character set definitions for artwork rendering.

/// Standard ASCII density ramp (10 levels).
/// Characters ordered from darkest (space) to brightest (@).
/// Works well on dark terminals.
pub const STANDARD_CHARSET: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Block character set (5 levels).
pub const BLOCKS_CHARSET: &[char] = &[' ', '░', '▒', '▓', '█'];

/// Minimal character set (4 levels).
pub const MINIMAL_CHARSET: &[char] = &[' ', '.', ':', '#'];

/// Upper half block; fg paints the top pixel, bg the bottom one.
pub const HALF_BLOCK: char = '▀';

/// How artwork is turned into terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CharSet {
    /// Truecolor half blocks, two image rows per terminal row
    #[default]
    Pixels,
    /// Standard ASCII density ramp (10 levels)
    Standard,
    /// Block character set (5 levels) using Unicode blocks
    Blocks,
    /// Minimal character set (4 levels) for a clean look
    Minimal,
    /// Braille patterns, 2x4 dots per cell
    Braille,
}

impl CharSet {
    /// Density ramp for this charset.
    ///
    /// Pixels and Braille have their own renderers and return an empty slice.
    pub fn chars(&self) -> &'static [char] {
        match self {
            CharSet::Standard => STANDARD_CHARSET,
            CharSet::Blocks => BLOCKS_CHARSET,
            CharSet::Minimal => MINIMAL_CHARSET,
            CharSet::Pixels | CharSet::Braille => &[],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CharSet::Pixels => "pixels",
            CharSet::Standard => "standard",
            CharSet::Blocks => "blocks",
            CharSet::Minimal => "minimal",
            CharSet::Braille => "braille",
        }
    }

    /// Parse a name as written in the config file.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "pixels" => Some(CharSet::Pixels),
            "standard" => Some(CharSet::Standard),
            "blocks" => Some(CharSet::Blocks),
            "minimal" => Some(CharSet::Minimal),
            "braille" => Some(CharSet::Braille),
            _ => None,
        }
    }

    pub fn is_braille(&self) -> bool {
        matches!(self, CharSet::Braille)
    }
}
