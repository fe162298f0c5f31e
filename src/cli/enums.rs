//! CLI enum types for show art options.

use clap::ValueEnum;

use crate::ascii;

/// Character set for show art.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ArtCharset {
    /// Truecolor half blocks
    #[default]
    Pixels,
    Standard,
    Blocks,
    Minimal,
    Braille,
}

impl From<ArtCharset> for ascii::CharSet {
    fn from(c: ArtCharset) -> Self {
        match c {
            ArtCharset::Pixels => ascii::CharSet::Pixels,
            ArtCharset::Standard => ascii::CharSet::Standard,
            ArtCharset::Blocks => ascii::CharSet::Blocks,
            ArtCharset::Minimal => ascii::CharSet::Minimal,
            ArtCharset::Braille => ascii::CharSet::Braille,
        }
    }
}
