//! Decoded artwork and rendered character grids.

use image::GenericImageView;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// An RGB image, 3 bytes per pixel in row-major order.
#[derive(Debug, Clone)]
pub struct RgbFrame {
    pub data: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl RgbFrame {
    /// Decode an encoded image (JPEG, PNG, WebP).
    pub fn decode(bytes: &[u8]) -> Result<Self, image::ImageError> {
        let img = image::load_from_memory(bytes)?;
        Ok(Self::from_image(&img))
    }

    pub fn from_image(img: &image::DynamicImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            data: img.to_rgb8().into_raw(),
            width,
            height,
        }
    }
}

/// RGB color for a character cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl CellColor {
    pub fn to_color(self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

/// Rendered art: one character per cell with optional colors.
#[derive(Debug, Clone, Default)]
pub struct ArtFrame {
    /// Character data (row-major order)
    pub chars: Vec<char>,
    /// Foreground color per cell, same length as `chars`
    pub fg: Option<Vec<CellColor>>,
    /// Background color per cell, same length as `chars`
    pub bg: Option<Vec<CellColor>>,
    /// Width in characters
    pub width: u16,
    /// Height in characters
    pub height: u16,
}

impl ArtFrame {
    pub fn from_chars(chars: Vec<char>, width: u16, height: u16) -> Self {
        Self {
            chars,
            fg: None,
            bg: None,
            width,
            height,
        }
    }

    pub fn with_fg(mut self, colors: Vec<CellColor>) -> Self {
        self.fg = Some(colors);
        self
    }

    pub fn with_bg(mut self, colors: Vec<CellColor>) -> Self {
        self.bg = Some(colors);
        self
    }

    /// Styled lines, one per character row.
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        if self.width == 0 || self.height == 0 {
            return Vec::new();
        }

        let width = self.width as usize;
        self.chars
            .chunks(width)
            .enumerate()
            .map(|(row, chars)| {
                let mut spans: Vec<Span<'static>> = Vec::new();
                for (col, &ch) in chars.iter().enumerate() {
                    let idx = row * width + col;
                    let mut style = Style::new();
                    if let Some(fg) = self.fg.as_ref().and_then(|c| c.get(idx)) {
                        style = style.fg(fg.to_color());
                    }
                    if let Some(bg) = self.bg.as_ref().and_then(|c| c.get(idx)) {
                        style = style.bg(bg.to_color());
                    }
                    match spans.last_mut() {
                        Some(last) if last.style == style => last.content.to_mut().push(ch),
                        _ => spans.push(Span::styled(ch.to_string(), style)),
                    }
                }
                Line::from(spans)
            })
            .collect()
    }
}
