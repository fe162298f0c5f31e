//! Rounded, titled panels stacked from text sections.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Widget};

use super::render::{to_cells, wrapped, wrapped_height};
use super::theme::palette;

/// Border, padding and title of a panel.
pub fn panel_block(title: &str, border: Style) -> Block<'static> {
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(border)
        .padding(Padding::horizontal(1));
    if title.is_empty() {
        block
    } else {
        block
            .title(format!(" {} ", title))
            .title_alignment(Alignment::Center)
    }
}

/// A one-row horizontal rule with `title` centered in it.
pub fn rule(title: &str, style: Style) -> Block<'static> {
    Block::new()
        .borders(Borders::TOP)
        .border_style(style)
        .title(format!(" {} ", title))
        .title_style(style)
        .title_alignment(Alignment::Center)
}

enum Section {
    /// Word-wrapped to the panel width.
    Wrapped(Text<'static>),
    /// Shown as is and clipped, for pre-sized content like artwork.
    Fixed(Text<'static>),
    Rule { title: String, style: Style },
}

impl Section {
    fn height(&self, width: u16) -> u16 {
        match self {
            Section::Wrapped(text) => wrapped_height(text, width),
            Section::Fixed(text) => to_cells(text.lines.len()),
            Section::Rule { .. } => 1,
        }
    }
}

/// A rounded box with a centered title.
pub struct Panel {
    title: String,
    border: Style,
    sections: Vec<Section>,
}

impl Panel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            border: palette::BORDER,
            sections: Vec::new(),
        }
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border = style;
        self
    }

    pub fn push_text(&mut self, text: Text<'static>) {
        self.sections.push(Section::Wrapped(text));
    }

    pub fn push_lines(&mut self, lines: Vec<Line<'static>>) {
        self.sections.push(Section::Wrapped(Text::from(lines)));
    }

    /// Add lines that must not be re-wrapped.
    pub fn push_fixed(&mut self, lines: Vec<Line<'static>>) {
        self.sections.push(Section::Fixed(Text::from(lines)));
    }

    pub fn push_rule(&mut self, title: impl Into<String>, style: Style) {
        self.sections.push(Section::Rule {
            title: title.into(),
            style,
        });
    }

    /// Content width available inside a panel `width` cells wide.
    pub fn inner_width(width: u16) -> u16 {
        width.saturating_sub(4)
    }

    /// Rows the panel takes up when drawn `width` cells wide.
    pub fn height(&self, width: u16) -> u16 {
        let inner = Self::inner_width(width);
        self.sections
            .iter()
            .fold(2u16, |total, s| total.saturating_add(s.height(inner)))
    }
}

impl Widget for &Panel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = panel_block(&self.title, self.border);
        let inner = block.inner(area);
        block.render(area, buf);

        let heights = self
            .sections
            .iter()
            .map(|s| Constraint::Length(s.height(inner.width)));
        let areas = Layout::vertical(heights).split(inner);

        for (section, area) in self.sections.iter().zip(areas.iter()) {
            match section {
                Section::Wrapped(text) => wrapped(text).render(*area, buf),
                Section::Fixed(text) => Paragraph::new(text.clone()).render(*area, buf),
                Section::Rule { title, style } => rule(title, *style).render(*area, buf),
            }
        }
    }
}
