//! Titled tables sized to their content.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Row, Table, Widget};

use super::panel::panel_block;
use super::render::{display_width, to_cells};
use super::theme::palette;

/// Cells between two columns.
const COLUMN_SPACING: u16 = 2;

/// Borders plus horizontal padding.
const FRAME_WIDTH: u16 = 4;

/// A rounded table with a header row and a centered title.
pub struct TitledTable {
    title: String,
    headers: Vec<String>,
    rows: Vec<Vec<Line<'static>>>,
}

impl TitledTable {
    pub fn new(title: impl Into<String>, headers: &[&str]) -> Self {
        Self {
            title: title.into(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Add a row. Missing cells render empty; extra cells are ignored.
    pub fn add_row(&mut self, cells: Vec<Line<'static>>) {
        self.rows.push(cells);
    }

    /// Natural width of every column (widest of header and cells).
    fn column_widths(&self) -> Vec<u16> {
        self.headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let widest = self
                    .rows
                    .iter()
                    .filter_map(|row| row.get(idx))
                    .map(Line::width)
                    .chain(std::iter::once(display_width(header)))
                    .max()
                    .unwrap_or(0);
                to_cells(widest)
            })
            .collect()
    }

    /// Width the table needs, capped at `max_width`.
    pub fn width(&self, max_width: u16) -> u16 {
        let widths = self.column_widths();
        let gaps = COLUMN_SPACING.saturating_mul(to_cells(widths.len().saturating_sub(1)));
        let content = widths
            .iter()
            .fold(gaps, |total, w| total.saturating_add(*w));
        let title = to_cells(display_width(&self.title)).saturating_add(2);
        content
            .max(title)
            .saturating_add(FRAME_WIDTH)
            .min(max_width)
    }

    /// Borders, header and one row per entry.
    pub fn height(&self) -> u16 {
        to_cells(self.rows.len()).saturating_add(3)
    }
}

impl Widget for &TitledTable {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let widths = self.column_widths();
        let last = widths.len().saturating_sub(1);
        // The last column takes whatever is left and is clipped first.
        let constraints = widths.iter().enumerate().map(|(idx, w)| {
            if idx == last {
                Constraint::Fill(1)
            } else {
                Constraint::Length(*w)
            }
        });

        let header =
            Row::new(self.headers.iter().map(|h| Line::from(h.clone()))).style(palette::HEADER);
        let rows = self.rows.iter().map(|cells| {
            let mut cells = cells.clone();
            cells.resize(self.headers.len(), Line::default());
            Row::new(cells)
        });

        Table::new(rows, constraints)
            .header(header)
            .column_spacing(COLUMN_SPACING)
            .block(panel_block(&self.title, palette::BORDER))
            .render(area, buf);
    }
}
