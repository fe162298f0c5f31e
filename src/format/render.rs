//! Drawing widgets off-screen and reading the result back as lines.
//!
//! Output goes to the scrollback, not an alternate screen, so widgets are
//! rendered into a [`Buffer`] sized to their content and then emitted row by
//! row through a [`Theme`](super::Theme).

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Paragraph, Widget, Wrap};
use unicode_width::UnicodeWidthStr;

/// Width of `s` in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Clamp a cell count to what ratatui's geometry can hold.
pub fn to_cells(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Render `widget` into a fresh `width` x `height` buffer.
pub fn render_to_buffer(widget: impl Widget, width: u16, height: u16) -> Buffer {
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    widget.render(area, &mut buffer);
    buffer
}

/// Rows needed to show `text` word-wrapped at `width` cells.
pub fn wrapped_height(text: &Text<'static>, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    to_cells(wrapped(text).line_count(width))
}

/// `text` as a paragraph that wraps on word boundaries.
pub fn wrapped(text: &Text<'static>) -> Paragraph<'static> {
    Paragraph::new(text.clone()).wrap(Wrap { trim: false })
}

/// Word-wrap `text` to `width` cells, dropping the padding on the right.
pub fn wrap_text(text: &Text<'static>, width: u16) -> Vec<Line<'static>> {
    let height = wrapped_height(text, width);
    let buffer = render_to_buffer(wrapped(text), width, height);
    buffer_lines(&buffer).into_iter().map(trim_end).collect()
}

/// Every row of `buffer` as a styled line.
///
/// Cells hidden behind a wide character are skipped, so each line is exactly
/// as wide as the buffer.
pub fn buffer_lines(buffer: &Buffer) -> Vec<Line<'static>> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            let mut spans: Vec<Span<'static>> = Vec::new();
            let mut hidden = 0;
            for x in area.left()..area.right() {
                if hidden > 0 {
                    hidden -= 1;
                    continue;
                }
                let cell = &buffer[(x, y)];
                let symbol = cell.symbol();
                hidden = display_width(symbol).saturating_sub(1);

                let style = cell.style();
                match spans.last_mut() {
                    Some(last) if last.style == style => last.content.to_mut().push_str(symbol),
                    _ => spans.push(Span::styled(symbol.to_string(), style)),
                }
            }
            Line::from(spans)
        })
        .collect()
}

/// Drop trailing blank cells.
pub fn trim_end(mut line: Line<'static>) -> Line<'static> {
    while let Some(last) = line.spans.last_mut() {
        let kept = last.content.trim_end().len();
        if kept == 0 {
            line.spans.pop();
        } else {
            last.content.to_mut().truncate(kept);
            break;
        }
    }
    line
}
