//! Terminal styling that can be switched off.

use crossterm::style::{Attribute, ContentStyle};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;

/// Environment variable that disables color when set (https://no-color.org).
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Styles for the pieces of NTS output.
pub mod palette {
    use ratatui::style::{Color, Modifier, Style};

    pub const BORDER: Style = Style::new().fg(Color::LightBlue);
    pub const ERROR_BORDER: Style = Style::new().fg(Color::LightRed);
    pub const TIME: Style = Style::new().fg(Color::LightYellow);
    pub const GENRES: Style = Style::new().fg(Color::LightGreen);
    pub const MUTED: Style = Style::new().fg(Color::DarkGray);
    pub const TITLE: Style = Style::new().add_modifier(Modifier::BOLD);
    pub const CURRENT: Style = Style::new().fg(Color::LightBlue).add_modifier(Modifier::BOLD);
    pub const HEADER: Style = Style::new().add_modifier(Modifier::BOLD);
    pub const ERROR: Style = Style::new().fg(Color::LightRed).add_modifier(Modifier::BOLD);
    pub const STATUS: Style = Style::new().fg(Color::LightBlue).add_modifier(Modifier::BOLD);
}

/// Decides whether styles are emitted as ANSI sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    color: bool,
}

impl Theme {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// A theme that never emits escape sequences.
    pub fn plain() -> Self {
        Self { color: false }
    }

    /// Resolve color from the `--no-color` flag, `NO_COLOR` and the config file.
    pub fn resolve(no_color_flag: bool, config_color: bool) -> Self {
        let env_disabled = std::env::var_os(NO_COLOR_ENV).is_some_and(|v| !v.is_empty());
        Self::new(!no_color_flag && !env_disabled && config_color)
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    /// Render `text` in `style`, or verbatim when color is off.
    pub fn paint(&self, text: &str, style: Style) -> String {
        if !self.color || text.is_empty() {
            return text.to_string();
        }

        let fg = style.fg.and_then(to_crossterm);
        let bg = style.bg.and_then(to_crossterm);
        let bold = style.add_modifier.contains(Modifier::BOLD);
        if fg.is_none() && bg.is_none() && !bold {
            return text.to_string();
        }

        let mut content_style = ContentStyle::new();
        content_style.foreground_color = fg;
        content_style.background_color = bg;
        if bold {
            content_style.attributes.set(Attribute::Bold);
        }
        content_style.apply(text).to_string()
    }

    /// Render one line, span by span.
    pub fn render_line(&self, line: &Line) -> String {
        line.spans
            .iter()
            .map(|span| self.paint(&span.content, line.style.patch(span.style)))
            .collect()
    }
}

/// Terminal color for a ratatui color; `Reset` means "leave as is".
fn to_crossterm(color: Color) -> Option<crossterm::style::Color> {
    use crossterm::style::Color as C;

    let color = match color {
        Color::Reset => return None,
        Color::Black => C::Black,
        Color::Red => C::DarkRed,
        Color::Green => C::DarkGreen,
        Color::Yellow => C::DarkYellow,
        Color::Blue => C::DarkBlue,
        Color::Magenta => C::DarkMagenta,
        Color::Cyan => C::DarkCyan,
        Color::Gray => C::Grey,
        Color::DarkGray => C::DarkGrey,
        Color::LightRed => C::Red,
        Color::LightGreen => C::Green,
        Color::LightYellow => C::Yellow,
        Color::LightBlue => C::Blue,
        Color::LightMagenta => C::Magenta,
        Color::LightCyan => C::Cyan,
        Color::White => C::White,
        Color::Rgb(r, g, b) => C::Rgb { r, g, b },
        Color::Indexed(i) => C::AnsiValue(i),
    };
    Some(color)
}
