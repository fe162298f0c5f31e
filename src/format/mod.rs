//! Terminal output for NTS data.
//!
//! Timestamps arrive in UTC and are shown in the viewer's timezone. Panels
//! and tables are ratatui widgets drawn into an off-screen buffer sized to
//! their content; a [`Theme`] decides at print time whether color is used at
//! all.

mod panel;
mod render;
mod table;
mod theme;
mod time;
mod title;
mod views;

pub use panel::Panel;
pub use render::{buffer_lines, display_width, render_to_buffer, to_cells, wrap_text};
pub use table::TitledTable;
pub use theme::{palette, Theme, NO_COLOR_ENV};
pub use time::{validate_pattern, InvalidTimeFormat, TimeFormatter, DEFAULT_TIME_FORMAT};
pub use title::{format_show_title, unescape_html, LIVE_INDICATOR};
pub use views::{
    channel_panel, mixtape_lines, schedule_table, show_info, show_summary, upcoming_lines,
    NOW_UPCOMING_LIMIT, SCHEDULE_UPCOMING_LIMIT, UPCOMING_RULE,
};
