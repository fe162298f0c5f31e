//! Building panels, tables and text from API records.

use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};

use crate::api::{Broadcast, Channel, Mixtape};

use super::panel::Panel;
use super::table::TitledTable;
use super::theme::palette;
use super::time::TimeFormatter;
use super::title::{format_show_title, unescape_html};

/// Upcoming shows listed under the current one in `now`.
pub const NOW_UPCOMING_LIMIT: usize = 5;

/// Upcoming shows listed in the schedule table.
pub const SCHEDULE_UPCOMING_LIMIT: usize = 17;

/// Title of the rule separating the current show from what follows.
pub const UPCOMING_RULE: &str = "UPCOMING SHOWS";

/// Title, time range, location, description and genres of the current show.
pub fn show_summary(show: &Broadcast, times: &TimeFormatter) -> Text<'static> {
    let mut lines = vec![Line::styled(
        format_show_title(&show.broadcast_title),
        palette::TITLE,
    )];

    let mut when = Line::styled(
        times.range(&show.start_timestamp, &show.end_timestamp),
        palette::TIME,
    );
    let details = show.details();
    if let Some(location) = details.and_then(|d| d.location()) {
        when.spans.push(Span::raw(format!(", {}", location)));
    }
    lines.push(when);

    if let Some(details) = details {
        if let Some(description) = details.description() {
            lines.push(Line::default());
            lines.extend(unescape_html(description).lines().map(|l| Line::raw(l.to_string())));
        }
        if !details.genres().is_empty() {
            let genres = join_tags(details.genres().iter().map(|g| g.value.as_str()));
            lines.push(Line::default());
            lines.push(Line::styled(genres, palette::GENRES));
        }
    }

    lines.push(Line::default());
    Text::from(lines)
}

/// `time range` + title rows for the next `limit` shows.
pub fn upcoming_lines(channel: &Channel, limit: usize, times: &TimeFormatter) -> Vec<Line<'static>> {
    channel
        .upcoming
        .iter()
        .take(limit)
        .map(|next| {
            Line::from(vec![
                Span::styled(
                    format!("{} ", times.range(&next.start_timestamp, &next.end_timestamp)),
                    palette::TIME,
                ),
                Span::raw(format_show_title(&next.broadcast_title)),
            ])
        })
        .collect()
}

/// The `CHANNEL n` panel: current show, a rule, then upcoming shows.
pub fn channel_panel(channel: &Channel, number: u8, times: &TimeFormatter) -> Panel {
    let mut panel = Panel::new(format!("CHANNEL {}", number));
    panel.push_text(show_summary(&channel.now, times));
    panel.push_rule(UPCOMING_RULE, palette::BORDER);
    panel.push_lines(upcoming_lines(channel, NOW_UPCOMING_LIMIT, times));
    panel
}

/// The `Channel n Schedule` table: current show first, then upcoming.
pub fn schedule_table(channel: &Channel, number: u8, times: &TimeFormatter) -> TitledTable {
    let mut table = TitledTable::new(format!("Channel {} Schedule", number), &["Time", "Show"]);

    let current = &channel.now;
    table.add_row(vec![
        Line::styled(
            times.range(&current.start_timestamp, &current.end_timestamp),
            palette::TIME,
        ),
        Line::styled(format_show_title(&current.broadcast_title), palette::CURRENT),
    ]);

    for next in channel.upcoming.iter().take(SCHEDULE_UPCOMING_LIMIT) {
        table.add_row(vec![
            Line::styled(
                times.range(&next.start_timestamp, &next.end_timestamp),
                palette::TIME,
            ),
            Line::raw(format_show_title(&next.broadcast_title)),
        ]);
    }
    table
}

/// Everything known about the current show on a channel, one field per line.
pub fn show_info(channel: &Channel, number: u8, times: &TimeFormatter) -> Text<'static> {
    let show = &channel.now;
    let mut lines = vec![
        Line::styled(format!("CHANNEL {}", number), palette::CURRENT),
        Line::styled(format_show_title(&show.broadcast_title), palette::TITLE),
        Line::styled(
            format!(
                "{}, {}",
                times.date(&show.start_timestamp),
                times.range(&show.start_timestamp, &show.end_timestamp)
            ),
            palette::TIME,
        ),
    ];

    let status = if show.is_replay() { "Replay" } else { "Live" };
    lines.push(field("Status", status.to_string(), Style::new()));

    if let Some(details) = show.details() {
        if let Some(name) = details.name.as_deref().filter(|n| !n.trim().is_empty()) {
            lines.push(field("Host", unescape_html(name), Style::new()));
        }
        if let Some(location) = details.location() {
            lines.push(field("Location", location.to_string(), Style::new()));
        }
        if !details.genres().is_empty() {
            let genres = join_tags(details.genres().iter().map(|g| g.value.as_str()));
            lines.push(field("Genres", genres, palette::GENRES));
        }
        if !details.moods().is_empty() {
            let moods = join_tags(details.moods().iter().map(|m| m.value.as_str()));
            lines.push(field("Moods", moods, palette::GENRES));
        }
        if let Some(url) = show.artwork_url() {
            lines.push(field("Artwork", url.to_string(), Style::new()));
        }
        if let Some(description) = details.description() {
            lines.push(Line::default());
            lines.extend(unescape_html(description).lines().map(|l| Line::raw(l.to_string())));
        }
    }

    if let Some(next) = channel.upcoming.first() {
        let value = format!(
            "{} {}",
            times.range(&next.start_timestamp, &next.end_timestamp),
            format_show_title(&next.broadcast_title)
        );
        lines.push(Line::default());
        lines.push(field("Up next", value, Style::new()));
    }

    Text::from(lines)
}

/// One line per mixtape: title, then subtitle (and the stream URL if asked).
pub fn mixtape_lines(mixtapes: &[Mixtape], with_urls: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for mixtape in mixtapes {
        let mut line = Line::styled(unescape_html(&mixtape.title), palette::TITLE);
        if let Some(subtitle) = mixtape.subtitle.as_deref().filter(|s| !s.trim().is_empty()) {
            line.spans.push(Span::styled(" - ", palette::MUTED));
            line.spans.push(Span::raw(unescape_html(subtitle.trim())));
        }
        lines.push(line);

        let mut detail = Line::styled(format!("  {}", mixtape.mixtape_alias), palette::MUTED);
        if with_urls {
            detail.spans.push(Span::raw("  "));
            detail
                .spans
                .push(Span::styled(mixtape.audio_stream_endpoint.clone(), palette::TIME));
        }
        lines.push(detail);
    }
    lines
}

fn field(label: &str, value: String, style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), palette::MUTED),
        Span::styled(value, style),
    ])
}

fn join_tags<'a>(tags: impl Iterator<Item = &'a str>) -> String {
    tags.map(|t| unescape_html(t.trim()))
        .collect::<Vec<_>>()
        .join(", ")
}
