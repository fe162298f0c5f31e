//! Converting API timestamps (UTC) into the viewer's timezone.

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Local, Utc};

/// Default clock format: 24-hour `HH:MM`.
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

/// Format used for the date line in detailed output.
const DATE_FORMAT: &str = "%a %-d %b";

/// Formats UTC instants in local time or a fixed offset.
#[derive(Debug, Clone)]
pub struct TimeFormatter {
    pattern: String,
    offset: Option<FixedOffset>,
}

impl Default for TimeFormatter {
    fn default() -> Self {
        Self::local()
    }
}

impl TimeFormatter {
    /// Format in the system's local timezone.
    pub fn local() -> Self {
        Self {
            pattern: DEFAULT_TIME_FORMAT.to_string(),
            offset: None,
        }
    }

    /// Format at a fixed UTC offset instead of local time.
    pub fn fixed(offset: FixedOffset) -> Self {
        Self {
            pattern: DEFAULT_TIME_FORMAT.to_string(),
            offset: Some(offset),
        }
    }

    /// Replace the strftime pattern used for clock times.
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self, InvalidTimeFormat> {
        validate_pattern(pattern)?;
        self.pattern = pattern.to_string();
        Ok(self)
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    fn render(&self, ts: &DateTime<Utc>, pattern: &str) -> String {
        match self.offset {
            Some(offset) => ts.with_timezone(&offset).format(pattern).to_string(),
            None => ts.with_timezone(&Local).format(pattern).to_string(),
        }
    }

    /// Clock time of `ts`, e.g. `15:30`.
    pub fn time(&self, ts: &DateTime<Utc>) -> String {
        self.render(ts, &self.pattern)
    }

    /// `start - end` clock range.
    pub fn range(&self, start: &DateTime<Utc>, end: &DateTime<Utc>) -> String {
        format!("{} - {}", self.time(start), self.time(end))
    }

    /// Short calendar date of `ts`, e.g. `Thu 14 Mar`.
    pub fn date(&self, ts: &DateTime<Utc>) -> String {
        self.render(ts, DATE_FORMAT)
    }
}

/// Reject strftime patterns chrono cannot render.
pub fn validate_pattern(pattern: &str) -> Result<(), InvalidTimeFormat> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(InvalidTimeFormat(pattern.to_string()));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid time format '{0}'")]
pub struct InvalidTimeFormat(pub String);
