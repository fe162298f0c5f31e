//! Response types for the NTS v2 API.
//!
//! These are transient, request-scoped records. Fields the CLI never reads are
//! not modelled; `serde` ignores them.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Highest `nextN` key the live endpoint publishes per channel.
pub const MAX_UPCOMING: usize = 17;

/// Marker the NTS editors put in titles of rebroadcast shows.
pub const REPLAY_MARKER: &str = "(R)";

/// Response from `GET /live`.
#[derive(Debug, Clone, Deserialize)]
pub struct LiveResponse {
    pub results: Vec<Channel>,
}

impl LiveResponse {
    /// Look up a channel by its 1-based number.
    pub fn channel(&self, number: u8) -> Option<&Channel> {
        (number as usize)
            .checked_sub(1)
            .and_then(|idx| self.results.get(idx))
    }
}

/// One live channel: the current broadcast plus what follows it.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawChannel")]
pub struct Channel {
    pub channel_name: String,
    pub now: Broadcast,
    /// Upcoming broadcasts in schedule order (`next1`, `next2`, ...).
    pub upcoming: Vec<Broadcast>,
}

/// Wire shape of a channel. The API flattens upcoming shows into numbered
/// sibling keys rather than an array.
#[derive(Deserialize)]
struct RawChannel {
    #[serde(default)]
    channel_name: String,
    now: Broadcast,
    #[serde(flatten)]
    rest: serde_json::Map<String, serde_json::Value>,
}

impl TryFrom<RawChannel> for Channel {
    type Error = serde_json::Error;

    fn try_from(mut raw: RawChannel) -> Result<Self, Self::Error> {
        let mut upcoming = Vec::new();
        for i in 1..=MAX_UPCOMING {
            match raw.rest.remove(&format!("next{}", i)) {
                Some(serde_json::Value::Null) | None => continue,
                Some(value) => upcoming.push(serde_json::from_value(value)?),
            }
        }

        Ok(Self {
            channel_name: raw.channel_name,
            now: raw.now,
            upcoming,
        })
    }
}

/// A single scheduled broadcast.
#[derive(Debug, Clone, Deserialize)]
pub struct Broadcast {
    pub broadcast_title: String,
    pub start_timestamp: DateTime<Utc>,
    pub end_timestamp: DateTime<Utc>,
    #[serde(default)]
    embeds: Option<Embeds>,
}

#[derive(Debug, Clone, Deserialize)]
struct Embeds {
    #[serde(default)]
    details: Option<Details>,
}

impl Broadcast {
    /// Show details, if the API embedded them.
    pub fn details(&self) -> Option<&Details> {
        self.embeds.as_ref().and_then(|e| e.details.as_ref())
    }

    pub fn is_replay(&self) -> bool {
        self.broadcast_title.contains(REPLAY_MARKER)
    }

    /// URL of the small background artwork, used for ASCII art.
    pub fn artwork_url(&self) -> Option<&str> {
        self.details()
            .and_then(|d| d.media.as_ref())
            .and_then(|m| m.background_small.as_deref())
    }
}

/// Editorial details for a show.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Details {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location_short: Option<String>,
    #[serde(default)]
    pub location_long: Option<String>,
    #[serde(default)]
    genres: Option<Vec<Tag>>,
    #[serde(default)]
    moods: Option<Vec<Tag>>,
    #[serde(default)]
    pub media: Option<Media>,
}

impl Details {
    pub fn genres(&self) -> &[Tag] {
        self.genres.as_deref().unwrap_or(&[])
    }

    pub fn moods(&self) -> &[Tag] {
        self.moods.as_deref().unwrap_or(&[])
    }

    /// Description with surrounding whitespace removed, `None` when blank.
    pub fn description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }

    /// Long location name, `None` when blank.
    pub fn location(&self) -> Option<&str> {
        self.location_long
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }
}

/// A genre or mood label.
#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    #[serde(default)]
    pub id: Option<String>,
    pub value: String,
}

/// Artwork URLs at the sizes NTS publishes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Media {
    #[serde(default)]
    pub background_small: Option<String>,
    #[serde(default)]
    pub background_medium: Option<String>,
    #[serde(default)]
    pub background_large: Option<String>,
    #[serde(default)]
    pub picture_small: Option<String>,
    #[serde(default)]
    pub picture_medium: Option<String>,
    #[serde(default)]
    pub picture_large: Option<String>,
}

/// Response from `GET /mixtapes`.
#[derive(Debug, Clone, Deserialize)]
pub struct MixtapesResponse {
    pub results: Vec<Mixtape>,
}

/// An Infinite Mixtape: a looping themed stream.
#[derive(Debug, Clone, Deserialize)]
pub struct Mixtape {
    pub mixtape_alias: String,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub audio_stream_endpoint: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn broadcast(title: &str) -> serde_json::Value {
        json!({
            "broadcast_title": title,
            "start_timestamp": "2024-03-14T15:00:00Z",
            "end_timestamp": "2024-03-14T17:00:00Z"
        })
    }

    #[test]
    fn test_channel_collects_numbered_upcoming_in_order() {
        let channel: Channel = serde_json::from_value(json!({
            "channel_name": "1",
            "now": broadcast("Now"),
            "next2": broadcast("Second"),
            "next1": broadcast("First"),
            "next10": broadcast("Tenth"),
        }))
        .unwrap();

        let titles: Vec<_> = channel
            .upcoming
            .iter()
            .map(|b| b.broadcast_title.as_str())
            .collect();
        assert_eq!(titles, vec!["First", "Second", "Tenth"]);
    }

    #[test]
    fn test_channel_ignores_null_and_unnumbered_keys() {
        let channel: Channel = serde_json::from_value(json!({
            "now": broadcast("Now"),
            "next": broadcast("Unnumbered"),
            "next1": null,
            "next18": broadcast("Beyond range"),
        }))
        .unwrap();

        assert!(channel.upcoming.is_empty());
        assert_eq!(channel.channel_name, "");
    }

    #[test]
    fn test_channel_rejects_malformed_upcoming() {
        let result: Result<Channel, _> = serde_json::from_value(json!({
            "now": broadcast("Now"),
            "next1": { "broadcast_title": "Missing timestamps" },
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_broadcast_details_accessors() {
        let show: Broadcast = serde_json::from_value(json!({
            "broadcast_title": "Test Show",
            "start_timestamp": "2024-03-14T15:00:00Z",
            "end_timestamp": "2024-03-14T17:00:00Z",
            "embeds": {
                "details": {
                    "description": "  Test description \n",
                    "genres": [{"id": "electronic", "value": "Electronic"}, {"value": "Ambient"}],
                    "moods": null,
                    "location_long": "London, UK",
                    "media": { "background_small": "https://media.ntslive.co.uk/small.jpg" }
                }
            }
        }))
        .unwrap();

        let details = show.details().unwrap();
        assert_eq!(details.description(), Some("Test description"));
        assert_eq!(details.location(), Some("London, UK"));
        assert_eq!(details.genres().len(), 2);
        assert!(details.moods().is_empty());
        assert_eq!(
            show.artwork_url(),
            Some("https://media.ntslive.co.uk/small.jpg")
        );
    }

    #[test]
    fn test_broadcast_without_embeds() {
        let show: Broadcast = serde_json::from_value(broadcast("Bare")).unwrap();
        assert!(show.details().is_none());
        assert!(show.artwork_url().is_none());
    }

    #[test]
    fn test_is_replay() {
        let replay: Broadcast = serde_json::from_value(broadcast("Morning Show (R)")).unwrap();
        let live: Broadcast = serde_json::from_value(broadcast("Morning Show")).unwrap();
        assert!(replay.is_replay());
        assert!(!live.is_replay());
    }

    #[test]
    fn test_live_response_channel_lookup() {
        let live: LiveResponse = serde_json::from_value(json!({
            "results": [
                { "channel_name": "1", "now": broadcast("One") },
                { "channel_name": "2", "now": broadcast("Two") }
            ]
        }))
        .unwrap();

        assert_eq!(live.channel(1).unwrap().now.broadcast_title, "One");
        assert_eq!(live.channel(2).unwrap().now.broadcast_title, "Two");
        assert!(live.channel(0).is_none());
        assert!(live.channel(3).is_none());
    }
}
