//! Shared fixtures for integration tests.

#![allow(dead_code)]

use chrono::FixedOffset;
use serde_json::{json, Value};

use nts_cli::api::NtsClient;
use nts_cli::cli::Context;
use nts_cli::config::Config;
use nts_cli::format::{Theme, TimeFormatter};

/// A `/live` response with two channels.
///
/// Channel 1 has full details and a gap at `next3`; channel 2 is a replay
/// with sparse details. `art_url` becomes channel 1's `background_small`.
pub fn live_fixture(art_url: Option<&str>) -> Value {
    json!({
        "results": [
            {
                "channel_name": "1",
                "now": {
                    "broadcast_title": "Floating Points &amp; Friends",
                    "start_timestamp": "2024-03-14T15:00:00Z",
                    "end_timestamp": "2024-03-14T17:00:00Z",
                    "embeds": {
                        "details": {
                            "name": "Floating Points",
                            "description": "Jazz, electronics and everything between.",
                            "location_short": "LDN",
                            "location_long": "London",
                            "genres": [
                                { "id": "jazz", "value": "Jazz" },
                                { "id": "electronica", "value": "Electronica" }
                            ],
                            "moods": [{ "id": "late", "value": "Late night" }],
                            "media": { "background_small": art_url }
                        }
                    }
                },
                "next": {
                    "broadcast_title": "Breakfast Show (R)",
                    "start_timestamp": "2024-03-14T17:00:00Z",
                    "end_timestamp": "2024-03-14T19:00:00Z"
                },
                "next1": {
                    "broadcast_title": "Breakfast Show (R)",
                    "start_timestamp": "2024-03-14T17:00:00Z",
                    "end_timestamp": "2024-03-14T19:00:00Z"
                },
                "next2": {
                    "broadcast_title": "Evening Session",
                    "start_timestamp": "2024-03-14T19:00:00Z",
                    "end_timestamp": "2024-03-14T21:00:00Z"
                },
                "next4": {
                    "broadcast_title": "Late Show",
                    "start_timestamp": "2024-03-14T21:00:00Z",
                    "end_timestamp": "2024-03-14T23:00:00Z"
                }
            },
            {
                "channel_name": "2",
                "now": {
                    "broadcast_title": "Sunday Mix (R)",
                    "start_timestamp": "2024-03-14T15:00:00Z",
                    "end_timestamp": "2024-03-14T16:00:00Z",
                    "embeds": { "details": { "location_long": "" } }
                },
                "next1": {
                    "broadcast_title": "Afternoon Tea",
                    "start_timestamp": "2024-03-14T16:00:00Z",
                    "end_timestamp": "2024-03-14T18:00:00Z"
                }
            }
        ]
    })
}

/// A `/mixtapes` response with two mixtapes.
pub fn mixtapes_fixture() -> Value {
    json!({
        "results": [
            {
                "mixtape_alias": "poolside",
                "title": "Poolside",
                "subtitle": "Sun-drenched sounds",
                "description": "Balearic, boogie and sophisti-pop.",
                "audio_stream_endpoint": "https://stream-mixtape-geo.ntslive.net/mixtape4"
            },
            {
                "mixtape_alias": "slow-focus",
                "title": "Slow Focus",
                "subtitle": "",
                "description": "Ambient and drone.",
                "audio_stream_endpoint": "https://stream-mixtape-geo.ntslive.net/mixtape"
            }
        ]
    })
}

/// Times rendered in UTC so assertions do not depend on the host timezone.
pub fn utc_times() -> TimeFormatter {
    TimeFormatter::fixed(FixedOffset::east_opt(0).unwrap())
}

/// A colorless context against `base_url`.
pub fn context(base_url: &str, width: usize) -> Context {
    let client = NtsClient::with_base_url(base_url.to_string()).unwrap();
    Context::from_parts(client, Config::default(), Theme::plain(), utc_times()).with_width(width)
}

/// PNG bytes of a `width` x `height` image, white on top and black below.
pub fn png_fixture(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_fn(width, height, |_, y| {
        if y < height / 2 {
            image::Rgb([255, 255, 255])
        } else {
            image::Rgb([0, 0, 0])
        }
    });
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut std::io::Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    bytes
}
