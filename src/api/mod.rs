//! NTS Radio API integration.
//!
//! A thin async client over the public v2 endpoints (`/live`, `/mixtapes`),
//! the serde models for their responses, and the fixed stream relay URLs
//! for the two live channels.

mod client;
mod model;
mod stream;

pub use client::{ApiError, NtsClient, DEFAULT_TIMEOUT, NTS_API_BASE_URL, NTS_API_URL_ENV};
pub use model::{
    Broadcast, Channel, Details, LiveResponse, Media, Mixtape, MixtapesResponse, Tag,
    MAX_UPCOMING, REPLAY_MARKER,
};
pub use stream::{stream_url, CHANNEL_COUNT, CHANNEL_STREAMS};
