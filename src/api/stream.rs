//! Audio stream locations for the live channels.

/// Number of live NTS channels.
pub const CHANNEL_COUNT: u8 = 2;

/// Relay URLs for channel 1 and channel 2, in order.
pub const CHANNEL_STREAMS: [&str; CHANNEL_COUNT as usize] = [
    "https://stream-relay-geo.ntslive.net/stream",
    "https://stream-relay-geo.ntslive.net/stream2",
];

/// Stream URL for a 1-based channel number, `None` for unknown channels.
pub fn stream_url(channel: u8) -> Option<&'static str> {
    (channel as usize)
        .checked_sub(1)
        .and_then(|idx| CHANNEL_STREAMS.get(idx))
        .copied()
}
