//! End-to-end tests for the subcommands against a mock NTS API.
//!
//! Output is captured into a buffer with color disabled and times rendered
//! in UTC, so the assertions match what a user sees in a plain terminal.

mod common;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nts_cli::ascii::CharSet;
use nts_cli::cli::{self, ArtCharset, Command, CommandError};

async fn mock_api(live: serde_json::Value) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/live"))
        .respond_with(ResponseTemplate::new(200).set_body_json(live))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/mixtapes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::mixtapes_fixture()))
        .mount(&server)
        .await;
    server
}

async fn run(server: &MockServer, width: usize, command: Command) -> Result<String, CommandError> {
    let ctx = common::context(&server.uri(), width);
    let mut out = Vec::new();
    cli::run(&ctx, command, &mut out).await?;
    Ok(String::from_utf8(out).unwrap())
}

fn now_command(art: bool) -> Command {
    Command::Now {
        art,
        art_width: None,
        art_height: None,
        charset: None,
    }
}

// === now ===

#[tokio::test]
async fn test_now_side_by_side_on_wide_terminal() {
    let server = mock_api(common::live_fixture(None)).await;

    let output = run(&server, 100, now_command(false)).await.unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert!(lines[0].starts_with('╭'));
    assert!(lines[0].contains(" CHANNEL 1 "));
    assert!(lines[0].contains(" CHANNEL 2 "));
    assert!(lines.iter().all(|l| nts_cli::format::display_width(l) == 100));
    assert!(output.contains("Floating Points & Friends 🔴"));
    assert!(output.contains("15:00 - 17:00, London"));
    assert!(output.contains("Jazz, electronics and everything between."));
    assert!(output.contains("Jazz, Electronica"));
    assert!(output.contains("UPCOMING SHOWS"));
    assert!(output.contains("17:00 - 19:00 Breakfast Show (R)"));
    assert!(output.contains("21:00 - 23:00 Late Show 🔴"));
    assert!(output.contains("Sunday Mix (R)"));
    assert!(!output.contains("Sunday Mix (R) 🔴"));
    assert!(!output.contains('\x1b'));
}

#[tokio::test]
async fn test_now_stacks_on_narrow_terminal() {
    let server = mock_api(common::live_fixture(None)).await;

    let output = run(&server, 60, now_command(false)).await.unwrap();

    assert!(output.lines().all(|l| !(l.contains("CHANNEL 1") && l.contains("CHANNEL 2"))));
    let first = output.find("CHANNEL 1").unwrap();
    let second = output.find("CHANNEL 2").unwrap();
    assert!(first < second);
    assert!(output.lines().all(|l| nts_cli::format::display_width(l) == 60));
}

#[tokio::test]
async fn test_now_with_art() {
    let server = MockServer::start().await;
    let art_url = format!("{}/art.png", server.uri());
    Mock::given(method("GET"))
        .and(path("/live"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(common::live_fixture(Some(&art_url))),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/art.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(common::png_fixture(16, 16)))
        .mount(&server)
        .await;

    let command = Command::Now {
        art: true,
        art_width: Some(20),
        art_height: Some(10),
        charset: Some(ArtCharset::Blocks),
    };
    let output = run(&server, 60, command).await.unwrap();

    // Only channel 1 has artwork.
    assert_eq!(output.matches("SHOW ART").count(), 1);
    assert!(output.find("SHOW ART").unwrap() < output.find("CHANNEL 1").unwrap());
    assert!(output.contains("█"));
    assert!(!output.contains("Error loading show art"));
}

#[tokio::test]
async fn test_now_art_error_becomes_panel() {
    let server = MockServer::start().await;
    let art_url = format!("{}/missing.png", server.uri());
    Mock::given(method("GET"))
        .and(path("/live"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(common::live_fixture(Some(&art_url))),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/missing.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let output = run(&server, 60, now_command(true)).await.unwrap();

    assert!(output.contains("SHOW ART"));
    assert!(output.contains("Error loading show art: NTS API returned HTTP 404"));
    assert!(output.contains("CHANNEL 1"));
}

#[tokio::test]
async fn test_now_reports_connection_failure() {
    let ctx = common::context("http://127.0.0.1:9", 100);
    let mut out = Vec::new();

    let err = cli::run(&ctx, now_command(false), &mut out).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "Unable to connect to NTS. Please check your internet connection and try again."
    );
    assert!(out.is_empty());
}

// === schedule ===

#[tokio::test]
async fn test_schedule_tables() {
    let server = mock_api(common::live_fixture(None)).await;

    let output = run(&server, 80, Command::Schedule).await.unwrap();

    assert!(output.contains("Channel 1 Schedule"));
    assert!(output.contains("Channel 2 Schedule"));
    assert!(output.contains("Time"));
    assert!(output.contains("Show"));

    let current = output.find("Floating Points & Friends 🔴").unwrap();
    let next = output.find("Breakfast Show (R)").unwrap();
    let last = output.find("Late Show 🔴").unwrap();
    assert!(current < next && next < last);
    assert!(output.contains("19:00 - 21:00"));
    assert!(output.contains("Afternoon Tea 🔴"));
}

#[tokio::test]
async fn test_schedule_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/live"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = run(&server, 80, Command::Schedule).await.unwrap_err();

    assert_eq!(err.to_string(), "NTS API returned HTTP 500");
}

// === json ===

#[tokio::test]
async fn test_json_pretty_prints_live_response() {
    let fixture = common::live_fixture(None);
    let server = mock_api(fixture.clone()).await;

    let output = run(&server, 80, Command::Json).await.unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed, fixture);
    assert!(output.starts_with("{\n  \"results\""));
}

// === info ===

#[tokio::test]
async fn test_info_single_channel() {
    let server = mock_api(common::live_fixture(None)).await;

    let output = run(&server, 80, Command::Info { channel: Some(2) }).await.unwrap();

    assert!(output.starts_with("CHANNEL 2\n"));
    assert!(output.contains("Sunday Mix (R)"));
    assert!(output.contains("Thu 14 Mar, 15:00 - 16:00"));
    assert!(output.contains("Status: Replay"));
    assert!(output.contains("Up next: 16:00 - 18:00 Afternoon Tea 🔴"));
    assert!(!output.contains("CHANNEL 1"));
    assert!(!output.contains("Location:"));
}

#[tokio::test]
async fn test_info_all_channels() {
    let server = mock_api(common::live_fixture(Some("https://media.ntslive.co.uk/a.jpg"))).await;

    let output = run(&server, 80, Command::Info { channel: None }).await.unwrap();

    assert!(output.contains("CHANNEL 1"));
    assert!(output.contains("CHANNEL 2"));
    assert!(output.contains("Status: Live"));
    assert!(output.contains("Host: Floating Points"));
    assert!(output.contains("Location: London"));
    assert!(output.contains("Genres: Jazz, Electronica"));
    assert!(output.contains("Moods: Late night"));
    assert!(output.contains("Artwork: https://media.ntslive.co.uk/a.jpg"));
}

#[tokio::test]
async fn test_info_missing_channel() {
    let mut live = common::live_fixture(None);
    live["results"].as_array_mut().unwrap().truncate(1);
    let server = mock_api(live).await;

    let err = run(&server, 80, Command::Info { channel: Some(2) }).await.unwrap_err();

    assert!(matches!(err, CommandError::NoChannel(2)));
}

// === stream-url ===

#[tokio::test]
async fn test_stream_url_needs_no_network() {
    let ctx = common::context("http://127.0.0.1:9", 80);
    let mut out = Vec::new();

    cli::run(&ctx, Command::StreamUrl { channel: 1 }, &mut out).await.unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "https://stream-relay-geo.ntslive.net/stream\n"
    );
}

// === infinite ===

#[tokio::test]
async fn test_infinite_lists_mixtapes() {
    let server = mock_api(common::live_fixture(None)).await;

    let command = Command::Infinite {
        url: false,
        play: None,
        random: false,
    };
    let output = run(&server, 80, command).await.unwrap();

    assert!(output.contains("Poolside - Sun-drenched sounds"));
    assert!(output.contains("  poolside"));
    assert!(output.contains("Slow Focus"));
    assert!(!output.contains("Slow Focus -"));
    assert!(!output.contains("https://"));
}

#[tokio::test]
async fn test_infinite_lists_urls() {
    let server = mock_api(common::live_fixture(None)).await;

    let command = Command::Infinite {
        url: true,
        play: None,
        random: false,
    };
    let output = run(&server, 80, command).await.unwrap();

    assert!(output.contains("https://stream-mixtape-geo.ntslive.net/mixtape4"));
}

#[tokio::test]
async fn test_infinite_random_url() {
    let server = mock_api(common::live_fixture(None)).await;

    let command = Command::Infinite {
        url: true,
        play: None,
        random: true,
    };
    let output = run(&server, 80, command).await.unwrap();

    assert!(
        output == "https://stream-mixtape-geo.ntslive.net/mixtape4\n"
            || output == "https://stream-mixtape-geo.ntslive.net/mixtape\n"
    );
}

#[tokio::test]
async fn test_infinite_alias_url() {
    let server = mock_api(common::live_fixture(None)).await;

    let command = Command::Infinite {
        url: true,
        play: Some("Poolside".to_string()),
        random: false,
    };
    let output = run(&server, 80, command).await.unwrap();

    assert_eq!(output, "https://stream-mixtape-geo.ntslive.net/mixtape4\n");
}

#[tokio::test]
async fn test_infinite_unknown_alias() {
    let server = mock_api(common::live_fixture(None)).await;

    let command = Command::Infinite {
        url: false,
        play: Some("nope".to_string()),
        random: false,
    };
    let err = run(&server, 80, command).await.unwrap_err();

    assert!(matches!(err, CommandError::UnknownMixtape(alias) if alias == "nope"));
}

// === art options ===

#[test]
fn test_art_options_follow_theme() {
    let ctx = common::context("http://127.0.0.1:9", 80);
    let options = ctx.art_options(None, None, None);
    assert_eq!(options.width, 80);
    assert_eq!(options.height, 40);
    assert_eq!(options.charset, CharSet::Pixels);
    assert!(!options.color);
}

// === config ===

#[tokio::test]
async fn test_config_show_reports_effective_settings() {
    let ctx = common::context("http://127.0.0.1:9", 80);
    let mut out = Vec::new();

    let command = Command::Config {
        action: cli::ConfigAction::Show,
    };
    cli::run(&ctx, command, &mut out).await.unwrap();
    let output = String::from_utf8(out).unwrap();

    assert!(output.starts_with("Current configuration:\n"));
    assert!(output.contains("  API URL: http://127.0.0.1:9\n"));
    assert!(output.contains("  Timeout: 30s\n"));
    assert!(output.contains("  Color: no\n"));
    assert!(output.contains("  Time format: %H:%M\n"));
    assert!(output.contains("  Art: 80x40, pixels\n"));
    assert!(output.contains("  Player: mpv --no-video <url>\n"));
    assert!(output.contains("Config file: "));
}
