//! Downloading show artwork and wrapping it in a panel.

use ratatui::text::Line;

use crate::api::{ApiError, NtsClient};
use crate::ascii::{self, ArtOptions, RgbFrame};
use crate::format::{palette, Panel};

/// Title of the artwork panel.
pub const ART_PANEL_TITLE: &str = "SHOW ART";

/// Errors that can occur while preparing artwork.
#[derive(Debug, thiserror::Error)]
pub enum ArtError {
    #[error("{0}")]
    Download(#[from] ApiError),

    #[error("could not decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Download `url` and render it as terminal art.
pub async fn fetch_art(
    client: &NtsClient,
    url: &str,
    options: &ArtOptions,
) -> Result<Vec<Line<'static>>, ArtError> {
    let bytes = client.fetch_bytes(url).await?;
    let frame = RgbFrame::decode(&bytes)?;
    log::debug!(
        "Decoded artwork {}x{} from {}",
        frame.width,
        frame.height,
        url
    );
    Ok(ascii::render_art(&frame, options).to_lines())
}

/// Panel holding rendered art, or the reason it could not be shown.
pub fn art_panel(result: Result<Vec<Line<'static>>, ArtError>) -> Panel {
    match result {
        Ok(lines) => {
            let mut panel = Panel::new(ART_PANEL_TITLE);
            panel.push_fixed(lines);
            panel
        }
        Err(e) => {
            log::warn!("Artwork unavailable: {}", e);
            let message = Line::styled(format!("Error loading show art: {}", e), palette::ERROR);
            let mut panel = Panel::new(ART_PANEL_TITLE).border_style(palette::ERROR_BORDER);
            panel.push_lines(vec![message]);
            panel
        }
    }
}
