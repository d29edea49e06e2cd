pub mod api;
pub mod form;
pub mod health;

use std::path::PathBuf;
use std::sync::Arc;

use axum::http::header;
use axum::response::IntoResponse;

use cartes_core::models::deck::Deck;
use cartes_export::error::ExportError;
use cartes_export::logo::Logo;
use cartes_export::pdf::{PDF_CONTENT_TYPE, PDF_FILENAME, render_deck};

/// Load the logo and render `deck` off the async runtime.
pub(crate) async fn render_sheet(
    logo_path: Arc<PathBuf>,
    deck: Deck,
) -> Result<Vec<u8>, ExportError> {
    tokio::task::spawn_blocking(move || {
        let logo = Logo::load(logo_path.as_path())?;
        render_deck(&deck, &logo)
    })
    .await
    .map_err(|e| ExportError::Pdf(format!("render task failed: {e}")))?
}

/// PDF bytes as a file download.
pub(crate) fn pdf_download(bytes: Vec<u8>) -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, PDF_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{PDF_FILENAME}\""),
            ),
        ],
        bytes,
    )
}
