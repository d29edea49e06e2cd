use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::{IntoResponse, Response};
use axum::Json;

use cartes_core::models::deck::Deck;

use crate::error::ApiError;
use crate::routes::{pdf_download, render_sheet};
use crate::session::Session;
use crate::state::AppState;

/// The caller's session deck as JSON.
pub async fn session_deck(State(state): State<AppState>, session: Session) -> impl IntoResponse {
    let deck = state.sessions.snapshot(session.id()).await;
    (session, Json(deck))
}

/// Render a caller-supplied deck. Nothing is stored.
pub async fn render_pdf(
    State(state): State<AppState>,
    body: Result<Json<Deck>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(deck) = body?;
    let bytes = render_sheet(state.logo_path.clone(), deck).await?;
    Ok(pdf_download(bytes).into_response())
}
