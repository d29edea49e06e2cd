use std::collections::HashMap;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;

use cartes_core::models::card::Card;
use cartes_core::sheet::CARDS_PER_SHEET;

use crate::error::ApiError;
use crate::routes::{pdf_download, render_sheet};
use crate::session::Session;
use crate::state::AppState;
use crate::views::{CARDS_ADDED, DECK_CLEARED, NOT_ENOUGH_CARDS, Notice};

pub async fn index(State(state): State<AppState>, session: Session) -> Result<Response, ApiError> {
    let count = state.sessions.snapshot(session.id()).await.len();
    let page = state.views.index(count, None)?;
    Ok((session, Html(page)).into_response())
}

/// Append one submission of the form (`q0..q7`, `a0..a7`) to the session deck.
///
/// Every slot becomes a card; blank fields are kept as empty text.
pub async fn add_cards(
    State(state): State<AppState>,
    session: Session,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Response, ApiError> {
    let cards = cards_from_fields(&fields);
    let count = state
        .sessions
        .with_deck(session.id(), |deck| {
            deck.add_form_batch(cards);
            deck.len()
        })
        .await;
    tracing::info!(session = %session.id(), deck_size = count, "cards added");

    let page = state.views.index(count, Some(&Notice::success(CARDS_ADDED)))?;
    Ok((session, Html(page)).into_response())
}

/// Render the session deck and send it as a download.
pub async fn generate(State(state): State<AppState>, session: Session) -> Result<Response, ApiError> {
    let deck = state.sessions.snapshot(session.id()).await;
    let count = deck.len();

    if let Err(e) = deck.printable() {
        tracing::warn!(session = %session.id(), "generation refused: {e}");
        let page = state
            .views
            .index(count, Some(&Notice::error(NOT_ENOUGH_CARDS)))?;
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, session, Html(page)).into_response());
    }

    match render_sheet(state.logo_path.clone(), deck).await {
        Ok(bytes) => Ok((session, pdf_download(bytes)).into_response()),
        Err(e) => {
            tracing::error!(session = %session.id(), "PDF generation failed: {e}");
            let notice = Notice::error(format!("La génération du PDF a échoué : {e}"));
            let page = state.views.index(count, Some(&notice))?;
            Ok((StatusCode::INTERNAL_SERVER_ERROR, session, Html(page)).into_response())
        }
    }
}

/// Drop every card collected by this session.
pub async fn reset(State(state): State<AppState>, session: Session) -> Result<Response, ApiError> {
    let existed = state.sessions.remove(session.id()).await;
    tracing::info!(session = %session.id(), existed, "deck cleared");

    let page = state.views.index(0, Some(&Notice::success(DECK_CLEARED)))?;
    Ok((session, Html(page)).into_response())
}

fn cards_from_fields(fields: &HashMap<String, String>) -> Vec<Card> {
    let field = |name: String| fields.get(&name).cloned().unwrap_or_default();
    (0..CARDS_PER_SHEET)
        .map(|i| Card::new(field(format!("q{i}")), field(format!("a{i}"))))
        .collect()
}
