//! cartes-web
//!
//! HTTP surface for the flash card generator: the French entry form, one
//! deck per browser session, and the PDF download.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod session;
pub mod state;
pub mod views;

use axum::middleware as axum_mw;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/deck", get(routes::api::session_deck))
        .route("/pdf", post(routes::api::render_pdf))
        .layer(cors);

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/", get(routes::form::index))
        .route("/cards", post(routes::form::add_cards))
        .route("/generate", post(routes::form::generate))
        .route("/reset", post(routes::form::reset))
        .nest("/api", api)
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .with_state(state)
}
