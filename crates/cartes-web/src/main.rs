use tracing_subscriber::EnvFilter;

use cartes_web::config::{LogFormat, ServerConfig};
use cartes_web::session::SessionStore;
use cartes_web::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let config = ServerConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }

    if !config.logo_path.is_file() {
        tracing::warn!(
            path = %config.logo_path.display(),
            "logo asset not found; PDF generation will fail until it exists"
        );
    }

    let sessions = SessionStore::with_idle_timeout(config.session_idle_timeout);
    let state = AppState::with_sessions(config.logo_path.clone(), sessions)?;
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!(addr = %config.bind, "listening");

    axum::serve(listener, cartes_web::app(state))
        .await
        .map_err(|e| eyre::eyre!("server error: {e}"))
}
