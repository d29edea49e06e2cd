use std::path::PathBuf;
use std::sync::Arc;

use crate::session::SessionStore;
use crate::views::Views;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub views: Arc<Views>,
    /// Read on every render, so a replaced file is picked up without restart.
    pub logo_path: Arc<PathBuf>,
}

impl AppState {
    pub fn new(logo_path: PathBuf) -> Result<Self, tera::Error> {
        Self::with_sessions(logo_path, SessionStore::new())
    }

    pub fn with_sessions(logo_path: PathBuf, sessions: SessionStore) -> Result<Self, tera::Error> {
        Ok(Self {
            sessions,
            views: Arc::new(Views::new()?),
            logo_path: Arc::new(logo_path),
        })
    }
}
