//! Per-browser decks, keyed by a cookie.

use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::{IntoResponseParts, ResponseParts};
use tokio::sync::Mutex;
use uuid::Uuid;

use cartes_core::models::deck::Deck;

pub const SESSION_COOKIE: &str = "cartes_session";

/// Sessions untouched for this long are dropped.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(2 * 60 * 60);

struct SessionEntry {
    deck: Deck,
    last_seen: Instant,
}

/// In-memory decks for every live session. Lost on restart.
///
/// Idle sessions are swept on every access, so the map holds at most the
/// sessions seen within one idle timeout.
#[derive(Clone)]
pub struct SessionStore {
    decks: Arc<Mutex<HashMap<Uuid, SessionEntry>>>,
    idle_timeout: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_idle_timeout(DEFAULT_IDLE_TIMEOUT)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        Self {
            decks: Arc::new(Mutex::new(HashMap::new())),
            idle_timeout,
        }
    }

    /// Run `f` against the session's deck, creating an empty one if needed.
    pub async fn with_deck<R>(&self, id: Uuid, f: impl FnOnce(&mut Deck) -> R) -> R {
        let mut decks = self.decks.lock().await;
        let now = Instant::now();
        self.evict_idle(&mut decks, now);

        let entry = decks.entry(id).or_insert_with(|| SessionEntry {
            deck: Deck::new(),
            last_seen: now,
        });
        entry.last_seen = now;
        f(&mut entry.deck)
    }

    /// Copy of the session's deck, empty for unknown sessions.
    pub async fn snapshot(&self, id: Uuid) -> Deck {
        let mut decks = self.decks.lock().await;
        let now = Instant::now();
        self.evict_idle(&mut decks, now);

        match decks.get_mut(&id) {
            Some(entry) => {
                entry.last_seen = now;
                entry.deck.clone()
            }
            None => Deck::new(),
        }
    }

    /// Forget the session entirely. Returns whether it existed.
    pub async fn remove(&self, id: Uuid) -> bool {
        let mut decks = self.decks.lock().await;
        self.evict_idle(&mut decks, Instant::now());
        decks.remove(&id).is_some()
    }

    pub async fn session_count(&self) -> usize {
        self.decks.lock().await.len()
    }

    fn evict_idle(&self, decks: &mut HashMap<Uuid, SessionEntry>, now: Instant) {
        let before = decks.len();
        decks.retain(|_, entry| now.duration_since(entry.last_seen) < self.idle_timeout);
        let evicted = before - decks.len();
        if evicted > 0 {
            tracing::debug!(evicted, remaining = decks.len(), "dropped idle sessions");
        }
    }
}

/// Session id carried by an existing cookie, if any. Never mints one.
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get(COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|cookies| {
            cookies
                .split(';')
                .filter_map(|pair| pair.trim().split_once('='))
                .find(|(name, _)| *name == SESSION_COOKIE)
                .and_then(|(_, value)| value.parse::<Uuid>().ok())
        })
}

/// The caller's session, read from the `cartes_session` cookie.
///
/// Requests without a valid cookie get a fresh id; returning the
/// `Session` as a response part sets the cookie for them.
#[derive(Debug, Clone, Copy)]
pub struct Session {
    id: Uuid,
    is_new: bool,
}

impl Session {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn is_new(&self) -> bool {
        self.is_new
    }

    fn from_headers(headers: &HeaderMap) -> Self {
        match session_id_from_headers(headers) {
            Some(id) => Self { id, is_new: false },
            None => Self {
                id: Uuid::new_v4(),
                is_new: true,
            },
        }
    }
}

impl<S: Send + Sync> FromRequestParts<S> for Session {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers))
    }
}

impl IntoResponseParts for Session {
    type Error = Infallible;

    fn into_response_parts(self, mut res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        if self.is_new {
            let cookie = format!("{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax", self.id);
            if let Ok(value) = HeaderValue::from_str(&cookie) {
                res.headers_mut().append(SET_COOKIE, value);
            }
        }
        Ok(res)
    }
}
