use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::session::DEFAULT_IDLE_TIMEOUT;

const DEFAULT_BIND: &str = "127.0.0.1:8501";
const DEFAULT_LOGO: &str = "assets/logo.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Server settings, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `CARTES_BIND`
    pub bind: SocketAddr,
    /// `CARTES_LOGO`
    pub logo_path: PathBuf,
    /// `CARTES_LOG_FORMAT`: `json` or `pretty`.
    pub log_format: LogFormat,
    /// `CARTES_SESSION_IDLE_SECS`
    pub session_idle_timeout: Duration,
}

impl ServerConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key/value source. Unset keys take their defaults;
    /// malformed values are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let bind_raw = lookup("CARTES_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind = bind_raw
            .parse::<SocketAddr>()
            .map_err(|e| eyre::eyre!("invalid CARTES_BIND '{bind_raw}': {e}"))?;

        let logo_path = lookup("CARTES_LOGO")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOGO));

        let log_format = match lookup("CARTES_LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(eyre::eyre!(
                    "invalid CARTES_LOG_FORMAT '{other}' (expected 'json' or 'pretty')"
                ));
            }
        };

        let session_idle_timeout = match lookup("CARTES_SESSION_IDLE_SECS") {
            None => DEFAULT_IDLE_TIMEOUT,
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(eyre::eyre!(
                        "invalid CARTES_SESSION_IDLE_SECS '{raw}' (expected a positive number of seconds)"
                    ));
                }
            },
        };

        Ok(Self {
            bind,
            logo_path,
            log_format,
            session_idle_timeout,
        })
    }
}
