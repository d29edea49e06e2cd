use thiserror::Error;

use cartes_core::error::CoreError;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to load logo asset {path}: {reason}")]
    LogoAsset { path: String, reason: String },

    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

