use std::path::PathBuf;
use thiserror::Error;

/// Central error type for the entire OCR backend.
/// Every module returns `Result<T, OcrError>`.
#[derive(Debug, Error)]
pub enum OcrError {
    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── Network ─────────────────────────────────────────
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Download failed for {url}: HTTP {status}")]
    DownloadFailed { url: String, status: u16 },

    // ── Language packs ──────────────────────────────────
    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),

    #[error("Language pack not installed: {0}")]
    PackNotInstalled(String),

    #[error("Language pack {0} not found in any repository")]
    PackUnavailable(String),

    #[error("Download already in progress for {0}")]
    DownloadInProgress(String),

    // ── JSON ────────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ── Generic ─────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the crate.
pub type OcrResult<T> = Result<T, OcrError>;

impl From<std::io::Error> for OcrError {
    fn from(source: std::io::Error) -> Self {
        OcrError::Io {
            path: PathBuf::new(),
            source,
        }
    }
}

// ── Serialization for Tauri IPC ─────────────────────────
// Tauri commands require the error type to implement `Serialize`.
impl serde::Serialize for OcrError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
