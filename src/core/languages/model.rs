use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File extension of a language data pack (`eng.traineddata`).
pub const PACK_EXTENSION: &str = "traineddata";

/// Suffix appended while a pack is still being written. The extension
/// keeps partial files out of the installed listing, which matches on
/// `PACK_EXTENSION` only.
pub const PARTIAL_SUFFIX: &str = "part";

/// A (code, display name) pair handed to the frontend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageItem {
    pub code: String,
    pub title: String,
}

impl LanguageItem {
    pub fn new(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
        }
    }

    /// Default active language shipped with the application.
    pub fn english() -> Self {
        Self::new("eng", "English")
    }
}

impl std::fmt::Display for LanguageItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title, self.code)
    }
}

/// An installed pack as reported to the frontend.
#[derive(Debug, Clone, Serialize)]
pub struct InstalledPack {
    pub code: String,
    pub title: String,
    pub size_bytes: u64,
}

/// Bookkeeping entry for one in-flight download, keyed by code in the
/// application state. Presence in the map is what suppresses duplicate
/// downloads of the same pack.
#[derive(Debug, Clone, Serialize)]
pub struct DownloadState {
    pub code: String,
    pub started_at: DateTime<Utc>,
}

impl DownloadState {
    pub fn begin(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            started_at: Utc::now(),
        }
    }
}

/// File name of the pack for a code (`<code>.traineddata`).
pub fn pack_file_name(code: &str) -> String {
    format!("{code}.{PACK_EXTENSION}")
}

/// Full path of the pack for a code inside `tessdata_dir`.
pub fn pack_path(tessdata_dir: &Path, code: &str) -> PathBuf {
    tessdata_dir.join(pack_file_name(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_file_naming() {
        assert_eq!(pack_file_name("eng"), "eng.traineddata");
        assert_eq!(
            pack_path(Path::new("/data/tessdata"), "chi_sim"),
            PathBuf::from("/data/tessdata/chi_sim.traineddata")
        );
    }

    #[test]
    fn default_language_is_english() {
        let item = LanguageItem::english();
        assert_eq!(item.code, "eng");
        assert_eq!(item.title, "English");
        assert_eq!(item.to_string(), "English (eng)");
    }
}
