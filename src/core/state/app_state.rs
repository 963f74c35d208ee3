use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tauri::Manager;
use tracing::debug;

use crate::core::downloader::PackDownloader;
use crate::core::http::build_http_client;
use crate::core::languages::model::pack_file_name;
use crate::core::languages::{DownloadState, LanguageItem, LanguageManager};

const APP_DIR_NAME: &str = "CapturaTexto";
const SETTINGS_FILE: &str = "ocr_settings.json";
const TESSDATA_DIR_NAME: &str = "tessdata";

/// Code of the pack bundled with the application resources and seeded
/// into the tessdata directory on first run.
const BUNDLED_PACK_CODE: &str = "eng";

/// User-facing settings persisted as `ocr_settings.json` in the data
/// directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrSettings {
    pub active_language: LanguageItem,
}

impl Default for OcrSettings {
    fn default() -> Self {
        Self {
            active_language: LanguageItem::english(),
        }
    }
}

pub struct AppState {
    pub data_dir: PathBuf,
    pub language_manager: LanguageManager,
    pub downloader: Arc<PackDownloader>,
    pub http_client: Client,
    /// In-flight downloads keyed by language code. Presence in the map
    /// is the only duplicate suppression.
    pub active_downloads: HashMap<String, DownloadState>,
    pub settings: OcrSettings,
}

impl AppState {
    pub fn new(app_handle: tauri::AppHandle) -> Self {
        let data_dir = default_data_dir();
        let tessdata_dir = data_dir.join(TESSDATA_DIR_NAME);
        let _ = std::fs::create_dir_all(&tessdata_dir);
        seed_bundled_pack(&app_handle, &tessdata_dir);

        let http_client = build_http_client().expect("Failed to build HTTP client");
        let downloader = Arc::new(PackDownloader::new(http_client.clone(), Some(app_handle)));
        let language_manager = LanguageManager::new(tessdata_dir);
        let settings = load_settings_from_disk(&data_dir).unwrap_or_default();

        Self {
            data_dir,
            language_manager,
            downloader,
            http_client,
            active_downloads: HashMap::new(),
            settings,
        }
    }

    pub fn tessdata_dir(&self) -> PathBuf {
        self.data_dir.join(TESSDATA_DIR_NAME)
    }

    pub fn active_language(&self) -> LanguageItem {
        self.settings.active_language.clone()
    }

    /// Change the active language and persist the selection.
    pub fn set_active_language(&mut self, language: LanguageItem) -> std::io::Result<()> {
        debug!("Active language set to {}", language);
        self.settings.active_language = language;
        self.save_settings()
    }

    pub fn save_settings(&self) -> std::io::Result<()> {
        let settings_path = self.data_dir.join(SETTINGS_FILE);
        let json = serde_json::to_string_pretty(&self.settings)?;
        std::fs::write(settings_path, json)
    }
}

fn load_settings_from_disk(data_dir: &Path) -> Option<OcrSettings> {
    let path = data_dir.join(SETTINGS_FILE);
    let raw = std::fs::read_to_string(path).ok()?;
    serde_json::from_str(&raw).ok()
}

fn default_data_dir() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    let dir = base.join(APP_DIR_NAME);

    if !dir.exists() {
        let _ = std::fs::create_dir_all(&dir);
    }

    dir
}

/// Copy the bundled English pack out of the application resources on
/// first run, so recognition works before any download. Best effort;
/// a missing resource just means the user downloads `eng` like any
/// other pack.
fn seed_bundled_pack(app_handle: &tauri::AppHandle, tessdata_dir: &Path) {
    let dest = tessdata_dir.join(pack_file_name(BUNDLED_PACK_CODE));
    if dest.exists() {
        return;
    }

    if let Ok(resource_dir) = app_handle.path().resource_dir() {
        let bundled = resource_dir
            .join(TESSDATA_DIR_NAME)
            .join(pack_file_name(BUNDLED_PACK_CODE));
        if bundled.exists() {
            let _ = std::fs::copy(&bundled, &dest);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_default_to_english() {
        let settings = OcrSettings::default();
        assert_eq!(settings.active_language, LanguageItem::english());
    }

    #[test]
    fn settings_round_trip_through_disk_format() {
        let tmp = tempfile::tempdir().unwrap();
        let settings = OcrSettings {
            active_language: LanguageItem::new("deu", "German"),
        };

        let json = serde_json::to_string_pretty(&settings).unwrap();
        std::fs::write(tmp.path().join(SETTINGS_FILE), json).unwrap();

        let loaded = load_settings_from_disk(tmp.path()).unwrap();
        assert_eq!(loaded.active_language.code, "deu");
        assert_eq!(loaded.active_language.title, "German");
    }

    #[test]
    fn corrupt_settings_fall_back_to_none() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(SETTINGS_FILE), "{not json").unwrap();
        assert!(load_settings_from_disk(tmp.path()).is_none());
    }

    #[test]
    fn missing_settings_file_falls_back_to_none() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(load_settings_from_disk(tmp.path()).is_none());
    }
}
