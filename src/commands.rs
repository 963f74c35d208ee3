use std::process::Command;
use std::sync::Arc;

use serde::Serialize;
use tauri::Emitter;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::core::error::OcrError;
use crate::core::languages::{catalog, DownloadState, InstalledPack, LanguageItem};
use crate::core::state::AppState;

// ── Event payloads ──────────────────────────────────────
// One named event per lifecycle step, mirrored by the frontend:
//   language-added              download accepted, pack queued
//   language-download-progress  emitted by the downloader itself
//   language-downloaded         pack on disk and listed
//   language-download-failed    both repositories gave up
//   language-removed            pack deleted
//   active-language-changed     recognition language switched

#[derive(Debug, Clone, Serialize)]
struct LanguageLifecycleEvent {
    code: String,
}

#[derive(Debug, Clone, Serialize)]
struct LanguageDownloadedEvent {
    code: String,
    title: String,
}

#[derive(Debug, Clone, Serialize)]
struct LanguageDownloadFailedEvent {
    code: String,
    message: String,
}

#[derive(Debug, Clone, Serialize)]
struct ActiveLanguageChangedEvent {
    code: String,
    title: String,
}

fn emit_lifecycle(app_handle: &tauri::AppHandle, event: &str, code: &str) {
    let _ = app_handle.emit(
        event,
        LanguageLifecycleEvent {
            code: code.to_string(),
        },
    );
}

fn emit_language_downloaded(app_handle: &tauri::AppHandle, code: &str, title: &str) {
    let _ = app_handle.emit(
        "language-downloaded",
        LanguageDownloadedEvent {
            code: code.to_string(),
            title: title.to_string(),
        },
    );
}

fn emit_download_failed(app_handle: &tauri::AppHandle, code: &str, message: String) {
    let _ = app_handle.emit(
        "language-download-failed",
        LanguageDownloadFailedEvent {
            code: code.to_string(),
            message,
        },
    );
}

fn emit_active_language_changed(app_handle: &tauri::AppHandle, language: &LanguageItem) {
    let _ = app_handle.emit(
        "active-language-changed",
        ActiveLanguageChangedEvent {
            code: language.code.clone(),
            title: language.title.clone(),
        },
    );
}

// ── Commands ────────────────────────────────────────────

/// Every language the catalog supports, sorted by display name.
#[tauri::command]
pub async fn get_available_languages() -> Result<Vec<LanguageItem>, OcrError> {
    Ok(catalog::all_items())
}

/// Packs currently present in the tessdata directory. Pass `force` to
/// bypass the listing cache.
#[tauri::command]
pub async fn get_installed_languages(
    state: tauri::State<'_, Arc<Mutex<AppState>>>,
    force: Option<bool>,
) -> Result<Vec<InstalledPack>, OcrError> {
    let mut state = state.lock().await;
    state
        .language_manager
        .installed_packs(force.unwrap_or(false))
        .await
}

#[tauri::command]
pub async fn get_active_language(
    state: tauri::State<'_, Arc<Mutex<AppState>>>,
) -> Result<LanguageItem, OcrError> {
    let state = state.lock().await;
    Ok(state.active_language())
}

#[tauri::command]
pub async fn set_active_language(
    app_handle: tauri::AppHandle,
    state: tauri::State<'_, Arc<Mutex<AppState>>>,
    code: String,
) -> Result<LanguageItem, OcrError> {
    let language = catalog::item(&code).ok_or_else(|| OcrError::UnknownLanguage(code.clone()))?;

    let mut state = state.lock().await;
    state
        .set_active_language(language.clone())
        .map_err(|e| OcrError::Other(format!("No se pudo guardar ocr_settings.json: {e}")))?;
    drop(state);

    emit_active_language_changed(&app_handle, &language);
    Ok(language)
}

/// Downloads currently in flight.
#[tauri::command]
pub async fn get_active_downloads(
    state: tauri::State<'_, Arc<Mutex<AppState>>>,
) -> Result<Vec<DownloadState>, OcrError> {
    let state = state.lock().await;
    let mut downloads: Vec<DownloadState> = state.active_downloads.values().cloned().collect();
    downloads.sort_by(|a, b| a.code.cmp(&b.code));
    Ok(downloads)
}

/// Start downloading a pack in the background.
///
/// Returns as soon as the download is registered; completion is
/// reported through the `language-downloaded` / `language-download-
/// failed` events, with `language-download-progress` in between.
#[tauri::command]
pub async fn download_language(
    app_handle: tauri::AppHandle,
    state: tauri::State<'_, Arc<Mutex<AppState>>>,
    code: String,
) -> Result<(), OcrError> {
    let language = catalog::item(&code).ok_or_else(|| OcrError::UnknownLanguage(code.clone()))?;

    let state_arc = state.inner().clone();
    let (downloader, tessdata_dir) = {
        let mut state = state_arc.lock().await;
        if state.active_downloads.contains_key(&code) {
            return Err(OcrError::DownloadInProgress(code));
        }
        state
            .active_downloads
            .insert(code.clone(), DownloadState::begin(code.as_str()));
        (state.downloader.clone(), state.tessdata_dir())
    };

    emit_lifecycle(&app_handle, "language-added", &code);
    info!("Starting download of language pack {}", code);

    tauri::async_runtime::spawn(async move {
        let result = downloader.fetch_pack(&code, &tessdata_dir).await;

        {
            let mut state = state_arc.lock().await;
            state.active_downloads.remove(&code);
            state.language_manager.mark_dirty();
        }

        match result {
            Ok(_) => emit_language_downloaded(&app_handle, &code, &language.title),
            Err(error) => {
                warn!("Download of language pack {} failed: {}", code, error);
                emit_download_failed(&app_handle, &code, error.to_string());
            }
        }
    });

    Ok(())
}

/// Delete an installed pack.
#[tauri::command]
pub async fn remove_language(
    app_handle: tauri::AppHandle,
    state: tauri::State<'_, Arc<Mutex<AppState>>>,
    code: String,
) -> Result<(), OcrError> {
    let mut state = state.lock().await;
    state.language_manager.remove(&code).await?;
    drop(state);

    emit_lifecycle(&app_handle, "language-removed", &code);
    Ok(())
}

/// Reveal the tessdata directory in the platform file manager.
#[tauri::command]
pub async fn open_tessdata_folder(
    state: tauri::State<'_, Arc<Mutex<AppState>>>,
) -> Result<(), OcrError> {
    let state = state.lock().await;
    let folder = state.tessdata_dir();
    drop(state);

    #[cfg(target_os = "windows")]
    let mut command = {
        let mut cmd = Command::new("explorer");
        cmd.arg(&folder);
        cmd
    };

    #[cfg(target_os = "macos")]
    let mut command = {
        let mut cmd = Command::new("open");
        cmd.arg(&folder);
        cmd
    };

    #[cfg(all(unix, not(target_os = "macos")))]
    let mut command = {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(&folder);
        cmd
    };

    let status = command.status().map_err(|source| OcrError::Io {
        path: folder.clone(),
        source,
    })?;

    if !status.success() {
        return Err(OcrError::Other(format!(
            "No se pudo abrir el explorador para {:?}",
            folder
        )));
    }

    Ok(())
}
