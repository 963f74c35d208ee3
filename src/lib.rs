mod commands;
mod core;

use std::sync::Arc;
use tauri::Manager;
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::core::state::AppState;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,capturatexto_lib=debug")),
        )
        .init();

    tracing::info!("CapturaTexto starting...");

    tauri::Builder::default()
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let handle = app.handle().clone();
            let state = AppState::new(handle);
            app.manage(Arc::new(Mutex::new(state)));
            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::get_available_languages,
            commands::get_installed_languages,
            commands::get_active_language,
            commands::set_active_language,
            commands::get_active_downloads,
            commands::download_language,
            commands::remove_language,
            commands::open_tessdata_folder,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
