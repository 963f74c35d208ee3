use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use reqwest::Client;
use tauri::{AppHandle, Emitter};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::core::error::{OcrError, OcrResult};
use crate::core::languages::model::{pack_file_name, PARTIAL_SUFFIX};

/// Remote repositories holding `.traineddata` packs, tried in order.
/// The best-quality repository carries the larger LSTM models; the
/// standard repository still hosts packs the best one lacks.
pub const TESSDATA_BEST_URL: &str = "https://github.com/tesseract-ocr/tessdata_best/raw/main/";
pub const TESSDATA_URL: &str = "https://github.com/tesseract-ocr/tessdata/raw/main/";

/// Payload emitted to the frontend on download progress.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PackProgress {
    pub code: String,
    pub percent: u8,
    pub bytes_downloaded: u64,
    pub total_bytes: Option<u64>,
}

/// URL of the pack file for a code under the given repository base.
pub fn pack_url(repo_base: &str, code: &str) -> String {
    format!(
        "{}/{}",
        repo_base.trim_end_matches('/'),
        pack_file_name(code)
    )
}

fn percent_of(bytes_downloaded: u64, total_bytes: Option<u64>) -> u8 {
    match total_bytes {
        Some(total) if total > 0 => ((bytes_downloaded * 100) / total).min(100) as u8,
        _ => 0,
    }
}

/// Streaming pack downloader with repository fallback.
pub struct PackDownloader {
    client: Client,
    /// Optional Tauri app handle for emitting progress events.
    app_handle: Option<AppHandle>,
}

impl PackDownloader {
    pub fn new(client: Client, app_handle: Option<AppHandle>) -> Self {
        Self { client, app_handle }
    }

    /// Download the pack for `code` into `tessdata_dir`.
    ///
    /// Tries the best-quality repository first, then the standard one;
    /// a single attempt each. The pack streams into a `.part` file and
    /// is renamed into place only on success, so an aborted transfer
    /// never shows up in the installed listing.
    pub async fn fetch_pack(&self, code: &str, tessdata_dir: &Path) -> OcrResult<PathBuf> {
        tokio::fs::create_dir_all(tessdata_dir)
            .await
            .map_err(|source| OcrError::Io {
                path: tessdata_dir.to_path_buf(),
                source,
            })?;

        let final_path = tessdata_dir.join(pack_file_name(code));
        let part_path = tessdata_dir.join(format!("{}.{}", pack_file_name(code), PARTIAL_SUFFIX));
        debug!("Pack will be written to: {:?}", final_path);

        let best_url = pack_url(TESSDATA_BEST_URL, code);
        if let Err(error) = self.download_to(&best_url, &part_path, code).await {
            debug!("{} not found in tessdata_best ({}), checking tessdata", code, error);

            let fallback_url = pack_url(TESSDATA_URL, code);
            if let Err(error) = self.download_to(&fallback_url, &part_path, code).await {
                debug!("{} was not found at tessdata either ({})", code, error);
                let _ = tokio::fs::remove_file(&part_path).await;
                return Err(OcrError::PackUnavailable(code.to_string()));
            }
        }

        tokio::fs::rename(&part_path, &final_path)
            .await
            .map_err(|source| OcrError::Io {
                path: final_path.clone(),
                source,
            })?;

        info!("Downloaded language pack {} -> {:?}", code, final_path);
        Ok(final_path)
    }

    /// Stream one URL to `dest`, emitting a progress event whenever the
    /// integer percentage advances.
    async fn download_to(&self, url: &str, dest: &Path, code: &str) -> OcrResult<()> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OcrError::DownloadFailed {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let total_bytes = response.content_length();
        let mut bytes_downloaded: u64 = 0;
        let mut last_percent: Option<u8> = None;

        // Write inside a block so the handle is dropped before the
        // caller renames the file — critical on Windows.
        {
            let mut file =
                tokio::fs::File::create(dest)
                    .await
                    .map_err(|source| OcrError::Io {
                        path: dest.to_path_buf(),
                        source,
                    })?;

            let mut stream = response.bytes_stream();
            while let Some(item) = stream.next().await {
                let chunk = item?;
                file.write_all(&chunk)
                    .await
                    .map_err(|source| OcrError::Io {
                        path: dest.to_path_buf(),
                        source,
                    })?;

                bytes_downloaded += chunk.len() as u64;
                let percent = percent_of(bytes_downloaded, total_bytes);
                if last_percent != Some(percent) {
                    last_percent = Some(percent);
                    self.emit_progress(code, percent, bytes_downloaded, total_bytes);
                }
            }

            file.flush().await.map_err(|source| OcrError::Io {
                path: dest.to_path_buf(),
                source,
            })?;
        }

        debug!("Downloaded: {} -> {:?}", url, dest);
        Ok(())
    }

    fn emit_progress(
        &self,
        code: &str,
        percent: u8,
        bytes_downloaded: u64,
        total_bytes: Option<u64>,
    ) {
        if let Some(handle) = &self.app_handle {
            let _ = handle.emit(
                "language-download-progress",
                PackProgress {
                    code: code.to_string(),
                    percent,
                    bytes_downloaded,
                    total_bytes,
                },
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_url_construction() {
        assert_eq!(
            pack_url(TESSDATA_BEST_URL, "eng"),
            "https://github.com/tesseract-ocr/tessdata_best/raw/main/eng.traineddata"
        );
        assert_eq!(
            pack_url("https://example.com/repo", "chi_sim"),
            "https://example.com/repo/chi_sim.traineddata"
        );
    }

    #[test]
    fn percent_saturates_and_handles_unknown_total() {
        assert_eq!(percent_of(0, Some(200)), 0);
        assert_eq!(percent_of(50, Some(200)), 25);
        assert_eq!(percent_of(200, Some(200)), 100);
        assert_eq!(percent_of(400, Some(200)), 100);
        assert_eq!(percent_of(400, None), 0);
        assert_eq!(percent_of(400, Some(0)), 0);
    }
}
