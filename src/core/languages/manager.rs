use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::catalog;
use super::model::{self, InstalledPack, PACK_EXTENSION};
use crate::core::error::{OcrError, OcrResult};

/// Tracks which language packs exist on disk.
///
/// The directory listing is cached between calls; every mutation of
/// the tessdata directory (finished download, removal) must call
/// `mark_dirty` so the next listing re-reads the disk. Callers can
/// also force a refresh.
pub struct LanguageManager {
    /// Directory where `<code>.traineddata` files live.
    tessdata_dir: PathBuf,
    /// Cached file stems found in the tessdata dir, unfiltered.
    installed_cache: Vec<String>,
    cache_dirty: bool,
}

impl LanguageManager {
    pub fn new(tessdata_dir: PathBuf) -> Self {
        Self {
            tessdata_dir,
            installed_cache: Vec::new(),
            cache_dirty: true,
        }
    }

    pub fn tessdata_dir(&self) -> &Path {
        &self.tessdata_dir
    }

    /// Full path of the pack file for a code.
    pub fn pack_path(&self, code: &str) -> PathBuf {
        model::pack_path(&self.tessdata_dir, code)
    }

    /// Invalidate the cached listing. Cheap; the re-read happens on the
    /// next `installed_codes` call.
    pub fn mark_dirty(&mut self) {
        self.cache_dirty = true;
    }

    /// Installed pack codes, diffed against the catalog and sorted by
    /// display name. File stems the catalog does not know are logged
    /// and skipped.
    pub async fn installed_codes(&mut self, force: bool) -> OcrResult<Vec<String>> {
        if self.cache_dirty || force {
            self.refresh_cache().await?;
        }

        let mut recognized: Vec<String> = Vec::new();
        for stem in &self.installed_cache {
            if !catalog::is_supported(stem) {
                warn!("Unrecognized language code in tessdata dir: {}", stem);
                continue;
            }
            recognized.push(stem.clone());
        }

        recognized.sort_by_key(|code| catalog::display_name(code).unwrap_or_default());
        Ok(recognized)
    }

    /// Display names of the installed packs, sorted.
    pub async fn installed_names(&mut self, force: bool) -> OcrResult<Vec<&'static str>> {
        let codes = self.installed_codes(force).await?;
        let mut names: Vec<&'static str> = codes
            .iter()
            .filter_map(|code| catalog::display_name(code))
            .collect();
        names.sort_unstable();
        names.dedup();
        Ok(names)
    }

    /// Installed packs with their on-disk sizes, sorted by display name.
    pub async fn installed_packs(&mut self, force: bool) -> OcrResult<Vec<InstalledPack>> {
        let codes = self.installed_codes(force).await?;

        let mut packs = Vec::with_capacity(codes.len());
        for code in codes {
            let size_bytes = tokio::fs::metadata(self.pack_path(&code))
                .await
                .map(|m| m.len())
                .unwrap_or(0);
            let title = catalog::display_name(&code).unwrap_or_default().to_string();
            packs.push(InstalledPack {
                code,
                title,
                size_bytes,
            });
        }

        Ok(packs)
    }

    pub async fn is_installed(&mut self, code: &str) -> OcrResult<bool> {
        Ok(self.installed_codes(false).await?.iter().any(|c| c == code))
    }

    /// Delete an installed pack from disk.
    pub async fn remove(&mut self, code: &str) -> OcrResult<()> {
        let path = self.pack_path(code);
        if !path.exists() {
            return Err(OcrError::PackNotInstalled(code.to_string()));
        }

        tokio::fs::remove_file(&path)
            .await
            .map_err(|source| OcrError::Io { path, source })?;

        self.mark_dirty();
        info!("Removed language pack {}", code);
        Ok(())
    }

    /// Re-read the tessdata directory. Collects the stem of every
    /// regular file with the pack extension; anything else (partial
    /// downloads, stray files, subdirectories) is ignored here.
    async fn refresh_cache(&mut self) -> OcrResult<()> {
        self.installed_cache.clear();

        if !self.tessdata_dir.exists() {
            self.cache_dirty = false;
            return Ok(());
        }

        let mut entries = tokio::fs::read_dir(&self.tessdata_dir)
            .await
            .map_err(|source| OcrError::Io {
                path: self.tessdata_dir.clone(),
                source,
            })?;

        while let Some(entry) = entries.next_entry().await.map_err(|source| OcrError::Io {
            path: self.tessdata_dir.clone(),
            source,
        })? {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let is_pack = path
                .extension()
                .map(|ext| ext == PACK_EXTENSION)
                .unwrap_or(false);
            if !is_pack {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                self.installed_cache.push(stem.to_string());
            }
        }

        self.cache_dirty = false;
        debug!("Cached installed pack stems: {:?}", self.installed_cache);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn write_pack(dir: &Path, name: &str, contents: &[u8]) {
        tokio::fs::write(dir.join(name), contents).await.unwrap();
    }

    #[tokio::test]
    async fn listing_filters_and_sorts_by_display_name() {
        let tmp = tempfile::tempdir().unwrap();
        write_pack(tmp.path(), "deu.traineddata", b"d").await;
        write_pack(tmp.path(), "eng.traineddata", b"e").await;
        write_pack(tmp.path(), "zzz.traineddata", b"?").await;
        write_pack(tmp.path(), "notes.txt", b"n").await;
        write_pack(tmp.path(), "fra.traineddata.part", b"f").await;

        let mut manager = LanguageManager::new(tmp.path().to_path_buf());
        let codes = manager.installed_codes(false).await.unwrap();

        // English < German, unknown stems and non-pack files skipped
        assert_eq!(codes, vec!["eng".to_string(), "deu".to_string()]);

        let names = manager.installed_names(false).await.unwrap();
        assert_eq!(names, vec!["English", "German"]);
    }

    #[tokio::test]
    async fn listing_is_cached_until_dirty_or_forced() {
        let tmp = tempfile::tempdir().unwrap();
        write_pack(tmp.path(), "eng.traineddata", b"e").await;

        let mut manager = LanguageManager::new(tmp.path().to_path_buf());
        assert_eq!(manager.installed_codes(false).await.unwrap().len(), 1);

        write_pack(tmp.path(), "spa.traineddata", b"s").await;
        assert_eq!(
            manager.installed_codes(false).await.unwrap().len(),
            1,
            "cached listing must not see the new file"
        );

        assert_eq!(manager.installed_codes(true).await.unwrap().len(), 2);

        write_pack(tmp.path(), "ita.traineddata", b"i").await;
        manager.mark_dirty();
        assert_eq!(manager.installed_codes(false).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn remove_deletes_file_and_invalidates_cache() {
        let tmp = tempfile::tempdir().unwrap();
        write_pack(tmp.path(), "eng.traineddata", b"e").await;
        write_pack(tmp.path(), "deu.traineddata", b"d").await;

        let mut manager = LanguageManager::new(tmp.path().to_path_buf());
        assert!(manager.is_installed("deu").await.unwrap());

        manager.remove("deu").await.unwrap();
        assert!(!tmp.path().join("deu.traineddata").exists());
        assert!(!manager.is_installed("deu").await.unwrap());
    }

    #[tokio::test]
    async fn remove_missing_pack_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let mut manager = LanguageManager::new(tmp.path().to_path_buf());

        let err = manager.remove("deu").await.unwrap_err();
        assert!(matches!(err, OcrError::PackNotInstalled(code) if code == "deu"));
    }

    #[tokio::test]
    async fn installed_packs_report_sizes() {
        let tmp = tempfile::tempdir().unwrap();
        write_pack(tmp.path(), "eng.traineddata", &[0u8; 64]).await;

        let mut manager = LanguageManager::new(tmp.path().to_path_buf());
        let packs = manager.installed_packs(false).await.unwrap();
        assert_eq!(packs.len(), 1);
        assert_eq!(packs[0].code, "eng");
        assert_eq!(packs[0].title, "English");
        assert_eq!(packs[0].size_bytes, 64);
    }

    #[tokio::test]
    async fn missing_tessdata_dir_lists_empty() {
        let mut manager = LanguageManager::new(PathBuf::from("/definitely/not/here"));
        assert!(manager.installed_codes(false).await.unwrap().is_empty());
    }
}
