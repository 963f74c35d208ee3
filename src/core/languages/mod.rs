pub mod catalog;
pub mod manager;
pub mod model;

pub use manager::LanguageManager;
pub use model::{DownloadState, InstalledPack, LanguageItem};
