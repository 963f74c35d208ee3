pub mod client;

pub use client::{PackDownloader, PackProgress, TESSDATA_BEST_URL, TESSDATA_URL};
