// ─── CapturaTexto Core ───
// Modular backend architecture for a professional OCR capture tool.
//
// Architecture:
//   core/
//     languages/  — Language catalog + installed pack manager
//     downloader/ — Streaming pack downloads with repository fallback
//     state/      — Global application state + settings
//
// The recognition engine itself and the capture pipeline live behind
// the GUI; this crate only prepares and tracks the language data the
// engine consumes.

pub mod downloader;
pub mod error;
pub mod http;
pub mod languages;
pub mod state;
