//! # tabasaran-quran
//!
//! Backend library for a Quran reader with a Tabasaran translation.
//!
//! Each chapter is assembled from two sources: the public alquran.cloud API
//! (Arabic text, transliteration, Russian reference translation and verse
//! metadata) and a local corpus of Tabasaran translation files. The merge
//! lines the sources up by verse position, strips the opening formula from
//! the first verse and renders a translator-supplied formula as verse 0.
//! When the upstream API is down, a small offline table keeps translated
//! chapters readable.
//!
//! ## Quick Start
//!
//! ```no_run
//! use tabasaran_quran::{ChapterService, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = ChapterService::new(&Config::default())?;
//!
//!     for summary in service.list_chapters().await {
//!         println!("{} {}", summary.number, summary.name_tabasaran);
//!     }
//!
//!     let chapter = service.get_chapter(1).await?;
//!     for verse in &chapter.ayahs {
//!         println!("{}: {}", verse.number_in_surah, verse.text_tabasaran);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// REST API module
pub mod api;
/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Offline chapter metadata
pub mod fallback;
/// Verse reconciliation
pub mod merge;
/// Upstream verse service
pub mod remote;
/// Chapter service (decomposed into per-operation submodules)
pub mod service;
/// Local translation corpus
pub mod translations;
/// Core types
pub mod types;


// Re-export commonly used types
pub use config::Config;
pub use error::{ApiError, Error, ErrorDetail, Result, ToHttpStatus};
pub use merge::{MergeEngine, merge};
pub use remote::{AlQuranCloudClient, RemoteSource};
pub use service::{ChapterService, TranslationDiagnostics, TranslationReport, TranslationStatus};
pub use translations::{TranslationLookup, TranslationProvider, TranslationStore};
pub use types::{
    ChapterSummary, MergedChapter, MergedVerse, RemoteChapter, RemoteEdition, RemoteVerse,
    TranslationRecord, TranslationVerse, VerseMetadata,
};

/// Resolve once the process is asked to stop.
///
/// - **Unix:** SIGTERM or SIGINT, falling back to `ctrl_c` if the handlers
///   cannot be registered.
/// - **Windows/other:** Ctrl+C.
///
/// Used as the graceful-shutdown future of [`api::start_api_server`].
pub async fn shutdown_signal() {
    wait_for_signal().await;
    tracing::info!("Shutdown requested");
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    match (
        signal(SignalKind::terminate()),
        signal(SignalKind::interrupt()),
    ) {
        (Ok(mut sigterm), Ok(mut sigint)) => {
            tokio::select! {
                _ = sigterm.recv() => tracing::info!("Received SIGTERM signal"),
                _ = sigint.recv() => tracing::info!("Received SIGINT signal (Ctrl+C)"),
            }
        }
        (Err(e), _) | (_, Err(e)) => {
            tracing::warn!(error = %e, "Could not register signal handlers, using ctrl_c fallback");
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for Ctrl+C signal");
            }
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Received Ctrl+C signal"),
        Err(e) => tracing::error!(error = %e, "Failed to listen for Ctrl+C signal"),
    }
}
