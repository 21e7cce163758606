//! Chapter service: the entry point presentation code talks to.
//!
//! The `ChapterService` struct and its methods are organized by operation:
//! - [`chapter`] - Single-chapter assembly with offline fallback
//! - [`listing`] - Bounded concurrent chapter listing
//! - [`diagnostics`] - Translation corpus health report

mod chapter;
mod diagnostics;
mod listing;


pub use diagnostics::{TranslationDiagnostics, TranslationReport, TranslationStatus};

use crate::config::{Config, ListingConfig};
use crate::error::Result;
use crate::merge::MergeEngine;
use crate::remote::{AlQuranCloudClient, RemoteSource};
use crate::translations::{TranslationProvider, TranslationStore};
use std::sync::Arc;
use tracing::info;

/// Assembles chapters from the translation corpus and the upstream service
/// (cloneable - all shared parts are Arc-wrapped)
#[derive(Clone)]
pub struct ChapterService {
    /// Local translations (trait object so tests can substitute an in-memory corpus)
    pub(crate) translations: Arc<dyn TranslationProvider>,
    /// Upstream verse source
    pub(crate) remote: Arc<dyn RemoteSource>,
    /// Merge rules: edition roles and opening-formula constants
    pub(crate) engine: MergeEngine,
    /// Listing concurrency
    pub(crate) listing: ListingConfig,
}

impl ChapterService {
    /// Create a service reading translations from disk and verses from the
    /// configured upstream
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Config`] if the configuration does not
    /// validate, or [`crate::Error::Other`] if the HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        let translations = Arc::new(TranslationStore::new(config.translations.dir.clone()));
        let remote = Arc::new(AlQuranCloudClient::new(&config.remote)?);

        info!(
            translations = %config.translations.dir.display(),
            upstream = %config.remote.base_url,
            "Chapter service ready"
        );

        Ok(Self::with_providers(translations, remote, config))
    }

    /// Create a service over explicit providers
    pub fn with_providers(
        translations: Arc<dyn TranslationProvider>,
        remote: Arc<dyn RemoteSource>,
        config: &Config,
    ) -> Self {
        Self {
            translations,
            remote,
            engine: MergeEngine::from_config(config),
            listing: config.listing.clone(),
        }
    }

    /// Chapter numbers that have a translation, ascending
    pub async fn list_available(&self) -> Vec<u16> {
        self.translations.list_available().await
    }

    /// Merge rules in use
    pub fn engine(&self) -> &MergeEngine {
        &self.engine
    }
}
