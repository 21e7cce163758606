//! Translation corpus health report.

use crate::fallback::STATIC_CHAPTERS;
use crate::translations::TranslationLookup;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use utoipa::ToSchema;

use super::ChapterService;

/// Result of reading one translation file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TranslationStatus {
    /// File read and parsed
    Loaded,
    /// No file
    Missing,
    /// File present but unreadable or invalid JSON
    Malformed,
}

/// Load test of one chapter's translation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TranslationReport {
    /// Chapter number
    pub chapter: u16,
    /// Outcome
    pub status: TranslationStatus,
    /// Wall time spent reading and parsing
    pub load_time_ms: u64,
    /// Translated verse count (loaded only)
    pub ayah_count: Option<usize>,
    /// Localized title (loaded only)
    pub sura_name: Option<String>,
    /// Parse or read failure (malformed only)
    pub error: Option<String>,
}

/// Snapshot of the translation corpus
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TranslationDiagnostics {
    /// When the report was produced
    #[schema(value_type = String)]
    pub generated_at: DateTime<Utc>,
    /// Where translations are read from
    pub translations_dir: String,
    /// Chapters advertised by the corpus
    pub available: Vec<u16>,
    /// One entry per advertised or offline-table chapter, ascending
    pub reports: Vec<TranslationReport>,
}

impl ChapterService {
    /// Load every advertised translation, plus every chapter of the offline
    /// table, and report how each read went
    pub async fn translation_diagnostics(&self) -> TranslationDiagnostics {
        let available = self.list_available().await;

        let mut chapters: Vec<u16> = available
            .iter()
            .copied()
            .chain(STATIC_CHAPTERS.iter().map(|info| info.number))
            .collect();
        chapters.sort_unstable();
        chapters.dedup();

        let mut reports = Vec::with_capacity(chapters.len());
        for chapter in chapters {
            let started = Instant::now();
            let lookup = self.translations.inspect(chapter).await;
            let load_time_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

            let report = match lookup {
                TranslationLookup::Found(record) => TranslationReport {
                    chapter,
                    status: TranslationStatus::Loaded,
                    load_time_ms,
                    ayah_count: Some(record.ayahs.len()),
                    sura_name: Some(record.sura_name),
                    error: None,
                },
                TranslationLookup::Missing => TranslationReport {
                    chapter,
                    status: TranslationStatus::Missing,
                    load_time_ms,
                    ayah_count: None,
                    sura_name: None,
                    error: None,
                },
                TranslationLookup::Malformed(reason) => TranslationReport {
                    chapter,
                    status: TranslationStatus::Malformed,
                    load_time_ms,
                    ayah_count: None,
                    sura_name: None,
                    error: Some(reason),
                },
            };
            reports.push(report);
        }

        TranslationDiagnostics {
            generated_at: Utc::now(),
            translations_dir: self.translations.location(),
            available,
            reports,
        }
    }
}
