//! Local Tabasaran translation corpus.
//!
//! One JSON file per chapter, named `sura_<N>_tabasaran.json`:
//!
//! ```json
//! {
//!   "suraName": "Ачухбан",
//!   "ayahs": [
//!     { "ayahNumber": 0, "translation": "..." },
//!     { "ayahNumber": 1, "translation": "..." }
//!   ]
//! }
//! ```
//!
//! A file that is missing and a file that fails to parse look the same to
//! callers of [`TranslationProvider::load`]; [`TranslationProvider::inspect`]
//! keeps them apart for diagnostics.

use crate::types::{TranslationRecord, TranslationVerse};
use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Outcome of one attempt to read a translation file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationLookup {
    /// File exists and parsed
    Found(TranslationRecord),
    /// No file for this chapter
    Missing,
    /// File exists but could not be read or parsed
    Malformed(String),
}

impl TranslationLookup {
    /// Collapse to the narrow "present or absent" view
    pub fn into_record(self) -> Option<TranslationRecord> {
        match self {
            TranslationLookup::Found(record) => Some(record),
            TranslationLookup::Missing | TranslationLookup::Malformed(_) => None,
        }
    }
}

/// Source of Tabasaran translations
///
/// The default implementation is [`TranslationStore`]; tests substitute
/// in-memory providers.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
    /// Chapter numbers with a translation, ascending
    ///
    /// Never fails: an unreadable corpus yields an empty list.
    async fn list_available(&self) -> Vec<u16>;

    /// Read one translation, keeping missing and malformed apart
    async fn inspect(&self, chapter: u16) -> TranslationLookup;

    /// Read one translation; `None` when missing or malformed
    async fn load(&self, chapter: u16) -> Option<TranslationRecord> {
        match self.inspect(chapter).await {
            TranslationLookup::Found(record) => Some(record),
            TranslationLookup::Missing => {
                debug!(chapter, "No translation file");
                None
            }
            TranslationLookup::Malformed(reason) => {
                warn!(chapter, reason = %reason, "Ignoring malformed translation file");
                None
            }
        }
    }

    /// Where translations come from, for logs and diagnostics
    fn location(&self) -> String;
}

/// File name of a chapter's translation
pub fn translation_file_name(chapter: u16) -> String {
    format!("sura_{chapter}_tabasaran.json")
}

/// Chapter number encoded in a translation file name
pub fn chapter_from_file_name(name: &str) -> Option<u16> {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let pattern = PATTERN.get_or_init(|| {
        #[allow(clippy::expect_used)]
        Regex::new(r"^sura_(\d+)_tabasaran\.json$").expect("static pattern is valid")
    });

    pattern
        .captures(name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// On-disk shape of a translation file
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslationFile {
    #[serde(default)]
    sura_number: Option<u16>,
    sura_name: String,
    ayahs: Vec<TranslationVerse>,
}

/// Translation files in a directory
#[derive(Debug, Clone)]
pub struct TranslationStore {
    dir: PathBuf,
}

impl TranslationStore {
    /// Create a store rooted at `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory this store reads from
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of a chapter's translation file
    pub fn path_for(&self, chapter: u16) -> PathBuf {
        self.dir.join(translation_file_name(chapter))
    }

    fn parse(chapter: u16, contents: &str) -> Result<TranslationRecord, serde_json::Error> {
        let file: TranslationFile = serde_json::from_str(contents)?;

        if let Some(declared) = file.sura_number.filter(|&n| n != chapter) {
            warn!(
                chapter,
                declared, "Translation file declares a different chapter; using file name"
            );
        }

        Ok(TranslationRecord {
            number: chapter,
            sura_name: file.sura_name,
            ayahs: file.ayahs,
        })
    }
}

#[async_trait]
impl TranslationProvider for TranslationStore {
    async fn list_available(&self) -> Vec<u16> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(
                    dir = %self.dir.display(),
                    error = %e,
                    "Translations directory is not readable"
                );
                return Vec::new();
            }
        };

        let mut chapters = Vec::new();
        loop {
            match entries.next_entry().await {
                Ok(Some(entry)) => {
                    let name = entry.file_name();
                    let name = name.to_string_lossy();
                    match chapter_from_file_name(&name) {
                        Some(chapter) => {
                            debug!(file = %name, chapter, "Found translation file");
                            chapters.push(chapter);
                        }
                        None => debug!(file = %name, "Skipping file outside naming pattern"),
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    warn!(dir = %self.dir.display(), error = %e, "Stopped reading translations directory");
                    break;
                }
            }
        }

        chapters.sort_unstable();
        chapters.dedup();
        debug!(count = chapters.len(), "Listed available translations");
        chapters
    }

    async fn inspect(&self, chapter: u16) -> TranslationLookup {
        let path = self.path_for(chapter);

        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return TranslationLookup::Missing;
            }
            Err(e) => return TranslationLookup::Malformed(format!("read failed: {e}")),
        };

        match Self::parse(chapter, &contents) {
            Ok(record) => TranslationLookup::Found(record),
            Err(e) => TranslationLookup::Malformed(format!("parse failed: {e}")),
        }
    }

    fn location(&self) -> String {
        self.dir.display().to_string()
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;
