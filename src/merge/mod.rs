//! Reconciliation of upstream verse text with a local translation.
//!
//! The upstream chapter is authoritative for verse positions. The translation
//! is layered on top: positions it lacks merge to empty text, positions it has
//! beyond the upstream count are dropped, and its optional verse 0 becomes a
//! pseudo-verse carrying the opening formula. Nothing in this module performs
//! I/O or fails.

use crate::config::{Config, EditionConfig, OpeningFormulaConfig};
use crate::types::{
    MergedChapter, MergedVerse, RemoteChapter, RemoteEdition, RemoteVerse, TranslationRecord,
};
use std::collections::HashMap;
use tracing::debug;

pub mod opening_formula;

pub use opening_formula::{strip_canonical, strip_transliteration};

/// Position of the first ordinary verse, the only one carrying the formula
const FIRST_VERSE: u32 = 1;

/// Merges remote chapters with translations
///
/// Holds the edition roles (which identifier is canonical, transliteration or
/// reference) and the opening-formula constants.
#[derive(Debug, Clone, Default)]
pub struct MergeEngine {
    editions: EditionConfig,
    formula: OpeningFormulaConfig,
}

impl MergeEngine {
    /// Create an engine with explicit edition roles and formula constants
    pub fn new(editions: EditionConfig, formula: OpeningFormulaConfig) -> Self {
        Self { editions, formula }
    }

    /// Create an engine from the crate configuration
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.remote.editions.clone(),
            config.opening_formula.clone(),
        )
    }

    /// Edition roles used by this engine
    pub fn editions(&self) -> &EditionConfig {
        &self.editions
    }

    /// Reconcile `remote` with an optional translation
    pub fn merge(
        &self,
        remote: &RemoteChapter,
        translation: Option<&TranslationRecord>,
    ) -> MergedChapter {
        let canonical = position_map(remote.edition(&self.editions.canonical));
        let transliteration = position_map(remote.edition(&self.editions.transliteration));
        let reference = position_map(remote.edition(&self.editions.reference));

        let localized: HashMap<u32, &str> = translation
            .map(|record| {
                record
                    .ayahs
                    .iter()
                    .map(|verse| (verse.ayah_number, verse.translation.as_str()))
                    .collect()
            })
            .unwrap_or_default();

        let driving = self.driving_verses(remote);
        let mut ayahs = Vec::with_capacity(driving.len() + 1);

        if let Some(formula_translation) = localized.get(&0) {
            let mut metadata = driving.first().map(|v| v.metadata).unwrap_or_default();
            metadata.sajda = false;

            ayahs.push(MergedVerse {
                number: 0,
                number_in_surah: 0,
                text_arabic: self.formula.canonical_text.clone(),
                text_transliteration: self.formula.transliteration_prefix.clone(),
                text_reference: self.formula.reference_translation.clone(),
                text_tabasaran: (*formula_translation).to_string(),
                metadata,
            });
        }

        for verse in &driving {
            let position = verse.position_in_chapter;
            let mut text_arabic = text_at(&canonical, position).to_string();
            let mut text_transliteration = text_at(&transliteration, position).to_string();

            if position == FIRST_VERSE {
                text_arabic = strip_canonical(&text_arabic, self.formula.canonical_prefix_chars);
                text_transliteration = strip_transliteration(
                    &text_transliteration,
                    &self.formula.transliteration_prefix,
                );
            }

            ayahs.push(MergedVerse {
                number: verse.number,
                number_in_surah: position,
                text_arabic,
                text_transliteration,
                text_reference: text_at(&reference, position).to_string(),
                text_tabasaran: text_at(&localized, position).to_string(),
                metadata: verse.metadata,
            });
        }

        let unmatched = localized
            .keys()
            .filter(|&&index| index != 0 && !driving.iter().any(|v| v.position_in_chapter == index))
            .count();
        if unmatched > 0 {
            debug!(
                chapter = remote.number,
                unmatched, "Translation has verses beyond the upstream chapter; dropped"
            );
        }

        debug!(
            chapter = remote.number,
            verses = ayahs.len(),
            translated = translation.is_some(),
            "Merged chapter"
        );

        MergedChapter {
            number: remote.number,
            name: remote.name.clone(),
            name_tabasaran: translation
                .map(|record| record.sura_name.clone())
                .unwrap_or_default(),
            english_name: remote.english_name.clone(),
            english_name_translation: remote.english_name_translation.clone(),
            revelation_type: remote.revelation_type.clone(),
            number_of_ayahs: remote.number_of_ayahs,
            ayahs,
        }
    }

    /// Verses that define the output sequence: the canonical edition if
    /// present, otherwise the first edition; ascending, one per position.
    fn driving_verses<'a>(&self, remote: &'a RemoteChapter) -> Vec<&'a RemoteVerse> {
        let edition = remote
            .edition(&self.editions.canonical)
            .or_else(|| remote.editions.first());

        let mut verses: Vec<&RemoteVerse> = edition
            .map(|e| {
                e.verses
                    .iter()
                    .filter(|v| v.position_in_chapter >= FIRST_VERSE)
                    .collect()
            })
            .unwrap_or_default();

        verses.sort_by_key(|v| v.position_in_chapter);
        verses.dedup_by_key(|v| v.position_in_chapter);
        verses
    }
}

/// Merge with the default edition roles and formula constants
pub fn merge(remote: &RemoteChapter, translation: Option<&TranslationRecord>) -> MergedChapter {
    MergeEngine::default().merge(remote, translation)
}

fn position_map(edition: Option<&RemoteEdition>) -> HashMap<u32, &str> {
    edition
        .map(|e| {
            e.verses
                .iter()
                .map(|v| (v.position_in_chapter, v.text.as_str()))
                .collect()
        })
        .unwrap_or_default()
}

fn text_at<'a>(map: &HashMap<u32, &'a str>, position: u32) -> &'a str {
    map.get(&position).copied().unwrap_or("")
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;
