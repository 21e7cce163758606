//! Offline chapter metadata used when the upstream service is unreachable.
//!
//! Only the chapters that shipped with translations carry an entry. A chapter
//! built from this table has translation text but no canonical script.

use crate::error::{Error, Result};
use crate::types::{ChapterSummary, MergedChapter, MergedVerse, TranslationRecord, VerseMetadata};
use std::collections::HashMap;
use tracing::debug;

/// Static description of one chapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticChapterInfo {
    /// Chapter number
    pub number: u16,
    /// Canonical (Arabic) name
    pub name: &'static str,
    /// Transliterated name
    pub english_name: &'static str,
    /// English meaning of the name
    pub english_name_translation: &'static str,
    /// "Meccan" or "Medinan"
    pub revelation_type: &'static str,
    /// Declared verse count
    pub number_of_ayahs: u32,
}

const fn info(
    number: u16,
    name: &'static str,
    english_name: &'static str,
    english_name_translation: &'static str,
    revelation_type: &'static str,
    number_of_ayahs: u32,
) -> StaticChapterInfo {
    StaticChapterInfo {
        number,
        name,
        english_name,
        english_name_translation,
        revelation_type,
        number_of_ayahs,
    }
}

/// Chapters with offline metadata, ascending by number
pub static STATIC_CHAPTERS: [StaticChapterInfo; 13] = [
    info(1, "الفاتحة", "Al-Faatiha", "The Opening", "Meccan", 7),
    info(39, "الزمر", "Az-Zumar", "The Groups", "Meccan", 75),
    info(40, "غافر", "Ghafir", "The Forgiver", "Meccan", 85),
    info(47, "محمد", "Muhammad", "Muhammad", "Medinan", 38),
    info(70, "المعارج", "Al-Ma'arij", "The Ascending Stairways", "Meccan", 44),
    info(72, "الجن", "Al-Jinn", "The Jinn", "Meccan", 28),
    info(76, "الإنسان", "Al-Insaan", "The Man", "Medinan", 31),
    info(78, "النبأ", "An-Naba", "The Tidings", "Meccan", 40),
    info(89, "الفجر", "Al-Fajr", "The Dawn", "Meccan", 30),
    info(94, "الشرح", "Ash-Sharh", "The Relief", "Meccan", 8),
    info(99, "الزلزلة", "Az-Zalzala", "The Earthquake", "Medinan", 8),
    info(100, "العاديات", "Al-Aadiyaat", "The Courser", "Meccan", 11),
    info(111, "المسد", "Al-Masad", "The Palm Fibre", "Meccan", 5),
];

/// Look up the offline metadata for a chapter
pub fn static_info(chapter: u16) -> Option<&'static StaticChapterInfo> {
    STATIC_CHAPTERS
        .binary_search_by_key(&chapter, |entry| entry.number)
        .ok()
        .map(|index| &STATIC_CHAPTERS[index])
}

impl StaticChapterInfo {
    /// Listing entry for this chapter with the given localized title
    pub fn summary(&self, name_tabasaran: impl Into<String>) -> ChapterSummary {
        ChapterSummary {
            number: self.number,
            name: self.name.to_string(),
            name_tabasaran: name_tabasaran.into(),
            english_name: self.english_name.to_string(),
            english_name_translation: self.english_name_translation.to_string(),
        }
    }
}

/// Build a translation-only chapter from the offline table
///
/// Verses `1..=N` are emitted, `N` being the table's verse count, each with
/// the translation text for its position (empty if the translator skipped
/// it). A position-0 verse is prepended iff the translation has index 0.
///
/// # Errors
///
/// Returns [`Error::NoFallbackData`] when the chapter has no table entry.
pub fn build(chapter: u16, translation: Option<&TranslationRecord>) -> Result<MergedChapter> {
    let info = static_info(chapter).ok_or(Error::NoFallbackData { chapter })?;

    let localized: HashMap<u32, &str> = translation
        .map(|record| {
            record
                .ayahs
                .iter()
                .map(|verse| (verse.ayah_number, verse.translation.as_str()))
                .collect()
        })
        .unwrap_or_default();

    let first = if localized.contains_key(&0) { 0 } else { 1 };
    let ayahs: Vec<MergedVerse> = (first..=info.number_of_ayahs)
        .map(|position| MergedVerse {
            number: 0,
            number_in_surah: position,
            text_arabic: String::new(),
            text_transliteration: String::new(),
            text_reference: String::new(),
            text_tabasaran: localized
                .get(&position)
                .copied()
                .unwrap_or_default()
                .to_string(),
            metadata: VerseMetadata::default(),
        })
        .collect();

    debug!(chapter, verses = ayahs.len(), "Built chapter from offline metadata");

    Ok(MergedChapter {
        number: info.number,
        name: info.name.to_string(),
        name_tabasaran: translation
            .map(|record| record.sura_name.clone())
            .unwrap_or_default(),
        english_name: info.english_name.to_string(),
        english_name_translation: info.english_name_translation.to_string(),
        revelation_type: info.revelation_type.to_string(),
        number_of_ayahs: info.number_of_ayahs,
        ayahs,
    })
}
