//! Core types for tabasaran-quran
//!
//! Three shapes flow through the pipeline: [`RemoteChapter`] (upstream verse
//! text), [`TranslationRecord`] (local Tabasaran translation) and
//! [`MergedChapter`] (the reconciled result handed to presentation code).

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// First valid chapter number
pub const FIRST_CHAPTER: u16 = 1;

/// Last valid chapter number
pub const LAST_CHAPTER: u16 = 114;

/// Validate a raw chapter number, returning it narrowed to `u16`
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] unless `1 <= number <= 114`.
pub fn checked_chapter(number: u32) -> Result<u16> {
    match u16::try_from(number) {
        Ok(n) if (FIRST_CHAPTER..=LAST_CHAPTER).contains(&n) => Ok(n),
        _ => Err(Error::OutOfRange { number }),
    }
}

/// Parse a chapter identifier taken from a URL path
///
/// # Errors
///
/// Returns [`Error::InvalidChapter`] for anything that is not a decimal
/// number, and [`Error::OutOfRange`] as [`checked_chapter`] does.
pub fn parse_chapter(raw: &str) -> Result<u16> {
    let number = raw
        .trim()
        .parse::<u32>()
        .map_err(|_| Error::InvalidChapter {
            raw: raw.to_string(),
        })?;
    checked_chapter(number)
}

/// Positional markers of a verse, carried through the merge unchanged
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VerseMetadata {
    /// Juz (1/30 division)
    pub juz: u32,
    /// Manzil (1/7 division)
    pub manzil: u32,
    /// Page in the standard Medina mushaf
    pub page: u32,
    /// Ruku (section)
    pub ruku: u32,
    /// Hizb quarter
    pub hizb_quarter: u32,
    /// Whether the verse carries a prostration mark
    pub sajda: bool,
}

/// One verse of one upstream edition
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RemoteVerse {
    /// Global verse id (1..=6236)
    pub number: u32,
    /// 1-based position within the chapter
    pub position_in_chapter: u32,
    /// Raw text for this edition
    pub text: String,
    /// Positional markers
    #[serde(flatten)]
    pub metadata: VerseMetadata,
}

/// All verses of one chapter in one edition
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RemoteEdition {
    /// Edition identifier (e.g. "quran-uthmani")
    pub identifier: String,
    /// Edition language code
    pub language: String,
    /// Verses in upstream order
    pub verses: Vec<RemoteVerse>,
}

/// A chapter as returned by the upstream service
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RemoteChapter {
    /// Chapter number (1-114)
    pub number: u16,
    /// Canonical (Arabic) name
    pub name: String,
    /// Transliterated name (e.g. "Al-Faatiha")
    pub english_name: String,
    /// English meaning of the name (e.g. "The Opening")
    pub english_name_translation: String,
    /// Place of revelation ("Meccan" / "Medinan")
    pub revelation_type: String,
    /// Declared verse count
    pub number_of_ayahs: u32,
    /// One entry per requested edition
    pub editions: Vec<RemoteEdition>,
}

impl RemoteChapter {
    /// Find an edition by identifier
    pub fn edition(&self, identifier: &str) -> Option<&RemoteEdition> {
        self.editions.iter().find(|e| e.identifier == identifier)
    }
}

/// One translated verse from a local translation file
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslationVerse {
    /// Verse index; 0 is the opening formula rendered separately
    pub ayah_number: u32,
    /// Translated text
    pub translation: String,
}

/// A chapter's Tabasaran translation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TranslationRecord {
    /// Chapter number
    pub number: u16,
    /// Localized chapter title
    pub sura_name: String,
    /// Translated verses in file order
    pub ayahs: Vec<TranslationVerse>,
}

impl TranslationRecord {
    /// Whether the translator rendered the opening formula as verse 0
    pub fn has_opening_formula(&self) -> bool {
        self.ayahs.iter().any(|a| a.ayah_number == 0)
    }
}

/// One reconciled verse
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MergedVerse {
    /// Global verse id (0 for the opening-formula pseudo-verse and fallback verses)
    pub number: u32,
    /// Position in chapter; 0 is the opening-formula pseudo-verse
    pub number_in_surah: u32,
    /// Canonical Arabic text
    pub text_arabic: String,
    /// Latin transliteration
    pub text_transliteration: String,
    /// Reference translation (fixed third language)
    pub text_reference: String,
    /// Tabasaran translation, empty when the translator skipped the verse
    pub text_tabasaran: String,
    /// Positional markers
    #[serde(flatten)]
    pub metadata: VerseMetadata,
}

/// A chapter ready for presentation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MergedChapter {
    /// Chapter number
    pub number: u16,
    /// Canonical (Arabic) name
    pub name: String,
    /// Localized title (empty when no translation was merged)
    pub name_tabasaran: String,
    /// Transliterated name
    pub english_name: String,
    /// English meaning of the name
    pub english_name_translation: String,
    /// Place of revelation
    pub revelation_type: String,
    /// Declared verse count (excludes the pseudo-verse 0)
    pub number_of_ayahs: u32,
    /// Verses ordered by position
    pub ayahs: Vec<MergedVerse>,
}

impl MergedChapter {
    /// The opening-formula pseudo-verse, if the translation supplied one
    pub fn opening_formula(&self) -> Option<&MergedVerse> {
        self.ayahs.first().filter(|v| v.number_in_surah == 0)
    }
}

/// One entry of the chapter listing
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ChapterSummary {
    /// Chapter number
    pub number: u16,
    /// Canonical (Arabic) name
    pub name: String,
    /// Localized title
    pub name_tabasaran: String,
    /// Transliterated name
    pub english_name: String,
    /// English meaning of the name
    pub english_name_translation: String,
}
