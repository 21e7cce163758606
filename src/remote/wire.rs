//! Response shapes of the alquran.cloud API

use crate::types::{RemoteChapter, RemoteEdition, RemoteVerse, VerseMetadata};
use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
pub(super) struct ApiResponse {
    pub code: u16,
    #[serde(default)]
    pub status: String,
    pub data: OneOrMany<SuraApi>,
}

/// `/editions/` requests answer with a list, plain `/surah/N` with an object
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(super) enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SuraApi {
    pub number: u16,
    pub name: String,
    pub english_name: String,
    #[serde(default)]
    pub english_name_translation: String,
    pub revelation_type: String,
    pub number_of_ayahs: u32,
    pub ayahs: Vec<AyahApi>,
    pub edition: EditionApi,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct AyahApi {
    pub number: u32,
    pub text: String,
    pub number_in_surah: u32,
    #[serde(default)]
    pub juz: u32,
    #[serde(default)]
    pub manzil: u32,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub ruku: u32,
    #[serde(default)]
    pub hizb_quarter: u32,
    #[serde(default, deserialize_with = "sajda_flag")]
    pub sajda: bool,
}

#[derive(Debug, Deserialize)]
pub(super) struct EditionApi {
    pub identifier: String,
    #[serde(default)]
    pub language: String,
}

/// `sajda` is `false` or an object such as `{"id": 1, "recommended": true, "obligatory": false}`
fn sajda_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Bool(flag) => flag,
        serde_json::Value::Object(_) => true,
        _ => false,
    })
}

impl ApiResponse {
    /// Convert to the domain shape; the first record supplies chapter fields
    pub fn into_chapter(self) -> Result<RemoteChapter, String> {
        if !(200..300).contains(&self.code) {
            return Err(format!(
                "upstream reported code {} ({})",
                self.code, self.status
            ));
        }

        let mut records = self.data.into_vec().into_iter();
        let first = records
            .next()
            .ok_or_else(|| "response contained no chapter records".to_string())?;

        let mut chapter = RemoteChapter {
            number: first.number,
            name: first.name.clone(),
            english_name: first.english_name.clone(),
            english_name_translation: first.english_name_translation.clone(),
            revelation_type: first.revelation_type.clone(),
            number_of_ayahs: first.number_of_ayahs,
            editions: Vec::new(),
        };

        chapter.editions.push(first.into_edition());
        chapter
            .editions
            .extend(records.map(SuraApi::into_edition));

        Ok(chapter)
    }
}

impl SuraApi {
    fn into_edition(self) -> RemoteEdition {
        RemoteEdition {
            identifier: self.edition.identifier,
            language: self.edition.language,
            verses: self.ayahs.into_iter().map(AyahApi::into_verse).collect(),
        }
    }
}

impl AyahApi {
    fn into_verse(self) -> RemoteVerse {
        RemoteVerse {
            number: self.number,
            position_in_chapter: self.number_in_surah,
            text: self.text,
            metadata: VerseMetadata {
                juz: self.juz,
                manzil: self.manzil,
                page: self.page,
                ruku: self.ruku,
                hizb_quarter: self.hizb_quarter,
                sajda: self.sajda,
            },
        }
    }
}
