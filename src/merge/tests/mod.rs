use super::*;
use crate::test_helpers::{
    BISMILLAH, FIRST_VERSE_BODY, FIRST_VERSE_TRANSLIT, reference_text, remote_chapter,
    tabasaran_text, translation,
};
use crate::types::{RemoteEdition, RemoteVerse, VerseMetadata};

fn positions(chapter: &MergedChapter) -> Vec<u32> {
    chapter.ayahs.iter().map(|v| v.number_in_surah).collect()
}

#[test]
fn chapter_fields_come_from_remote_and_title_from_translation() {
    let remote = remote_chapter(39, 5);
    let record = translation(39, "Дестеяр", &[1, 2, 3, 4, 5]);

    let merged = merge(&remote, Some(&record));

    assert_eq!(merged.number, 39);
    assert_eq!(merged.name, remote.name);
    assert_eq!(merged.english_name, "Az-Zumar");
    assert_eq!(merged.english_name_translation, "The Groups");
    assert_eq!(merged.revelation_type, "Meccan");
    assert_eq!(merged.number_of_ayahs, 5);
    assert_eq!(merged.name_tabasaran, "Дестеяр");
}

#[test]
fn without_verse_zero_there_is_no_pseudo_verse() {
    let remote = remote_chapter(39, 5);
    let record = translation(39, "Дестеяр", &[1, 2, 3, 4, 5]);

    let merged = merge(&remote, Some(&record));

    assert_eq!(merged.ayahs.len(), 5);
    assert!(merged.opening_formula().is_none());
    assert_eq!(positions(&merged), vec![1, 2, 3, 4, 5]);
    assert!(!merged.name_tabasaran.is_empty());
}

#[test]
fn verse_zero_prepends_opening_formula() {
    let remote = remote_chapter(78, 4);
    let record = translation(78, "Хабар", &[0, 1, 2, 3, 4]);

    let merged = merge(&remote, Some(&record));

    assert_eq!(merged.ayahs.len(), 5);
    assert_eq!(positions(&merged), vec![0, 1, 2, 3, 4]);

    let formula = merged.opening_formula().expect("pseudo-verse expected");
    assert_eq!(formula.number, 0);
    assert_eq!(formula.text_arabic, BISMILLAH);
    assert_eq!(formula.text_transliteration, "Bismillahir-Rahmanir-Rahim");
    assert_eq!(
        formula.text_reference,
        "Во имя Аллаха, Милостивого, Милосердного!"
    );
    assert_eq!(formula.text_tabasaran, tabasaran_text(0));
}

#[test]
fn pseudo_verse_borrows_first_verse_metadata_without_sajda() {
    let mut remote = remote_chapter(78, 3);
    for edition in &mut remote.editions {
        edition.verses[0].metadata.sajda = true;
    }
    let record = translation(78, "Хабар", &[0]);

    let merged = merge(&remote, Some(&record));
    let formula = &merged.ayahs[0];
    let first = &merged.ayahs[1];

    assert_eq!(formula.metadata.juz, first.metadata.juz);
    assert_eq!(formula.metadata.page, first.metadata.page);
    assert_eq!(formula.metadata.ruku, first.metadata.ruku);
    assert!(!formula.metadata.sajda);
    assert!(first.metadata.sajda);
}

#[test]
fn first_verse_loses_opening_formula() {
    let remote = remote_chapter(1, 7);
    let merged = merge(&remote, None);

    let first = &merged.ayahs[0];
    assert_eq!(first.number_in_surah, 1);
    assert_eq!(first.text_arabic, FIRST_VERSE_BODY);
    assert_eq!(first.text_transliteration, FIRST_VERSE_TRANSLIT);
}

#[test]
fn only_position_one_is_stripped() {
    let mut remote = remote_chapter(39, 3);
    let long = format!("{BISMILLAH} {FIRST_VERSE_BODY}");
    remote.editions[0].verses[1].text = long.clone();
    remote.editions[1].verses[1].text =
        format!("Bismillahir-Rahmanir-Rahim - {FIRST_VERSE_TRANSLIT}");

    let merged = merge(&remote, None);

    assert_eq!(merged.ayahs[1].text_arabic, long);
    assert!(
        merged.ayahs[1]
            .text_transliteration
            .starts_with("Bismillahir-Rahmanir-Rahim")
    );
}

#[test]
fn formula_only_first_verse_is_kept() {
    let mut remote = remote_chapter(1, 7);
    remote.editions[0].verses[0].text = BISMILLAH.to_string();
    remote.editions[1].verses[0].text = "Bismillahir-Rahmanir-Rahim".to_string();

    let merged = merge(&remote, None);

    assert_eq!(merged.ayahs[0].text_arabic, BISMILLAH);
    assert_eq!(
        merged.ayahs[0].text_transliteration,
        "Bismillahir-Rahmanir-Rahim"
    );
}

#[test]
fn without_translation_everything_localized_is_empty() {
    let remote = remote_chapter(39, 4);
    let merged = merge(&remote, None);

    assert_eq!(merged.name_tabasaran, "");
    assert!(merged.ayahs.iter().all(|v| v.text_tabasaran.is_empty()));
    assert_eq!(merged.ayahs.len(), 4);
}

#[test]
fn gaps_in_translation_merge_to_empty_text() {
    let remote = remote_chapter(40, 5);
    let record = translation(40, "Багъишламишдайди", &[1, 3, 5]);

    let merged = merge(&remote, Some(&record));
    let texts: Vec<&str> = merged
        .ayahs
        .iter()
        .map(|v| v.text_tabasaran.as_str())
        .collect();

    assert_eq!(
        texts,
        vec![
            tabasaran_text(1).as_str(),
            "",
            tabasaran_text(3).as_str(),
            "",
            tabasaran_text(5).as_str()
        ]
    );
}

#[test]
fn extra_translation_verses_are_dropped() {
    let remote = remote_chapter(111, 5);
    let record = translation(111, "Мес", &[1, 2, 3, 4, 5, 6, 7]);

    let merged = merge(&remote, Some(&record));

    assert_eq!(merged.ayahs.len(), 5);
    assert_eq!(positions(&merged), vec![1, 2, 3, 4, 5]);
}

#[test]
fn reference_and_metadata_are_carried_through() {
    let remote = remote_chapter(39, 4);
    let merged = merge(&remote, None);

    for (merged_verse, remote_verse) in merged.ayahs.iter().zip(&remote.editions[0].verses) {
        assert_eq!(merged_verse.number, remote_verse.number);
        assert_eq!(merged_verse.metadata, remote_verse.metadata);
        assert_eq!(
            merged_verse.text_reference,
            reference_text(remote_verse.position_in_chapter)
        );
    }
}

#[test]
fn missing_editions_default_to_empty_text() {
    let mut remote = remote_chapter(39, 3);
    remote.editions.retain(|e| e.identifier == "quran-uthmani");

    let merged = merge(&remote, None);

    assert_eq!(merged.ayahs.len(), 3);
    assert!(merged.ayahs.iter().all(|v| v.text_transliteration.is_empty()));
    assert!(merged.ayahs.iter().all(|v| v.text_reference.is_empty()));
    assert!(!merged.ayahs[1].text_arabic.is_empty());
}

#[test]
fn partial_edition_tolerates_missing_positions() {
    let mut remote = remote_chapter(39, 4);
    remote.editions[1].verses.truncate(2);

    let merged = merge(&remote, None);

    assert_eq!(merged.ayahs[1].text_transliteration, "Ayah 2");
    assert_eq!(merged.ayahs[2].text_transliteration, "");
    assert_eq!(merged.ayahs[3].text_transliteration, "");
}

#[test]
fn first_edition_drives_when_canonical_is_absent() {
    let mut remote = remote_chapter(39, 3);
    remote.editions.retain(|e| e.identifier == "ru.kuliev");

    let merged = merge(&remote, None);

    assert_eq!(positions(&merged), vec![1, 2, 3]);
    assert!(merged.ayahs.iter().all(|v| v.text_arabic.is_empty()));
    assert_eq!(merged.ayahs[0].text_reference, reference_text(1));
}

#[test]
fn output_is_strictly_ascending_even_for_unordered_upstream() {
    let mut remote = remote_chapter(39, 5);
    let canonical = &mut remote.editions[0].verses;
    canonical.reverse();
    let duplicate = canonical[0].clone();
    canonical.push(duplicate);
    canonical.push(RemoteVerse {
        number: 9999,
        position_in_chapter: 0,
        text: "stray".into(),
        metadata: VerseMetadata::default(),
    });
    let record = translation(39, "Дестеяр", &[0, 1]);

    let merged = merge(&remote, Some(&record));
    let got = positions(&merged);

    assert_eq!(got, vec![0, 1, 2, 3, 4, 5]);
    assert!(got.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn verse_count_matches_declared_count_plus_formula() {
    for (verses, indices, expected) in [
        (7u32, vec![1, 2, 3], 7usize),
        (7, vec![0, 1, 2], 8),
        (28, vec![0], 29),
        (28, vec![], 28),
    ] {
        let remote = remote_chapter(72, verses);
        let record = translation(72, "Жинар", &indices);
        let merged = merge(&remote, Some(&record));

        assert_eq!(merged.ayahs.len(), expected, "indices {indices:?}");
    }
}

#[test]
fn empty_remote_chapter_yields_only_the_formula() {
    let mut remote = remote_chapter(9, 0);
    remote.editions.clear();
    let record = translation(9, "Тавба", &[0, 1]);

    let merged = merge(&remote, Some(&record));

    assert_eq!(positions(&merged), vec![0]);
    assert_eq!(merged.ayahs[0].metadata.juz, 0);
}

#[test]
fn custom_edition_roles_are_honoured() {
    let mut remote = remote_chapter(39, 2);
    let verses = remote.editions[2]
        .verses
        .iter()
        .map(|v| RemoteVerse {
            text: format!("Verse {}", v.position_in_chapter),
            ..v.clone()
        })
        .collect();
    remote.editions.push(RemoteEdition {
        identifier: "en.sahih".into(),
        language: "en".into(),
        verses,
    });

    let engine = MergeEngine::new(
        EditionConfig {
            reference: "en.sahih".into(),
            ..Default::default()
        },
        OpeningFormulaConfig::default(),
    );
    let merged = engine.merge(&remote, None);

    assert_eq!(engine.editions().reference, "en.sahih");
    assert_eq!(merged.ayahs[1].text_reference, "Verse 2");
}

#[test]
fn engine_from_config_uses_configured_formula() {
    let mut config = Config::default();
    config.opening_formula.reference_translation = "In the name of Allah".into();
    let engine = MergeEngine::from_config(&config);

    let merged = engine.merge(
        &remote_chapter(1, 2),
        Some(&translation(1, "Ачухбан", &[0])),
    );

    assert_eq!(merged.ayahs[0].text_reference, "In the name of Allah");
}

#[test]
fn later_duplicate_translation_index_wins() {
    let remote = remote_chapter(94, 2);
    let mut record = translation(94, "Ачмиш", &[1, 2]);
    record.ayahs.push(crate::types::TranslationVerse {
        ayah_number: 2,
        translation: "corrected".into(),
    });

    let merged = merge(&remote, Some(&record));

    assert_eq!(merged.ayahs[1].text_tabasaran, "corrected");
}
