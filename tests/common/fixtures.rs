//! Translation files and upstream response bodies

use serde_json::{Value, json};
use std::path::Path;

pub const BISMILLAH: &str = "بِسْمِ ٱللَّهِ ٱلرَّحْمَٰنِ ٱلرَّحِيمِ";
pub const FIRST_VERSE_BODY: &str = "ٱلْحَمْدُ لِلَّهِ رَبِّ ٱلْعَٰلَمِينَ";
pub const FIRST_VERSE_TRANSLIT: &str = "Alhamdu lillahi rabbil 'alamin";

/// Write `sura_<chapter>_tabasaran.json` with one verse per index
pub fn write_translation(dir: &Path, chapter: u16, title: &str, indices: &[u32]) {
    let ayahs: Vec<Value> = indices
        .iter()
        .map(|&index| json!({ "ayahNumber": index, "translation": format!("Табасаран {index}") }))
        .collect();
    let body = json!({ "suraName": title, "ayahs": ayahs });

    std::fs::write(
        dir.join(format!("sura_{chapter}_tabasaran.json")),
        serde_json::to_vec_pretty(&body).expect("serialize translation"),
    )
    .expect("write translation file");
}

/// Write a translation file that is not valid JSON
pub fn write_broken_translation(dir: &Path, chapter: u16) {
    std::fs::write(
        dir.join(format!("sura_{chapter}_tabasaran.json")),
        "{ \"suraName\": ",
    )
    .expect("write translation file");
}

fn verse_text(edition: &str, position: u32) -> String {
    match (edition, position) {
        ("quran-uthmani", 1) => format!("{BISMILLAH} {FIRST_VERSE_BODY}"),
        ("quran-uthmani", n) => format!("آية {n}"),
        ("en.transliteration", 1) => format!("Bismillahir-Rahmanir-Rahim - {FIRST_VERSE_TRANSLIT}"),
        ("en.transliteration", n) => format!("Ayah {n}"),
        (_, n) => format!("Аят {n}"),
    }
}

/// Upstream body for `/surah/{chapter}/editions/...`
pub fn upstream_body(chapter: u16, english_name: &str, verse_count: u32, editions: &[&str]) -> Value {
    let data: Vec<Value> = editions
        .iter()
        .map(|edition| {
            let ayahs: Vec<Value> = (1..=verse_count)
                .map(|position| {
                    json!({
                        "number": position,
                        "text": verse_text(edition, position),
                        "numberInSurah": position,
                        "juz": 1,
                        "manzil": 1,
                        "page": 1,
                        "ruku": 1,
                        "hizbQuarter": 1,
                        "sajda": false,
                    })
                })
                .collect();

            json!({
                "number": chapter,
                "name": "سُورَةُ",
                "englishName": english_name,
                "englishNameTranslation": "Test",
                "revelationType": "Meccan",
                "numberOfAyahs": verse_count,
                "ayahs": ayahs,
                "edition": { "identifier": edition, "language": "ar" },
            })
        })
        .collect();

    json!({ "code": 200, "status": "OK", "data": data })
}

/// The three default editions
pub const ALL_EDITIONS: [&str; 3] = ["quran-uthmani", "en.transliteration", "ru.kuliev"];
