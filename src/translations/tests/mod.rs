use super::*;
use tempfile::tempdir;

fn write(dir: &Path, name: &str, contents: &str) {
    std::fs::write(dir.join(name), contents).expect("write fixture");
}

const CHAPTER_39: &str = r#"{
    "suraName": "Дестеяр",
    "ayahs": [
        { "ayahNumber": 1, "translation": "Китаб авудуб Аллагьдихьан аъ." },
        { "ayahNumber": 2, "translation": "Гьякьнахъ, Учу Вуз китаб гъиргуну." }
    ]
}"#;

#[test]
fn file_name_round_trip() {
    assert_eq!(translation_file_name(78), "sura_78_tabasaran.json");
    assert_eq!(chapter_from_file_name("sura_78_tabasaran.json"), Some(78));
}

#[test]
fn file_name_pattern_rejects_near_misses() {
    for name in [
        "sura_78_tabasaran.json.bak",
        "sura__tabasaran.json",
        "sura_x_tabasaran.json",
        "sura_78_russian.json",
        "notes.txt",
        "sura_99999999_tabasaran.json",
    ] {
        assert_eq!(chapter_from_file_name(name), None, "{name} should not match");
    }
}

#[tokio::test]
async fn list_available_is_sorted_and_filtered() {
    let dir = tempdir().unwrap();
    write(dir.path(), "sura_100_tabasaran.json", "{}");
    write(dir.path(), "sura_1_tabasaran.json", "{}");
    write(dir.path(), "sura_39_tabasaran.json", "{}");
    write(dir.path(), "README.md", "");
    write(dir.path(), "sura_40_tabasaran.json.orig", "{}");

    let store = TranslationStore::new(dir.path());

    assert_eq!(store.list_available().await, vec![1, 39, 100]);
}

#[tokio::test]
async fn list_available_on_missing_dir_is_empty() {
    let dir = tempdir().unwrap();
    let store = TranslationStore::new(dir.path().join("does-not-exist"));

    assert!(store.list_available().await.is_empty());
}

#[tokio::test]
async fn load_parses_record_and_uses_requested_number() {
    let dir = tempdir().unwrap();
    write(dir.path(), "sura_39_tabasaran.json", CHAPTER_39);

    let store = TranslationStore::new(dir.path());
    let record = store.load(39).await.expect("translation should load");

    assert_eq!(record.number, 39);
    assert_eq!(record.sura_name, "Дестеяр");
    assert_eq!(record.ayahs.len(), 2);
    assert!(!record.has_opening_formula());
}

#[tokio::test]
async fn filename_wins_over_declared_number() {
    let dir = tempdir().unwrap();
    write(
        dir.path(),
        "sura_47_tabasaran.json",
        r#"{"suraNumber": 48, "suraName": "Мугьаммад", "ayahs": []}"#,
    );

    let store = TranslationStore::new(dir.path());
    let record = store.load(47).await.unwrap();

    assert_eq!(record.number, 47);
}

#[tokio::test]
async fn missing_file_is_absent() {
    let dir = tempdir().unwrap();
    let store = TranslationStore::new(dir.path());

    assert_eq!(store.inspect(5).await, TranslationLookup::Missing);
    assert!(store.load(5).await.is_none());
}

#[tokio::test]
async fn malformed_file_is_absent_but_diagnosable() {
    let dir = tempdir().unwrap();
    write(dir.path(), "sura_1_tabasaran.json", r#"{"suraName": "Ачухбан", "ayahs": [}"#);
    write(dir.path(), "sura_2_tabasaran.json", r#"{"ayahs": []}"#);

    let store = TranslationStore::new(dir.path());

    for chapter in [1, 2] {
        assert!(store.load(chapter).await.is_none());
        match store.inspect(chapter).await {
            TranslationLookup::Malformed(reason) => assert!(reason.starts_with("parse failed")),
            other => panic!("expected malformed for {chapter}, got {other:?}"),
        }
    }
}

#[test]
fn lookup_collapses_to_record() {
    assert!(TranslationLookup::Missing.into_record().is_none());
    assert!(
        TranslationLookup::Malformed("bad".into())
            .into_record()
            .is_none()
    );

    let record = TranslationRecord {
        number: 1,
        sura_name: "Ачухбан".into(),
        ayahs: vec![],
    };
    assert_eq!(
        TranslationLookup::Found(record.clone()).into_record(),
        Some(record)
    );
}

#[test]
fn location_is_directory() {
    let store = TranslationStore::new("/srv/translations");
    assert_eq!(store.location(), "/srv/translations");
    assert_eq!(
        store.path_for(1),
        PathBuf::from("/srv/translations/sura_1_tabasaran.json")
    );
}
